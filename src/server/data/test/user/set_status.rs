use super::*;

/// Tests marking a user INACTIVE.
///
/// Verifies that the row is kept and only the status changes.
///
/// Expected: Ok(true) and status INACTIVE
#[tokio::test]
async fn marks_user_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.set_status(user.id, Status::Inactive).await?);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.status, Status::Inactive);
    assert_eq!(stored.name, user.name);

    Ok(())
}
