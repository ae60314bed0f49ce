use super::*;

/// Tests renaming a user.
///
/// Expected: Ok(true) and the stored name changed
#[tokio::test]
async fn renames_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.update_name(user.id, "Renamed").await?;

    assert!(updated);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.name, "Renamed");

    Ok(())
}

/// Tests renaming a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db).update_name(999, "Nobody").await?;

    assert!(!updated);

    Ok(())
}
