use super::*;

/// Tests the name check for a taken and a free name.
///
/// Expected: true for "Taken", false for "Free"
#[tokio::test]
async fn detects_taken_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Taken").build().await?;

    let repo = UserRepository::new(db);
    assert!(repo.name_exists("Taken").await?);
    assert!(!repo.name_exists("Free").await?);

    Ok(())
}
