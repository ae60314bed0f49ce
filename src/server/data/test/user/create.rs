use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository creates an ACTIVE, non-admin user with the
/// given Kakao id, name, and email.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            kakao_id: 123456789,
            name: "TestUser".to_string(),
            email: Some("test@example.com".to_string()),
        })
        .await?;

    assert_eq!(user.kakao_id, 123456789);
    assert_eq!(user.name, "TestUser");
    assert_eq!(user.email.as_deref(), Some("test@example.com"));
    assert!(!user.admin);
    assert_eq!(user.status, Status::Active);

    Ok(())
}

/// Tests creating a user with a Kakao id that is already linked.
///
/// Expected: Err from the unique constraint on kakao_id
#[tokio::test]
async fn fails_for_duplicate_kakao_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .kakao_id(42)
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            kakao_id: 42,
            name: "Someone Else".to_string(),
            email: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
