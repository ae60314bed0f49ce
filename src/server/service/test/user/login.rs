use super::*;

fn profile(kakao_id: i64, name: &str) -> CreateUserParams {
    CreateUserParams {
        kakao_id,
        name: name.to_string(),
        email: None,
    }
}

/// Tests the first login of a Kakao account.
///
/// Expected: Ok with a new user named after the nickname
#[tokio::test]
async fn creates_user_on_first_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db).login(profile(1001, "bunny")).await?;

    assert_eq!(user.kakao_id, 1001);
    assert_eq!(user.name, "bunny");
    assert!(user.is_active());

    Ok(())
}

/// Tests a returning user.
///
/// Verifies that the existing row is returned and no duplicate is created, even when
/// the nickname changed on Kakao.
///
/// Expected: Ok with the same user ID and stored name
#[tokio::test]
async fn returns_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .kakao_id(1002)
        .name("original")
        .build()
        .await?;

    let user = UserService::new(db).login(profile(1002, "changed")).await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.name, "original");

    Ok(())
}

/// Tests a first login whose nickname is already taken.
///
/// Expected: Ok with the Kakao id appended to the name
#[tokio::test]
async fn suffixes_taken_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .kakao_id(1)
        .name("bunny")
        .build()
        .await?;

    let user = UserService::new(db).login(profile(1003, "bunny")).await?;

    assert_eq!(user.name, "bunny#1003");

    Ok(())
}

/// Tests a first login where both the nickname and its Kakao-id form are taken.
///
/// Verifies that sign-up keeps counting up instead of hitting the unique name index.
///
/// Expected: Ok with `bunny#1005-3`
#[tokio::test]
async fn keeps_suffixing_until_name_is_free() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (kakao_id, name) in [(1, "bunny"), (2, "bunny#1005"), (3, "bunny#1005-2")] {
        factory::user::UserFactory::new(db)
            .kakao_id(kakao_id)
            .name(name)
            .build()
            .await?;
    }

    let user = UserService::new(db).login(profile(1005, "bunny")).await?;

    assert_eq!(user.kakao_id, 1005);
    assert_eq!(user.name, "bunny#1005-3");

    Ok(())
}

/// Tests logging in with a withdrawn account.
///
/// Expected: Err(InactiveUser)
#[tokio::test]
async fn rejects_withdrawn_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .kakao_id(1004)
        .status(Status::Inactive)
        .build()
        .await?;

    let result = UserService::new(db).login(profile(1004, "gone")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InactiveUser(_)))
    ));

    Ok(())
}
