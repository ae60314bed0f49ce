use super::*;

/// Tests a logged in, active user passes an empty permission check.
///
/// Expected: Ok(User) matching the session user
#[tokio::test]
async fn grants_access_to_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Member")
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let returned_user = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.name, "Member");

    Ok(())
}

/// Tests a request without a logged in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_for_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests a withdrawn user with a still-valid session.
///
/// Expected: Err(AuthError::InactiveUser)
#[tokio::test]
async fn denies_access_to_withdrawn_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .status(Status::Inactive)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InactiveUser(_)))
    ));

    Ok(())
}
