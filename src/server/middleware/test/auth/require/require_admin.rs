use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Verifies that the AuthGuard grants access when the user is authenticated,
/// exists in the database, and has admin privileges.
///
/// Expected: Ok(User) with admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_admin(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let returned_user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(returned_user.id, user.id);
    assert!(returned_user.admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .admin(false)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}
