//! User service for business logic.
//!
//! This module provides the `UserService` for account-level operations: resolving the
//! active user, renaming, withdrawing, and signing in with a provider profile. It works
//! with domain models rather than DTOs.

use entity::sea_orm_active_enums::Status;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, user::UserError, AppError},
    model::user::{CreateUserParams, User},
};

/// Service providing business logic for user accounts.
///
/// This struct holds a reference to the database connection and provides methods
/// for user lookups, profile updates, and provider logins.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user who has not withdrawn.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(User)` - Active user
    /// - `Err(UserError::UserNotFound)` - No user with that ID
    /// - `Err(AuthError::InactiveUser)` - User has withdrawn
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_active_user(&self, user_id: i32) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(UserError::UserNotFound(user_id).into());
        };

        if !user.is_active() {
            return Err(AuthError::InactiveUser(user_id).into());
        }

        Ok(user)
    }

    /// Changes the user's display name.
    ///
    /// Surrounding whitespace is trimmed. Renaming to the current name is a no-op.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `name` - New display name
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new name
    /// - `Err(AppError::BadRequest)` - Name is blank
    /// - `Err(UserError::DuplicateName)` - Another user already uses the name
    /// - `Err(UserError::UserNotFound)` - No user with that ID
    pub async fn rename(&self, user_id: i32, name: &str) -> Result<User, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(UserError::UserNotFound(user_id).into());
        };
        if user.name == name {
            return Ok(user);
        }

        if user_repo.name_exists(name).await? {
            return Err(UserError::DuplicateName(name.to_string()).into());
        }

        if let Err(err) = user_repo.update_name(user_id, name).await {
            return match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(UserError::DuplicateName(name.to_string()).into())
                }
                _ => Err(err.into()),
            };
        }
        txn.commit().await?;

        tracing::info!("User {} renamed to {}", user_id, name);

        Ok(User {
            name: name.to_string(),
            ..user
        })
    }

    /// Withdraws the user's account by marking it INACTIVE.
    ///
    /// # Returns
    /// - `Ok(())` - Account is INACTIVE
    /// - `Err(UserError::UserNotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn withdraw(&self, user_id: i32) -> Result<(), AppError> {
        let updated = UserRepository::new(self.db)
            .set_status(user_id, Status::Inactive)
            .await?;
        if !updated {
            return Err(UserError::UserNotFound(user_id).into());
        }

        tracing::info!("User {} withdrew", user_id);

        Ok(())
    }

    /// Signs in with a provider profile, creating the user on first login.
    ///
    /// A first-time user whose nickname is already taken gets the Kakao id appended
    /// to it, e.g. `rabbit#12345`. If that is taken too, a counter follows
    /// (`rabbit#12345-2`, `rabbit#12345-3`, ...) until a free name is found.
    ///
    /// # Arguments
    /// - `params` - Kakao id, nickname and optional email from the provider
    ///
    /// # Returns
    /// - `Ok(User)` - The existing or newly created user
    /// - `Err(AuthError::InactiveUser)` - The linked account has withdrawn
    /// - `Err(UserError::DuplicateName)` - A concurrent sign-up took the chosen name
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn login(&self, params: CreateUserParams) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if let Some(user) = user_repo.find_by_kakao_id(params.kakao_id).await? {
            if !user.is_active() {
                return Err(AuthError::InactiveUser(user.id).into());
            }

            tracing::info!("User {} logged in", user.id);
            return Ok(user);
        }

        let name = available_name(&user_repo, &params.name, params.kakao_id).await?;

        let user = match user_repo
            .create(CreateUserParams {
                name: name.clone(),
                ..params
            })
            .await
        {
            Ok(user) => user,
            Err(err) => {
                return match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        Err(UserError::DuplicateName(name).into())
                    }
                    _ => Err(err.into()),
                };
            }
        };
        txn.commit().await?;

        tracing::info!("User {} signed up as {}", user.id, user.name);

        Ok(user)
    }
}

/// Picks the first free display name for a new user, starting with the nickname.
async fn available_name<C: ConnectionTrait>(
    user_repo: &UserRepository<'_, C>,
    nickname: &str,
    kakao_id: i64,
) -> Result<String, DbErr> {
    if !user_repo.name_exists(nickname).await? {
        return Ok(nickname.to_string());
    }

    let base = format!("{}#{}", nickname, kakao_id);
    let mut candidate = base.clone();
    let mut attempt = 1;
    while user_repo.name_exists(&candidate).await? {
        attempt += 1;
        candidate = format!("{}-{}", base, attempt);
    }

    Ok(candidate)
}
