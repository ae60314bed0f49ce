//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, lookups by id, Kakao id and name, renames, and account
//! status changes, converting entity models to domain models at the boundary.

use chrono::Utc;
use entity::sea_orm_active_enums::Status;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to a database connection (or transaction) and provides
/// methods for creating, reading, and updating user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new ACTIVE, non-admin user.
    ///
    /// # Arguments
    /// - `params` - Kakao id, display name and optional email
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert, including a unique violation
    ///   on Kakao id or name
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            kakao_id: ActiveValue::Set(params.kakao_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            admin: ActiveValue::Set(false),
            status: ActiveValue::Set(Status::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their ID.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user found with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their Kakao account ID.
    ///
    /// Used during login to tell returning users from first-time users.
    ///
    /// # Arguments
    /// - `kakao_id` - Kakao account ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user linked to that Kakao account
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_kakao_id(&self, kakao_id: i64) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::KakaoId.eq(kakao_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether any user already uses the given display name.
    ///
    /// # Returns
    /// - `Ok(true)` - Name is taken
    /// - `Ok(false)` - Name is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Changes a user's display name.
    ///
    /// # Returns
    /// - `Ok(true)` - User found and renamed
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation on name
    pub async fn update_name(&self, user_id: i32, name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::Name, Expr::value(name))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets a user's account status.
    ///
    /// # Returns
    /// - `Ok(true)` - User found and updated
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(&self, user_id: i32, status: Status) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::Status, Expr::value(status))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
