//! User domain models and parameters.
//!
//! Users are identified by their Kakao account id and carry a unique display name,
//! an optional email, an admin flag, and an account status. Withdrawn users keep
//! their row with an INACTIVE status.

use entity::sea_orm_active_enums::Status;

use crate::{model::user::UserDto, server::model::timestamps::Timestamps};

/// Application user linked to a Kakao account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Kakao account id of the user
    pub kakao_id: i64,
    /// Display name, unique across users.
    pub name: String,
    pub email: Option<String>,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub status: Status,
    pub timestamps: Timestamps,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            kakao_id: entity.kakao_id,
            name: entity.name,
            email: entity.email,
            admin: entity.admin,
            status: entity.status,
            timestamps: Timestamps::new(entity.created_at, entity.updated_at),
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            admin: self.admin,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// Parameters for creating a user on first login.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Kakao account id of the user
    pub kakao_id: i64,
    /// Display name of the user.
    pub name: String,
    pub email: Option<String>,
}
