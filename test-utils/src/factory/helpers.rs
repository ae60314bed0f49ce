//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a category and a mission in that category.
///
/// The user is not joined to the mission; use
/// `create_joined_mission_with_dependencies` when a participation row is needed.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, category, mission))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mission_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::mission_category::Model,
        entity::mission::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let category = crate::factory::mission_category::create_category(db).await?;
    let mission = crate::factory::mission::create_mission(db, category.id).await?;

    Ok((user, category, mission))
}

/// Creates a user, a category, a mission and the user's participation in it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, mission, participation))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_joined_mission_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::mission::Model,
        entity::mission_user::Model,
    ),
    DbErr,
> {
    let (user, _category, mission) = create_mission_with_dependencies(db).await?;
    let participation =
        crate::factory::mission_user::create_mission_user(db, user.id, mission.id).await?;

    Ok((user, mission, participation))
}
