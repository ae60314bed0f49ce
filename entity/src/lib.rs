//! SeaORM entities for the rabbit mission service.

pub mod prelude;

pub mod mission;
pub mod mission_category;
pub mod mission_schedule;
pub mod mission_user;
pub mod report;
pub mod schedule;
pub mod sea_orm_active_enums;
pub mod user;
