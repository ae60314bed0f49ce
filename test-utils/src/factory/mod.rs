//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `*Factory` builder for customization and a
//! `create_*` shorthand for the defaults.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let category = factory::create_category(&db).await?;
//! let mission = factory::create_mission(&db, category.id).await?;
//! factory::create_mission_user(&db, user.id, mission.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use test_utils::factory::mission::MissionFactory;
//!
//! let mission = MissionFactory::new(&db, category.id)
//!     .start_at(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .end_at(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users keyed by Kakao id
//! - `mission_category` - Mission categories
//! - `mission` - Missions with a date range
//! - `mission_user` - User participation in a mission
//! - `schedule` - Logged schedule entries linked to a mission
//! - `report` - Reports against a mission
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod mission;
pub mod mission_category;
pub mod mission_user;
pub mod report;
pub mod schedule;
pub mod user;

pub use mission::create_mission;
pub use mission_category::create_category;
pub use mission_user::create_mission_user;
pub use report::create_mission_report;
pub use schedule::{create_schedule, create_schedules};
pub use user::create_user;
