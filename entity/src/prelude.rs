pub use super::mission::Entity as Mission;
pub use super::mission_category::Entity as MissionCategory;
pub use super::mission_schedule::Entity as MissionSchedule;
pub use super::mission_user::Entity as MissionUser;
pub use super::report::Entity as Report;
pub use super::schedule::Entity as Schedule;
pub use super::user::Entity as User;
