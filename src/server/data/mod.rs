//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic.
//!
//! Every repository is generic over `ConnectionTrait` so the same queries run against
//! the pooled connection or inside a transaction opened by the service layer.

pub mod category;
pub mod mission;
pub mod mission_user;
pub mod report;
pub mod schedule;
pub mod user;

#[cfg(test)]
mod test;
