use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables with `with_table()` (or one of the table-set shortcuts),
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Mission, MissionCategory};
///
/// let test = TestBuilder::new()
///     .with_table(MissionCategory)
///     .with_table(Mission)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for mission participation.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - MissionCategory
    /// - Mission
    /// - MissionUser
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_participation_tables(self) -> Self {
        self.with_table(User)
            .with_table(MissionCategory)
            .with_table(Mission)
            .with_table(MissionUser)
    }

    /// Adds every table used by the mission service.
    ///
    /// Equivalent to `with_participation_tables()` followed by the schedule,
    /// mission-schedule link and report tables. Use this for service-level tests
    /// that touch progress tracking or reporting.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_mission_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_mission_tables(self) -> Self {
        self.with_participation_tables()
            .with_table(Schedule)
            .with_table(MissionSchedule)
            .with_table(Report)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
