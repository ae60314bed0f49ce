pub use sea_orm_migration::prelude::*;

mod m20240701_000001_create_user_table;
mod m20240701_000002_create_mission_category_table;
mod m20240701_000003_create_mission_table;
mod m20240701_000004_create_mission_user_table;
mod m20240701_000005_create_schedule_table;
mod m20240701_000006_create_mission_schedule_table;
mod m20240702_000007_create_report_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240701_000001_create_user_table::Migration),
            Box::new(m20240701_000002_create_mission_category_table::Migration),
            Box::new(m20240701_000003_create_mission_table::Migration),
            Box::new(m20240701_000004_create_mission_user_table::Migration),
            Box::new(m20240701_000005_create_schedule_table::Migration),
            Box::new(m20240701_000006_create_mission_schedule_table::Migration),
            Box::new(m20240702_000007_create_report_table::Migration),
        ]
    }
}
