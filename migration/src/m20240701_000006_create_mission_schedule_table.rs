use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240701_000003_create_mission_table::Mission,
    m20240701_000005_create_schedule_table::Schedule,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MissionSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(MissionSchedule::Id))
                    .col(integer(MissionSchedule::MissionId))
                    .col(integer_uniq(MissionSchedule::ScheduleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_schedule_mission_id")
                            .from(MissionSchedule::Table, MissionSchedule::MissionId)
                            .to(Mission::Table, Mission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_schedule_schedule_id")
                            .from(MissionSchedule::Table, MissionSchedule::ScheduleId)
                            .to(Schedule::Table, Schedule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MissionSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MissionSchedule {
    Table,
    Id,
    MissionId,
    ScheduleId,
}
