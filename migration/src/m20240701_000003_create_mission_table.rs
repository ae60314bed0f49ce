use sea_orm_migration::{prelude::*, schema::*};

use super::m20240701_000002_create_mission_category_table::MissionCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mission::Table)
                    .if_not_exists()
                    .col(pk_auto(Mission::Id))
                    .col(integer(Mission::CategoryId))
                    .col(string(Mission::Title))
                    .col(text(Mission::Content))
                    .col(date(Mission::StartAt))
                    .col(date(Mission::EndAt))
                    .col(boolean(Mission::LastMission).default(false))
                    .col(string_len(Mission::Status, 15).default("ACTIVE"))
                    .col(
                        timestamp_with_time_zone(Mission::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Mission::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_category_id")
                            .from(Mission::Table, Mission::CategoryId)
                            .to(MissionCategory::Table, MissionCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mission {
    Table,
    Id,
    CategoryId,
    Title,
    Content,
    StartAt,
    EndAt,
    LastMission,
    Status,
    CreatedAt,
    UpdatedAt,
}
