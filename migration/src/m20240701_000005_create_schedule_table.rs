use sea_orm_migration::{prelude::*, schema::*};

use super::m20240701_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(integer(Schedule::UserId))
                    .col(string(Schedule::Title))
                    .col(timestamp(Schedule::StartAt))
                    .col(timestamp(Schedule::EndAt))
                    .col(
                        timestamp_with_time_zone(Schedule::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Schedule::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_user_id")
                            .from(Schedule::Table, Schedule::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    Id,
    UserId,
    Title,
    StartAt,
    EndAt,
    CreatedAt,
    UpdatedAt,
}
