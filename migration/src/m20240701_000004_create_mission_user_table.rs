use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240701_000001_create_user_table::User, m20240701_000003_create_mission_table::Mission,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MissionUser::Table)
                    .if_not_exists()
                    .col(pk_auto(MissionUser::Id))
                    .col(integer(MissionUser::UserId))
                    .col(integer(MissionUser::MissionId))
                    .col(integer(MissionUser::Score).default(0))
                    .col(string_len(MissionUser::Status, 15).default("ACTIVE"))
                    .col(
                        timestamp_with_time_zone(MissionUser::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(MissionUser::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_user_user_id")
                            .from(MissionUser::Table, MissionUser::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_user_mission_id")
                            .from(MissionUser::Table, MissionUser::MissionId)
                            .to(Mission::Table, Mission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs up the join-time existence check against concurrent joins
        manager
            .create_index(
                Index::create()
                    .name("idx_mission_user_user_mission")
                    .table(MissionUser::Table)
                    .col(MissionUser::UserId)
                    .col(MissionUser::MissionId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MissionUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MissionUser {
    Table,
    Id,
    UserId,
    MissionId,
    Score,
    Status,
    CreatedAt,
    UpdatedAt,
}
