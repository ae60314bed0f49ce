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
                    .table(Report::Table)
                    .if_not_exists()
                    .col(pk_auto(Report::Id))
                    .col(integer(Report::UserId))
                    .col(integer_null(Report::ArticleId))
                    .col(integer_null(Report::CommentId))
                    .col(integer_null(Report::MissionProofId))
                    .col(integer_null(Report::MissionId))
                    .col(string_len(Report::Status, 15).default("ACTIVE"))
                    .col(
                        timestamp_with_time_zone(Report::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Report::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_user_id")
                            .from(Report::Table, Report::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_mission_id")
                            .from(Report::Table, Report::MissionId)
                            .to(Mission::Table, Mission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One report per (user, target); NULL targets never collide
        for (name, target) in [
            ("idx_report_user_article", Report::ArticleId),
            ("idx_report_user_comment", Report::CommentId),
            ("idx_report_user_mission_proof", Report::MissionProofId),
            ("idx_report_user_mission", Report::MissionId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Report::Table)
                        .col(Report::UserId)
                        .col(target)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Report::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Report {
    Table,
    Id,
    UserId,
    ArticleId,
    CommentId,
    MissionProofId,
    MissionId,
    Status,
    CreatedAt,
    UpdatedAt,
}
