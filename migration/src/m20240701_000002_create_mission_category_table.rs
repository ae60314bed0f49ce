use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MissionCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(MissionCategory::Id))
                    .col(string(MissionCategory::Title))
                    .col(
                        timestamp_with_time_zone(MissionCategory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(MissionCategory::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MissionCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MissionCategory {
    Table,
    Id,
    Title,
    CreatedAt,
    UpdatedAt,
}
