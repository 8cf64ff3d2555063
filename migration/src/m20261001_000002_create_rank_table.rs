use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rank::Table)
                    .if_not_exists()
                    .col(string(Rank::RoleId).primary_key())
                    .col(
                        timestamp_with_time_zone(Rank::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rank::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rank {
    Table,
    RoleId,
    CreatedAt,
}
