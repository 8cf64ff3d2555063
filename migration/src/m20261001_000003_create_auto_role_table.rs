use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AutoRole::Table)
                    .if_not_exists()
                    .col(string(AutoRole::RoleId).primary_key())
                    .col(
                        timestamp_with_time_zone(AutoRole::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AutoRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AutoRole {
    Table,
    RoleId,
    CreatedAt,
}
