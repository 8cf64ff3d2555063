use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Infraction::Table)
                    .if_not_exists()
                    .col(pk_uuid(Infraction::Id))
                    .col(string(Infraction::UserId))
                    .col(string(Infraction::Username))
                    .col(string(Infraction::StaffId))
                    .col(string(Infraction::StaffUsername))
                    .col(string_len(Infraction::Kind, 16))
                    .col(text(Infraction::Reason))
                    .col(
                        timestamp_with_time_zone(Infraction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Per-member history lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_infraction_user_id")
                    .table(Infraction::Table)
                    .col(Infraction::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_infraction_user_id")
                    .table(Infraction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Infraction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Infraction {
    Table,
    Id,
    UserId,
    Username,
    StaffId,
    StaffUsername,
    Kind,
    Reason,
    CreatedAt,
}
