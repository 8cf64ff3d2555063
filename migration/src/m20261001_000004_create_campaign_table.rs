use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(string(Campaign::UserId).primary_key())
                    .col(string_len(Campaign::Kind, 16))
                    .col(string(Campaign::InitiatorId))
                    .col(text(Campaign::Reason))
                    .col(string_uniq(Campaign::MessageId))
                    .col(integer(Campaign::MinimalVotes))
                    .col(timestamp_with_time_zone(Campaign::StartAt))
                    .col(timestamp_with_time_zone(Campaign::EndAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Campaign::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Campaign {
    Table,
    UserId,
    Kind,
    InitiatorId,
    Reason,
    MessageId,
    MinimalVotes,
    StartAt,
    EndAt,
}
