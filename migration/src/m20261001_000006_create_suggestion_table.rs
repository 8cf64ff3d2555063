use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Suggestion::Table)
                    .if_not_exists()
                    .col(pk_auto(Suggestion::Id))
                    .col(string(Suggestion::InitiatorId))
                    .col(string_uniq(Suggestion::MessageId))
                    .col(text(Suggestion::Content))
                    .col(string_len(Suggestion::State, 16))
                    .col(
                        timestamp_with_time_zone(Suggestion::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Suggestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Suggestion {
    Table,
    Id,
    InitiatorId,
    MessageId,
    Content,
    State,
    CreatedAt,
}
