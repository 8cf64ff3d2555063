use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Request::Table)
                    .if_not_exists()
                    .col(pk_auto(Request::Id))
                    .col(string(Request::InitiatorId))
                    .col(string_uniq(Request::MessageId))
                    .col(text(Request::Description))
                    .col(string_len(Request::State, 16))
                    .col(
                        timestamp_with_time_zone(Request::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_request_state")
                    .table(Request::Table)
                    .col(Request::State)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_request_state")
                    .table(Request::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Request::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Request {
    Table,
    Id,
    InitiatorId,
    MessageId,
    Description,
    State,
    CreatedAt,
}
