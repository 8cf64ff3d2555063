use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000007_create_infraction_table::Infraction;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mute::Table)
                    .if_not_exists()
                    .col(uuid(Mute::InfractionId).primary_key())
                    .col(string(Mute::UserId))
                    .col(timestamp_with_time_zone(Mute::StartAt))
                    .col(timestamp_with_time_zone(Mute::EndAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mute_infraction_id")
                            .from(Mute::Table, Mute::InfractionId)
                            .to(Infraction::Table, Infraction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mute_user_id")
                    .table(Mute::Table)
                    .col(Mute::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_mute_user_id")
                    .table(Mute::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Mute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mute {
    Table,
    InfractionId,
    UserId,
    StartAt,
    EndAt,
}
