pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_tag_table;
mod m20261001_000002_create_rank_table;
mod m20261001_000003_create_auto_role_table;
mod m20261001_000004_create_campaign_table;
mod m20261001_000005_create_request_table;
mod m20261001_000006_create_suggestion_table;
mod m20261001_000007_create_infraction_table;
mod m20261001_000008_create_mute_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_tag_table::Migration),
            Box::new(m20261001_000002_create_rank_table::Migration),
            Box::new(m20261001_000003_create_auto_role_table::Migration),
            Box::new(m20261001_000004_create_campaign_table::Migration),
            Box::new(m20261001_000005_create_request_table::Migration),
            Box::new(m20261001_000006_create_suggestion_table::Migration),
            Box::new(m20261001_000007_create_infraction_table::Migration),
            Box::new(m20261001_000008_create_mute_table::Migration),
        ]
    }
}
