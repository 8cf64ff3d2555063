use sea_orm::entity::prelude::*;

/// Role a campaign promotes its member to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CampaignKind {
    #[sea_orm(string_value = "regular")]
    Regular,
    #[sea_orm(string_value = "associate")]
    Associate,
}

/// A running promotion vote. At most one per member.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campaign")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub kind: CampaignKind,
    pub initiator_id: String,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    pub message_id: String,
    pub minimal_votes: i32,
    pub start_at: DateTimeUtc,
    pub end_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
