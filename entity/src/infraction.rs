use sea_orm::entity::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum InfractionKind {
    #[sea_orm(string_value = "warn")]
    Warn,
    #[sea_orm(string_value = "kick")]
    Kick,
    #[sea_orm(string_value = "ban")]
    Ban,
    #[sea_orm(string_value = "mute")]
    Mute,
}

/// A staff-issued moderation record.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "infraction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    pub username: String,
    pub staff_id: String,
    pub staff_username: String,
    pub kind: InfractionKind,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::mute::Entity")]
    Mute,
}

impl Related<super::mute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
