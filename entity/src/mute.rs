use sea_orm::entity::prelude::*;

/// The timed part of a mute infraction.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mute")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub infraction_id: Uuid,
    pub user_id: String,
    pub start_at: DateTimeUtc,
    pub end_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::infraction::Entity",
        from = "Column::InfractionId",
        to = "super::infraction::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Infraction,
}

impl Related<super::infraction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Infraction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
