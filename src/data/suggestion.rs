//! Suggestion repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::suggestion::{CreateSuggestionParam, Suggestion, SuggestionState},
};

pub struct SuggestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SuggestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new suggestion in the New state.
    pub async fn create(&self, param: CreateSuggestionParam) -> Result<Suggestion, AppError> {
        let entity = entity::suggestion::ActiveModel {
            initiator_id: ActiveValue::Set(param.initiator_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            content: ActiveValue::Set(param.content),
            state: ActiveValue::Set(SuggestionState::New),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Suggestion::from_entity(entity)
    }

    pub async fn find_by_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<Suggestion>, AppError> {
        let entity = entity::prelude::Suggestion::find()
            .filter(entity::suggestion::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(Suggestion::from_entity).transpose()
    }

    /// Gets all suggestions in the given state, oldest first.
    pub async fn get_by_state(&self, state: SuggestionState) -> Result<Vec<Suggestion>, AppError> {
        let entities = entity::prelude::Suggestion::find()
            .filter(entity::suggestion::Column::State.eq(state))
            .order_by_asc(entity::suggestion::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Suggestion::from_entity).collect()
    }

    pub async fn update_state(
        &self,
        id: i32,
        state: SuggestionState,
    ) -> Result<Suggestion, AppError> {
        let suggestion = entity::prelude::Suggestion::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Suggestion {} not found", id)))?;

        let mut active_model: entity::suggestion::ActiveModel = suggestion.into();
        active_model.state = ActiveValue::Set(state);

        let entity = active_model.update(self.db).await?;

        Suggestion::from_entity(entity)
    }
}
