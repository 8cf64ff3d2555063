//! Suggestion factory for creating test suggestion entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::suggestion::SuggestionState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test suggestions. Defaults to state New.
pub struct SuggestionFactory<'a> {
    db: &'a DatabaseConnection,
    initiator_id: String,
    message_id: String,
    content: String,
    state: SuggestionState,
}

impl<'a> SuggestionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            initiator_id: id.to_string(),
            message_id: next_id().to_string(),
            content: format!("Suggestion {}", id),
            state: SuggestionState::New,
        }
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn state(mut self, state: SuggestionState) -> Self {
        self.state = state;
        self
    }

    pub async fn build(self) -> Result<entity::suggestion::Model, DbErr> {
        entity::suggestion::ActiveModel {
            initiator_id: ActiveValue::Set(self.initiator_id),
            message_id: ActiveValue::Set(self.message_id),
            content: ActiveValue::Set(self.content),
            state: ActiveValue::Set(self.state),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_suggestion(
    db: &DatabaseConnection,
) -> Result<entity::suggestion::Model, DbErr> {
    SuggestionFactory::new(db).build().await
}
