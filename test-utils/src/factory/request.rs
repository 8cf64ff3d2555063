//! Request factory for creating test request entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::request::RequestState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test requests with customizable fields.
///
/// Defaults to a Pending request with unique initiator and message IDs.
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    initiator_id: String,
    message_id: String,
    description: String,
    state: RequestState,
}

impl<'a> RequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            initiator_id: id.to_string(),
            message_id: next_id().to_string(),
            description: format!("Request {}", id),
            state: RequestState::Pending,
        }
    }

    pub fn initiator_id(mut self, initiator_id: impl Into<String>) -> Self {
        self.initiator_id = initiator_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn state(mut self, state: RequestState) -> Self {
        self.state = state;
        self
    }

    pub async fn build(self) -> Result<entity::request::Model, DbErr> {
        entity::request::ActiveModel {
            initiator_id: ActiveValue::Set(self.initiator_id),
            message_id: ActiveValue::Set(self.message_id),
            description: ActiveValue::Set(self.description),
            state: ActiveValue::Set(self.state),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Pending request with default values.
pub async fn create_request(db: &DatabaseConnection) -> Result<entity::request::Model, DbErr> {
    RequestFactory::new(db).build().await
}
