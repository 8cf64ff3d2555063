//! Campaign factory for creating test campaign entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::campaign::CampaignKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test campaigns with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let campaign = CampaignFactory::new(&db)
///     .user_id("42")
///     .kind(CampaignKind::Associate)
///     .minimal_votes(3)
///     .build()
///     .await?;
/// ```
pub struct CampaignFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    kind: CampaignKind,
    initiator_id: String,
    reason: String,
    message_id: String,
    minimal_votes: i32,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
}

impl<'a> CampaignFactory<'a> {
    /// Creates a new CampaignFactory with default values.
    ///
    /// Defaults:
    /// - user_id, initiator_id, message_id: unique numeric strings
    /// - kind: `Regular`
    /// - minimal_votes: `1`
    /// - start_at: now, end_at: now + 48 hours
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let now = Utc::now();
        Self {
            db,
            user_id: next_id().to_string(),
            kind: CampaignKind::Regular,
            initiator_id: next_id().to_string(),
            reason: "Consistently helpful".to_string(),
            message_id: next_id().to_string(),
            minimal_votes: 1,
            start_at: now,
            end_at: now + Duration::hours(48),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn kind(mut self, kind: CampaignKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn minimal_votes(mut self, minimal_votes: i32) -> Self {
        self.minimal_votes = minimal_votes;
        self
    }

    /// Sets the voting window end, e.g. in the past for expired campaigns.
    pub fn end_at(mut self, end_at: DateTime<Utc>) -> Self {
        self.end_at = end_at;
        self
    }

    pub async fn build(self) -> Result<entity::campaign::Model, DbErr> {
        entity::campaign::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set(self.kind),
            initiator_id: ActiveValue::Set(self.initiator_id),
            reason: ActiveValue::Set(self.reason),
            message_id: ActiveValue::Set(self.message_id),
            minimal_votes: ActiveValue::Set(self.minimal_votes),
            start_at: ActiveValue::Set(self.start_at),
            end_at: ActiveValue::Set(self.end_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Regular campaign with default values.
pub async fn create_campaign(db: &DatabaseConnection) -> Result<entity::campaign::Model, DbErr> {
    CampaignFactory::new(db).build().await
}
