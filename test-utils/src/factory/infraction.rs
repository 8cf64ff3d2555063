//! Infraction and mute factories.
//!
//! A mute row always belongs to a Mute infraction, so `create_mute` inserts both.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::infraction::InfractionKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test infractions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let infraction = InfractionFactory::new(&db)
///     .user_id("42")
///     .kind(InfractionKind::Ban)
///     .build()
///     .await?;
/// ```
pub struct InfractionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    staff_id: String,
    kind: InfractionKind,
    reason: String,
    created_at: DateTime<Utc>,
}

impl<'a> InfractionFactory<'a> {
    /// Creates a new InfractionFactory with default values.
    ///
    /// Defaults:
    /// - user_id, staff_id: unique numeric strings
    /// - kind: `Warn`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            staff_id: next_id().to_string(),
            kind: InfractionKind::Warn,
            reason: "Spamming".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn kind(mut self, kind: InfractionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the infraction with a fresh v4 UUID.
    pub async fn build(self) -> Result<entity::infraction::Model, DbErr> {
        entity::infraction::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(format!("user{}", self.user_id)),
            user_id: ActiveValue::Set(self.user_id),
            staff_username: ActiveValue::Set(format!("staff{}", self.staff_id)),
            staff_id: ActiveValue::Set(self.staff_id),
            kind: ActiveValue::Set(self.kind),
            reason: ActiveValue::Set(self.reason),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a warning for `user_id`.
pub async fn create_infraction(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<entity::infraction::Model, DbErr> {
    InfractionFactory::new(db).user_id(user_id).build().await
}

/// Creates a Mute infraction for `user_id` and its mute row ending in one hour.
pub async fn create_mute(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<(entity::infraction::Model, entity::mute::Model), DbErr> {
    create_mute_ending_at(db, user_id, Utc::now() + Duration::hours(1)).await
}

/// Creates a Mute infraction for `user_id` and its mute row ending at `end_at`.
pub async fn create_mute_ending_at(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    end_at: DateTime<Utc>,
) -> Result<(entity::infraction::Model, entity::mute::Model), DbErr> {
    let infraction = InfractionFactory::new(db)
        .user_id(user_id)
        .kind(InfractionKind::Mute)
        .build()
        .await?;

    let mute = entity::mute::ActiveModel {
        infraction_id: ActiveValue::Set(infraction.id),
        user_id: ActiveValue::Set(infraction.user_id.clone()),
        start_at: ActiveValue::Set(infraction.created_at),
        end_at: ActiveValue::Set(end_at),
    }
    .insert(db)
    .await?;

    Ok((infraction, mute))
}
