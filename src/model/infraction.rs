//! Infraction and mute domain models.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

pub use entity::infraction::InfractionKind;

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A staff-issued moderation record.
#[derive(Debug, Clone, PartialEq)]
pub struct Infraction {
    pub id: Uuid,
    pub user_id: u64,
    pub username: String,
    pub staff_id: u64,
    pub staff_username: String,
    pub kind: InfractionKind,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl Infraction {
    /// Converts an entity model to an infraction domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Infraction)` - The converted infraction
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored user ID is not a u64
    pub fn from_entity(entity: entity::infraction::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: parse_u64_from_string(entity.user_id)?,
            username: entity.username,
            staff_id: parse_u64_from_string(entity.staff_id)?,
            staff_username: entity.staff_username,
            kind: entity.kind,
            reason: entity.reason,
            created_at: entity.created_at,
        })
    }
}

/// The timed part of a mute infraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Mute {
    pub infraction_id: Uuid,
    pub user_id: u64,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl Mute {
    pub fn from_entity(entity: entity::mute::Model) -> Result<Self, AppError> {
        Ok(Self {
            infraction_id: entity.infraction_id,
            user_id: parse_u64_from_string(entity.user_id)?,
            start_at: entity.start_at,
            end_at: entity.end_at,
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.end_at < now
    }
}

#[derive(Debug, Clone)]
pub struct CreateInfractionParam {
    pub user_id: u64,
    pub username: String,
    pub staff_id: u64,
    pub staff_username: String,
    pub kind: InfractionKind,
    pub reason: String,
    /// Required for mutes, ignored otherwise.
    pub mute_duration: Option<Duration>,
}

/// Past participle used in moderation replies, e.g. "Banned".
pub fn kind_past_tense(kind: InfractionKind) -> &'static str {
    match kind {
        InfractionKind::Warn => "Warned",
        InfractionKind::Kick => "Kicked",
        InfractionKind::Ban => "Banned",
        InfractionKind::Mute => "Muted",
    }
}

pub fn kind_title(kind: InfractionKind) -> &'static str {
    match kind {
        InfractionKind::Warn => "Warning",
        InfractionKind::Kick => "Kick",
        InfractionKind::Ban => "Ban",
        InfractionKind::Mute => "Mute",
    }
}
