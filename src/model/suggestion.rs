//! Suggestion domain models.

use chrono::{DateTime, Utc};

pub use entity::suggestion::SuggestionState;

use crate::{error::AppError, util::parse::parse_u64_from_string};

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub id: i32,
    pub initiator_id: u64,
    pub message_id: u64,
    pub content: String,
    pub state: SuggestionState,
    pub created_at: DateTime<Utc>,
}

impl Suggestion {
    pub fn from_entity(entity: entity::suggestion::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            initiator_id: parse_u64_from_string(entity.initiator_id)?,
            message_id: parse_u64_from_string(entity.message_id)?,
            content: entity.content,
            state: entity.state,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateSuggestionParam {
    pub initiator_id: u64,
    pub message_id: u64,
    pub content: String,
}

/// A staff decision button on a suggestion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionAction {
    Approve,
    Reject,
}

impl SuggestionAction {
    pub const APPROVE_ID: &'static str = "suggestion:approve";
    pub const REJECT_ID: &'static str = "suggestion:reject";

    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            Self::APPROVE_ID => Some(SuggestionAction::Approve),
            Self::REJECT_ID => Some(SuggestionAction::Reject),
            _ => None,
        }
    }

    /// Only new suggestions can be decided.
    pub fn apply(self, state: SuggestionState) -> Option<SuggestionState> {
        match (state, self) {
            (SuggestionState::New, SuggestionAction::Approve) => Some(SuggestionState::Approved),
            (SuggestionState::New, SuggestionAction::Reject) => Some(SuggestionState::Rejected),
            _ => None,
        }
    }
}
