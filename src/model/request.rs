//! Request domain models and the request lifecycle.

use chrono::{DateTime, Utc};

pub use entity::request::RequestState;

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A patron request tracked by its message in the requests channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: i32,
    pub initiator_id: u64,
    pub message_id: u64,
    pub description: String,
    pub state: RequestState,
    pub created_at: DateTime<Utc>,
}

impl Request {
    /// Converts an entity model to a request domain model at the repository boundary.
    pub fn from_entity(entity: entity::request::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            initiator_id: parse_u64_from_string(entity.initiator_id)?,
            message_id: parse_u64_from_string(entity.message_id)?,
            description: entity.description,
            state: entity.state,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateRequestParam {
    pub initiator_id: u64,
    pub message_id: u64,
    pub description: String,
}

/// A button pressed on a request message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    Deny,
    Accept,
    Finish,
}

impl RequestAction {
    pub const DENY_ID: &'static str = "request:deny";
    pub const ACCEPT_ID: &'static str = "request:accept";
    pub const FINISH_ID: &'static str = "request:finish";

    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            Self::DENY_ID => Some(RequestAction::Deny),
            Self::ACCEPT_ID => Some(RequestAction::Accept),
            Self::FINISH_ID => Some(RequestAction::Finish),
            _ => None,
        }
    }

    pub fn custom_id(self) -> &'static str {
        match self {
            RequestAction::Deny => Self::DENY_ID,
            RequestAction::Accept => Self::ACCEPT_ID,
            RequestAction::Finish => Self::FINISH_ID,
        }
    }

    /// State reached by applying this action, or `None` when the action does
    /// not apply to `state`.
    pub fn apply(self, state: RequestState) -> Option<RequestState> {
        match (state, self) {
            (RequestState::Pending, RequestAction::Deny) => Some(RequestState::Denied),
            (RequestState::Pending, RequestAction::Accept) => Some(RequestState::Active),
            (RequestState::Active, RequestAction::Finish) => Some(RequestState::Finished),
            _ => None,
        }
    }
}

/// A request before and after an applied action.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTransition {
    pub from: RequestState,
    pub request: Request,
}
