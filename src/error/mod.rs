//! Error types for the bot.
//!
//! `AppError` is the single error type threaded through repositories, services,
//! commands and scheduled jobs. Command failures are rendered to users by
//! `bot::error`, everything else is logged where it surfaces.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected state in stored data or the cache.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// A looked-up object does not exist.
    ///
    /// # Fields
    /// - Message shown to the invoking user
    #[error("{0}")]
    NotFound(String),

    /// The invoking user may not perform the action.
    ///
    /// # Fields
    /// - Message shown to the invoking user
    #[error("{0}")]
    AccessDenied(String),

    /// An argument was understood by the parser but is not acceptable.
    #[error("{0}")]
    BadRequest(String),

    /// The action conflicts with current state, e.g. a duplicate name.
    ///
    /// Rendered as an error embed with the given title and description.
    #[error("{title}: {description}")]
    Rejected { title: String, description: String },
}

impl AppError {
    /// Shorthand for [`AppError::Rejected`].
    pub fn rejected(title: impl Into<String>, description: impl Into<String>) -> Self {
        AppError::Rejected {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
