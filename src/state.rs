//! State shared by commands, event handlers and scheduled jobs.
//!
//! The state is built once during startup and cloned into the poise framework, the
//! serenity event handler and each scheduler job. Every field is cheap to clone:
//! the database connection is a pool, and the mute cache and request gate share
//! their contents through an `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::AppError,
    service::{mute_cache::MuteCache, request::RequestGate},
};

#[derive(Clone)]
pub struct Data {
    /// Database connection pool.
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    /// Active mutes, loaded from the database at startup.
    pub mutes: MuteCache,
    /// Whether `request` currently accepts submissions.
    pub requests: RequestGate,
}

impl Data {
    pub fn new(db: DatabaseConnection, config: Config, mutes: MuteCache) -> Self {
        Self {
            db,
            config: Arc::new(config),
            mutes,
            requests: RequestGate::new(),
        }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, Data, AppError>;
