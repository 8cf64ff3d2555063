//! Bot configuration.
//!
//! Configuration is read from a JSON file (`config.json` unless `BOT_CONFIG` points
//! elsewhere). The bot token and the database URL may be overridden from the
//! environment so secrets can stay out of the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// May be left out of the file when `DISCORD_TOKEN` is set.
    #[serde(default)]
    pub token: String,
    pub prefix: String,
    /// ID of the single guild the bot serves.
    pub guild: u64,
    /// SeaORM connection string, e.g. `sqlite://bot.db?mode=rwc`.
    pub database: String,
    pub roles: RoleConfig,
    pub channels: ChannelConfig,
    pub messages: MessageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleConfig {
    pub staff: u64,
    pub regular: u64,
    pub associate: u64,
    pub muted: u64,
    pub patron: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    pub campaigns: u64,
    pub requests: u64,
    pub suggestions: u64,
    pub information: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageConfig {
    /// Message in the information channel that mirrors the active request.
    pub active_request: u64,
}

impl Config {
    /// Loads configuration from the file named by `BOT_CONFIG` (or `config.json`)
    /// and applies `DISCORD_TOKEN` / `DATABASE_URL` overrides.
    pub fn load() -> Result<Self, AppError> {
        let path = std::env::var("BOT_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::from_file(&path)?;
        config.apply_overrides(
            std::env::var("DISCORD_TOKEN").ok(),
            std::env::var("DATABASE_URL").ok(),
        );
        if config.token.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()).into());
        }
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw).map_err(ConfigError::Parse)?)
    }

    /// Replaces the token and database URL with the given values when present
    /// and non-empty.
    pub fn apply_overrides(&mut self, token: Option<String>, database: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.token = token;
        }
        if let Some(database) = database.filter(|d| !d.trim().is_empty()) {
            self.database = database;
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::Invalid("token must not be empty".to_string()).into());
        }
        if self.prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("prefix must not be empty".to_string()).into());
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::Invalid("database must not be empty".to_string()).into());
        }

        let ids = [
            ("guild", self.guild),
            ("roles.staff", self.roles.staff),
            ("roles.regular", self.roles.regular),
            ("roles.associate", self.roles.associate),
            ("roles.muted", self.roles.muted),
            ("roles.patron", self.roles.patron),
            ("channels.campaigns", self.channels.campaigns),
            ("channels.requests", self.channels.requests),
            ("channels.suggestions", self.channels.suggestions),
            ("channels.information", self.channels.information),
            ("messages.activeRequest", self.messages.active_request),
        ];
        if let Some((name, _)) = ids.iter().find(|(_, id)| *id == 0) {
            return Err(ConfigError::Invalid(format!("{} must be a non-zero ID", name)).into());
        }

        Ok(())
    }
}
