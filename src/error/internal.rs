use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a stored Discord ID from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// The configured guild is not present in the cache
    ///
    /// Happens before the gateway has delivered the guild, or when the bot
    /// is not a member of the configured guild.
    #[error("Guild {0} is not available in the cache")]
    UnknownGuild(u64),
}
