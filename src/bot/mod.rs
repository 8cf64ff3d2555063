//! Discord side of the bot: the poise framework, event handlers and embeds.
//!
//! Commands are poise prefix commands that also register as guild slash commands
//! where their arguments allow. Gateway events that are not commands (inline tags,
//! member joins, button presses and campaign votes) go through the serenity
//! [`handler::Handler`].
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild, role and channel cache
//! - `GUILD_MEMBERS` - Member joins and leaves, and the member cache (privileged)
//! - `GUILD_MESSAGES` and `MESSAGE_CONTENT` - Prefix commands and inline tags (privileged)
//! - `GUILD_MESSAGE_REACTIONS` - Campaign votes
//! - `DIRECT_MESSAGES` - Prefix commands in DMs
//! - `GUILD_PRESENCES` - Keeps the member cache populated (privileged)

pub mod checks;
pub mod commands;
pub mod embed;
pub mod error;
pub mod handler;
pub mod mute;
pub mod paginate;
pub mod start;
pub mod status;
