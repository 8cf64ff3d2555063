//! SeaORM entity models for the bot's persisted state.
//!
//! Discord snowflakes (users, roles, messages) are stored as strings and parsed back
//! into `u64` by the application's model layer.

pub mod prelude;

pub mod auto_role;
pub mod campaign;
pub mod infraction;
pub mod mute;
pub mod rank;
pub mod request;
pub mod suggestion;
pub mod tag;
