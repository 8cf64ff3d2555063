//! Service layer for business rules and orchestration.
//!
//! Services sit between the bot's commands and event handlers and the repository
//! layer. They enforce permission and state rules, coordinate several repository
//! calls and, where a rule has a Discord side effect that must stay consistent with
//! the database (campaign resolution), perform it themselves.

pub mod campaign;
pub mod campaign_resolution;
pub mod moderation;
pub mod mute_cache;
pub mod request;
pub mod role;
pub mod suggestion;
pub mod tag;

#[cfg(test)]
mod test;
