//! Embed builders for every message the bot posts.
//!
//! [`style`] holds the shared colours, icons and the [`style::EmbedStyle`] builder;
//! the other modules build the embeds of one domain each.

pub mod campaign;
pub mod moderation;
pub mod request;
pub mod style;
pub mod suggestion;

pub use style::EmbedStyle;
