//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand
//! that inserts a row with defaults. Discord IDs default to unique numeric strings
//! taken from `helpers::next_id()`, so stored snowflakes always parse.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let tag = factory::tag::TagFactory::new(&db)
//!     .name("rules")
//!     .owner_id("42")
//!     .build()
//!     .await?;
//!
//! let (infraction, mute) = factory::create_mute(&db, "42").await?;
//! ```
//!
//! # Available Factories
//!
//! - `tag` - Tags
//! - `role` - Ranks and auto-roles
//! - `campaign` - Campaigns
//! - `request` - Requests
//! - `suggestion` - Suggestions
//! - `infraction` - Infractions and mutes
//! - `helpers` - ID generation

pub mod campaign;
pub mod helpers;
pub mod infraction;
pub mod request;
pub mod role;
pub mod suggestion;
pub mod tag;

pub use campaign::create_campaign;
pub use infraction::{create_infraction, create_mute};
pub use request::create_request;
pub use role::{create_auto_role, create_rank};
pub use suggestion::create_suggestion;
pub use tag::create_tag;
