pub use super::auto_role::Entity as AutoRole;
pub use super::campaign::Entity as Campaign;
pub use super::infraction::Entity as Infraction;
pub use super::mute::Entity as Mute;
pub use super::rank::Entity as Rank;
pub use super::request::Entity as Request;
pub use super::suggestion::Entity as Suggestion;
pub use super::tag::Entity as Tag;
