//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary, where
//! stored string snowflakes become `u64`. Parameter types carry the inputs of a single
//! repository or service operation.

pub mod actor;
pub mod campaign;
pub mod infraction;
pub mod request;
pub mod role;
pub mod suggestion;
pub mod tag;
