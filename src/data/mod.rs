//! Database repository layer.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and performs the CRUD
//! operations of one table. Repositories use SeaORM entity models internally and
//! return domain models from `crate::model`, converting stored string snowflakes
//! to `u64` at this boundary.

pub mod campaign;
pub mod infraction;
pub mod request;
pub mod role;
pub mod suggestion;
pub mod tag;

#[cfg(test)]
mod test;
