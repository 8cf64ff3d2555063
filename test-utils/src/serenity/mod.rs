//! Test fixtures for Serenity API objects.
//!
//! Fixtures build valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_role;
//!
//! let staff = create_test_role(111111111, "Staff");
//! ```

pub mod role;

pub use role::create_test_role;
