//! Domain types shared by the database and API crates.
//!
//! Holds the record kinds, their declarative field rules, and the pure
//! validation logic. Nothing in this crate performs I/O.

pub mod error;
pub mod record;
pub mod types;
pub mod validation;
