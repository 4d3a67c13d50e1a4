//! Domain types shared across all Tessera services.
//!
//! This crate contains only pure types with no framework dependencies.

pub mod account;
pub mod id;
pub mod role;
