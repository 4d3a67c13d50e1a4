//! Test utilities for Tessera services.
//!
//! Import in tests only, never in production code.

pub mod auth;
