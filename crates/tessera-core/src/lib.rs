//! Plumbing shared by Tessera services: tracing, health probes, request ids
//! and wire formatting helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
