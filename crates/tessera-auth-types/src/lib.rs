//! Auth types shared across Tessera services.
//!
//! Session handling happens upstream; services only see the caller identity
//! the gateway forwards, via the [`identity::IdentityHeaders`] extractor.

pub mod identity;
