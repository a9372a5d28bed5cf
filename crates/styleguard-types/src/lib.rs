//! Stable value types shared between the configuration core and the host.
//!
//! This crate is intentionally boring:
//! - the scan-scope policy enum
//! - rule-set location entities and their total order
//! - stable IDs for the bundled rule sets
//!
//! Everything here is part of the persisted configuration shape, so names
//! and serialized representations must stay stable across releases.

#![forbid(unsafe_code)]

pub mod ids;
pub mod location;
pub mod scope;

pub use location::{BundledProfile, ConfigurationLocation, LocationKind};
pub use scope::ScanScope;
