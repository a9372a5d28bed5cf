//! Stable identifiers for the bundled rule sets.
//!
//! IDs are dotted namespaces. Persisted configuration and host-side
//! descriptors reference them, so they never change once shipped.

pub const LOCATION_BUNDLED_STRICT: &str = "bundled.strict";
pub const LOCATION_BUNDLED_RELAXED: &str = "bundled.relaxed";
