//! Plugin configuration snapshot and builder.
//!
//! This crate is intentionally IO-free: anything that touches the outside
//! world (tool version discovery, bundled rule-set resolution, platform
//! detection, host plugin version) is injected through the traits in
//! [`host`]. The host persists [`PluginConfig`]; this crate only fixes its
//! shape and construction rules.

#![forbid(unsafe_code)]

mod builder;
mod config;
mod host;

#[cfg(test)]
mod proptest;

pub use builder::{PluginConfigBuilder, TEST_PLUGIN_VERSION};
pub use config::PluginConfig;
pub use host::{
    DefaultConfigError, HostServices, HostVersionProvider, LocationResolver, PlatformProbe,
    VersionSource,
};
