//! Collaborator traits consumed during default construction.
//!
//! Each trait covers exactly one host concern. Implementations may be slow
//! or failing; [`PluginConfigBuilder::new_default`] calls each at most once
//! and performs no retries.
//!
//! [`PluginConfigBuilder::new_default`]: crate::PluginConfigBuilder::new_default

use styleguard_types::{BundledProfile, ConfigurationLocation};
use thiserror::Error;

/// Source of the default checking-engine version.
pub trait VersionSource {
    fn default_version(&self) -> anyhow::Result<String>;
}

/// Materializes bundled rule-set locations.
pub trait LocationResolver {
    fn resolve_bundled(&self, profile: BundledProfile) -> anyhow::Result<ConfigurationLocation>;
}

/// Host-platform detection.
pub trait PlatformProbe {
    /// True on the platform family that needs third-party libraries copied
    /// next to the checking engine.
    fn is_windows_family(&self) -> bool;
}

/// Version of the running host plugin, stamped into new configurations.
pub trait HostVersionProvider {
    fn current_plugin_version(&self) -> String;
}

/// The host collaborators needed to assemble a default configuration.
#[derive(Clone, Copy)]
pub struct HostServices<'a> {
    pub versions: &'a dyn VersionSource,
    pub locations: &'a dyn LocationResolver,
    pub platform: &'a dyn PlatformProbe,
    pub host: &'a dyn HostVersionProvider,
}

/// Failure while assembling the default configuration.
///
/// The host surfaces these as configuration-initialization errors; the
/// builder itself never substitutes fallback values.
#[derive(Debug, Error)]
pub enum DefaultConfigError {
    #[error("default tool version lookup failed")]
    VersionLookup {
        #[source]
        source: anyhow::Error,
    },

    #[error("bundled rule set '{profile}' could not be resolved")]
    LocationResolution {
        profile: BundledProfile,
        #[source]
        source: anyhow::Error,
    },
}
