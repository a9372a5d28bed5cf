use crate::config::PluginConfig;
use crate::host::{DefaultConfigError, HostServices};
use std::collections::BTreeSet;
use styleguard_types::{BundledProfile, ConfigurationLocation, ScanScope};

/// `last_active_plugin_version` stamped by [`PluginConfigBuilder::for_testing`].
pub const TEST_PLUGIN_VERSION: &str = "0.0.0-test";

/// Accumulates configuration edits and produces [`PluginConfig`] snapshots.
///
/// Mutators consume the builder, so a builder has exactly one owner and
/// chained edits read naturally. [`build`](Self::build) borrows and clones,
/// which means later edits can never reach into an already-returned
/// snapshot.
///
/// A builder is created fresh for each edit session (default, test, or
/// copy-from-snapshot) and discarded once its result is captured.
#[derive(Clone, Debug)]
pub struct PluginConfigBuilder {
    tool_version: Option<String>,
    scan_scope: ScanScope,
    suppress_errors: bool,
    copy_libraries: bool,
    locations: BTreeSet<ConfigurationLocation>,
    third_party_classpath: Vec<String>,
    active_location: Option<ConfigurationLocation>,
    scan_before_checkin: bool,
    last_active_plugin_version: Option<String>,
}

impl PluginConfigBuilder {
    /// A builder pre-populated with installation defaults.
    ///
    /// Queries each collaborator at most once: the default tool version,
    /// the two bundled rule sets (strict and relaxed, in that order), the
    /// platform family for `copy_libraries`, and the running plugin version
    /// for the migration stamp. Collaborator failures propagate unchanged;
    /// there is no retry and no fallback value.
    pub fn new_default(services: HostServices<'_>) -> Result<Self, DefaultConfigError> {
        let tool_version = services
            .versions
            .default_version()
            .map_err(|source| DefaultConfigError::VersionLookup { source })?;
        tracing::debug!(%tool_version, "resolved default tool version");

        let mut locations = BTreeSet::new();
        for profile in [BundledProfile::Strict, BundledProfile::Relaxed] {
            let location = services
                .locations
                .resolve_bundled(profile)
                .map_err(|source| DefaultConfigError::LocationResolution { profile, source })?;
            tracing::debug!(%location, "resolved bundled rule set");
            locations.insert(location);
        }

        let copy_libraries = services.platform.is_windows_family();
        let plugin_version = services.host.current_plugin_version();
        tracing::debug!(copy_libraries, %plugin_version, "assembled default configuration");

        Ok(Self {
            tool_version: Some(tool_version),
            scan_scope: ScanScope::default(),
            suppress_errors: false,
            copy_libraries,
            locations,
            third_party_classpath: Vec::new(),
            active_location: None,
            scan_before_checkin: false,
            last_active_plugin_version: Some(plugin_version),
        })
    }

    /// A deterministic fixture builder that touches no collaborators.
    ///
    /// Scope is fixed to [`ScanScope::AllSources`], every boolean is false,
    /// the containers are empty, and the migration stamp is
    /// [`TEST_PLUGIN_VERSION`].
    pub fn for_testing(tool_version: &str) -> Self {
        Self {
            tool_version: Some(tool_version.to_string()),
            scan_scope: ScanScope::AllSources,
            suppress_errors: false,
            copy_libraries: false,
            locations: BTreeSet::new(),
            third_party_classpath: Vec::new(),
            active_location: None,
            scan_before_checkin: false,
            last_active_plugin_version: Some(TEST_PLUGIN_VERSION.to_string()),
        }
    }

    /// A builder whose working state copies `existing` verbatim, for
    /// partial edits.
    pub fn from_config(existing: &PluginConfig) -> Self {
        Self {
            tool_version: existing.tool_version.clone(),
            scan_scope: existing.scan_scope,
            suppress_errors: existing.suppress_errors,
            copy_libraries: existing.copy_libraries,
            locations: existing.locations.clone(),
            third_party_classpath: existing.third_party_classpath.clone(),
            active_location: existing.active_location.clone(),
            scan_before_checkin: existing.scan_before_checkin,
            last_active_plugin_version: existing.last_active_plugin_version.clone(),
        }
    }

    pub fn with_tool_version(mut self, tool_version: Option<String>) -> Self {
        self.tool_version = tool_version;
        self
    }

    pub fn with_scan_scope(mut self, scan_scope: ScanScope) -> Self {
        self.scan_scope = scan_scope;
        self
    }

    pub fn with_suppress_errors(mut self, suppress_errors: bool) -> Self {
        self.suppress_errors = suppress_errors;
        self
    }

    pub fn with_copy_libraries(mut self, copy_libraries: bool) -> Self {
        self.copy_libraries = copy_libraries;
        self
    }

    pub fn with_locations(mut self, locations: BTreeSet<ConfigurationLocation>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_third_party_classpath(mut self, third_party_classpath: Vec<String>) -> Self {
        self.third_party_classpath = third_party_classpath;
        self
    }

    /// Select a rule set. Membership in `locations` is not checked here;
    /// [`PluginConfig::active_location`] treats a dangling selection as
    /// absent.
    pub fn with_active_location(
        mut self,
        active_location: Option<ConfigurationLocation>,
    ) -> Self {
        self.active_location = active_location;
        self
    }

    pub fn with_scan_before_checkin(mut self, scan_before_checkin: bool) -> Self {
        self.scan_before_checkin = scan_before_checkin;
        self
    }

    pub fn with_last_active_plugin_version(
        mut self,
        last_active_plugin_version: Option<String>,
    ) -> Self {
        self.last_active_plugin_version = last_active_plugin_version;
        self
    }

    /// Freeze the current working state into a new snapshot.
    pub fn build(&self) -> PluginConfig {
        PluginConfig {
            tool_version: self.tool_version.clone(),
            scan_scope: self.scan_scope,
            suppress_errors: self.suppress_errors,
            copy_libraries: self.copy_libraries,
            locations: self.locations.clone(),
            third_party_classpath: self.third_party_classpath.clone(),
            active_location: self.active_location.clone(),
            scan_before_checkin: self.scan_before_checkin,
            last_active_plugin_version: self.last_active_plugin_version.clone(),
        }
    }
}
