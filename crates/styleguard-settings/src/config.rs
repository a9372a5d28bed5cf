use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use styleguard_types::{ConfigurationLocation, ScanScope};

/// Immutable snapshot of the effective plugin configuration.
///
/// Snapshots are created by [`PluginConfigBuilder::build`] and never mutated
/// afterwards, so they are freely shareable across threads. Structural
/// equality over all nine fields is the "configuration changed" signal.
///
/// The serialized shape is persisted by the host and must stay stable
/// across plugin versions; `last_active_plugin_version` exists to migrate
/// older persisted shapes.
///
/// [`PluginConfigBuilder::build`]: crate::PluginConfigBuilder::build
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PluginConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) tool_version: Option<String>,
    pub(crate) scan_scope: ScanScope,
    pub(crate) suppress_errors: bool,
    pub(crate) copy_libraries: bool,
    pub(crate) locations: BTreeSet<ConfigurationLocation>,
    pub(crate) third_party_classpath: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) active_location: Option<ConfigurationLocation>,
    pub(crate) scan_before_checkin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) last_active_plugin_version: Option<String>,
}

impl PluginConfig {
    /// Version identifier of the external checking engine.
    pub fn tool_version(&self) -> Option<&str> {
        self.tool_version.as_deref()
    }

    pub fn scan_scope(&self) -> ScanScope {
        self.scan_scope
    }

    /// Whether detected issues are downgraded to warnings.
    pub fn suppress_errors(&self) -> bool {
        self.suppress_errors
    }

    /// Whether third-party libraries are copied next to the checking engine.
    pub fn copy_libraries(&self) -> bool {
        self.copy_libraries
    }

    /// Available rule-set definitions, in the entity's total order.
    pub fn locations(&self) -> &BTreeSet<ConfigurationLocation> {
        &self.locations
    }

    /// Extra classpath entries, order-significant.
    pub fn third_party_classpath(&self) -> &[String] {
        &self.third_party_classpath
    }

    /// The currently selected rule set.
    ///
    /// Weak-reference semantics: the selection is only reported while it is
    /// a member of [`locations`](Self::locations); a dangling selection
    /// reads as absent.
    pub fn active_location(&self) -> Option<&ConfigurationLocation> {
        self.active_location
            .as_ref()
            .filter(|active| self.locations.contains(*active))
    }

    /// Whether a scan runs before a commit-like action.
    pub fn scan_before_checkin(&self) -> bool {
        self.scan_before_checkin
    }

    /// Host plugin version that last wrote this configuration.
    pub fn last_active_plugin_version(&self) -> Option<&str> {
        self.last_active_plugin_version.as_deref()
    }

    /// True when this configuration was written by a different plugin
    /// version than `current_version` (or by none at all). The host uses
    /// this to trigger settings migration after an upgrade.
    pub fn plugin_version_changed(&self, current_version: &str) -> bool {
        self.last_active_plugin_version.as_deref() != Some(current_version)
    }
}
