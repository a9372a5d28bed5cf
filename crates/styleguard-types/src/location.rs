use crate::ids;
use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A rule set shipped inside the plugin.
///
/// Declaration order is the sort order: the strict profile always lists
/// before the relaxed one.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BundledProfile {
    Strict,
    Relaxed,
}

impl BundledProfile {
    /// Stable dotted ID referenced by persisted configuration.
    pub fn id(&self) -> &'static str {
        match self {
            BundledProfile::Strict => ids::LOCATION_BUNDLED_STRICT,
            BundledProfile::Relaxed => ids::LOCATION_BUNDLED_RELAXED,
        }
    }

    /// Label shown in the settings UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            BundledProfile::Strict => "Strict checks (bundled)",
            BundledProfile::Relaxed => "Relaxed checks (bundled)",
        }
    }
}

impl fmt::Display for BundledProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Where a rule set lives.
///
/// Declaration order ranks bundled rule sets before user-defined ones;
/// `ConfigurationLocation` relies on this for its total order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    /// Shipped inside the plugin.
    Bundled(BundledProfile),
    /// A rules file on the user machine.
    LocalFile { path: String },
    /// An HTTP(S) URL the host fetches on demand.
    RemoteUrl { url: String },
}

impl LocationKind {
    /// Build a `LocalFile` kind from a raw path string.
    ///
    /// Normalization rules are intentionally simple and deterministic:
    /// - always forward slashes (`/`)
    /// - no leading `./`
    /// - empty input becomes `.`
    pub fn local_file<S: AsRef<str>>(path: S) -> Self {
        let mut v = path.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        LocationKind::LocalFile { path: v }
    }

    /// The normalized file path, for `LocalFile` kinds.
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            LocationKind::LocalFile { path } => Some(Utf8Path::new(path)),
            _ => None,
        }
    }
}

/// One available rule-set definition.
///
/// Identity is by value. Locations live in ordered sets, so the total
/// order below is part of this entity's contract.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ConfigurationLocation {
    kind: LocationKind,
    description: String,
}

impl ConfigurationLocation {
    /// A bundled rule set, labelled with the profile's display name.
    pub fn bundled(profile: BundledProfile) -> Self {
        Self {
            kind: LocationKind::Bundled(profile),
            description: profile.display_name().to_string(),
        }
    }

    pub fn local_file<S: AsRef<str>>(path: S, description: &str) -> Self {
        Self {
            kind: LocationKind::local_file(path),
            description: description.to_string(),
        }
    }

    pub fn remote_url(url: &str, description: &str) -> Self {
        Self {
            kind: LocationKind::RemoteUrl {
                url: url.to_string(),
            },
            description: description.to_string(),
        }
    }

    pub fn kind(&self) -> &LocationKind {
        &self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_bundled(&self) -> bool {
        matches!(self.kind, LocationKind::Bundled(_))
    }
}

/// Total order: `(kind, description)`.
///
/// `LocationKind` compares by declaration order, so bundled-strict <
/// bundled-relaxed < local file (by path) < remote URL (by url); ties fall
/// back to the description. The order is stable across releases because
/// persisted location sets depend on it.
impl Ord for ConfigurationLocation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.description.cmp(&other.description))
    }
}

impl PartialOrd for ConfigurationLocation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ConfigurationLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LocationKind::Bundled(profile) => write!(f, "{} ({})", self.description, profile),
            LocationKind::LocalFile { path } => write!(f, "{} ({})", self.description, path),
            LocationKind::RemoteUrl { url } => write!(f, "{} ({})", self.description, url),
        }
    }
}
