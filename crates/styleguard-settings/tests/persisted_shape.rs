//! Pins the serialized configuration shape the host persists.
//!
//! Field names and representations here are load-bearing: changing any of
//! them breaks configurations written by earlier plugin versions.

use serde_json::json;
use std::collections::BTreeSet;
use styleguard_settings::{PluginConfig, PluginConfigBuilder};
use styleguard_types::{BundledProfile, ConfigurationLocation};

fn populated_config() -> PluginConfig {
    let strict = ConfigurationLocation::bundled(BundledProfile::Strict);
    let team = ConfigurationLocation::local_file("rules/team.xml", "Team rules");

    let mut locations = BTreeSet::new();
    locations.insert(strict.clone());
    locations.insert(team);

    PluginConfigBuilder::for_testing("10.12.4")
        .with_locations(locations)
        .with_active_location(Some(strict))
        .with_third_party_classpath(vec!["lib/extra.jar".to_string()])
        .build()
}

#[test]
fn serialized_shape_matches_the_persisted_layout() {
    let value = serde_json::to_value(populated_config()).expect("serialize");

    assert_eq!(
        value,
        json!({
            "tool_version": "10.12.4",
            "scan_scope": "all_sources",
            "suppress_errors": false,
            "copy_libraries": false,
            "locations": [
                {
                    "kind": { "bundled": "strict" },
                    "description": "Strict checks (bundled)",
                },
                {
                    "kind": { "local_file": { "path": "rules/team.xml" } },
                    "description": "Team rules",
                },
            ],
            "third_party_classpath": ["lib/extra.jar"],
            "active_location": {
                "kind": { "bundled": "strict" },
                "description": "Strict checks (bundled)",
            },
            "scan_before_checkin": false,
            "last_active_plugin_version": "0.0.0-test",
        })
    );
}

#[test]
fn absent_optionals_are_omitted_when_serializing() {
    let config = PluginConfigBuilder::for_testing("10.12.4")
        .with_tool_version(None)
        .with_last_active_plugin_version(None)
        .build();

    let value = serde_json::to_value(config).expect("serialize");
    let object = value.as_object().expect("object");
    assert!(!object.contains_key("tool_version"));
    assert!(!object.contains_key("active_location"));
    assert!(!object.contains_key("last_active_plugin_version"));
}

#[test]
fn shapes_written_without_optionals_still_load() {
    let json = r#"{
        "scan_scope": "main_sources",
        "suppress_errors": true,
        "copy_libraries": false,
        "locations": [],
        "third_party_classpath": [],
        "scan_before_checkin": false
    }"#;

    let config: PluginConfig = serde_json::from_str(json).expect("deserialize");
    assert_eq!(config.tool_version(), None);
    assert!(config.suppress_errors());
    assert_eq!(config.last_active_plugin_version(), None);
    assert!(config.plugin_version_changed("5.61.0"));
}
