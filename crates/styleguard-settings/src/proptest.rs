//! Property-based tests for the builder.
//!
//! These verify the laws the host relies on:
//! - copy-from-snapshot identity
//! - build determinism
//! - weak-reference semantics of the active location

use crate::{PluginConfig, PluginConfigBuilder};
use proptest::prelude::*;
use styleguard_types::{BundledProfile, ConfigurationLocation, ScanScope};

fn arb_scan_scope() -> impl Strategy<Value = ScanScope> {
    prop_oneof![
        Just(ScanScope::Everything),
        Just(ScanScope::AllSources),
        Just(ScanScope::MainSources),
        Just(ScanScope::MainSourcesWithTests),
    ]
}

fn arb_location() -> impl Strategy<Value = ConfigurationLocation> {
    prop_oneof![
        Just(ConfigurationLocation::bundled(BundledProfile::Strict)),
        Just(ConfigurationLocation::bundled(BundledProfile::Relaxed)),
        ("[a-z/]{1,20}", "[A-Za-z ]{1,16}")
            .prop_map(|(path, desc)| ConfigurationLocation::local_file(path, &desc)),
    ]
}

prop_compose! {
    fn arb_config()(
        tool_version in prop::option::of("[0-9]{1,2}\\.[0-9]{1,2}"),
        scan_scope in arb_scan_scope(),
        suppress_errors in any::<bool>(),
        copy_libraries in any::<bool>(),
        locations in prop::collection::btree_set(arb_location(), 0..4),
        classpath in prop::collection::vec("[a-z]{1,8}\\.jar", 0..4),
        active_location in prop::option::of(arb_location()),
        scan_before_checkin in any::<bool>(),
        last_version in prop::option::of("[0-9]\\.[0-9]{1,2}\\.[0-9]"),
    ) -> PluginConfig {
        PluginConfigBuilder::for_testing("seed")
            .with_tool_version(tool_version)
            .with_scan_scope(scan_scope)
            .with_suppress_errors(suppress_errors)
            .with_copy_libraries(copy_libraries)
            .with_locations(locations)
            .with_third_party_classpath(classpath)
            .with_active_location(active_location)
            .with_scan_before_checkin(scan_before_checkin)
            .with_last_active_plugin_version(last_version)
            .build()
    }
}

proptest! {
    #[test]
    fn copying_a_snapshot_rebuilds_it_exactly(config in arb_config()) {
        let rebuilt = PluginConfigBuilder::from_config(&config).build();
        prop_assert_eq!(rebuilt, config);
    }

    #[test]
    fn building_is_deterministic(config in arb_config()) {
        let builder = PluginConfigBuilder::from_config(&config);
        prop_assert_eq!(builder.build(), builder.build());
    }

    #[test]
    fn active_location_is_only_reported_from_the_member_set(config in arb_config()) {
        match config.active_location() {
            Some(active) => prop_assert!(config.locations().contains(active)),
            None => {}
        }
    }

    #[test]
    fn persisted_shape_round_trips(config in arb_config()) {
        let json = serde_json::to_string(&config).expect("serialize");
        let back: PluginConfig = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(back, config);
    }
}

#[test]
fn builder_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PluginConfig>();
    assert_send_sync::<PluginConfigBuilder>();
}
