// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the climate platform: structure file in,
//! command requests out.

use std::time::Duration;

use loxr_lib::climate::ClimateConfig;
use loxr_lib::event::{CommandSink, EventBus, ValueUpdate};
use loxr_lib::platform::ClimatePlatform;
use loxr_lib::registry::StructureFile;
use loxr_lib::types::{AutoModeCode, ControlUuid, HvacMode, Temperature};
use tokio::time::sleep;

/// A trimmed-down structure file with two room controllers and one
/// unrelated control, the way a real Miniserver serves it.
const STRUCTURE: &str = r#"{
    "msInfo": {"serialNr": "504F11223344", "projectName": "Test House"},
    "rooms": {
        "room-living": {"name": "Living room"},
        "room-bed": {"name": "Bedroom"}
    },
    "cats": {
        "cat-temp": {"name": "Temperature"}
    },
    "controls": {
        "ctl-living": {
            "name": "Living room climate",
            "type": "IRoomControllerV2",
            "uuidAction": "act-living",
            "room": "room-living",
            "cat": "cat-temp",
            "states": {
                "tempActual": "living-actual",
                "tempTarget": "living-target",
                "comfortTemperature": "living-comfort",
                "operatingMode": "living-mode",
                "activeMode": "living-active"
            },
            "details": {
                "timerModes": [
                    {"id": 0, "name": "Economy"},
                    {"id": 1, "name": "Comfort", "description": "Comfort temperature"},
                    {"id": 2, "name": "Building protection"}
                ]
            }
        },
        "ctl-bed": {
            "name": "Bedroom climate",
            "type": "IRoomControllerV2",
            "uuidAction": "act-bed",
            "room": "room-bed",
            "cat": "cat-temp",
            "states": {
                "tempActual": "bed-actual",
                "operatingMode": "bed-mode"
            }
        },
        "ctl-switch": {
            "name": "Hall switch",
            "type": "Switch",
            "uuidAction": "act-switch"
        }
    }
}"#;

/// Sets up a platform over fresh buses, as the hub does on connect.
fn build_platform(config: ClimateConfig) -> (ClimatePlatform, EventBus, CommandSink) {
    let structure = StructureFile::parse(STRUCTURE).expect("structure file should parse");
    let bus = EventBus::new();
    let sink = CommandSink::new();

    let mut platform = ClimatePlatform::new(config, bus.clone(), sink.clone());
    platform.setup(&structure);

    (platform, bus, sink)
}

/// Publishes an update and gives the listener tasks time to process it.
async fn publish_and_settle(bus: &EventBus, update: ValueUpdate) {
    bus.publish(update);
    sleep(Duration::from_millis(50)).await;
}

// ============================================================================
// Platform Setup Tests
// ============================================================================

mod platform_setup {
    use super::*;

    #[tokio::test]
    async fn one_entity_per_room_controller() {
        let (platform, _bus, _sink) = build_platform(ClimateConfig::default());

        assert_eq!(platform.entity_count(), 2);
        assert!(platform.entity(&ControlUuid::new("act-living")).is_some());
        assert!(platform.entity(&ControlUuid::new("act-bed")).is_some());
        // The switch is not a climate entity
        assert!(platform.entity(&ControlUuid::new("act-switch")).is_none());
    }

    #[tokio::test]
    async fn entities_carry_resolved_labels() {
        let (platform, _bus, _sink) = build_platform(ClimateConfig::default());
        let entity = platform.entity(&ControlUuid::new("act-living")).unwrap();

        assert_eq!(entity.name(), "Living room climate");
        assert_eq!(entity.room(), Some("Living room"));
        assert_eq!(entity.category(), Some("Temperature"));

        let attributes = entity.attributes();
        assert_eq!(attributes.device_type, "IRoomControllerV2");
        assert_eq!(attributes.platform, "loxone");
    }

    #[tokio::test]
    async fn presets_come_from_timer_modes() {
        let (platform, _bus, _sink) = build_platform(ClimateConfig::default());
        let entity = platform.entity(&ControlUuid::new("act-living")).unwrap();

        assert!(entity.supports_presets());
        assert_eq!(
            entity.preset_modes(),
            vec!["Economy", "Comfort", "Building protection"]
        );

        let bedroom = platform.entity(&ControlUuid::new("act-bed")).unwrap();
        assert!(!bedroom.supports_presets());
    }
}

// ============================================================================
// State Flow Tests
// ============================================================================

mod state_flow {
    use super::*;

    #[tokio::test]
    async fn broadcast_updates_reach_the_right_entity() {
        let (platform, bus, _sink) = build_platform(ClimateConfig::default());

        // One decoded event batch carrying values for both controllers
        publish_and_settle(
            &bus,
            ValueUpdate::new()
                .with_value(ControlUuid::new("living-actual"), 21.3)
                .with_value(ControlUuid::new("living-mode"), 1.0)
                .with_value(ControlUuid::new("bed-mode"), 4.0),
        )
        .await;

        let living = platform.entity(&ControlUuid::new("act-living")).unwrap();
        assert_eq!(living.current_temperature(), Some(Temperature::new(21.3)));
        assert_eq!(living.hvac_mode(), HvacMode::Auto);

        let bedroom = platform.entity(&ControlUuid::new("act-bed")).unwrap();
        assert_eq!(bedroom.current_temperature(), None);
        assert_eq!(bedroom.hvac_mode(), HvacMode::Heat);
    }

    #[tokio::test]
    async fn unrelated_events_leave_state_unchanged() {
        let (platform, bus, _sink) = build_platform(ClimateConfig::default());

        publish_and_settle(
            &bus,
            ValueUpdate::new().with_value(ControlUuid::new("living-active"), 1.0),
        )
        .await;
        publish_and_settle(
            &bus,
            ValueUpdate::new()
                .with_value(ControlUuid::new("some-light"), 0.62)
                .with_value(ControlUuid::new("some-blind"), 1.0),
        )
        .await;

        let living = platform.entity(&ControlUuid::new("act-living")).unwrap();
        assert_eq!(living.preset_mode(), Some("Comfort"));
        assert_eq!(living.current_temperature(), None);
    }

    #[tokio::test]
    async fn refresh_callbacks_fire_on_change() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let (platform, bus, _sink) = build_platform(ClimateConfig::default());
        let living = platform.entity(&ControlUuid::new("act-living")).unwrap();

        let refreshes = Arc::new(AtomicUsize::new(0));
        let refreshes_clone = Arc::clone(&refreshes);
        living.on_state_refresh(move || {
            refreshes_clone.fetch_add(1, Ordering::SeqCst);
        });

        publish_and_settle(
            &bus,
            ValueUpdate::new().with_value(ControlUuid::new("living-actual"), 20.0),
        )
        .await;
        // Same value again: no refresh
        publish_and_settle(
            &bus,
            ValueUpdate::new().with_value(ControlUuid::new("living-actual"), 20.0),
        )
        .await;

        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    }
}

// ============================================================================
// Command Flow Tests
// ============================================================================

mod command_flow {
    use super::*;

    #[tokio::test]
    async fn mode_request_is_addressed_to_the_control() {
        let (platform, _bus, sink) = build_platform(ClimateConfig::default());
        let living = platform.entity(&ControlUuid::new("act-living")).unwrap();
        let mut rx = sink.subscribe();

        living.set_hvac_mode(HvacMode::HeatCool);

        let request = rx.recv().await.unwrap();
        assert_eq!(request.target(), &ControlUuid::new("act-living"));
        assert_eq!(request.command(), "setOperatingMode/3");
    }

    #[tokio::test]
    async fn temperature_request_depends_on_regime() {
        let (platform, bus, sink) = build_platform(ClimateConfig::default());
        let living = platform.entity(&ControlUuid::new("act-living")).unwrap();

        // Automatic regime with a known comfort baseline: offset command
        publish_and_settle(
            &bus,
            ValueUpdate::new()
                .with_value(ControlUuid::new("living-mode"), 0.0)
                .with_value(ControlUuid::new("living-comfort"), 22.0),
        )
        .await;

        let mut rx = sink.subscribe();
        living.set_target_temperature(Temperature::new(23.5));
        assert_eq!(rx.recv().await.unwrap().command(), "setComfortModeTemp/1.5");

        // Manual regime: absolute command
        publish_and_settle(
            &bus,
            ValueUpdate::new().with_value(ControlUuid::new("living-mode"), 4.0),
        )
        .await;

        living.set_target_temperature(Temperature::new(23.5));
        assert_eq!(
            rx.recv().await.unwrap().command(),
            "setManualTemperature/23.5"
        );
    }

    #[tokio::test]
    async fn preset_override_round_trip() {
        let (platform, _bus, sink) = build_platform(ClimateConfig::default());
        let living = platform.entity(&ControlUuid::new("act-living")).unwrap();
        let mut rx = sink.subscribe();

        living.set_preset_mode("Building protection");
        assert_eq!(rx.recv().await.unwrap().command(), "override/2");

        // Unknown preset: nothing emitted
        living.set_preset_mode("Vacation");
        assert!(rx.try_recv().is_err());
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod configuration {
    use super::*;

    #[tokio::test]
    async fn configured_auto_code_is_emitted() {
        let config = ClimateConfig::new().with_auto_mode(AutoModeCode::new(1).unwrap());
        let (platform, _bus, sink) = build_platform(config);
        let living = platform.entity(&ControlUuid::new("act-living")).unwrap();
        let mut rx = sink.subscribe();

        living.set_hvac_mode(HvacMode::Auto);

        assert_eq!(rx.recv().await.unwrap().command(), "setOperatingMode/1");
    }

    #[tokio::test]
    async fn auto_code_bound_is_enforced() {
        assert!(AutoModeCode::new(2).is_ok());
        assert!(AutoModeCode::new(3).is_err());
    }
}
