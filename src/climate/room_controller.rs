// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate entity for an IRoomControllerV2 control.

use parking_lot::RwLock;

use crate::command::ClimateCommand;
use crate::event::{CommandRequest, CommandSink, ValueUpdate};
use crate::registry::RoomControllerDescriptor;
use crate::subscription::{CallbackRegistry, SubscriptionId};
use crate::types::{AutoModeCode, ControlUuid, HvacMode, OperatingMode, Preset, Temperature};

use super::config::ClimateConfig;
use super::state::{AttributeCache, StateAttribute};

/// Platform tag reported in entity attributes.
pub const PLATFORM: &str = "loxone";

/// Hub-facing attributes of a climate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityAttributes {
    /// The control's action identifier.
    pub uuid: ControlUuid,
    /// The Miniserver control type.
    pub device_type: String,
    /// Resolved room label, if the control is assigned to a room.
    pub room: Option<String>,
    /// Resolved category label, if the control is assigned to a category.
    pub category: Option<String>,
    /// The integration platform tag.
    pub platform: &'static str,
}

/// Climate entity mapping a room controller onto the hub's climate model.
///
/// The entity caches the last-observed values of the state attributes it
/// tracks and exposes them through the generic climate accessors. Write
/// methods translate hub requests into Miniserver command strings and
/// publish them on the send channel, fire-and-forget.
///
/// All of the entity's own logic is infallible: unknown presets and
/// unobserved attributes degrade to `None` reads or silent no-ops.
///
/// # Examples
///
/// ```
/// use loxr_lib::climate::{ClimateConfig, RoomController, StateAttribute, StateBindings};
/// use loxr_lib::event::{CommandSink, ValueUpdate};
/// use loxr_lib::registry::RoomControllerDescriptor;
/// use loxr_lib::types::{ControlUuid, HvacMode};
///
/// let mut descriptor = RoomControllerDescriptor::named("Living room", "action-1");
/// descriptor.bindings =
///     StateBindings::new().bind(StateAttribute::OperatingMode, ControlUuid::new("mode-1"));
///
/// let entity = RoomController::new(descriptor, &ClimateConfig::default(), CommandSink::new());
/// assert_eq!(entity.hvac_mode(), HvacMode::Off);
///
/// entity.handle_update(&ValueUpdate::new().with_value(ControlUuid::new("mode-1"), 4.0));
/// assert_eq!(entity.hvac_mode(), HvacMode::Heat);
/// ```
#[derive(Debug)]
pub struct RoomController {
    uuid_action: ControlUuid,
    name: String,
    device_type: String,
    room: Option<String>,
    category: Option<String>,
    auto_mode: AutoModeCode,
    presets: Vec<Preset>,
    cache: RwLock<AttributeCache>,
    callbacks: CallbackRegistry,
    sink: CommandSink,
}

impl RoomController {
    /// Creates a climate entity from a registry descriptor.
    #[must_use]
    pub fn new(
        descriptor: RoomControllerDescriptor,
        config: &ClimateConfig,
        sink: CommandSink,
    ) -> Self {
        Self {
            uuid_action: descriptor.uuid_action,
            name: descriptor.name,
            device_type: descriptor.device_type,
            room: descriptor.room,
            category: descriptor.category,
            auto_mode: config.auto_mode(),
            presets: descriptor.presets,
            cache: RwLock::new(AttributeCache::new(descriptor.bindings)),
            callbacks: CallbackRegistry::new(),
            sink,
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Returns the entity's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the control's action identifier.
    #[must_use]
    pub fn uuid_action(&self) -> &ControlUuid {
        &self.uuid_action
    }

    /// Returns the resolved room label.
    #[must_use]
    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    /// Returns the resolved category label.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the hub-facing entity attributes.
    #[must_use]
    pub fn attributes(&self) -> EntityAttributes {
        EntityAttributes {
            uuid: self.uuid_action.clone(),
            device_type: self.device_type.clone(),
            room: self.room.clone(),
            category: self.category.clone(),
            platform: PLATFORM,
        }
    }

    // =========================================================================
    // Capabilities
    // =========================================================================

    /// The entity always accepts target-temperature requests.
    #[must_use]
    pub const fn supports_target_temperature(&self) -> bool {
        true
    }

    /// Returns `true` if the control defines presets to override to.
    #[must_use]
    pub fn supports_presets(&self) -> bool {
        !self.presets.is_empty()
    }

    /// Returns the modes the user can select.
    #[must_use]
    pub const fn hvac_modes(&self) -> &'static [HvacMode] {
        &HvacMode::SELECTABLE
    }

    /// Returns the configured presets.
    #[must_use]
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Returns the selectable preset names.
    #[must_use]
    pub fn preset_modes(&self) -> Vec<&str> {
        self.presets.iter().map(Preset::name).collect()
    }

    /// Returns the supported step of target-temperature adjustments.
    #[must_use]
    pub const fn target_temperature_step(&self) -> f64 {
        Temperature::TARGET_STEP
    }

    /// Returns the unit of measurement used by the platform.
    #[must_use]
    pub const fn temperature_unit(&self) -> &'static str {
        "°C"
    }

    // =========================================================================
    // State reads
    // =========================================================================

    fn state_value(&self, attribute: StateAttribute) -> Option<f64> {
        self.cache.read().value(attribute)
    }

    /// Returns the measured room temperature.
    #[must_use]
    pub fn current_temperature(&self) -> Option<Temperature> {
        self.state_value(StateAttribute::ActualTemperature)
            .map(Temperature::new)
    }

    /// Returns the temperature the controller steers towards.
    #[must_use]
    pub fn target_temperature(&self) -> Option<Temperature> {
        self.state_value(StateAttribute::TargetTemperature)
            .map(Temperature::new)
    }

    /// Returns the comfort baseline used by the automatic regimes.
    #[must_use]
    pub fn comfort_temperature(&self) -> Option<Temperature> {
        self.state_value(StateAttribute::ComfortTemperature)
            .map(Temperature::new)
    }

    /// Returns the raw operating mode, if ever observed.
    #[must_use]
    pub fn operating_mode(&self) -> Option<OperatingMode> {
        self.state_value(StateAttribute::OperatingMode)
            .map(OperatingMode::from_value)
    }

    /// Returns the semantic HVAC mode.
    ///
    /// An operating mode that was never observed reads as [`HvacMode::Off`].
    #[must_use]
    pub fn hvac_mode(&self) -> HvacMode {
        self.operating_mode()
            .map_or(HvacMode::Off, |mode| mode.hvac_mode())
    }

    /// Returns the name of the active preset.
    ///
    /// Returns `None` if the active preset id was never observed or does
    /// not appear in the configured preset list.
    #[must_use]
    pub fn preset_mode(&self) -> Option<&str> {
        let value = self.state_value(StateAttribute::ActiveMode)?;
        self.preset_by_value(value).map(Preset::name)
    }

    fn preset_by_value(&self, value: f64) -> Option<&Preset> {
        if !value.is_finite() {
            return None;
        }
        // Safe: preset ids are small positive integers
        #[allow(clippy::cast_possible_truncation)]
        let id = value.round() as i64;
        self.presets.iter().find(|p| i64::from(p.id()) == id)
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    /// Feeds a broadcast value update into the entity.
    ///
    /// Tracked identifiers present in the update overwrite the cached
    /// values. If anything actually changed, the registered state-refresh
    /// callbacks fire (and the mode callbacks too, if the semantic mode
    /// moved). Updates carrying only unrelated identifiers are ignored.
    ///
    /// Returns `true` if the cached state changed.
    pub fn handle_update(&self, update: &ValueUpdate) -> bool {
        let previous_mode = self.hvac_mode();

        let changed = self.cache.write().apply(update);
        if !changed {
            return false;
        }

        tracing::debug!(
            entity = %self.name,
            observed = self.cache.read().observed_count(),
            "State attributes updated"
        );
        self.callbacks.notify_state_refresh();

        let mode = self.hvac_mode();
        if mode != previous_mode {
            self.callbacks.notify_hvac_mode_changed(mode);
        }

        true
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Requests a new target temperature.
    ///
    /// In a manual regime (operating-mode code above 2) the temperature is
    /// sent as-is; otherwise it is converted into an offset against the
    /// cached comfort baseline. With no comfort baseline observed yet, the
    /// request is dropped.
    pub fn set_target_temperature(&self, temperature: Temperature) {
        let manual = self
            .operating_mode()
            .is_some_and(|mode| mode.is_manual());

        if manual {
            self.send_command(&ClimateCommand::manual_temperature(temperature));
        } else if let Some(comfort) = self.comfort_temperature() {
            let offset = temperature.offset_from(comfort);
            self.send_command(&ClimateCommand::comfort_offset(offset));
        } else {
            tracing::debug!(
                entity = %self.name,
                requested = %temperature,
                "Comfort baseline not observed yet; dropping temperature request"
            );
        }
    }

    /// Requests a new HVAC mode.
    ///
    /// `Auto` maps to the configured automatic code; `Off` has no
    /// Miniserver command and is dropped.
    pub fn set_hvac_mode(&self, mode: HvacMode) {
        let Some(code) = mode.miniserver_code(self.auto_mode) else {
            tracing::warn!(entity = %self.name, %mode, "Mode has no Miniserver code");
            return;
        };

        self.send_command(&ClimateCommand::operating_mode(code));
        self.callbacks.notify_state_refresh();
    }

    /// Requests a preset override by name.
    ///
    /// Unknown preset names are dropped without error.
    pub fn set_preset_mode(&self, preset_name: &str) {
        let Some(preset) = self.presets.iter().find(|p| p.name() == preset_name) else {
            tracing::debug!(entity = %self.name, preset = preset_name, "Unknown preset");
            return;
        };

        self.send_command(&ClimateCommand::override_preset(preset.id()));
        self.callbacks.notify_state_refresh();
    }

    fn send_command(&self, command: &ClimateCommand) {
        let request = CommandRequest::for_command(self.uuid_action.clone(), command);
        tracing::debug!(
            entity = %self.name,
            uuid = %request.target(),
            command = request.command(),
            "Publishing command"
        );
        self.sink.send(request);
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Registers a callback invoked when the cached state changed.
    pub fn on_state_refresh<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callbacks.on_state_refresh(callback)
    }

    /// Registers a callback invoked when the semantic HVAC mode changed.
    pub fn on_hvac_mode_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(HvacMode) + Send + Sync + 'static,
    {
        self.callbacks.on_hvac_mode_changed(callback)
    }

    /// Removes a subscription.
    ///
    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::broadcast::error::TryRecvError;

    use crate::climate::StateBindings;

    use super::*;

    fn descriptor() -> RoomControllerDescriptor {
        let mut d = RoomControllerDescriptor::named("Living room", "action-1");
        d.bindings = StateBindings::new()
            .bind(StateAttribute::ActualTemperature, ControlUuid::new("actual"))
            .bind(StateAttribute::TargetTemperature, ControlUuid::new("target"))
            .bind(
                StateAttribute::ComfortTemperature,
                ControlUuid::new("comfort"),
            )
            .bind(StateAttribute::OperatingMode, ControlUuid::new("mode"))
            .bind(StateAttribute::ActiveMode, ControlUuid::new("active"));
        d.presets = vec![Preset::new(1, "Economy"), Preset::new(2, "Comfort")];
        d
    }

    fn entity_with_sink() -> (RoomController, CommandSink) {
        let sink = CommandSink::new();
        let entity = RoomController::new(descriptor(), &ClimateConfig::default(), sink.clone());
        (entity, sink)
    }

    fn update(id: &str, value: f64) -> ValueUpdate {
        ValueUpdate::new().with_value(ControlUuid::new(id), value)
    }

    #[test]
    fn unobserved_state_reads_unknown() {
        let (entity, _sink) = entity_with_sink();

        assert_eq!(entity.current_temperature(), None);
        assert_eq!(entity.target_temperature(), None);
        assert_eq!(entity.hvac_mode(), HvacMode::Off);
        assert_eq!(entity.preset_mode(), None);
    }

    #[test]
    fn unrelated_event_changes_nothing() {
        let (entity, _sink) = entity_with_sink();
        entity.handle_update(&update("mode", 4.0));

        let refreshes = Arc::new(AtomicUsize::new(0));
        let refreshes_clone = Arc::clone(&refreshes);
        entity.on_state_refresh(move || {
            refreshes_clone.fetch_add(1, Ordering::SeqCst);
        });

        let changed = entity.handle_update(&update("somebody-elses-state", 1.0));

        assert!(!changed);
        assert_eq!(entity.hvac_mode(), HvacMode::Heat);
        assert_eq!(entity.preset_mode(), None);
        assert_eq!(refreshes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn mode_code_four_reads_heat() {
        let (entity, _sink) = entity_with_sink();
        entity.handle_update(&update("mode", 4.0));
        assert_eq!(entity.hvac_mode(), HvacMode::Heat);
    }

    #[test]
    fn set_hvac_mode_heat_emits_code_four() {
        let (entity, sink) = entity_with_sink();
        let mut rx = sink.subscribe();

        entity.set_hvac_mode(HvacMode::Heat);

        let request = rx.try_recv().unwrap();
        assert_eq!(request.target(), &ControlUuid::new("action-1"));
        assert_eq!(request.command(), "setOperatingMode/4");
    }

    #[test]
    fn set_hvac_mode_auto_uses_configured_code() {
        let sink = CommandSink::new();
        let config = ClimateConfig::new().with_auto_mode(AutoModeCode::new(2).unwrap());
        let entity = RoomController::new(descriptor(), &config, sink.clone());
        let mut rx = sink.subscribe();

        entity.set_hvac_mode(HvacMode::Auto);

        assert_eq!(rx.try_recv().unwrap().command(), "setOperatingMode/2");
    }

    #[test]
    fn set_hvac_mode_off_emits_nothing() {
        let (entity, sink) = entity_with_sink();
        let mut rx = sink.subscribe();

        entity.set_hvac_mode(HvacMode::Off);

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn manual_regime_sets_absolute_temperature() {
        let (entity, sink) = entity_with_sink();
        entity.handle_update(&update("mode", 3.0));
        let mut rx = sink.subscribe();

        entity.set_target_temperature(Temperature::new(21.5));

        assert_eq!(rx.try_recv().unwrap().command(), "setManualTemperature/21.5");
    }

    #[test]
    fn automatic_regime_sets_comfort_offset() {
        let (entity, sink) = entity_with_sink();
        entity.handle_update(&update("mode", 1.0));
        entity.handle_update(&update("comfort", 22.0));
        let mut rx = sink.subscribe();

        entity.set_target_temperature(Temperature::new(21.5));

        assert_eq!(rx.try_recv().unwrap().command(), "setComfortModeTemp/-0.5");
    }

    #[test]
    fn unobserved_mode_takes_comfort_branch() {
        let (entity, sink) = entity_with_sink();
        entity.handle_update(&update("comfort", 20.0));
        let mut rx = sink.subscribe();

        entity.set_target_temperature(Temperature::new(22.0));

        assert_eq!(rx.try_recv().unwrap().command(), "setComfortModeTemp/2");
    }

    #[test]
    fn missing_comfort_baseline_drops_request() {
        let (entity, sink) = entity_with_sink();
        entity.handle_update(&update("mode", 0.0));
        let mut rx = sink.subscribe();

        entity.set_target_temperature(Temperature::new(22.0));

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn known_preset_emits_override() {
        let (entity, sink) = entity_with_sink();
        let mut rx = sink.subscribe();

        entity.set_preset_mode("Comfort");

        assert_eq!(rx.try_recv().unwrap().command(), "override/2");
    }

    #[test]
    fn unknown_preset_emits_nothing() {
        let (entity, sink) = entity_with_sink();
        let mut rx = sink.subscribe();

        entity.set_preset_mode("Vacation");

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn preset_mode_maps_active_id_to_name() {
        let (entity, _sink) = entity_with_sink();
        entity.handle_update(&update("active", 1.0));
        assert_eq!(entity.preset_mode(), Some("Economy"));

        entity.handle_update(&update("active", 9.0));
        assert_eq!(entity.preset_mode(), None);
    }

    #[test]
    fn refresh_fires_on_change_only() {
        let (entity, _sink) = entity_with_sink();
        let refreshes = Arc::new(AtomicUsize::new(0));
        let refreshes_clone = Arc::clone(&refreshes);
        entity.on_state_refresh(move || {
            refreshes_clone.fetch_add(1, Ordering::SeqCst);
        });

        entity.handle_update(&update("actual", 20.5));
        entity.handle_update(&update("actual", 20.5));
        entity.handle_update(&update("actual", 21.0));

        assert_eq!(refreshes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn mode_callback_fires_on_semantic_change() {
        let (entity, _sink) = entity_with_sink();
        let modes = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let modes_clone = Arc::clone(&modes);
        entity.on_hvac_mode_changed(move |mode| {
            modes_clone.lock().push(mode);
        });

        entity.handle_update(&update("mode", 1.0));
        // 1 -> 2 is still Auto: no semantic change
        entity.handle_update(&update("mode", 2.0));
        entity.handle_update(&update("mode", 5.0));

        assert_eq!(modes.lock().as_slice(), &[HvacMode::Auto, HvacMode::Cool]);
    }

    #[test]
    fn attributes_describe_entity() {
        let (entity, _sink) = entity_with_sink();
        let attributes = entity.attributes();

        assert_eq!(attributes.uuid, ControlUuid::new("action-1"));
        assert_eq!(attributes.platform, "loxone");
    }

    #[test]
    fn capability_surface() {
        let (entity, _sink) = entity_with_sink();

        assert!(entity.supports_target_temperature());
        assert!(entity.supports_presets());
        assert_eq!(entity.preset_modes(), vec!["Economy", "Comfort"]);
        assert_eq!(entity.hvac_modes().len(), 4);
        assert_eq!(entity.target_temperature_step(), 0.5);
        assert_eq!(entity.temperature_unit(), "°C");
    }
}
