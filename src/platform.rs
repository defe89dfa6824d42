// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate platform setup.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::climate::{ClimateConfig, RoomController};
use crate::event::{CommandSink, EventBus};
use crate::registry::{RoomControllerDescriptor, StructureFile};
use crate::types::ControlUuid;

/// Builds and hosts the climate entities of an integration.
///
/// The platform creates one [`RoomController`] per room-controller control
/// in the structure file and spawns a listener task per entity that feeds
/// bus events into [`RoomController::handle_update`]. Entities are shared
/// via `Arc`; the listener tasks are aborted when the platform is dropped.
///
/// # Examples
///
/// ```no_run
/// use loxr_lib::climate::ClimateConfig;
/// use loxr_lib::event::{CommandSink, EventBus};
/// use loxr_lib::platform::ClimatePlatform;
/// use loxr_lib::registry::StructureFile;
///
/// # async fn example(structure_json: &str) -> loxr_lib::Result<()> {
/// let structure = StructureFile::parse(structure_json)?;
///
/// let bus = EventBus::new();
/// let sink = CommandSink::new();
/// let mut platform = ClimatePlatform::new(ClimateConfig::default(), bus.clone(), sink);
/// platform.setup(&structure);
///
/// for entity in platform.entities() {
///     println!("{}: {}", entity.name(), entity.hvac_mode());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ClimatePlatform {
    config: ClimateConfig,
    event_bus: EventBus,
    sink: CommandSink,
    entities: Vec<Arc<RoomController>>,
    listeners: Vec<JoinHandle<()>>,
}

impl ClimatePlatform {
    /// Creates an empty platform over the given buses.
    #[must_use]
    pub fn new(config: ClimateConfig, event_bus: EventBus, sink: CommandSink) -> Self {
        Self {
            config,
            event_bus,
            sink,
            entities: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Creates entities for every room controller in the structure file.
    ///
    /// Returns the number of entities added. Must be called from within a
    /// tokio runtime; each entity gets its own listener task.
    pub fn setup(&mut self, structure: &StructureFile) -> usize {
        let descriptors = structure.room_controllers();
        let count = descriptors.len();

        for descriptor in descriptors {
            self.add_entity(descriptor);
        }

        tracing::info!(count, "Climate platform set up");
        count
    }

    /// Creates a single entity from a descriptor and starts its listener.
    pub fn add_entity(&mut self, descriptor: RoomControllerDescriptor) -> Arc<RoomController> {
        let entity = Arc::new(RoomController::new(
            descriptor,
            &self.config,
            self.sink.clone(),
        ));

        tracing::debug!(entity = %entity.name(), uuid = %entity.uuid_action(), "Adding climate entity");

        self.listeners.push(Self::spawn_listener(
            &self.event_bus,
            Arc::clone(&entity),
        ));
        self.entities.push(Arc::clone(&entity));
        entity
    }

    fn spawn_listener(event_bus: &EventBus, entity: Arc<RoomController>) -> JoinHandle<()> {
        let mut rx = event_bus.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(update) => {
                        entity.handle_update(&update);
                    }
                    Err(RecvError::Lagged(missed)) => {
                        tracing::warn!(
                            entity = %entity.name(),
                            missed,
                            "Listener lagged; value updates dropped"
                        );
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }

    /// Returns all hosted entities.
    #[must_use]
    pub fn entities(&self) -> &[Arc<RoomController>] {
        &self.entities
    }

    /// Returns the number of hosted entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Looks an entity up by its action identifier.
    #[must_use]
    pub fn entity(&self, uuid_action: &ControlUuid) -> Option<Arc<RoomController>> {
        self.entities
            .iter()
            .find(|entity| entity.uuid_action() == uuid_action)
            .cloned()
    }

    /// Stops all listener tasks.
    ///
    /// Entities stay usable for reads and writes; they just no longer
    /// receive bus events.
    pub fn shutdown(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.abort();
        }
    }
}

impl Drop for ClimatePlatform {
    fn drop(&mut self) {
        self.shutdown();
    }
}
