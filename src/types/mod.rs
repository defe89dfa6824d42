// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for room-controller integration.
//!
//! This module provides type-safe representations of the values exchanged
//! with a Miniserver room controller. Constrained types validate at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`HvacMode`] - Semantic HVAC mode (off/auto/heat/cool/heat+cool)
//! - [`OperatingMode`] - Raw Miniserver operating-mode code
//! - [`AutoModeCode`] - Configured code for the automatic regime (0-2)
//! - [`Temperature`] - Temperature in degrees Celsius
//! - [`ControlUuid`] - Miniserver control/state identifier
//! - [`Preset`] - Timer-mode preset (id + name)

mod auto_mode;
mod control_uuid;
mod hvac_mode;
mod operating_mode;
mod preset;
mod temperature;

pub use auto_mode::AutoModeCode;
pub use control_uuid::ControlUuid;
pub use hvac_mode::HvacMode;
pub use operating_mode::OperatingMode;
pub use preset::Preset;
pub use temperature::Temperature;
