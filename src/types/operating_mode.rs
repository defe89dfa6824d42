// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw Miniserver operating-mode code.

use std::fmt;

use super::HvacMode;

/// Operating-mode code as reported by a room controller.
///
/// Codes 0-2 are the automatic regimes; codes above 2 are the manual
/// regimes (3 = heat+cool, 4 = heat, 5 = cool). The forward mapping to
/// [`HvacMode`] is total: codes the table does not know read as `Off`.
///
/// # Examples
///
/// ```
/// use loxr_lib::types::{HvacMode, OperatingMode};
///
/// let mode = OperatingMode::new(4);
/// assert_eq!(mode.hvac_mode(), HvacMode::Heat);
/// assert!(mode.is_manual());
///
/// let auto = OperatingMode::new(1);
/// assert_eq!(auto.hvac_mode(), HvacMode::Auto);
/// assert!(!auto.is_manual());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatingMode(u8);

impl OperatingMode {
    /// Creates an operating mode from a raw Miniserver code.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Creates an operating mode from a raw event value.
    ///
    /// Event payloads carry all values as floats; codes outside the byte
    /// range collapse to an unknown code that reads as [`HvacMode::Off`].
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() && (0.0..=255.0).contains(&value) {
            // Safe: value is checked to be within the byte range
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let code = value.round() as u8;
            Self(code)
        } else {
            Self(u8::MAX)
        }
    }

    /// Returns the raw Miniserver code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        self.0
    }

    /// Returns the semantic HVAC mode for this code.
    #[must_use]
    pub const fn hvac_mode(&self) -> HvacMode {
        match self.0 {
            0..=2 => HvacMode::Auto,
            3 => HvacMode::HeatCool,
            4 => HvacMode::Heat,
            5 => HvacMode::Cool,
            _ => HvacMode::Off,
        }
    }

    /// Returns `true` if this code selects a manual regime.
    ///
    /// Manual regimes take absolute target temperatures; automatic regimes
    /// take offsets against the comfort baseline.
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        self.0 > 2
    }
}

impl From<u8> for OperatingMode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.hvac_mode())
    }
}
