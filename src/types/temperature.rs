// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature type for climate entities.

use std::fmt;

/// A temperature in degrees Celsius.
///
/// Room controllers report and accept temperatures exclusively in Celsius;
/// unit conversion is the hub's concern.
///
/// # Examples
///
/// ```
/// use loxr_lib::types::Temperature;
///
/// let t = Temperature::new(21.5);
/// assert_eq!(t.celsius(), 21.5);
/// assert_eq!(t.to_string(), "21.5 °C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Temperature(f64);

impl Temperature {
    /// Granularity of target-temperature adjustments on a room controller.
    pub const TARGET_STEP: f64 = 0.5;

    /// Creates a temperature from degrees Celsius.
    #[must_use]
    pub const fn new(celsius: f64) -> Self {
        Self(celsius)
    }

    /// Returns the value in degrees Celsius.
    #[must_use]
    pub const fn celsius(&self) -> f64 {
        self.0
    }

    /// Returns the difference to a baseline temperature in Kelvin.
    ///
    /// Used to compute the comfort-temperature offset sent to the
    /// Miniserver in the automatic regimes.
    #[must_use]
    pub fn offset_from(&self, baseline: Self) -> f64 {
        self.0 - baseline.0
    }
}

impl From<f64> for Temperature {
    fn from(celsius: f64) -> Self {
        Self(celsius)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} °C", self.0)
    }
}
