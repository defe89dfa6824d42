// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate platform configuration.

use crate::types::AutoModeCode;

/// Configuration shared by all climate entities of an integration.
///
/// # Examples
///
/// ```
/// use loxr_lib::climate::ClimateConfig;
/// use loxr_lib::types::AutoModeCode;
///
/// let config = ClimateConfig::new().with_auto_mode(AutoModeCode::new(1).unwrap());
/// assert_eq!(config.auto_mode().value(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClimateConfig {
    /// Operating-mode code emitted when the user selects the automatic mode.
    auto_mode: AutoModeCode,
}

impl ClimateConfig {
    /// Creates a configuration with defaults (automatic code 0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the automatic operating-mode code.
    #[must_use]
    pub fn with_auto_mode(mut self, auto_mode: AutoModeCode) -> Self {
        self.auto_mode = auto_mode;
        self
    }

    /// Returns the configured automatic operating-mode code.
    #[must_use]
    pub const fn auto_mode(&self) -> AutoModeCode {
        self.auto_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_auto_mode_is_zero() {
        assert_eq!(ClimateConfig::new().auto_mode().value(), 0);
    }

    #[test]
    fn builder_sets_auto_mode() {
        let config = ClimateConfig::new().with_auto_mode(AutoModeCode::clamped(2));
        assert_eq!(config.auto_mode().value(), 2);
    }
}
