// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layout configuration, optionally loaded from environment variables.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Display size the larger footprint dimension is normalized to
pub const DEFAULT_REFERENCE_SIZE: f64 = 20.0;
/// Footprint width / length
pub const DEFAULT_ASPECT_RATIO: f64 = 4.0 / 3.0;
/// Wall height before scaling
pub const DEFAULT_WALL_HEIGHT: f64 = 3.0;

/// Layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Display size of the larger footprint dimension.
    pub reference_size: f64,
    /// Footprint width divided by length.
    pub aspect_ratio: f64,
    /// Wall height, multiplied by the scale factor for consumers.
    pub wall_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            reference_size: DEFAULT_REFERENCE_SIZE,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            wall_height: DEFAULT_WALL_HEIGHT,
        }
    }
}

impl LayoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: f64| {
            lookup(key)
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(default)
        };
        Self {
            reference_size: read("HOUSE_PLAN_REFERENCE_SIZE", DEFAULT_REFERENCE_SIZE),
            aspect_ratio: read("HOUSE_PLAN_ASPECT_RATIO", DEFAULT_ASPECT_RATIO),
            wall_height: read("HOUSE_PLAN_WALL_HEIGHT", DEFAULT_WALL_HEIGHT),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("reference_size", self.reference_size),
            ("aspect_ratio", self.aspect_ratio),
            ("wall_height", self.wall_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
