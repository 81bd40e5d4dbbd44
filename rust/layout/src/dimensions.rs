// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Footprint resolution from total floor area

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// House footprint in raw units plus the display scale factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Raw width (feet)
    pub width: f64,
    /// Raw length (feet)
    pub length: f64,
    /// Display units per foot
    pub scale: f64,
}

impl Footprint {
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale
    }

    pub fn scaled_length(&self) -> f64 {
        self.length * self.scale
    }

    pub fn wall_height(&self, config: &LayoutConfig) -> f64 {
        config.wall_height * self.scale
    }

    /// Convert a display-unit distance back to feet
    pub fn to_feet(&self, display: f64) -> f64 {
        display / self.scale
    }

    /// Convert a display-unit area back to square feet
    pub fn area_to_sq_ft(&self, display_area: f64) -> f64 {
        display_area / (self.scale * self.scale)
    }
}

/// Resolve width and length from total area at the configured aspect ratio.
///
/// `total_area` must be positive; callers validate it first.
pub fn resolve_footprint(total_area: f64, config: &LayoutConfig) -> Footprint {
    let width = (total_area * config.aspect_ratio).sqrt();
    let length = total_area / width;
    let scale = config.reference_size / width.max(length);

    Footprint {
        width,
        length,
        scale,
    }
}
