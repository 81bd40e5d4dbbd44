// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named example houses

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::{HouseParameters, HouseStyle};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub parameters: HouseParameters,
}

impl Preset {
    /// Kebab-case form of the name, e.g. `modern-family-home`
    pub fn slug(&self) -> String {
        self.name.to_ascii_lowercase().replace(' ', "-")
    }
}

pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "Modern Family Home",
            parameters: HouseParameters {
                total_area: 2500.0,
                bedrooms: 4,
                bathrooms: 3,
                floors: 2,
                style: HouseStyle::Modern,
                has_garage: true,
                has_garden: true,
            },
        },
        Preset {
            name: "Minimalist Studio",
            parameters: HouseParameters {
                total_area: 800.0,
                bedrooms: 1,
                bathrooms: 1,
                floors: 1,
                style: HouseStyle::Minimalist,
                has_garage: false,
                has_garden: false,
            },
        },
        Preset {
            name: "Traditional Cottage",
            parameters: HouseParameters {
                total_area: 1800.0,
                bedrooms: 3,
                bathrooms: 2,
                floors: 1,
                style: HouseStyle::Traditional,
                has_garage: true,
                has_garden: true,
            },
        },
    ]
}

/// Look up a preset by display name or slug, ignoring case.
pub fn find_preset(name: &str) -> Result<Preset> {
    let wanted = name.trim();
    presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(wanted) || preset.slug().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| Error::UnknownPreset(name.to_string()))
}
