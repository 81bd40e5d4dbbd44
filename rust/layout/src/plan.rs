// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assembled house plan: parameters, footprint and generated rooms, plus
//! the derived data renderers and exporters read from it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::dimensions::{resolve_footprint, Footprint};
use crate::error::Result;
use crate::styles::generate_layout_design;
use crate::types::{HouseParameters, PlanBounds, Room, RoomKind};

/// Location name for points not inside any room
pub const OUTSIDE: &str = "Outside";

/// A generated house plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousePlan {
    pub parameters: HouseParameters,
    pub footprint: Footprint,
    /// Wall height in display units
    pub wall_height: f64,
    pub rooms: Vec<Room>,
}

/// Room annotation in real-world units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomLabel {
    pub name: String,
    pub width_ft: f64,
    pub length_ft: f64,
    pub area_sq_ft: f64,
    /// e.g. `12.0' × 10.0'`
    pub dimensions: String,
    /// e.g. `120.0 sq ft`
    pub area: String,
}

/// Validate parameters and configuration, then generate the plan.
pub fn generate_house_plan(params: &HouseParameters, config: &LayoutConfig) -> Result<HousePlan> {
    params.validate()?;
    config.validate()?;

    let footprint = resolve_footprint(params.total_area, config);
    let rooms = generate_layout_design(
        params,
        footprint.scaled_width(),
        footprint.scaled_length(),
    );

    tracing::info!(
        style = %params.style,
        total_area = params.total_area,
        width_ft = footprint.width,
        length_ft = footprint.length,
        scale = footprint.scale,
        rooms = rooms.len(),
        "generated house plan"
    );

    Ok(HousePlan {
        parameters: params.clone(),
        wall_height: footprint.wall_height(config),
        footprint,
        rooms,
    })
}

impl HousePlan {
    pub fn labels(&self) -> Vec<RoomLabel> {
        self.rooms
            .iter()
            .map(|room| {
                let width_ft = self.footprint.to_feet(room.width);
                let length_ft = self.footprint.to_feet(room.length);
                let area_sq_ft = self.footprint.area_to_sq_ft(room.area());
                RoomLabel {
                    name: room.name.clone(),
                    width_ft,
                    length_ft,
                    area_sq_ft,
                    dimensions: format!("{:.1}' × {:.1}'", width_ft, length_ft),
                    area: format!("{:.1} sq ft", area_sq_ft),
                }
            })
            .collect()
    }

    /// Bounds of all rooms, or of the scaled footprint when there are none
    pub fn bounds(&self) -> PlanBounds {
        let mut rooms = self.rooms.iter().map(Room::bounds);
        match rooms.next() {
            Some(first) => rooms.fold(first, |acc, b| acc.union(&b)),
            None => {
                let half_w = self.footprint.scaled_width() / 2.0;
                let half_l = self.footprint.scaled_length() / 2.0;
                PlanBounds {
                    min_x: -half_w,
                    min_z: -half_l,
                    max_x: half_w,
                    max_z: half_l,
                }
            }
        }
    }

    /// First room in sequence order containing the point
    pub fn room_at(&self, x: f64, z: f64) -> Option<&Room> {
        self.rooms.iter().find(|room| room.contains(x, z))
    }

    pub fn location_name(&self, x: f64, z: f64) -> &str {
        self.room_at(x, z).map_or(OUTSIDE, |room| room.name.as_str())
    }

    pub fn room_counts(&self) -> FxHashMap<RoomKind, usize> {
        let mut counts = FxHashMap::default();
        for room in &self.rooms {
            *counts.entry(room.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Details block for exported documents
    pub fn summary_lines(&self) -> Vec<String> {
        let params = &self.parameters;
        let features: Vec<&str> = [
            params.has_garage.then_some("Garage"),
            params.has_garden.then_some("Garden"),
        ]
        .into_iter()
        .flatten()
        .collect();

        vec![
            format!("Style: {}", params.style.display_name()),
            format!("Total Area: {} sq ft", params.total_area),
            format!("Bedrooms: {}", params.bedrooms),
            format!("Bathrooms: {}", params.bathrooms),
            format!("Floors: {}", params.floors),
            format!("Features: {}", features.join(", ")),
        ]
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
