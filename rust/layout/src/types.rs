// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for house parameters and generated room layouts
//!
//! All positions (rooms, furniture, openings) share one coordinate plane
//! whose origin is the footprint center. Negative `z` is the front of the
//! house, positive `z` the back.

use std::fmt;
use std::str::FromStr;

use nalgebra::Point2;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Smallest total area accepted by [`HouseParameters::validate`] (sq ft)
pub const MIN_TOTAL_AREA: f64 = 500.0;
/// Allowed bedroom count range
pub const BEDROOM_RANGE: (u32, u32) = (1, 10);
/// Allowed bathroom count range
pub const BATHROOM_RANGE: (u32, u32) = (1, 10);
/// Allowed floor count range
pub const FLOOR_RANGE: (u32, u32) = (1, 4);

/// Architectural style preset
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HouseStyle {
    #[default]
    Modern,
    Traditional,
    Contemporary,
    Minimalist,
}

impl HouseStyle {
    pub const ALL: [HouseStyle; 4] = [
        HouseStyle::Modern,
        HouseStyle::Traditional,
        HouseStyle::Contemporary,
        HouseStyle::Minimalist,
    ];

    /// Lowercase tag used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            HouseStyle::Modern => "modern",
            HouseStyle::Traditional => "traditional",
            HouseStyle::Contemporary => "contemporary",
            HouseStyle::Minimalist => "minimalist",
        }
    }

    /// Capitalized name for documents and labels
    pub fn display_name(&self) -> &'static str {
        match self {
            HouseStyle::Modern => "Modern",
            HouseStyle::Traditional => "Traditional",
            HouseStyle::Contemporary => "Contemporary",
            HouseStyle::Minimalist => "Minimalist",
        }
    }

    /// Wire tag lookup: only the exact lowercase tags are recognized,
    /// anything else maps to [`HouseStyle::Modern`].
    pub fn from_tag(tag: &str) -> Self {
        match HouseStyle::ALL.into_iter().find(|style| style.as_str() == tag) {
            Some(style) => style,
            None => {
                tracing::warn!(tag, "unrecognized house style, falling back to modern");
                HouseStyle::Modern
            }
        }
    }
}

impl fmt::Display for HouseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict, case-insensitive parse for command-line input.
impl FromStr for HouseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        HouseStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for HouseStyle {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(HouseStyle::from_tag(&tag))
    }
}

/// User-specified house parameters for one generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseParameters {
    /// Total floor area in square feet
    pub total_area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Accepted but not used to partition the layout
    pub floors: u32,
    pub style: HouseStyle,
    pub has_garage: bool,
    /// Accepted; only the contemporary layout places a garden room
    pub has_garden: bool,
}

impl Default for HouseParameters {
    fn default() -> Self {
        Self {
            total_area: 1500.0,
            bedrooms: 3,
            bathrooms: 2,
            floors: 1,
            style: HouseStyle::Modern,
            has_garage: true,
            has_garden: true,
        }
    }
}

impl HouseParameters {
    /// Check the ranges the input form enforces.
    ///
    /// The layout generators trust their input; call this before
    /// generating from anything that did not come through a validated form.
    pub fn validate(&self) -> Result<()> {
        if !self.total_area.is_finite() {
            return Err(Error::NonFiniteArea);
        }
        if self.total_area < MIN_TOTAL_AREA {
            return Err(Error::AreaTooSmall {
                area: self.total_area,
                min: MIN_TOTAL_AREA,
            });
        }
        check_range(self.bedrooms, BEDROOM_RANGE).map_err(|(min, max)| {
            Error::BedroomsOutOfRange {
                value: self.bedrooms,
                min,
                max,
            }
        })?;
        check_range(self.bathrooms, BATHROOM_RANGE).map_err(|(min, max)| {
            Error::BathroomsOutOfRange {
                value: self.bathrooms,
                min,
                max,
            }
        })?;
        check_range(self.floors, FLOOR_RANGE).map_err(|(min, max)| Error::FloorsOutOfRange {
            value: self.floors,
            min,
            max,
        })?;
        Ok(())
    }
}

fn check_range(value: u32, (min, max): (u32, u32)) -> std::result::Result<(), (u32, u32)> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err((min, max))
    }
}

/// Furniture piece placed in global plan coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    /// Open tag such as "bed", "sofa" or "island"
    #[serde(rename = "type")]
    pub kind: String,
    pub width: f64,
    pub length: f64,
    pub x: f64,
    pub z: f64,
    /// Radians about the vertical axis
    pub rotation: f64,
    pub color: u32,
}

/// Door or window opening
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub x: f64,
    pub z: f64,
    /// Radians about the vertical axis
    pub rotation: f64,
    pub width: f64,
}

impl Opening {
    pub fn new(x: f64, z: f64, rotation: f64, width: f64) -> Self {
        Self {
            x,
            z,
            rotation,
            width,
        }
    }
}

/// Axis-aligned rectangle in plan coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanBounds {
    pub min_x: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_z: f64,
}

impl PlanBounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn length(&self) -> f64 {
        self.max_z - self.min_z
    }

    pub fn union(&self, other: &PlanBounds) -> PlanBounds {
        PlanBounds {
            min_x: self.min_x.min(other.min_x),
            min_z: self.min_z.min(other.min_z),
            max_x: self.max_x.max(other.max_x),
            max_z: self.max_z.max(other.max_z),
        }
    }
}

/// A named rectangular zone of the generated layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub width: f64,
    pub length: f64,
    /// Center position
    pub x: f64,
    pub z: f64,
    pub color: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub furniture: Vec<Furniture>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doors: Vec<Opening>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub windows: Vec<Opening>,
}

impl Room {
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.x, self.z)
    }

    pub fn bounds(&self) -> PlanBounds {
        PlanBounds {
            min_x: self.x - self.width / 2.0,
            min_z: self.z - self.length / 2.0,
            max_x: self.x + self.width / 2.0,
            max_z: self.z + self.length / 2.0,
        }
    }

    /// Four corners, counter-clockwise starting at (min_x, min_z)
    pub fn outline(&self) -> [Point2<f64>; 4] {
        let b = self.bounds();
        [
            Point2::new(b.min_x, b.min_z),
            Point2::new(b.max_x, b.min_z),
            Point2::new(b.max_x, b.max_z),
            Point2::new(b.min_x, b.max_z),
        ]
    }

    /// Whether the point lies inside or on the edge of the room
    pub fn contains(&self, x: f64, z: f64) -> bool {
        let offset = Point2::new(x, z) - self.center();
        offset.x.abs() <= self.width / 2.0 && offset.y.abs() <= self.length / 2.0
    }

    pub fn kind(&self) -> RoomKind {
        RoomKind::classify(&self.name)
    }
}

/// Coarse room classification used for tallies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Bedroom,
    Bathroom,
    Garage,
    Other,
}

impl RoomKind {
    pub fn classify(name: &str) -> Self {
        if name == "Master Bedroom" || name.starts_with("Bedroom") {
            RoomKind::Bedroom
        } else if name.starts_with("Bathroom") {
            RoomKind::Bathroom
        } else if name == "Garage" {
            RoomKind::Garage
        } else {
            RoomKind::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_room() -> Room {
        Room {
            name: "Kitchen".to_string(),
            width: 4.0,
            length: 2.0,
            x: 1.0,
            z: -1.0,
            color: 0xa5d6a7,
            furniture: Vec::new(),
            doors: Vec::new(),
            windows: Vec::new(),
        }
    }

    #[test]
    fn test_style_parse_is_case_insensitive() {
        assert_eq!("Traditional".parse::<HouseStyle>().unwrap(), HouseStyle::Traditional);
        assert_eq!(" minimalist ".parse::<HouseStyle>().unwrap(), HouseStyle::Minimalist);
        assert!(matches!(
            "victorian".parse::<HouseStyle>(),
            Err(Error::UnknownStyle(tag)) if tag == "victorian"
        ));
    }

    #[test]
    fn test_style_from_tag_falls_back_to_modern() {
        assert_eq!(HouseStyle::from_tag("victorian"), HouseStyle::Modern);
        assert_eq!(HouseStyle::from_tag(""), HouseStyle::Modern);
        assert_eq!(HouseStyle::from_tag("contemporary"), HouseStyle::Contemporary);
    }

    #[test]
    fn test_style_from_tag_is_exact() {
        assert_eq!(HouseStyle::from_tag("Traditional"), HouseStyle::Modern);
        assert_eq!(HouseStyle::from_tag(" minimalist "), HouseStyle::Modern);
        assert_eq!(HouseStyle::from_tag("CONTEMPORARY"), HouseStyle::Modern);

        let params: HouseParameters = serde_json::from_str(
            r#"{"totalArea":1500,"bedrooms":3,"bathrooms":2,"floors":1,
                "style":"Traditional","hasGarage":true,"hasGarden":true}"#,
        )
        .unwrap();
        assert_eq!(params.style, HouseStyle::Modern);
    }

    #[test]
    fn test_parameters_json_uses_form_field_names() {
        let json = r#"{
            "totalArea": 1200,
            "bedrooms": 2,
            "bathrooms": 1,
            "floors": 1,
            "style": "victorian",
            "hasGarage": false,
            "hasGarden": true
        }"#;
        let params: HouseParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.total_area, 1200.0);
        assert_eq!(params.style, HouseStyle::Modern);
        assert!(!params.has_garage);

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["style"], "modern");
        assert_eq!(value["hasGarden"], true);
    }

    #[test]
    fn test_validate_accepts_form_defaults() {
        assert!(HouseParameters::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let small = HouseParameters {
            total_area: 499.0,
            ..Default::default()
        };
        assert!(matches!(small.validate(), Err(Error::AreaTooSmall { .. })));

        let nan = HouseParameters {
            total_area: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(nan.validate(), Err(Error::NonFiniteArea)));

        let no_bath = HouseParameters {
            bathrooms: 0,
            ..Default::default()
        };
        assert!(matches!(
            no_bath.validate(),
            Err(Error::BathroomsOutOfRange { value: 0, .. })
        ));

        let many_beds = HouseParameters {
            bedrooms: 11,
            ..Default::default()
        };
        assert!(matches!(
            many_beds.validate(),
            Err(Error::BedroomsOutOfRange { value: 11, .. })
        ));

        let tower = HouseParameters {
            floors: 5,
            ..Default::default()
        };
        assert!(matches!(tower.validate(), Err(Error::FloorsOutOfRange { .. })));
    }

    #[test]
    fn test_room_geometry() {
        let room = sample_room();
        assert_eq!(room.area(), 8.0);

        let bounds = room.bounds();
        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_z, 0.0);

        let outline = room.outline();
        assert_eq!(outline[0], Point2::new(-1.0, -2.0));
        assert_eq!(outline[2], Point2::new(3.0, 0.0));

        assert!(room.contains(1.0, -1.0));
        assert!(room.contains(3.0, 0.0));
        assert!(!room.contains(3.1, -1.0));
    }

    #[test]
    fn test_room_json_omits_empty_sequences() {
        let mut room = sample_room();
        let value = serde_json::to_value(&room).unwrap();
        assert!(value.get("furniture").is_none());
        assert!(value.get("doors").is_none());

        room.furniture.push(Furniture {
            kind: "island".to_string(),
            width: 1.0,
            length: 0.5,
            x: 1.0,
            z: -1.0,
            rotation: 0.0,
            color: 0x616161,
        });
        let value = serde_json::to_value(&room).unwrap();
        assert_eq!(value["furniture"][0]["type"], "island");
    }

    #[test]
    fn test_room_kind_classification() {
        assert_eq!(RoomKind::classify("Master Bedroom"), RoomKind::Bedroom);
        assert_eq!(RoomKind::classify("Bedroom 4"), RoomKind::Bedroom);
        assert_eq!(RoomKind::classify("Bathroom 2"), RoomKind::Bathroom);
        assert_eq!(RoomKind::classify("Garage"), RoomKind::Garage);
        assert_eq!(RoomKind::classify("Garden Courtyard"), RoomKind::Other);
    }
}
