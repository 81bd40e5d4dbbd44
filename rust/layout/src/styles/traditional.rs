// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Traditional layout: separated, enclosed rooms around an entry hall with
//! a formal dining room.
//!
//! Uses a 5 × 4 sizing grid:
//!
//! ```text
//!  back   | Bedroom 2 | Bedroom 3 | ...            |
//!         | Master    | Bath      | Garage/Family  |
//!         | Bedroom   | stack     | Kitchen        |
//!  front  | Living    | Entry     | Dining         |
//! ```
//!
//! Every room is enclosed and gets its own door.

use std::f64::consts::FRAC_PI_2;

use crate::factory::{palette, split_span, LayoutGrid};
use crate::types::{Furniture, HouseParameters, Opening, Room};

const GRID_COLUMNS: u32 = 5;
const GRID_ROWS: u32 = 4;

/// Fraction of its cell span a room occupies; the rest is wall
const WALL_INSET: f64 = 0.95;

const DOOR_WIDTH: f64 = 0.25;
const FRONT_DOOR_WIDTH: f64 = 0.35;
const GARAGE_DOOR_WIDTH: f64 = 1.2;
const WINDOW_WIDTH: f64 = 0.5;

/// Generate the traditional layout for a footprint of `width × length` display units.
pub fn generate_traditional_layout(params: &HouseParameters, width: f64, length: f64) -> Vec<Room> {
    let grid = LayoutGrid::new(width, length, GRID_COLUMNS, GRID_ROWS);
    let cw = grid.cell_width;
    let cl = grid.cell_length;
    let front = -length / 2.0;
    let back = length / 2.0;

    let mut rooms = Vec::with_capacity(8 + (params.bedrooms + params.bathrooms) as usize);

    // Living room, front left, door into the hall
    let (x, z) = (grid.column_center(0.0, 2.0), grid.row_center(0.0, 1.0));
    let (w, l) = (grid.cells_wide(2.0) * WALL_INSET, grid.cells_long(1.0) * WALL_INSET);
    rooms.push(
        Room::new("Living Room", w, l, x, z, palette::LIVING)
            .with_furniture(Furniture::new("sofa", cw * 0.8, cw * 0.3, x, z, palette::SOFA))
            .with_furniture(
                Furniture::new("armchair", cw * 0.3, cw * 0.3, x + cw * 0.6, z, palette::SOFA)
                    .rotated(-FRAC_PI_2),
            )
            .with_door(Opening::new(x + w / 2.0, z, FRAC_PI_2, cw * DOOR_WIDTH))
            .with_window(Opening::new(x, front, 0.0, cw * WINDOW_WIDTH)),
    );

    // Entry hall with the front door
    let (x, z) = (grid.column_center(2.0, 1.0), grid.row_center(0.0, 1.0));
    rooms.push(
        Room::new(
            "Entry Hall",
            grid.cells_wide(1.0) * WALL_INSET,
            grid.cells_long(1.0) * WALL_INSET,
            x,
            z,
            palette::HALL,
        )
        .with_door(Opening::new(x, front, 0.0, cw * FRONT_DOOR_WIDTH)),
    );

    // Formal dining room, front right
    let (x, z) = (grid.column_center(3.0, 2.0), grid.row_center(0.0, 1.0));
    let w = grid.cells_wide(2.0) * WALL_INSET;
    rooms.push(
        Room::new("Dining Room", w, grid.cells_long(1.0) * WALL_INSET, x, z, palette::DINING)
            .with_furniture(Furniture::new("dining_table", cw * 0.8, cw * 0.5, x, z, palette::TABLE))
            .with_door(Opening::new(x - w / 2.0, z, FRAC_PI_2, cw * DOOR_WIDTH))
            .with_window(Opening::new(x, front, 0.0, cw * WINDOW_WIDTH)),
    );

    // Kitchen behind the dining room
    let (x, z) = (grid.column_center(3.0, 2.0), grid.row_center(1.0, 1.0));
    let l = grid.cells_long(1.0) * WALL_INSET;
    rooms.push(
        Room::new("Kitchen", grid.cells_wide(2.0) * WALL_INSET, l, x, z, palette::KITCHEN)
            .with_furniture(Furniture::new(
                "counter",
                cw * 1.2,
                cw * 0.25,
                x,
                z + cl * 0.3,
                palette::ISLAND,
            ))
            .with_door(Opening::new(x, z - l / 2.0, 0.0, cw * DOOR_WIDTH))
            .with_window(Opening::new(width / 2.0, z, FRAC_PI_2, cw * WINDOW_WIDTH)),
    );

    // Master bedroom spans two rows on the left
    let (x, z) = (grid.column_center(0.0, 2.0), grid.row_center(1.0, 2.0));
    let w = grid.cells_wide(2.0) * WALL_INSET;
    rooms.push(
        Room::new("Master Bedroom", w, grid.cells_long(2.0) * WALL_INSET, x, z, palette::BEDROOM)
            .with_furniture(Furniture::new("bed", cw * 0.7, cw * 0.9, x, z, palette::BED))
            .with_door(Opening::new(x + w / 2.0, z, FRAC_PI_2, cw * DOOR_WIDTH))
            .with_window(Opening::new(-width / 2.0, z, FRAC_PI_2, cw * WINDOW_WIDTH)),
    );

    // Additional bedrooms share the back row
    let extra_bedrooms = params.bedrooms.saturating_sub(1) as usize;
    let z = grid.row_center(3.0, 1.0);
    let l = grid.cells_long(1.0) * WALL_INSET;
    for i in 0..extra_bedrooms {
        let (x, slot) = split_span(-width / 2.0, width, extra_bedrooms, i);
        let bed_width = (slot * 0.5).min(cw * 0.6);
        rooms.push(
            Room::new(
                format!("Bedroom {}", i + 2),
                slot * WALL_INSET,
                l,
                x,
                z,
                palette::BEDROOM,
            )
            .with_furniture(Furniture::new("bed", bed_width, cw * 0.8, x, z, palette::BED))
            .with_door(Opening::new(x, z - l / 2.0, 0.0, (slot * 0.3).min(cw * DOOR_WIDTH)))
            .with_window(Opening::new(x, back, 0.0, slot * 0.4)),
        );
    }
    if extra_bedrooms == 0 {
        let x = 0.0;
        rooms.push(
            Room::new("Study", width * WALL_INSET, l, x, z, palette::FAMILY)
                .with_furniture(Furniture::new("desk", cw * 0.6, cw * 0.3, x, z, palette::TABLE))
                .with_door(Opening::new(x, z - l / 2.0, 0.0, cw * DOOR_WIDTH))
                .with_window(Opening::new(x, back, 0.0, cw * WINDOW_WIDTH)),
        );
    }

    // Bathrooms stack in the center column between the hall and the back row
    let bathrooms = params.bathrooms as usize;
    let x = grid.column_center(2.0, 1.0);
    for i in 0..bathrooms {
        let (z, slot) = split_span(front + cl, cl * 2.0, bathrooms, i);
        let l = slot * WALL_INSET;
        rooms.push(
            Room::new(
                format!("Bathroom {}", i + 1),
                grid.cells_wide(1.0) * WALL_INSET,
                l,
                x,
                z,
                palette::BATHROOM,
            )
            .with_furniture(Furniture::new(
                "toilet",
                cw * 0.2,
                (slot * 0.6).min(cw * 0.3),
                x - cw * 0.2,
                z,
                palette::FIXTURE,
            ))
            .with_furniture(Furniture::new(
                "sink",
                cw * 0.2,
                (slot * 0.5).min(cw * 0.2),
                x + cw * 0.2,
                z,
                palette::FIXTURE,
            ))
            .with_door(Opening::new(x, z - l / 2.0, 0.0, cw * 0.2)),
        );
    }

    // The cell behind the kitchen holds the garage, or a family room without one
    let (x, z) = (grid.column_center(3.0, 2.0), grid.row_center(2.0, 1.0));
    let (w, l) = (grid.cells_wide(2.0) * WALL_INSET, grid.cells_long(1.0) * WALL_INSET);
    if params.has_garage {
        rooms.push(
            Room::new("Garage", w, l, x, z, palette::GARAGE)
                .with_door(Opening::new(width / 2.0, z, FRAC_PI_2, cw * GARAGE_DOOR_WIDTH)),
        );
    } else {
        rooms.push(
            Room::new("Family Room", w, l, x, z, palette::FAMILY)
                .with_furniture(Furniture::new("sofa", cw * 0.8, cw * 0.3, x, z, palette::SOFA))
                .with_furniture(Furniture::new(
                    "tv",
                    cw * 0.6,
                    cw * 0.1,
                    x,
                    z + l * 0.4,
                    palette::TV,
                ))
                .with_door(Opening::new(x - w / 2.0, z, FRAC_PI_2, cw * DOOR_WIDTH))
                .with_window(Opening::new(width / 2.0, z, FRAC_PI_2, cw * WINDOW_WIDTH)),
        );
    }

    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn names(rooms: &[Room]) -> Vec<&str> {
        rooms.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_cottage_room_order() {
        let params = HouseParameters {
            total_area: 1800.0,
            style: crate::types::HouseStyle::Traditional,
            ..Default::default()
        };
        let rooms = generate_traditional_layout(&params, 20.0, 15.0);
        assert_eq!(
            names(&rooms),
            vec![
                "Living Room",
                "Entry Hall",
                "Dining Room",
                "Kitchen",
                "Master Bedroom",
                "Bedroom 2",
                "Bedroom 3",
                "Bathroom 1",
                "Bathroom 2",
                "Garage",
            ]
        );
    }

    #[test]
    fn test_every_room_is_enclosed() {
        let rooms = generate_traditional_layout(&HouseParameters::default(), 20.0, 15.0);
        for room in &rooms {
            assert!(!room.doors.is_empty(), "{} has no door", room.name);
        }
    }

    #[test]
    fn test_family_room_replaces_garage() {
        let params = HouseParameters {
            has_garage: false,
            ..Default::default()
        };
        let rooms = generate_traditional_layout(&params, 20.0, 15.0);
        assert_eq!(rooms.last().unwrap().name, "Family Room");
        assert!(rooms.iter().all(|r| r.name != "Garage"));
    }

    #[test]
    fn test_single_bedroom_gets_study() {
        let params = HouseParameters {
            bedrooms: 1,
            ..Default::default()
        };
        let rooms = generate_traditional_layout(&params, 20.0, 15.0);
        assert!(rooms.iter().any(|r| r.name == "Study"));
        assert!(!rooms.iter().any(|r| r.name.starts_with("Bedroom ")));
    }

    #[test]
    fn test_back_row_is_shared_evenly() {
        let params = HouseParameters {
            bedrooms: 5,
            ..Default::default()
        };
        // cells are 4 × 3.75
        let rooms = generate_traditional_layout(&params, 20.0, 15.0);
        let bedrooms: Vec<_> = rooms.iter().filter(|r| r.name.starts_with("Bedroom ")).collect();

        assert_eq!(bedrooms.len(), 4);
        for bedroom in &bedrooms {
            assert_relative_eq!(bedroom.width, 5.0 * WALL_INSET);
            assert_relative_eq!(bedroom.z, 5.625);
        }
        assert_relative_eq!(bedrooms[0].x, -7.5);
        assert_relative_eq!(bedrooms[3].x, 7.5);
    }

    #[test]
    fn test_bathrooms_stay_in_center_column() {
        let params = HouseParameters {
            bathrooms: 3,
            ..Default::default()
        };
        let rooms = generate_traditional_layout(&params, 20.0, 15.0);
        let baths: Vec<_> = rooms.iter().filter(|r| r.name.starts_with("Bathroom")).collect();

        assert_eq!(baths.len(), 3);
        for bath in &baths {
            assert_relative_eq!(bath.x, 0.0);
            assert!(bath.z > -3.75 && bath.z < 3.75);
        }
    }

    #[test]
    fn test_fixtures_shrink_with_bathroom_slot() {
        let params = HouseParameters {
            bathrooms: 10,
            ..Default::default()
        };
        let rooms = generate_traditional_layout(&params, 20.0, 15.0);
        for bath in rooms.iter().filter(|r| r.name.starts_with("Bathroom")) {
            for fixture in &bath.furniture {
                assert!(fixture.length < bath.length, "{} {}", bath.name, fixture.kind);
            }
        }
    }
}
