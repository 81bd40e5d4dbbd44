// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Contemporary layout: an open-plan front zone (living, kitchen, dining
//! without interior doors) and a separated private zone behind it.

use std::f64::consts::FRAC_PI_2;

use crate::factory::{palette, split_span, LayoutGrid};
use crate::types::{Furniture, HouseParameters, Opening, Room};

const GRID_COLUMNS: u32 = 4;
const GRID_ROWS: u32 = 3;

const WALL_INSET: f64 = 0.95;
const BATHROOM_DEPTH: f64 = 0.8;
const GARAGE_CELLS: (f64, f64) = (2.0, 1.5);

const DOOR_WIDTH: f64 = 0.2;
const WINDOW_WIDTH: f64 = 0.5;
const GARAGE_DOOR_WIDTH: f64 = 1.5;

/// Generate the contemporary layout for a footprint of `width × length` display units.
pub fn generate_contemporary_layout(params: &HouseParameters, width: f64, length: f64) -> Vec<Room> {
    let grid = LayoutGrid::new(width, length, GRID_COLUMNS, GRID_ROWS);
    let cw = grid.cell_width;
    let front = -length / 2.0;
    let back = length / 2.0;

    let mut rooms = Vec::with_capacity(7 + (params.bedrooms + params.bathrooms) as usize);

    // Open-plan front row: windows only, no doors between zones
    let z = grid.row_center(0.0, 1.0);
    let l = grid.cells_long(1.0);

    let x = grid.column_center(0.0, 2.0);
    rooms.push(
        Room::new("Living Room", grid.cells_wide(2.0), l, x, z, palette::LIVING)
            .with_furniture(Furniture::new("sofa", cw * 0.8, cw * 0.3, x, z, palette::SOFA))
            .with_furniture(Furniture::new(
                "tv",
                cw * 0.6,
                cw * 0.1,
                x,
                z - l * 0.4,
                palette::TV,
            ))
            .with_window(Opening::new(x, front, 0.0, cw * 0.8)),
    );

    let x = grid.column_center(2.0, 1.0);
    rooms.push(
        Room::new("Kitchen", grid.cells_wide(1.0), l, x, z, palette::KITCHEN)
            .with_furniture(Furniture::new("island", cw * 0.5, cw * 0.3, x, z, palette::ISLAND))
            .with_window(Opening::new(x, front, 0.0, cw * 0.4)),
    );

    let x = grid.column_center(3.0, 1.0);
    rooms.push(
        Room::new("Dining Area", grid.cells_wide(1.0), l, x, z, palette::DINING)
            .with_furniture(Furniture::new("dining_table", cw * 0.5, cw * 0.4, x, z, palette::TABLE))
            .with_window(Opening::new(width / 2.0, z, FRAC_PI_2, cw * 0.4)),
    );

    // Private zone: master bedroom on the left of the middle row
    let (x, z) = (grid.column_center(0.0, 2.0), grid.row_center(1.0, 1.0));
    let l = grid.cells_long(1.0) * WALL_INSET;
    rooms.push(
        Room::new(
            "Master Bedroom",
            grid.cells_wide(2.0) * WALL_INSET,
            l,
            x,
            z,
            palette::BEDROOM,
        )
        .with_furniture(Furniture::new("bed", cw * 0.7, cw * 0.9, x, z, palette::BED).rotated(FRAC_PI_2))
        .with_door(Opening::new(x, z - l / 2.0, 0.0, cw * DOOR_WIDTH))
        .with_window(Opening::new(-width / 2.0, z, FRAC_PI_2, cw * WINDOW_WIDTH)),
    );

    // Additional bedrooms share the back row, minus the courtyard cell
    let span_cells = if params.has_garden { 3.0 } else { 4.0 };
    let span = grid.cells_wide(span_cells);
    let extra_bedrooms = params.bedrooms.saturating_sub(1) as usize;
    let z = grid.row_center(2.0, 1.0);
    for i in 0..extra_bedrooms {
        let (x, slot) = split_span(-width / 2.0, span, extra_bedrooms, i);
        rooms.push(
            Room::new(
                format!("Bedroom {}", i + 2),
                slot * WALL_INSET,
                l,
                x,
                z,
                palette::BEDROOM,
            )
            .with_furniture(Furniture::new(
                "bed",
                (slot * 0.5).min(cw * 0.6),
                cw * 0.8,
                x,
                z,
                palette::BED,
            ))
            .with_door(Opening::new(x, z - l / 2.0, 0.0, (slot * 0.3).min(cw * DOOR_WIDTH)))
            .with_window(Opening::new(x, back, 0.0, slot * 0.4)),
        );
    }
    if extra_bedrooms == 0 {
        let x = -width / 2.0 + span / 2.0;
        rooms.push(
            Room::new("Home Office", span * WALL_INSET, l, x, z, palette::FAMILY)
                .with_furniture(Furniture::new("desk", cw * 0.6, cw * 0.3, x, z, palette::TABLE))
                .with_door(Opening::new(x, z - l / 2.0, 0.0, cw * DOOR_WIDTH))
                .with_window(Opening::new(x, back, 0.0, cw * WINDOW_WIDTH)),
        );
    }

    // Bathrooms share the right half of the middle row
    let bathrooms = params.bathrooms as usize;
    let z = grid.row_center(1.0, 1.0);
    let l = grid.cells_long(BATHROOM_DEPTH);
    for i in 0..bathrooms {
        let (x, slot) = split_span(0.0, width / 2.0, bathrooms, i);
        rooms.push(
            Room::new(
                format!("Bathroom {}", i + 1),
                slot * WALL_INSET,
                l,
                x,
                z,
                palette::BATHROOM,
            )
            .with_furniture(Furniture::new(
                "toilet",
                (slot * 0.3).min(cw * 0.2),
                cw * 0.3,
                x - slot * 0.2,
                z,
                palette::FIXTURE,
            ))
            .with_furniture(Furniture::new(
                "sink",
                (slot * 0.3).min(cw * 0.2),
                cw * 0.2,
                x + slot * 0.2,
                z,
                palette::FIXTURE,
            ))
            .with_door(Opening::new(x, z - l / 2.0, 0.0, (slot * 0.5).min(cw * DOOR_WIDTH))),
        );
    }

    if params.has_garden {
        let (x, z) = (grid.column_center(3.0, 1.0), grid.row_center(2.0, 1.0));
        rooms.push(
            Room::new(
                "Garden Courtyard",
                grid.cells_wide(1.0) * WALL_INSET,
                grid.cells_long(1.0) * WALL_INSET,
                x,
                z,
                palette::GARDEN,
            )
            .with_furniture(Furniture::new("planter", cw * 0.4, cw * 0.4, x, z, palette::PLANTER))
            .with_door(Opening::new(x - cw * WALL_INSET / 2.0, z, FRAC_PI_2, cw * 0.3)),
        );
    }

    // Garage mirrors the modern placement on the front-left extreme
    if params.has_garage {
        let (x, z) = (-width / 3.0, -length / 2.0);
        rooms.push(
            Room::new(
                "Garage",
                grid.cells_wide(GARAGE_CELLS.0),
                grid.cells_long(GARAGE_CELLS.1),
                x,
                z,
                palette::GARAGE,
            )
            .with_door(Opening::new(x, z, 0.0, cw * GARAGE_DOOR_WIDTH)),
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
    fn test_default_room_order() {
        let rooms = generate_contemporary_layout(&HouseParameters::default(), 20.0, 15.0);
        assert_eq!(
            names(&rooms),
            vec![
                "Living Room",
                "Kitchen",
                "Dining Area",
                "Master Bedroom",
                "Bedroom 2",
                "Bedroom 3",
                "Bathroom 1",
                "Bathroom 2",
                "Garden Courtyard",
                "Garage",
            ]
        );
    }

    #[test]
    fn test_open_plan_zone_has_no_doors() {
        let rooms = generate_contemporary_layout(&HouseParameters::default(), 20.0, 15.0);
        for room in &rooms[..3] {
            assert!(room.doors.is_empty(), "{} should be open plan", room.name);
            assert!(!room.windows.is_empty());
        }
    }

    #[test]
    fn test_courtyard_narrows_bedroom_row() {
        let with_garden = generate_contemporary_layout(&HouseParameters::default(), 20.0, 15.0);
        let without_garden = generate_contemporary_layout(
            &HouseParameters {
                has_garden: false,
                ..Default::default()
            },
            20.0,
            15.0,
        );

        let bedroom_2 = |rooms: &[Room]| rooms.iter().find(|r| r.name == "Bedroom 2").cloned().unwrap();
        // cells are 5 wide; two bedrooms share 15 or 20 units
        assert_relative_eq!(bedroom_2(&with_garden).width, 7.5 * WALL_INSET);
        assert_relative_eq!(bedroom_2(&without_garden).width, 10.0 * WALL_INSET);
        assert!(!without_garden.iter().any(|r| r.name == "Garden Courtyard"));
    }

    #[test]
    fn test_bathrooms_share_right_half() {
        let params = HouseParameters {
            bathrooms: 4,
            ..Default::default()
        };
        let rooms = generate_contemporary_layout(&params, 20.0, 15.0);
        let baths: Vec<_> = rooms.iter().filter(|r| r.name.starts_with("Bathroom")).collect();

        assert_eq!(baths.len(), 4);
        assert_relative_eq!(baths[0].x, 1.25);
        assert_relative_eq!(baths[3].x, 8.75);
        assert!(baths.iter().all(|b| b.bounds().min_x >= 0.0 && b.bounds().max_x <= 10.0));
    }

    #[test]
    fn test_fixtures_shrink_with_bathroom_slot() {
        let params = HouseParameters {
            bathrooms: 10,
            ..Default::default()
        };
        let rooms = generate_contemporary_layout(&params, 20.0, 15.0);
        for bath in rooms.iter().filter(|r| r.name.starts_with("Bathroom")) {
            let walls = bath.bounds();
            for fixture in &bath.furniture {
                assert!(fixture.x - fixture.width / 2.0 >= walls.min_x, "{} {}", bath.name, fixture.kind);
                assert!(fixture.x + fixture.width / 2.0 <= walls.max_x, "{} {}", bath.name, fixture.kind);
            }
        }
    }

    #[test]
    fn test_single_bedroom_gets_home_office() {
        let params = HouseParameters {
            bedrooms: 1,
            has_garage: false,
            ..Default::default()
        };
        let rooms = generate_contemporary_layout(&params, 20.0, 15.0);
        let office = rooms.iter().find(|r| r.name == "Home Office").unwrap();
        assert_relative_eq!(office.x, -2.5);
        assert!(!rooms.iter().any(|r| r.name == "Garage"));
    }
}
