// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Modern layout: open living area and kitchen in front, bedrooms behind,
//! bathrooms along the centerline.
//!
//! The footprint is divided into a 4 × 3 sizing grid. Room placement uses
//! fixed offsets from the footprint center; nothing checks for overlap, so
//! any adjustment belongs in the constants below.

use std::f64::consts::FRAC_PI_2;

use crate::factory::{palette, LayoutGrid};
use crate::types::{Furniture, HouseParameters, Opening, Room};

const GRID_COLUMNS: u32 = 4;
const GRID_ROWS: u32 = 3;

// Room sizes in cells (width, length)
const LIVING_CELLS: (f64, f64) = (2.0, 1.5);
const KITCHEN_CELLS: (f64, f64) = (1.5, 1.0);
const MASTER_CELLS: (f64, f64) = (1.8, 1.2);
const BEDROOM_CELLS: (f64, f64) = (1.2, 1.0);
const BATHROOM_CELLS: (f64, f64) = (0.8, 0.8);
const GARAGE_CELLS: (f64, f64) = (2.0, 1.5);

// Furniture and opening sizes, in cell widths
const SOFA: (f64, f64) = (0.8, 0.3);
const TV: (f64, f64) = (0.6, 0.1);
const ISLAND: (f64, f64) = (0.6, 0.3);
const MASTER_BED: (f64, f64) = (0.7, 0.9);
const BED: (f64, f64) = (0.6, 0.8);
const TOILET: (f64, f64) = (0.2, 0.3);
const SINK: (f64, f64) = (0.2, 0.2);
const FIXTURE_OFFSET: f64 = 0.2;
const BATH_DOOR_OFFSET: f64 = 0.4;
const DOOR_WIDTH: f64 = 0.2;
const WIDE_WINDOW: f64 = 0.5;
const WINDOW: f64 = 0.4;
const GARAGE_DOOR_WIDTH: f64 = 1.5;

// Bedrooms stack from half a cell behind the centerline
const BEDROOM_STACK_START: f64 = -0.5;

/// Generate the modern layout for a footprint of `width × length` display units.
pub fn generate_modern_layout(params: &HouseParameters, width: f64, length: f64) -> Vec<Room> {
    let grid = LayoutGrid::new(width, length, GRID_COLUMNS, GRID_ROWS);
    let cw = grid.cell_width;
    let cl = grid.cell_length;

    let mut rooms = Vec::with_capacity(4 + (params.bedrooms + params.bathrooms) as usize);

    // Open concept living area, front left
    let (x, z) = (-width / 4.0, -length / 3.0);
    rooms.push(
        Room::new(
            "Living Room",
            grid.cells_wide(LIVING_CELLS.0),
            grid.cells_long(LIVING_CELLS.1),
            x,
            z,
            palette::LIVING,
        )
        .with_furniture(Furniture::new("sofa", cw * SOFA.0, cw * SOFA.1, x, z, palette::SOFA))
        .with_furniture(Furniture::new(
            "tv",
            cw * TV.0,
            cw * TV.1,
            x,
            -length / 2.5,
            palette::TV,
        ))
        .with_window(Opening::new(-width / 3.0, -length / 2.5, 0.0, cw * WIDE_WINDOW)),
    );

    // Kitchen with island, front right
    let (x, z) = (width / 4.0, -length / 3.0);
    rooms.push(
        Room::new(
            "Kitchen",
            grid.cells_wide(KITCHEN_CELLS.0),
            grid.cells_long(KITCHEN_CELLS.1),
            x,
            z,
            palette::KITCHEN,
        )
        .with_furniture(Furniture::new("island", cw * ISLAND.0, cw * ISLAND.1, x, z, palette::ISLAND))
        .with_window(Opening::new(width / 3.0, -length / 2.5, 0.0, cw * WINDOW)),
    );

    // Master bedroom, back left
    let (x, z) = (-width / 4.0, length / 4.0);
    rooms.push(
        Room::new(
            "Master Bedroom",
            grid.cells_wide(MASTER_CELLS.0),
            grid.cells_long(MASTER_CELLS.1),
            x,
            z,
            palette::BEDROOM,
        )
        .with_furniture(Furniture::new("bed", cw * MASTER_BED.0, cw * MASTER_BED.1, x, z, palette::BED))
        .with_door(Opening::new(-width / 3.0, length / 6.0, 0.0, cw * DOOR_WIDTH))
        .with_window(Opening::new(-width / 3.0, length / 3.0, 0.0, cw * WIDE_WINDOW)),
    );

    // Additional bedrooms stack along z on the back right
    for i in 1..params.bedrooms {
        let x = width / 4.0;
        let z = (i as f64 + BEDROOM_STACK_START) * cl;
        rooms.push(
            Room::new(
                format!("Bedroom {}", i + 1),
                grid.cells_wide(BEDROOM_CELLS.0),
                grid.cells_long(BEDROOM_CELLS.1),
                x,
                z,
                palette::BEDROOM,
            )
            .with_furniture(Furniture::new("bed", cw * BED.0, cw * BED.1, x, z, palette::BED))
            .with_door(Opening::new(width / 6.0, z - cl / 4.0, FRAC_PI_2, cw * DOOR_WIDTH))
            .with_window(Opening::new(width / 3.0, z, 0.0, cw * WINDOW)),
        );
    }

    // Bathrooms on the centerline, stacked from a sixth of the length in front
    for i in 0..params.bathrooms {
        let z = i as f64 * cl - length / 6.0;
        rooms.push(
            Room::new(
                format!("Bathroom {}", i + 1),
                grid.cells_wide(BATHROOM_CELLS.0),
                grid.cells_long(BATHROOM_CELLS.1),
                0.0,
                z,
                palette::BATHROOM,
            )
            .with_furniture(Furniture::new(
                "toilet",
                cw * TOILET.0,
                cw * TOILET.1,
                -cw * FIXTURE_OFFSET,
                z,
                palette::FIXTURE,
            ))
            .with_furniture(Furniture::new(
                "sink",
                cw * SINK.0,
                cw * SINK.1,
                cw * FIXTURE_OFFSET,
                z,
                palette::FIXTURE,
            ))
            .with_door(Opening::new(-cw * BATH_DOOR_OFFSET, z, FRAC_PI_2, cw * DOOR_WIDTH)),
        );
    }

    if params.has_garage {
        let (x, z) = (width / 3.0, -length / 2.0);
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
    fn test_default_house_room_order() {
        let rooms = generate_modern_layout(&HouseParameters::default(), 20.0, 15.0);
        assert_eq!(
            names(&rooms),
            vec![
                "Living Room",
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
    fn test_base_room_geometry() {
        // cell = 5 × 5
        let rooms = generate_modern_layout(&HouseParameters::default(), 20.0, 15.0);

        let living = &rooms[0];
        assert_relative_eq!(living.width, 10.0);
        assert_relative_eq!(living.length, 7.5);
        assert_relative_eq!(living.x, -5.0);
        assert_relative_eq!(living.z, -5.0);
        assert_eq!(living.furniture[0].kind, "sofa");
        assert_eq!(living.furniture[1].kind, "tv");
        assert_relative_eq!(living.furniture[1].z, -6.0);
        assert_eq!(living.windows.len(), 1);
        assert!(living.doors.is_empty());

        let master = &rooms[2];
        assert_relative_eq!(master.width, 9.0);
        assert_relative_eq!(master.length, 6.0);
        assert_relative_eq!(master.z, 3.75);
        assert_relative_eq!(master.furniture[0].width, 3.5);
        assert_eq!(master.doors[0].rotation, 0.0);
    }

    #[test]
    fn test_bedroom_and_bathroom_stacks() {
        let rooms = generate_modern_layout(&HouseParameters::default(), 20.0, 15.0);

        let bedroom_2 = &rooms[3];
        assert_relative_eq!(bedroom_2.x, 5.0);
        assert_relative_eq!(bedroom_2.z, 2.5);
        assert_relative_eq!(bedroom_2.doors[0].rotation, FRAC_PI_2);
        assert_relative_eq!(bedroom_2.doors[0].z, 1.25);
        assert!(bedroom_2.furniture[0].width < rooms[2].furniture[0].width);

        let bedroom_3 = &rooms[4];
        assert_relative_eq!(bedroom_3.z - bedroom_2.z, 5.0);

        let bath_1 = &rooms[5];
        let bath_2 = &rooms[6];
        assert_relative_eq!(bath_1.x, 0.0);
        assert_relative_eq!(bath_1.z, -2.5);
        assert_relative_eq!(bath_2.z, 2.5);
        assert_relative_eq!(bath_1.furniture[0].x, -1.0);
        assert_relative_eq!(bath_1.furniture[1].x, 1.0);
    }

    #[test]
    fn test_garage_position_and_door() {
        let rooms = generate_modern_layout(&HouseParameters::default(), 20.0, 15.0);
        let garage = rooms.last().unwrap();

        assert_eq!(garage.name, "Garage");
        assert_relative_eq!(garage.z, -7.5);
        assert_eq!(garage.doors.len(), 1);
        assert_relative_eq!(garage.doors[0].width, 7.5);
        assert!(garage.furniture.is_empty());
    }

    #[test]
    fn test_zero_bathrooms_is_not_guarded() {
        let params = HouseParameters {
            bathrooms: 0,
            bedrooms: 1,
            has_garage: false,
            ..Default::default()
        };
        let rooms = generate_modern_layout(&params, 20.0, 15.0);
        assert_eq!(names(&rooms), vec!["Living Room", "Kitchen", "Master Bedroom"]);
    }
}
