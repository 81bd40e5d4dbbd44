// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Minimalist layout: few, large rooms on a coarse 3 × 2 grid.
//!
//! Living, kitchen and dining collapse into one open area. Only private
//! rooms (bedrooms, bathrooms) and the garage carry doors.

use std::f64::consts::FRAC_PI_2;

use crate::factory::{palette, split_span, LayoutGrid};
use crate::types::{Furniture, HouseParameters, Opening, Room};

const GRID_COLUMNS: u32 = 3;
const GRID_ROWS: u32 = 2;

const WALL_INSET: f64 = 0.95;
const GARAGE_CELLS: (f64, f64) = (1.0, 0.75);

const DOOR_WIDTH: f64 = 0.2;
const WINDOW_WIDTH: f64 = 0.6;
const GARAGE_DOOR_WIDTH: f64 = 0.8;

/// Generate the minimalist layout for a footprint of `width × length` display units.
pub fn generate_minimalist_layout(params: &HouseParameters, width: f64, length: f64) -> Vec<Room> {
    let grid = LayoutGrid::new(width, length, GRID_COLUMNS, GRID_ROWS);
    let cw = grid.cell_width;
    let front = -length / 2.0;
    let back = length / 2.0;

    let mut rooms = Vec::with_capacity(3 + (params.bedrooms + params.bathrooms) as usize);

    // One open area for living, cooking and dining
    let (x, z) = (grid.column_center(0.0, 2.0), grid.row_center(0.0, 1.0));
    let l = grid.cells_long(1.0);
    rooms.push(
        Room::new("Open Living Area", grid.cells_wide(2.0), l, x, z, palette::LIVING)
            .with_furniture(Furniture::new("sofa", cw * 0.8, cw * 0.3, x - cw * 0.5, z, palette::SOFA))
            .with_furniture(Furniture::new("island", cw * 0.6, cw * 0.25, x + cw * 0.5, z, palette::ISLAND))
            .with_furniture(Furniture::new(
                "dining_table",
                cw * 0.5,
                cw * 0.3,
                x + cw * 0.5,
                z + l * 0.3,
                palette::TABLE,
            ))
            .with_window(Opening::new(x - cw * 0.5, front, 0.0, cw * WINDOW_WIDTH))
            .with_window(Opening::new(x + cw * 0.5, front, 0.0, cw * WINDOW_WIDTH)),
    );

    // Without extra bedrooms the master takes the whole back row
    let extra_bedrooms = params.bedrooms.saturating_sub(1) as usize;
    let master_cells = if extra_bedrooms == 0 { 3.0 } else { 1.0 };
    let (x, z) = (grid.column_center(0.0, master_cells), grid.row_center(1.0, 1.0));
    let l = grid.cells_long(1.0) * WALL_INSET;
    rooms.push(
        Room::new(
            "Master Bedroom",
            grid.cells_wide(master_cells) * WALL_INSET,
            l,
            x,
            z,
            palette::BEDROOM,
        )
        .with_furniture(Furniture::new("bed", cw * 0.6, cw * 0.8, x, z, palette::BED))
        .with_door(Opening::new(x, z - l / 2.0, 0.0, cw * DOOR_WIDTH))
        .with_window(Opening::new(x, back, 0.0, cw * WINDOW_WIDTH)),
    );

    let span_start = grid.column_edge(1.0);
    let span = grid.cells_wide(2.0);
    for i in 0..extra_bedrooms {
        let (x, slot) = split_span(span_start, span, extra_bedrooms, i);
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
                (slot * 0.5).min(cw * 0.5),
                cw * 0.7,
                x,
                z,
                palette::BED,
            ))
            .with_door(Opening::new(x, z - l / 2.0, 0.0, (slot * 0.3).min(cw * DOOR_WIDTH)))
            .with_window(Opening::new(x, back, 0.0, slot * 0.4)),
        );
    }

    // Bathrooms stack front to back in the front-right cell
    let bathrooms = params.bathrooms as usize;
    let x = grid.column_center(2.0, 1.0);
    let w = grid.cells_wide(1.0) * WALL_INSET;
    for i in 0..bathrooms {
        let (z, slot) = split_span(front, grid.cells_long(1.0), bathrooms, i);
        rooms.push(
            Room::new(
                format!("Bathroom {}", i + 1),
                w,
                slot * WALL_INSET,
                x,
                z,
                palette::BATHROOM,
            )
            .with_furniture(Furniture::new(
                "toilet",
                cw * 0.15,
                (slot * 0.6).min(cw * 0.25),
                x + cw * 0.25,
                z,
                palette::FIXTURE,
            ))
            .with_furniture(Furniture::new(
                "sink",
                cw * 0.15,
                (slot * 0.5).min(cw * 0.15),
                x - cw * 0.1,
                z,
                palette::FIXTURE,
            ))
            .with_door(Opening::new(x - w / 2.0, z, FRAC_PI_2, (slot * 0.5).min(cw * DOOR_WIDTH))),
        );
    }

    if params.has_garage {
        let (x, z) = (width / 3.0, -length / 2.0);
        let l = grid.cells_long(GARAGE_CELLS.1);
        rooms.push(
            Room::new("Garage", grid.cells_wide(GARAGE_CELLS.0), l, x, z, palette::GARAGE)
                .with_door(Opening::new(x, z - l / 2.0, 0.0, cw * GARAGE_DOOR_WIDTH)),
        );
    }

    rooms
}
