// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sizing grid and room/feature constructors shared by the style generators
//!
//! The grid is a sizing reference only: rooms are expressed as fractions of
//! a cell and are not snapped to cell boundaries.

use crate::types::{Furniture, Opening, Room};

/// Fill colors, as 0xRRGGBB
pub mod palette {
    pub const LIVING: u32 = 0x90caf9;
    pub const KITCHEN: u32 = 0xa5d6a7;
    pub const DINING: u32 = 0xfff59d;
    pub const HALL: u32 = 0xf5f5f5;
    pub const FAMILY: u32 = 0x81d4fa;
    pub const BEDROOM: u32 = 0xffcc80;
    pub const BATHROOM: u32 = 0xce93d8;
    pub const GARAGE: u32 = 0xe0e0e0;
    pub const GARDEN: u32 = 0xc5e1a5;

    pub const SOFA: u32 = 0x757575;
    pub const TV: u32 = 0x424242;
    pub const ISLAND: u32 = 0x616161;
    pub const TABLE: u32 = 0x795548;
    pub const BED: u32 = 0x8d6e63;
    pub const FIXTURE: u32 = 0xffffff;
    pub const PLANTER: u32 = 0x66bb6a;
}

/// Footprint divided into `columns × rows` notional cells, centered on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGrid {
    pub width: f64,
    pub length: f64,
    pub cell_width: f64,
    pub cell_length: f64,
}

impl LayoutGrid {
    pub fn new(width: f64, length: f64, columns: u32, rows: u32) -> Self {
        Self {
            width,
            length,
            cell_width: width / columns as f64,
            cell_length: length / rows as f64,
        }
    }

    pub fn cells_wide(&self, cells: f64) -> f64 {
        self.cell_width * cells
    }

    pub fn cells_long(&self, cells: f64) -> f64 {
        self.cell_length * cells
    }

    /// Center x of a column span starting `first` cells from the left edge
    pub fn column_center(&self, first: f64, count: f64) -> f64 {
        -self.width / 2.0 + (first + count / 2.0) * self.cell_width
    }

    /// Left edge x of column `first`
    pub fn column_edge(&self, first: f64) -> f64 {
        -self.width / 2.0 + first * self.cell_width
    }

    /// Center z of a row span starting `first` cells from the front edge
    pub fn row_center(&self, first: f64, count: f64) -> f64 {
        -self.length / 2.0 + (first + count / 2.0) * self.cell_length
    }
}

/// Split `[start, start + extent)` into `count` equal slots.
///
/// Returns the center and size of slot `index`.
pub fn split_span(start: f64, extent: f64, count: usize, index: usize) -> (f64, f64) {
    let size = extent / count.max(1) as f64;
    (start + (index as f64 + 0.5) * size, size)
}

impl Room {
    pub fn new(name: impl Into<String>, width: f64, length: f64, x: f64, z: f64, color: u32) -> Self {
        Self {
            name: name.into(),
            width,
            length,
            x,
            z,
            color,
            furniture: Vec::new(),
            doors: Vec::new(),
            windows: Vec::new(),
        }
    }

    pub fn with_furniture(mut self, piece: Furniture) -> Self {
        self.furniture.push(piece);
        self
    }

    pub fn with_door(mut self, door: Opening) -> Self {
        self.doors.push(door);
        self
    }

    pub fn with_window(mut self, window: Opening) -> Self {
        self.windows.push(window);
        self
    }
}

impl Furniture {
    /// Unrotated piece
    pub fn new(kind: impl Into<String>, width: f64, length: f64, x: f64, z: f64, color: u32) -> Self {
        Self {
            kind: kind.into(),
            width,
            length,
            x,
            z,
            rotation: 0.0,
            color,
        }
    }

    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}
