// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Style dispatch
//!
//! Each style has its own generator. All of them take the house parameters
//! and the footprint size in display units (already multiplied by the scale
//! factor) and return rooms in emission order.

mod contemporary;
mod minimalist;
mod modern;
mod traditional;

pub use contemporary::generate_contemporary_layout;
pub use minimalist::generate_minimalist_layout;
pub use modern::generate_modern_layout;
pub use traditional::generate_traditional_layout;

use crate::types::{HouseParameters, HouseStyle, Room};

/// Signature shared by every style generator
pub type StyleGenerator = fn(&HouseParameters, f64, f64) -> Vec<Room>;

/// Pick the generator for a style.
pub fn select_generator(style: HouseStyle) -> StyleGenerator {
    match style {
        HouseStyle::Modern => generate_modern_layout,
        HouseStyle::Traditional => generate_traditional_layout,
        HouseStyle::Contemporary => generate_contemporary_layout,
        HouseStyle::Minimalist => generate_minimalist_layout,
    }
}

/// Generate the room layout for `params.style`.
///
/// `width` and `length` are the scaled footprint dimensions.
pub fn generate_layout_design(params: &HouseParameters, width: f64, length: f64) -> Vec<Room> {
    let rooms = select_generator(params.style)(params, width, length);
    tracing::debug!(
        style = %params.style,
        bedrooms = params.bedrooms,
        bathrooms = params.bathrooms,
        rooms = rooms.len(),
        "generated layout"
    );
    rooms
}

/// Generate from a raw style tag; unrecognized tags use the modern layout.
pub fn generate_layout_for_tag(
    tag: &str,
    params: &HouseParameters,
    width: f64,
    length: f64,
) -> Vec<Room> {
    let params = HouseParameters {
        style: HouseStyle::from_tag(tag),
        ..params.clone()
    };
    generate_layout_design(&params, width, length)
}
