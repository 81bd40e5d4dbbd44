// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! House plan layout generation
//!
//! This crate turns a handful of house parameters (area, bedroom and
//! bathroom counts, style, garage/garden flags) into a list of rectangular
//! rooms with furniture, doors and windows:
//! 1. Resolve a 4:3 footprint and display scale from the total area
//! 2. Dispatch on the architectural style
//! 3. Let the style's generator allocate rooms in one shared coordinate plane
//!
//! Rendering and document export consume the resulting room list; they are
//! not part of this crate.
//!
//! # Usage
//!
//! ```rust,ignore
//! use house_plan_layout::{generate_house_plan, HouseParameters, LayoutConfig};
//!
//! let params = HouseParameters::default();
//! let plan = generate_house_plan(&params, &LayoutConfig::default())?;
//!
//! for label in plan.labels() {
//!     println!("{}: {}", label.name, label.dimensions);
//! }
//! ```

pub mod config;
pub mod dimensions;
pub mod error;
pub mod factory;
pub mod plan;
pub mod presets;
pub mod styles;
pub mod types;

// Re-export commonly used types and functions
pub use config::LayoutConfig;
pub use dimensions::{resolve_footprint, Footprint};
pub use error::{Error, Result};
pub use plan::{generate_house_plan, HousePlan, RoomLabel, OUTSIDE};
pub use presets::{find_preset, presets, Preset};
pub use styles::{generate_layout_design, generate_layout_for_tag, select_generator};
pub use types::{
    Furniture, HouseParameters, HouseStyle, Opening, PlanBounds, Room, RoomKind,
};
