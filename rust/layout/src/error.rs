// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for house plan generation.
//!
//! Layout generation itself never fails; these errors come from the
//! boundary around it (parameter validation, style parsing, configuration
//! and JSON I/O).

use thiserror::Error;

/// Result type alias for house plan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around layout generation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("total area {area} sq ft is below the minimum of {min} sq ft")]
    AreaTooSmall { area: f64, min: f64 },

    #[error("total area must be a finite number")]
    NonFiniteArea,

    #[error("bedrooms must be between {min} and {max}, got {value}")]
    BedroomsOutOfRange { value: u32, min: u32, max: u32 },

    #[error("bathrooms must be between {min} and {max}, got {value}")]
    BathroomsOutOfRange { value: u32, min: u32, max: u32 },

    #[error("floors must be between {min} and {max}, got {value}")]
    FloorsOutOfRange { value: u32, min: u32, max: u32 },

    #[error("unknown house style: {0}")]
    UnknownStyle(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
