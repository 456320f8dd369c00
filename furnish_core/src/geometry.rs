//! Basic geometric value types.
//!
//! The furniture frame has its origin at the floor center with y up.
//! `length` runs along x, `width` (depth) along z, `height` along y.
//! The front face is +z, the rear face is −z.

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Smallest accepted envelope dimension (cm)
pub const MIN_DIMENSION_CM: f64 = 10.0;

/// Largest accepted envelope dimension (cm)
pub const MAX_DIMENSION_CM: f64 = 500.0;

/// A point or rotation in the furniture's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }
}

/// Box extents in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Dimensions { length, width, height }
    }

    pub fn volume_cm3(&self) -> f64 {
        self.length * self.width * self.height
    }

    pub fn max_extent(&self) -> f64 {
        self.length.max(self.width).max(self.height)
    }

    /// Smaller of the two footprint dimensions.
    pub fn min_footprint(&self) -> f64 {
        self.length.min(self.width)
    }

    /// Check an overall furniture envelope against the accepted range.
    pub fn validate_envelope(&self) -> DesignResult<()> {
        for (field, value) in [
            ("dimensions.length", self.length),
            ("dimensions.width", self.width),
            ("dimensions.height", self.height),
        ] {
            if !value.is_finite() {
                return Err(DesignError::invalid_input(field, value.to_string(), "Must be a finite number"));
            }
            if !(MIN_DIMENSION_CM..=MAX_DIMENSION_CM).contains(&value) {
                return Err(DesignError::invalid_input(
                    field,
                    value.to_string(),
                    format!("Must be between {} and {} cm", MIN_DIMENSION_CM, MAX_DIMENSION_CM),
                ));
            }
        }
        Ok(())
    }
}
