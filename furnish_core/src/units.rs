//! # Unit Types
//!
//! Lightweight newtype wrappers for the handful of units the engine mixes:
//! masses in kilograms and forces in newtons. Lengths stay plain `f64`
//! centimeters. The wrappers serialize as bare numbers.
//!
//! ## Conventions
//!
//! - Length: centimeters (cm) everywhere, including render output
//! - Mass: kilograms (kg) for loads and self-weight
//! - Force: newtons (N), using g = 9.8 m/s²
//! - Stiffness: kgf/cm² for Young's modulus tables
//!
//! ## Example
//!
//! ```rust
//! use furnish_core::units::{Kilograms, Newtons};
//!
//! let load = Kilograms(50.0);
//! let force: Newtons = load.into();
//! assert!((force.0 - 490.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Gravitational acceleration used for kg → N conversion
pub const GRAVITY: f64 = 9.8;

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl From<Kilograms> for Newtons {
    fn from(kg: Kilograms) -> Self {
        Newtons(kg.0 * GRAVITY)
    }
}

/// Round a currency amount to whole cents.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round `value` up to the next multiple of `step`.
///
/// ```rust
/// use furnish_core::units::round_up_to;
/// assert_eq!(round_up_to(3.1, 0.5), 3.5);
/// assert_eq!(round_up_to(3.5, 0.5), 3.5);
/// ```
pub fn round_up_to(value: f64, step: f64) -> f64 {
    // Guard against 3.5000000001 becoming 4.0
    let scaled = value / step;
    let snapped = (scaled * 1e9).round() / 1e9;
    snapped.ceil() * step
}
