//! Leg cross-section sizing.
//!
//! A step table stands in for a buckling check: the square section grows
//! with the load each leg carries, stiffer materials get away with thinner
//! sections. Two guards follow: a slenderness floor (height / size ≤ 40)
//! and a 25% boost for long spans, whose racking loads the table ignores.

use serde::{Deserialize, Serialize};

use crate::materials::Material;

/// Largest accepted height-to-section ratio
pub const MAX_SLENDERNESS: f64 = 40.0;

/// Spans beyond this get a thicker leg (cm)
pub const LONG_SPAN_CM: f64 = 150.0;

/// Multiplier applied to legs under long spans
pub const LONG_SPAN_BOOST: f64 = 1.25;

/// (max per-leg load kg, wood cm, metal cm, plastic cm)
const LEG_STEPS: [(f64, f64, f64, f64); 4] = [
    (15.0, 4.0, 2.5, 4.5),
    (30.0, 5.0, 3.0, 5.5),
    (60.0, 6.0, 3.5, 7.0),
    (f64::INFINITY, 7.5, 4.5, 9.0),
];

/// How a leg size was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegSizing {
    pub per_leg_load_kg: f64,
    /// Size from the load table alone (cm)
    pub base_size_cm: f64,
    /// Final square section (cm)
    pub size_cm: f64,
    /// height / size at the final section
    pub slenderness: f64,
    pub slenderness_corrected: bool,
    pub long_span_boost: bool,
}

/// Minimum square section for a per-leg load.
pub fn section_for_load(per_leg_load_kg: f64, material: Material) -> f64 {
    // The last step is unbounded so a match always exists
    let step = LEG_STEPS
        .iter()
        .find(|(max_load, ..)| per_leg_load_kg <= *max_load)
        .unwrap_or(&LEG_STEPS[LEG_STEPS.len() - 1]);
    match material {
        Material::Wood => step.1,
        Material::Metal => step.2,
        Material::Plastic => step.3,
    }
}

/// Size the legs carrying `total_load_kg` over `leg_count` legs.
pub fn size_legs(total_load_kg: f64, leg_count: u32, height_cm: f64, span_cm: f64, material: Material) -> LegSizing {
    let per_leg_load_kg = total_load_kg / f64::from(leg_count.max(1));
    let base_size_cm = section_for_load(per_leg_load_kg, material);

    let mut size_cm = base_size_cm;
    let slenderness_corrected = height_cm / size_cm > MAX_SLENDERNESS;
    if slenderness_corrected {
        size_cm = height_cm / MAX_SLENDERNESS;
    }

    let long_span_boost = span_cm > LONG_SPAN_CM;
    if long_span_boost {
        size_cm *= LONG_SPAN_BOOST;
    }

    LegSizing {
        per_leg_load_kg,
        base_size_cm,
        size_cm,
        slenderness: height_cm / size_cm,
        slenderness_corrected,
        long_span_boost,
    }
}
