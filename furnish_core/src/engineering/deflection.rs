//! # Surface Deflection Check
//!
//! Sizes a horizontal surface (table top, shelf, slat) as a simply-supported
//! beam under a midspan point load:
//!
//! ```text
//! δ = P·L³ / (48·E·I),   I = b·t³ / 12,   P = load_kg × 9.8
//! ```
//!
//! with L in cm, b and t in cm and E in kgf/cm². When δ exceeds the 0.5 cm
//! limit the formula is inverted for the required I, giving the thickness,
//! rounded up to the next 0.5 cm and capped at 15 cm.

use serde::{Deserialize, Serialize};

use crate::units::{round_up_to, Kilograms, Newtons};

/// Maximum allowed surface deflection (cm)
pub const DEFLECTION_LIMIT_CM: f64 = 0.5;

/// Thickness increments for recommended surfaces (cm)
pub const THICKNESS_STEP_CM: f64 = 0.5;

/// Thickest surface the engine will recommend (cm)
pub const MAX_THICKNESS_CM: f64 = 15.0;

/// Spans at or below this length skip the check unless heavily loaded (cm)
pub const SHORT_SPAN_CM: f64 = 50.0;

/// Loads above this always trigger the check (kg)
pub const HEAVY_LOAD_KG: f64 = 100.0;

/// Loaded beam geometry for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpan {
    /// Unsupported length between supports (cm)
    pub span_cm: f64,
    /// Board width resisting the load (cm)
    pub width_cm: f64,
    /// Load carried by this board (kg)
    pub load_kg: f64,
}

/// Outcome of the deflection check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCheck {
    pub span_cm: f64,
    pub width_cm: f64,
    pub load_kg: f64,
    pub youngs_modulus_kgf_cm2: f64,

    /// Thickness the check started from (cm)
    pub initial_thickness_cm: f64,

    /// Deflection at the initial thickness (cm)
    pub deflection_cm: f64,

    pub limit_cm: f64,

    /// Thickness to build with (cm); equals the initial thickness when it passes
    pub recommended_thickness_cm: f64,

    /// Deflection at the recommended thickness (cm)
    pub final_deflection_cm: f64,

    /// True when the recommendation hit `MAX_THICKNESS_CM`
    pub capped: bool,
}

impl DeflectionCheck {
    /// Whether the initial thickness was already stiff enough.
    pub fn initial_passes(&self) -> bool {
        self.deflection_cm <= self.limit_cm
    }

    /// Whether the recommended thickness meets the limit.
    pub fn passes(&self) -> bool {
        self.final_deflection_cm <= self.limit_cm
    }
}

/// Second moment of area of a rectangular board, I = b·t³/12 (cm⁴).
pub fn moment_of_inertia_cm4(width_cm: f64, thickness_cm: f64) -> f64 {
    width_cm * thickness_cm.powi(3) / 12.0
}

/// Midspan deflection δ = P·L³/(48·E·I) in cm.
pub fn beam_deflection_cm(span: &SurfaceSpan, thickness_cm: f64, youngs_modulus_kgf_cm2: f64) -> f64 {
    let load_n: Newtons = Kilograms(span.load_kg).into();
    let i = moment_of_inertia_cm4(span.width_cm, thickness_cm);
    load_n.0 * span.span_cm.powi(3) / (48.0 * youngs_modulus_kgf_cm2 * i)
}

/// Whether a surface needs checking at all.
pub fn needs_check(span: &SurfaceSpan, distributed_load_kg: f64) -> bool {
    span.span_cm > SHORT_SPAN_CM || distributed_load_kg > HEAVY_LOAD_KG
}

/// Run the deflection check and derive the recommended thickness.
pub fn check_deflection(span: &SurfaceSpan, thickness_cm: f64, youngs_modulus_kgf_cm2: f64) -> DeflectionCheck {
    let deflection_cm = beam_deflection_cm(span, thickness_cm, youngs_modulus_kgf_cm2);

    let (recommended, capped) = if deflection_cm <= DEFLECTION_LIMIT_CM {
        (thickness_cm, false)
    } else {
        let load_n: Newtons = Kilograms(span.load_kg).into();
        let required_i = load_n.0 * span.span_cm.powi(3) / (48.0 * youngs_modulus_kgf_cm2 * DEFLECTION_LIMIT_CM);
        let required_t = (12.0 * required_i / span.width_cm).cbrt();
        let rounded = round_up_to(required_t, THICKNESS_STEP_CM);
        if rounded > MAX_THICKNESS_CM {
            (MAX_THICKNESS_CM, true)
        } else {
            (rounded, false)
        }
    };

    DeflectionCheck {
        span_cm: span.span_cm,
        width_cm: span.width_cm,
        load_kg: span.load_kg,
        youngs_modulus_kgf_cm2,
        initial_thickness_cm: thickness_cm,
        deflection_cm,
        limit_cm: DEFLECTION_LIMIT_CM,
        recommended_thickness_cm: recommended,
        final_deflection_cm: beam_deflection_cm(span, recommended, youngs_modulus_kgf_cm2),
        capped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{Material, GLASS_YOUNGS_MODULUS_KGF_CM2};

    fn wood_e() -> f64 {
        Material::Wood.properties().youngs_modulus_kgf_cm2
    }

    fn long_table() -> SurfaceSpan {
        SurfaceSpan {
            span_cm: 150.0,
            width_cm: 80.0,
            load_kg: 50.0,
        }
    }

    #[test]
    fn test_moment_of_inertia() {
        // I = 80 * 2.5³ / 12 = 104.17
        assert!((moment_of_inertia_cm4(80.0, 2.5) - 104.17).abs() < 0.01);
    }

    #[test]
    fn test_thin_wood_top_fails_and_thickens() {
        let check = check_deflection(&long_table(), 2.5, wood_e());
        // δ = 490 * 150³ / (48 * 110000 * 104.17) ≈ 3.0 cm
        assert!(check.deflection_cm > DEFLECTION_LIMIT_CM);
        assert!(!check.initial_passes());
        assert!(check.recommended_thickness_cm > 2.5);
        assert_eq!(check.recommended_thickness_cm, 5.0);
        assert!(check.passes());
        assert!(!check.capped);
    }

    #[test]
    fn test_recommendation_is_half_cm_step() {
        let check = check_deflection(&long_table(), 2.5, wood_e());
        let steps = check.recommended_thickness_cm / THICKNESS_STEP_CM;
        assert!((steps - steps.round()).abs() < 1e-9);
    }

    #[test]
    fn test_stiff_material_passes_unchanged() {
        let check = check_deflection(&long_table(), 2.5, GLASS_YOUNGS_MODULUS_KGF_CM2);
        assert!(check.initial_passes());
        assert_eq!(check.recommended_thickness_cm, 2.5);
    }

    #[test]
    fn test_extreme_span_is_capped() {
        let span = SurfaceSpan {
            span_cm: 500.0,
            width_cm: 10.0,
            load_kg: 500.0,
        };
        let check = check_deflection(&span, 2.0, Material::Plastic.properties().youngs_modulus_kgf_cm2);
        assert!(check.capped);
        assert_eq!(check.recommended_thickness_cm, MAX_THICKNESS_CM);
        assert!(!check.passes());
    }

    #[test]
    fn test_short_light_spans_skip_check() {
        let short = SurfaceSpan {
            span_cm: 45.0,
            width_cm: 45.0,
            load_kg: 20.0,
        };
        assert!(!needs_check(&short, 20.0));
        assert!(needs_check(&short, 130.0));
        assert!(needs_check(&long_table(), 50.0));
    }
}
