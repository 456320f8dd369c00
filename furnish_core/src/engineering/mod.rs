//! # Engineering Calculator
//!
//! Pure functions deriving the structural sizing of a piece of furniture
//! from its type, envelope, material and target load. The result, an
//! [`EngineeringSpec`], is computed once per request and then only read.
//!
//! ## Example
//!
//! ```rust
//! use furnish_core::engineering::compute_engineering_spec;
//! use furnish_core::geometry::Dimensions;
//! use furnish_core::materials::Material;
//! use furnish_core::request::FurnitureType;
//!
//! let spec = compute_engineering_spec(
//!     FurnitureType::Table,
//!     &Dimensions::new(240.0, 90.0, 75.0),
//!     Material::Wood,
//!     None,
//! );
//! assert_eq!(spec.leg_count, 6);
//! ```

pub mod deflection;
pub mod legs;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::Dimensions;
use crate::materials::Material;
use crate::request::FurnitureType;

pub use deflection::{check_deflection, DeflectionCheck, SurfaceSpan};
pub use legs::{size_legs, LegSizing};

/// Tables longer than this get an apron (cm)
pub const APRON_MIN_LENGTH_CM: f64 = 120.0;

/// Tables longer than this get two mid-span perimeter legs (cm)
pub const MIDSPAN_LEGS_MIN_LENGTH_CM: f64 = 220.0;

/// Apron rail section: thickness × height (cm)
pub const APRON_THICKNESS_CM: f64 = 2.5;
pub const APRON_HEIGHT_CM: f64 = 8.0;

/// Largest share of the envelope height or length a surface may take
pub const MAX_SURFACE_SHARE: f64 = 0.25;

/// Bed slats per frame
pub const BED_SLAT_COUNT: u32 = 10;

/// Board width of one bed slat (cm)
pub const BED_SLAT_WIDTH_CM: f64 = 8.0;

/// Beds wider than this get a center beam halving the slat span (cm)
pub const BED_CENTER_BEAM_MIN_WIDTH_CM: f64 = 100.0;

/// Design load when the request gives none (kg).
pub fn default_load_kg(furniture_type: FurnitureType) -> f64 {
    match furniture_type {
        FurnitureType::Chair => 120.0,
        FurnitureType::Table | FurnitureType::Desk => 50.0,
        FurnitureType::Bookshelf => 20.0,
        FurnitureType::BedFrame => 200.0,
    }
}

/// Share of the design load assumed to land on a single point.
fn point_load_share(furniture_type: FurnitureType) -> f64 {
    match furniture_type {
        FurnitureType::Chair => 0.5,
        _ => 0.25,
    }
}

/// Load summary for the primary surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadAnalysis {
    /// Design live load (kg)
    pub total_load_kg: f64,
    /// Live load plus surface self-weight (kg)
    pub distributed_load_kg: f64,
    /// Concentrated share of the live load (kg)
    pub point_load_kg: f64,
    /// Estimated weight of the primary surface (kg)
    pub self_weight_kg: f64,
}

/// Kind of structural reinforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdditionKind {
    /// Continuous rail beneath the top
    Apron,
    /// Extra perimeter legs at mid-span (never center legs)
    MidSpanLegs,
}

/// A reinforcement the part generator must add.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuralAddition {
    pub kind: AdditionKind,
    pub quantity: u32,
    pub dimensions: Dimensions,
}

/// Derived structural sizing for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineeringSpec {
    /// Square leg section (cm)
    pub leg_size_cm: f64,
    /// Thickness of tops, seats, shelves and slats (cm)
    pub top_thickness_cm: f64,
    /// Legs (or load-bearing panels) sharing the load
    pub leg_count: u32,
    pub additions: Vec<StructuralAddition>,
    pub load_analysis: LoadAnalysis,
    pub legs: LegSizing,
    /// Present when the surface was checked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deflection: Option<DeflectionCheck>,
    /// Infeasibility notes; the sizing is still best effort
    pub warnings: Vec<String>,
}

impl EngineeringSpec {
    pub fn has_addition(&self, kind: AdditionKind) -> bool {
        self.additions.iter().any(|a| a.kind == kind)
    }
}

/// Whether a table of this length gets mid-span legs.
pub fn needs_midspan_legs(furniture_type: FurnitureType, dimensions: &Dimensions) -> bool {
    furniture_type == FurnitureType::Table && dimensions.length > MIDSPAN_LEGS_MIN_LENGTH_CM
}

/// Whether a bed of this width gets a center beam.
pub fn needs_center_beam(furniture_type: FurnitureType, dimensions: &Dimensions) -> bool {
    furniture_type == FurnitureType::BedFrame && dimensions.width > BED_CENTER_BEAM_MIN_WIDTH_CM
}

/// Number of load-bearing supports.
pub fn support_count(furniture_type: FurnitureType, dimensions: &Dimensions) -> u32 {
    match furniture_type {
        // Two side panels carry a shelving unit
        FurnitureType::Bookshelf => 2,
        FurnitureType::Table if needs_midspan_legs(furniture_type, dimensions) => 6,
        _ => 4,
    }
}

/// Thickest surface the envelope can hold.
pub fn max_surface_thickness(dimensions: &Dimensions) -> f64 {
    deflection::MAX_THICKNESS_CM
        .min(dimensions.height * MAX_SURFACE_SHARE)
        .min(dimensions.length * MAX_SURFACE_SHARE)
}

/// Beam geometry of the primary loaded surface.
fn primary_surface(furniture_type: FurnitureType, dimensions: &Dimensions, total_load_kg: f64) -> SurfaceSpan {
    match furniture_type {
        FurnitureType::BedFrame => {
            let span_cm = if needs_center_beam(furniture_type, dimensions) {
                dimensions.width / 2.0
            } else {
                dimensions.width
            };
            SurfaceSpan {
                span_cm,
                width_cm: BED_SLAT_WIDTH_CM,
                load_kg: total_load_kg / f64::from(BED_SLAT_COUNT),
            }
        }
        _ => {
            let span_cm = if needs_midspan_legs(furniture_type, dimensions) {
                dimensions.length / 2.0
            } else {
                dimensions.length
            };
            SurfaceSpan {
                span_cm,
                width_cm: dimensions.width,
                load_kg: total_load_kg,
            }
        }
    }
}

/// Compute the engineering spec for a request.
///
/// `projected_load_kg` overrides the per-type default when present and
/// positive.
pub fn compute_engineering_spec(
    furniture_type: FurnitureType,
    dimensions: &Dimensions,
    material: Material,
    projected_load_kg: Option<f64>,
) -> EngineeringSpec {
    let props = material.properties();
    let mut warnings = Vec::new();

    // === Loads ===
    let total_load_kg = projected_load_kg
        .filter(|kg| *kg > 0.0)
        .unwrap_or_else(|| default_load_kg(furniture_type));
    let surface = primary_surface(furniture_type, dimensions, total_load_kg);
    let self_weight_kg = dimensions.length * dimensions.width * props.base_surface_thickness_cm * props.density_kg_cm3;
    let load_analysis = LoadAnalysis {
        total_load_kg,
        distributed_load_kg: total_load_kg + self_weight_kg,
        point_load_kg: total_load_kg * point_load_share(furniture_type),
        self_weight_kg,
    };

    // === Legs ===
    let leg_count = support_count(furniture_type, dimensions);
    let legs = size_legs(total_load_kg, leg_count, dimensions.height, dimensions.length, material);
    if legs.slenderness_corrected {
        warnings.push(format!(
            "Legs widened from {:.1} cm to {:.1} cm: {:.0} cm tall supports would exceed a {:.0}:1 slenderness ratio",
            legs.base_size_cm,
            legs.size_cm,
            dimensions.height,
            legs::MAX_SLENDERNESS
        ));
    }

    // === Surface thickness ===
    let mut top_thickness_cm = props.base_surface_thickness_cm;
    let deflection = if deflection::needs_check(&surface, load_analysis.distributed_load_kg) {
        let check = check_deflection(&surface, top_thickness_cm, props.youngs_modulus_kgf_cm2);
        top_thickness_cm = check.recommended_thickness_cm;
        if !check.initial_passes() {
            debug!(
                "surface deflects {:.2} cm at {:.1} cm, thickened to {:.1} cm",
                check.deflection_cm, check.initial_thickness_cm, check.recommended_thickness_cm
            );
        }
        if !check.passes() {
            warnings.push(format!(
                "Surface deflection {:.2} cm exceeds the {:.1} cm limit even at the {:.0} cm maximum thickness; add supports or shorten the {:.0} cm span",
                check.final_deflection_cm, check.limit_cm, deflection::MAX_THICKNESS_CM, check.span_cm
            ));
        }
        Some(check)
    } else {
        None
    };
    let fit_cm = max_surface_thickness(dimensions);
    if top_thickness_cm > fit_cm {
        warnings.push(format!(
            "Surface thickness reduced from {:.1} cm to {:.2} cm to fit the {:.0} × {:.0} cm envelope",
            top_thickness_cm, fit_cm, dimensions.length, dimensions.height
        ));
        top_thickness_cm = fit_cm;
    }

    // === Additions ===
    let mut additions = Vec::new();
    if furniture_type == FurnitureType::Table && dimensions.length > APRON_MIN_LENGTH_CM {
        additions.push(StructuralAddition {
            kind: AdditionKind::Apron,
            quantity: 1,
            dimensions: Dimensions::new(dimensions.length, APRON_THICKNESS_CM, APRON_HEIGHT_CM),
        });
    }
    if needs_midspan_legs(furniture_type, dimensions) {
        additions.push(StructuralAddition {
            kind: AdditionKind::MidSpanLegs,
            quantity: 2,
            dimensions: Dimensions::new(legs.size_cm, legs.size_cm, dimensions.height - top_thickness_cm),
        });
    }

    debug!(
        "engineering: {} legs at {:.2} cm, top {:.1} cm, {} additions, load {:.0} kg",
        leg_count,
        legs.size_cm,
        top_thickness_cm,
        additions.len(),
        total_load_kg
    );

    EngineeringSpec {
        leg_size_cm: legs.size_cm,
        top_thickness_cm,
        leg_count,
        additions,
        load_analysis,
        legs,
        deflection,
        warnings,
    }
}
