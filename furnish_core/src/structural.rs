//! # Structural Report
//!
//! Post-generation sanity checks on a finished parts list: tip-over risk,
//! total weight, leg slenderness and the surface deflection outcome. None of
//! these fail a design; each finding becomes a warning.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::engineering::{DeflectionCheck, EngineeringSpec};
use crate::geometry::Dimensions;
use crate::materials::Material;
use crate::parts::Part;
use crate::request::FurnitureType;

/// Height-to-base ratio above which the piece may tip
pub const MAX_STABILITY_RATIO: f64 = 3.0;

/// Heavier pieces need two people to move (kg)
pub const TWO_PERSON_WEIGHT_KG: f64 = 25.0;

/// Longer pieces need two people to move (cm)
pub const TWO_PERSON_EXTENT_CM: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralReport {
    /// height / min(length, width)
    pub stability_ratio: f64,
    pub estimated_weight_kg: f64,
    /// Leg height / section at the final leg size
    pub leg_slenderness: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deflection: Option<DeflectionCheck>,
    pub two_person_handling: bool,
    pub warnings: Vec<String>,
}

/// Mass of every part instance in the list.
pub fn estimate_weight_kg(parts: &[Part], material: Material) -> f64 {
    let density = material.properties().density_kg_cm3;
    parts
        .iter()
        .map(|p| p.unit_volume_cm3() * f64::from(p.quantity) * density)
        .sum()
}

/// Assess a generated design.
///
/// Engineering warnings come first, followed by the report's own findings.
pub fn assess(
    furniture_type: FurnitureType,
    dimensions: &Dimensions,
    material: Material,
    parts: &[Part],
    spec: &EngineeringSpec,
) -> StructuralReport {
    let mut warnings = spec.warnings.clone();

    let stability_ratio = dimensions.height / dimensions.min_footprint();
    if stability_ratio > MAX_STABILITY_RATIO {
        let advice = match furniture_type {
            FurnitureType::Bookshelf => "anchor to wall",
            _ => "widen the base or anchor to wall",
        };
        let message = format!(
            "Stability ratio {:.1} exceeds {:.0}:1; tip-over risk, {}",
            stability_ratio, MAX_STABILITY_RATIO, advice
        );
        warn!("{}", message);
        warnings.push(message);
    }

    let estimated_weight_kg = estimate_weight_kg(parts, material);
    let two_person_handling =
        estimated_weight_kg > TWO_PERSON_WEIGHT_KG || dimensions.max_extent() > TWO_PERSON_EXTENT_CM;

    StructuralReport {
        stability_ratio,
        estimated_weight_kg,
        leg_slenderness: spec.legs.slenderness,
        deflection: spec.deflection,
        two_person_handling,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engineering::compute_engineering_spec;
    use crate::generators::generate_parts;
    use crate::request::FurnitureRequest;

    fn report(furniture_type: FurnitureType, dims: Dimensions) -> StructuralReport {
        let request = FurnitureRequest::new(furniture_type, Material::Wood, dims);
        let mut spec = compute_engineering_spec(furniture_type, &dims, Material::Wood, None);
        let parts = generate_parts(&request, &mut spec);
        assess(furniture_type, &dims, Material::Wood, &parts, &spec)
    }

    #[test]
    fn test_tall_narrow_bookshelf_warns() {
        let report = report(FurnitureType::Bookshelf, Dimensions::new(80.0, 25.0, 200.0));
        assert!(report.stability_ratio > MAX_STABILITY_RATIO);
        assert!(report.warnings.iter().any(|w| w.contains("anchor to wall")));
        assert!(report.two_person_handling);
    }

    #[test]
    fn test_small_table_is_stable_and_light() {
        let report = report(FurnitureType::Table, Dimensions::new(60.0, 60.0, 45.0));
        assert!(report.warnings.is_empty());
        assert!(report.stability_ratio < 1.0);
        assert!(!report.two_person_handling);
        assert!(report.estimated_weight_kg > 0.0);
    }

    #[test]
    fn test_weight_counts_quantities() {
        use crate::parts::{Category, PartKind};
        let leg = Part::new("leg", "Leg", Category::Support, PartKind::SupportLeg, Dimensions::new(10.0, 10.0, 100.0));
        let one = estimate_weight_kg(&[leg.clone()], Material::Wood);
        let four = estimate_weight_kg(&[leg.quantity(4)], Material::Wood);
        assert!((one - 6.0).abs() < 1e-9);
        assert!((four - 24.0).abs() < 1e-9);
    }
}
