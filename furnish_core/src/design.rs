//! # Design Pipeline
//!
//! Runs the full generation pipeline for one request:
//!
//! ```text
//! FurnitureRequest
//!   → engineering spec     (sizing)
//!   → abstract parts       (per-type generator)
//!   → positioned parts     (anchors, then partitions)
//!   → cost, assembly time, instructions, structural report
//!   → Design
//! ```
//!
//! Every stage is a pure function of its inputs. The only non-determinism
//! is the random source used by random partition strategies, which callers
//! can inject.
//!
//! ## Example
//!
//! ```rust
//! use furnish_core::design::generate_design;
//! use furnish_core::request::FurnitureRequest;
//!
//! let request = FurnitureRequest::from_json(r##"{
//!     "furnitureType": "table",
//!     "material": "wood",
//!     "dimensions": { "length": 160, "width": 90, "height": 75 },
//!     "materialColor": "#8B5A2B"
//! }"##).unwrap();
//!
//! let design = generate_design(&request).unwrap();
//! assert_eq!(design.positioned_parts.len() as u32, design.part_count());
//! ```

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::engineering::{compute_engineering_spec, EngineeringSpec};
use crate::errors::{DesignError, DesignResult};
use crate::estimate::{assembly_instructions, calculate_cost_breakdown, estimate_assembly_minutes, CostBreakdown};
use crate::generators::generate_parts;
use crate::geometry::Dimensions;
use crate::layout::{resolve_positions, ShelfPartitioning};
use crate::materials::Material;
use crate::parts::{total_quantity, Part, PositionedPart};
use crate::request::{FurnitureRequest, FurnitureType};
use crate::scene::{build_scene, Scene};
use crate::settings::EngineSettings;
use crate::structural::{assess, StructuralReport};

/// A finished design. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub furniture_type: FurnitureType,
    pub material: Material,
    pub dimensions: Dimensions,
    pub material_color: String,
    pub engineering: EngineeringSpec,
    /// Bill of materials
    pub parts: Vec<Part>,
    pub positioned_parts: Vec<PositionedPart>,
    /// Per-interval partition decisions (bookshelves only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partitions: Vec<ShelfPartitioning>,
    pub total_cost: f64,
    pub cost_breakdown: CostBreakdown,
    pub assembly_time_minutes: f64,
    pub instructions: Vec<String>,
    pub structural: StructuralReport,
    /// Structural warnings followed by layout warnings
    pub warnings: Vec<String>,
}

impl Design {
    /// Total instance count of the bill of materials.
    pub fn part_count(&self) -> u32 {
        total_quantity(&self.parts)
    }

    /// Render scene for the positioned parts.
    pub fn scene(&self) -> Scene {
        build_scene(&self.positioned_parts, self.material, &self.material_color)
    }
}

/// Generate a design with default settings and the thread RNG.
pub fn generate_design(request: &FurnitureRequest) -> DesignResult<Design> {
    generate_design_with(request, &EngineSettings::default())
}

/// Generate a design, seeding the RNG from `settings.random_seed` when set.
pub fn generate_design_with(request: &FurnitureRequest, settings: &EngineSettings) -> DesignResult<Design> {
    match settings.random_seed {
        Some(seed) => generate_design_with_rng(request, settings, &mut StdRng::seed_from_u64(seed)),
        None => generate_design_with_rng(request, settings, &mut rand::rng()),
    }
}

/// Generate a design drawing randomness from `rng`.
pub fn generate_design_with_rng<R: Rng + ?Sized>(
    request: &FurnitureRequest,
    settings: &EngineSettings,
    rng: &mut R,
) -> DesignResult<Design> {
    request.validate()?;
    settings.validate()?;

    let dims = request.dimensions;

    // === Engineering ===
    let mut engineering =
        compute_engineering_spec(request.furniture_type, &dims, request.material, request.projected_load_kg());

    // === Parts and layout ===
    let generated = generate_parts(request, &mut engineering);
    let layout = resolve_positions(
        &generated,
        request.furniture_type,
        &dims,
        settings.random_shelf_probability,
        rng,
    );
    debug!(
        "design: {} abstract parts, {} positioned",
        layout.parts.len(),
        layout.positioned.len()
    );
    if total_quantity(&layout.parts) as usize != layout.positioned.len() {
        return Err(DesignError::internal(format!(
            "{} parts in the bill of materials but {} positioned",
            total_quantity(&layout.parts),
            layout.positioned.len()
        )));
    }

    // === Estimates ===
    let cost_breakdown = calculate_cost_breakdown(&layout.parts, request.material, &settings.material_rates);
    let assembly_time_minutes =
        estimate_assembly_minutes(request.furniture_type, layout.positioned.len(), &settings.assembly_minutes);
    let structural = assess(request.furniture_type, &dims, request.material, &layout.parts, &engineering);
    let instructions = assembly_instructions(request.furniture_type, &structural);

    let mut warnings = structural.warnings.clone();
    warnings.extend(layout.warnings.iter().cloned());

    debug!(
        "design: cost {:.2}, {:.0} min assembly, {} warnings",
        cost_breakdown.total,
        assembly_time_minutes,
        warnings.len()
    );

    Ok(Design {
        furniture_type: request.furniture_type,
        material: request.material,
        dimensions: dims,
        material_color: request.material_color.clone(),
        engineering,
        parts: layout.parts,
        positioned_parts: layout.positioned,
        partitions: layout.partitions,
        total_cost: cost_breakdown.total,
        cost_breakdown,
        assembly_time_minutes,
        instructions,
        structural,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_fails_fast() {
        let mut request = FurnitureRequest::new(FurnitureType::Table, Material::Wood, Dimensions::new(600.0, 80.0, 75.0));
        let err = generate_design(&request).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        request.dimensions.length = 120.0;
        request.material_color = "brown".to_string();
        assert!(generate_design(&request).is_err());
    }

    #[test]
    fn test_invalid_settings_fail() {
        let request = FurnitureRequest::new(FurnitureType::Chair, Material::Metal, Dimensions::new(45.0, 45.0, 90.0));
        let settings = EngineSettings {
            random_shelf_probability: -1.0,
            ..EngineSettings::default()
        };
        assert_eq!(generate_design_with(&request, &settings).unwrap_err().error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_every_type_balances() {
        for furniture_type in FurnitureType::ALL {
            let request = FurnitureRequest::new(furniture_type, Material::Wood, Dimensions::new(140.0, 70.0, 90.0));
            let design = generate_design(&request).unwrap();
            assert_eq!(design.part_count() as usize, design.positioned_parts.len());
            assert!(design.total_cost > 0.0);
            assert!(!design.instructions.is_empty());
        }
    }

    #[test]
    fn test_design_serializes_camel_case() {
        let request = FurnitureRequest::new(FurnitureType::Desk, Material::Plastic, Dimensions::new(120.0, 60.0, 75.0));
        let design = generate_design(&request).unwrap();
        let json = serde_json::to_string(&design).unwrap();
        assert!(json.contains("\"positionedParts\""));
        assert!(json.contains("\"totalCost\""));
        let roundtrip: Design = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.part_count(), design.part_count());
    }

    #[test]
    fn test_scene_has_mesh_per_instance() {
        let request = FurnitureRequest::new(FurnitureType::BedFrame, Material::Wood, Dimensions::new(200.0, 160.0, 100.0));
        let design = generate_design(&request).unwrap();
        assert_eq!(design.scene().meshes.len(), design.positioned_parts.len());
    }
}
