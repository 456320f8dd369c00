//! # Part Generators
//!
//! One deterministic generator per furniture archetype. Each turns the
//! request envelope and the engineering spec into a fixed skeleton of
//! abstract parts tagged with the anchor pattern their geometry implies.
//! No generator computes positions.

pub mod bed_frame;
pub mod bookshelf;
pub mod chair;
pub mod desk;
pub mod table;

use log::{debug, warn};

use crate::engineering::EngineeringSpec;
use crate::geometry::Dimensions;
use crate::parts::{AnchorPattern, Category, Part, PartKind};
use crate::request::{FurnitureRequest, FurnitureType};

/// Smallest buildable part dimension (cm)
pub const MIN_PART_DIMENSION_CM: f64 = 1.0;

/// Generate the abstract parts list for a request.
///
/// Parts the envelope leaves no room for are clamped to buildable sizes
/// and noted in `spec.warnings`.
pub fn generate_parts(request: &FurnitureRequest, spec: &mut EngineeringSpec) -> Vec<Part> {
    let mut parts = match request.furniture_type {
        FurnitureType::Table => table::generate(&request.dimensions, spec),
        FurnitureType::Chair => chair::generate(&request.dimensions, spec, request.has_armrests),
        FurnitureType::Bookshelf => bookshelf::generate(request, spec),
        FurnitureType::Desk => desk::generate(&request.dimensions, spec),
        FurnitureType::BedFrame => bed_frame::generate(&request.dimensions, spec),
    };
    clamp_to_buildable(&mut parts, &mut spec.warnings);
    debug!(
        "generated {} parts for a {}",
        parts.len(),
        request.furniture_type.display_name()
    );
    parts
}

/// Floor every dimension at [`MIN_PART_DIMENSION_CM`] and every elevation at the floor.
fn clamp_to_buildable(parts: &mut [Part], warnings: &mut Vec<String>) {
    for part in parts.iter_mut() {
        let d = part.dimensions;
        let elevation = part.elevation;
        let fits = d.length >= MIN_PART_DIMENSION_CM
            && d.width >= MIN_PART_DIMENSION_CM
            && d.height >= MIN_PART_DIMENSION_CM
            && elevation >= 0.0;
        if fits {
            continue;
        }

        part.dimensions = Dimensions::new(
            d.length.max(MIN_PART_DIMENSION_CM),
            d.width.max(MIN_PART_DIMENSION_CM),
            d.height.max(MIN_PART_DIMENSION_CM),
        );
        part.elevation = part.elevation.max(0.0);
        let message = format!(
            "{}: envelope leaves no room for {:.1} × {:.1} × {:.1} cm at {:.1} cm, clamped to {:.1} × {:.1} × {:.1} cm at {:.1} cm",
            part.name,
            d.length,
            d.width,
            d.height,
            elevation,
            part.dimensions.length,
            part.dimensions.width,
            part.dimensions.height,
            part.elevation
        );
        warn!("{}", message);
        warnings.push(message);
    }
}

/// Square-section legs of the given height, placed at the corners.
pub(crate) fn corner_legs(spec: &EngineeringSpec, height: f64) -> Part {
    Part::new(
        "leg",
        "Leg",
        Category::Support,
        PartKind::SupportLeg,
        Dimensions::new(spec.leg_size_cm, spec.leg_size_cm, height),
    )
    .quantity(4)
    .anchored(AnchorPattern::Corners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engineering::compute_engineering_spec;
    use crate::materials::Material;

    #[test]
    fn test_every_type_generates_parts() {
        for furniture_type in FurnitureType::ALL {
            let request = FurnitureRequest::new(furniture_type, Material::Wood, Dimensions::new(120.0, 60.0, 90.0));
            let mut spec = compute_engineering_spec(furniture_type, &request.dimensions, request.material, None);
            let parts = generate_parts(&request, &mut spec);
            assert!(!parts.is_empty(), "{} produced no parts", furniture_type);
            assert!(parts.iter().all(|p| p.quantity >= 1));
            assert!(parts.iter().all(|p| p.dimensions.length > 0.0 && p.dimensions.width > 0.0 && p.dimensions.height > 0.0));
        }
    }

    #[test]
    fn test_cramped_envelopes_stay_buildable() {
        let cramped = [
            (FurnitureType::Table, Dimensions::new(500.0, 10.0, 10.0)),
            (FurnitureType::Chair, Dimensions::new(500.0, 500.0, 10.0)),
            (FurnitureType::Desk, Dimensions::new(10.0, 10.0, 10.0)),
            (FurnitureType::Bookshelf, Dimensions::new(10.0, 10.0, 10.0)),
            (FurnitureType::BedFrame, Dimensions::new(10.0, 10.0, 10.0)),
        ];
        for (furniture_type, dims) in cramped {
            let request = FurnitureRequest::new(furniture_type, Material::Wood, dims);
            let mut spec = compute_engineering_spec(furniture_type, &dims, request.material, Some(100_000.0));
            let parts = generate_parts(&request, &mut spec);
            for part in &parts {
                let d = part.dimensions;
                assert!(
                    d.length >= MIN_PART_DIMENSION_CM && d.width >= MIN_PART_DIMENSION_CM && d.height >= MIN_PART_DIMENSION_CM,
                    "{} {} is {:?}",
                    furniture_type,
                    part.id,
                    d
                );
                assert!(part.elevation >= 0.0, "{} {} sits below the floor", furniture_type, part.id);
            }
        }
    }

    #[test]
    fn test_clamp_is_reported() {
        let dims = Dimensions::new(500.0, 10.0, 10.0);
        let request = FurnitureRequest::new(FurnitureType::Table, Material::Wood, dims);
        let mut spec = compute_engineering_spec(FurnitureType::Table, &dims, Material::Wood, None);
        let parts = generate_parts(&request, &mut spec);
        let apron = parts.iter().find(|p| p.id == "apron-short").unwrap();
        assert_eq!(apron.dimensions.length, MIN_PART_DIMENSION_CM);
        assert!(spec.warnings.iter().any(|w| w.starts_with("Short Apron Rail")));
    }
}
