//! Chair: seat, backrest, four legs and an optional pair of armrests.

use crate::engineering::EngineeringSpec;
use crate::geometry::Dimensions;
use crate::parts::{AnchorPattern, Category, Face, Part, PartKind};

use super::corner_legs;

/// Backrest board thickness (cm)
pub const BACKREST_THICKNESS_CM: f64 = 2.5;

/// Armrest section (cm) and height above the seat (cm)
pub const ARMREST_SECTION_CM: f64 = 5.0;
pub const ARMREST_RISE_CM: f64 = 15.0;

pub fn generate(dims: &Dimensions, spec: &EngineeringSpec, has_armrests: bool) -> Vec<Part> {
    let t = spec.top_thickness_cm;
    let seat_height = dims.height / 2.0;

    let mut parts = vec![
        Part::new(
            "seat",
            "Seat",
            Category::Surface,
            PartKind::HorizontalSurface,
            Dimensions::new(dims.length, dims.width, t),
        )
        .raised(seat_height - t),
        Part::new(
            "backrest",
            "Backrest",
            Category::Support,
            PartKind::Panel,
            Dimensions::new(dims.length, BACKREST_THICKNESS_CM, dims.height - seat_height),
        )
        .anchored(AnchorPattern::Flush(Face::Rear))
        .raised(seat_height),
        corner_legs(spec, seat_height - t),
    ];

    if has_armrests {
        parts.push(
            Part::new(
                "armrest",
                "Armrest",
                Category::Support,
                PartKind::Rail,
                Dimensions::new(ARMREST_SECTION_CM, dims.width * 0.8, ARMREST_SECTION_CM),
            )
            .quantity(2)
            .anchored(AnchorPattern::Sides)
            .raised(seat_height + ARMREST_RISE_CM),
        );
    }

    parts
}
