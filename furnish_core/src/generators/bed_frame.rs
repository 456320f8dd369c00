//! Bed frame: headboard at −x, footboard at +x, side rails, slats, four
//! short legs and a center beam under wide frames.

use crate::engineering::{needs_center_beam, EngineeringSpec, BED_SLAT_COUNT, BED_SLAT_WIDTH_CM};
use crate::geometry::Dimensions;
use crate::parts::{AnchorPattern, Category, Face, Part, PartKind};
use crate::request::FurnitureType;

use super::corner_legs;

/// Head/foot board and side rail thickness (cm)
pub const BOARD_THICKNESS_CM: f64 = 3.0;

/// Side rail height (cm)
pub const RAIL_HEIGHT_CM: f64 = 15.0;

/// Highest underside of the side rails (cm)
pub const MAX_RAIL_ELEVATION_CM: f64 = 25.0;

/// Footboard rise above the rail underside (cm)
pub const FOOTBOARD_RISE_CM: f64 = 25.0;

/// Center beam section: width × height (cm)
pub const BEAM_WIDTH_CM: f64 = 5.0;
pub const BEAM_HEIGHT_CM: f64 = 10.0;

pub fn generate(dims: &Dimensions, spec: &EngineeringSpec) -> Vec<Part> {
    let t = spec.top_thickness_cm;
    let rail_elevation = MAX_RAIL_ELEVATION_CM.min(dims.height * 0.4);
    let slat_elevation = rail_elevation + RAIL_HEIGHT_CM - t;
    let inner_length = dims.length - 2.0 * BOARD_THICKNESS_CM;

    let mut parts = vec![
        Part::new(
            "headboard",
            "Headboard",
            Category::Support,
            PartKind::Panel,
            Dimensions::new(BOARD_THICKNESS_CM, dims.width, dims.height),
        )
        .anchored(AnchorPattern::Flush(Face::Start)),
        Part::new(
            "footboard",
            "Footboard",
            Category::Support,
            PartKind::Panel,
            Dimensions::new(
                BOARD_THICKNESS_CM,
                dims.width,
                dims.height.min(rail_elevation + FOOTBOARD_RISE_CM),
            ),
        )
        .anchored(AnchorPattern::Flush(Face::End)),
        Part::new(
            "side-rail",
            "Side Rail",
            Category::Support,
            PartKind::Rail,
            Dimensions::new(inner_length, BOARD_THICKNESS_CM, RAIL_HEIGHT_CM),
        )
        .quantity(2)
        .anchored(AnchorPattern::Sides)
        .raised(rail_elevation),
        Part::new(
            "slat",
            "Slat",
            Category::Surface,
            PartKind::HorizontalSurface,
            Dimensions::new(BED_SLAT_WIDTH_CM, dims.width - 2.0 * BOARD_THICKNESS_CM, t),
        )
        .quantity(BED_SLAT_COUNT)
        .anchored(AnchorPattern::DistributeX)
        .raised(slat_elevation),
        corner_legs(spec, rail_elevation),
    ];

    if needs_center_beam(FurnitureType::BedFrame, dims) {
        parts.push(
            Part::new(
                "center-beam",
                "Center Beam",
                Category::Support,
                PartKind::Rail,
                Dimensions::new(inner_length, BEAM_WIDTH_CM, BEAM_HEIGHT_CM),
            )
            .raised(slat_elevation - BEAM_HEIGHT_CM),
        );
    }

    parts
}
