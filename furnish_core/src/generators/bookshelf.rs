//! Bookshelf: two side panels carrying N shelves, top, bottom and back
//! panels, plus the abstract partition part when dividers are requested.

use crate::engineering::EngineeringSpec;
use crate::geometry::Dimensions;
use crate::parts::{AnchorPattern, Category, Face, Part, PartKind};
use crate::request::FurnitureRequest;

/// Back panel sheet thickness (cm)
pub const BACK_PANEL_THICKNESS_CM: f64 = 0.6;

/// Target clear height per compartment when no shelf count is given (cm)
pub const DEFAULT_SHELF_PITCH_CM: f64 = 35.0;

/// Shelves for a unit of this height when the request leaves it open.
pub fn default_shelf_count(height: f64) -> u32 {
    (((height - 20.0) / DEFAULT_SHELF_PITCH_CM).floor() as u32).max(1)
}

pub fn generate(request: &FurnitureRequest, spec: &EngineeringSpec) -> Vec<Part> {
    let dims = &request.dimensions;
    let t = spec.top_thickness_cm;
    let inner_length = dims.length - 2.0 * t;
    let depth = dims.width - BACK_PANEL_THICKNESS_CM;
    let shelf_count = request.shelf_count.unwrap_or_else(|| default_shelf_count(dims.height));

    let board = |id: &str, name: &str| {
        Part::new(id, name, Category::Storage, PartKind::HorizontalSurface, Dimensions::new(inner_length, depth, t))
    };

    let mut parts = vec![Part::new(
        "side-panel",
        "Side Panel",
        Category::Support,
        PartKind::Panel,
        Dimensions::new(t, dims.width, dims.height),
    )
    .quantity(2)
    .anchored(AnchorPattern::Sides)];

    if shelf_count > 0 {
        parts.push(board("shelf", "Shelf").quantity(shelf_count).anchored(AnchorPattern::DistributeY));
    }

    parts.push(board("top-panel", "Top Panel").anchored(AnchorPattern::Flush(Face::Top)));
    parts.push(board("bottom-panel", "Bottom Panel").anchored(AnchorPattern::Flush(Face::Bottom)));
    parts.push(
        Part::new(
            "back-panel",
            "Back Panel",
            Category::Storage,
            PartKind::Panel,
            Dimensions::new(dims.length, BACK_PANEL_THICKNESS_CM, dims.height),
        )
        .anchored(AnchorPattern::Flush(Face::Rear)),
    );

    let config = request.partition_config();
    if config.is_active() {
        parts.push(
            Part::new(
                "partition",
                "Vertical Partition",
                Category::Storage,
                PartKind::VerticalPartition(config),
                Dimensions::new(t, depth, dims.height - 2.0 * t),
            )
            .anchored(AnchorPattern::VerticalPartition),
        );
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engineering::compute_engineering_spec;
    use crate::layout::rules::{ShelfModifier, ShelfTarget};
    use crate::materials::Material;
    use crate::request::FurnitureType;

    fn request() -> FurnitureRequest {
        FurnitureRequest::new(FurnitureType::Bookshelf, Material::Wood, Dimensions::new(90.0, 30.0, 180.0))
    }

    fn parts_for(request: &FurnitureRequest) -> Vec<Part> {
        let spec = compute_engineering_spec(request.furniture_type, &request.dimensions, request.material, None);
        generate(request, &spec)
    }

    #[test]
    fn test_default_shelf_count() {
        assert_eq!(default_shelf_count(180.0), 4);
        assert_eq!(default_shelf_count(30.0), 1);
    }

    #[test]
    fn test_skeleton_without_partitions() {
        let mut req = request();
        req.shelf_count = Some(5);
        let parts = parts_for(&req);
        let ids: Vec<&str> = parts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["side-panel", "shelf", "top-panel", "bottom-panel", "back-panel"]);
        assert_eq!(parts[1].quantity, 5);
    }

    #[test]
    fn test_zero_shelves_omits_shelf_part() {
        let mut req = request();
        req.shelf_count = Some(0);
        assert!(parts_for(&req).iter().all(|p| p.id != "shelf"));
    }

    #[test]
    fn test_modifier_adds_partition_part() {
        let mut req = request();
        req.shelf_modifiers = vec![ShelfModifier::new(ShelfTarget::Top).with_count(2)];
        let parts = parts_for(&req);
        let partition = parts.last().unwrap();
        assert_eq!(partition.id, "partition");
        match &partition.kind {
            PartKind::VerticalPartition(config) => assert_eq!(config.modifiers.len(), 1),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_shelves_fit_between_sides() {
        let parts = parts_for(&request());
        let side = &parts[0];
        let shelf = &parts[1];
        assert!((shelf.dimensions.length + 2.0 * side.dimensions.length - 90.0).abs() < 1e-9);
    }
}
