//! Desk: top, four legs, a front drawer box and a rear modesty panel.

use crate::engineering::EngineeringSpec;
use crate::geometry::Dimensions;
use crate::layout::anchors::CORNER_MARGIN_CM;
use crate::parts::{AnchorPattern, Category, Face, Part, PartKind};

use super::corner_legs;

/// Drawer box height (cm)
pub const DRAWER_HEIGHT_CM: f64 = 12.0;

/// Widest drawer box fitted regardless of desk length (cm)
pub const DRAWER_MAX_LENGTH_CM: f64 = 60.0;

/// Modesty panel sheet thickness (cm)
pub const MODESTY_PANEL_THICKNESS_CM: f64 = 1.8;

pub fn generate(dims: &Dimensions, spec: &EngineeringSpec) -> Vec<Part> {
    let t = spec.top_thickness_cm;
    let under_top = dims.height - t;
    let panel_height = dims.height * 0.4;

    vec![
        Part::new(
            "top",
            "Desk Top",
            Category::Surface,
            PartKind::HorizontalSurface,
            Dimensions::new(dims.length, dims.width, t),
        )
        .anchored(AnchorPattern::Flush(Face::Top)),
        corner_legs(spec, under_top),
        Part::new(
            "drawer",
            "Drawer",
            Category::Storage,
            PartKind::Panel,
            Dimensions::new(
                (dims.length * 0.4).min(DRAWER_MAX_LENGTH_CM),
                dims.width * 0.8,
                DRAWER_HEIGHT_CM,
            ),
        )
        .anchored(AnchorPattern::Flush(Face::Front))
        .raised(under_top - DRAWER_HEIGHT_CM),
        Part::new(
            "modesty-panel",
            "Modesty Panel",
            Category::Support,
            PartKind::Panel,
            Dimensions::new(
                dims.length - 2.0 * (CORNER_MARGIN_CM + spec.leg_size_cm),
                MODESTY_PANEL_THICKNESS_CM,
                panel_height,
            ),
        )
        .anchored(AnchorPattern::Flush(Face::Rear))
        .raised(under_top - panel_height),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engineering::compute_engineering_spec;
    use crate::materials::Material;
    use crate::request::FurnitureType;

    #[test]
    fn test_drawer_hangs_under_top() {
        let dims = Dimensions::new(200.0, 70.0, 75.0);
        let spec = compute_engineering_spec(FurnitureType::Desk, &dims, Material::Wood, None);
        let parts = generate(&dims, &spec);
        let drawer = parts.iter().find(|p| p.id == "drawer").unwrap();
        assert_eq!(drawer.dimensions.length, DRAWER_MAX_LENGTH_CM);
        let top_of_drawer = drawer.elevation + drawer.dimensions.height;
        assert!((top_of_drawer - (75.0 - spec.top_thickness_cm)).abs() < 1e-9);
    }

    #[test]
    fn test_modesty_panel_between_legs() {
        let dims = Dimensions::new(120.0, 60.0, 75.0);
        let spec = compute_engineering_spec(FurnitureType::Desk, &dims, Material::Metal, None);
        let parts = generate(&dims, &spec);
        let panel = parts.iter().find(|p| p.id == "modesty-panel").unwrap();
        assert!(panel.dimensions.length < 120.0 - 2.0 * spec.leg_size_cm);
        assert!((panel.dimensions.height - 30.0).abs() < 1e-9);
    }
}
