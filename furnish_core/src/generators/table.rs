//! Table: top, four corner legs, optional mid-span legs and apron.

use crate::engineering::{AdditionKind, EngineeringSpec};
use crate::geometry::Dimensions;
use crate::layout::anchors::CORNER_MARGIN_CM;
use crate::parts::{AnchorPattern, ApronSide, Category, Face, Part, PartKind};

use super::corner_legs;

pub fn generate(dims: &Dimensions, spec: &EngineeringSpec) -> Vec<Part> {
    let t = spec.top_thickness_cm;
    let leg_height = dims.height - t;

    let mut parts = vec![
        Part::new(
            "top",
            "Table Top",
            Category::Surface,
            PartKind::HorizontalSurface,
            Dimensions::new(dims.length, dims.width, t),
        )
        .anchored(AnchorPattern::Flush(Face::Top)),
        corner_legs(spec, leg_height),
    ];

    for addition in &spec.additions {
        match addition.kind {
            AdditionKind::MidSpanLegs => parts.push(
                Part::new(
                    "midspan-leg",
                    "Mid-span Leg",
                    Category::Support,
                    PartKind::SupportLeg,
                    addition.dimensions,
                )
                .quantity(addition.quantity)
                .anchored(AnchorPattern::MidSpan),
            ),
            AdditionKind::Apron => {
                // Rails run between the legs' inside faces
                let inset = 2.0 * (CORNER_MARGIN_CM + spec.leg_size_cm);
                let rail = addition.dimensions;
                let elevation = dims.height - t - rail.height;
                parts.push(
                    Part::new(
                        "apron-long",
                        "Long Apron Rail",
                        Category::Support,
                        PartKind::Rail,
                        Dimensions::new(dims.length - inset, rail.width, rail.height),
                    )
                    .quantity(2)
                    .anchored(AnchorPattern::Apron(ApronSide::Long))
                    .raised(elevation),
                );
                parts.push(
                    Part::new(
                        "apron-short",
                        "Short Apron Rail",
                        Category::Support,
                        PartKind::Rail,
                        Dimensions::new(dims.width - inset, rail.width, rail.height),
                    )
                    .quantity(2)
                    .anchored(AnchorPattern::Apron(ApronSide::Short))
                    .raised(elevation),
                );
            }
        }
    }

    parts
}
