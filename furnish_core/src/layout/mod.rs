//! # Layout Resolver
//!
//! Explodes abstract parts into positioned instances. Runs in two phases:
//! every ordinary part is placed from its anchor pattern, then partition
//! parts are laid out against the horizontal surfaces placed in phase one.
//! Part order is preserved; a partition part is replaced in place by its
//! per-shelf divider parts.

pub mod anchors;
pub mod partition;
pub mod rules;

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::Dimensions;
use crate::parts::{AnchorPattern, Part, PartKind, PositionedPart};
use crate::request::FurnitureType;

use anchors::Axis;
pub use partition::{place_partitions, Interval, PartitionOutcome, ShelfPartitioning};
pub use rules::{PartitionConfig, PartitionStrategy, Ratio, ShelfModifier, ShelfTarget};

/// Output of the layout resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Abstract parts after partition expansion; Σ quantity == positioned.len()
    pub parts: Vec<Part>,
    pub positioned: Vec<PositionedPart>,
    pub partitions: Vec<ShelfPartitioning>,
    pub warnings: Vec<String>,
}

/// Place every instance of a non-partition part.
pub fn place_part(part: &Part, envelope: &Dimensions) -> Vec<PositionedPart> {
    match part.anchor {
        Some(AnchorPattern::Corners) => anchors::corners(part, envelope),
        Some(AnchorPattern::MidSpan) => anchors::mid_span(part, envelope),
        Some(AnchorPattern::DistributeX) => anchors::distribute(part, envelope, Axis::X),
        Some(AnchorPattern::DistributeY) => anchors::distribute(part, envelope, Axis::Y),
        Some(AnchorPattern::DistributeZ) => anchors::distribute(part, envelope, Axis::Z),
        Some(AnchorPattern::Sides) => anchors::sides(part, envelope),
        Some(AnchorPattern::Apron(side)) => anchors::apron(part, envelope, side),
        Some(AnchorPattern::Flush(face)) => anchors::flush(part, envelope, face),
        // A partition pattern on an ordinary part has nothing to divide
        Some(AnchorPattern::VerticalPartition) | None => anchors::fallback(part),
    }
}

enum Slot<'a> {
    Placed(Part, Vec<PositionedPart>),
    Partition(&'a Part, &'a PartitionConfig),
}

/// Resolve positions for a whole parts list.
pub fn resolve_positions<R: Rng + ?Sized>(
    parts: &[Part],
    furniture_type: FurnitureType,
    envelope: &Dimensions,
    random_shelf_probability: f64,
    rng: &mut R,
) -> Layout {
    let mut layout = Layout::default();

    // === Phase 1: anchor patterns ===
    let mut slots = Vec::with_capacity(parts.len());
    for part in parts {
        match &part.kind {
            PartKind::VerticalPartition(config) if furniture_type == FurnitureType::Bookshelf => {
                slots.push(Slot::Partition(part, config));
            }
            PartKind::VerticalPartition(_) => {
                let message = format!(
                    "Vertical partitions only apply to shelving units; '{}' ignored for a {}",
                    part.name,
                    furniture_type.display_name()
                );
                warn!("{}", message);
                layout.warnings.push(message);
            }
            _ => slots.push(Slot::Placed(part.clone(), place_part(part, envelope))),
        }
    }

    let surfaces: Vec<PositionedPart> = slots
        .iter()
        .filter_map(|slot| match slot {
            Slot::Placed(_, placed) => Some(placed),
            Slot::Partition(..) => None,
        })
        .flatten()
        .filter(|p| p.is_horizontal_surface())
        .cloned()
        .collect();

    // === Phase 2: partitions, flattened in original order ===
    for slot in slots {
        match slot {
            Slot::Placed(part, placed) => {
                layout.parts.push(part);
                layout.positioned.extend(placed);
            }
            Slot::Partition(part, config) => {
                let outcome = place_partitions(part, config, &surfaces, envelope, random_shelf_probability, rng);
                layout.parts.extend(outcome.parts);
                layout.positioned.extend(outcome.positioned);
                layout.partitions.extend(outcome.shelves);
                layout.warnings.extend(outcome.warnings);
            }
        }
    }

    debug!(
        "layout: {} parts exploded into {} instances, {} shelf intervals",
        layout.parts.len(),
        layout.positioned.len(),
        layout.partitions.len()
    );

    layout
}
