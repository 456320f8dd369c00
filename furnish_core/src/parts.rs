//! # Parts
//!
//! Abstract parts (a name, per-unit dimensions and a quantity) as produced
//! by the generators, and positioned parts (one concrete instance each) as
//! produced by the layout resolver.

use serde::{Deserialize, Serialize};

use crate::geometry::{Dimensions, Vec3};
use crate::layout::rules::PartitionConfig;

/// Bill-of-materials grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Surface,
    Support,
    Storage,
}

/// Structural role of a part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PartKind {
    /// Tops, seats, shelves, slats: anything loaded from above
    HorizontalSurface,
    SupportLeg,
    /// Vertical sheet goods: side, back, head and foot panels
    Panel,
    /// Aprons, bed rails, beams, armrests
    Rail,
    /// Shelf dividers, laid out by the partition resolver
    VerticalPartition(PartitionConfig),
}

/// Outer face of the envelope a named part sits flush against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Top,
    /// Resting at the part's elevation
    Bottom,
    /// +z
    Front,
    /// −z
    Rear,
    /// −x
    Start,
    /// +x
    End,
}

/// Which pair of apron rails a part describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApronSide {
    /// Runs along x, placed at front and rear
    Long,
    /// Runs along z, placed at both ends
    Short,
}

/// Layout rule turning one abstract part into positioned instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "pattern", content = "at", rename_all = "kebab-case")]
pub enum AnchorPattern {
    Corners,
    /// Mid-span perimeter legs of long tables
    MidSpan,
    DistributeX,
    DistributeY,
    DistributeZ,
    Sides,
    Apron(ApronSide),
    VerticalPartition,
    Flush(Face),
}

/// An abstract part: one line of the bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub kind: PartKind,

    /// Per-unit box size (length along x, width along z, height along y)
    pub dimensions: Dimensions,

    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<AnchorPattern>,

    /// Height of the part's bottom face above the floor (cm)
    #[serde(default)]
    pub elevation: f64,
}

impl Part {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        kind: PartKind,
        dimensions: Dimensions,
    ) -> Self {
        Part {
            id: id.into(),
            name: name.into(),
            category,
            kind,
            dimensions,
            quantity: 1,
            anchor: None,
            elevation: 0.0,
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn anchored(mut self, pattern: AnchorPattern) -> Self {
        self.anchor = Some(pattern);
        self
    }

    pub fn raised(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn unit_volume_cm3(&self) -> f64 {
        self.dimensions.volume_cm3()
    }

    /// Vertical center of an instance resting at this part's elevation.
    pub fn resting_center_y(&self) -> f64 {
        self.elevation + self.dimensions.height / 2.0
    }

    /// Concrete instance `index` of this part.
    pub fn instance(&self, index: u32, position: Vec3, rotation: Vec3) -> PositionedPart {
        PositionedPart {
            id: format!("{}-{}", self.id, index),
            source_id: self.id.clone(),
            name: self.name.clone(),
            category: self.category,
            kind: self.kind.clone(),
            dimensions: self.dimensions,
            position,
            rotation,
        }
    }
}

/// One concrete, placed instance of a part.
///
/// Rotation is in radians about each local axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedPart {
    pub id: String,
    pub source_id: String,
    pub name: String,
    pub category: Category,
    pub kind: PartKind,
    pub dimensions: Dimensions,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl PositionedPart {
    pub fn top_face(&self) -> f64 {
        self.position.y + self.dimensions.height / 2.0
    }

    pub fn bottom_face(&self) -> f64 {
        self.position.y - self.dimensions.height / 2.0
    }

    pub fn is_horizontal_surface(&self) -> bool {
        matches!(self.kind, PartKind::HorizontalSurface)
    }
}

/// Total instance count across a parts list.
pub fn total_quantity(parts: &[Part]) -> u32 {
    parts.iter().map(|p| p.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> Part {
        Part::new(
            "shelf",
            "Shelf",
            Category::Storage,
            PartKind::HorizontalSurface,
            Dimensions::new(84.0, 29.4, 3.0),
        )
        .quantity(5)
        .anchored(AnchorPattern::DistributeY)
    }

    #[test]
    fn test_instance_ids() {
        let part = shelf();
        let instance = part.instance(3, Vec3::new(0.0, 90.0, 0.0), Vec3::ZERO);
        assert_eq!(instance.id, "shelf-3");
        assert_eq!(instance.source_id, "shelf");
        assert!(instance.is_horizontal_surface());
        assert!((instance.top_face() - 91.5).abs() < 1e-9);
        assert!((instance.bottom_face() - 88.5).abs() < 1e-9);
    }

    #[test]
    fn test_resting_center() {
        let seat = shelf().raised(40.0);
        assert!((seat.resting_center_y() - 41.5).abs() < 1e-9);
    }

    #[test]
    fn test_total_quantity() {
        let parts = vec![shelf(), shelf().quantity(2)];
        assert_eq!(total_quantity(&parts), 7);
    }

    #[test]
    fn test_anchor_serialization() {
        let json = serde_json::to_string(&AnchorPattern::Flush(Face::Rear)).unwrap();
        assert_eq!(json, r#"{"pattern":"flush","at":"rear"}"#);
        let json = serde_json::to_string(&AnchorPattern::Corners).unwrap();
        assert_eq!(json, r#"{"pattern":"corners"}"#);
    }
}
