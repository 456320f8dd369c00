//! # Geometry Serializer
//!
//! Converts positioned parts into a renderer-agnostic scene: one box mesh
//! per part, a bounding box, camera framing and a two-light rig. Knows
//! nothing about abstract parts or engineering.
//!
//! Render axes are x right, y up, z toward the viewer. Box sizes are
//! `[x, y, z]` extents, so a part's length maps to x, height to y and width
//! (depth) to z.

use serde::{Deserialize, Serialize};

use crate::geometry::Vec3;
use crate::materials::Material;
use crate::parts::{Category, PositionedPart};

/// Camera distance as a multiple of the largest bounding extent
pub const CAMERA_DISTANCE_FACTOR: f64 = 1.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub units: String,
    pub bounding_box: BoundingBox,
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub meshes: Vec<Mesh>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.max.x - self.min.x, self.max.y - self.min.y, self.max.z - self.min.z)
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_degrees: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Light {
    Ambient { intensity: f64 },
    Directional { intensity: f64, position: Vec3 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshMaterial {
    pub color: String,
    pub roughness: f64,
    pub metalness: f64,
    pub opacity: f64,
    pub transparent: bool,
}

/// One box to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// `[x, y, z]` extents in render axes
    pub size: [f64; 3],
    pub position: Vec3,
    pub rotation: Vec3,
    pub material: MeshMaterial,
}

/// Axis-aligned half extents of a part after its rotation about y.
fn half_extents(part: &PositionedPart) -> Vec3 {
    let (sin, cos) = part.rotation.y.sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let d = &part.dimensions;
    Vec3::new(
        (d.length * cos + d.width * sin) / 2.0,
        d.height / 2.0,
        (d.length * sin + d.width * cos) / 2.0,
    )
}

fn bounding_box(parts: &[PositionedPart]) -> BoundingBox {
    if parts.is_empty() {
        return BoundingBox {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        };
    }
    let mut min = Vec3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    let mut max = Vec3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for part in parts {
        let half = half_extents(part);
        let p = part.position;
        min = Vec3::new(min.x.min(p.x - half.x), min.y.min(p.y - half.y), min.z.min(p.z - half.z));
        max = Vec3::new(max.x.max(p.x + half.x), max.y.max(p.y + half.y), max.z.max(p.z + half.z));
    }
    BoundingBox { min, max }
}

/// Build the render scene for a set of positioned parts.
pub fn build_scene(parts: &[PositionedPart], material: Material, color: &str) -> Scene {
    let finish = material.properties().finish;
    let bounds = bounding_box(parts);
    let size = bounds.size();
    let extent = size.x.max(size.y).max(size.z);
    let distance = extent * CAMERA_DISTANCE_FACTOR;
    let target = bounds.center();

    let meshes = parts
        .iter()
        .map(|part| Mesh {
            id: part.id.clone(),
            name: part.name.clone(),
            category: part.category,
            size: [part.dimensions.length, part.dimensions.height, part.dimensions.width],
            position: part.position,
            rotation: part.rotation,
            material: MeshMaterial {
                color: color.to_string(),
                roughness: finish.roughness,
                metalness: finish.metalness,
                opacity: finish.opacity,
                transparent: finish.opacity < 1.0,
            },
        })
        .collect();

    Scene {
        units: "cm".to_string(),
        bounding_box: bounds,
        camera: Camera {
            position: Vec3::new(target.x + distance * 0.7, target.y + distance * 0.5, target.z + distance * 0.7),
            target,
            fov_degrees: 45.0,
        },
        lights: vec![
            Light::Ambient { intensity: 0.6 },
            Light::Directional {
                intensity: 0.8,
                position: Vec3::new(extent, extent * 2.0, extent),
            },
        ],
        meshes,
    }
}
