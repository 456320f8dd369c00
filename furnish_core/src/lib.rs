//! # furnish_core - Parametric Furniture Generation Engine
//!
//! `furnish_core` turns an abstract furniture request (type, material,
//! envelope, load, shelf and partition preferences) into a complete design:
//! a structurally sized bill of parts, every part instance positioned in 3D,
//! cost, assembly time, instructions and a structural report. All inputs
//! and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over value types, one fresh design per request
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Malformed input is a structured error; everything else is a warning
//! - **Injectable randomness**: Random partition strategies draw from a caller-supplied RNG
//!
//! ## Quick Start
//!
//! ```rust
//! use furnish_core::{generate_design, FurnitureRequest};
//!
//! let request = FurnitureRequest::from_json(r##"{
//!     "furnitureType": "bookshelf",
//!     "material": "wood",
//!     "dimensions": { "length": 90, "width": 30, "height": 180 },
//!     "materialColor": "#8B5A2B",
//!     "shelfCount": 5,
//!     "shelfModifiers": [{ "target": "top", "count": 2 }]
//! }"##).unwrap();
//!
//! let design = generate_design(&request).unwrap();
//! println!("{} parts, {:.2} total", design.positioned_parts.len(), design.total_cost);
//! ```
//!
//! ## Modules
//!
//! - [`request`] - Request parsing and boundary validation
//! - [`engineering`] - Load, leg and surface sizing
//! - [`generators`] - Per-type abstract parts lists
//! - [`layout`] - Anchor patterns and partition placement
//! - [`estimate`] - Cost breakdown, assembly time, instructions
//! - [`structural`] - Stability, weight and handling report
//! - [`scene`] - Renderer-agnostic scene description
//! - [`design`] - The end-to-end pipeline
//! - [`record`] - Persistence envelope for finished designs
//! - [`settings`] - Engine tunables (rates, assembly bases, randomness)
//! - [`errors`] - Structured error types

pub mod design;
pub mod engineering;
pub mod errors;
pub mod estimate;
pub mod generators;
pub mod geometry;
pub mod layout;
pub mod materials;
pub mod parts;
pub mod record;
pub mod request;
pub mod scene;
pub mod settings;
pub mod structural;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use design::{generate_design, generate_design_with, generate_design_with_rng, Design};
pub use errors::{DesignError, DesignResult};
pub use geometry::{Dimensions, Vec3};
pub use materials::Material;
pub use record::DesignRecord;
pub use request::{FurnitureRequest, FurnitureType};
pub use settings::EngineSettings;
