//! # Materials Database
//!
//! Construction materials a design can be built from, with the physical,
//! pricing and appearance properties each pipeline stage needs.
//!
//! ## Example
//!
//! ```rust
//! use furnish_core::materials::Material;
//!
//! let props = Material::Wood.properties();
//! println!("E = {} kgf/cm², rate = {} per cm³", props.youngs_modulus_kgf_cm2, props.cost_per_cm3);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Construction material of a piece of furniture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Wood,
    Metal,
    Plastic,
}

/// Physical and presentation properties for a material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Young's modulus E in kgf/cm² (wood ≈ 11 GPa, steel ≈ 200 GPa)
    pub youngs_modulus_kgf_cm2: f64,

    /// Effective density in kg/cm³ (fabricated metal parts are hollow sections)
    pub density_kg_cm3: f64,

    /// Starting surface thickness before the deflection check (cm)
    pub base_surface_thickness_cm: f64,

    /// Default price per cm³ of finished part
    pub cost_per_cm3: f64,

    /// Surface finish for rendering
    pub finish: Finish,
}

/// PBR-style finish parameters handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Finish {
    pub roughness: f64,
    pub metalness: f64,
    pub opacity: f64,
}

/// Young's modulus of float glass (≈ 70 GPa) in kgf/cm².
///
/// Glass is never a request material; the constant exists for glass tops
/// quoted against the same deflection check.
pub const GLASS_YOUNGS_MODULUS_KGF_CM2: f64 = 700_000.0;

impl Material {
    /// All material variants for UI selection
    pub const ALL: [Material; 3] = [Material::Wood, Material::Metal, Material::Plastic];

    /// Get the request spelling ("wood", "metal", "plastic")
    pub fn code(&self) -> &'static str {
        match self {
            Material::Wood => "wood",
            Material::Metal => "metal",
            Material::Plastic => "plastic",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> DesignResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "wood" | "timber" | "wooden" => Ok(Material::Wood),
            "metal" | "steel" | "metallic" => Ok(Material::Metal),
            "plastic" | "polymer" => Ok(Material::Plastic),
            _ => Err(DesignError::unknown_variant(
                "material",
                s,
                &Material::ALL.map(|m| m.code()),
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Wood => "Wood",
            Material::Metal => "Metal",
            Material::Plastic => "Plastic",
        }
    }

    /// Reference properties for this material.
    pub fn properties(&self) -> MaterialProperties {
        match self {
            Material::Wood => MaterialProperties {
                youngs_modulus_kgf_cm2: 110_000.0,
                density_kg_cm3: 0.000_6,
                base_surface_thickness_cm: 2.5,
                cost_per_cm3: 0.002_5,
                finish: Finish {
                    roughness: 0.8,
                    metalness: 0.0,
                    opacity: 1.0,
                },
            },
            Material::Metal => MaterialProperties {
                youngs_modulus_kgf_cm2: 2_000_000.0,
                density_kg_cm3: 0.002,
                base_surface_thickness_cm: 1.5,
                cost_per_cm3: 0.006,
                finish: Finish {
                    roughness: 0.3,
                    metalness: 0.9,
                    opacity: 1.0,
                },
            },
            Material::Plastic => MaterialProperties {
                youngs_modulus_kgf_cm2: 25_000.0,
                density_kg_cm3: 0.000_95,
                base_surface_thickness_cm: 3.0,
                cost_per_cm3: 0.001_5,
                finish: Finish {
                    roughness: 0.4,
                    metalness: 0.0,
                    opacity: 0.95,
                },
            },
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(Material::from_str_flexible("Steel").unwrap(), Material::Metal);
        assert_eq!(Material::from_str_flexible(" wood ").unwrap(), Material::Wood);
        let err = Material::from_str_flexible("glass").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_VARIANT");
    }

    #[test]
    fn test_stiffness_ordering() {
        let wood = Material::Wood.properties().youngs_modulus_kgf_cm2;
        let metal = Material::Metal.properties().youngs_modulus_kgf_cm2;
        let plastic = Material::Plastic.properties().youngs_modulus_kgf_cm2;
        assert!(metal > GLASS_YOUNGS_MODULUS_KGF_CM2);
        assert!(GLASS_YOUNGS_MODULUS_KGF_CM2 > wood);
        assert!(wood > plastic);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Material::Plastic).unwrap(), "\"plastic\"");
        let m: Material = serde_json::from_str("\"metal\"").unwrap();
        assert_eq!(m, Material::Metal);
    }
}
