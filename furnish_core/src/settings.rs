//! # Engine Settings
//!
//! Business tunables that are not physics: material prices, assembly time
//! bases and the behaviour of random partition strategies. Every field has
//! a default, so an empty TOML document is a valid configuration.
//!
//! ## Example
//!
//! ```rust
//! use furnish_core::settings::EngineSettings;
//!
//! let settings = EngineSettings::from_toml_str(r#"
//!     random_seed = 42
//!
//!     [material_rates]
//!     wood = 0.003
//! "#).unwrap();
//! assert_eq!(settings.random_seed, Some(42));
//! assert_eq!(settings.material_rates.wood, 0.003);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::materials::Material;
use crate::request::FurnitureType;

/// Probability that `random-shelves` divides any one interval
pub const DEFAULT_RANDOM_SHELF_PROBABILITY: f64 = 0.7;

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    /// Price per cm³ of finished part, by material
    pub material_rates: MaterialRates,

    /// Fixed assembly minutes per furniture type
    pub assembly_minutes: AssemblyMinutes,

    /// Chance each interval is divided under `random-shelves`
    pub random_shelf_probability: f64,

    /// Seed for reproducible random partitions; thread RNG when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            material_rates: MaterialRates::default(),
            assembly_minutes: AssemblyMinutes::default(),
            random_shelf_probability: DEFAULT_RANDOM_SHELF_PROBABILITY,
            random_seed: None,
        }
    }
}

impl EngineSettings {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> DesignResult<Self> {
        let settings: EngineSettings = toml::from_str(text).map_err(|e| DesignError::config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(text: &str) -> DesignResult<Self> {
        let settings: EngineSettings = serde_json::from_str(text).map_err(|e| DesignError::config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> DesignResult<()> {
        for material in Material::ALL {
            let rate = self.material_rates.rate_for(material);
            if !rate.is_finite() || rate < 0.0 {
                return Err(DesignError::config(format!(
                    "material_rates.{} must be a non-negative number, got {}",
                    material.code(),
                    rate
                )));
            }
        }
        for furniture_type in FurnitureType::ALL {
            let minutes = self.assembly_minutes.base_for(furniture_type);
            if !minutes.is_finite() || minutes < 0.0 {
                return Err(DesignError::config(format!(
                    "assembly_minutes for {} must be a non-negative number, got {}",
                    furniture_type.display_name(),
                    minutes
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.random_shelf_probability) {
            return Err(DesignError::config(format!(
                "random_shelf_probability must be within [0, 1], got {}",
                self.random_shelf_probability
            )));
        }
        Ok(())
    }
}

/// Cost per cm³ for each material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialRates {
    pub wood: f64,
    pub metal: f64,
    pub plastic: f64,
}

impl Default for MaterialRates {
    fn default() -> Self {
        MaterialRates {
            wood: Material::Wood.properties().cost_per_cm3,
            metal: Material::Metal.properties().cost_per_cm3,
            plastic: Material::Plastic.properties().cost_per_cm3,
        }
    }
}

impl MaterialRates {
    pub fn rate_for(&self, material: Material) -> f64 {
        match material {
            Material::Wood => self.wood,
            Material::Metal => self.metal,
            Material::Plastic => self.plastic,
        }
    }
}

/// Base assembly minutes before the per-part allowance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssemblyMinutes {
    pub table: f64,
    pub chair: f64,
    pub bookshelf: f64,
    pub desk: f64,
    pub bed_frame: f64,
}

impl Default for AssemblyMinutes {
    fn default() -> Self {
        AssemblyMinutes {
            table: 30.0,
            chair: 20.0,
            bookshelf: 45.0,
            desk: 40.0,
            bed_frame: 60.0,
        }
    }
}

impl AssemblyMinutes {
    pub fn base_for(&self, furniture_type: FurnitureType) -> f64 {
        match furniture_type {
            FurnitureType::Table => self.table,
            FurnitureType::Chair => self.chair,
            FurnitureType::Bookshelf => self.bookshelf,
            FurnitureType::Desk => self.desk,
            FurnitureType::BedFrame => self.bed_frame,
        }
    }
}
