//! # Furniture Requests
//!
//! The input contract: an abstract furniture request as produced by a
//! natural-language parser or a manual form. Everything here is validated
//! once at the boundary; the pipeline downstream assumes a valid request.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "furnitureType": "bookshelf",
//!   "material": "wood",
//!   "dimensions": { "length": 90, "width": 30, "height": 180 },
//!   "materialColor": "#8B5A2B",
//!   "shelfCount": 5,
//!   "shelfModifiers": [{ "target": "top", "count": 2 }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::geometry::Dimensions;
use crate::layout::rules::{PartitionConfig, PartitionStrategy, Ratio, ShelfModifier};
use crate::materials::Material;

/// Furniture archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureType {
    Table,
    Chair,
    Bookshelf,
    Desk,
    #[serde(rename = "bed frame", alias = "bed_frame", alias = "bedframe")]
    BedFrame,
}

impl FurnitureType {
    pub const ALL: [FurnitureType; 5] = [
        FurnitureType::Table,
        FurnitureType::Chair,
        FurnitureType::Bookshelf,
        FurnitureType::Desk,
        FurnitureType::BedFrame,
    ];

    /// Get the request spelling
    pub fn code(&self) -> &'static str {
        match self {
            FurnitureType::Table => "table",
            FurnitureType::Chair => "chair",
            FurnitureType::Bookshelf => "bookshelf",
            FurnitureType::Desk => "desk",
            FurnitureType::BedFrame => "bed frame",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> DesignResult<Self> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "table" | "dining table" | "coffee table" => Ok(FurnitureType::Table),
            "chair" | "stool" => Ok(FurnitureType::Chair),
            "bookshelf" | "bookcase" | "shelf" | "shelving unit" => Ok(FurnitureType::Bookshelf),
            "desk" | "writing desk" => Ok(FurnitureType::Desk),
            "bed frame" | "bedframe" | "bed" => Ok(FurnitureType::BedFrame),
            _ => Err(DesignError::unknown_variant(
                "furnitureType",
                s,
                &FurnitureType::ALL.map(|t| t.code()),
            )),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FurnitureType::Table => "Table",
            FurnitureType::Chair => "Chair",
            FurnitureType::Bookshelf => "Bookshelf",
            FurnitureType::Desk => "Desk",
            FurnitureType::BedFrame => "Bed Frame",
        }
    }
}

impl std::fmt::Display for FurnitureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A projected load as written by the caller: `700` or `"700kg"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectedLoad {
    Kilograms(f64),
    Text(String),
}

impl ProjectedLoad {
    /// Numeric value in kg, or `None` when unusable (≤ 0 or no digits).
    ///
    /// Text is coerced by keeping only its digits, so `"700kg"` is 700.
    pub fn kilograms(&self) -> Option<f64> {
        let value = match self {
            ProjectedLoad::Kilograms(kg) => *kg,
            ProjectedLoad::Text(text) => {
                let digits: String = text.chars().filter(char::is_ascii_digit).collect();
                digits.parse::<f64>().ok()?
            }
        };
        (value.is_finite() && value > 0.0).then_some(value)
    }
}

/// An abstract furniture request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FurnitureRequest {
    pub furniture_type: FurnitureType,
    pub material: Material,
    pub dimensions: Dimensions,
    pub material_color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected_load: Option<ProjectedLoad>,

    #[serde(default)]
    pub has_armrests: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_count: Option<u32>,

    #[serde(default)]
    pub partition_strategy: PartitionStrategy,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_ratio: Option<Ratio>,

    #[serde(default)]
    pub partition_count: u32,

    #[serde(default)]
    pub shelf_modifiers: Vec<ShelfModifier>,
}

/// Default finish when a caller has no colour preference.
pub const DEFAULT_COLOR: &str = "#8B5A2B";

/// Most shelves a bookshelf request may ask for.
pub const MAX_SHELF_COUNT: u32 = 20;

impl FurnitureRequest {
    /// Minimal request with defaults for every optional field.
    pub fn new(furniture_type: FurnitureType, material: Material, dimensions: Dimensions) -> Self {
        FurnitureRequest {
            furniture_type,
            material,
            dimensions,
            material_color: DEFAULT_COLOR.to_string(),
            projected_load: None,
            has_armrests: false,
            shelf_count: None,
            partition_strategy: PartitionStrategy::None,
            partition_ratio: None,
            partition_count: 0,
            shelf_modifiers: Vec::new(),
        }
    }

    /// Parse and validate a JSON request.
    pub fn from_json(json: &str) -> DesignResult<Self> {
        let request: FurnitureRequest = serde_json::from_str(json).map_err(|e| DesignError::from_json(&e))?;
        request.validate()?;
        Ok(request)
    }

    /// Validate fields serde cannot check on its own.
    pub fn validate(&self) -> DesignResult<()> {
        self.dimensions.validate_envelope()?;
        validate_color(&self.material_color)?;
        if let Some(count) = self.shelf_count {
            if count > MAX_SHELF_COUNT {
                return Err(DesignError::invalid_input(
                    "shelfCount",
                    count.to_string(),
                    format!("At most {} shelves are supported", MAX_SHELF_COUNT),
                ));
            }
        }
        Ok(())
    }

    /// Caller-supplied load in kg, if usable.
    pub fn projected_load_kg(&self) -> Option<f64> {
        self.projected_load.as_ref().and_then(ProjectedLoad::kilograms)
    }

    /// Partition settings carried onto a bookshelf's divider part.
    pub fn partition_config(&self) -> PartitionConfig {
        PartitionConfig {
            strategy: self.partition_strategy,
            ratio: self.partition_ratio.clone(),
            count: self.partition_count,
            modifiers: self.shelf_modifiers.clone(),
        }
    }
}

fn validate_color(color: &str) -> DesignResult<()> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(DesignError::invalid_input("materialColor", color, "Expected a #RRGGBB hex colour"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::rules::ShelfTarget;

    const BOOKSHELF: &str = r##"{
        "furnitureType": "bookshelf",
        "material": "wood",
        "dimensions": { "length": 90, "width": 30, "height": 180 },
        "materialColor": "#8B5A2B",
        "shelfCount": 5,
        "shelfModifiers": [{ "target": "top", "count": 2 }]
    }"##;

    #[test]
    fn test_parse_bookshelf_request() {
        let request = FurnitureRequest::from_json(BOOKSHELF).unwrap();
        assert_eq!(request.furniture_type, FurnitureType::Bookshelf);
        assert_eq!(request.shelf_count, Some(5));
        assert_eq!(request.partition_strategy, PartitionStrategy::None);
        assert_eq!(request.shelf_modifiers[0].target, ShelfTarget::Top);
        assert_eq!(request.shelf_modifiers[0].count, Some(2));
    }

    #[test]
    fn test_bed_frame_spelling() {
        let t: FurnitureType = serde_json::from_str("\"bed frame\"").unwrap();
        assert_eq!(t, FurnitureType::BedFrame);
        let t: FurnitureType = serde_json::from_str("\"bed_frame\"").unwrap();
        assert_eq!(t, FurnitureType::BedFrame);
        assert_eq!(FurnitureType::from_str_flexible("Bed-Frame").unwrap(), FurnitureType::BedFrame);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = BOOKSHELF.replace("\"bookshelf\"", "\"sofa\"");
        let err = FurnitureRequest::from_json(&json).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(err.to_string().contains("sofa"));
    }

    #[test]
    fn test_missing_dimension_rejected() {
        let json = BOOKSHELF.replace(", \"height\": 180", "");
        let err = FurnitureRequest::from_json(&json).unwrap_err();
        assert_eq!(err, DesignError::missing_field("height"));
    }

    #[test]
    fn test_out_of_range_dimension_rejected() {
        let json = BOOKSHELF.replace("\"height\": 180", "\"height\": 600");
        let err = FurnitureRequest::from_json(&json).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_bad_color_rejected() {
        let json = BOOKSHELF.replace("#8B5A2B", "brown");
        assert!(FurnitureRequest::from_json(&json).is_err());
    }

    #[test]
    fn test_projected_load_coercion() {
        assert_eq!(ProjectedLoad::Text("700kg".into()).kilograms(), Some(700.0));
        assert_eq!(ProjectedLoad::Kilograms(80.0).kilograms(), Some(80.0));
        assert_eq!(ProjectedLoad::Kilograms(0.0).kilograms(), None);
        assert_eq!(ProjectedLoad::Text("heavy".into()).kilograms(), None);

        let json = BOOKSHELF.replace("\"shelfCount\": 5", "\"projectedLoad\": \"45 kg\"");
        let request = FurnitureRequest::from_json(&json).unwrap();
        assert_eq!(request.projected_load_kg(), Some(45.0));
    }

    #[test]
    fn test_partition_config_carries_request_fields() {
        let mut request = FurnitureRequest::new(
            FurnitureType::Bookshelf,
            Material::Wood,
            Dimensions::new(90.0, 30.0, 180.0),
        );
        request.partition_strategy = PartitionStrategy::AllShelves;
        request.partition_ratio = Some(Ratio::parse("1:2").unwrap());
        request.partition_count = 3;
        let config = request.partition_config();
        assert_eq!(config.strategy, PartitionStrategy::AllShelves);
        assert_eq!(config.count, 3);
        assert!(config.is_active());
    }
}
