//! # Design Records
//!
//! The envelope a persistence layer stores a design in. The engine itself
//! never writes records anywhere; it only builds them.
//!
//! ## Structure
//!
//! ```text
//! DesignRecord
//! ├── id: Uuid (v4, assigned at creation)
//! ├── schema_version
//! ├── created: DateTime<Utc>
//! ├── request: FurnitureRequest (what was asked for)
//! └── design: Design (what was produced)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use furnish_core::design::generate_design;
//! use furnish_core::geometry::Dimensions;
//! use furnish_core::materials::Material;
//! use furnish_core::record::DesignRecord;
//! use furnish_core::request::{FurnitureRequest, FurnitureType};
//!
//! let request = FurnitureRequest::new(FurnitureType::Chair, Material::Wood, Dimensions::new(45.0, 45.0, 90.0));
//! let design = generate_design(&request).unwrap();
//! let record = DesignRecord::new(request, design);
//!
//! let json = serde_json::to_string_pretty(&record).unwrap();
//! assert!(json.contains(&record.id.to_string()));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::design::Design;
use crate::errors::{DesignError, DesignResult};
use crate::request::FurnitureRequest;

/// Current schema version for serialized records
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A design together with the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRecord {
    pub id: Uuid,

    /// Schema version (for migration compatibility)
    pub schema_version: String,

    pub created: DateTime<Utc>,

    pub request: FurnitureRequest,

    pub design: Design,
}

impl DesignRecord {
    /// Wrap a design under a fresh id, stamped now.
    pub fn new(request: FurnitureRequest, design: Design) -> Self {
        DesignRecord {
            id: Uuid::new_v4(),
            schema_version: SCHEMA_VERSION.to_string(),
            created: Utc::now(),
            request,
            design,
        }
    }

    /// Parse a record, refusing other schema versions.
    pub fn from_json(json: &str) -> DesignResult<Self> {
        let record: DesignRecord = serde_json::from_str(json).map_err(|e| DesignError::from_json(&e))?;
        if record.schema_version != SCHEMA_VERSION {
            return Err(DesignError::invalid_input(
                "schema_version",
                record.schema_version,
                format!("Only schema {} is supported", SCHEMA_VERSION),
            ));
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::generate_design;
    use crate::geometry::Dimensions;
    use crate::materials::Material;
    use crate::request::FurnitureType;

    fn record() -> DesignRecord {
        let request = FurnitureRequest::new(FurnitureType::Table, Material::Wood, Dimensions::new(120.0, 80.0, 75.0));
        let design = generate_design(&request).unwrap();
        DesignRecord::new(request, design)
    }

    #[test]
    fn test_record_creation() {
        let a = record();
        let b = record();
        assert_ne!(a.id, b.id);
        assert_eq!(a.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn test_record_roundtrip() {
        let original = record();
        let json = serde_json::to_string_pretty(&original).unwrap();
        let roundtrip = DesignRecord::from_json(&json).unwrap();
        assert_eq!(roundtrip.id, original.id);
        assert_eq!(roundtrip.created, original.created);
        assert_eq!(roundtrip.design.part_count(), original.design.part_count());
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let mut original = record();
        original.schema_version = "9.9.9".to_string();
        let json = serde_json::to_string(&original).unwrap();
        assert!(DesignRecord::from_json(&json).is_err());
    }
}
