//! # Cost & Assembly Estimator
//!
//! Material cost per bill-of-materials line, assembly time and the
//! human-readable assembly checklist.

pub mod assembly;
pub mod cost;

pub use assembly::{assembly_instructions, estimate_assembly_minutes};
pub use cost::{calculate_cost_breakdown, calculate_total_cost, CostBreakdown, CostLine};
