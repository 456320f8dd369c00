//! Volume-based material costing.
//!
//! Each bill-of-materials line costs `unit volume × rate × quantity`,
//! rounded to the cent. The total is the rounded sum of the rounded lines,
//! so a breakdown always adds up to its own total.

use serde::{Deserialize, Serialize};

use crate::materials::Material;
use crate::parts::Part;
use crate::settings::MaterialRates;
use crate::units::round_to_cents;

/// One costed line of the bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub part_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_volume_cm3: f64,
    pub cost: f64,
    /// Share of the total, 0-100
    pub percentage: f64,
}

/// Per-part costs and their total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material: Material,
    /// Rate applied, per cm³
    pub rate_per_cm3: f64,
    pub items: Vec<CostLine>,
    pub total: f64,
}

impl CostBreakdown {
    /// Sum of the line costs, to the cent.
    pub fn line_total(&self) -> f64 {
        round_to_cents(self.items.iter().map(|line| line.cost).sum())
    }
}

pub fn calculate_cost_breakdown(parts: &[Part], material: Material, rates: &MaterialRates) -> CostBreakdown {
    let rate = rates.rate_for(material);
    let mut items: Vec<CostLine> = parts
        .iter()
        .map(|part| {
            let unit_volume_cm3 = part.unit_volume_cm3();
            CostLine {
                part_id: part.id.clone(),
                name: part.name.clone(),
                quantity: part.quantity,
                unit_volume_cm3,
                cost: round_to_cents(unit_volume_cm3 * rate * f64::from(part.quantity)),
                percentage: 0.0,
            }
        })
        .collect();

    let total = round_to_cents(items.iter().map(|line| line.cost).sum());
    if total > 0.0 {
        for line in &mut items {
            line.percentage = (line.cost / total * 1000.0).round() / 10.0;
        }
    }

    CostBreakdown {
        material,
        rate_per_cm3: rate,
        items,
        total,
    }
}

pub fn calculate_total_cost(parts: &[Part], material: Material, rates: &MaterialRates) -> f64 {
    calculate_cost_breakdown(parts, material, rates).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Dimensions;
    use crate::parts::{Category, PartKind};

    fn parts() -> Vec<Part> {
        vec![
            Part::new("top", "Top", Category::Surface, PartKind::HorizontalSurface, Dimensions::new(120.0, 60.0, 2.5)),
            Part::new("leg", "Leg", Category::Support, PartKind::SupportLeg, Dimensions::new(4.0, 4.0, 72.5)).quantity(4),
        ]
    }

    #[test]
    fn test_wood_table_cost() {
        let rates = MaterialRates::default();
        let breakdown = calculate_cost_breakdown(&parts(), Material::Wood, &rates);
        // top 18000 cm³, legs 4 × 1160 cm³, at 0.0025 per cm³
        assert!((breakdown.items[0].cost - 45.0).abs() < 1e-9);
        assert!((breakdown.items[1].cost - 11.6).abs() < 1e-9);
        assert!((breakdown.total - 56.6).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_matches_total() {
        let rates = MaterialRates::default();
        for material in Material::ALL {
            let breakdown = calculate_cost_breakdown(&parts(), material, &rates);
            assert_eq!(breakdown.line_total(), calculate_total_cost(&parts(), material, &rates));
        }
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let breakdown = calculate_cost_breakdown(&parts(), Material::Metal, &MaterialRates::default());
        let sum: f64 = breakdown.items.iter().map(|l| l.percentage).sum();
        assert!((sum - 100.0).abs() < 0.2);
    }

    #[test]
    fn test_free_material_has_zero_percentages() {
        let rates = MaterialRates {
            plastic: 0.0,
            ..MaterialRates::default()
        };
        let breakdown = calculate_cost_breakdown(&parts(), Material::Plastic, &rates);
        assert_eq!(breakdown.total, 0.0);
        assert!(breakdown.items.iter().all(|l| l.percentage == 0.0));
    }
}
