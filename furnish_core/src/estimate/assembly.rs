//! Assembly time and step-by-step instructions.

use crate::request::FurnitureType;
use crate::settings::AssemblyMinutes;
use crate::structural::StructuralReport;

/// Minutes allowed per positioned part
pub const MINUTES_PER_PART: f64 = 2.0;

/// Base minutes for the type plus a per-part allowance.
pub fn estimate_assembly_minutes(furniture_type: FurnitureType, positioned_count: usize, base: &AssemblyMinutes) -> f64 {
    base.base_for(furniture_type) + MINUTES_PER_PART * positioned_count as f64
}

fn checklist(furniture_type: FurnitureType) -> &'static [&'static str] {
    match furniture_type {
        FurnitureType::Table => &[
            "Lay the table top face down on a padded surface",
            "Attach the apron rails to the legs, if present",
            "Fix each leg to the underside of the top at the marked corners",
            "Fit any mid-span legs to the front and rear rails",
            "Turn the table upright and check it sits level",
        ],
        FurnitureType::Chair => &[
            "Attach the four legs to the underside of the seat",
            "Fix the backrest to the rear edge of the seat",
            "Mount the armrests on both sides, if present",
            "Stand the chair upright and tighten every joint",
        ],
        FurnitureType::Bookshelf => &[
            "Join the bottom panel between the two side panels",
            "Fit the shelves into the side panels from the bottom up",
            "Insert the vertical dividers into their compartments",
            "Close the unit with the top panel",
            "Nail or screw the back panel to square the carcass",
            "Stand the unit upright and anchor it to the wall",
        ],
        FurnitureType::Desk => &[
            "Lay the desk top face down on a padded surface",
            "Fix each leg to the underside of the top at the marked corners",
            "Attach the modesty panel between the rear legs",
            "Hang the drawer box under the front edge",
            "Turn the desk upright and check the drawer runs freely",
        ],
        FurnitureType::BedFrame => &[
            "Screw the legs to the headboard and footboard corners",
            "Connect the side rails between headboard and footboard",
            "Fit the center beam, if present",
            "Lay the slats across the rails at even spacing",
            "Check the frame is square before loading the mattress",
        ],
    }
}

/// Per-type checklist, with structural notes first when two people are needed.
pub fn assembly_instructions(furniture_type: FurnitureType, report: &StructuralReport) -> Vec<String> {
    let mut steps = Vec::new();
    if report.two_person_handling {
        steps.push(format!(
            "Two-person assembly advised: about {:.0} kg",
            report.estimated_weight_kg
        ));
        steps.extend(report.warnings.iter().map(|w| format!("Note: {}", w)));
    }
    steps.extend(checklist(furniture_type).iter().map(|s| s.to_string()));
    steps
}
