//! Closed-form placements for each anchor pattern.
//!
//! Every function explodes one abstract part into exactly `quantity`
//! instances. Coordinates are part centers in the furniture frame
//! (origin at floor center, y up, front face at +z).

use std::f64::consts::FRAC_PI_2;

use crate::geometry::{Dimensions, Vec3};
use crate::parts::{ApronSide, Face, Part, PositionedPart};

/// Inset of corner legs from the envelope edges (cm)
pub const CORNER_MARGIN_CM: f64 = 2.0;

/// Clearance kept between distributed shelves and the floor / top (cm)
pub const SHELF_BOUND_CM: f64 = 10.0;

/// Vertical range shelves spread over; the clearance shrinks to a quarter
/// of the height on short units so the range never inverts.
fn shelf_bounds(envelope: &Dimensions) -> (f64, f64) {
    let bound = SHELF_BOUND_CM.min(envelope.height / 4.0);
    (bound, envelope.height - bound)
}

/// Axis a distribute pattern spreads along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// z of a part whose front face is flush with the envelope's front.
fn front_aligned_z(part: &Part, envelope: &Dimensions) -> f64 {
    envelope.width / 2.0 - part.dimensions.width / 2.0
}

/// Offsets of the four corner positions, inset from the envelope.
fn corner_offsets(part: &Part, envelope: &Dimensions) -> (f64, f64) {
    let dx = envelope.length / 2.0 - part.dimensions.length / 2.0 - CORNER_MARGIN_CM;
    let dz = envelope.width / 2.0 - part.dimensions.width / 2.0 - CORNER_MARGIN_CM;
    (dx, dz)
}

/// Four horizontal corners, cycled when quantity exceeds four.
pub fn corners(part: &Part, envelope: &Dimensions) -> Vec<PositionedPart> {
    let (dx, dz) = corner_offsets(part, envelope);
    let offsets = [(-dx, -dz), (dx, -dz), (dx, dz), (-dx, dz)];
    let y = part.resting_center_y();
    (0..part.quantity)
        .map(|i| {
            let (x, z) = offsets[i as usize % offsets.len()];
            part.instance(i, Vec3::new(x, y, z), Vec3::ZERO)
        })
        .collect()
}

/// Perimeter legs at x = 0, on the rear and front leg lines.
pub fn mid_span(part: &Part, envelope: &Dimensions) -> Vec<PositionedPart> {
    let (_, dz) = corner_offsets(part, envelope);
    let y = part.resting_center_y();
    (0..part.quantity)
        .map(|i| {
            let z = if i % 2 == 0 { -dz } else { dz };
            part.instance(i, Vec3::new(0.0, y, z), Vec3::ZERO)
        })
        .collect()
}

/// Even spacing along one axis, never flush with either bound.
///
/// `step = span / (n + 1)`, instance `i` at `start + step * (i + 1)`.
pub fn distribute(part: &Part, envelope: &Dimensions, axis: Axis) -> Vec<PositionedPart> {
    let (start, end) = match axis {
        Axis::X => (-envelope.length / 2.0, envelope.length / 2.0),
        Axis::Y => shelf_bounds(envelope),
        Axis::Z => (-envelope.width / 2.0, envelope.width / 2.0),
    };
    let step = (end - start) / f64::from(part.quantity + 1);
    let resting_y = part.resting_center_y();

    (0..part.quantity)
        .map(|i| {
            let along = start + step * f64::from(i + 1);
            let position = match axis {
                Axis::X => Vec3::new(along, resting_y, 0.0),
                Axis::Y => Vec3::new(0.0, along, front_aligned_z(part, envelope)),
                Axis::Z => Vec3::new(0.0, resting_y, along),
            };
            part.instance(i, position, Vec3::ZERO)
        })
        .collect()
}

/// Left/right pair, each flush against its outer face.
///
/// The pair straddles whichever horizontal axis the part is thin along:
/// side panels sit at ±x, long bed rails at ±z.
pub fn sides(part: &Part, envelope: &Dimensions) -> Vec<PositionedPart> {
    let y = part.resting_center_y();
    let thin_along_x = part.dimensions.length <= part.dimensions.width;
    (0..part.quantity)
        .map(|i| {
            let sign = if i % 2 == 0 { -1.0 } else { 1.0 };
            let position = if thin_along_x {
                Vec3::new(sign * (envelope.length / 2.0 - part.dimensions.length / 2.0), y, 0.0)
            } else {
                Vec3::new(0.0, y, sign * (envelope.width / 2.0 - part.dimensions.width / 2.0))
            };
            part.instance(i, position, Vec3::ZERO)
        })
        .collect()
}

/// Apron rails spanning between the legs, ends flush with the legs' inside faces.
///
/// Rail length is `envelope − 2 × (margin + leg)`, so the leg section is
/// recovered from it and the rail is centered on the leg line. Short rails
/// are modeled along x and turned 90° about y.
pub fn apron(part: &Part, envelope: &Dimensions, side: ApronSide) -> Vec<PositionedPart> {
    let y = part.resting_center_y();
    (0..part.quantity)
        .map(|i| {
            let sign = if i % 2 == 0 { -1.0 } else { 1.0 };
            let (position, rotation) = match side {
                ApronSide::Long => {
                    let leg = (envelope.length - part.dimensions.length) / 2.0 - CORNER_MARGIN_CM;
                    let z = envelope.width / 2.0 - CORNER_MARGIN_CM - leg / 2.0;
                    (Vec3::new(0.0, y, sign * z), Vec3::ZERO)
                }
                ApronSide::Short => {
                    let leg = (envelope.width - part.dimensions.length) / 2.0 - CORNER_MARGIN_CM;
                    let x = envelope.length / 2.0 - CORNER_MARGIN_CM - leg / 2.0;
                    (Vec3::new(sign * x, y, 0.0), Vec3::new(0.0, FRAC_PI_2, 0.0))
                }
            };
            part.instance(i, position, rotation)
        })
        .collect()
}

/// Named single parts, flush against one face of the envelope.
pub fn flush(part: &Part, envelope: &Dimensions, face: Face) -> Vec<PositionedPart> {
    let d = &part.dimensions;
    let resting_y = part.resting_center_y();
    let position = match face {
        Face::Top => Vec3::new(0.0, envelope.height - d.height / 2.0, front_aligned_z(part, envelope)),
        Face::Bottom => Vec3::new(0.0, resting_y, front_aligned_z(part, envelope)),
        Face::Front => Vec3::new(0.0, resting_y, envelope.width / 2.0 - d.width / 2.0),
        Face::Rear => Vec3::new(0.0, resting_y, -(envelope.width / 2.0 - d.width / 2.0)),
        Face::Start => Vec3::new(-(envelope.length / 2.0 - d.length / 2.0), resting_y, 0.0),
        Face::End => Vec3::new(envelope.length / 2.0 - d.length / 2.0, resting_y, 0.0),
    };
    in_place(part, position)
}

/// Parts without a pattern: centered, resting at their elevation.
pub fn fallback(part: &Part) -> Vec<PositionedPart> {
    in_place(part, Vec3::new(0.0, part.resting_center_y(), 0.0))
}

/// Every instance at the same position.
fn in_place(part: &Part, position: Vec3) -> Vec<PositionedPart> {
    (0..part.quantity)
        .map(|i| part.instance(i, position, Vec3::ZERO))
        .collect()
}
