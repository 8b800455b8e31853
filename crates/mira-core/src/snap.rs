//! Geometric constraints applied while dragging a shape with the modifier held.

use crate::tools::ToolKind;
use kurbo::{Point, Vec2};

/// Angle snap increment in degrees.
pub const ANGLE_SNAP_INCREMENT: f64 = 45.0;

/// Snap an angle to the nearest increment.
/// Returns the snapped angle in degrees (0-360).
pub fn snap_angle(angle_degrees: f64, increment: f64) -> f64 {
    let snapped = (angle_degrees / increment).round() * increment;
    // Normalize to 0-360
    if snapped < 0.0 {
        snapped + 360.0
    } else if snapped >= 360.0 {
        snapped - 360.0
    } else {
        snapped
    }
}

/// Snap the direction of `end - start` to the nearest multiple of 45°,
/// keeping the distance from `start`.
pub fn constrain_angle(start: Point, end: Point) -> Point {
    let delta = end - start;
    let distance = delta.hypot();

    // Zero-length vectors have no direction to snap.
    if distance < f64::EPSILON {
        return end;
    }

    let snapped = snap_angle(delta.atan2().to_degrees(), ANGLE_SNAP_INCREMENT);
    start + Vec2::from_angle(snapped.to_radians()) * distance
}

/// Grow the smaller axis of `end - start` to match the larger one, keeping each
/// axis's sign. A zero delta counts as positive.
pub fn constrain_square(start: Point, end: Point) -> Point {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let size = dx.abs().max(dy.abs());
    Point::new(start.x + size * dx.signum(), start.y + size * dy.signum())
}

/// Constrain `end` for the given tool when `active` (the modifier is held).
///
/// `pen` and `text` are never constrained.
pub fn apply_constraint(start: Point, end: Point, tool: ToolKind, active: bool) -> Point {
    if !active {
        return end;
    }
    match tool {
        ToolKind::Line | ToolKind::Arrow => constrain_angle(start, end),
        ToolKind::Rectangle | ToolKind::Ellipse => constrain_square(start, end),
        ToolKind::Pen | ToolKind::Text => end,
    }
}
