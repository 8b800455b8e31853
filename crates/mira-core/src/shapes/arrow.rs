//! Arrow stroke.

use super::{InkStyle, ShapeTrait, within_epsilon};
use kurbo::{BezPath, Point, Vec2};
use std::f64::consts::FRAC_PI_6;

/// Shortest barb length in logical pixels.
const MIN_BARB_LENGTH: f64 = 10.0;

/// An arrow shape (shaft with two barbs at the end).
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    /// Start point.
    pub start: Point,
    /// End point (where the arrowhead points).
    pub end: Point,
    /// Style properties.
    pub style: InkStyle,
}

impl Arrow {
    /// Create a new arrow.
    pub fn new(start: Point, end: Point, style: InkStyle) -> Self {
        Self { start, end, style }
    }

    /// Barb length grows with the stroke width.
    pub fn barb_length(&self) -> f64 {
        (self.style.width * 3.0).max(MIN_BARB_LENGTH)
    }

    /// Outer endpoints of the two barbs, each rotated 30° off the shaft.
    pub fn barbs(&self) -> [Point; 2] {
        let angle = (self.end - self.start).atan2();
        let len = self.barb_length();
        [angle - FRAC_PI_6, angle + FRAC_PI_6].map(|a| self.end - Vec2::from_angle(a) * len)
    }
}

impl ShapeTrait for Arrow {
    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        for barb in self.barbs() {
            path.move_to(self.end);
            path.line_to(barb);
        }
        path
    }

    fn style(&self) -> &InkStyle {
        &self.style
    }

    fn is_degenerate(&self) -> bool {
        within_epsilon(self.start, self.end)
    }
}
