//! Straight line stroke.

use super::{InkStyle, ShapeTrait, within_epsilon};
use kurbo::{BezPath, Point};

/// A single straight segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties.
    pub style: InkStyle,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point, style: InkStyle) -> Self {
        Self { start, end, style }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl ShapeTrait for Line {
    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }

    fn style(&self) -> &InkStyle {
        &self.style
    }

    fn is_degenerate(&self) -> bool {
        within_epsilon(self.start, self.end)
    }
}
