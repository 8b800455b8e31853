//! Rectangle outline stroke.

use super::{InkStyle, ShapeTrait, within_epsilon};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};

/// An axis-aligned rectangle outline spanned by two opposite corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Corner where the drag started.
    pub start: Point,
    /// Opposite corner.
    pub end: Point,
    /// Style properties.
    pub style: InkStyle,
}

impl Rectangle {
    /// Create a rectangle from two corner points.
    pub fn new(start: Point, end: Point, style: InkStyle) -> Self {
        Self { start, end, style }
    }

    /// Get the rectangle as a kurbo Rect with non-negative width and height.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}

impl ShapeTrait for Rectangle {
    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn style(&self) -> &InkStyle {
        &self.style
    }

    fn is_degenerate(&self) -> bool {
        within_epsilon(self.start, self.end)
    }
}
