//! Ellipse outline stroke.

use super::{InkStyle, ShapeTrait, within_epsilon};
use kurbo::{BezPath, Point, Shape as KurboShape, Vec2};

/// An ellipse inscribed in the box spanned by two opposite corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    /// Corner where the drag started.
    pub start: Point,
    /// Opposite corner.
    pub end: Point,
    /// Style properties.
    pub style: InkStyle,
}

impl Ellipse {
    pub fn new(start: Point, end: Point, style: InkStyle) -> Self {
        Self { start, end, style }
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Half the absolute per-axis deltas.
    pub fn radii(&self) -> Vec2 {
        Vec2::new(
            (self.end.x - self.start.x).abs() / 2.0,
            (self.end.y - self.start.y).abs() / 2.0,
        )
    }

    /// Get as a kurbo Ellipse.
    pub fn as_ellipse(&self) -> kurbo::Ellipse {
        kurbo::Ellipse::new(self.center(), self.radii(), 0.0)
    }
}

impl ShapeTrait for Ellipse {
    fn to_path(&self) -> BezPath {
        self.as_ellipse().to_path(0.1)
    }

    fn style(&self) -> &InkStyle {
        &self.style
    }

    fn is_degenerate(&self) -> bool {
        within_epsilon(self.start, self.end)
    }
}
