//! Freehand pen stroke.

use super::{InkStyle, ShapeTrait};
use kurbo::{BezPath, Point};

/// A freehand drawing (series of points rendered as an open polyline).
#[derive(Debug, Clone, PartialEq)]
pub struct Freehand {
    /// Points in the freehand path.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: InkStyle,
}

impl Freehand {
    /// Create from existing points.
    pub fn from_points(points: Vec<Point>, style: InkStyle) -> Self {
        Self { points, style }
    }
}

impl ShapeTrait for Freehand {
    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();

        let Some((first, rest)) = self.points.split_first() else {
            return path;
        };

        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }

        path
    }

    fn style(&self) -> &InkStyle {
        &self.style
    }

    fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}
