//! Stroke definitions for the overlay.

mod arrow;
mod ellipse;
mod freehand;
mod line;
mod rectangle;
mod text;

pub use arrow::Arrow;
pub use ellipse::Ellipse;
pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::Text;

use crate::tools::ToolKind;
use kurbo::{BezPath, Point};
use peniko::Color;

/// Largest per-axis extent (in logical pixels) still treated as a click
/// rather than a drag.
pub const DEGENERATE_EPSILON: f64 = 0.5;

/// Color and thickness shared by every stroke variant.
#[derive(Debug, Clone, PartialEq)]
pub struct InkStyle {
    /// CSS color string, e.g. `"#ef4444"`.
    pub color: String,
    /// Stroke thickness in logical pixels (font-size multiplier for text).
    pub width: f64,
}

impl InkStyle {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    /// Parse the stored color string.
    ///
    /// Returns `None` when the string is not a valid CSS color.
    pub fn paint_color(&self) -> Option<Color> {
        match peniko::color::parse_color(&self.color) {
            Ok(color) => Some(color.to_alpha_color()),
            Err(err) => {
                log::debug!("Unparseable stroke color {:?}: {}", self.color, err);
                None
            }
        }
    }
}

impl Default for InkStyle {
    fn default() -> Self {
        Self::new("#ffffff", 6.0)
    }
}

/// Whether two points lie within [`DEGENERATE_EPSILON`] of each other on both axes.
pub fn within_epsilon(a: Point, b: Point) -> bool {
    (b.x - a.x).abs() <= DEGENERATE_EPSILON && (b.y - a.y).abs() <= DEGENERATE_EPSILON
}

/// Common trait for all stroke variants.
pub trait ShapeTrait {
    /// Get the path representation for rendering.
    ///
    /// Text has no outline path and returns an empty path.
    fn to_path(&self) -> BezPath;

    /// Get the style.
    fn style(&self) -> &InkStyle;

    /// Whether this stroke is a no-op click that must never be committed.
    fn is_degenerate(&self) -> bool;
}

/// A committed mark, tagged by the tool that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Stroke {
    Pen(Freehand),
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Arrow(Arrow),
    Text(Text),
}

impl Stroke {
    /// Build a two-point stroke for a shape tool.
    ///
    /// Returns `None` for `pen` and `text`, which are not defined by a drag.
    pub fn from_drag(tool: ToolKind, start: Point, end: Point, style: InkStyle) -> Option<Self> {
        match tool {
            ToolKind::Line => Some(Stroke::Line(Line::new(start, end, style))),
            ToolKind::Rectangle => Some(Stroke::Rectangle(Rectangle::new(start, end, style))),
            ToolKind::Ellipse => Some(Stroke::Ellipse(Ellipse::new(start, end, style))),
            ToolKind::Arrow => Some(Stroke::Arrow(Arrow::new(start, end, style))),
            ToolKind::Pen | ToolKind::Text => None,
        }
    }

    /// The tool this stroke was drawn with.
    pub fn tool(&self) -> ToolKind {
        match self {
            Stroke::Pen(_) => ToolKind::Pen,
            Stroke::Line(_) => ToolKind::Line,
            Stroke::Rectangle(_) => ToolKind::Rectangle,
            Stroke::Ellipse(_) => ToolKind::Ellipse,
            Stroke::Arrow(_) => ToolKind::Arrow,
            Stroke::Text(_) => ToolKind::Text,
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Stroke::Pen(s) => s.to_path(),
            Stroke::Line(s) => s.to_path(),
            Stroke::Rectangle(s) => s.to_path(),
            Stroke::Ellipse(s) => s.to_path(),
            Stroke::Arrow(s) => s.to_path(),
            Stroke::Text(s) => s.to_path(),
        }
    }

    pub fn style(&self) -> &InkStyle {
        match self {
            Stroke::Pen(s) => s.style(),
            Stroke::Line(s) => s.style(),
            Stroke::Rectangle(s) => s.style(),
            Stroke::Ellipse(s) => s.style(),
            Stroke::Arrow(s) => s.style(),
            Stroke::Text(s) => s.style(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        match self {
            Stroke::Pen(s) => s.is_degenerate(),
            Stroke::Line(s) => s.is_degenerate(),
            Stroke::Rectangle(s) => s.is_degenerate(),
            Stroke::Ellipse(s) => s.is_degenerate(),
            Stroke::Arrow(s) => s.is_degenerate(),
            Stroke::Text(s) => s.is_degenerate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_epsilon() {
        let origin = Point::new(5.0, 5.0);
        assert!(within_epsilon(origin, Point::new(5.5, 4.5)));
        assert!(!within_epsilon(origin, Point::new(5.6, 5.0)));
        assert!(!within_epsilon(origin, Point::new(5.0, 4.0)));
    }

    #[test]
    fn test_from_drag_shape_tools() {
        let style = InkStyle::default();
        let start = Point::new(0.0, 0.0);
        let end = Point::new(10.0, 10.0);
        for tool in [ToolKind::Line, ToolKind::Rectangle, ToolKind::Ellipse, ToolKind::Arrow] {
            let stroke = Stroke::from_drag(tool, start, end, style.clone()).unwrap();
            assert_eq!(stroke.tool(), tool);
            assert!(!stroke.is_degenerate());
        }
        assert!(Stroke::from_drag(ToolKind::Pen, start, end, style.clone()).is_none());
        assert!(Stroke::from_drag(ToolKind::Text, start, end, style).is_none());
    }

    #[test]
    fn test_paint_color() {
        let red = InkStyle::new("#ef4444", 3.0).paint_color().unwrap();
        let rgba = red.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0xef, 0x44, 0x44, 255));

        assert!(InkStyle::new("not-a-color", 3.0).paint_color().is_none());
    }
}
