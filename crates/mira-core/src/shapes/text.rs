//! Text stroke.

use super::{InkStyle, ShapeTrait};
use kurbo::{BezPath, Point};

/// Font size is the stroke width times this factor.
pub const TEXT_SIZE_FACTOR: f64 = 3.0;

/// A line of text anchored at a point, vertically centered on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Text content.
    pub content: String,
    /// Anchor: left edge, vertical center.
    pub position: Point,
    /// Style properties (`width` scales the font).
    pub style: InkStyle,
}

impl Text {
    /// Create a new text stroke.
    pub fn new(content: impl Into<String>, position: Point, style: InkStyle) -> Self {
        Self {
            content: content.into(),
            position,
            style,
        }
    }

    /// Font size in logical pixels.
    pub fn font_size(&self) -> f64 {
        self.style.width * TEXT_SIZE_FACTOR
    }
}

impl ShapeTrait for Text {
    fn to_path(&self) -> BezPath {
        BezPath::new()
    }

    fn style(&self) -> &InkStyle {
        &self.style
    }

    fn is_degenerate(&self) -> bool {
        self.content.trim().is_empty()
    }
}
