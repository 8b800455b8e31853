//! Cursor spotlight ring shown on top of the drawing.

use kurbo::{Circle, Point};
use peniko::Color;

/// Spotlight state: toggled from the toolbar, follows the hovering cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Spotlight {
    pub enabled: bool,
    pub radius: f64,
    cursor: Option<Point>,
}

impl Spotlight {
    /// Ring stroke width in logical pixels.
    pub const RING_WIDTH: f64 = 3.0;

    pub fn new(radius: f64) -> Self {
        Self {
            enabled: false,
            radius,
            cursor: None,
        }
    }

    /// Ring color: white at 85% opacity.
    pub fn ring_color() -> Color {
        Color::from_rgba8(255, 255, 255, 217)
    }

    pub fn set_cursor(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// The ring to draw, if the spotlight should be visible.
    ///
    /// Only shown while drawing is enabled and the cursor position is known.
    pub fn ring(&self, drawing_enabled: bool) -> Option<Circle> {
        if !self.enabled || !drawing_enabled {
            return None;
        }
        self.cursor.map(|center| Circle::new(center, self.radius))
    }
}

impl Default for Spotlight {
    fn default() -> Self {
        Self::new(40.0)
    }
}
