//! The raster drawing target the engine paints onto.

use kurbo::{Affine, BezPath, Point, Rect, Shape as KurboShape, Size};
use peniko::Color;

/// Logical size of the overlay plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Display size in logical pixels.
    pub logical_size: Size,
    /// Device pixels per logical pixel.
    pub scale_factor: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, scale_factor: f64) -> Self {
        Self {
            logical_size: Size::new(width, height),
            scale_factor,
        }
    }

    /// Backing raster size in device pixels (truncated).
    pub fn physical_size(&self) -> (u32, u32) {
        let to_px = |logical: f64| (logical * self.scale_factor).max(0.0).floor() as u32;
        (to_px(self.logical_size.width), to_px(self.logical_size.height))
    }

    /// Transform from logical to device pixels.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor)
    }
}

/// Stroke paint: round caps and joins are implied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub width: f64,
}

/// A 2D immediate-mode drawing context.
///
/// All coordinates are logical pixels; implementations apply the transform
/// set by the last [`Surface::configure`].
pub trait Surface {
    /// Resize the backing raster to `logical_size * scale_factor`, clear it and
    /// reset the drawing transform to scale by the device pixel ratio.
    fn configure(&mut self, viewport: Viewport);

    /// Clear the entire surface to transparent.
    fn clear(&mut self);

    /// Stroke an open or closed path.
    fn stroke_path(&mut self, path: &BezPath, paint: &Paint);

    /// Stroke an axis-aligned rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, paint: &Paint) {
        self.stroke_path(&rect.to_path(0.1), paint);
    }

    /// Stroke an ellipse outline.
    fn stroke_ellipse(&mut self, ellipse: kurbo::Ellipse, paint: &Paint) {
        self.stroke_path(&ellipse.to_path(0.1), paint);
    }

    /// Fill a single line of text whose vertical center sits on `anchor.y`,
    /// starting at `anchor.x`.
    fn fill_text(&mut self, text: &str, anchor: Point, font_size: f64, color: Color);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_size_uses_scale_factor() {
        let viewport = Viewport::new(800.0, 600.0, 2.0);
        assert_eq!(viewport.physical_size(), (1600, 1200));

        let fractional = Viewport::new(101.0, 51.0, 1.5);
        assert_eq!(fractional.physical_size(), (151, 76));
    }

    #[test]
    fn test_transform_scales_logical_points() {
        let viewport = Viewport::new(100.0, 100.0, 2.0);
        assert_eq!(viewport.transform() * Point::new(3.0, 4.0), Point::new(6.0, 8.0));
    }
}
