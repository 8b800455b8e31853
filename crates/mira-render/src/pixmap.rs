//! [`Surface`] implementation backed by a `tiny_skia::Pixmap`.

use crate::glyphs::{default_font, rasterize_line};
use crate::renderer::{RenderError, RenderResult};
use ab_glyph::FontArc;
use kurbo::{BezPath, PathEl, Point, Rect, Shape as KurboShape};
use mira_core::surface::{Paint, Surface, Viewport};
use peniko::Color;
use std::fmt;
use std::path::Path;
use tiny_skia::{LineCap, LineJoin, Mask, PathBuilder, Pixmap, Transform};

/// A CPU raster surface.
///
/// Stays empty until configured with a non-zero viewport; drawing onto an
/// empty surface does nothing.
#[derive(Clone)]
pub struct PixmapSurface {
    pixmap: Option<Pixmap>,
    scale: f32,
    font: Option<FontArc>,
}

impl fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("size", &self.size())
            .field("scale", &self.scale)
            .field("has_font", &self.font.is_some())
            .finish()
    }
}

impl Default for PixmapSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PixmapSurface {
    /// Create an unconfigured surface that draws text with the bundled font.
    pub fn new() -> Self {
        Self {
            pixmap: None,
            scale: 1.0,
            font: default_font(),
        }
    }

    /// Create an unconfigured surface that draws text with `font`.
    pub fn with_font(font: FontArc) -> Self {
        Self {
            font: Some(font),
            ..Self::new()
        }
    }

    /// Size of the backing raster in device pixels.
    pub fn size(&self) -> (u32, u32) {
        self.pixmap
            .as_ref()
            .map_or((0, 0), |p| (p.width(), p.height()))
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    /// Straight-alpha RGBA of the device pixel at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// All pixels as straight-alpha RGBA8, row-major.
    pub fn to_rgba(&self) -> Vec<u8> {
        let Some(pixmap) = self.pixmap.as_ref() else {
            return Vec::new();
        };
        let mut rgba = Vec::with_capacity(pixmap.data().len());
        for px in pixmap.pixels() {
            let c = px.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        rgba
    }

    /// Encode the current pixels as a PNG image.
    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        let (width, height) = self.size();
        if width == 0 || height == 0 {
            return Err(RenderError::EmptySurface);
        }
        let rgba = self.to_rgba();

        let mut png_data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut png_data, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&rgba)?;
        }
        Ok(png_data)
    }

    /// Encode and write a PNG file.
    pub fn save_png(&self, path: &Path) -> RenderResult<()> {
        let data = self.encode_png()?;
        std::fs::write(path, &data)?;
        log::info!("Wrote {} ({} bytes)", path.display(), data.len());
        Ok(())
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn stroke_skia_path(&mut self, path: &tiny_skia::Path, paint: &Paint) {
        let transform = self.transform();
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let stroke = tiny_skia::Stroke {
            width: paint.width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        pixmap.stroke_path(path, &skia_paint(paint.color), &stroke, transform, None);
    }
}

impl Surface for PixmapSurface {
    fn configure(&mut self, viewport: Viewport) {
        let (width, height) = viewport.physical_size();
        self.scale = viewport.scale_factor as f32;
        self.pixmap = Pixmap::new(width, height);
        if self.pixmap.is_none() {
            log::warn!("Zero-sized viewport {}x{}, surface left empty", width, height);
        }
    }

    fn clear(&mut self) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(tiny_skia::Color::TRANSPARENT);
        }
    }

    fn stroke_path(&mut self, path: &BezPath, paint: &Paint) {
        if let Some(path) = to_skia_path(path) {
            self.stroke_skia_path(&path, paint);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, paint: &Paint) {
        match skia_rect(rect) {
            Some(bounds) => self.stroke_skia_path(&PathBuilder::from_rect(bounds), paint),
            // Flat rectangles still show as a line.
            None => self.stroke_path(&rect.to_path(0.1), paint),
        }
    }

    fn stroke_ellipse(&mut self, ellipse: kurbo::Ellipse, paint: &Paint) {
        let center = ellipse.center();
        let radii = ellipse.radii();
        let bounds = Rect::new(
            center.x - radii.x,
            center.y - radii.y,
            center.x + radii.x,
            center.y + radii.y,
        );
        if let Some(path) = skia_rect(bounds).and_then(PathBuilder::from_oval) {
            self.stroke_skia_path(&path, paint);
        }
    }

    fn fill_text(&mut self, text: &str, anchor: Point, font_size: f64, color: Color) {
        let Some(font) = self.font.as_ref() else {
            log::debug!("No font loaded, skipping text {:?}", text);
            return;
        };
        let scale = self.scale;
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let Some(mut mask) = Mask::new(pixmap.width(), pixmap.height()) else {
            return;
        };

        let origin = (anchor.x as f32 * scale, anchor.y as f32 * scale);
        rasterize_line(font, text, origin, font_size as f32 * scale, &mut mask);

        if let Some(area) =
            tiny_skia::Rect::from_xywh(0.0, 0.0, pixmap.width() as f32, pixmap.height() as f32)
        {
            pixmap.fill_rect(area, &skia_paint(color), Transform::identity(), Some(&mask));
        }
    }
}

fn skia_paint(color: Color) -> tiny_skia::Paint<'static> {
    let rgba = color.to_rgba8();
    let mut paint = tiny_skia::Paint::default();
    paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
    paint.anti_alias = true;
    paint
}

fn skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    let rect = rect.abs();
    tiny_skia::Rect::from_ltrb(rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32)
}

/// Convert a kurbo path to a tiny-skia path. Empty paths yield `None`.
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}
