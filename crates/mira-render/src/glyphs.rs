//! Single-line text rasterization into a coverage mask.

use crate::renderer::{RenderError, RenderResult};
use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use std::path::Path;
use tiny_skia::Mask;

const BUNDLED_FONT: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

/// DejaVu Sans, compiled into the crate so text strokes render without a
/// font file on disk.
pub fn default_font() -> Option<FontArc> {
    match FontArc::try_from_slice(BUNDLED_FONT) {
        Ok(font) => Some(font),
        Err(e) => {
            log::warn!("Bundled font unusable: {}", e);
            None
        }
    }
}

/// Load a TrueType/OpenType font from disk.
pub fn load_font(path: &Path) -> RenderResult<FontArc> {
    let data = std::fs::read(path)?;
    let font = FontArc::try_from_vec(data).map_err(|e| RenderError::Font(e.to_string()))?;
    log::info!("Loaded font {}", path.display());
    Ok(font)
}

/// Baseline y for text whose em box is vertically centered on `center_y`.
///
/// `descent` is negative below the baseline.
pub(crate) fn centered_baseline(center_y: f32, ascent: f32, descent: f32) -> f32 {
    center_y + (ascent + descent) / 2.0
}

/// Accumulate glyph coverage for `text` into `mask`.
///
/// `origin` is the left edge and vertical center in device pixels and
/// `size_px` the font size in device pixels. Overlapping glyphs keep the
/// strongest coverage.
pub(crate) fn rasterize_line(
    font: &FontArc,
    text: &str,
    origin: (f32, f32),
    size_px: f32,
    mask: &mut Mask,
) {
    let scale = PxScale::from(size_px);
    let scaled = font.as_scaled(scale);
    let baseline = centered_baseline(origin.1, scaled.ascent(), scaled.descent());

    let width = mask.width() as i32;
    let height = mask.height() as i32;
    let data = mask.data_mut();

    let mut caret = origin.0;
    let mut previous: Option<GlyphId> = None;
    for c in text.chars() {
        let id = font.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        previous = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|x, y, coverage| {
            let px = bounds.min.x as i32 + x as i32;
            let py = bounds.min.y as i32 + y as i32;
            if px < 0 || py < 0 || px >= width || py >= height {
                return;
            }
            let idx = (py * width + px) as usize;
            let value = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
            data[idx] = data[idx].max(value);
        });
    }
}
