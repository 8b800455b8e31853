//! Mira Render Library
//!
//! CPU raster backend for the Mira overlay. Implements the core `Surface`
//! boundary on a tiny-skia pixmap, rasterizes text with ab_glyph and exports
//! snapshots as PNG.

mod glyphs;
mod pixmap;
mod renderer;

pub use glyphs::{default_font, load_font};
pub use pixmap::PixmapSurface;
pub use renderer::{RenderError, RenderResult};
