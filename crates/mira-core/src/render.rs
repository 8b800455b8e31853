//! Replay of the stroke history onto a surface.

use crate::shapes::{InkStyle, ShapeTrait, Stroke};
use crate::spotlight::Spotlight;
use crate::surface::{Paint, Surface};
use kurbo::{BezPath, Circle, Point, Shape as KurboShape};
use peniko::Color;

/// Clear the surface, paint `strokes` oldest first, then `preview` on top.
///
/// The same inputs always issue the same drawing calls.
pub fn render<S: Surface + ?Sized>(surface: &mut S, strokes: &[Stroke], preview: Option<&Stroke>) {
    surface.clear();
    for stroke in strokes.iter().chain(preview) {
        paint_stroke(surface, stroke);
    }
}

/// Paint a single stroke.
pub fn paint_stroke<S: Surface + ?Sized>(surface: &mut S, stroke: &Stroke) {
    let Some(paint) = paint_for(stroke.style()) else {
        return;
    };

    match stroke {
        Stroke::Pen(freehand) => {
            if freehand.is_degenerate() {
                return;
            }
            surface.stroke_path(&freehand.to_path(), &paint);
        }
        Stroke::Line(line) => surface.stroke_path(&line.to_path(), &paint),
        Stroke::Rectangle(rect) => surface.stroke_rect(rect.as_rect(), &paint),
        Stroke::Ellipse(ellipse) => surface.stroke_ellipse(ellipse.as_ellipse(), &paint),
        Stroke::Arrow(arrow) => surface.stroke_path(&arrow.to_path(), &paint),
        Stroke::Text(text) => {
            surface.fill_text(&text.content, text.position, text.font_size(), paint.color)
        }
    }
}

/// Stroke one segment of live pen ink without clearing the surface.
pub fn paint_ink_segment<S: Surface + ?Sized>(
    surface: &mut S,
    from: Point,
    to: Point,
    style: &InkStyle,
) {
    let Some(paint) = paint_for(style) else {
        return;
    };
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    surface.stroke_path(&path, &paint);
}

/// Paint the spotlight ring.
pub fn paint_spotlight<S: Surface + ?Sized>(surface: &mut S, ring: Circle) {
    let paint = Paint {
        color: Spotlight::ring_color(),
        width: Spotlight::RING_WIDTH,
    };
    surface.stroke_path(&ring.to_path(0.1), &paint);
}

fn paint_for(style: &InkStyle) -> Option<Paint> {
    let color: Color = style.paint_color()?;
    Some(Paint {
        color,
        width: style.width,
    })
}
