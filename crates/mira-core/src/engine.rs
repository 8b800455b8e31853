//! The drawing engine behind one overlay surface.

use crate::config::EngineConfig;
use crate::events::Notification;
use crate::history::History;
use crate::input::{PointerEvent, TextKey};
use crate::render::{paint_ink_segment, render};
use crate::shapes::{InkStyle, Stroke, Text};
use crate::spotlight::Spotlight;
use crate::surface::{Surface, Viewport};
use crate::tools::{GestureFeedback, TextEntry, TextEntryResult, ToolKind, ToolManager};
use kurbo::{Circle, Point};

/// Owns the stroke history, the gesture state and the surface it paints onto.
///
/// Every mutation that changes what should be visible ends in a full replay,
/// except live pen ink which is stroked segment by segment until release.
/// Without a mounted surface, painting is skipped but state still updates.
#[derive(Debug)]
pub struct DrawingEngine<S: Surface> {
    surface: Option<S>,
    viewport: Option<Viewport>,
    history: History,
    tools: ToolManager,
    enabled: bool,
    text_entry: Option<TextEntry>,
    spotlight: Spotlight,
}

impl<S: Surface> Default for DrawingEngine<S> {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl<S: Surface> DrawingEngine<S> {
    /// Create an unmounted engine with an empty history.
    ///
    /// An invalid configured width falls back to the default width.
    pub fn new(config: &EngineConfig) -> Self {
        let mut style = config.style();
        if !valid_width(style.width) {
            log::warn!("Ignoring invalid configured stroke width {}", style.width);
            style.width = EngineConfig::default().width;
        }
        Self {
            surface: None,
            viewport: None,
            history: History::new(),
            tools: ToolManager::new(config.tool, style),
            enabled: config.enabled,
            text_entry: None,
            spotlight: Spotlight::new(config.spotlight_radius),
        }
    }

    // --- Surface lifecycle ---

    /// Attach a surface, size it for `viewport` and replay history onto it.
    pub fn mount(&mut self, surface: S, viewport: Viewport) {
        self.surface = Some(surface);
        self.resize(viewport);
    }

    /// Resize the backing raster and replay committed history.
    ///
    /// A shape preview is not repainted; it comes back on the next move.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let (width, height) = viewport.physical_size();
        log::info!(
            "Configuring surface {}x{} px (scale {})",
            width,
            height,
            viewport.scale_factor
        );
        surface.configure(viewport);
        render(surface, self.history.strokes(), None);
    }

    /// Detach the surface, abandoning any gesture or text entry.
    ///
    /// Calling this again is a no-op that returns `None`.
    pub fn unmount(&mut self) -> Option<S> {
        let surface = self.surface.take()?;
        self.abandon_input();
        self.viewport = None;
        log::info!("Surface unmounted");
        Some(surface)
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Pointer input is only accepted while mounted and enabled.
    pub fn is_listening(&self) -> bool {
        self.enabled && self.is_mounted()
    }

    // --- Configuration ---

    /// Select a tool. Switching to a different tool abandons an active
    /// gesture or open text entry; selecting the current tool does nothing.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool == self.tools.current_tool {
            return;
        }
        self.text_entry = None;
        if self.tools.set_tool(tool) {
            log::debug!("Tool changed mid-gesture, gesture abandoned");
            self.replay();
        }
    }

    /// Color for strokes started from now on.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.tools.current_style.color = color.into();
    }

    /// Width for strokes started from now on. Non-positive or non-finite
    /// widths are ignored.
    pub fn set_width(&mut self, width: f64) {
        if !valid_width(width) {
            log::warn!("Ignoring invalid stroke width {}", width);
            return;
        }
        self.tools.current_style.width = width;
    }

    /// Turn drawing on or off. Turning it off abandons any gesture in
    /// progress without committing it.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled && self.abandon_input() {
            log::debug!("Drawing disabled mid-gesture, gesture abandoned");
            self.replay();
        }
    }

    pub fn set_spotlight(&mut self, enabled: bool) {
        self.spotlight.enabled = enabled;
    }

    /// Apply a notification from the toolbar or a global shortcut.
    pub fn handle_notification(&mut self, notification: Notification) {
        match notification {
            Notification::DrawingToggled { enabled } => self.set_enabled(enabled),
            Notification::ToolChanged { tool } => self.set_tool(tool),
            Notification::ColorChanged { color } => self.set_color(color),
            Notification::SizeChanged { size } => self.set_width(size),
            Notification::SpotlightToggled { enabled } => self.set_spotlight(enabled),
            Notification::ShortcutClear => {
                self.clear();
            }
            Notification::ShortcutUndo => {
                self.undo();
            }
            Notification::ShortcutRedo => {
                self.redo();
            }
        }
    }

    // --- History ---

    /// Append a stroke, clear the redo stack and replay.
    ///
    /// Degenerate strokes are discarded. Returns `true` if committed.
    pub fn commit(&mut self, stroke: Stroke) -> bool {
        let tool = stroke.tool();
        if !self.history.commit(stroke) {
            return false;
        }
        log::debug!(
            "Committed {} stroke ({} total)",
            tool.name(),
            self.history.strokes().len()
        );
        self.replay();
        true
    }

    /// Commit a text stroke. Blank text is a no-op.
    pub fn commit_text(&mut self, text: &str, x: f64, y: f64, color: &str, width: f64) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.commit(Stroke::Text(Text::new(
            trimmed,
            Point::new(x, y),
            InkStyle::new(color, width),
        )))
    }

    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        log::debug!("Undo ({} remaining)", self.history.strokes().len());
        self.replay();
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        log::debug!("Redo ({} total)", self.history.strokes().len());
        self.replay();
        true
    }

    /// Empty history and redo stack and drop any in-progress gesture.
    ///
    /// Returns `true` if any committed or undone stroke was removed.
    pub fn clear(&mut self) -> bool {
        let abandoned = self.tools.cancel();
        let changed = self.history.clear();
        if changed || abandoned {
            log::debug!("Cleared drawing");
            self.replay();
        }
        changed
    }

    // --- Input ---

    /// Drive the gesture state machine with a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let PointerEvent::Down { position } | PointerEvent::Move { position, .. } = event {
            self.spotlight.set_cursor(position);
        }
        if !self.is_listening() {
            return;
        }

        match event {
            PointerEvent::Down { position } => {
                let feedback = self.tools.begin(position);
                self.show(feedback);
            }
            PointerEvent::Move {
                position,
                modifiers,
            } => {
                let feedback = self.tools.update(position, modifiers.constrains());
                self.show(feedback);
            }
            PointerEvent::Up | PointerEvent::Cancel => self.finish_gesture(),
        }
    }

    /// Track the cursor for the spotlight without drawing.
    pub fn hover(&mut self, position: Point) {
        self.spotlight.set_cursor(position);
    }

    /// Handle a click. With the text tool this opens a text entry at
    /// `position`, closing any previous entry as if it lost focus.
    ///
    /// Returns `true` if an entry was opened.
    pub fn click(&mut self, position: Point) -> bool {
        if !self.is_listening() || self.tools.current_tool != ToolKind::Text {
            return false;
        }
        self.blur_text_entry();
        self.text_entry = Some(TextEntry::new(position, self.tools.current_style.clone()));
        true
    }

    /// Route a key to the open text entry. Returns `None` if no entry is open.
    pub fn text_key(&mut self, key: TextKey) -> Option<TextEntryResult> {
        let result = self.text_entry.as_mut()?.handle_key(key);
        if result != TextEntryResult::Editing {
            if let Some(entry) = self.text_entry.take() {
                self.close_text_entry(&entry, &result);
            }
        }
        Some(result)
    }

    /// Close the open text entry as on focus loss.
    pub fn blur_text_entry(&mut self) -> Option<TextEntryResult> {
        let entry = self.text_entry.take()?;
        let result = entry.finish();
        self.close_text_entry(&entry, &result);
        Some(result)
    }

    // --- Accessors ---

    /// Committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        self.history.strokes()
    }

    /// Undone strokes; the last one is redone first.
    pub fn redo_stack(&self) -> &[Stroke] {
        self.history.redo_stack()
    }

    pub fn tool(&self) -> ToolKind {
        self.tools.current_tool
    }

    pub fn style(&self) -> &InkStyle {
        &self.tools.current_style
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_drawing(&self) -> bool {
        self.tools.is_active()
    }

    /// The live shape preview, if a shape drag is in progress.
    pub fn preview(&self) -> Option<Stroke> {
        self.tools.preview_shape()
    }

    pub fn text_entry(&self) -> Option<&TextEntry> {
        self.text_entry.as_ref()
    }

    pub fn spotlight(&self) -> &Spotlight {
        &self.spotlight
    }

    /// The spotlight ring to composite above the surface, if visible.
    pub fn spotlight_ring(&self) -> Option<Circle> {
        self.spotlight.ring(self.enabled)
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    // --- Internals ---

    fn show(&mut self, feedback: GestureFeedback) {
        match feedback {
            GestureFeedback::None => {}
            GestureFeedback::Ink { from, to, style } => {
                if let Some(surface) = self.surface.as_mut() {
                    paint_ink_segment(surface, from, to, &style);
                }
            }
            GestureFeedback::Preview => self.replay(),
        }
    }

    fn finish_gesture(&mut self) {
        if !self.tools.is_active() {
            return;
        }
        if let Some(stroke) = self.tools.end() {
            let tool = stroke.tool();
            if self.history.commit(stroke) {
                log::debug!("Committed {} gesture", tool.name());
            }
        }
        self.history.discard_redo();
        self.replay();
    }

    fn close_text_entry(&mut self, entry: &TextEntry, result: &TextEntryResult) {
        if let TextEntryResult::Submit(text) = result {
            let anchor = entry.anchor();
            let style = entry.style();
            self.commit_text(text, anchor.x, anchor.y, &style.color, style.width);
        }
    }

    /// Drop the gesture and text entry. Returns `true` if a gesture was active.
    fn abandon_input(&mut self) -> bool {
        self.text_entry = None;
        self.tools.cancel()
    }

    fn replay(&mut self) {
        let preview = self.tools.preview_shape();
        if let Some(surface) = self.surface.as_mut() {
            render(surface, self.history.strokes(), preview.as_ref());
        }
    }
}

fn valid_width(width: f64) -> bool {
    width.is_finite() && width > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;
    use crate::surface::recording::{Op, RecordingSurface};

    fn engine_with(tool: ToolKind) -> DrawingEngine<RecordingSurface> {
        let config = EngineConfig {
            tool,
            enabled: true,
            color: "#ef4444".into(),
            ..EngineConfig::default()
        };
        let mut engine = DrawingEngine::new(&config);
        engine.mount(RecordingSurface::default(), Viewport::new(200.0, 100.0, 2.0));
        engine
    }

    fn ops(engine: &DrawingEngine<RecordingSurface>) -> &[Op] {
        &engine.surface().unwrap().ops
    }

    fn clears(engine: &DrawingEngine<RecordingSurface>) -> usize {
        engine.surface().unwrap().clears()
    }

    fn down(engine: &mut DrawingEngine<RecordingSurface>, x: f64, y: f64) {
        engine.handle_pointer(PointerEvent::Down { position: Point::new(x, y) });
    }

    fn drag(engine: &mut DrawingEngine<RecordingSurface>, x: f64, y: f64, modifiers: Modifiers) {
        engine.handle_pointer(PointerEvent::Move {
            position: Point::new(x, y),
            modifiers,
        });
    }

    fn up(engine: &mut DrawingEngine<RecordingSurface>) {
        engine.handle_pointer(PointerEvent::Up);
    }

    fn draw_shape(engine: &mut DrawingEngine<RecordingSurface>, tool: ToolKind, from: Point, to: Point) {
        engine.set_tool(tool);
        down(engine, from.x, from.y);
        drag(engine, to.x, to.y, Modifiers::NONE);
        up(engine);
    }

    #[test]
    fn test_mount_configures_and_replays() {
        let engine = engine_with(ToolKind::Pen);
        assert_eq!(
            ops(&engine),
            &[Op::Configure(Viewport::new(200.0, 100.0, 2.0)), Op::Clear]
        );
        assert!(engine.is_listening());
    }

    #[test]
    fn test_pen_ink_is_incremental_until_release() {
        let mut engine = engine_with(ToolKind::Pen);
        let before = clears(&engine);

        down(&mut engine, 0.0, 0.0);
        drag(&mut engine, 5.0, 5.0, Modifiers::NONE);
        drag(&mut engine, 10.0, 0.0, Modifiers::NONE);
        assert_eq!(clears(&engine), before, "live ink must not replay");
        assert_eq!(ops(&engine).len(), 2 + 2);

        up(&mut engine);
        assert_eq!(clears(&engine), before + 1);
        assert_eq!(engine.strokes().len(), 1);
        let Stroke::Pen(pen) = &engine.strokes()[0] else {
            panic!("expected pen stroke");
        };
        assert_eq!(pen.points.len(), 3);
        assert_eq!(pen.style, InkStyle::new("#ef4444", 6.0));

        let visible = engine.surface().unwrap().since_clear();
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_shape_drag_replays_with_preview() {
        let mut engine = engine_with(ToolKind::Rectangle);
        let before = clears(&engine);

        down(&mut engine, 10.0, 10.0);
        assert_eq!(clears(&engine), before + 1);
        assert!(engine.preview().is_some());

        drag(&mut engine, 40.0, 30.0, Modifiers::NONE);
        assert_eq!(clears(&engine), before + 2);
        let visible = engine.surface().unwrap().since_clear();
        assert!(matches!(visible.last(), Some(Op::Rect { .. })));

        up(&mut engine);
        assert!(engine.preview().is_none());
        assert_eq!(engine.strokes().len(), 1);
        assert_eq!(engine.surface().unwrap().since_clear().len(), 1);
    }

    #[test]
    fn test_history_scenario() {
        let mut engine = engine_with(ToolKind::Pen);

        down(&mut engine, 0.0, 0.0);
        drag(&mut engine, 1.0, 1.0, Modifiers::NONE);
        drag(&mut engine, 2.0, 0.0, Modifiers::NONE);
        up(&mut engine);
        let a = engine.strokes()[0].clone();

        draw_shape(&mut engine, ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = engine.strokes()[1].clone();
        assert_eq!(engine.strokes(), &[a.clone(), b.clone()]);

        assert!(engine.undo());
        assert_eq!(engine.strokes(), &[a.clone()]);
        assert_eq!(engine.redo_stack(), &[b]);

        draw_shape(&mut engine, ToolKind::Line, Point::new(0.0, 0.0), Point::new(20.0, 5.0));
        let c = engine.strokes()[1].clone();
        assert_eq!(engine.strokes(), &[a.clone(), c.clone()]);
        assert!(engine.redo_stack().is_empty());

        assert!(!engine.redo());
        assert_eq!(engine.strokes(), &[a, c]);
    }

    #[test]
    fn test_click_without_movement_commits_nothing() {
        let mut engine = engine_with(ToolKind::Ellipse);
        down(&mut engine, 5.0, 5.0);
        drag(&mut engine, 5.0, 5.0, Modifiers::NONE);
        up(&mut engine);

        assert!(engine.strokes().is_empty());
        assert!(!engine.is_drawing());
        assert!(engine.surface().unwrap().since_clear().is_empty());
    }

    #[test]
    fn test_discarded_gesture_still_clears_redo() {
        let mut engine = engine_with(ToolKind::Line);
        draw_shape(&mut engine, ToolKind::Line, Point::ZERO, Point::new(30.0, 0.0));
        engine.undo();
        assert_eq!(engine.redo_stack().len(), 1);

        down(&mut engine, 3.0, 3.0);
        up(&mut engine);
        assert!(engine.strokes().is_empty());
        assert!(engine.redo_stack().is_empty());
    }

    #[test]
    fn test_shift_drag_line_snaps_to_45_degrees() {
        let mut engine = engine_with(ToolKind::Line);
        down(&mut engine, 0.0, 0.0);
        drag(&mut engine, 10.0, 4.0, Modifiers::SHIFT);
        up(&mut engine);

        let Stroke::Line(line) = &engine.strokes()[0] else {
            panic!("expected line stroke");
        };
        let expected = (10.0f64 * 10.0 + 4.0 * 4.0).sqrt();
        assert!((line.length() - expected).abs() < 1e-9);
        let degrees = (line.end - line.start).atan2().to_degrees();
        assert!((degrees / 45.0 - (degrees / 45.0).round()).abs() < 1e-9);
    }

    #[test]
    fn test_clear_scenario() {
        let mut engine = engine_with(ToolKind::Line);
        for i in 0..5 {
            let x = i as f64 * 10.0;
            draw_shape(&mut engine, ToolKind::Line, Point::new(x, 0.0), Point::new(x, 50.0));
        }
        engine.undo();
        engine.undo();
        assert_eq!(engine.strokes().len(), 3);
        assert_eq!(engine.redo_stack().len(), 2);

        assert!(engine.clear());
        assert!(engine.strokes().is_empty());
        assert!(engine.redo_stack().is_empty());

        let before = clears(&engine);
        assert!(!engine.undo());
        assert!(!engine.redo());
        assert_eq!(clears(&engine), before, "no-ops must not replay");
    }

    #[test]
    fn test_clear_discards_active_gesture() {
        let mut engine = engine_with(ToolKind::Arrow);
        down(&mut engine, 0.0, 0.0);
        drag(&mut engine, 50.0, 50.0, Modifiers::NONE);

        engine.handle_notification(Notification::ShortcutClear);
        assert!(!engine.is_drawing());
        assert!(engine.surface().unwrap().since_clear().is_empty());

        up(&mut engine);
        assert!(engine.strokes().is_empty());
    }

    #[test]
    fn test_disable_mid_gesture_abandons_ink() {
        let mut engine = engine_with(ToolKind::Pen);
        down(&mut engine, 0.0, 0.0);
        drag(&mut engine, 20.0, 20.0, Modifiers::NONE);

        engine.handle_notification(Notification::DrawingToggled { enabled: false });
        assert!(!engine.is_drawing());
        assert!(engine.surface().unwrap().since_clear().is_empty());

        up(&mut engine);
        assert!(engine.strokes().is_empty());
    }

    #[test]
    fn test_tool_change_mid_drag_abandons_preview() {
        let mut engine = engine_with(ToolKind::Rectangle);
        down(&mut engine, 0.0, 0.0);
        drag(&mut engine, 50.0, 50.0, Modifiers::NONE);

        engine.handle_notification(Notification::ToolChanged { tool: ToolKind::Pen });
        assert!(engine.preview().is_none());
        assert!(engine.surface().unwrap().since_clear().is_empty());
        up(&mut engine);
        assert!(engine.strokes().is_empty());
    }

    #[test]
    fn test_reselecting_tool_keeps_gesture() {
        let mut engine = engine_with(ToolKind::Rectangle);
        down(&mut engine, 0.0, 0.0);
        drag(&mut engine, 50.0, 40.0, Modifiers::NONE);
        let clears_before = clears(&engine);

        engine.handle_notification(Notification::ToolChanged { tool: ToolKind::Rectangle });
        assert!(engine.preview().is_some());
        assert_eq!(clears(&engine), clears_before);
        up(&mut engine);
        assert!(matches!(engine.strokes(), [Stroke::Rectangle(_)]));
    }

    #[test]
    fn test_reselecting_text_tool_keeps_entry() {
        let mut engine = engine_with(ToolKind::Text);
        assert!(engine.click(Point::new(30.0, 40.0)));
        engine.text_key(TextKey::Character("a".into()));

        engine.set_tool(ToolKind::Text);
        assert!(engine.text_entry().is_some());
        engine.text_key(TextKey::Enter);
        assert_eq!(engine.strokes().len(), 1);

        assert!(engine.click(Point::new(10.0, 10.0)));
        engine.set_tool(ToolKind::Pen);
        assert!(engine.text_entry().is_none());
    }

    #[test]
    fn test_color_change_mid_gesture_keeps_gesture_style() {
        let mut engine = engine_with(ToolKind::Line);
        down(&mut engine, 0.0, 0.0);
        engine.handle_notification(Notification::ColorChanged { color: "#3b82f6".into() });
        engine.handle_notification(Notification::SizeChanged { size: 12.0 });
        drag(&mut engine, 40.0, 0.0, Modifiers::NONE);
        up(&mut engine);

        assert_eq!(engine.strokes()[0].style(), &InkStyle::new("#ef4444", 6.0));
        assert_eq!(engine.style(), &InkStyle::new("#3b82f6", 12.0));
    }

    #[test]
    fn test_pointer_ignored_when_disabled() {
        let mut engine = engine_with(ToolKind::Pen);
        engine.set_enabled(false);
        let before = ops(&engine).len();

        down(&mut engine, 0.0, 0.0);
        drag(&mut engine, 10.0, 10.0, Modifiers::NONE);
        up(&mut engine);

        assert!(engine.strokes().is_empty());
        assert_eq!(ops(&engine).len(), before);
    }

    #[test]
    fn test_notifications_before_mount() {
        let mut engine: DrawingEngine<RecordingSurface> = DrawingEngine::default();
        assert!(!engine.is_listening());

        engine.handle_notification(Notification::DrawingToggled { enabled: true });
        engine.handle_notification(Notification::ToolChanged { tool: ToolKind::Line });
        engine.handle_notification(Notification::ShortcutUndo);
        engine.handle_notification(Notification::ShortcutRedo);
        engine.handle_notification(Notification::ShortcutClear);
        engine.handle_pointer(PointerEvent::Down { position: Point::ZERO });
        assert!(!engine.is_drawing());

        assert!(engine.commit_text("early", 1.0, 2.0, "#ffffff", 3.0));
        assert_eq!(engine.strokes().len(), 1);

        engine.mount(RecordingSurface::default(), Viewport::new(10.0, 10.0, 1.0));
        assert!(engine.is_listening());
        assert!(matches!(
            engine.surface().unwrap().since_clear(),
            [Op::Text { .. }]
        ));
    }

    #[test]
    fn test_resize_replays_without_preview() {
        let mut engine = engine_with(ToolKind::Ellipse);
        draw_shape(&mut engine, ToolKind::Ellipse, Point::ZERO, Point::new(20.0, 20.0));
        down(&mut engine, 50.0, 50.0);
        drag(&mut engine, 70.0, 70.0, Modifiers::NONE);

        let viewport = Viewport::new(300.0, 150.0, 1.0);
        engine.resize(viewport);
        let all = ops(&engine);
        let configure = all
            .iter()
            .rposition(|op| op == &Op::Configure(viewport))
            .unwrap();
        assert_eq!(all[configure + 1], Op::Clear);
        assert_eq!(all.len(), configure + 3, "only the committed ellipse is replayed");
        assert_eq!(engine.viewport(), Some(viewport));
    }

    #[test]
    fn test_text_entry_commits_on_enter() {
        let mut engine = engine_with(ToolKind::Text);
        down(&mut engine, 30.0, 30.0);
        assert!(!engine.is_drawing(), "text tool ignores pointer-down");

        assert!(engine.click(Point::new(30.0, 40.0)));
        for c in " hi ".chars() {
            engine.text_key(TextKey::Character(c.to_string()));
        }
        assert_eq!(
            engine.text_key(TextKey::Enter),
            Some(TextEntryResult::Submit("hi".into()))
        );
        assert!(engine.text_entry().is_none());

        let Stroke::Text(text) = &engine.strokes()[0] else {
            panic!("expected text stroke");
        };
        assert_eq!(text.content, "hi");
        assert_eq!(text.position, Point::new(30.0, 40.0));
        assert!((text.font_size() - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_second_click_blurs_first_entry() {
        let mut engine = engine_with(ToolKind::Text);
        engine.click(Point::new(0.0, 0.0));
        engine.text_key(TextKey::Character("a".into()));
        engine.click(Point::new(50.0, 50.0));

        assert_eq!(engine.strokes().len(), 1);
        assert_eq!(engine.text_entry().unwrap().anchor(), Point::new(50.0, 50.0));

        assert_eq!(engine.blur_text_entry(), Some(TextEntryResult::Cancel));
        assert_eq!(engine.strokes().len(), 1);
        assert_eq!(engine.text_key(TextKey::Enter), None);
    }

    #[test]
    fn test_click_requires_text_tool() {
        let mut engine = engine_with(ToolKind::Pen);
        assert!(!engine.click(Point::new(5.0, 5.0)));
        assert!(engine.text_entry().is_none());
    }

    #[test]
    fn test_commit_text_blank_is_noop() {
        let mut engine = engine_with(ToolKind::Text);
        let before = ops(&engine).len();
        assert!(!engine.commit_text("   ", 1.0, 1.0, "#fff", 6.0));
        assert!(engine.strokes().is_empty());
        assert_eq!(ops(&engine).len(), before);
    }

    #[test]
    fn test_invalid_width_ignored() {
        let mut engine = engine_with(ToolKind::Pen);
        engine.set_width(0.0);
        engine.set_width(f64::NAN);
        engine.set_width(-3.0);
        assert!((engine.style().width - 6.0).abs() < f64::EPSILON);
        engine.set_width(12.0);
        assert!((engine.style().width - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_configured_width_falls_back() {
        for width in [0.0, -4.0, f64::INFINITY] {
            let config = EngineConfig {
                width,
                ..EngineConfig::default()
            };
            let engine: DrawingEngine<RecordingSurface> = DrawingEngine::new(&config);
            assert!((engine.style().width - 6.0).abs() < f64::EPSILON);
        }
        let config = EngineConfig {
            width: 2.0,
            ..EngineConfig::default()
        };
        let engine: DrawingEngine<RecordingSurface> = DrawingEngine::new(&config);
        assert!((engine.style().width - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unmount_is_idempotent() {
        let mut engine = engine_with(ToolKind::Pen);
        down(&mut engine, 0.0, 0.0);

        let surface = engine.unmount();
        assert!(surface.is_some());
        assert!(!engine.is_drawing());
        assert!(!engine.is_listening());
        assert!(engine.unmount().is_none());

        // History survives without a surface.
        assert!(!engine.undo());
    }

    #[test]
    fn test_spotlight_follows_pointer() {
        let mut engine = engine_with(ToolKind::Pen);
        engine.handle_notification(Notification::SpotlightToggled { enabled: true });
        assert!(engine.spotlight_ring().is_none());

        engine.hover(Point::new(12.0, 34.0));
        assert_eq!(engine.spotlight_ring().unwrap().center, Point::new(12.0, 34.0));

        drag(&mut engine, 50.0, 60.0, Modifiers::NONE);
        assert_eq!(engine.spotlight().cursor(), Some(Point::new(50.0, 60.0)));

        engine.set_enabled(false);
        assert!(engine.spotlight_ring().is_none());
    }
}
