//! A scripted overlay session: toolbar, shortcuts and pointer input driving
//! one drawing engine.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::script::ScriptStep;
use crate::shortcuts::ShortcutRegistry;
use crate::toolbar::Toolbar;
use kurbo::Point;
use mira_core::render::paint_spotlight;
use mira_core::surface::Surface;
use mira_core::{DrawingEngine, Modifiers, Notification, PointerEvent, TextKey, Viewport};
use mira_render::{PixmapSurface, RenderError};
use std::path::{Path, PathBuf};

pub struct Session {
    engine: DrawingEngine<PixmapSurface>,
    toolbar: Toolbar,
    out_dir: PathBuf,
    snapshots: Vec<PathBuf>,
}

impl Session {
    /// Mount `surface` on a new engine configured from `config`.
    pub fn new(config: &AppConfig, surface: PixmapSurface, out_dir: impl Into<PathBuf>) -> Self {
        let mut engine = DrawingEngine::new(&config.engine);
        engine.mount(surface, config.viewport());
        Self {
            engine,
            toolbar: Toolbar::from_config(&config.engine),
            out_dir: out_dir.into(),
            snapshots: Vec::new(),
        }
    }

    pub fn engine(&self) -> &DrawingEngine<PixmapSurface> {
        &self.engine
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    /// Snapshot files written so far.
    pub fn snapshots(&self) -> &[PathBuf] {
        &self.snapshots
    }

    pub fn run(&mut self, steps: impl IntoIterator<Item = ScriptStep>) -> Result<(), AppError> {
        for step in steps {
            self.step(step)?;
        }
        Ok(())
    }

    /// Execute one step. Only snapshot I/O can fail.
    pub fn step(&mut self, step: ScriptStep) -> Result<(), AppError> {
        log::trace!("{:?}", step);
        match step {
            ScriptStep::Emit { event, payload } => match Notification::from_event(&event, payload) {
                Ok(notification) => self.broadcast(vec![notification]),
                Err(e) => log::warn!("Dropping notification: {}", e),
            },
            ScriptStep::Toolbar(action) => {
                let sent = self.toolbar.apply(action);
                self.broadcast(sent);
            }
            ScriptStep::Shortcut { action } => {
                let sent = self.toolbar.on_shortcut(action);
                self.broadcast(sent);
            }
            ScriptStep::Chord {
                key,
                meta,
                shift,
                ctrl,
                alt,
            } => {
                let modifiers = Modifiers {
                    shift,
                    ctrl,
                    alt,
                    meta,
                };
                match ShortcutRegistry::lookup(&key, modifiers) {
                    Some(action) => {
                        let sent = self.toolbar.on_shortcut(action);
                        self.broadcast(sent);
                    }
                    None => log::debug!("No shortcut bound to {:?} {:?}", key, modifiers),
                }
            }
            ScriptStep::Down { x, y } => self.engine.handle_pointer(PointerEvent::Down {
                position: Point::new(x, y),
            }),
            ScriptStep::Move { x, y, shift } => self.engine.handle_pointer(PointerEvent::Move {
                position: Point::new(x, y),
                modifiers: Modifiers {
                    shift,
                    ..Modifiers::NONE
                },
            }),
            ScriptStep::Up => self.engine.handle_pointer(PointerEvent::Up),
            ScriptStep::Cancel => self.engine.handle_pointer(PointerEvent::Cancel),
            ScriptStep::Hover { x, y } => self.engine.hover(Point::new(x, y)),
            ScriptStep::Click { x, y } => {
                self.engine.click(Point::new(x, y));
            }
            ScriptStep::Key { key } => match TextKey::from_name(&key) {
                Some(key) => {
                    self.engine.text_key(key);
                }
                None => log::debug!("Ignoring key {:?}", key),
            },
            ScriptStep::Type { text } => {
                for c in text.chars() {
                    self.engine.text_key(TextKey::Character(c.to_string()));
                }
            }
            ScriptStep::Blur => {
                self.engine.blur_text_entry();
            }
            ScriptStep::Resize {
                width,
                height,
                scale,
            } => {
                let scale = scale
                    .or_else(|| self.engine.viewport().map(|v| v.scale_factor))
                    .unwrap_or(1.0);
                self.engine.resize(Viewport::new(width, height, scale));
            }
            ScriptStep::Snapshot { path } => {
                self.snapshot(&path)?;
            }
        }
        Ok(())
    }

    /// Deliver notifications to the overlay.
    pub fn broadcast(&mut self, notifications: Vec<Notification>) {
        for notification in notifications {
            log::debug!("-> {} {}", notification.name(), notification.payload());
            self.engine.handle_notification(notification);
        }
    }

    /// What the overlay currently shows: the drawing plus the spotlight
    /// ring, or nothing while hidden.
    pub fn compose(&self) -> Option<PixmapSurface> {
        let mut frame = self.engine.surface()?.clone();
        if !self.toolbar.overlay_visible {
            frame.clear();
        } else if let Some(ring) = self.engine.spotlight_ring() {
            paint_spotlight(&mut frame, ring);
        }
        Some(frame)
    }

    /// Write the composed overlay to `path` under the output directory.
    pub fn snapshot(&mut self, path: &Path) -> Result<PathBuf, AppError> {
        let frame = self.compose().ok_or(RenderError::EmptySurface)?;
        let target = self.out_dir.join(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|source| AppError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        frame.save_png(&target)?;
        self.snapshots.push(target.clone());
        Ok(target)
    }
}
