//! Mira Core Library
//!
//! Platform-agnostic drawing engine for the Mira screen annotation overlay:
//! stroke history, tool gestures, replay onto an abstract surface and the
//! notification vocabulary shared with the toolbar.

pub mod config;
pub mod engine;
pub mod events;
pub mod history;
pub mod input;
pub mod render;
pub mod shapes;
pub mod snap;
pub mod spotlight;
pub mod surface;
pub mod tools;

pub use config::{EngineConfig, PEN_SIZES, PRESET_COLORS};
pub use engine::DrawingEngine;
pub use events::{EventError, Notification};
pub use history::History;
pub use input::{Modifiers, PointerEvent, TextKey};
pub use render::{paint_ink_segment, paint_spotlight, paint_stroke, render};
pub use shapes::{InkStyle, Stroke};
pub use snap::{apply_constraint, constrain_angle, constrain_square};
pub use spotlight::Spotlight;
pub use surface::{Paint, Surface, Viewport};
pub use tools::{GestureFeedback, TextEntry, TextEntryResult, ToolKind, ToolManager};
