//! Named notifications broadcast from the toolbar to the overlay surface.

use crate::tools::ToolKind;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

/// Errors turning a raw `(event, payload)` pair into a [`Notification`].
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Unknown event: {0}")]
    UnknownEvent(String),
    #[error("Invalid payload for {event}: {source}")]
    InvalidPayload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A configuration change or command delivered to the drawing engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    DrawingToggled { enabled: bool },
    ToolChanged { tool: ToolKind },
    ColorChanged { color: String },
    SizeChanged { size: f64 },
    SpotlightToggled { enabled: bool },
    ShortcutClear,
    ShortcutUndo,
    ShortcutRedo,
}

#[derive(Deserialize)]
struct EnabledPayload {
    enabled: bool,
}

#[derive(Deserialize)]
struct ToolPayload {
    tool: ToolKind,
}

#[derive(Deserialize)]
struct ColorPayload {
    color: String,
}

#[derive(Deserialize)]
struct SizePayload {
    size: f64,
}

fn parse<T: DeserializeOwned>(event: &'static str, payload: Value) -> Result<T, EventError> {
    serde_json::from_value(payload).map_err(|source| EventError::InvalidPayload { event, source })
}

impl Notification {
    pub const DRAWING_TOGGLED: &'static str = "drawing-toggled";
    pub const TOOL_CHANGED: &'static str = "tool-changed";
    pub const COLOR_CHANGED: &'static str = "color-changed";
    pub const SIZE_CHANGED: &'static str = "size-changed";
    pub const SPOTLIGHT_TOGGLED: &'static str = "spotlight-toggled";
    pub const SHORTCUT_CLEAR: &'static str = "shortcut-clear";
    pub const SHORTCUT_UNDO: &'static str = "shortcut-undo";
    pub const SHORTCUT_REDO: &'static str = "shortcut-redo";

    /// Decode a named event and its JSON payload.
    ///
    /// Payloads of the `shortcut-*` events are ignored.
    pub fn from_event(name: &str, payload: Value) -> Result<Self, EventError> {
        let notification = match name {
            Self::DRAWING_TOGGLED => Notification::DrawingToggled {
                enabled: parse::<EnabledPayload>(Self::DRAWING_TOGGLED, payload)?.enabled,
            },
            Self::TOOL_CHANGED => Notification::ToolChanged {
                tool: parse::<ToolPayload>(Self::TOOL_CHANGED, payload)?.tool,
            },
            Self::COLOR_CHANGED => Notification::ColorChanged {
                color: parse::<ColorPayload>(Self::COLOR_CHANGED, payload)?.color,
            },
            Self::SIZE_CHANGED => Notification::SizeChanged {
                size: parse::<SizePayload>(Self::SIZE_CHANGED, payload)?.size,
            },
            Self::SPOTLIGHT_TOGGLED => Notification::SpotlightToggled {
                enabled: parse::<EnabledPayload>(Self::SPOTLIGHT_TOGGLED, payload)?.enabled,
            },
            Self::SHORTCUT_CLEAR => Notification::ShortcutClear,
            Self::SHORTCUT_UNDO => Notification::ShortcutUndo,
            Self::SHORTCUT_REDO => Notification::ShortcutRedo,
            other => return Err(EventError::UnknownEvent(other.to_string())),
        };
        Ok(notification)
    }

    /// The event name this notification travels under.
    pub fn name(&self) -> &'static str {
        match self {
            Notification::DrawingToggled { .. } => Self::DRAWING_TOGGLED,
            Notification::ToolChanged { .. } => Self::TOOL_CHANGED,
            Notification::ColorChanged { .. } => Self::COLOR_CHANGED,
            Notification::SizeChanged { .. } => Self::SIZE_CHANGED,
            Notification::SpotlightToggled { .. } => Self::SPOTLIGHT_TOGGLED,
            Notification::ShortcutClear => Self::SHORTCUT_CLEAR,
            Notification::ShortcutUndo => Self::SHORTCUT_UNDO,
            Notification::ShortcutRedo => Self::SHORTCUT_REDO,
        }
    }

    /// The JSON payload this notification travels with.
    pub fn payload(&self) -> Value {
        match self {
            Notification::DrawingToggled { enabled } => json!({ "enabled": enabled }),
            Notification::ToolChanged { tool } => json!({ "tool": tool }),
            Notification::ColorChanged { color } => json!({ "color": color }),
            Notification::SizeChanged { size } => json!({ "size": size }),
            Notification::SpotlightToggled { enabled } => json!({ "enabled": enabled }),
            Notification::ShortcutClear | Notification::ShortcutUndo | Notification::ShortcutRedo => {
                Value::Null
            }
        }
    }
}
