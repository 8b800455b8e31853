//! Toolbar state and the relay that turns its actions into overlay
//! notifications.

use crate::shortcuts::ShortcutAction;
use mira_core::{EngineConfig, Notification, ToolKind};
use serde::{Deserialize, Serialize};

/// A button press on the toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ToolbarAction {
    ToggleOverlay,
    ToggleDrawing,
    ToggleSpotlight,
    SelectTool { tool: ToolKind },
    SelectColor { color: String },
    SelectSize { size: f64 },
    Undo,
    Redo,
    Clear,
}

/// What the toolbar currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Toolbar {
    pub overlay_visible: bool,
    pub drawing_enabled: bool,
    pub spotlight_enabled: bool,
    pub tool: ToolKind,
    pub color: String,
    pub size: f64,
}

impl Toolbar {
    /// Toolbar state matching a freshly configured overlay.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            overlay_visible: true,
            drawing_enabled: config.enabled,
            spotlight_enabled: false,
            tool: config.tool,
            color: config.color.clone(),
            size: config.width,
        }
    }

    /// Apply a button press and return the notifications to broadcast.
    ///
    /// Drawing and spotlight buttons are inert while the overlay is hidden.
    pub fn apply(&mut self, action: ToolbarAction) -> Vec<Notification> {
        match action {
            ToolbarAction::ToggleOverlay => self.set_overlay_visible(!self.overlay_visible),
            ToolbarAction::ToggleDrawing => {
                if !self.overlay_visible {
                    return Vec::new();
                }
                self.drawing_enabled = !self.drawing_enabled;
                vec![Notification::DrawingToggled {
                    enabled: self.drawing_enabled,
                }]
            }
            ToolbarAction::ToggleSpotlight => {
                if !self.overlay_visible {
                    return Vec::new();
                }
                self.spotlight_enabled = !self.spotlight_enabled;
                vec![Notification::SpotlightToggled {
                    enabled: self.spotlight_enabled,
                }]
            }
            ToolbarAction::SelectTool { tool } => {
                self.tool = tool;
                vec![Notification::ToolChanged { tool }]
            }
            ToolbarAction::SelectColor { color } => {
                self.color = color.clone();
                vec![Notification::ColorChanged { color }]
            }
            ToolbarAction::SelectSize { size } => {
                self.size = size;
                vec![Notification::SizeChanged { size }]
            }
            ToolbarAction::Undo => vec![Notification::ShortcutUndo],
            ToolbarAction::Redo => vec![Notification::ShortcutRedo],
            ToolbarAction::Clear => vec![Notification::ShortcutClear],
        }
    }

    /// Route a global shortcut. Toggles go through toolbar state; history
    /// shortcuts are forwarded as is.
    pub fn on_shortcut(&mut self, action: ShortcutAction) -> Vec<Notification> {
        match action {
            ShortcutAction::ToggleOverlay => self.apply(ToolbarAction::ToggleOverlay),
            ShortcutAction::ToggleDrawing => self.apply(ToolbarAction::ToggleDrawing),
            ShortcutAction::ToggleSpotlight => self.apply(ToolbarAction::ToggleSpotlight),
            ShortcutAction::Clear => vec![Notification::ShortcutClear],
            ShortcutAction::Undo => vec![Notification::ShortcutUndo],
            ShortcutAction::Redo => vec![Notification::ShortcutRedo],
        }
    }

    fn set_overlay_visible(&mut self, visible: bool) -> Vec<Notification> {
        self.overlay_visible = visible;
        log::info!("Overlay {}", if visible { "shown" } else { "hidden" });
        if !visible && self.drawing_enabled {
            self.drawing_enabled = false;
            return vec![Notification::DrawingToggled { enabled: false }];
        }
        Vec::new()
    }
}
