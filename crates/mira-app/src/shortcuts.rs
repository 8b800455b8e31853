//! Global shortcut registry.

use mira_core::Modifiers;
use serde::{Deserialize, Serialize};

/// What a global shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortcutAction {
    ToggleOverlay,
    Clear,
    Undo,
    Redo,
    ToggleSpotlight,
    ToggleDrawing,
}

/// A global shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub meta: bool,
    pub shift: bool,
    pub action: ShortcutAction,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, action: ShortcutAction, description: &'static str) -> Self {
        Self {
            key,
            meta: true,
            shift: true,
            action,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Meta+Shift+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.meta {
            parts.push("Meta");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.meta == modifiers.meta
            && self.shift == modifiers.shift
            && !modifiers.ctrl
            && !modifiers.alt
    }
}

/// Registry of all global shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("X", ShortcutAction::ToggleOverlay, "Show or hide the overlay"),
            Shortcut::new("C", ShortcutAction::Clear, "Clear the drawing"),
            Shortcut::new("Z", ShortcutAction::Undo, "Undo"),
            Shortcut::new("Y", ShortcutAction::Redo, "Redo"),
            Shortcut::new("S", ShortcutAction::ToggleSpotlight, "Toggle spotlight"),
            Shortcut::new("D", ShortcutAction::ToggleDrawing, "Toggle drawing"),
        ]
    }

    /// Find the action bound to `key` with `modifiers`.
    pub fn lookup(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        Self::all()
            .into_iter()
            .find(|s| s.matches(key, modifiers))
            .map(|s| s.action)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Global Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
