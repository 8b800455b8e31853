//! Session scripts: one JSON step per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! {"step": "toolbar", "action": "toggle-drawing"}
//! {"step": "down", "x": 10, "y": 10}
//! {"step": "move", "x": 80, "y": 40, "shift": true}
//! {"step": "up"}
//! {"step": "snapshot", "path": "line.png"}
//! ```

use crate::error::AppError;
use crate::shortcuts::ShortcutAction;
use crate::toolbar::ToolbarAction;
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

/// One scripted host event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum ScriptStep {
    /// Raw bus notification, as the overlay would receive it.
    Emit {
        event: String,
        #[serde(default)]
        payload: Value,
    },
    /// Toolbar button press, relayed to the overlay.
    Toolbar(ToolbarAction),
    /// Global shortcut.
    Shortcut { action: ShortcutAction },
    /// Key press with modifiers, resolved through the shortcut registry.
    /// Chords that match no binding are ignored.
    Chord {
        key: String,
        #[serde(default)]
        meta: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
    },
    Down { x: f64, y: f64 },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        shift: bool,
    },
    Up,
    Cancel,
    /// Cursor hover without buttons.
    Hover { x: f64, y: f64 },
    /// Click, opening a text entry with the text tool.
    Click { x: f64, y: f64 },
    /// A single key routed to the open text entry (`"Enter"`, `"a"`, ...).
    Key { key: String },
    /// Type each character of `text` into the open text entry.
    Type { text: String },
    /// Text entry loses focus.
    Blur,
    Resize {
        width: f64,
        height: f64,
        #[serde(default)]
        scale: Option<f64>,
    },
    /// Write a PNG of the overlay to `path` (relative to the output dir).
    Snapshot { path: PathBuf },
}

/// Parse a script. Blank lines and lines starting with `#` are skipped.
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, AppError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| AppError::Script {
                line: idx + 1,
                source,
            })
        })
        .collect()
}
