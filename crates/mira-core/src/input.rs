//! Pointer and keyboard input delivered to the overlay surface.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Whether the geometric constraint modifier is held.
    pub fn constrains(&self) -> bool {
        self.shift
    }
}

/// Raw pointer event in surface-local logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point, modifiers: Modifiers },
    Up,
    /// Treated exactly like `Up`.
    Cancel,
}

/// Keyboard key routed to an open text entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextKey {
    Character(String),
    Backspace,
    Enter,
    Escape,
}

impl TextKey {
    /// Map a DOM-style key name to a text key.
    ///
    /// Single characters become [`TextKey::Character`]; other names that are
    /// not editing keys yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Backspace" => Some(TextKey::Backspace),
            "Enter" => Some(TextKey::Enter),
            "Escape" => Some(TextKey::Escape),
            other if other.chars().count() == 1 => Some(TextKey::Character(other.to_string())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_constrains() {
        assert!(Modifiers::SHIFT.constrains());
        assert!(!Modifiers::NONE.constrains());
        assert!(!Modifiers { ctrl: true, ..Modifiers::NONE }.constrains());
    }

    #[test]
    fn test_text_key_from_name() {
        assert_eq!(TextKey::from_name("Enter"), Some(TextKey::Enter));
        assert_eq!(TextKey::from_name("a"), Some(TextKey::Character("a".into())));
        assert_eq!(TextKey::from_name("é"), Some(TextKey::Character("é".into())));
        assert_eq!(TextKey::from_name("ArrowLeft"), None);
    }
}
