//! Single-line text entry opened by a click with the text tool.

use crate::input::TextKey;
use crate::shapes::InkStyle;
use kurbo::Point;

/// Result of handling a key in a text entry.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEntryResult {
    /// Key was handled, entry stays open.
    Editing,
    /// Entry closed with non-empty, trimmed text to commit.
    Submit(String),
    /// Entry closed without committing anything.
    Cancel,
}

/// Pending text input anchored at the click point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    anchor: Point,
    style: InkStyle,
    buffer: String,
}

impl TextEntry {
    /// Open an entry at `anchor` using the style active at click time.
    pub fn new(anchor: Point, style: InkStyle) -> Self {
        Self {
            anchor,
            style,
            buffer: String::new(),
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn style(&self) -> &InkStyle {
        &self.style
    }

    /// Text typed so far, untrimmed.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: TextKey) -> TextEntryResult {
        match key {
            TextKey::Character(c) => {
                self.buffer.push_str(&c);
                TextEntryResult::Editing
            }
            TextKey::Backspace => {
                self.buffer.pop();
                TextEntryResult::Editing
            }
            TextKey::Enter => self.finish(),
            TextKey::Escape => TextEntryResult::Cancel,
        }
    }

    /// Close the entry as on focus loss: submit if there is text, else cancel.
    pub fn finish(&self) -> TextEntryResult {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            TextEntryResult::Cancel
        } else {
            TextEntryResult::Submit(trimmed.to_string())
        }
    }
}
