//! Committed stroke history with undo/redo.

use crate::shapes::Stroke;

/// Ordered committed strokes plus a LIFO redo stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    /// Committed strokes, oldest first.
    strokes: Vec<Stroke>,
    /// Most recently undone stroke last.
    redo_stack: Vec<Stroke>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stroke and clear the redo stack.
    ///
    /// Degenerate strokes are rejected. Returns `true` if the stroke was committed.
    pub fn commit(&mut self, stroke: Stroke) -> bool {
        if stroke.is_degenerate() {
            return false;
        }
        self.strokes.push(stroke);
        self.redo_stack.clear();
        true
    }

    /// Move the last committed stroke onto the redo stack.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(stroke) = self.strokes.pop() {
            self.redo_stack.push(stroke);
            true
        } else {
            false
        }
    }

    /// Move the most recently undone stroke back onto the history.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(stroke) = self.redo_stack.pop() {
            self.strokes.push(stroke);
            true
        } else {
            false
        }
    }

    /// Empty both the history and the redo stack.
    /// Returns true if anything was removed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.strokes.is_empty() || !self.redo_stack.is_empty();
        self.strokes.clear();
        self.redo_stack.clear();
        changed
    }

    /// Drop the redo stack without touching committed strokes.
    pub fn discard_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Undone strokes; the last element is redone first.
    pub fn redo_stack(&self) -> &[Stroke] {
        &self.redo_stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Freehand, InkStyle, Line, Rectangle};
    use kurbo::Point;

    fn line(n: usize) -> Stroke {
        let x = n as f64 * 10.0;
        Stroke::Line(Line::new(
            Point::new(x, 0.0),
            Point::new(x, 20.0),
            InkStyle::default(),
        ))
    }

    #[test]
    fn test_undo_prefix_property() {
        for n in 0..8 {
            for m in 0..=n {
                let committed: Vec<Stroke> = (0..n).map(line).collect();
                let mut history = History::new();
                for stroke in &committed {
                    assert!(history.commit(stroke.clone()));
                }
                for _ in 0..m {
                    assert!(history.undo());
                }
                assert_eq!(history.strokes(), &committed[..n - m]);
            }
        }
    }

    #[test]
    fn test_undo_redo_undo_equals_single_undo() {
        let mut once = History::new();
        let mut round_trip = History::new();
        for i in 0..3 {
            once.commit(line(i));
            round_trip.commit(line(i));
        }

        once.undo();
        round_trip.undo();
        round_trip.redo();
        round_trip.undo();

        assert_eq!(once, round_trip);
    }

    #[test]
    fn test_redo_is_lifo() {
        let mut history = History::new();
        for i in 0..3 {
            history.commit(line(i));
        }
        history.undo();
        history.undo();
        assert_eq!(history.redo_stack(), &[line(2), line(1)]);

        history.redo();
        assert_eq!(history.strokes(), &[line(0), line(1)]);
        history.redo();
        assert_eq!(history.strokes(), &[line(0), line(1), line(2)]);
        assert!(!history.redo());
    }

    #[test]
    fn test_commit_after_undo_discards_redo() {
        let pen = Stroke::Pen(Freehand::from_points(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)],
            InkStyle::default(),
        ));
        let rect = Stroke::Rectangle(Rectangle::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            InkStyle::default(),
        ));
        let c = line(7);

        let mut history = History::new();
        history.commit(pen.clone());
        history.commit(rect.clone());
        assert_eq!(history.strokes(), &[pen.clone(), rect.clone()]);

        assert!(history.undo());
        assert_eq!(history.strokes(), &[pen.clone()]);
        assert_eq!(history.redo_stack(), &[rect]);

        assert!(history.commit(c.clone()));
        assert_eq!(history.strokes(), &[pen.clone(), c.clone()]);
        assert!(history.redo_stack().is_empty());

        assert!(!history.redo());
        assert_eq!(history.strokes(), &[pen, c]);
    }

    #[test]
    fn test_clear_empties_both() {
        let mut history = History::new();
        for i in 0..5 {
            history.commit(line(i));
        }
        history.undo();
        history.undo();
        assert_eq!(history.strokes().len(), 3);
        assert_eq!(history.redo_stack().len(), 2);

        assert!(history.clear());
        assert!(history.strokes().is_empty());
        assert!(history.redo_stack().is_empty());
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(!history.clear());
    }

    #[test]
    fn test_degenerate_commit_rejected() {
        let mut history = History::new();
        history.commit(line(0));
        history.undo();

        let dot = Stroke::Pen(Freehand::from_points(vec![Point::ZERO], InkStyle::default()));
        assert!(!history.commit(dot));
        assert!(history.strokes().is_empty());
        // A rejected commit leaves the redo stack alone.
        assert_eq!(history.redo_stack().len(), 1);
    }
}
