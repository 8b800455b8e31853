//! Tool system: the pointer interaction state machine.

mod text_entry;

pub use text_entry::{TextEntry, TextEntryResult};

use crate::shapes::{Freehand, InkStyle, Stroke};
use crate::snap::apply_constraint;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Pen,
    Line,
    Rectangle,
    Ellipse,
    Arrow,
    Text,
}

impl ToolKind {
    /// Tools whose strokes are defined by a start/end drag.
    pub fn is_shape(self) -> bool {
        matches!(
            self,
            ToolKind::Line | ToolKind::Rectangle | ToolKind::Ellipse | ToolKind::Arrow
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pen => "pen",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Ellipse => "ellipse",
            ToolKind::Arrow => "arrow",
            ToolKind::Text => "text",
        }
    }
}

/// State of a pointer gesture.
///
/// Tool, color and width are captured at pointer-down and stay fixed for the
/// rest of the gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ToolState {
    /// Waiting for a pointer-down.
    #[default]
    Idle,
    /// Accumulating a freehand path.
    DrawingPen { points: Vec<Point>, style: InkStyle },
    /// Dragging out a shape preview.
    DraggingShape {
        tool: ToolKind,
        start: Point,
        end: Point,
        style: InkStyle,
    },
}

/// What the surface needs to show after a pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureFeedback {
    /// Nothing to repaint.
    None,
    /// Stroke one more segment of live ink directly onto the surface.
    Ink { from: Point, to: Point, style: InkStyle },
    /// Replay history with the current preview stroke.
    Preview,
}

/// Manages the current tool and its gesture state.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current state of the gesture.
    pub state: ToolState,
    /// Current style to apply to new strokes.
    pub current_style: InkStyle,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new(tool: ToolKind, style: InkStyle) -> Self {
        Self {
            current_tool: tool,
            state: ToolState::Idle,
            current_style: style,
        }
    }

    /// Set the current tool, abandoning any gesture in progress.
    ///
    /// Returns `true` if a gesture was abandoned.
    pub fn set_tool(&mut self, tool: ToolKind) -> bool {
        self.current_tool = tool;
        self.cancel()
    }

    /// Begin a gesture at the pointer-down position.
    ///
    /// Ignored for the text tool and while a gesture is already active.
    pub fn begin(&mut self, point: Point) -> GestureFeedback {
        if self.is_active() {
            return GestureFeedback::None;
        }

        let style = self.current_style.clone();
        match self.current_tool {
            ToolKind::Text => GestureFeedback::None,
            ToolKind::Pen => {
                self.state = ToolState::DrawingPen {
                    points: vec![point],
                    style,
                };
                GestureFeedback::None
            }
            tool => {
                self.state = ToolState::DraggingShape {
                    tool,
                    start: point,
                    end: point,
                    style,
                };
                GestureFeedback::Preview
            }
        }
    }

    /// Update the current gesture with a pointer-move position.
    pub fn update(&mut self, point: Point, constrain: bool) -> GestureFeedback {
        match &mut self.state {
            ToolState::Idle => GestureFeedback::None,
            ToolState::DrawingPen { points, style } => {
                let Some(&from) = points.last() else {
                    return GestureFeedback::None;
                };
                points.push(point);
                GestureFeedback::Ink {
                    from,
                    to: point,
                    style: style.clone(),
                }
            }
            ToolState::DraggingShape {
                tool, start, end, ..
            } => {
                *end = apply_constraint(*start, point, *tool, constrain);
                GestureFeedback::Preview
            }
        }
    }

    /// End the current gesture and return the stroke to commit, if any.
    ///
    /// Degenerate results (single-point pen paths, zero-extent shapes) are
    /// discarded. The state returns to idle either way.
    pub fn end(&mut self) -> Option<Stroke> {
        let stroke = match std::mem::take(&mut self.state) {
            ToolState::Idle => return None,
            ToolState::DrawingPen { points, style } => {
                Stroke::Pen(Freehand::from_points(points, style))
            }
            ToolState::DraggingShape {
                tool,
                start,
                end,
                style,
            } => Stroke::from_drag(tool, start, end, style)?,
        };

        if stroke.is_degenerate() {
            log::debug!("Discarding degenerate {} gesture", stroke.tool().name());
            None
        } else {
            Some(stroke)
        }
    }

    /// Abandon the current gesture without producing a stroke.
    ///
    /// Returns `true` if a gesture was active.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = ToolState::Idle;
        was_active
    }

    /// Check if a gesture is active.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, ToolState::Idle)
    }

    /// The live shape preview, while dragging a shape tool.
    pub fn preview_shape(&self) -> Option<Stroke> {
        match &self.state {
            ToolState::DraggingShape {
                tool,
                start,
                end,
                style,
            } => Stroke::from_drag(*tool, *start, *end, style.clone()),
            _ => None,
        }
    }
}
