//! Initial engine settings and toolbar presets.

use crate::shapes::InkStyle;
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Swatches offered by the toolbar.
pub const PRESET_COLORS: [&str; 6] = [
    "#ffffff", "#ef4444", "#f97316", "#eab308", "#22c55e", "#3b82f6",
];

/// Pen widths offered by the toolbar, in logical pixels.
pub const PEN_SIZES: [f64; 3] = [3.0, 6.0, 12.0];

/// Engine configuration applied when a surface session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tool: ToolKind,
    pub color: String,
    pub width: f64,
    pub enabled: bool,
    pub spotlight_radius: f64,
}

impl EngineConfig {
    /// The style new strokes start with.
    pub fn style(&self) -> InkStyle {
        InkStyle::new(self.color.clone(), self.width)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tool: ToolKind::Pen,
            color: PRESET_COLORS[0].to_string(),
            width: PEN_SIZES[1],
            enabled: false,
            spotlight_radius: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.tool, ToolKind::Pen);
        assert_eq!(config.style(), InkStyle::new("#ffffff", 6.0));
        assert!(!config.enabled);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r##"{ "tool": "arrow", "color": "#22c55e" }"##).unwrap();
        assert_eq!(config.tool, ToolKind::Arrow);
        assert_eq!(config.color, "#22c55e");
        assert!((config.width - 6.0).abs() < f64::EPSILON);
        assert!((config.spotlight_radius - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_presets_parse_as_colors() {
        for color in PRESET_COLORS {
            assert!(InkStyle::new(color, 3.0).paint_color().is_some(), "{color}");
        }
    }
}
