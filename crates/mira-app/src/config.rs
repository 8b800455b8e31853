//! Host configuration file.

use crate::error::AppError;
use mira_core::{EngineConfig, Viewport};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overlay size in logical pixels.
    pub width: f64,
    pub height: f64,
    /// Device pixel ratio.
    pub scale_factor: f64,
    /// Font file for text strokes. The bundled font is used without one.
    pub font: Option<PathBuf>,
    pub engine: EngineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            scale_factor: 1.0,
            font: None,
            engine: EngineConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height, self.scale_factor)
    }
}
