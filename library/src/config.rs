//! Board configuration, read from TOML.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::BoardError;
use crate::model::port::DEFAULT_MAX_PORTS;

/// What happens to incident edges when a node is deleted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeDeletion {
    /// Leave incident edges in place. They keep pointing at the removed
    /// node id until deleted explicitly.
    #[default]
    KeepEdges,
    /// Remove every incident edge before removing the node.
    Cascade,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    /// Scale change per unit of wheel `delta_y`, applied with a negative sign.
    pub wheel_sensitivity: f32,
    /// Percentage of the viewport used as centring margin per unit of zoom.
    pub centering_margin_percent: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 2.0,
            wheel_sensitivity: 0.005,
            centering_margin_percent: 50.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PortConfig {
    pub max_per_side: usize,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            max_per_side: DEFAULT_MAX_PORTS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GraphConfig {
    pub node_deletion: NodeDeletion,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub zoom: ZoomConfig,
    pub ports: PortConfig,
    pub graph: GraphConfig,
}

impl BoardConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, BoardError> {
        let config: BoardConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, BoardError> {
        let toml_str = fs::read_to_string(path)?;
        Self::from_toml_str(&toml_str)
    }

    /// Load from `path`, falling back to defaults if the file is missing or
    /// invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load board config from {}, using defaults: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        let zoom = &self.zoom;
        if !(zoom.min_scale > 0.0) {
            return Err(BoardError::config(format!(
                "zoom.min_scale must be positive, got {}",
                zoom.min_scale
            )));
        }
        if !(zoom.min_scale <= zoom.max_scale) {
            return Err(BoardError::config(format!(
                "zoom.min_scale ({}) exceeds zoom.max_scale ({})",
                zoom.min_scale, zoom.max_scale
            )));
        }
        if !zoom.wheel_sensitivity.is_finite() {
            return Err(BoardError::config("zoom.wheel_sensitivity must be finite"));
        }
        if !zoom.centering_margin_percent.is_finite() {
            return Err(BoardError::config(
                "zoom.centering_margin_percent must be finite",
            ));
        }
        Ok(())
    }
}
