//! # Field Configuration
//!
//! Everything a field computation reads besides the agents and the ball:
//! model parameters, pitch geometry and grid resolution.
//!
//! ## Usage
//! ```rust
//! use pf_core::engine::config::{FieldConfig, ModelParams};
//!
//! let config = FieldConfig::default();
//! let quick = FieldConfig { params: ModelParams::quick_reactions(), ..FieldConfig::default() };
//! assert!(quick.validate().is_ok());
//! ```

mod model_params;

pub use model_params::ModelParams;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::model_constants::field;
use crate::engine::pitch::PitchGeometry;
use crate::error::{require_positive, Result};

/// Model parameters + pitch geometry + grid resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub params: ModelParams,
    pub pitch: PitchGeometry,
    /// Grid step in meters
    pub resolution: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            params: ModelParams::default(),
            pitch: PitchGeometry::standard(),
            resolution: field::DEFAULT_RESOLUTION_M,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        self.pitch.validate()?;
        require_positive("resolution", self.resolution)?;
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a `.json` file, otherwise parse as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path.extension().and_then(|ext| ext.to_str()) == Some("json");
        let config = if is_json { Self::from_json(&content)? } else { Self::from_yaml(&content)? };
        config.validate()?;
        Ok(config)
    }
}
