// src/config.rs

use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::pattern_lib::params::{
    DEFAULT_INSTANCES, DEFAULT_PATTERN_DIAMETER, DEFAULT_SECONDARY_PITCH, DEFAULT_SPIRAL_PITCH,
};
use crate::pattern_lib::{PatternError, PatternParameters, RadialMode};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] PatternError),
}

/// Values of the pattern dialog, lengths already in centimetres.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatternConfig {
    pub instances: u32,
    pub spiral_pitch: f64,
    pub secondary_spiral_pitch: f64,
    pub pattern_diameter: f64,
    pub radial_mode: RadialMode,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            instances: DEFAULT_INSTANCES,
            spiral_pitch: DEFAULT_SPIRAL_PITCH,
            secondary_spiral_pitch: DEFAULT_SECONDARY_PITCH,
            pattern_diameter: DEFAULT_PATTERN_DIAMETER,
            radial_mode: RadialMode::Collapsed,
        }
    }
}

impl PatternConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded pattern config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    pub fn to_parameters(&self) -> Result<PatternParameters, ConfigError> {
        let params = PatternParameters::new(
            self.instances,
            self.spiral_pitch,
            self.secondary_spiral_pitch,
            self.pattern_diameter,
        )?;
        Ok(params.with_radial_mode(self.radial_mode))
    }
}
