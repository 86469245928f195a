// src/pattern_lib/params.rs

use serde::{Deserialize, Serialize};
use crate::pattern_lib::error::PatternError;

pub const DEFAULT_INSTANCES: u32 = 40;
pub const DEFAULT_SPIRAL_PITCH: f64 = 0.1;
pub const DEFAULT_SECONDARY_PITCH: f64 = 0.0;
pub const DEFAULT_PATTERN_DIAMETER: f64 = 10.0;

/// How far each copy sits from the spiral axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadialMode {
    /// Every copy stays on the axis (x = z = 0). Matches the plugin's output.
    #[default]
    Collapsed,
    /// Copies sit on a circle of `diameter` around the axis.
    Helical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpiralMode {
    Single,
    Dual,
}

/// Validated input for one pattern build. Fields are fixed once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternParameters {
    instance_count: u32,
    primary_pitch: f64,
    secondary_pitch: f64,
    diameter: f64,
    radial_mode: RadialMode,
}

impl PatternParameters {
    pub fn new(
        instance_count: u32,
        primary_pitch: f64,
        secondary_pitch: f64,
        diameter: f64,
    ) -> Result<Self, PatternError> {
        if instance_count < 1 {
            return Err(PatternError::invalid("instance_count", "must be at least 1"));
        }
        if !primary_pitch.is_finite() || primary_pitch <= 0.0 {
            return Err(PatternError::invalid(
                "primary_pitch",
                format!("must be a positive length, got {}", primary_pitch),
            ));
        }
        if !secondary_pitch.is_finite() || secondary_pitch < 0.0 {
            return Err(PatternError::invalid(
                "secondary_pitch",
                format!("must be zero or a positive length, got {}", secondary_pitch),
            ));
        }
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(PatternError::invalid(
                "diameter",
                format!("must be a positive length, got {}", diameter),
            ));
        }

        Ok(Self {
            instance_count,
            primary_pitch,
            secondary_pitch,
            diameter,
            radial_mode: RadialMode::Collapsed,
        })
    }

    pub fn with_radial_mode(self, radial_mode: RadialMode) -> Self {
        Self { radial_mode, ..self }
    }

    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }

    pub fn primary_pitch(&self) -> f64 {
        self.primary_pitch
    }

    pub fn secondary_pitch(&self) -> f64 {
        self.secondary_pitch
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radial_mode(&self) -> RadialMode {
        self.radial_mode
    }

    pub fn spiral_mode(&self) -> SpiralMode {
        if self.secondary_pitch > 0.0 {
            SpiralMode::Dual
        } else {
            SpiralMode::Single
        }
    }
}

impl Default for PatternParameters {
    fn default() -> Self {
        Self {
            instance_count: DEFAULT_INSTANCES,
            primary_pitch: DEFAULT_SPIRAL_PITCH,
            secondary_pitch: DEFAULT_SECONDARY_PITCH,
            diameter: DEFAULT_PATTERN_DIAMETER,
            radial_mode: RadialMode::Collapsed,
        }
    }
}
