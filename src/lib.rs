// src/lib.rs

pub mod config;
pub mod host_lib;
pub mod pattern_lib;

pub use config::{ConfigError, PatternConfig};
pub use pattern_lib::{
    PatternError, PatternParameters, PlacementTransform, RadialMode, SpiralPlacementGenerator,
    GOLDEN_ANGLE,
};
