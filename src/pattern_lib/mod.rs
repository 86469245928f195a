// src/pattern_lib/mod.rs

pub mod error;
pub mod params;
pub mod transform;
pub mod generator;

pub use error::PatternError;
pub use params::{PatternParameters, RadialMode, SpiralMode};
pub use transform::{InstanceRaw, PlacementTransform};
pub use generator::{Placements, SpiralPlacementGenerator, GOLDEN_ANGLE};
