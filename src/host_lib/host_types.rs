// src/host_lib/host_types.rs

use std::fmt::Debug;
use glam::DMat4;
use thiserror::Error;
use crate::pattern_lib::PatternParameters;

pub type BodyId = u32;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("body {0} does not exist in the scene")]
    UnknownBody(String),
    #[error("command session is no longer accepting events")]
    SessionClosed,
}

/// The scene a pattern is built into. One `copy_to_scene` plus one
/// `apply_transform` is issued per placement.
pub trait PatternHost {
    type Body: Clone + Debug;

    fn copy_to_scene(&mut self, source: &Self::Body) -> Result<Self::Body, HostError>;

    /// Rigid transform applied on top of the body's current placement.
    fn apply_transform(&mut self, body: &Self::Body, transform: &DMat4) -> Result<(), HostError>;

    fn remove(&mut self, body: &Self::Body) -> Result<(), HostError>;
}

/// Dialog state already converted to native values.
#[derive(Clone, Debug)]
pub struct CommandInputs<B> {
    pub source: B,
    pub params: PatternParameters,
}
