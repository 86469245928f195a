// src/pattern_lib/error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl PatternError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PatternError::InvalidParameter { name, reason: reason.into() }
    }
}
