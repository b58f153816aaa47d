//! Error types for scene construction.

use thiserror::Error;

/// Invalid scene parameters, reported before any geometry is generated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A population count was zero.
    #[error("{what} count must be greater than zero")]
    ZeroCount { what: &'static str },

    /// Tree height was zero, negative or not finite.
    #[error("tree height must be positive, got {0}")]
    NonPositiveHeight(f32),

    /// Base radius was zero, negative or not finite.
    #[error("base radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    /// Scatter sphere multiplier was zero, negative or not finite.
    #[error("{what} spread must be positive, got {value}")]
    NonPositiveSpread { what: &'static str, value: f32 },

    /// A damping rate was zero, negative or not finite.
    #[error("{what} damping rate must be positive, got {value}")]
    NonPositiveRate { what: &'static str, value: f32 },
}
