//! Chain construction errors

use thiserror::Error;

/// Invalid input to a chain build, reported before any circle is produced,
/// or an invalid stored chain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    /// Chain limit must allow at least the origin circle
    #[error("chain limit must be at least 1, got {0}")]
    InvalidLimit(usize),

    /// A coordinate or scalar input was NaN or infinite
    #[error("non-finite value in {what}")]
    NonFinite { what: &'static str },

    #[error("maximum radius must not be negative, got {0}")]
    NegativeMaxRadius(f32),

    /// A stored chain without its origin circle
    #[error("chain must contain at least one circle")]
    EmptyChain,
}
