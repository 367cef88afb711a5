//! Error types for pattern generation and interpretation
//!
//! [`LSystemError`] covers the two ways a grammar can be malformed: a model
//! that cannot be used at all (rejected when it is built) and a pattern whose
//! branches close more often than they open (detected while interpreting).
//!
//! Unmapped characters and unknown drawing symbols are not errors. They pass
//! through generation unchanged and are skipped by the turtle.

use thiserror::Error;

/// Why a model was rejected at construction time
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidReason {
    /// `segments` was zero or negative
    NonPositiveSegments(f64),
    /// `iterations` was negative or too large to represent
    InvalidIterations(i64),
    /// A numeric field was NaN or infinite
    NonFinite(&'static str),
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::NonPositiveSegments(segments) => {
                write!(f, "segments must be positive, got {}", segments)
            }
            InvalidReason::InvalidIterations(iterations) => {
                write!(f, "iterations must be a non-negative count, got {}", iterations)
            }
            InvalidReason::NonFinite(field) => write!(f, "{} must be a finite number", field),
        }
    }
}

/// Errors raised by the L-system core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LSystemError {
    /// The model description cannot produce a drawable pattern
    #[error("Invalid model '{model}': {reason}")]
    InvalidModel { model: String, reason: InvalidReason },

    /// A `]` was interpreted with no saved cursor state to restore
    #[error("Branch stack underflow: unmatched ']' at symbol {index}")]
    StackUnderflow { index: usize },
}

impl LSystemError {
    pub fn invalid_model(model: impl Into<String>, reason: InvalidReason) -> Self {
        LSystemError::InvalidModel {
            model: model.into(),
            reason,
        }
    }
}
