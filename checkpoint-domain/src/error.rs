use thiserror::Error;

use crate::value_objects::PrimaryCategory;

/// Precondition and invariant failures raised by the decision pipeline and
/// its value types. None of these are business outcomes: a caller that
/// receives one should abort the single evaluation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid item: {0}")]
    InvalidItem(String),

    #[error("invalid student: {0}")]
    InvalidStudent(String),

    #[error("invalid risk factor: {0}")]
    InvalidFactor(String),

    #[error("risk breakdown requires at least one factor")]
    EmptyBreakdown,

    #[error("total score mismatch: provided {provided}, calculated {calculated}")]
    ScoreMismatch { provided: i32, calculated: i32 },

    #[error("risk factor contributions overflow the score range")]
    ScoreOverflow,

    #[error("risk rubric only evaluates SINGLE_USE_PLASTIC items, got {category}")]
    OutOfScope { category: PrimaryCategory },

    #[error("invalid decision result: {0}")]
    InvalidResult(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown {kind} tag '{value}'")]
    UnknownTag { kind: &'static str, value: String },
}
