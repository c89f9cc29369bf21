//! Error types for pipeline assembly
//!
//! Every error here is raised before any value is resolved. Resolution
//! itself has no error path: absence is a value, not a failure.

use crate::step::StepKind;

/// A single step rejected its own configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// Ratio denominator is zero
    #[error("ratio {numerator}/{denominator} has a zero denominator")]
    ZeroDenominator {
        /// Numerator as written
        numerator: String,
        /// Denominator as written
        denominator: String,
    },

    /// Ratio denominator becomes zero in the carried type
    #[error("ratio denominator {denominator} truncates to zero as {carried}")]
    DenominatorTruncatesToZero {
        /// Denominator as written
        denominator: String,
        /// Carried type name
        carried: &'static str,
    },
}

/// Pipeline rejected during validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// A step failed its check against the carried type
    #[error("step {position} ({kind}) rejected: {source}")]
    InvalidStep {
        /// Zero-based position in the step list
        position: usize,
        /// Kind of the failing step
        kind: StepKind,
        /// Underlying step error
        #[source]
        source: StepError,
    },
}

impl PipelineError {
    /// Position of the offending step
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::InvalidStep { position, .. } => *position,
        }
    }

    /// Kind of the offending step
    #[inline]
    #[must_use]
    pub fn kind(&self) -> StepKind {
        match self {
            Self::InvalidStep { kind, .. } => *kind,
        }
    }
}
