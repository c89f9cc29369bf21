//! Step traits and core types
//!
//! A pipeline is one [`Source`] followed by any number of [`Transform`]s.
//! Only a source decides the carried type; transforms map `Option<T>` to
//! `Option<T>` and can never change it. A `Load` is a source and nothing
//! else, so the type system keeps it at the head of the chain.

use crate::error::{PipelineError, StepError};
use crate::numeric::Numeric;
use param_registry::Lookup;

/// Kinds of pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Registry lookup
    Load,

    /// Fallback constant for an absent value
    Default,

    /// Lower clamp
    Min,

    /// Upper clamp
    Max,

    /// Additive constant
    Offset,

    /// `value * numerator / denominator`
    Ratio,
}

impl StepKind {
    /// Step may manufacture a value from absence
    #[inline]
    #[must_use]
    pub fn is_source(self) -> bool {
        matches!(self, Self::Load | Self::Default)
    }

    /// Step only modifies an already present value
    #[inline]
    #[must_use]
    pub fn is_refinement(self) -> bool {
        !self.is_source()
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Head of a pipeline
///
/// Ignores any incoming value and establishes the carried type.
pub trait Source {
    /// Carried type produced for the rest of the chain
    type Value: Numeric;

    /// Produce the initial optional value
    fn produce<L: Lookup + ?Sized>(&self, registry: &L) -> Option<Self::Value>;

    /// Record this step for validation
    fn inspect(&self, inspection: &mut Inspection);
}

/// Non-type-changing step over `Option<T>`
///
/// Composites (tuples, [`Then`](crate::Then)) are transforms too; they
/// apply their children left to right.
pub trait Transform<T> {
    /// Apply this step to the incoming optional value
    fn apply(&self, value: Option<T>) -> Option<T>;

    /// Record each leaf step, with its check against `T`, in order
    fn inspect(&self, inspection: &mut Inspection);
}

/// Step-by-step record gathered while validating a pipeline
#[derive(Debug, Default)]
pub struct Inspection {
    kinds: Vec<StepKind>,
    first_error: Option<PipelineError>,
}

impl Inspection {
    /// Create empty inspection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next step and the outcome of its check
    ///
    /// Only the first failure is kept.
    pub fn record(&mut self, kind: StepKind, check: Result<(), StepError>) {
        let position = self.kinds.len();
        self.kinds.push(kind);

        if let Err(source) = check {
            if self.first_error.is_none() {
                self.first_error = Some(PipelineError::InvalidStep {
                    position,
                    kind,
                    source,
                });
            }
        }
    }

    /// Steps recorded so far
    #[inline]
    #[must_use]
    pub fn kinds(&self) -> &[StepKind] {
        &self.kinds
    }

    /// Check whether any step failed
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.first_error.is_none()
    }

    /// Finish, returning the step list or the first failure
    ///
    /// # Errors
    /// Returns the first [`PipelineError`] recorded
    pub fn finish(self) -> Result<Vec<StepKind>, PipelineError> {
        match self.first_error {
            Some(err) => Err(err),
            None => Ok(self.kinds),
        }
    }
}
