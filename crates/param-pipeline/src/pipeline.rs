//! Pipeline composition
//!
//! Two phases, like any construction-then-execution design:
//! 1. **Assembly**: [`Pipeline`] starts a [`PipelineBuilder`], steps are
//!    chained with [`PipelineBuilder::then`], and [`PipelineBuilder::validate`]
//!    checks every step against the carried type.
//! 2. **Resolution**: [`ValidatedPipeline::resolve`] threads the optional
//!    value through the chain. It cannot fail.
//!
//! Each `then` is checked by the compiler: a step is accepted only if it is a
//! [`Transform`] of the type the source established.

use crate::error::PipelineError;
use crate::numeric::Numeric;
use crate::parameter::Output;
use crate::source::{Load, Seed};
use crate::step::{Inspection, Source, StepKind, Transform};
use param_registry::Lookup;

/// Two transforms applied in sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    /// Apply `first`, then `second`
    #[inline]
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Transform<T> for Then<A, B>
where
    A: Transform<T>,
    B: Transform<T>,
{
    #[inline]
    fn apply(&self, value: Option<T>) -> Option<T> {
        self.second.apply(self.first.apply(value))
    }

    fn inspect(&self, inspection: &mut Inspection) {
        self.first.inspect(inspection);
        self.second.inspect(inspection);
    }
}

impl<T> Transform<T> for () {
    #[inline]
    fn apply(&self, value: Option<T>) -> Option<T> {
        value
    }

    fn inspect(&self, _inspection: &mut Inspection) {}
}

macro_rules! impl_transform_tuple {
    ($($step:ident),+) => {
        impl<T, $($step),+> Transform<T> for ($($step,)+)
        where
            $($step: Transform<T>,)+
        {
            #[inline]
            #[allow(non_snake_case)]
            fn apply(&self, value: Option<T>) -> Option<T> {
                let ($($step,)+) = self;
                $(let value = $step.apply(value);)+
                value
            }

            #[allow(non_snake_case)]
            fn inspect(&self, inspection: &mut Inspection) {
                let ($($step,)+) = self;
                $($step.inspect(inspection);)+
            }
        }
    };
}

impl_transform_tuple!(A);
impl_transform_tuple!(A, B);
impl_transform_tuple!(A, B, C);
impl_transform_tuple!(A, B, C, D);
impl_transform_tuple!(A, B, C, D, E);
impl_transform_tuple!(A, B, C, D, E, F);
impl_transform_tuple!(A, B, C, D, E, F, G);
impl_transform_tuple!(A, B, C, D, E, F, G, H);

/// Entry points for assembling a pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline;

impl Pipeline {
    /// Start with a registry lookup; the carried type is `R`
    #[inline]
    #[must_use]
    pub fn load<R, S>(load: Load<R, S>) -> PipelineBuilder<Load<R, S>>
    where
        Load<R, S>: Source,
    {
        PipelineBuilder::new(load)
    }

    /// Start with no lookup, carrying `T`
    #[inline]
    #[must_use]
    pub fn seeded<T: Numeric>() -> PipelineBuilder<Seed<T>> {
        PipelineBuilder::new(Seed::new())
    }

    /// Start with no lookup, carrying the arithmetic type of output `O`
    #[inline]
    #[must_use]
    pub fn for_output<O: Output>() -> PipelineBuilder<Seed<O::Arith>> {
        Self::seeded::<O::Arith>()
    }
}

/// Builder for a typed step chain
///
/// Usage:
/// ```rust,ignore
/// let pipeline = Pipeline::load(Load::<u16>::new(FLAG_B))
///     .then(DefaultValue::new(1230u32))
///     .then(Ratio::new(1, 10)?)
///     .then(Max::new(160u32))
///     .validate()?;
/// ```
#[derive(Debug, Clone)]
pub struct PipelineBuilder<Src, St = ()> {
    source: Src,
    stages: St,
}

impl<Src: Source> PipelineBuilder<Src> {
    /// Create builder with `source` as head and no further steps
    #[inline]
    #[must_use]
    pub fn new(source: Src) -> Self {
        Self { source, stages: () }
    }
}

impl<Src, St> PipelineBuilder<Src, St>
where
    Src: Source,
    St: Transform<Src::Value>,
{
    /// Append a step (or a tuple of steps)
    #[inline]
    #[must_use]
    pub fn then<X>(self, step: X) -> PipelineBuilder<Src, Then<St, X>>
    where
        X: Transform<Src::Value>,
    {
        PipelineBuilder {
            source: self.source,
            stages: Then::new(self.stages, step),
        }
    }

    /// Steps assembled so far
    #[must_use]
    pub fn kinds(&self) -> Vec<StepKind> {
        let mut inspection = Inspection::new();
        self.source.inspect(&mut inspection);
        self.stages.inspect(&mut inspection);
        inspection.kinds().to_vec()
    }

    /// Check every step against the carried type
    ///
    /// # Errors
    /// Returns the first [`PipelineError`] found, with the step's position
    pub fn validate(self) -> Result<ValidatedPipeline<Src, St>, PipelineError> {
        let mut inspection = Inspection::new();
        self.source.inspect(&mut inspection);
        self.stages.inspect(&mut inspection);

        let kinds = match inspection.finish() {
            Ok(kinds) => kinds,
            Err(err) => {
                tracing::debug!(error = %err, "pipeline rejected");
                return Err(err);
            }
        };

        tracing::debug!(
            steps = kinds.len(),
            carried = <Src::Value as Numeric>::TYPE_NAME,
            "pipeline validated"
        );

        Ok(ValidatedPipeline {
            source: self.source,
            stages: self.stages,
            kinds,
        })
    }
}

/// Step chain that passed validation
///
/// Can only be obtained from [`PipelineBuilder::validate`].
#[derive(Debug, Clone)]
pub struct ValidatedPipeline<Src, St> {
    source: Src,
    stages: St,
    kinds: Vec<StepKind>,
}

impl<Src, St> ValidatedPipeline<Src, St>
where
    Src: Source,
    St: Transform<Src::Value>,
{
    /// Thread the value through every step, left to right
    ///
    /// Pure and deterministic given the registry contents.
    #[must_use]
    pub fn resolve<L: Lookup + ?Sized>(&self, registry: &L) -> Option<Src::Value> {
        self.stages.apply(self.source.produce(registry))
    }

    /// Kinds of every step, in order
    #[inline]
    #[must_use]
    pub fn kinds(&self) -> &[StepKind] {
        &self.kinds
    }

    /// Number of steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the pipeline has no steps at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Check if the chain starts with a registry lookup
    #[inline]
    #[must_use]
    pub fn starts_with_load(&self) -> bool {
        self.kinds.first() == Some(&StepKind::Load)
    }
}
