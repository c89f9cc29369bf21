//! Parameter resolution
//!
//! [`Parameter`] binds an output type to a validated pipeline, resolves it
//! once at construction and caches the result.

use crate::error::PipelineError;
use crate::numeric::{CastTo, Numeric};
use crate::pipeline::{PipelineBuilder, ValidatedPipeline};
use crate::step::{Source, Transform};
use param_registry::Lookup;

/// Construct an output value from the pipeline's final optional value
///
/// Absent maps to the output's zero or default-constructed state; present
/// is explicitly converted. Implement this for user-defined value objects.
///
/// ```rust
/// use param_pipeline::Adapt;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Percent(u8);
///
/// impl Adapt<u16> for Percent {
///     fn adapt(value: Option<u16>) -> Self {
///         value.map_or_else(Percent::default, |v| Percent(v.min(100) as u8))
///     }
/// }
///
/// assert_eq!(Percent::adapt(Some(250)), Percent(100));
/// assert_eq!(Percent::adapt(None), Percent(0));
/// ```
pub trait Adapt<C>: Sized {
    /// Build the output from the resolved value
    fn adapt(value: Option<C>) -> Self;
}

/// Output type with a known arithmetic type
///
/// Used to seed pipelines that have no `Load`: such a pipeline runs in
/// `Arith` from the start.
pub trait Output: Sized {
    /// Arithmetic type the output is built from
    type Arith: Numeric;
}

macro_rules! impl_primitive_output {
    ($($t:ty),* $(,)?) => {
        $(
            impl<C: Numeric + CastTo<$t>> Adapt<C> for $t {
                #[inline]
                fn adapt(value: Option<C>) -> Self {
                    value.map_or(<$t>::default(), CastTo::<$t>::cast)
                }
            }

            impl Output for $t {
                type Arith = $t;
            }
        )*
    };
}

impl_primitive_output!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Parameter resolved once from a pipeline
///
/// Owns its cached value; the registry stays externally owned. Immutable
/// after construction, so concurrent reads need no synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter<O> {
    value: O,
}

impl<O> Parameter<O> {
    /// Resolve `pipeline` against `registry` and cache the result
    ///
    /// Runs exactly once; performs no I/O beyond the registry read.
    pub fn new<L, Src, St>(registry: &L, pipeline: &ValidatedPipeline<Src, St>) -> Self
    where
        L: Lookup + ?Sized,
        Src: Source,
        St: Transform<Src::Value>,
        O: Adapt<Src::Value>,
    {
        let resolved = pipeline.resolve(registry);

        match &resolved {
            Some(value) => tracing::debug!(
                steps = pipeline.len(),
                %value,
                carried = <Src::Value as Numeric>::TYPE_NAME,
                "parameter resolved"
            ),
            None => tracing::debug!(
                steps = pipeline.len(),
                "parameter resolved absent, using default"
            ),
        }

        Self {
            value: O::adapt(resolved),
        }
    }

    /// Validate `builder` and resolve it
    ///
    /// # Errors
    /// Returns [`PipelineError`] if the step list is rejected; nothing is
    /// resolved in that case
    pub fn build<L, Src, St>(
        registry: &L,
        builder: PipelineBuilder<Src, St>,
    ) -> Result<Self, PipelineError>
    where
        L: Lookup + ?Sized,
        Src: Source,
        St: Transform<Src::Value>,
        O: Adapt<Src::Value>,
    {
        let pipeline = builder.validate()?;
        Ok(Self::new(registry, &pipeline))
    }

    /// Borrow the cached value
    #[inline]
    #[must_use]
    pub fn get(&self) -> &O {
        &self.value
    }

    /// Copy out the cached value
    #[inline]
    #[must_use]
    pub fn value(&self) -> O
    where
        O: Clone,
    {
        self.value.clone()
    }

    /// Take the cached value
    #[inline]
    #[must_use]
    pub fn into_value(self) -> O {
        self.value
    }
}

impl<O> AsRef<O> for Parameter<O> {
    fn as_ref(&self) -> &O {
        &self.value
    }
}

impl<O: std::fmt::Display> std::fmt::Display for Parameter<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}
