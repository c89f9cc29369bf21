//! Pipeline heads
//!
//! [`Load`] reads the registry; [`Seed`] starts a pipeline with no Load.

use crate::numeric::{CastTo, Numeric};
use crate::step::{Inspection, Source, StepKind};
use param_registry::{Lookup, ParamId, RawValue};
use std::marker::PhantomData;

/// Registry lookup reported as `R`
///
/// The raw entry is first reinterpreted as the stored type `S`, then
/// converted to `R`. Both conversions are `as` casts, so narrowing
/// truncates: a raw `0x155` reported as `u8` yields `0x55`.
///
/// A miss yields absent. Falling back to a constant is the job of a
/// separate [`DefaultValue`](crate::DefaultValue) step.
pub struct Load<R, S = RawValue> {
    id: ParamId,
    _types: PhantomData<fn() -> (R, S)>,
}

impl<R: Numeric> Load<R> {
    /// Load `id`, reporting the raw value as `R`
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ParamId>) -> Self {
        Self {
            id: id.into(),
            _types: PhantomData,
        }
    }
}

impl<R: Numeric, S: Numeric> Load<R, S> {
    /// Reinterpret the raw entry as `S2` before converting to `R`
    #[inline]
    #[must_use]
    pub fn stored_as<S2: Numeric>(self) -> Load<R, S2> {
        Load {
            id: self.id,
            _types: PhantomData,
        }
    }

    /// Identifier this step reads
    #[inline]
    #[must_use]
    pub fn id(&self) -> ParamId {
        self.id
    }
}

impl<R, S> Source for Load<R, S>
where
    R: Numeric,
    S: Numeric + CastTo<R>,
    RawValue: CastTo<S>,
{
    type Value = R;

    fn produce<L: Lookup + ?Sized>(&self, registry: &L) -> Option<R> {
        match registry.lookup(self.id) {
            Some(raw) => {
                let stored = CastTo::<S>::cast(raw);
                let reported = CastTo::<R>::cast(stored);
                tracing::trace!(id = %self.id, raw, %reported, "load hit");
                Some(reported)
            }
            None => {
                tracing::trace!(id = %self.id, "load miss");
                None
            }
        }
    }

    fn inspect(&self, inspection: &mut Inspection) {
        inspection.record(StepKind::Load, Ok(()));
    }
}

impl<R, S> Clone for Load<R, S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            _types: PhantomData,
        }
    }
}

impl<R, S> Copy for Load<R, S> {}

impl<R: Numeric, S: Numeric> std::fmt::Debug for Load<R, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Load")
            .field("id", &self.id)
            .field("reported", &R::TYPE_NAME)
            .field("stored", &S::TYPE_NAME)
            .finish()
    }
}

/// Head of a pipeline with no Load
///
/// Produces absent in `T`; the first [`DefaultValue`](crate::DefaultValue)
/// supplies the first concrete value.
pub struct Seed<T> {
    _carried: PhantomData<fn() -> T>,
}

impl<T: Numeric> Seed<T> {
    /// Create seed carrying `T`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            _carried: PhantomData,
        }
    }
}

impl<T: Numeric> Default for Seed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Seed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Seed<T> {}

impl<T: Numeric> std::fmt::Debug for Seed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed")
            .field("carried", &T::TYPE_NAME)
            .finish()
    }
}

impl<T: Numeric> Source for Seed<T> {
    type Value = T;

    #[inline]
    fn produce<L: Lookup + ?Sized>(&self, _registry: &L) -> Option<T> {
        None
    }

    fn inspect(&self, _inspection: &mut Inspection) {}
}
