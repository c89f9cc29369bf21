//! Default step

use crate::numeric::{CastTo, Numeric};
use crate::step::{Inspection, StepKind, Transform};

/// Supplies a constant when the incoming value is absent
///
/// A present value passes through untouched, so a loaded value is never
/// overridden. Besides `Load`, this is the only step that turns absence
/// into presence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultValue<C> {
    value: C,
}

impl<C: Numeric> DefaultValue<C> {
    /// Fall back to `value`, cast into the carried type
    #[inline]
    #[must_use]
    pub fn new(value: C) -> Self {
        Self { value }
    }

    /// Constant as written
    #[inline]
    #[must_use]
    pub fn value(&self) -> C {
        self.value
    }
}

impl<T, C> Transform<T> for DefaultValue<C>
where
    T: Numeric,
    C: Numeric + CastTo<T>,
{
    #[inline]
    fn apply(&self, value: Option<T>) -> Option<T> {
        value.or_else(|| Some(self.value.cast()))
    }

    fn inspect(&self, inspection: &mut Inspection) {
        inspection.record(StepKind::Default, Ok(()));
    }
}
