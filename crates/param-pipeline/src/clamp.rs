//! Clamp steps
//!
//! [`Min`] raises a value to a floor, [`Max`] lowers it to a ceiling. Both
//! leave absence alone. Combining them does not sort the bounds: whichever
//! step runs last wins.

use crate::numeric::{CastTo, Numeric};
use crate::step::{Inspection, StepKind, Transform};

/// Lower clamp: yields `max(threshold, value)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Min<C> {
    threshold: C,
}

impl<C: Numeric> Min<C> {
    /// Clamp from below at `threshold`
    #[inline]
    #[must_use]
    pub fn new(threshold: C) -> Self {
        Self { threshold }
    }

    /// Threshold as written
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> C {
        self.threshold
    }
}

impl<T, C> Transform<T> for Min<C>
where
    T: Numeric,
    C: Numeric + CastTo<T>,
{
    #[inline]
    fn apply(&self, value: Option<T>) -> Option<T> {
        let threshold: T = self.threshold.cast();
        value.map(|v| if threshold < v { v } else { threshold })
    }

    fn inspect(&self, inspection: &mut Inspection) {
        inspection.record(StepKind::Min, Ok(()));
    }
}

/// Upper clamp: yields `min(threshold, value)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Max<C> {
    threshold: C,
}

impl<C: Numeric> Max<C> {
    /// Clamp from above at `threshold`
    #[inline]
    #[must_use]
    pub fn new(threshold: C) -> Self {
        Self { threshold }
    }

    /// Threshold as written
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> C {
        self.threshold
    }
}

impl<T, C> Transform<T> for Max<C>
where
    T: Numeric,
    C: Numeric + CastTo<T>,
{
    #[inline]
    fn apply(&self, value: Option<T>) -> Option<T> {
        let threshold: T = self.threshold.cast();
        value.map(|v| if v < threshold { v } else { threshold })
    }

    fn inspect(&self, inspection: &mut Inspection) {
        inspection.record(StepKind::Max, Ok(()));
    }
}
