//! Arithmetic steps
//!
//! Both steps compute in the carried type and wrap on integer overflow.
//! [`Ratio`] multiplies before it divides, so `value * numerator` can
//! overflow and wrap before the division; this is left as is.

use crate::error::StepError;
use crate::numeric::{CastTo, Numeric};
use crate::step::{Inspection, StepKind, Transform};

/// Adds a constant to a present value
///
/// A negative constant on an unsigned carried type wraps, which subtracts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset<C> {
    delta: C,
}

impl<C: Numeric> Offset<C> {
    /// Add `delta`, cast into the carried type
    #[inline]
    #[must_use]
    pub fn new(delta: C) -> Self {
        Self { delta }
    }

    /// Constant as written
    #[inline]
    #[must_use]
    pub fn delta(&self) -> C {
        self.delta
    }
}

impl<T, C> Transform<T> for Offset<C>
where
    T: Numeric,
    C: Numeric + CastTo<T>,
{
    #[inline]
    fn apply(&self, value: Option<T>) -> Option<T> {
        value.map(|v| v.wrapping_add(self.delta.cast()))
    }

    fn inspect(&self, inspection: &mut Inspection) {
        inspection.record(StepKind::Offset, Ok(()));
    }
}

/// Rescales a present value: `value * numerator / denominator`
///
/// Both constants are cast into the carried type before the multiply, so a
/// negative numerator on an unsigned carried type wraps first. Integer
/// division truncates toward zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio<N, D = N> {
    numerator: N,
    denominator: D,
}

impl<N: Numeric, D: Numeric> Ratio<N, D> {
    /// Create ratio step
    ///
    /// # Errors
    /// Returns [`StepError::ZeroDenominator`] if `denominator` is zero
    pub fn new(numerator: N, denominator: D) -> Result<Self, StepError> {
        if denominator.is_zero() {
            return Err(StepError::ZeroDenominator {
                numerator: numerator.to_string(),
                denominator: denominator.to_string(),
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Numerator as written
    #[inline]
    #[must_use]
    pub fn numerator(&self) -> N {
        self.numerator
    }

    /// Denominator as written
    #[inline]
    #[must_use]
    pub fn denominator(&self) -> D {
        self.denominator
    }

    /// Check the denominator survives conversion into `T`
    ///
    /// # Errors
    /// Returns [`StepError::DenominatorTruncatesToZero`] if it does not
    pub fn check_for<T>(&self) -> Result<(), StepError>
    where
        T: Numeric,
        D: CastTo<T>,
    {
        let denominator: T = self.denominator.cast();
        if denominator.is_zero() {
            return Err(StepError::DenominatorTruncatesToZero {
                denominator: self.denominator.to_string(),
                carried: T::TYPE_NAME,
            });
        }
        Ok(())
    }
}

impl Ratio<i64, i64> {
    /// Ratio with signed constants fixed at compile time
    ///
    /// A zero `D` fails to compile. Use [`Ratio::fixed_unsigned`] for
    /// constants above `i64::MAX`.
    #[inline]
    #[must_use]
    pub const fn fixed<const N: i64, const D: i64>() -> Self {
        const { assert!(D != 0, "ratio denominator must be nonzero") };
        Self {
            numerator: N,
            denominator: D,
        }
    }
}

impl Ratio<u64, u64> {
    /// Ratio with unsigned constants fixed at compile time
    ///
    /// A zero `D` fails to compile.
    #[inline]
    #[must_use]
    pub const fn fixed_unsigned<const N: u64, const D: u64>() -> Self {
        const { assert!(D != 0, "ratio denominator must be nonzero") };
        Self {
            numerator: N,
            denominator: D,
        }
    }
}

impl<T, N, D> Transform<T> for Ratio<N, D>
where
    T: Numeric,
    N: Numeric + CastTo<T>,
    D: Numeric + CastTo<T>,
{
    /// A denominator that truncates to zero in `T` is rejected by
    /// validation; applied directly, such a step yields absent.
    #[inline]
    fn apply(&self, value: Option<T>) -> Option<T> {
        value.and_then(|v| {
            v.wrapping_mul(self.numerator.cast())
                .checked_wrapping_div(self.denominator.cast())
        })
    }

    fn inspect(&self, inspection: &mut Inspection) {
        inspection.record(StepKind::Ratio, self.check_for::<T>());
    }
}
