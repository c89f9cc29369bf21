//! Numeric model for carried values
//!
//! [`Numeric`] is the set of arithmetic types a pipeline can carry, and
//! [`CastTo`] is the explicit conversion every step constant goes through.
//!
//! Conversions follow `as` semantics exactly: integers narrow modulo
//! 2^width, signedness is reinterpreted, floats saturate into integers.
//! Arithmetic on integers wraps. Neither is masked or corrected.

use std::fmt::{Debug, Display};

mod private {
    pub trait Sealed {}
}

/// Arithmetic type a pipeline can carry
///
/// Sealed: implemented for the primitive integers and floats only.
pub trait Numeric:
    Copy + PartialOrd + Default + Debug + Display + Send + Sync + 'static + private::Sealed
{
    /// Type name used in diagnostics
    const TYPE_NAME: &'static str;

    /// Check for the zero value
    fn is_zero(self) -> bool;

    /// Addition, wrapping on integer overflow
    #[must_use]
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Multiplication, wrapping on integer overflow
    #[must_use]
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Division, wrapping on `MIN / -1`; `None` when an integer divisor is zero
    fn checked_wrapping_div(self, rhs: Self) -> Option<Self>;
}

/// Explicit, possibly lossy conversion into `T`
///
/// Implemented for every pair of primitive numeric types.
pub trait CastTo<T>: Copy {
    /// Convert with `as` semantics
    fn cast(self) -> T;
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Numeric for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn checked_wrapping_div(self, rhs: Self) -> Option<Self> {
                    if rhs == 0 {
                        None
                    } else {
                        Some(<$t>::wrapping_div(self, rhs))
                    }
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Numeric for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0.0
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn checked_wrapping_div(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }
            }
        )*
    };
}

impl_numeric_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_numeric_float!(f32, f64);

macro_rules! impl_cast_to {
    (@from $src:ty => $($dst:ty),*) => {
        $(
            impl CastTo<$dst> for $src {
                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap, clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn cast(self) -> $dst {
                    self as $dst
                }
            }
        )*
    };
    ($($src:ty),* $(,)?) => {
        $(
            impl_cast_to!(@from $src => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
        )*
    };
}

impl_cast_to!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn cast<S: CastTo<T>, T>(value: S) -> T {
        value.cast()
    }

    #[test]
    fn narrowing_truncates_modulo_width() {
        assert_eq!(cast::<u64, u8>(0x155), 0x55);
        assert_eq!(cast::<u32, u16>(123_345), 57_809);
    }

    #[test]
    fn sign_is_reinterpreted() {
        assert_eq!(cast::<i32, u16>(-5), 65_531);
        assert_eq!(cast::<u8, i8>(0xFF), -1);
    }

    #[test]
    fn float_to_int_saturates() {
        assert_eq!(cast::<f64, u8>(300.7), 255);
        assert_eq!(cast::<f64, u8>(-1.0), 0);
        assert_eq!(cast::<f32, i32>(2.9), 2);
    }

    #[test]
    fn identity_cast() {
        assert_eq!(cast::<u16, u16>(555), 555);
    }

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(Numeric::wrapping_add(250u8, 10), 4);
        assert_eq!(Numeric::wrapping_mul(200u8, 2), 144);
        assert_eq!(i8::MIN.checked_wrapping_div(-1), Some(i8::MIN));
    }

    #[test]
    fn integer_division_by_zero_is_none() {
        assert_eq!(10u32.checked_wrapping_div(0), None);
        assert_eq!(10u32.checked_wrapping_div(3), Some(3));
    }

    #[test]
    fn float_arithmetic() {
        assert!(0.0f64.is_zero());
        assert_eq!(Numeric::wrapping_add(1.5f64, 1.0), 2.5);
        assert_eq!(1.0f32.checked_wrapping_div(4.0), Some(0.25));
    }

    #[test]
    fn type_names() {
        assert_eq!(<u16 as Numeric>::TYPE_NAME, "u16");
        assert_eq!(<f64 as Numeric>::TYPE_NAME, "f64");
    }
}
