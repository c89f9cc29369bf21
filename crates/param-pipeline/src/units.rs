//! Duration-like outputs
//!
//! Wrappers over a numeric count. A pipeline resolves the count in its
//! carried type and the wrapper is constructed from it.

use crate::numeric::{CastTo, Numeric};
use crate::parameter::{Adapt, Output};
use std::time::Duration;

macro_rules! duration_unit {
    ($(#[$meta:meta])* $name:ident, $suffix:literal, $to_duration:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
        pub struct $name<R = u64>(R);

        impl<R: Numeric> $name<R> {
            /// Wrap a count
            #[inline]
            #[must_use]
            pub fn new(count: R) -> Self {
                Self(count)
            }

            /// Underlying count
            #[inline]
            #[must_use]
            pub fn count(&self) -> R {
                self.0
            }

            /// Convert to [`Duration`]
            ///
            /// A negative count is zero; otherwise the count is converted
            /// with `as u64` semantics.
            #[inline]
            #[must_use]
            pub fn to_duration(&self) -> Duration
            where
                R: CastTo<u64>,
            {
                if self.0 < R::default() {
                    return Duration::ZERO;
                }
                $to_duration(self.0.cast())
            }
        }

        impl<R: Numeric> From<R> for $name<R> {
            fn from(count: R) -> Self {
                Self(count)
            }
        }

        impl<R: Numeric> std::fmt::Display for $name<R> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", self.0, $suffix)
            }
        }

        impl<R, C> Adapt<C> for $name<R>
        where
            R: Numeric,
            C: Numeric + CastTo<R>,
        {
            #[inline]
            fn adapt(value: Option<C>) -> Self {
                value.map_or_else(Self::default, |v| Self(v.cast()))
            }
        }

        impl<R: Numeric> Output for $name<R> {
            type Arith = R;
        }
    };
}

duration_unit!(
    /// Millisecond count
    Millis,
    "ms",
    Duration::from_millis
);

duration_unit!(
    /// Second count
    Secs,
    "s",
    Duration::from_secs
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_adapt() {
        assert_eq!(Millis::<u16>::adapt(Some(55u16)).count(), 55);
        assert_eq!(Millis::<u16>::adapt(None::<u16>), Millis::new(0));
    }

    #[test]
    fn millis_to_duration() {
        let ms = Millis::new(1500u32);
        assert_eq!(ms.to_duration(), Duration::from_millis(1500));
        assert_eq!(ms.to_string(), "1500ms");
    }

    #[test]
    fn secs_from_wider_carried_type() {
        let secs = Secs::<u8>::adapt(Some(300u32));
        assert_eq!(secs.count(), 44);
        assert_eq!(secs.to_duration(), Duration::from_secs(44));
    }

    #[test]
    fn negative_count_saturates_to_zero_duration() {
        assert_eq!(Secs::new(-3.5f64).to_duration(), Duration::ZERO);
    }

    #[test]
    fn negative_integer_count_is_zero_duration() {
        assert_eq!(Secs::new(-3i32).to_duration(), Duration::ZERO);
        assert_eq!(Millis::new(-1i64).to_duration(), Duration::ZERO);
        assert_eq!(Millis::new(i64::MIN).to_duration(), Duration::ZERO);
        assert_eq!(Secs::new(3i32).to_duration(), Duration::from_secs(3));
    }

    #[test]
    fn from_count() {
        let ms: Millis<u64> = 7u64.into();
        assert_eq!(ms.count(), 7);
    }
}
