// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Checked Conversions
//!
//! Conversions between the literal types and the primitive arithmetic
//! types, in both directions.
//!
//! - `FromLiteral<L>` is the generic, runtime-checked conversion from a
//!   literal to `T`. `TryFrom` is implemented on top of it.
//! - `Exact<T>` is a `T` whose value came out of a checked conversion. The
//!   operator families convert the literal operand into an `Exact<T>` first
//!   and then apply the native operator, so the check lives in one place.
//!   `Exact::<T>::from_integer` and `from_real` are `const fn`, which lets an
//!   adapter be built in a `const` block (see `exact!`) and used in ordinary
//!   runtime arithmetic.
//! - `IntoLiteral` and `val` go the other way: from a typed value (a
//!   variable or a computed constant) to the matching literal.
//!
//! ```rust
//! use exactlit::{Exact, exact, val};
//!
//! let mut c: i16 = 100;
//! c += exact!(i16, -0x8000);
//! assert_eq!(c, -32668);
//! assert!(Exact::<i16>::new(val!(0x8000)).is_err());
//! ```
//!
//! ```compile_fail
//! let mut c: i16 = 100;
//! c += exactlit::exact!(i16, 0x8000); // larger than i16::MAX
//! ```

use exactlit_core::num::arithmetic::Arithmetic;

use crate::error::ConversionError;
use crate::integer::IntegerLiteral;
use crate::real::RealLiteral;

/// A trait for arithmetic types that can be built from the literal `L`
/// without changing its value.
///
/// Implemented for every primitive integer and floating type, for both
/// `IntegerLiteral` and `RealLiteral`.
///
/// # Examples
///
/// ```rust
/// # use exactlit::{FromLiteral, val, real};
/// assert_eq!(u8::try_from_literal(val!(200)), Ok(200));
/// assert!(i8::try_from_literal(val!(200)).is_err());
/// assert_eq!(f64::try_from_literal(real!(0.1)), Ok(0.1));
/// ```
pub trait FromLiteral<L>: Arithmetic {
    /// Converts `lit`, or fails with an error located at the caller.
    fn try_from_literal(lit: L) -> Result<Self, ConversionError>;
}

/// An arithmetic value produced by a value-preserving literal conversion.
///
/// Operators between `T` and `Exact<T>` apply the native operator of `T`
/// without any further check.
///
/// # Examples
///
/// ```rust
/// # use exactlit::{Exact, real};
/// let half = Exact::<f32>::new(real!(0.5)).unwrap();
/// assert_eq!(3.0f32 * half, 1.5);
/// assert_eq!(half.get(), 0.5);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Hash)]
pub struct Exact<T>(T);

impl<T: Copy> Exact<T> {
    /// Returns the converted value.
    #[inline(always)]
    pub const fn get(&self) -> T {
        self.0
    }
}

impl<T: Arithmetic> Exact<T> {
    /// Converts `lit` to `T`, failing when the value would change.
    #[track_caller]
    #[inline]
    pub fn new<L>(lit: L) -> Result<Self, ConversionError>
    where
        T: FromLiteral<L>,
    {
        T::try_from_literal(lit).map(Self)
    }

    /// Converts `lit` to `T`, panicking at the caller on failure.
    #[track_caller]
    #[inline]
    pub(crate) fn expect<L>(lit: L) -> Self
    where
        T: FromLiteral<L>,
    {
        match T::try_from_literal(lit) {
            Ok(value) => Self(value),
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Exact<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Exact({:?})", self.0)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Exact<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! from_literal_impl {
    ($t:ty, $checked:ident) => {
        impl FromLiteral<IntegerLiteral> for $t {
            #[track_caller]
            #[inline]
            fn try_from_literal(lit: IntegerLiteral) -> Result<Self, ConversionError> {
                match lit.$checked() {
                    Some(value) => Ok(value),
                    None => Err(ConversionError::for_target(stringify!($t))),
                }
            }
        }

        impl FromLiteral<RealLiteral> for $t {
            #[track_caller]
            #[inline]
            fn try_from_literal(lit: RealLiteral) -> Result<Self, ConversionError> {
                match lit.$checked() {
                    Some(value) => Ok(value),
                    None => Err(ConversionError::for_target(stringify!($t))),
                }
            }
        }

        impl TryFrom<IntegerLiteral> for $t {
            type Error = ConversionError;

            #[track_caller]
            #[inline]
            fn try_from(lit: IntegerLiteral) -> Result<Self, Self::Error> {
                <$t as FromLiteral<IntegerLiteral>>::try_from_literal(lit)
            }
        }

        impl TryFrom<RealLiteral> for $t {
            type Error = ConversionError;

            #[track_caller]
            #[inline]
            fn try_from(lit: RealLiteral) -> Result<Self, Self::Error> {
                <$t as FromLiteral<RealLiteral>>::try_from_literal(lit)
            }
        }

        impl Exact<$t> {
            #[doc = concat!("Converts an integer literal to `", stringify!($t), "`.")]
            ///
            /// # Panics
            ///
            /// Panics if the conversion is not value-preserving. In a `const`
            /// context this is a compile error.
            pub const fn from_integer(lit: IntegerLiteral) -> Self {
                match lit.$checked() {
                    Some(value) => Self(value),
                    None => panic!("conversion is not value-preserving"),
                }
            }

            #[doc = concat!("Converts a real literal to `", stringify!($t), "`.")]
            ///
            /// # Panics
            ///
            /// Panics if the conversion is not value-preserving. In a `const`
            /// context this is a compile error.
            pub const fn from_real(lit: RealLiteral) -> Self {
                match lit.$checked() {
                    Some(value) => Self(value),
                    None => panic!("conversion is not value-preserving"),
                }
            }
        }
    };
}

from_literal_impl!(u8, checked_to_u8);
from_literal_impl!(u16, checked_to_u16);
from_literal_impl!(u32, checked_to_u32);
from_literal_impl!(u64, checked_to_u64);
from_literal_impl!(u128, checked_to_u128);
from_literal_impl!(usize, checked_to_usize);

from_literal_impl!(i8, checked_to_i8);
from_literal_impl!(i16, checked_to_i16);
from_literal_impl!(i32, checked_to_i32);
from_literal_impl!(i64, checked_to_i64);
from_literal_impl!(i128, checked_to_i128);
from_literal_impl!(isize, checked_to_isize);

from_literal_impl!(f32, checked_to_f32);
from_literal_impl!(f64, checked_to_f64);

/// A trait for typed arithmetic values that can be turned into a literal.
pub trait IntoLiteral: Arithmetic {
    /// `IntegerLiteral` for integers, `RealLiteral` for floats.
    type Literal: Copy;

    /// Wraps the value. Never fails.
    fn into_literal(self) -> Self::Literal;
}

macro_rules! into_literal_impl {
    ($t:ty, $literal:ty, $ctor:ident) => {
        impl IntoLiteral for $t {
            type Literal = $literal;

            #[inline(always)]
            fn into_literal(self) -> $literal {
                <$literal>::$ctor(self)
            }
        }
    };
}

into_literal_impl!(u8, IntegerLiteral, from_u8);
into_literal_impl!(u16, IntegerLiteral, from_u16);
into_literal_impl!(u32, IntegerLiteral, from_u32);
into_literal_impl!(u64, IntegerLiteral, from_u64);
into_literal_impl!(u128, IntegerLiteral, from_u128);
into_literal_impl!(usize, IntegerLiteral, from_usize);

into_literal_impl!(i8, IntegerLiteral, from_i8);
into_literal_impl!(i16, IntegerLiteral, from_i16);
into_literal_impl!(i32, IntegerLiteral, from_i32);
into_literal_impl!(i64, IntegerLiteral, from_i64);
into_literal_impl!(i128, IntegerLiteral, from_i128);
into_literal_impl!(isize, IntegerLiteral, from_isize);

into_literal_impl!(f32, RealLiteral, from_f32);
into_literal_impl!(f64, RealLiteral, from_f64);

/// Creates an untyped literal from a typed value or constant expression.
///
/// Integers become an `IntegerLiteral`, floats a `RealLiteral`. For use in
/// `const` items, the per-type constructors (`IntegerLiteral::from_i32`, ...)
/// do the same as `const fn`.
///
/// # Examples
///
/// ```rust
/// use exactlit::val;
///
/// let wide = val(i32::MIN);
/// assert!(wide.is_negative());
/// assert_eq!(wide.convert::<i32>(), Ok(i32::MIN));
/// assert!(wide.convert::<i16>().is_err());
/// assert_eq!(val(0.5f32).convert::<f64>(), Ok(0.5));
/// ```
#[inline(always)]
pub fn val<T: IntoLiteral>(x: T) -> T::Literal {
    x.into_literal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{exact, real, val};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    // rand has no uniform distribution for `usize`/`isize`, so the caller
    // supplies the sampler.
    fn round_trip<T>(
        rng: &mut ChaCha8Rng,
        samples: usize,
        mut sample: impl FnMut(&mut ChaCha8Rng) -> T,
    ) where
        T: IntoLiteral + FromLiteral<<T as IntoLiteral>::Literal>,
    {
        for x in [T::LOWEST, T::HIGHEST, T::zero(), T::one()] {
            assert_eq!(T::try_from_literal(val(x)), Ok(x), "bound {}", x);
        }
        for _ in 0..samples {
            let x = sample(rng);
            assert_eq!(T::try_from_literal(val(x)), Ok(x), "sample {}", x);
        }
    }

    #[test]
    fn test_round_trip_law() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        round_trip::<u8>(&mut rng, 256, |rng| rng.random());
        round_trip::<u16>(&mut rng, 256, |rng| rng.random());
        round_trip::<u32>(&mut rng, 256, |rng| rng.random());
        round_trip::<u64>(&mut rng, 256, |rng| rng.random());
        round_trip::<u128>(&mut rng, 256, |rng| rng.random());
        round_trip::<usize>(&mut rng, 256, |rng| rng.random::<u64>() as usize);
        round_trip::<i8>(&mut rng, 256, |rng| rng.random());
        round_trip::<i16>(&mut rng, 256, |rng| rng.random());
        round_trip::<i32>(&mut rng, 256, |rng| rng.random());
        round_trip::<i64>(&mut rng, 256, |rng| rng.random());
        round_trip::<i128>(&mut rng, 256, |rng| rng.random());
        round_trip::<isize>(&mut rng, 256, |rng| rng.random::<i64>() as isize);
        round_trip::<f32>(&mut rng, 256, |rng| rng.random());
        round_trip::<f64>(&mut rng, 256, |rng| rng.random());
    }

    #[test]
    fn test_narrowing_matches_native_range_check() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1024 {
            let x: i32 = rng.random();
            let narrowed = i16::try_from_literal(val(x)).ok();
            assert_eq!(narrowed, i16::try_from(x).ok(), "value {}", x);
            let unsigned = u16::try_from_literal(val(x)).ok();
            assert_eq!(unsigned, u16::try_from(x).ok(), "value {}", x);
        }
    }

    #[test]
    fn test_float_widening_and_narrowing() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1024 {
            let x: f32 = rng.random();
            assert_eq!(f64::try_from_literal(val(x)), Ok(x as f64));
            assert_eq!(f32::try_from_literal(val(x as f64)), Ok(x));
        }
        assert!(f32::try_from_literal(val(0.1f64)).is_err());
    }

    #[test]
    fn test_try_from() {
        assert_eq!(i16::try_from(val!(-0x8000)), Ok(i16::MIN));
        assert!(i16::try_from(val!(0x8000)).is_err());
        assert_eq!(f32::try_from(real!(0.5)), Ok(0.5));
        assert!(f32::try_from(real!(0.1)).is_err());
        assert_eq!(u8::try_from(real!(7.0)), Ok(7));
    }

    #[test]
    fn test_exact_const_construction() {
        const SHORT: Exact<i16> = exact!(i16, -0x8000);
        const HALF: Exact<f32> = exact!(f32, real 0.5);
        assert_eq!(SHORT.get(), i16::MIN);
        assert_eq!(HALF.get(), 0.5);
        assert_eq!(Exact::<u8>::from_integer(val!(9)).get(), 9);
    }

    #[test]
    fn test_exact_new_reports_location() {
        let line = line!() + 1;
        let err = Exact::<u8>::new(val!(256)).unwrap_err();
        assert_eq!(err.location().line(), line);
        assert_eq!(Exact::<u8>::new(val!(255)).map(|e| e.get()), Ok(255));
    }

    #[test]
    #[should_panic(expected = "conversion is not value-preserving")]
    fn test_exact_expect_panics() {
        let _ = Exact::<i8>::expect(val!(128));
    }

    #[test]
    fn test_exact_display_and_debug() {
        let e = exact!(u32, 17);
        assert_eq!(format!("{}", e), "17");
        assert_eq!(format!("{:?}", e), "Exact(17)");
    }
}
