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

//! # Exact Limits
//!
//! Associated-constant traits for the bounds of the primitive arithmetic
//! types. Unlike `num_traits::Bounded`, the constants are readable from
//! `const fn` and come in the representations the value-preserving checks
//! compare against: the type itself, an unsigned `u128` magnitude, or a
//! half-open `f64` range.
//!
//! ```rust
//! use exactlit_core::num::limits::{HighestMagnitude, LowestMagnitude, RealRange};
//!
//! assert_eq!(<i16 as LowestMagnitude>::LOWEST_MAGNITUDE, 32768);
//! assert_eq!(<i16 as HighestMagnitude>::HIGHEST_MAGNITUDE, 32767);
//! assert_eq!(<u8 as RealRange>::REAL_UPPER, 256.0);
//! ```

/// A trait for arithmetic types that have a smallest finite value.
pub trait Lowest {
    /// The smallest finite value (`MIN` for integers and floats alike).
    const LOWEST: Self;
}

/// A trait for arithmetic types that have a largest finite value.
pub trait Highest {
    /// The largest finite value.
    const HIGHEST: Self;
}

/// A trait for integer types exposing the magnitude of their minimum value.
pub trait LowestMagnitude {
    /// `|MIN|` as `u128`, computed by unsigned negation so that `i128::MIN`
    /// does not overflow. Zero for unsigned types.
    const LOWEST_MAGNITUDE: u128;
}

/// A trait for integer types exposing their maximum value as `u128`.
pub trait HighestMagnitude {
    /// `MAX` as `u128`.
    const HIGHEST_MAGNITUDE: u128;
}

/// A trait for integer types exposing the `f64` values they can hold.
///
/// Every integral `f64` in `[REAL_LOWER, REAL_UPPER)` is representable in the
/// type. The upper bound is exclusive because `MAX as f64` rounds up to the
/// next power of two for wide types.
pub trait RealRange {
    /// `MIN` as `f64` (zero or a negative power of two, always exact).
    const REAL_LOWER: f64;
    /// `MAX + 1` as `f64` (a power of two, always exact).
    const REAL_UPPER: f64;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $const_ty:ty, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: $const_ty = $value;
        }
    };
}

macro_rules! impl_bounds_for {
    ($t:ty) => {
        impl_const_for!(Lowest, LOWEST, $t, <$t>::MIN, $t);
        impl_const_for!(Highest, HIGHEST, $t, <$t>::MAX, $t);
    };
}

macro_rules! impl_integer_limits_for {
    ($t:ty) => {
        impl_bounds_for!($t);
        impl_const_for!(
            LowestMagnitude,
            LOWEST_MAGNITUDE,
            u128,
            (<$t>::MIN as i128 as u128).wrapping_neg(),
            $t
        );
        impl_const_for!(HighestMagnitude, HIGHEST_MAGNITUDE, u128, <$t>::MAX as u128, $t);
        impl RealRange for $t {
            const REAL_LOWER: f64 = <$t>::MIN as f64;
            const REAL_UPPER: f64 = (<$t>::MAX / 2 + 1) as f64 * 2.0;
        }
    };
}

impl_integer_limits_for!(u8);
impl_integer_limits_for!(u16);
impl_integer_limits_for!(u32);
impl_integer_limits_for!(u64);
impl_integer_limits_for!(u128);
impl_integer_limits_for!(usize);

impl_integer_limits_for!(i8);
impl_integer_limits_for!(i16);
impl_integer_limits_for!(i32);
impl_integer_limits_for!(i64);
impl_integer_limits_for!(i128);
impl_integer_limits_for!(isize);

impl_bounds_for!(f32);
impl_bounds_for!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn lowest_magnitude<T: LowestMagnitude>() -> u128 {
        T::LOWEST_MAGNITUDE
    }

    fn highest_magnitude<T: HighestMagnitude>() -> u128 {
        T::HIGHEST_MAGNITUDE
    }

    fn real_range<T: RealRange>() -> (f64, f64) {
        (T::REAL_LOWER, T::REAL_UPPER)
    }

    #[test]
    fn test_lowest_magnitude_of_signed_types() {
        assert_eq!(lowest_magnitude::<i8>(), 128);
        assert_eq!(lowest_magnitude::<i16>(), 0x8000);
        assert_eq!(lowest_magnitude::<i32>(), 0x8000_0000);
        assert_eq!(lowest_magnitude::<i64>(), 1u128 << 63);
        assert_eq!(lowest_magnitude::<i128>(), 1u128 << 127);
    }

    #[test]
    fn test_lowest_magnitude_of_unsigned_types_is_zero() {
        assert_eq!(lowest_magnitude::<u8>(), 0);
        assert_eq!(lowest_magnitude::<u64>(), 0);
        assert_eq!(lowest_magnitude::<u128>(), 0);
        assert_eq!(lowest_magnitude::<usize>(), 0);
    }

    #[test]
    fn test_highest_magnitude() {
        assert_eq!(highest_magnitude::<u8>(), 255);
        assert_eq!(highest_magnitude::<i16>(), 32767);
        assert_eq!(highest_magnitude::<u128>(), u128::MAX);
        assert_eq!(highest_magnitude::<i128>(), i128::MAX as u128);
    }

    #[test]
    fn test_real_range_is_exact_power_of_two() {
        assert_eq!(real_range::<u8>(), (0.0, 256.0));
        assert_eq!(real_range::<i8>(), (-128.0, 128.0));
        assert_eq!(real_range::<i64>(), (-9_223_372_036_854_775_808.0, 9_223_372_036_854_775_808.0));
        assert_eq!(real_range::<u64>().1, 18_446_744_073_709_551_616.0);
        assert_eq!(real_range::<u128>().1, 2.0f64.powi(128));
    }

    #[test]
    fn test_bounds_match_primitive_constants() {
        assert_eq!(<i32 as Lowest>::LOWEST, i32::MIN);
        assert_eq!(<i32 as Highest>::HIGHEST, i32::MAX);
        assert_eq!(<f32 as Lowest>::LOWEST, f32::MIN);
        assert_eq!(<f64 as Highest>::HIGHEST, f64::MAX);
    }
}
