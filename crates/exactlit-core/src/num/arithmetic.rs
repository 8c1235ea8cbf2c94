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

//! # Arithmetic Trait Aliases
//!
//! Unified numeric bounds for the concrete types a literal may convert to.
//! `Arithmetic` matches every primitive integer and floating type (and no
//! library types), `Integral` narrows it to the integers.
//!
//! ## Highlights
//!
//! - Builds on `num_traits` fundamentals (`Num`, `NumCast`, `Bounded`) for
//!   generic code over the target type.
//! - Includes the exact limit traits from `limits` so that bounds checks
//!   read the same constants everywhere.
//! - `Integral` adds `PrimInt`, which brings `%`, `&`, `|` and `^`; those
//!   operators are only offered against integer literals.

use std::fmt::{Debug, Display};

use num_traits::{Bounded, Num, NumCast, PrimInt};

use crate::num::limits::{Highest, HighestMagnitude, Lowest, LowestMagnitude, RealRange};

/// A trait alias for the primitive arithmetic types a literal converts to.
///
/// # Examples
///
/// ```rust
/// # use exactlit_core::num::arithmetic::Arithmetic;
/// fn span<T: Arithmetic>() -> (T, T) {
///     (T::LOWEST, T::HIGHEST)
/// }
/// assert_eq!(span::<i8>(), (-128, 127));
/// assert_eq!(span::<f32>(), (f32::MIN, f32::MAX));
/// ```
pub trait Arithmetic:
    Num + NumCast + Bounded + Copy + PartialOrd + Debug + Display + Lowest + Highest + Send + Sync
{
}

impl<T> Arithmetic for T where
    T: Num
        + NumCast
        + Bounded
        + Copy
        + PartialOrd
        + Debug
        + Display
        + Lowest
        + Highest
        + Send
        + Sync
{
}

/// A trait alias for the primitive integer types.
pub trait Integral: Arithmetic + PrimInt + LowestMagnitude + HighestMagnitude + RealRange {}

impl<T> Integral for T where T: Arithmetic + PrimInt + LowestMagnitude + HighestMagnitude + RealRange
{}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_arithmetic<T: Arithmetic>() -> bool {
        true
    }

    fn is_integral<T: Integral>() -> bool {
        true
    }

    fn magnitude_span<T: Integral>() -> (u128, u128) {
        (T::LOWEST_MAGNITUDE, T::HIGHEST_MAGNITUDE)
    }

    #[test]
    fn test_all_primitives_are_arithmetic() {
        assert!(is_arithmetic::<u8>());
        assert!(is_arithmetic::<u128>());
        assert!(is_arithmetic::<isize>());
        assert!(is_arithmetic::<f32>());
        assert!(is_arithmetic::<f64>());
    }

    #[test]
    fn test_integral_covers_signed_and_unsigned() {
        assert!(is_integral::<i64>());
        assert!(is_integral::<usize>());
        assert!(is_integral::<u128>());
    }

    #[test]
    fn test_integral_magnitude_span() {
        assert_eq!(magnitude_span::<i8>(), (128, 127));
        assert_eq!(magnitude_span::<u16>(), (0, 65535));
    }

    #[test]
    fn test_bounded_agrees_with_limits() {
        assert_eq!(<i16 as Bounded>::min_value(), <i16 as Lowest>::LOWEST);
        assert_eq!(<u32 as Bounded>::max_value(), <u32 as Highest>::HIGHEST);
        assert_eq!(<f64 as Bounded>::min_value(), <f64 as Lowest>::LOWEST);
    }
}
