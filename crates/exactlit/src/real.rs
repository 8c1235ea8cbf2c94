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

//! # Real Literal
//!
//! `RealLiteral` is an untyped real constant held in `f64`, the widest
//! floating type stable Rust offers. Conversions succeed only when the
//! target represents the value exactly: in range, and without rounding on
//! the way there and back.
//!
//! ```rust
//! use exactlit::real;
//!
//! const HALF: f32 = real!(0.5).to_f32();
//! assert_eq!(HALF, 0.5);
//! assert_eq!(real!(0.1).checked_to_f32(), None);
//! assert_eq!(real!(2.0).checked_to_i32(), Some(2));
//! assert_eq!(real!(2.5).checked_to_i32(), None);
//! ```
//!
//! ```compile_fail
//! // `!` is rejected on real literals
//! let _ = !exactlit::real!(1.0);
//! ```
//!
//! ```compile_fail
//! // 0.1 has no exact binary32 representation
//! const C: f32 = exactlit::real!(0.1).to_f32();
//! assert_eq!(C, 0.0);
//! ```

use exactlit_core::num::limits::{Highest, Lowest, RealRange};

use crate::convert::FromLiteral;
use crate::error::ConversionError;

/// An untyped real constant.
///
/// `RealLiteral` does not implement `Not`. `!lit` fails to compile:
/// "complement cannot be applied to value of unspecified width", and for a
/// logical not, "explicitly write 1 or 0 instead".
///
/// # Examples
///
/// ```rust
/// # use exactlit::RealLiteral;
/// let v = RealLiteral::new(0.25).negated();
/// assert_eq!(v.value(), -0.25);
/// assert_eq!(v.to_f32(), -0.25f32);
/// ```
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct RealLiteral {
    value: f64,
}

impl RealLiteral {
    /// Creates a literal holding `value` verbatim.
    #[inline(always)]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Creates a literal from an `f64`. Never fails.
    #[inline(always)]
    pub const fn from_f64(value: f64) -> Self {
        Self::new(value)
    }

    /// Creates a literal from an `f32`. Widening is exact, so this never fails.
    #[inline(always)]
    pub const fn from_f32(value: f32) -> Self {
        Self::new(value as f64)
    }

    /// Returns the stored value.
    #[inline(always)]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the IEEE negation of the literal.
    #[inline(always)]
    pub const fn negated(self) -> Self {
        Self::new(-self.value)
    }

    /// Unary plus: returns the literal unchanged.
    #[inline(always)]
    pub const fn pos(self) -> Self {
        self
    }

    /// Converts to the arithmetic type `T`, failing when the value is out of
    /// range or would lose precision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exactlit::real;
    /// assert_eq!(real!(0.5).convert::<f32>(), Ok(0.5));
    /// assert!(real!(0.1).convert::<f32>().is_err());
    /// assert!(real!(1e10).convert::<i32>().is_err());
    /// ```
    #[track_caller]
    #[inline]
    pub fn convert<T>(self) -> Result<T, ConversionError>
    where
        T: FromLiteral<Self>,
    {
        T::try_from_literal(self)
    }
}

impl From<f32> for RealLiteral {
    #[inline(always)]
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<f64> for RealLiteral {
    #[inline(always)]
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

macro_rules! real_to_integral {
    ($checked:ident, $to:ident, $t:ty) => {
        impl RealLiteral {
            #[doc = concat!("Converts to `", stringify!($t), "`, or `None` if the value is out of ")]
            #[doc = "range, fractional or NaN."]
            pub const fn $checked(self) -> Option<$t> {
                let value = self.value;
                if !(value >= <$t as RealRange>::REAL_LOWER && value < <$t as RealRange>::REAL_UPPER) {
                    return None;
                }
                let candidate = value as $t;
                if candidate as f64 != value {
                    return None;
                }
                Some(candidate)
            }

            #[doc = concat!("Converts to `", stringify!($t), "`.")]
            ///
            /// # Panics
            ///
            /// Panics if the conversion is not value-preserving. In a `const`
            /// context this is a compile error.
            pub const fn $to(self) -> $t {
                match self.$checked() {
                    Some(v) => v,
                    None => panic!("conversion is not value-preserving"),
                }
            }
        }
    };
}

macro_rules! real_to_floating {
    ($checked:ident, $to:ident, $t:ty) => {
        impl RealLiteral {
            #[doc = concat!("Converts to `", stringify!($t), "`, or `None` if the value is out of ")]
            #[doc = "range, NaN, or would be rounded."]
            pub const fn $checked(self) -> Option<$t> {
                let value = self.value;
                if value > <$t as Highest>::HIGHEST as f64 || value < <$t as Lowest>::LOWEST as f64 {
                    return None;
                }
                let candidate = value as $t;
                if candidate as f64 != value {
                    return None;
                }
                Some(candidate)
            }

            #[doc = concat!("Converts to `", stringify!($t), "`.")]
            ///
            /// # Panics
            ///
            /// Panics if the conversion is not value-preserving. In a `const`
            /// context this is a compile error.
            pub const fn $to(self) -> $t {
                match self.$checked() {
                    Some(v) => v,
                    None => panic!("conversion is not value-preserving"),
                }
            }
        }
    };
}

real_to_integral!(checked_to_u8, to_u8, u8);
real_to_integral!(checked_to_u16, to_u16, u16);
real_to_integral!(checked_to_u32, to_u32, u32);
real_to_integral!(checked_to_u64, to_u64, u64);
real_to_integral!(checked_to_u128, to_u128, u128);
real_to_integral!(checked_to_usize, to_usize, usize);

real_to_integral!(checked_to_i8, to_i8, i8);
real_to_integral!(checked_to_i16, to_i16, i16);
real_to_integral!(checked_to_i32, to_i32, i32);
real_to_integral!(checked_to_i64, to_i64, i64);
real_to_integral!(checked_to_i128, to_i128, i128);
real_to_integral!(checked_to_isize, to_isize, isize);

real_to_floating!(checked_to_f32, to_f32, f32);
real_to_floating!(checked_to_f64, to_f64, f64);

impl std::ops::Neg for RealLiteral {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl std::fmt::Debug for RealLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RealLiteral({:?})", self.value)
    }
}

impl std::fmt::Display for RealLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::real;

    const HALF: f32 = real!(0.5).to_f32();
    const TWO: i32 = real!(0.2e1).to_i32();

    #[test]
    fn test_const_conversions() {
        assert_eq!(HALF, 0.5);
        assert_eq!(TWO, 2);
    }

    #[test]
    fn test_precision_loss_is_rejected() {
        assert_eq!(real!(0.1).checked_to_f32(), None);
        assert_eq!(real!(0.1).checked_to_f64(), Some(0.1));
        assert_eq!(real!(0.5).checked_to_f32(), Some(0.5));
        assert_eq!(RealLiteral::from_f32(0.1f32).checked_to_f32(), Some(0.1f32));
    }

    #[test]
    fn test_float_range() {
        let big = RealLiteral::new(f32::MAX as f64 * 2.0);
        assert_eq!(big.checked_to_f32(), None);
        assert_eq!(big.negated().checked_to_f32(), None);
        assert_eq!(RealLiteral::new(f32::MAX as f64).checked_to_f32(), Some(f32::MAX));
        assert_eq!(RealLiteral::new(f64::INFINITY).checked_to_f64(), None);
        assert_eq!(RealLiteral::new(f64::NEG_INFINITY).checked_to_f32(), None);
        assert_eq!(RealLiteral::new(f64::NAN).checked_to_f64(), None);
    }

    #[test]
    fn test_integral_targets() {
        assert_eq!(real!(255.0).checked_to_u8(), Some(255));
        assert_eq!(real!(256.0).checked_to_u8(), None);
        assert_eq!(real!(-1.0).checked_to_u8(), None);
        assert_eq!(real!(-128.0).checked_to_i8(), Some(i8::MIN));
        assert_eq!(real!(-129.0).checked_to_i8(), None);
        assert_eq!(real!(0.5).checked_to_i32(), None);
        assert_eq!(RealLiteral::new(f64::NAN).checked_to_i32(), None);
        assert_eq!(real!(-0.0).checked_to_u32(), Some(0));
    }

    #[test]
    fn test_integral_upper_bound_is_exclusive() {
        let two_pow_63 = 9_223_372_036_854_775_808.0;
        assert_eq!(RealLiteral::new(two_pow_63).checked_to_i64(), None);
        assert_eq!(RealLiteral::new(-two_pow_63).checked_to_i64(), Some(i64::MIN));
        assert_eq!(RealLiteral::new(two_pow_63).checked_to_u64(), Some(1u64 << 63));
        assert_eq!(RealLiteral::new(2.0f64.powi(64)).checked_to_u64(), None);
        assert_eq!(RealLiteral::new(2.0f64.powi(127)).checked_to_i128(), None);
        assert_eq!(RealLiteral::new(2.0f64.powi(127)).checked_to_u128(), Some(1u128 << 127));
    }

    #[test]
    #[should_panic(expected = "conversion is not value-preserving")]
    fn test_to_panics_outside_const() {
        let lit = RealLiteral::new(0.1);
        let _ = lit.to_f32();
    }

    #[test]
    fn test_unary_plus_and_double_negation() {
        let v = real!(-1.5);
        assert_eq!(v.value(), -1.5);
        assert_eq!(v.pos(), v);
        assert_eq!(-(-v), v);
        assert!((-real!(0.0)).value().is_sign_negative());
    }

    #[test]
    fn test_comparisons_follow_ieee() {
        assert!(real!(0.5) < real!(0.75));
        assert_eq!(real!(-0.0), real!(0.0));
        let nan = RealLiteral::new(f64::NAN);
        assert_ne!(nan, nan);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", real!(0.5)), "0.5");
        assert_eq!(format!("{:?}", real!(-2.0)), "RealLiteral(-2.0)");
    }
}
