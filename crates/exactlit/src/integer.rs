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

//! # Integer Literal
//!
//! `IntegerLiteral` is an untyped integer constant: an unsigned `u128`
//! magnitude plus a sign flag. It takes no width until it is converted, and a
//! conversion only succeeds when the target type holds the exact value.
//!
//! ## Highlights
//!
//! - `const fn` construction from every primitive integer type; the
//!   magnitude of a negative value is computed by unsigned negation, so the
//!   minimum of every signed type is handled.
//! - `const fn` conversions per target type: `checked_to_<t>` returns an
//!   `Option`, `to_<t>` panics, which inside a `const` context is a compile
//!   error.
//! - Equality, ordering and hashing follow the represented value, so `-0`
//!   equals `0`. The sign of zero stays visible through `is_negative`,
//!   `Display` and conversion to a floating type.
//! - `!` is not implemented: a value without a width has no complement, and a
//!   boolean should be written as `1` or `0` instead.
//!
//! ```rust
//! use exactlit::{IntegerLiteral, val};
//!
//! const MIN: i16 = val!(-0x8000).to_i16();
//! assert_eq!(MIN, i16::MIN);
//! assert_eq!(val!(0x8000).checked_to_i16(), None);
//! assert_eq!(IntegerLiteral::from_i32(i32::MIN).to_i32(), i32::MIN);
//! ```
//!
//! ```compile_fail
//! // no complement without a width, and no logical not: write 1 or 0 instead
//! let _ = !exactlit::val!(1);
//! ```
//!
//! ```compile_fail
//! // conversion is not value-preserving
//! const C: i16 = exactlit::val!(0x8000).to_i16();
//! assert_eq!(C, 0);
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use exactlit_core::num::limits::{HighestMagnitude, LowestMagnitude};

use crate::convert::FromLiteral;
use crate::error::ConversionError;

/// An untyped integer constant with an unsigned magnitude and a sign.
///
/// `IntegerLiteral` does not implement `Not`. `!lit` fails to compile:
/// "complement cannot be applied to value of unspecified width", and for a
/// logical not, "explicitly write 1 or 0 instead".
///
/// # Examples
///
/// ```rust
/// # use exactlit::IntegerLiteral;
/// let v = IntegerLiteral::new(42).negated();
/// assert!(v.is_negative());
/// assert_eq!(v.magnitude(), 42);
/// assert_eq!(v.to_i8(), -42);
/// ```
#[derive(Clone, Copy, Default)]
pub struct IntegerLiteral {
    magnitude: u128,
    negative: bool,
}

impl IntegerLiteral {
    /// The literal `0`.
    pub const ZERO: Self = Self::new(0);

    /// Creates a non-negative literal with the given magnitude.
    #[inline(always)]
    pub const fn new(magnitude: u128) -> Self {
        Self {
            magnitude,
            negative: false,
        }
    }

    /// Creates a literal from its magnitude and sign flag.
    #[inline(always)]
    pub const fn from_parts(magnitude: u128, negative: bool) -> Self {
        Self {
            magnitude,
            negative,
        }
    }

    /// Returns the absolute value.
    #[inline(always)]
    pub const fn magnitude(&self) -> u128 {
        self.magnitude
    }

    /// Returns the sign flag. This is `true` for `-0` as well.
    #[inline(always)]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Checks if the magnitude is zero, regardless of sign.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.magnitude == 0
    }

    /// Flips the sign. Never fails, also not for zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exactlit::val;
    /// let zero = val!(0).negated();
    /// assert!(zero.is_negative());
    /// assert_eq!(zero, val!(0));
    /// assert_eq!(zero.negated().is_negative(), false);
    /// ```
    #[inline(always)]
    pub const fn negated(self) -> Self {
        Self::from_parts(self.magnitude, !self.negative)
    }

    /// Unary plus: returns the literal unchanged.
    #[inline(always)]
    pub const fn pos(self) -> Self {
        self
    }

    /// Converts to the arithmetic type `T`, failing when the value does not
    /// fit exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exactlit::val;
    /// assert_eq!(val!(255).convert::<u8>(), Ok(255));
    /// assert!(val!(256).convert::<u8>().is_err());
    /// assert!(val!(-1).convert::<u64>().is_err());
    /// ```
    #[track_caller]
    #[inline]
    pub fn convert<T>(self) -> Result<T, ConversionError>
    where
        T: FromLiteral<Self>,
    {
        T::try_from_literal(self)
    }

    #[inline(always)]
    const fn is_below_zero(&self) -> bool {
        self.negative && self.magnitude != 0
    }
}

macro_rules! integer_from_unsigned {
    ($method:ident, $t:ty) => {
        impl IntegerLiteral {
            #[doc = concat!("Creates a literal from a `", stringify!($t), "`. Never fails.")]
            #[inline(always)]
            pub const fn $method(x: $t) -> Self {
                Self::new(x as u128)
            }
        }

        impl From<$t> for IntegerLiteral {
            #[inline(always)]
            fn from(x: $t) -> Self {
                Self::$method(x)
            }
        }
    };
}

macro_rules! integer_from_signed {
    ($method:ident, $t:ty) => {
        impl IntegerLiteral {
            #[doc = concat!("Creates a literal from an `", stringify!($t), "`. Never fails, ")]
            #[doc = concat!("including for `", stringify!($t), "::MIN`.")]
            #[inline(always)]
            pub const fn $method(x: $t) -> Self {
                if x >= 0 {
                    Self::new(x as u128)
                } else {
                    Self::from_parts((x as i128 as u128).wrapping_neg(), true)
                }
            }
        }

        impl From<$t> for IntegerLiteral {
            #[inline(always)]
            fn from(x: $t) -> Self {
                Self::$method(x)
            }
        }
    };
}

integer_from_unsigned!(from_u8, u8);
integer_from_unsigned!(from_u16, u16);
integer_from_unsigned!(from_u32, u32);
integer_from_unsigned!(from_u64, u64);
integer_from_unsigned!(from_u128, u128);
integer_from_unsigned!(from_usize, usize);

integer_from_signed!(from_i8, i8);
integer_from_signed!(from_i16, i16);
integer_from_signed!(from_i32, i32);
integer_from_signed!(from_i64, i64);
integer_from_signed!(from_i128, i128);
integer_from_signed!(from_isize, isize);

macro_rules! integer_to_integral {
    ($checked:ident, $to:ident, $t:ty) => {
        impl IntegerLiteral {
            #[doc = concat!("Converts to `", stringify!($t), "`, or `None` if the value is out of range.")]
            pub const fn $checked(self) -> Option<$t> {
                if self.negative {
                    if self.magnitude > <$t as LowestMagnitude>::LOWEST_MAGNITUDE {
                        return None;
                    }
                    Some(self.magnitude.wrapping_neg() as $t)
                } else {
                    if self.magnitude > <$t as HighestMagnitude>::HIGHEST_MAGNITUDE {
                        return None;
                    }
                    Some(self.magnitude as $t)
                }
            }

            #[doc = concat!("Converts to `", stringify!($t), "`.")]
            ///
            /// # Panics
            ///
            /// Panics if the value is out of range. In a `const` context this
            /// is a compile error.
            pub const fn $to(self) -> $t {
                match self.$checked() {
                    Some(v) => v,
                    None => panic!("conversion is not value-preserving"),
                }
            }
        }
    };
}

// 2^128, the first float that no magnitude can equal. Casting it back to
// `u128` saturates to `u128::MAX`.
const MAGNITUDE_END: f64 = u128::MAX as f64;

macro_rules! integer_to_floating {
    ($checked:ident, $to:ident, $t:ty) => {
        impl IntegerLiteral {
            #[doc = concat!("Converts to `", stringify!($t), "`, or `None` if the magnitude ")]
            #[doc = concat!("needs more mantissa bits than `", stringify!($t), "` has.")]
            pub const fn $checked(self) -> Option<$t> {
                let candidate = self.magnitude as $t;
                if candidate as f64 >= MAGNITUDE_END || candidate as u128 != self.magnitude {
                    return None;
                }
                Some(if self.negative { -candidate } else { candidate })
            }

            #[doc = concat!("Converts to `", stringify!($t), "`.")]
            ///
            /// # Panics
            ///
            /// Panics if the magnitude is not exactly representable. In a
            /// `const` context this is a compile error.
            pub const fn $to(self) -> $t {
                match self.$checked() {
                    Some(v) => v,
                    None => panic!("conversion is not value-preserving"),
                }
            }
        }
    };
}

integer_to_integral!(checked_to_u8, to_u8, u8);
integer_to_integral!(checked_to_u16, to_u16, u16);
integer_to_integral!(checked_to_u32, to_u32, u32);
integer_to_integral!(checked_to_u64, to_u64, u64);
integer_to_integral!(checked_to_u128, to_u128, u128);
integer_to_integral!(checked_to_usize, to_usize, usize);

integer_to_integral!(checked_to_i8, to_i8, i8);
integer_to_integral!(checked_to_i16, to_i16, i16);
integer_to_integral!(checked_to_i32, to_i32, i32);
integer_to_integral!(checked_to_i64, to_i64, i64);
integer_to_integral!(checked_to_i128, to_i128, i128);
integer_to_integral!(checked_to_isize, to_isize, isize);

integer_to_floating!(checked_to_f32, to_f32, f32);
integer_to_floating!(checked_to_f64, to_f64, f64);

impl std::ops::Neg for IntegerLiteral {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl PartialEq for IntegerLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude && self.is_below_zero() == other.is_below_zero()
    }
}

impl Eq for IntegerLiteral {}

impl Hash for IntegerLiteral {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_below_zero().hash(state);
        self.magnitude.hash(state);
    }
}

impl PartialOrd for IntegerLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IntegerLiteral {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_below_zero(), other.is_below_zero()) {
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl std::fmt::Debug for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IntegerLiteral({})", self)
    }
}

impl std::fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}
