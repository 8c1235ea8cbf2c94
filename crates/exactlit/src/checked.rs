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

//! # Checked Literal Operations
//!
//! Non-panicking counterparts of the operators in `ops`. Each trait offers a
//! by-value form returning the result and an in-place form that leaves the
//! target untouched when the literal does not convert. Both report a
//! `ConversionError` located at the caller.
//!
//! The native operator still runs with its usual semantics once the
//! conversion succeeded: integer overflow behaves as it does for `+` on the
//! primitive itself.
//!
//! ## Traits
//!
//! - `TryAddLiteral`, `TrySubLiteral`, `TryMulLiteral`, `TryDivLiteral`:
//!   every primitive type, with either literal type.
//! - `TryRemLiteral`, `TryBitAndLiteral`, `TryBitOrLiteral`,
//!   `TryBitXorLiteral`: integer types with `IntegerLiteral` only.
//! - `TryCmpLiteral`: equality and ordering for every primitive type.

use std::cmp::Ordering;

use exactlit_core::num::arithmetic::{Arithmetic, Integral};

use crate::convert::FromLiteral;
use crate::error::ConversionError;
use crate::integer::IntegerLiteral;

macro_rules! try_literal_op {
    ($(#[$doc:meta])* $trait_name:ident, $method:ident, $assign_method:ident, $op:tt) => {
        $(#[$doc])*
        pub trait $trait_name<L>: Sized {
            /// Converts `lit` to `Self` and applies the operator.
            fn $method(self, lit: L) -> Result<Self, ConversionError>;

            /// Converts `lit` to `Self` and applies the operator in place.
            /// On failure `self` is left unchanged.
            fn $assign_method(&mut self, lit: L) -> Result<(), ConversionError>;
        }

        impl<T, L> $trait_name<L> for T
        where
            T: Arithmetic + FromLiteral<L>,
        {
            #[track_caller]
            #[inline]
            fn $method(self, lit: L) -> Result<Self, ConversionError> {
                Ok(self $op T::try_from_literal(lit)?)
            }

            #[track_caller]
            #[inline]
            fn $assign_method(&mut self, lit: L) -> Result<(), ConversionError> {
                *self = *self $op T::try_from_literal(lit)?;
                Ok(())
            }
        }
    };
}

macro_rules! try_integral_literal_op {
    ($(#[$doc:meta])* $trait_name:ident, $method:ident, $assign_method:ident, $op:tt) => {
        $(#[$doc])*
        pub trait $trait_name: Sized {
            /// Converts `lit` to `Self` and applies the operator.
            fn $method(self, lit: IntegerLiteral) -> Result<Self, ConversionError>;

            /// Converts `lit` to `Self` and applies the operator in place.
            /// On failure `self` is left unchanged.
            fn $assign_method(&mut self, lit: IntegerLiteral) -> Result<(), ConversionError>;
        }

        impl<T> $trait_name for T
        where
            T: Integral + FromLiteral<IntegerLiteral>,
        {
            #[track_caller]
            #[inline]
            fn $method(self, lit: IntegerLiteral) -> Result<Self, ConversionError> {
                Ok(self $op T::try_from_literal(lit)?)
            }

            #[track_caller]
            #[inline]
            fn $assign_method(&mut self, lit: IntegerLiteral) -> Result<(), ConversionError> {
                *self = *self $op T::try_from_literal(lit)?;
                Ok(())
            }
        }
    };
}

try_literal_op!(
    /// A trait for addition with a literal whose conversion may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exactlit::{checked::TryAddLiteral, val};
    /// let mut b: f32 = -17_293_822_569_102_704_640.0;
    /// assert!(b.try_add_assign_literal(val!(0x100_0001)).is_err()); // needs 25 mantissa bits
    /// assert_eq!(b, -17_293_822_569_102_704_640.0);
    /// assert!(b.try_add_assign_literal(val!(0x100_0000)).is_ok());
    /// ```
    TryAddLiteral,
    try_add_literal,
    try_add_assign_literal,
    +
);

try_literal_op!(
    /// A trait for subtraction of a literal whose conversion may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exactlit::{checked::TrySubLiteral, val};
    /// assert_eq!(10u8.try_sub_literal(val!(3)), Ok(7));
    /// assert!(10u8.try_sub_literal(val!(-3)).is_err()); // -3 is not a u8
    /// ```
    TrySubLiteral,
    try_sub_literal,
    try_sub_assign_literal,
    -
);

try_literal_op!(
    /// A trait for multiplication with a literal whose conversion may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exactlit::{checked::TryMulLiteral, real};
    /// assert_eq!(3.0f32.try_mul_literal(real!(0.5)), Ok(1.5));
    /// assert!(3.0f32.try_mul_literal(real!(0.1)).is_err());
    /// ```
    TryMulLiteral,
    try_mul_literal,
    try_mul_assign_literal,
    *
);

try_literal_op!(
    /// A trait for division by a literal whose conversion may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exactlit::{checked::TryDivLiteral, real};
    /// assert_eq!(9i32.try_div_literal(real!(3.0)), Ok(3));
    /// assert!(9i32.try_div_literal(real!(0.5)).is_err()); // 0.5 is not an i32
    /// ```
    TryDivLiteral,
    try_div_literal,
    try_div_assign_literal,
    /
);

try_integral_literal_op!(
    /// A trait for remainder by an integer literal whose conversion may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exactlit::{checked::TryRemLiteral, val};
    /// assert_eq!(10u16.try_rem_literal(val!(4)), Ok(2));
    /// assert!(10u16.try_rem_literal(val!(0x1_0000)).is_err());
    /// ```
    TryRemLiteral,
    try_rem_literal,
    try_rem_assign_literal,
    %
);

try_integral_literal_op!(
    /// A trait for bitwise and with an integer literal whose conversion may fail.
    TryBitAndLiteral,
    try_bitand_literal,
    try_bitand_assign_literal,
    &
);

try_integral_literal_op!(
    /// A trait for bitwise or with an integer literal whose conversion may fail.
    TryBitOrLiteral,
    try_bitor_literal,
    try_bitor_assign_literal,
    |
);

try_integral_literal_op!(
    /// A trait for bitwise xor with an integer literal whose conversion may fail.
    TryBitXorLiteral,
    try_bitxor_literal,
    try_bitxor_assign_literal,
    ^
);

/// A trait for comparing with a literal whose conversion may fail.
///
/// # Examples
///
/// ```rust
/// # use exactlit::{checked::TryCmpLiteral, val};
/// use std::cmp::Ordering;
///
/// assert_eq!(3u8.try_partial_cmp_literal(val!(4)), Ok(Some(Ordering::Less)));
/// assert_eq!(3u8.try_eq_literal(val!(3)), Ok(true));
/// assert!(3u8.try_eq_literal(val!(256)).is_err());
/// ```
pub trait TryCmpLiteral<L> {
    /// Converts `lit` and compares `self` with it.
    fn try_partial_cmp_literal(&self, lit: L) -> Result<Option<Ordering>, ConversionError>;

    /// Converts `lit` and checks `self` for equality with it.
    fn try_eq_literal(&self, lit: L) -> Result<bool, ConversionError>;
}

impl<T, L> TryCmpLiteral<L> for T
where
    T: Arithmetic + FromLiteral<L>,
{
    #[track_caller]
    #[inline]
    fn try_partial_cmp_literal(&self, lit: L) -> Result<Option<Ordering>, ConversionError> {
        let rhs = T::try_from_literal(lit)?;
        Ok(PartialOrd::partial_cmp(self, &rhs))
    }

    #[track_caller]
    #[inline]
    fn try_eq_literal(&self, lit: L) -> Result<bool, ConversionError> {
        let rhs = T::try_from_literal(lit)?;
        Ok(*self == rhs)
    }
}
