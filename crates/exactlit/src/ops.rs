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

//! # Literal Operators
//!
//! Arithmetic, compound-assignment and comparison operators between the
//! primitive arithmetic types and the literal types. The literal operand
//! takes the type of the concrete operand, is converted through `Exact<T>`,
//! and the native operator of `T` does the rest.
//!
//! | Operators              | `IntegerLiteral`  | `RealLiteral`    |
//! |------------------------|-------------------|------------------|
//! | `+ - * /` and `op=`    | all primitives    | all primitives   |
//! | `% & \| ^` and `op=`   | integers          | not defined      |
//! | `== != < <= > >=`      | all primitives    | all primitives   |
//!
//! Operator traits cannot be `const`, so these conversions are checked at
//! runtime and a lossy literal panics at the caller's location. Use
//! `exact!` to move the check to compile time, or the traits in
//! `checked` to get a `Result` instead of a panic.
//!
//! ```rust
//! use exactlit::{val, real};
//!
//! let mut a: i32 = 1;
//! a += val!(0x2);
//! a -= val!(0o2);
//! a *= val!(0b11);
//! a /= real!(0.2e1);
//! assert_eq!(a, 1);
//! assert!(a < val!(2));
//! assert_eq!(val!(10) - a, 9);
//! ```
//!
//! ```compile_fail
//! // `%` is not defined for real literals
//! let _ = 7i32 % exactlit::real!(2.0);
//! ```
//!
//! ```compile_fail
//! // `&` is not defined for floating operands
//! let _ = 7.0f64 & exactlit::val!(2);
//! ```

use std::cmp::Ordering;

use crate::convert::Exact;
use crate::integer::IntegerLiteral;
use crate::real::RealLiteral;

macro_rules! exact_binary_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt; $($t:ty),+) => {
        $(
            impl std::ops::$trait_name<Exact<$t>> for $t {
                type Output = $t;

                #[inline(always)]
                fn $method(self, rhs: Exact<$t>) -> Self::Output {
                    self $op rhs.get()
                }
            }

            impl std::ops::$trait_name<$t> for Exact<$t> {
                type Output = $t;

                #[inline(always)]
                fn $method(self, rhs: $t) -> Self::Output {
                    self.get() $op rhs
                }
            }

            impl std::ops::$assign_trait<Exact<$t>> for $t {
                #[inline(always)]
                fn $assign_method(&mut self, rhs: Exact<$t>) {
                    *self = *self $op rhs.get();
                }
            }
        )+
    };
}

macro_rules! literal_binary_op {
    ($lit:ty; $trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt; $($t:ty),+) => {
        $(
            impl std::ops::$trait_name<$lit> for $t {
                type Output = $t;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: $lit) -> Self::Output {
                    self $op Exact::<$t>::expect(rhs)
                }
            }

            impl std::ops::$trait_name<$t> for $lit {
                type Output = $t;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: $t) -> Self::Output {
                    Exact::<$t>::expect(self) $op rhs
                }
            }

            impl std::ops::$assign_trait<$lit> for $t {
                #[track_caller]
                #[inline]
                fn $assign_method(&mut self, rhs: $lit) {
                    *self = *self $op Exact::<$t>::expect(rhs);
                }
            }
        )+
    };
}

macro_rules! exact_comparison {
    (; $($t:ty),+) => {
        $(
            impl PartialEq<Exact<$t>> for $t {
                #[inline(always)]
                fn eq(&self, other: &Exact<$t>) -> bool {
                    *self == other.get()
                }
            }

            impl PartialEq<$t> for Exact<$t> {
                #[inline(always)]
                fn eq(&self, other: &$t) -> bool {
                    self.get() == *other
                }
            }

            impl PartialOrd<Exact<$t>> for $t {
                #[inline(always)]
                fn partial_cmp(&self, other: &Exact<$t>) -> Option<Ordering> {
                    PartialOrd::partial_cmp(self, &other.get())
                }
            }

            impl PartialOrd<$t> for Exact<$t> {
                #[inline(always)]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    PartialOrd::partial_cmp(&self.get(), other)
                }
            }
        )+
    };
}

// Every comparison method is overridden so that a failed conversion reports
// the caller, not the default method body in `core`.
macro_rules! literal_comparison {
    ($lit:ty; $($t:ty),+) => {
        $(
            impl PartialEq<$lit> for $t {
                #[track_caller]
                #[inline]
                fn eq(&self, other: &$lit) -> bool {
                    *self == Exact::<$t>::expect(*other)
                }

                #[track_caller]
                #[inline]
                fn ne(&self, other: &$lit) -> bool {
                    *self != Exact::<$t>::expect(*other)
                }
            }

            impl PartialEq<$t> for $lit {
                #[track_caller]
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    Exact::<$t>::expect(*self) == *other
                }

                #[track_caller]
                #[inline]
                fn ne(&self, other: &$t) -> bool {
                    Exact::<$t>::expect(*self) != *other
                }
            }

            impl PartialOrd<$lit> for $t {
                #[track_caller]
                #[inline]
                fn partial_cmp(&self, other: &$lit) -> Option<Ordering> {
                    PartialOrd::partial_cmp(self, &Exact::<$t>::expect(*other))
                }

                #[track_caller]
                #[inline]
                fn lt(&self, other: &$lit) -> bool {
                    *self < Exact::<$t>::expect(*other)
                }

                #[track_caller]
                #[inline]
                fn le(&self, other: &$lit) -> bool {
                    *self <= Exact::<$t>::expect(*other)
                }

                #[track_caller]
                #[inline]
                fn gt(&self, other: &$lit) -> bool {
                    *self > Exact::<$t>::expect(*other)
                }

                #[track_caller]
                #[inline]
                fn ge(&self, other: &$lit) -> bool {
                    *self >= Exact::<$t>::expect(*other)
                }
            }

            impl PartialOrd<$t> for $lit {
                #[track_caller]
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    PartialOrd::partial_cmp(&Exact::<$t>::expect(*self), other)
                }

                #[track_caller]
                #[inline]
                fn lt(&self, other: &$t) -> bool {
                    Exact::<$t>::expect(*self) < *other
                }

                #[track_caller]
                #[inline]
                fn le(&self, other: &$t) -> bool {
                    Exact::<$t>::expect(*self) <= *other
                }

                #[track_caller]
                #[inline]
                fn gt(&self, other: &$t) -> bool {
                    Exact::<$t>::expect(*self) > *other
                }

                #[track_caller]
                #[inline]
                fn ge(&self, other: &$t) -> bool {
                    Exact::<$t>::expect(*self) >= *other
                }
            }
        )+
    };
}

macro_rules! all_arithmetic {
    ($mac:ident!($($args:tt)*)) => {
        $mac!($($args)*; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
    };
}

macro_rules! all_integral {
    ($mac:ident!($($args:tt)*)) => {
        $mac!($($args)*; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
    };
}

all_arithmetic!(exact_binary_op!(Add, add, AddAssign, add_assign, +));
all_arithmetic!(exact_binary_op!(Sub, sub, SubAssign, sub_assign, -));
all_arithmetic!(exact_binary_op!(Mul, mul, MulAssign, mul_assign, *));
all_arithmetic!(exact_binary_op!(Div, div, DivAssign, div_assign, /));
all_integral!(exact_binary_op!(Rem, rem, RemAssign, rem_assign, %));
all_integral!(exact_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &));
all_integral!(exact_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, |));
all_integral!(exact_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^));

all_arithmetic!(literal_binary_op!(IntegerLiteral; Add, add, AddAssign, add_assign, +));
all_arithmetic!(literal_binary_op!(IntegerLiteral; Sub, sub, SubAssign, sub_assign, -));
all_arithmetic!(literal_binary_op!(IntegerLiteral; Mul, mul, MulAssign, mul_assign, *));
all_arithmetic!(literal_binary_op!(IntegerLiteral; Div, div, DivAssign, div_assign, /));
all_integral!(literal_binary_op!(IntegerLiteral; Rem, rem, RemAssign, rem_assign, %));
all_integral!(literal_binary_op!(IntegerLiteral; BitAnd, bitand, BitAndAssign, bitand_assign, &));
all_integral!(literal_binary_op!(IntegerLiteral; BitOr, bitor, BitOrAssign, bitor_assign, |));
all_integral!(literal_binary_op!(IntegerLiteral; BitXor, bitxor, BitXorAssign, bitxor_assign, ^));

all_arithmetic!(literal_binary_op!(RealLiteral; Add, add, AddAssign, add_assign, +));
all_arithmetic!(literal_binary_op!(RealLiteral; Sub, sub, SubAssign, sub_assign, -));
all_arithmetic!(literal_binary_op!(RealLiteral; Mul, mul, MulAssign, mul_assign, *));
all_arithmetic!(literal_binary_op!(RealLiteral; Div, div, DivAssign, div_assign, /));

all_arithmetic!(exact_comparison!());
all_arithmetic!(literal_comparison!(IntegerLiteral));
all_arithmetic!(literal_comparison!(RealLiteral));

#[cfg(test)]
mod tests {
    use crate::{exact, real, val};

    #[test]
    fn test_compound_assignment_sequence() {
        let mut a: i32 = val!(1).to_i32();
        a += val!(0x2);
        a -= val!(0o2);
        a *= val!(0b11);
        a /= real!(0.2e1);
        assert_eq!(a, 1);
    }

    #[test]
    fn test_float_accumulator() {
        let mut expected: f32 = -17_293_822_569_102_704_640.0;
        let mut b: f32 = val!(-0xf000_0000_0000_0000).to_f32();
        assert_eq!(b, expected);

        b *= val!(2);
        b /= val!(0x100_0002);
        b += real!(0.5);
        expected *= 2.0;
        expected /= 16_777_218.0;
        expected += 0.5;
        assert_eq!(b, expected);

        b += val!(0x100_0000);
        expected += 16_777_216.0;
        assert_eq!(b, expected);
    }

    #[test]
    #[should_panic(expected = "conversion is not value-preserving")]
    fn test_float_accumulator_rejects_25_bit_mantissa() {
        let mut b: f32 = val!(-0xf000_0000_0000_0000).to_f32();
        b += val!(0x100_0001);
    }

    #[test]
    #[should_panic(expected = "conversion is not value-preserving")]
    fn test_double_accumulator_rejects_widest_magnitude() {
        let mut acc: f64 = 0.0;
        acc += val!(-0xffff_ffff_ffff_ffff_ffff_ffff_ffff_ffff);
    }

    #[test]
    #[should_panic(expected = "conversion is not value-preserving")]
    fn test_tenth_into_f32_is_rejected() {
        let mut b: f32 = 1.0;
        b += real!(0.1);
    }

    #[test]
    fn test_short_arithmetic() {
        let mut c: i16 = val!(100).to_i16();
        c += val!(0x7000);
        c += val!(-0x8000);
        c = c * crate::val(1);
        assert_eq!(c, -3996);
    }

    #[test]
    #[should_panic(expected = "conversion is not value-preserving")]
    fn test_short_rejects_out_of_range_literal() {
        let mut c: i16 = 100;
        c += val!(0x8000);
    }

    #[test]
    fn test_literal_on_the_left() {
        assert_eq!(val!(10) - 3u8, 7u8);
        assert_eq!(val!(-10) / 5i64, -2i64);
        assert_eq!(real!(1.5) * 2.0f64, 3.0);
        assert_eq!(val!(0xff) & 0x0fu32, 0x0f);
        assert_eq!(val!(0xf0) | 0x0fu16, 0xff);
        assert_eq!(val!(0xff) ^ 0x0fu8, 0xf0);
        assert_eq!(val!(17) % 5usize, 2);
    }

    #[test]
    fn test_integer_only_operators() {
        let mut x: u32 = 0b1100;
        x &= val!(0b1010);
        assert_eq!(x, 0b1000);
        x |= val!(0b0001);
        assert_eq!(x, 0b1001);
        x ^= val!(0b1111);
        assert_eq!(x, 0b0110);
        x %= val!(4);
        assert_eq!(x, 2);
        assert_eq!(-7i8 % val!(3), -1);
    }

    #[test]
    fn test_comparisons_both_directions() {
        let x: i16 = -5;
        assert!(x == val!(-5));
        assert!(val!(-5) == x);
        assert!(x != val!(5));
        assert!(x < val!(0));
        assert!(val!(0) > x);
        assert!(x <= val!(-5));
        assert!(x >= val!(-6));
        assert!(0.5f32 == real!(0.5));
        assert!(real!(0.25) < 0.5f64);
        assert!(1.0f32 > val!(0));
        assert_eq!(x.partial_cmp(&val!(-5)), Some(std::cmp::Ordering::Equal));
    }

    #[test]
    fn test_comparison_with_min_value() {
        let a: i32 = crate::IntegerLiteral::from_i32(i32::MIN).to_i32();
        assert!(a == val!(-0x8000_0000));
    }

    #[test]
    #[should_panic(expected = "conversion is not value-preserving")]
    fn test_comparison_checks_conversion() {
        let x: u8 = 3;
        let _ = x < val!(256);
    }

    #[test]
    fn test_exact_operands() {
        let mut c: i16 = 100;
        c += exact!(i16, 0x7000);
        c += exact!(i16, -0x8000);
        assert_eq!(c, -3996);
        assert_eq!(exact!(u8, 7) * 3u8, 21);
        assert_eq!(7u8 % exact!(u8, 4), 3);
        let mut f: f64 = 1.0;
        f /= exact!(f64, real 0.5);
        assert_eq!(f, 2.0);
        assert!(f > exact!(f64, 1));
        assert!(exact!(f64, 2) == f);
    }

    #[test]
    fn test_negative_zero_behaves_as_zero() {
        assert_eq!(5i32 + val!(-0), 5);
        assert!(0u8 == val!(-0));
    }
}
