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

//! # Literal Macros
//!
//! `val!` and `real!` stand in for a literal suffix: they turn a numeric
//! token into an untyped literal, evaluated in a `const` block. `exact!`
//! goes one step further and converts the literal to a concrete type at
//! compile time.

/// Creates an `IntegerLiteral` from an integer token.
///
/// The token is read as `u128`, so decimal, hex, octal and binary forms with
/// `_` separators are all accepted, up to `u128::MAX`. A leading `-` negates
/// the literal. Floating tokens are rejected; use `real!` for those.
///
/// # Examples
///
/// ```rust
/// use exactlit::val;
///
/// assert_eq!(val!(0xf000_0000_0000_0000).magnitude(), 0xf000_0000_0000_0000);
/// assert!(val!(-0b1).is_negative());
/// assert_eq!(val!(0o17).to_u8(), 15);
/// ```
///
/// ```compile_fail
/// let _ = exactlit::val!(0.5);
/// ```
#[macro_export]
macro_rules! val {
    (- $lit:literal) => {
        const { $crate::IntegerLiteral::new($lit).negated() }
    };
    ($lit:literal) => {
        const { $crate::IntegerLiteral::new($lit) }
    };
}

/// Creates a `RealLiteral` from a floating token, optionally negated.
///
/// # Examples
///
/// ```rust
/// use exactlit::real;
///
/// assert_eq!(real!(0.2e1).value(), 2.0);
/// assert_eq!(real!(-0.5).value(), -0.5);
/// ```
#[macro_export]
macro_rules! real {
    (- $lit:literal) => {
        const { $crate::RealLiteral::new($lit).negated() }
    };
    ($lit:literal) => {
        const { $crate::RealLiteral::new($lit) }
    };
}

/// Converts a literal to `Exact<T>` at compile time.
///
/// `exact!(T, <integer>)` goes through `val!`, `exact!(T, real <float>)`
/// through `real!`. A conversion that is not value-preserving is a compile
/// error, while the resulting adapter works in ordinary runtime arithmetic.
///
/// # Examples
///
/// ```rust
/// use exactlit::exact;
///
/// let mut b: f32 = 1.0;
/// b += exact!(f32, real 0.5);
/// b *= exact!(f32, 0x100_0000);
/// assert_eq!(b, 25_165_824.0);
/// ```
///
/// ```compile_fail
/// let mut b: f32 = 1.0;
/// b += exactlit::exact!(f32, 0x100_0001); // would need 25 mantissa bits
/// ```
///
/// ```compile_fail
/// let mut b: f32 = 1.0;
/// b += exactlit::exact!(f32, real 0.1);
/// ```
#[macro_export]
macro_rules! exact {
    ($t:ty, real $($lit:tt)+) => {
        const { <$crate::Exact<$t>>::from_real($crate::real!($($lit)+)) }
    };
    ($t:ty, $($lit:tt)+) => {
        const { <$crate::Exact<$t>>::from_integer($crate::val!($($lit)+)) }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Exact, IntegerLiteral, RealLiteral};

    #[test]
    fn test_val_accepts_every_radix() {
        assert_eq!(val!(255), IntegerLiteral::new(255));
        assert_eq!(val!(0xff), IntegerLiteral::new(255));
        assert_eq!(val!(0o377), IntegerLiteral::new(255));
        assert_eq!(val!(0b1111_1111), IntegerLiteral::new(255));
        assert_eq!(
            val!(0xffff_ffff_ffff_ffff_ffff_ffff_ffff_ffff).magnitude(),
            u128::MAX
        );
    }

    #[test]
    fn test_val_negation() {
        let v = val!(-0x8000);
        assert!(v.is_negative());
        assert_eq!(v.magnitude(), 0x8000);
        assert!(val!(-0).is_negative());
        assert!(!val!(0).is_negative());
    }

    #[test]
    fn test_real_forms() {
        assert_eq!(real!(0.5), RealLiteral::new(0.5));
        assert_eq!(real!(1e3), RealLiteral::new(1000.0));
        assert_eq!(real!(-2.5).value(), -2.5);
    }

    #[test]
    fn test_exact_forms() {
        let a: Exact<u64> = exact!(u64, 0xffff_ffff_ffff_ffff);
        assert_eq!(a.get(), u64::MAX);
        let b: Exact<i8> = exact!(i8, -128);
        assert_eq!(b.get(), i8::MIN);
        let c: Exact<u32> = exact!(u32, real 4.0);
        assert_eq!(c.get(), 4);
        let d: Exact<f64> = exact!(f64, real -0.1);
        assert_eq!(d.get(), -0.1);
    }
}
