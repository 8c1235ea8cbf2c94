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

//! # Exactlit
//!
//! Untyped numeric literals that keep their value. An `IntegerLiteral` or
//! `RealLiteral` has no width of its own; it takes the type of whatever it
//! is converted to or combined with, and that conversion only succeeds when
//! the target represents the value exactly. Overflow, underflow and
//! precision loss are all the same error: the conversion is not
//! value-preserving.
//!
//! ## Compile time and runtime
//!
//! Construction and conversion are `const fn`. Inside a `const` item or a
//! `const { }` block a failed conversion is a compile error pointing at the
//! offending expression:
//!
//! ```rust
//! use exactlit::val;
//!
//! const SHORT_MIN: i16 = val!(-0x8000).to_i16();
//! assert_eq!(SHORT_MIN, i16::MIN);
//! ```
//!
//! ```compile_fail
//! const TOO_BIG: i16 = exactlit::val!(0x8000).to_i16();
//! assert_eq!(TOO_BIG, 0);
//! ```
//!
//! Operators cannot be `const`, so `x += val!(2)` checks the conversion at
//! runtime and panics at the caller if it fails. `exact!` performs the same
//! conversion in a `const` block and hands the operator an `Exact<T>`, so
//! the failure moves back to compile time while the arithmetic itself stays
//! ordinary runtime code. The traits in `checked` return a
//! `ConversionError` instead of panicking.
//!
//! ```rust
//! use exactlit::{exact, real, val};
//!
//! let mut b: f32 = val!(-0xf000_0000_0000_0000).to_f32();
//! b *= val!(2);
//! b += real!(0.5);
//! b += exact!(f32, 0x100_0000);
//! ```
//!
//! ## Modules
//!
//! - `integer`: `IntegerLiteral`, a `u128` magnitude with a sign flag.
//! - `real`: `RealLiteral`, an `f64` value.
//! - `convert`: `FromLiteral`, `TryFrom` impls, the `Exact<T>` adapter and
//!   the `val` factory for typed values.
//! - `ops`: operators between primitive types and literals.
//! - `checked`: `Result`-returning counterparts of the operators.
//! - `error`: `ConversionError`.
//!
//! ## Features
//!
//! - `literals` (default): the whole facility. Without it the crate is
//!   empty and `EXACT_LITERAL` is absent.
//! - `tracing`: emit a `trace` event for every failed runtime conversion.

#[cfg(feature = "literals")]
#[macro_use]
mod macros;

#[cfg(feature = "literals")]
pub mod checked;
#[cfg(feature = "literals")]
pub mod convert;
#[cfg(feature = "literals")]
pub mod error;
#[cfg(feature = "literals")]
pub mod integer;
#[cfg(feature = "literals")]
pub mod ops;
#[cfg(feature = "literals")]
pub mod real;

/// Revision of the value-preserving literal facility.
///
/// Present only when the facility is compiled in; dependents can gate on its
/// presence through the `literals` feature of this crate.
#[cfg(feature = "literals")]
pub const EXACT_LITERAL: u32 = 202_601;

#[cfg(feature = "literals")]
pub use convert::{Exact, FromLiteral, IntoLiteral, val};
#[cfg(feature = "literals")]
pub use error::ConversionError;
#[cfg(feature = "literals")]
pub use integer::IntegerLiteral;
#[cfg(feature = "literals")]
pub use real::RealLiteral;
