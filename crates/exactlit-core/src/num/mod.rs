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

//! # Numeric Foundations
//!
//! Traits describing the primitive arithmetic types (`u8` through `u128`,
//! `usize`, `i8` through `i128`, `isize`, `f32`, `f64`).
//!
//! ## Submodules
//!
//! - `limits`: Associated-constant traits giving the exact bounds of every
//!   primitive type, both in the type itself and as `u128` magnitudes or
//!   `f64` ranges, usable from `const fn`.
//! - `arithmetic`: Trait aliases (`Arithmetic`, `Integral`) that bundle the
//!   `num_traits` fundamentals with the limit traits.
//!
//! ## Motivation
//!
//! Value-preserving conversions must compare a value against the target's
//! bounds without ever overflowing or rounding on the way. Precomputing
//! those bounds as associated constants keeps the checks exact and
//! available at compile time.

pub mod arithmetic;
pub mod limits;
