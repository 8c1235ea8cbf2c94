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

//! # Exactlit Core
//!
//! Numeric foundations for the `exactlit` value-preserving literals. The
//! crate collects everything the literal types need to know about the
//! primitive arithmetic types, so that the conversion checks stay exact
//! without reaching for per-call computations.
//!
//! ## Modules
//!
//! - `num`: Associated-constant traits describing the exact representable
//!   range of each primitive type (`Lowest`, `Highest`, `LowestMagnitude`,
//!   `HighestMagnitude`, `RealRange`) and trait aliases over `num_traits`
//!   (`Arithmetic`, `Integral`) used as generic bounds.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
