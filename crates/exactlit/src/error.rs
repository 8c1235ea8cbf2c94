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

//! # Conversion Error
//!
//! The single failure of this crate: a conversion from a literal to a
//! concrete arithmetic type that would change the represented value
//! (overflow, underflow or loss of precision).
//!
//! In a `const` context the failure never becomes a value; the conversion
//! panics and rustc rejects the program at the offending expression. At
//! runtime the checked APIs return a `ConversionError` and the operator
//! traits panic with its message. Either way the location points at the
//! caller, captured through `#[track_caller]`.

use std::ffi::CStr;
use std::panic::Location;

/// The message every failed value-preserving conversion carries.
pub const MESSAGE: &str = "conversion is not value-preserving";

const MESSAGE_C: &CStr = c"conversion is not value-preserving";

/// Error returned when a literal cannot be converted to an arithmetic type
/// without changing its value.
///
/// There is no public constructor: only the conversion paths of this crate
/// create one, always at the moment a check fails.
///
/// # Examples
///
/// ```rust
/// use exactlit::val;
///
/// let err = val!(0x8000).convert::<i16>().unwrap_err();
/// assert_eq!(err.message(), "conversion is not value-preserving");
/// assert_eq!(err.location().file(), file!());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversionError {
    location: &'static Location<'static>,
}

impl ConversionError {
    /// Creates an error located at the caller.
    #[track_caller]
    #[inline]
    pub(crate) fn here() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    /// Creates an error for a failed conversion to `target`, located at the
    /// caller.
    #[track_caller]
    pub(crate) fn for_target(target: &'static str) -> Self {
        let err = Self::here();
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target_type = target,
            file = err.location.file(),
            line = err.location.line(),
            column = err.location.column(),
            "{}",
            MESSAGE
        );
        #[cfg(not(feature = "tracing"))]
        let _ = target;
        err
    }

    /// Returns the error description as UTF-8 text.
    #[inline]
    pub const fn message(&self) -> &'static str {
        MESSAGE
    }

    /// Returns the error description as a plain C string.
    #[inline]
    pub const fn what(&self) -> &'static CStr {
        MESSAGE_C
    }

    /// Returns the source location of the failed conversion.
    #[inline]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl std::fmt::Debug for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionError")
            .field("file", &self.location.file())
            .field("line", &self.location.line())
            .field("column", &self.location.column())
            .finish()
    }
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", MESSAGE, self.location)
    }
}

impl std::error::Error for ConversionError {}
