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

//! # Arithmetic Operations
//!
//! Pure, stateless numeric functions: `add`, `square` and `divide`. Each
//! call depends only on its arguments and has no observable side effects.
//!
//! The plain forms (`add`, `square`) follow the primitive operators of the
//! numeric type, which for fixed-width integers means the usual overflow
//! behavior of the build profile. Callers that must not panic use the
//! `checked_*` forms, which report [`ArithmeticError::Overflow`], or the
//! `saturating_*` forms, which clamp to the bounds of the type.
//!
//! `divide` is always checked since a zero divisor is part of its domain.
//!
//! # Examples
//!
//! ```rust
//! # use arith_ops::ops::{add, divide, divide_default, square};
//! # use arith_ops::error::ArithmeticError;
//! assert_eq!(add(3, 4), 7);
//! assert_eq!(square(2), 4);
//! assert_eq!(divide(2000, 100), Ok(20));
//! assert_eq!(divide_default(), 20);
//! assert_eq!(divide(1.0, 0.0), Err(ArithmeticError::DivisionByZero));
//! ```

use crate::error::{ArithmeticError, Operation};
use arith_core::num::numeric::Numeric;

/// The dividend used by [`divide_default`].
pub const DEFAULT_DIVIDEND: i64 = 2000;

/// The divisor used by [`divide_default`].
pub const DEFAULT_DIVISOR: i64 = 100;

/// Divides [`DEFAULT_DIVIDEND`] by [`DEFAULT_DIVISOR`].
///
/// This is the fixed-operand form of [`divide`] and always yields `20`.
#[inline]
pub const fn divide_default() -> i64 {
    DEFAULT_DIVIDEND / DEFAULT_DIVISOR
}

/// Divides `a` by `b`.
///
/// Integer division truncates toward zero.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] if `b` is zero, and
/// [`ArithmeticError::Overflow`] if the quotient does not fit the type
/// (`MIN / -1` for signed integers, or a finite float dividend whose
/// quotient rounds to infinity). A `NaN` operand yields `Ok(NaN)`.
#[inline]
pub fn divide<T: Numeric>(a: T, b: T) -> Result<T, ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }

    a.checked_div_val(b)
        .ok_or(ArithmeticError::overflow(Operation::Divide))
}

/// Returns `x * x`.
#[inline]
pub fn square<T: Numeric>(x: T) -> T {
    x * x
}

/// Returns `a + b`.
#[inline]
pub fn add<T: Numeric>(a: T, b: T) -> T {
    a + b
}

/// Returns `a + b`, or [`ArithmeticError::Overflow`] if the sum does not fit.
#[inline]
pub fn checked_add<T: Numeric>(a: T, b: T) -> Result<T, ArithmeticError> {
    a.checked_add_val(b)
        .ok_or(ArithmeticError::overflow(Operation::Add))
}

/// Returns `x * x`, or [`ArithmeticError::Overflow`] if the product does not fit.
#[inline]
pub fn checked_square<T: Numeric>(x: T) -> Result<T, ArithmeticError> {
    x.checked_mul_val(x)
        .ok_or(ArithmeticError::overflow(Operation::Square))
}

/// Returns `a + b` clamped to the bounds of `T`.
#[inline]
pub fn saturating_add<T: Numeric>(a: T, b: T) -> T {
    a.saturating_add_val(b)
}

/// Returns `x * x` clamped to the bounds of `T`.
#[inline]
pub fn saturating_square<T: Numeric>(x: T) -> T {
    x.saturating_mul_val(x)
}
