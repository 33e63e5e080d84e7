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

//! # Arith Ops
//!
//! The arithmetic utility module: three independently callable, pure
//! numeric operations (`add`, `square`, `divide`) that work uniformly over
//! every integer and floating-point primitive.
//!
//! ## Modules
//!
//! - `ops`: The operations themselves, including the fixed-operand
//!   `divide_default` (`2000 / 100`), and `checked_*` / `saturating_*`
//!   variants for fixed-width callers that must not panic on overflow.
//! - `error`: `ArithmeticError` (`DivisionByZero`, `Overflow`) and the
//!   `Operation` tag carried by overflow errors.
//!
//! ## Error handling
//!
//! Failures are reported synchronously through `Result`. A zero divisor is
//! always an error, never an infinity or a platform-dependent value.

pub mod error;
pub mod ops;

pub use error::{ArithmeticError, Operation};
pub use ops::{
    add, checked_add, checked_square, divide, divide_default, saturating_add, saturating_square,
    square, DEFAULT_DIVIDEND, DEFAULT_DIVISOR,
};
