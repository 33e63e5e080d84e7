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

//! # Arith FFI
//!
//! C-compatible bindings for the Arith operations.
//!
//! The generic operations are monomorphized for `i64` and `f64`. Operations
//! that can fail return an [`ArithFfiStatus`] and write their result through
//! an out-pointer; infallible float operations return their value directly.
//!
//! ## Core Design Principles
//!
//! 1.  **Status Codes**: `Ok = 0`, `DivisionByZero = 1`, `Overflow = 2`. The
//!     out-pointer is written only when the status is `Ok`.
//! 2.  **No Panics on Arithmetic**: Integer operations are always checked, so
//!     overflow is reported as a status rather than aborting the host.
//! 3.  **Fail-Fast Safety**: Passing a `NULL` out-pointer aborts the process
//!     with a descriptive message rather than causing undefined behavior.
//!     Panics do not unwind across `extern "C"`.

pub mod ops;
pub mod status;
