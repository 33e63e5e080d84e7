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

//! # Arith Core
//!
//! Numeric foundations for the Arith workspace. This crate holds the
//! by-value arithmetic traits that the operation crates build on, so that
//! a single generic implementation of `add`, `square` and `divide` works
//! across every integer and floating-point primitive.
//!
//! ## Modules
//!
//! - `num`: By-value checked (`Option<T>`) and saturating arithmetic traits
//!   for addition, multiplication and division, implemented for all integer
//!   primitives as well as `f32` and `f64`, plus the `Numeric` umbrella bound.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
