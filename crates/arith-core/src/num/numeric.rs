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

//! The `Numeric` umbrella bound.
//!
//! Generic operations in the workspace are written against a single bound
//! instead of repeating the full trait list at every call site. `Numeric`
//! combines `num_traits::Num` (zero, one, the four operators) with the
//! by-value checked and saturating traits from [`crate::num::ops`].

use crate::num::ops::{
    checked_arithmetic::{CheckedAddVal, CheckedDivVal, CheckedMulVal},
    saturating_arithmetic::{SaturatingAddVal, SaturatingMulVal},
};
use num_traits::Num;
use std::fmt::{Debug, Display};

/// A primitive number usable with every Arith operation.
///
/// Implemented automatically for all integer primitives, `f32` and `f64`.
///
/// # Examples
///
/// ```rust
/// # use arith_core::num::numeric::Numeric;
/// fn double<T: Numeric>(x: T) -> T {
///     x + x
/// }
///
/// assert_eq!(double(21u8), 42);
/// assert_eq!(double(1.25f32), 2.5);
/// ```
pub trait Numeric:
    Num
    + Copy
    + PartialOrd
    + Debug
    + Display
    + CheckedAddVal
    + CheckedMulVal
    + CheckedDivVal
    + SaturatingAddVal
    + SaturatingMulVal
{
}

impl<T> Numeric for T where
    T: Num
        + Copy
        + PartialOrd
        + Debug
        + Display
        + CheckedAddVal
        + CheckedMulVal
        + CheckedDivVal
        + SaturatingAddVal
        + SaturatingMulVal
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    fn is_numeric<T: Numeric>() {}

    #[test]
    fn test_primitives_are_numeric() {
        is_numeric::<u8>();
        is_numeric::<u16>();
        is_numeric::<u32>();
        is_numeric::<u64>();
        is_numeric::<u128>();
        is_numeric::<usize>();
        is_numeric::<i8>();
        is_numeric::<i16>();
        is_numeric::<i32>();
        is_numeric::<i64>();
        is_numeric::<i128>();
        is_numeric::<isize>();
        is_numeric::<f32>();
        is_numeric::<f64>();
    }

    #[test]
    fn test_zero_detection() {
        assert!(0i32.is_zero());
        assert!((-0.0f64).is_zero());
        assert!(!1u8.is_zero());
    }
}
