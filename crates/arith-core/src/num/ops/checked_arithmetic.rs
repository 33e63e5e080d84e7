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

use core::ops::{Add, Div, Mul};

/// A trait for types that support checked addition by value (no references).
///
/// For integers this mirrors the primitive `checked_add`. For floats the
/// addition fails only when two finite operands produce an infinite sum;
/// infinities and `NaN` that are already present pass through unchanged.
///
/// # Examples
///
/// ```rust
/// # use arith_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: u8 = 200;
/// let b: u8 = 100;
/// assert_eq!(a.checked_add_val(b), None); // Overflow occurs
/// let c: u8 = 50;
/// assert_eq!(a.checked_add_val(c), Some(250)); // No overflow
///
/// assert_eq!(f64::MAX.checked_add_val(f64::MAX), None);
/// assert_eq!(1.5f64.checked_add_val(2.0), Some(3.5));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use arith_core::num::ops::checked_arithmetic::CheckedMulVal;
///
/// let a: u8 = 20;
/// let b: u8 = 10;
/// assert_eq!(a.checked_mul_val(b), Some(200)); // No overflow
/// let c: u8 = 20;
/// assert_eq!(a.checked_mul_val(c), None); // Overflow occurs (20*20 = 400 > 255)
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked division by value (no references).
///
/// Integer division truncates toward zero and fails on a zero divisor as
/// well as on `MIN / -1` for signed types. Float division fails on a zero
/// divisor of either sign, and when a finite dividend produces an infinite
/// quotient. A `NaN` operand yields `Some(NaN)`.
///
/// # Examples
///
/// ```rust
/// # use arith_core::num::ops::checked_arithmetic::CheckedDivVal;
///
/// let a: u8 = 100;
/// let b: u8 = 0;
/// assert_eq!(a.checked_div_val(b), None); // Division by zero
/// let c: u8 = 4;
/// assert_eq!(a.checked_div_val(c), Some(25)); // No division by zero
///
/// assert_eq!(1.0f64.checked_div_val(-0.0), None);
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` if division by zero
    /// or overflow occurs.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! checked_impl_int {
    ($($t:ty),*) => {
        $(
            checked_impl_val!(CheckedAddVal, checked_add_val, $t, checked_add);
            checked_impl_val!(CheckedMulVal, checked_mul_val, $t, checked_mul);
            checked_impl_val!(CheckedDivVal, checked_div_val, $t, checked_div);
        )*
    };
}

checked_impl_int!(u8, u16, u32, u64, usize, u128);
checked_impl_int!(i8, i16, i32, i64, isize, i128);

// A float result is rejected only if finite operands produced an infinity;
// inputs that are already infinite or NaN follow IEEE 754.
macro_rules! checked_impl_float_val {
    ($trait_name:ident, $method:ident, $t:ty, $op:tt) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                let r = self $op v;
                if self.is_finite() && v.is_finite() && r.is_infinite() {
                    None
                } else {
                    Some(r)
                }
            }
        }
    };
}

macro_rules! checked_impl_float {
    ($($t:ty),*) => {
        $(
            checked_impl_float_val!(CheckedAddVal, checked_add_val, $t, +);
            checked_impl_float_val!(CheckedMulVal, checked_mul_val, $t, *);

            impl CheckedDivVal for $t {
                #[inline(always)]
                fn checked_div_val(self, v: $t) -> Option<$t> {
                    if v == 0.0 {
                        return None;
                    }
                    let r = self / v;
                    if self.is_finite() && r.is_infinite() {
                        None
                    } else {
                        Some(r)
                    }
                }
            }
        )*
    };
}

checked_impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_add_val<T: CheckedAddVal>(a: T, b: T) -> Option<T> {
        a.checked_add_val(b)
    }
    fn checked_mul_val<T: CheckedMulVal>(a: T, b: T) -> Option<T> {
        a.checked_mul_val(b)
    }
    fn checked_div_val<T: CheckedDivVal>(a: T, b: T) -> Option<T> {
        a.checked_div_val(b)
    }

    #[test]
    fn test_checked_add_val_int() {
        assert_eq!(checked_add_val(3i32, 4i32), Some(7));
        assert_eq!(checked_add_val(255u8, 1u8), None);
        assert_eq!(checked_add_val(i64::MIN, -1i64), None);
        assert_eq!(checked_add_val(0usize, 0usize), Some(0));
    }

    #[test]
    fn test_checked_add_val_float() {
        assert_eq!(checked_add_val(3.0f64, 4.0f64), Some(7.0));
        assert_eq!(checked_add_val(f32::MAX, f32::MAX), None);
        assert_eq!(checked_add_val(-f64::MAX, -f64::MAX), None);
        // Already-infinite input is not an overflow.
        assert_eq!(checked_add_val(f64::INFINITY, 1.0), Some(f64::INFINITY));
        assert!(checked_add_val(f64::NAN, 1.0).unwrap().is_nan());
    }

    #[test]
    fn test_checked_mul_val() {
        assert_eq!(checked_mul_val(2i64, 2i64), Some(4));
        assert_eq!(checked_mul_val(16u8, 16u8), None);
        assert_eq!(checked_mul_val(i128::MAX, 2i128), None);
        assert_eq!(checked_mul_val(1e200f64, 1e200f64), None);
        assert_eq!(checked_mul_val(-1.5f32, 2.0f32), Some(-3.0));
    }

    #[test]
    fn test_checked_div_val_int() {
        assert_eq!(checked_div_val(2000i64, 100i64), Some(20));
        assert_eq!(checked_div_val(7i32, 2i32), Some(3));
        assert_eq!(checked_div_val(-7i32, 2i32), Some(-3));
        assert_eq!(checked_div_val(1u32, 0u32), None);
        assert_eq!(checked_div_val(i32::MIN, -1i32), None);
    }

    #[test]
    fn test_checked_div_val_float() {
        assert_eq!(checked_div_val(2000.0f64, 100.0f64), Some(20.0));
        assert_eq!(checked_div_val(7.0f32, 2.0f32), Some(3.5));
        assert_eq!(checked_div_val(1.0f64, 0.0f64), None);
        assert_eq!(checked_div_val(1.0f64, -0.0f64), None);
        assert_eq!(checked_div_val(0.0f64, 0.0f64), None);
        assert_eq!(checked_div_val(f64::MAX, 0.5f64), None);
        assert_eq!(checked_div_val(f64::INFINITY, 2.0f64), Some(f64::INFINITY));
    }

    #[test]
    fn test_checked_float_nan_is_not_overflow() {
        assert!(checked_div_val(1.0f64, f64::NAN).unwrap().is_nan());
        assert!(checked_div_val(f32::NAN, 2.0f32).unwrap().is_nan());
        assert!(checked_add_val(1.0f64, f64::NAN).unwrap().is_nan());
        assert!(checked_mul_val(f64::NAN, 3.0f64).unwrap().is_nan());
    }
}
