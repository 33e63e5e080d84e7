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

use core::ops::{Add, Mul};

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

// Clamp a finite-operand overflow to the representable range. Infinite or
// NaN inputs are left to IEEE 754.
macro_rules! saturating_impl_float_val {
    ($trait_name:ident, $method:ident, $t:ty, $op:tt) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                let r = self $op v;
                if self.is_finite() && v.is_finite() && r.is_infinite() {
                    if r.is_sign_positive() {
                        <$t>::MAX
                    } else {
                        <$t>::MIN
                    }
                } else {
                    r
                }
            }
        }
    };
}

/// Saturating addition by value (no references).
///
/// This trait provides a by-value API for saturating addition, clamping the
/// result to the numeric bounds of the type instead of overflowing. For
/// integers it mirrors the inherent `saturating_add`; for floats a sum of
/// finite operands that would round to infinity is clamped to `MAX`/`MIN`.
///
/// # Examples
///
/// ```rust
/// # use arith_core::num::ops::saturating_arithmetic::SaturatingAddVal;
///
/// let a: u8 = 250;
/// let b: u8 = 10;
/// assert_eq!(a.saturating_add_val(b), 255); // Clamps at u8::MAX
///
/// let m: i8 = -120;
/// let n: i8 = -20;
/// assert_eq!(m.saturating_add_val(n), -128); // Clamps at i8::MIN
///
/// assert_eq!(f64::MAX.saturating_add_val(f64::MAX), f64::MAX);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use arith_core::num::ops::saturating_arithmetic::SaturatingMulVal;
///
/// let x: i8 = 30;
/// let y: i8 = 10;
/// assert_eq!(x.saturating_mul_val(y), 127); // 300 -> clamps at i8::MAX
///
/// let m: i8 = -30;
/// let n: i8 = 10;
/// assert_eq!(m.saturating_mul_val(n), -128); // -300 -> clamps at i8::MIN
/// ```
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self) -> Self;
}

macro_rules! saturating_impl_int {
    ($($t:ty),*) => {
        $(
            saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, $t, saturating_add);
            saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, $t, saturating_mul);
        )*
    };
}

saturating_impl_int!(u8, u16, u32, u64, usize, u128);
saturating_impl_int!(i8, i16, i32, i64, isize, i128);

saturating_impl_float_val!(SaturatingAddVal, saturating_add_val, f32, +);
saturating_impl_float_val!(SaturatingAddVal, saturating_add_val, f64, +);
saturating_impl_float_val!(SaturatingMulVal, saturating_mul_val, f32, *);
saturating_impl_float_val!(SaturatingMulVal, saturating_mul_val, f64, *);
