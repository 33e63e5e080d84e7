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

use crate::status::ArithFfiStatus;
use arith_ops::ArithmeticError;

/// Panics with a message naming `fn_name` if `out` is null.
///
/// Called from `extern "C"` functions, where the panic aborts the process.
#[inline]
fn assert_out_non_null<T>(out: *const T, fn_name: &str) {
    assert!(!out.is_null(), "called `{}` with null pointer", fn_name);
}

/// Writes `result` through `out` on success and converts it into a status.
///
/// # Safety
///
/// `out` must be non-null and valid for a write of `T`.
#[inline]
unsafe fn write_result<T>(result: Result<T, ArithmeticError>, out: *mut T) -> ArithFfiStatus {
    match result {
        Ok(value) => {
            *out = value;
            ArithFfiStatus::Ok
        }
        Err(err) => ArithFfiStatus::from(&err),
    }
}

/// Adds two `i64` values with overflow checking.
///
/// # Panics
///
/// This function aborts the process if `out` is a null pointer.
///
/// # Safety
///
/// The caller must ensure that `out` points to a valid, writable `i64`.
#[no_mangle]
pub unsafe extern "C" fn arith_add_i64(a: i64, b: i64, out: *mut i64) -> ArithFfiStatus {
    assert_out_non_null(out, "arith_add_i64");

    write_result(arith_ops::checked_add(a, b), out)
}

/// Squares an `i64` value with overflow checking.
///
/// # Panics
///
/// This function aborts the process if `out` is a null pointer.
///
/// # Safety
///
/// The caller must ensure that `out` points to a valid, writable `i64`.
#[no_mangle]
pub unsafe extern "C" fn arith_square_i64(x: i64, out: *mut i64) -> ArithFfiStatus {
    assert_out_non_null(out, "arith_square_i64");

    write_result(arith_ops::checked_square(x), out)
}

/// Divides `a` by `b`, truncating toward zero.
///
/// Returns `DivisionByZero` if `b == 0` and `Overflow` for `i64::MIN / -1`.
///
/// # Panics
///
/// This function aborts the process if `out` is a null pointer.
///
/// # Safety
///
/// The caller must ensure that `out` points to a valid, writable `i64`.
#[no_mangle]
pub unsafe extern "C" fn arith_divide_i64(a: i64, b: i64, out: *mut i64) -> ArithFfiStatus {
    assert_out_non_null(out, "arith_divide_i64");

    write_result(arith_ops::divide(a, b), out)
}

/// Returns `2000 / 100`.
#[no_mangle]
pub extern "C" fn arith_divide_default_i64() -> i64 {
    arith_ops::divide_default()
}

/// Adds two `f64` values following IEEE 754.
#[no_mangle]
pub extern "C" fn arith_add_f64(a: f64, b: f64) -> f64 {
    arith_ops::add(a, b)
}

/// Squares an `f64` value following IEEE 754.
#[no_mangle]
pub extern "C" fn arith_square_f64(x: f64) -> f64 {
    arith_ops::square(x)
}

/// Divides `a` by `b`.
///
/// Returns `DivisionByZero` if `b` is `0.0` or `-0.0`, and `Overflow` if
/// finite operands produce an infinite quotient.
///
/// # Panics
///
/// This function aborts the process if `out` is a null pointer.
///
/// # Safety
///
/// The caller must ensure that `out` points to a valid, writable `f64`.
#[no_mangle]
pub unsafe extern "C" fn arith_divide_f64(a: f64, b: f64, out: *mut f64) -> ArithFfiStatus {
    assert_out_non_null(out, "arith_divide_f64");

    write_result(arith_ops::divide(a, b), out)
}
