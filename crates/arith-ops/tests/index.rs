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

//! The `index` suite: existence and output of `divide`, `square` and `add`
//! for the fixed seed inputs.

use arith_ops::{add, divide, divide_default, square, ArithmeticError};

#[test]
fn has_a_function_called_divide() {
    let _: fn() -> i64 = divide_default;
    let _: fn(i64, i64) -> Result<i64, ArithmeticError> = divide::<i64>;
}

#[test]
fn divide_divides_2000_by_100() {
    assert_eq!(divide_default(), 20);
    assert_eq!(divide(2000, 100), Ok(20));
}

#[test]
fn has_a_function_called_square() {
    let _: fn(i64) -> i64 = square::<i64>;
}

#[test]
fn square_multiplies_a_number_times_itself() {
    let x = 2;
    assert_eq!(square(x), 4);
}

#[test]
fn has_a_function_called_add() {
    let _: fn(i64, i64) -> i64 = add::<i64>;
}

#[test]
fn add_takes_two_parameters_and_adds_them_together() {
    let a = 3;
    let b = 4;
    assert_eq!(add(a, b), a + b);
    assert_eq!(add(a, b), 7);
}

#[test]
fn zero_seeds() {
    assert_eq!(add(0, 0), 0);
    assert_eq!(square(0), 0);
}

#[test]
fn divide_by_zero_is_an_error() {
    assert_eq!(divide(2000, 0), Err(ArithmeticError::DivisionByZero));
}
