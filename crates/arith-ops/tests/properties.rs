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

//! Algebraic properties of the arithmetic operations.
//!
//! Integer inputs are bounded so that the plain operators cannot overflow;
//! float inputs are restricted to finite values of moderate magnitude.

use arith_ops::{
    add, checked_add, checked_square, divide, saturating_add, saturating_square, square,
    ArithmeticError, Operation,
};
use proptest::prelude::*;

const INT_BOUND: i64 = 1 << 31;

proptest! {
    #[test]
    fn add_matches_operator(a in -INT_BOUND..INT_BOUND, b in -INT_BOUND..INT_BOUND) {
        prop_assert_eq!(add(a, b), a + b);
    }

    #[test]
    fn add_is_commutative(a in -INT_BOUND..INT_BOUND, b in -INT_BOUND..INT_BOUND) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn add_is_commutative_for_floats(a in -1e150f64..1e150, b in -1e150f64..1e150) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn square_matches_operator(x in -INT_BOUND..INT_BOUND) {
        prop_assert_eq!(square(x), x * x);
    }

    #[test]
    fn square_is_non_negative_and_even(x in -INT_BOUND..INT_BOUND) {
        prop_assert!(square(x) >= 0);
        prop_assert_eq!(square(-x), square(x));
    }

    #[test]
    fn square_is_non_negative_for_floats(x in -1e150f64..1e150) {
        prop_assert!(square(x) >= 0.0);
        prop_assert_eq!(square(-x), square(x));
    }

    #[test]
    fn divide_by_zero_always_fails(a in any::<i64>()) {
        prop_assert_eq!(divide(a, 0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn divide_inverts_multiplication(a in -INT_BOUND..INT_BOUND, b in 1i64..INT_BOUND) {
        prop_assert_eq!(divide(a * b, b), Ok(a));
    }

    #[test]
    fn checked_add_agrees_with_primitive(a in any::<i32>(), b in any::<i32>()) {
        let expected = a
            .checked_add(b)
            .ok_or(ArithmeticError::overflow(Operation::Add));
        prop_assert_eq!(checked_add(a, b), expected);
    }

    #[test]
    fn checked_square_agrees_with_primitive(x in any::<i32>()) {
        let expected = x
            .checked_mul(x)
            .ok_or(ArithmeticError::overflow(Operation::Square));
        prop_assert_eq!(checked_square(x), expected);
    }

    #[test]
    fn saturating_forms_agree_with_primitive(a in any::<i16>(), b in any::<i16>()) {
        prop_assert_eq!(saturating_add(a, b), a.saturating_add(b));
        prop_assert_eq!(saturating_square(a), a.saturating_mul(a));
    }
}
