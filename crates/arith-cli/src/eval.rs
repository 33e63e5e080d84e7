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

use crate::cli::Command;
use arith_core::num::numeric::Numeric;
use arith_ops::{ArithmeticError, DEFAULT_DIVIDEND, DEFAULT_DIVISOR};
use std::{fmt, str::FromStr};
use tracing::{debug, trace};

/// A number given on the command line.
///
/// Tokens that parse as `i64` become `Int`; anything else that parses as
/// `f64` (including `inf` and `NaN`) becomes `Float`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Int(i64),
    Float(f64),
}

impl Operand {
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            Self::Float(_) => None,
        }
    }
}

/// Details about a token that is not a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperandError {
    /// The token that failed to parse.
    pub token: String,
}

impl fmt::Display for ParseOperandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a number", self.token)
    }
}

impl std::error::Error for ParseOperandError {}

impl FromStr for Operand {
    type Err = ParseOperandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Self::Int(v));
        }
        s.parse::<f64>()
            .map(Self::Float)
            .map_err(|_| ParseOperandError {
                token: s.to_string(),
            })
    }
}

/// The result of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

/// The operation of a command with its operands as `T`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Expr<T> {
    Add(T, T),
    Square(T),
    Divide(T, T),
    DivideDefault,
}

impl Expr<Operand> {
    fn from_command(command: &Command) -> Self {
        match *command {
            Command::Add { a, b } => Self::Add(a, b),
            Command::Square { x } => Self::Square(x),
            Command::Divide {
                a: Some(a),
                b: Some(b),
            } => Self::Divide(a, b),
            Command::Divide { .. } => Self::DivideDefault,
        }
    }
}

impl<T> Expr<T> {
    fn map<U>(self, mut f: impl FnMut(T) -> U) -> Expr<U> {
        match self {
            Self::Add(a, b) => Expr::Add(f(a), f(b)),
            Self::Square(x) => Expr::Square(f(x)),
            Self::Divide(a, b) => Expr::Divide(f(a), f(b)),
            Self::DivideDefault => Expr::DivideDefault,
        }
    }
}

impl<T> Expr<Option<T>> {
    /// `None` if any operand is `None`.
    fn transpose(self) -> Option<Expr<T>> {
        Some(match self {
            Self::Add(a, b) => Expr::Add(a?, b?),
            Self::Square(x) => Expr::Square(x?),
            Self::Divide(a, b) => Expr::Divide(a?, b?),
            Self::DivideDefault => Expr::DivideDefault,
        })
    }
}

impl<T: Numeric> Expr<T> {
    /// Evaluates with overflow checking. `DivideDefault` divides `dividend`
    /// by `divisor`.
    fn eval(self, dividend: T, divisor: T) -> Result<T, ArithmeticError> {
        match self {
            Self::Add(a, b) => arith_ops::checked_add(a, b),
            Self::Square(x) => arith_ops::checked_square(x),
            Self::Divide(a, b) => arith_ops::divide(a, b),
            Self::DivideDefault => arith_ops::divide(dividend, divisor),
        }
    }
}

/// Evaluates `command`.
///
/// Evaluation is always checked, so overflow surfaces as an error in both
/// integer and float mode. It uses `i64` when every operand is an integer
/// and `force_float` is not set, and `f64` otherwise.
pub fn evaluate(command: &Command, force_float: bool) -> Result<Value, ArithmeticError> {
    let expr = Expr::from_command(command);
    let ints = if force_float {
        None
    } else {
        expr.map(|op| op.as_i64()).transpose()
    };
    debug!(
        operation = command.name(),
        operands = ?command.operands(),
        float = ints.is_none(),
        "Evaluating"
    );

    let value = match ints {
        Some(ints) => Value::Int(ints.eval(DEFAULT_DIVIDEND, DEFAULT_DIVISOR)?),
        None => Value::Float(
            expr.map(|op| op.as_f64())
                .eval(DEFAULT_DIVIDEND as f64, DEFAULT_DIVISOR as f64)?,
        ),
    };

    trace!(%value, "Evaluated");
    Ok(value)
}
