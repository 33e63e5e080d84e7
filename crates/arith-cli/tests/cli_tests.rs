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

//! Integration tests for the `arith` binary: stdout, stderr and exit status.

use assert_cmd::Command;
use predicates::prelude::*;

fn arith() -> Command {
    Command::cargo_bin("arith").unwrap()
}

#[test]
fn test_help() {
    arith()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("divide"));
}

#[test]
fn test_add() {
    arith()
        .args(["add", "3", "4"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_add_negative_operands() {
    arith()
        .args(["add", "-3", "-4"])
        .assert()
        .success()
        .stdout("-7\n");
}

#[test]
fn test_square() {
    arith()
        .args(["square", "2"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_divide_without_operands() {
    arith().arg("divide").assert().success().stdout("20\n");
}

#[test]
fn test_divide_with_operands() {
    arith()
        .args(["divide", "2000", "100"])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_float_flag() {
    arith()
        .args(["--float", "divide", "7", "2"])
        .assert()
        .success()
        .stdout("3.5\n");
}

#[test]
fn test_float_operand() {
    arith()
        .args(["square", "1.5"])
        .assert()
        .success()
        .stdout("2.25\n");
}

#[test]
fn test_divide_by_zero_fails() {
    arith()
        .args(["divide", "1", "0"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_overflow_fails() {
    arith()
        .args(["square", "9223372036854775807"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("overflow"));
}

#[test]
fn test_float_overflow_fails() {
    arith()
        .args(["square", "1e200"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("overflow"));
}

#[test]
fn test_usage_error() {
    arith().args(["add", "3"]).assert().code(2);
    arith().args(["square", "two"]).assert().code(2);
}
