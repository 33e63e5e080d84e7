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

use arith_ops::ArithmeticError;
use libc::c_char;

/// FFI-compatible status of an arithmetic operation.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithFfiStatus {
    Ok = 0,
    DivisionByZero = 1,
    Overflow = 2,
}

impl ArithFfiStatus {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::DivisionByZero => "DivisionByZero",
            Self::Overflow => "Overflow",
        }
    }

    // NUL-terminated variant of `as_str` with static lifetime.
    #[inline]
    fn as_c_bytes(&self) -> &'static [u8] {
        match self {
            Self::Ok => b"Ok\0",
            Self::DivisionByZero => b"DivisionByZero\0",
            Self::Overflow => b"Overflow\0",
        }
    }
}

impl From<&ArithmeticError> for ArithFfiStatus {
    #[inline]
    fn from(err: &ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => ArithFfiStatus::DivisionByZero,
            ArithmeticError::Overflow { .. } => ArithFfiStatus::Overflow,
        }
    }
}

impl std::fmt::Display for ArithFfiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the name of a status as a static C string.
///
/// The returned pointer is valid for the lifetime of the process and must
/// not be freed.
#[no_mangle]
pub extern "C" fn arith_status_str(status: ArithFfiStatus) -> *const c_char {
    status.as_c_bytes().as_ptr() as *const c_char
}
