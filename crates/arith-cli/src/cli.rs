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

use crate::eval::Operand;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "arith")]
#[command(about = "Evaluate a single arithmetic operation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Evaluate in floating point even if all operands are integers
    #[arg(short, long, global = true)]
    pub float: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add two numbers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: Operand,
        #[arg(allow_negative_numbers = true)]
        b: Operand,
    },

    /// Multiply a number by itself
    Square {
        #[arg(allow_negative_numbers = true)]
        x: Operand,
    },

    /// Divide A by B (2000 by 100 when no operands are given)
    Divide {
        #[arg(requires = "b", allow_negative_numbers = true)]
        a: Option<Operand>,
        #[arg(allow_negative_numbers = true)]
        b: Option<Operand>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Square { .. } => "square",
            Self::Divide { .. } => "divide",
        }
    }

    /// The operands given on the command line, in order.
    pub fn operands(&self) -> Vec<Operand> {
        match self {
            Self::Add { a, b } => vec![*a, *b],
            Self::Square { x } => vec![*x],
            Self::Divide { a, b } => a.iter().chain(b.iter()).copied().collect(),
        }
    }
}
