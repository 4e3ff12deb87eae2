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

//! Errors reported by checked range construction.

use numrange_core::direction::Direction;
use std::fmt::Display;

/// The error type for `SteppedRange::try_new`.
///
/// Unchecked construction never fails; these are the inputs it would turn
/// into an unbounded or meaningless progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// A bound or the converted step is NaN or infinite.
    NonFiniteBound,
    /// One step from `start` leaves the value unchanged.
    ZeroStep,
    /// One step from `start` moves away from `stop`.
    StepAgainstDirection {
        /// The direction implied by the bounds.
        direction: Direction,
    },
    /// The first step moves toward `stop`, but a later one wraps around the
    /// integer type or no longer changes a float value before `stop`.
    StopUnreachable,
}

impl Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteBound => write!(f, "Range bounds and step must be finite"),
            Self::ZeroStep => write!(f, "Range step must move the value away from start"),
            Self::StepAgainstDirection { direction } => write!(
                f,
                "Range step moves away from stop in a {} range",
                direction
            ),
            Self::StopUnreachable => write!(
                f,
                "Range step cannot reach stop without wrapping or losing precision"
            ),
        }
    }
}

impl std::error::Error for RangeError {}
