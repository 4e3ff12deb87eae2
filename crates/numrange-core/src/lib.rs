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

//! # numrange Core
//!
//! Numeric foundations for the `numrange` crate. This crate decides, at the
//! type level, which primitives may appear in a range and how each of them
//! moves by one unit or by an explicit step.
//!
//! ## Modules
//!
//! - `num`: Associated-constant traits (`Zero`, `PlusOne`) and the sealed
//!   element traits (`RangeElement`, `SteppedElement`, `StepType`) that accept
//!   integers, floats and (for unit steps only) `char`, and reject `bool` and
//!   everything else at compile time.
//! - `direction`: The `Direction` of a range, fixed once from its bounds, and
//!   the directional comparisons used to detect the end of a progression.
//!
//! Refer to each module for detailed APIs and examples.

pub mod direction;
pub mod num;
