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

//! # numrange
//!
//! Lazy, Python-style numeric ranges. A range is built from a stop value, a
//! start/stop pair, or a start/stop/step triple and produces its values one at
//! a time through a pair of cursors, without materializing a container.
//!
//! ```rust
//! use numrange::range;
//!
//! let mut seen = Vec::new();
//! for i in range!(8) {
//!     seen.push(i);
//! }
//! assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 6, 7]);
//!
//! assert_eq!(range!(-5).into_iter().collect::<Vec<_>>(), vec![0, -1, -2, -3, -4]);
//! assert_eq!(range!(23, 17).into_iter().collect::<Vec<_>>(), vec![23, 22, 21, 20, 19, 18]);
//! assert_eq!(range!(0, 10, 4).into_iter().collect::<Vec<_>>(), vec![0, 4, 8]);
//! ```
//!
//! ## Modules
//!
//! - `unit`: `UnitStepRange<T>`, moving by exactly one per step. Integer and
//!   character ranges end on an exact match with `stop`; float ranges end on
//!   the first value reaching or passing it.
//! - `stepped`: `SteppedRange<T>`, moving by an explicit step and always
//!   ending on the directional inequality. Offers checked construction via
//!   `SteppedRange::try_new`.
//! - `cursor`: The `Cursor` trait shared by both cursor types and the
//!   `RangeIter` adapter that lets ranges drive `for` loops.
//! - `error`: `RangeError`, returned by checked construction.
//!
//! ## Element Types
//!
//! Elements may be any integer or floating point primitive, or `char` for
//! unit steps. Steps may be any integer or floating point primitive and are
//! converted to the element type with `as`-cast semantics. Everything else is
//! rejected by the compiler:
//!
//! ```compile_fail
//! let _ = numrange::range(true);
//! ```
//!
//! ```compile_fail
//! let _ = numrange::range_step('a', 'z', 2);
//! ```
//!
//! ```compile_fail
//! let _ = numrange::range_step(0, 10, 'x');
//! ```
//!
//! ## Direction
//!
//! The direction is fixed once from the bounds: ascending if `start < stop`,
//! descending otherwise. It selects the end test, never the arithmetic. A
//! stepped range whose step sign contradicts its direction runs away from
//! `stop` and does not terminate; use `SteppedRange::try_new` to reject it.

pub mod cursor;
pub mod error;
pub mod stepped;
pub mod unit;

pub use numrange_core::{
    direction::Direction,
    num::element::{ElementKind, RangeElement, StepType, SteppedElement},
};

use num_traits::AsPrimitive;
use stepped::SteppedRange;
use unit::UnitStepRange;

/// Returns the unit-step range `[0, stop)`.
///
/// A positive `stop` counts up from zero, a negative one counts down, and
/// zero is empty.
///
/// # Examples
///
/// ```rust
/// assert_eq!(numrange::range(4).into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
/// assert_eq!(numrange::range(-3).into_iter().collect::<Vec<_>>(), vec![0, -1, -2]);
/// assert_eq!(numrange::range(0).into_iter().count(), 0);
/// assert_eq!(numrange::range(2.5).into_iter().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
/// ```
#[inline]
pub fn range<T>(stop: T) -> UnitStepRange<T>
where
    T: RangeElement,
{
    UnitStepRange::new(T::ZERO, stop)
}

/// Returns the unit-step range `[start, stop)`.
///
/// # Examples
///
/// ```rust
/// let v: Vec<_> = numrange::range_between(10, 17).into_iter().collect();
/// assert_eq!(v, vec![10, 11, 12, 13, 14, 15, 16]);
///
/// let v: Vec<_> = numrange::range_between('x', 'u').into_iter().collect();
/// assert_eq!(v, vec!['x', 'w', 'v']);
/// ```
#[inline]
pub fn range_between<T>(start: T, stop: T) -> UnitStepRange<T>
where
    T: RangeElement,
{
    UnitStepRange::new(start, stop)
}

/// Returns the range `[start, stop)` advancing by `step`.
///
/// The step is converted to `T` with `as`-cast semantics and its sign must
/// agree with the direction implied by the bounds for the range to end.
///
/// # Examples
///
/// ```rust
/// let v: Vec<_> = numrange::range_step(8u32, 0, -2).into_iter().collect();
/// assert_eq!(v, vec![8, 6, 4, 2]);
///
/// let v: Vec<f64> = numrange::range_step(0.0, 1.0, 0.25).into_iter().collect();
/// assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75]);
/// ```
#[inline]
pub fn range_step<T, U>(start: T, stop: T, step: U) -> SteppedRange<T>
where
    T: SteppedElement,
    U: StepType + AsPrimitive<T>,
{
    SteppedRange::new(start, stop, step)
}

/// Builds a range from one, two or three arguments.
///
/// - `range!(stop)` expands to `range(stop)`.
/// - `range!(start, stop)` expands to `range_between(start, stop)`.
/// - `range!(start, stop, step)` expands to `range_step(start, stop, step)`.
///
/// # Examples
///
/// ```rust
/// use numrange::range;
///
/// let total: i32 = range!(1, 5).into_iter().sum();
/// assert_eq!(total, 10);
///
/// let evens: Vec<u64> = range!(0u64, 7, 2).into_iter().collect();
/// assert_eq!(evens, vec![0, 2, 4, 6]);
/// ```
#[macro_export]
macro_rules! range {
    ($stop:expr $(,)?) => {
        $crate::range($stop)
    };
    ($start:expr, $stop:expr $(,)?) => {
        $crate::range_between($start, $stop)
    };
    ($start:expr, $stop:expr, $step:expr $(,)?) => {
        $crate::range_step($start, $stop, $step)
    };
}
