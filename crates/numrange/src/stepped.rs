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

//! # Stepped Ranges
//!
//! `SteppedRange<T>` is the half-open progression `start, start + step,
//! start + 2 * step, ...` that stops at the first value reaching or passing
//! `stop`. The step is converted to `T` with `as`-cast semantics and added on
//! every advance; its sign alone decides which way the cursor moves.
//!
//! The end test is always the directional inequality fixed at construction
//! (`current >= stop` ascending, `current <= stop` descending), so a step that
//! overshoots `stop` still terminates. A step whose sign disagrees with the
//! direction, or a zero step on a non-empty range, never terminates.
//! `SteppedRange::new` accepts such input as is; `SteppedRange::try_new`
//! rejects it.

use crate::{
    cursor::{Cursor, RangeIter},
    error::RangeError,
};
use num_traits::AsPrimitive;
use numrange_core::{
    direction::Direction,
    num::element::{StepType, SteppedElement},
};

/// A half-open range `[start, stop)` advancing by an explicit step.
///
/// # Examples
///
/// ```rust
/// # use numrange::stepped::SteppedRange;
///
/// let r = SteppedRange::new(0, 10, 3);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
///
/// // An unsigned range walking down by a wrapped negative step.
/// let r = SteppedRange::new(8u32, 0, -2);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![8, 6, 4, 2]);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct SteppedRange<T>
where
    T: SteppedElement,
{
    start: T,
    stop: T,
    step: T,
    direction: Direction,
}

/// The cursor of a `SteppedRange`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteppedCursor<T>
where
    T: SteppedElement,
{
    current: T,
    step: T,
    direction: Direction,
}

impl<T> SteppedCursor<T>
where
    T: SteppedElement,
{
    #[inline(always)]
    fn new(current: T, step: T, direction: Direction) -> Self {
        Self {
            current,
            step,
            direction,
        }
    }

    /// Returns the step added on every advance.
    #[inline(always)]
    pub const fn step(&self) -> T {
        self.step
    }

    /// Returns the direction the cursor was created with.
    #[inline(always)]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl<T> Cursor for SteppedCursor<T>
where
    T: SteppedElement,
{
    type Item = T;

    #[inline(always)]
    fn current(&self) -> &T {
        &self.current
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.current = self.current.add_step(self.step);
    }

    #[inline(always)]
    fn is_at_end(&self, sentinel: &Self) -> bool {
        self.direction.has_reached(&self.current, &sentinel.current)
    }
}

impl<T> SteppedRange<T>
where
    T: SteppedElement,
{
    /// Creates the range `[start, stop)` advancing by `step`.
    ///
    /// No validation takes place. See the module documentation for the
    /// inputs that never terminate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numrange::stepped::SteppedRange;
    /// # use numrange_core::direction::Direction;
    ///
    /// let r = SteppedRange::new(0i32, 10, 2.7f64);
    /// assert_eq!(r.step(), 2);
    /// assert_eq!(r.direction(), Direction::Ascending);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
    /// ```
    #[inline]
    pub fn new<U>(start: T, stop: T, step: U) -> Self
    where
        U: StepType + AsPrimitive<T>,
    {
        Self {
            start,
            stop,
            step: step.as_(),
            direction: Direction::from_bounds(&start, &stop),
        }
    }

    /// Creates the range `[start, stop)` advancing by `step`, rejecting
    /// inputs whose progression would never terminate.
    ///
    /// # Errors
    ///
    /// - `RangeError::NonFiniteBound` if a bound or the converted step is NaN
    ///   or infinite.
    /// - `RangeError::ZeroStep` if the range is non-empty and one step from
    ///   `start` leaves the value unchanged.
    /// - `RangeError::StepAgainstDirection` if one step from `start` moves
    ///   away from `stop`. This includes an integer step that overflows.
    /// - `RangeError::StopUnreachable` if the first step moves toward `stop`
    ///   but a later one wraps around the integer type, or a float step falls
    ///   below the precision of the values between the bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numrange::{error::RangeError, stepped::SteppedRange};
    /// # use numrange_core::direction::Direction;
    ///
    /// assert!(SteppedRange::try_new(0, 10, 3).is_ok());
    /// assert!(SteppedRange::try_new(8u32, 0, -2).is_ok());
    /// assert_eq!(SteppedRange::try_new(0, 10, 0), Err(RangeError::ZeroStep));
    /// assert_eq!(
    ///     SteppedRange::try_new(0, 10, -1),
    ///     Err(RangeError::StepAgainstDirection { direction: Direction::Ascending })
    /// );
    /// ```
    pub fn try_new<U>(start: T, stop: T, step: U) -> Result<Self, RangeError>
    where
        U: StepType + AsPrimitive<T>,
    {
        let range = Self::new(start, stop, step);
        range.validate()?;
        Ok(range)
    }

    fn validate(&self) -> Result<(), RangeError> {
        if !(self.start.is_finite() && self.stop.is_finite() && self.step.is_finite()) {
            tracing::debug!(
                start = %self.start,
                stop = %self.stop,
                step = %self.step,
                "rejected range with non-finite bound or step"
            );
            return Err(RangeError::NonFiniteBound);
        }

        if self.start == self.stop {
            return Ok(());
        }

        let next = self.start.add_step(self.step);
        if next == self.start {
            tracing::debug!(
                start = %self.start,
                stop = %self.stop,
                step = %self.step,
                "rejected range whose step does not move"
            );
            return Err(RangeError::ZeroStep);
        }

        if !self.direction.moves_toward(&self.start, &next) {
            tracing::debug!(
                start = %self.start,
                stop = %self.stop,
                step = %self.step,
                direction = %self.direction,
                "rejected range whose step moves away from stop"
            );
            return Err(RangeError::StepAgainstDirection {
                direction: self.direction,
            });
        }

        if !self.start.reaches(self.stop, self.step, self.direction) {
            tracing::debug!(
                start = %self.start,
                stop = %self.stop,
                step = %self.step,
                "rejected range whose step cannot reach stop"
            );
            return Err(RangeError::StopUnreachable);
        }

        Ok(())
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive stop bound.
    #[inline]
    pub const fn stop(&self) -> T {
        self.stop
    }

    /// Returns the step, already converted to the element type.
    #[inline]
    pub const fn step(&self) -> T {
        self.step
    }

    /// Returns the direction fixed at construction.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns a cursor positioned at `start`.
    #[inline]
    pub fn begin(&self) -> SteppedCursor<T> {
        SteppedCursor::new(self.start, self.step, self.direction)
    }

    /// Returns the sentinel cursor positioned at `stop`.
    ///
    /// The sentinel is only meant for `Cursor::is_at_end`; it is never read
    /// or advanced during iteration.
    #[inline]
    pub fn end(&self) -> SteppedCursor<T> {
        SteppedCursor::new(self.stop, self.step, self.direction)
    }

    /// Returns an iterator over the values of the range.
    ///
    /// Every call starts a fresh pass from `start`.
    #[inline]
    pub fn iter(&self) -> RangeIter<SteppedCursor<T>> {
        RangeIter::new(self.begin(), self.end())
    }
}

impl<T> std::fmt::Debug for SteppedRange<T>
where
    T: SteppedElement,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteppedRange")
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("step", &self.step)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<T> std::fmt::Display for SteppedRange<T>
where
    T: SteppedElement,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "range({}, {}, {})", self.start, self.stop, self.step)
    }
}

impl<T> IntoIterator for SteppedRange<T>
where
    T: SteppedElement,
{
    type Item = T;
    type IntoIter = RangeIter<SteppedCursor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &SteppedRange<T>
where
    T: SteppedElement,
{
    type Item = T;
    type IntoIter = RangeIter<SteppedCursor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
