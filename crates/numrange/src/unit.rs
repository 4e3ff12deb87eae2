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

//! # Unit-Step Ranges
//!
//! `UnitStepRange<T>` is the half-open progression `[start, stop)` moving by
//! exactly one per step, upwards or downwards depending on the bounds. The
//! cursor never multiplies or adds a stored step; it increments or decrements,
//! which is exact for integers and avoids accumulating error for floats.
//!
//! The end test depends on the element kind:
//!
//! - integers and `char`: `current == stop`;
//! - floats: `current >= stop` ascending, `current <= stop` descending, so a
//!   fractional distance between the bounds still terminates.

use crate::cursor::{Cursor, RangeIter};
use numrange_core::{direction::Direction, num::element::RangeElement};

/// A half-open range `[start, stop)` advancing by one unit per step.
///
/// # Examples
///
/// ```rust
/// # use numrange::unit::UnitStepRange;
///
/// let up = UnitStepRange::new(10, 17);
/// assert_eq!(up.iter().collect::<Vec<_>>(), vec![10, 11, 12, 13, 14, 15, 16]);
///
/// let down = UnitStepRange::new(23, 17);
/// assert_eq!(down.iter().collect::<Vec<_>>(), vec![23, 22, 21, 20, 19, 18]);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct UnitStepRange<T>
where
    T: RangeElement,
{
    start: T,
    stop: T,
    direction: Direction,
}

/// The cursor of a `UnitStepRange`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCursor<T>
where
    T: RangeElement,
{
    current: T,
    direction: Direction,
}

impl<T> UnitCursor<T>
where
    T: RangeElement,
{
    #[inline(always)]
    fn new(current: T, direction: Direction) -> Self {
        Self { current, direction }
    }

    /// Returns the direction the cursor was created with.
    #[inline(always)]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl<T> Cursor for UnitCursor<T>
where
    T: RangeElement,
{
    type Item = T;

    #[inline(always)]
    fn current(&self) -> &T {
        &self.current
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.current = match self.direction {
            Direction::Ascending => self.current.increment(),
            Direction::Descending => self.current.decrement(),
        };
    }

    #[inline(always)]
    fn is_at_end(&self, sentinel: &Self) -> bool {
        if T::KIND.is_exact() {
            self.current == sentinel.current
        } else {
            self.direction.has_reached(&self.current, &sentinel.current)
        }
    }
}

impl<T> UnitStepRange<T>
where
    T: RangeElement,
{
    /// Creates the range `[start, stop)`.
    ///
    /// The direction is `Ascending` if `start < stop`, otherwise `Descending`.
    /// Equal bounds give an empty range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numrange::unit::UnitStepRange;
    /// # use numrange_core::direction::Direction;
    ///
    /// let r = UnitStepRange::new(5u8, 0);
    /// assert_eq!(r.direction(), Direction::Descending);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    /// ```
    #[inline]
    pub fn new(start: T, stop: T) -> Self {
        Self {
            start,
            stop,
            direction: Direction::from_bounds(&start, &stop),
        }
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

    /// Returns the direction fixed at construction.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns a cursor positioned at `start`.
    #[inline]
    pub fn begin(&self) -> UnitCursor<T> {
        UnitCursor::new(self.start, self.direction)
    }

    /// Returns the sentinel cursor positioned at `stop`.
    ///
    /// The sentinel is only meant for `Cursor::is_at_end`; it is never read
    /// or advanced during iteration.
    #[inline]
    pub fn end(&self) -> UnitCursor<T> {
        UnitCursor::new(self.stop, self.direction)
    }

    /// Returns an iterator over the values of the range.
    ///
    /// Every call starts a fresh pass from `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numrange::unit::UnitStepRange;
    ///
    /// let r = UnitStepRange::new(0.5, 3.0);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0.5, 1.5, 2.5]);
    /// assert_eq!(r.iter().count(), 3);
    /// ```
    #[inline]
    pub fn iter(&self) -> RangeIter<UnitCursor<T>> {
        RangeIter::new(self.begin(), self.end())
    }
}

impl<T> std::fmt::Debug for UnitStepRange<T>
where
    T: RangeElement,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitStepRange")
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<T> std::fmt::Display for UnitStepRange<T>
where
    T: RangeElement,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "range({}, {})", self.start, self.stop)
    }
}

impl<T> IntoIterator for UnitStepRange<T>
where
    T: RangeElement,
{
    type Item = T;
    type IntoIter = RangeIter<UnitCursor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &UnitStepRange<T>
where
    T: RangeElement,
{
    type Item = T;
    type IntoIter = RangeIter<UnitCursor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Converts `start..stop` into a unit-step range.
///
/// Unlike `std::ops::Range`, a reversed pair counts downwards instead of
/// being empty.
impl<T> From<std::ops::Range<T>> for UnitStepRange<T>
where
    T: RangeElement,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn collect<T: RangeElement>(r: UnitStepRange<T>) -> Vec<T> {
        r.into_iter().collect()
    }

    #[test]
    fn test_ascending_integers() {
        assert_eq!(collect(UnitStepRange::new(15, 20)), vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn test_descending_integers() {
        assert_eq!(
            collect(UnitStepRange::new(13, 7)),
            vec![13, 12, 11, 10, 9, 8]
        );
    }

    #[test]
    fn test_equal_bounds_is_empty() {
        let r = UnitStepRange::new(4i64, 4);
        assert_eq!(r.direction(), Direction::Descending);
        assert!(r.iter().next().is_none());
        assert!(collect(UnitStepRange::new(2.5f32, 2.5)).is_empty());
    }

    #[test]
    fn test_ascending_floats() {
        assert_eq!(
            collect(UnitStepRange::new(15.0f32, 20.0)),
            vec![15.0, 16.0, 17.0, 18.0, 19.0]
        );
    }

    #[test]
    fn test_descending_floats() {
        assert_eq!(
            collect(UnitStepRange::new(13.0f32, 7.0)),
            vec![13.0, 12.0, 11.0, 10.0, 9.0, 8.0]
        );
    }

    #[test]
    fn test_float_fractional_distance_terminates() {
        let v = collect(UnitStepRange::new(10.5f64, 13.7));
        assert_eq!(v, vec![10.5, 11.5, 12.5, 13.5]);

        let v = collect(UnitStepRange::new(-1.25f64, -3.5));
        assert_eq!(v, vec![-1.25, -2.25, -3.25]);
    }

    #[test]
    fn test_unsigned_descending_to_zero() {
        assert_eq!(collect(UnitStepRange::new(3u32, 0)), vec![3, 2, 1]);
    }

    #[test]
    fn test_full_width_u8() {
        let v = collect(UnitStepRange::new(0u8, u8::MAX));
        assert_eq!(v.len(), 255);
        assert_eq!(v.last(), Some(&254));
    }

    #[test]
    fn test_char_range() {
        assert_eq!(collect(UnitStepRange::new('a', 'e')), vec!['a', 'b', 'c', 'd']);
        assert_eq!(collect(UnitStepRange::new('d', 'a')), vec!['d', 'c', 'b']);
    }

    #[test]
    fn test_char_range_crosses_surrogates() {
        let v = collect(UnitStepRange::new('\u{D7FE}', '\u{E001}'));
        assert_eq!(v, vec!['\u{D7FE}', '\u{D7FF}', '\u{E000}']);
    }

    #[test]
    fn test_begin_end_cursors() {
        let r = UnitStepRange::new(1, 3);
        let mut cur = r.begin();
        let end = r.end();
        assert_eq!(*cur.current(), 1);
        assert_eq!(*end.current(), 3);
        assert_eq!(cur.direction(), Direction::Ascending);
        assert!(cur.is_not_at_end(&end));
        cur.advance();
        cur.advance();
        assert!(cur.is_at_end(&end));
    }

    #[test]
    fn test_independent_passes() {
        let r = UnitStepRange::new(-3, 3);
        let first: Vec<_> = r.iter().collect();
        let second: Vec<_> = (&r).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![-3, -2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_matches_std_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let b: i32 = rng.random_range(-50..50);
            let e: i32 = rng.random_range(-50..50);
            let got = collect(UnitStepRange::new(b, e));
            let expected: Vec<i32> = if b <= e {
                (b..e).collect()
            } else {
                ((e + 1)..=b).rev().collect()
            };
            assert_eq!(got, expected, "range({b}, {e})");
        }
    }

    #[test]
    fn test_from_std_range() {
        let r: UnitStepRange<u16> = (2..5).into();
        assert_eq!(r.start(), 2);
        assert_eq!(r.stop(), 5);
        assert_eq!(collect(r), vec![2, 3, 4]);

        #[allow(clippy::reversed_empty_ranges)]
        let r: UnitStepRange<i8> = (2..-1).into();
        assert_eq!(collect(r), vec![2, 1, 0]);
    }

    #[test]
    fn test_traits_display_debug() {
        let r = UnitStepRange::new(10, 17);
        assert_eq!(format!("{}", r), "range(10, 17)");
        assert_eq!(
            format!("{:?}", r),
            "UnitStepRange { start: 10, stop: 17, direction: Ascending }"
        );
    }
}
