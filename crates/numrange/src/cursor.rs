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

//! # Cursors
//!
//! A range hands out two cursors: one positioned at `start` and a sentinel
//! positioned at `stop`. The first is read and advanced; the sentinel is only
//! ever the right-hand side of the termination test. `RangeIter` drives such a
//! pair and is what a `for` loop over a range actually consumes.
//!
//! ```rust
//! use numrange::cursor::Cursor;
//!
//! let r = numrange::range_between(3, 6);
//! let (mut cur, end) = (r.begin(), r.end());
//! let mut seen = Vec::new();
//! while cur.is_not_at_end(&end) {
//!     seen.push(*cur.current());
//!     cur.advance();
//! }
//! assert_eq!(seen, vec![3, 4, 5]);
//! ```

use numrange_core::num::element::RangeElement;
use std::iter::FusedIterator;

/// Single-pass iteration state over a numeric progression.
///
/// A cursor owns its value and keeps no reference to the range it came from,
/// so any number of cursors from one range can be advanced independently.
pub trait Cursor {
    /// The element type produced by the cursor.
    type Item: RangeElement;

    /// Returns the current value.
    ///
    /// Only meaningful while the cursor has not reached its sentinel.
    fn current(&self) -> &Self::Item;

    /// Moves the cursor to the next value in place.
    fn advance(&mut self);

    /// Returns `true` if the cursor has reached the end marked by `sentinel`.
    fn is_at_end(&self, sentinel: &Self) -> bool;

    /// Negation of `is_at_end`.
    #[inline(always)]
    fn is_not_at_end(&self, sentinel: &Self) -> bool {
        !self.is_at_end(sentinel)
    }
}

/// An iterator driving a cursor until it meets its sentinel.
///
/// Once the termination test fires the cursor is never advanced again, which
/// makes the iterator fused.
///
/// # Examples
///
/// ```rust
/// # use numrange::cursor::RangeIter;
///
/// let r = numrange::range(4u8);
/// let it = RangeIter::new(r.begin(), r.end());
/// assert_eq!(it.collect::<Vec<_>>(), vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct RangeIter<C> {
    cursor: C,
    sentinel: C,
}

impl<C> RangeIter<C>
where
    C: Cursor,
{
    /// Creates an iterator from a begin cursor and its sentinel.
    #[inline]
    pub fn new(cursor: C, sentinel: C) -> Self {
        Self { cursor, sentinel }
    }

    /// Returns the cursor at the position of the next value.
    #[inline]
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Returns the sentinel cursor.
    #[inline]
    pub fn sentinel(&self) -> &C {
        &self.sentinel
    }

    /// Returns `true` if the iterator will not yield any further values.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor.is_at_end(&self.sentinel)
    }
}

impl<C> Iterator for RangeIter<C>
where
    C: Cursor,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_at_end(&self.sentinel) {
            return None;
        }
        let value = *self.cursor.current();
        self.cursor.advance();
        Some(value)
    }
}

impl<C> FusedIterator for RangeIter<C> where C: Cursor {}
