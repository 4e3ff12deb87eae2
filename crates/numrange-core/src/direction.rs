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

//! # Range Direction
//!
//! A range travels either upwards or downwards. The direction is derived once
//! from the bounds (`start < stop` ascends, anything else descends) and then
//! governs the end-of-range comparison for the lifetime of the range. It never
//! governs the arithmetic: a stepped range moves by the sign of its step.
//!
//! ```rust
//! use numrange_core::direction::Direction;
//!
//! let dir = Direction::from_bounds(&10, &17);
//! assert_eq!(dir, Direction::Ascending);
//! assert!(!dir.has_reached(&16, &17));
//! assert!(dir.has_reached(&17, &17));
//! assert!(dir.has_reached(&18, &17));
//! ```

/// The direction in which a range travels from its start towards its stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `start < stop`; the range counts upwards.
    Ascending,
    /// `start >= stop` (or the bounds are unordered); the range counts downwards.
    Descending,
}

impl Direction {
    /// Infers the direction of a range from its bounds.
    ///
    /// Equal bounds and unordered bounds (NaN) are `Descending`, since
    /// `start < stop` does not hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numrange_core::direction::Direction;
    ///
    /// assert_eq!(Direction::from_bounds(&0, &8), Direction::Ascending);
    /// assert_eq!(Direction::from_bounds(&0, &-5), Direction::Descending);
    /// assert_eq!(Direction::from_bounds(&3, &3), Direction::Descending);
    /// assert_eq!(Direction::from_bounds(&f64::NAN, &1.0), Direction::Descending);
    /// ```
    #[inline(always)]
    pub fn from_bounds<T>(start: &T, stop: &T) -> Self
    where
        T: PartialOrd,
    {
        if start < stop {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    /// Returns `true` if this is `Direction::Ascending`.
    #[inline(always)]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Direction::Ascending)
    }

    /// Returns `true` if this is `Direction::Descending`.
    #[inline(always)]
    pub const fn is_descending(self) -> bool {
        matches!(self, Direction::Descending)
    }

    /// Returns `true` once `current` has reached or passed `bound` in this
    /// direction (`>=` ascending, `<=` descending).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numrange_core::direction::Direction;
    ///
    /// assert!(Direction::Descending.has_reached(&-16.6, &-15.18));
    /// assert!(!Direction::Descending.has_reached(&-13.6, &-15.18));
    /// ```
    #[inline(always)]
    pub fn has_reached<T>(self, current: &T, bound: &T) -> bool
    where
        T: PartialOrd,
    {
        match self {
            Direction::Ascending => current >= bound,
            Direction::Descending => current <= bound,
        }
    }

    /// Returns `true` if moving from `from` to `to` is strict progress in
    /// this direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numrange_core::direction::Direction;
    ///
    /// assert!(Direction::Ascending.moves_toward(&1, &3));
    /// assert!(!Direction::Ascending.moves_toward(&1, &1));
    /// assert!(Direction::Descending.moves_toward(&8u32, &6u32));
    /// ```
    #[inline(always)]
    pub fn moves_toward<T>(self, from: &T, to: &T) -> bool
    where
        T: PartialOrd,
    {
        match self {
            Direction::Ascending => to > from,
            Direction::Descending => to < from,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}
