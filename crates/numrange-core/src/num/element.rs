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

//! # Range Element Types
//!
//! Sealed traits describing which primitives can be iterated over and which
//! can serve as an explicit step.
//!
//! | Type                         | `RangeElement` | `SteppedElement` | `StepType` |
//! |------------------------------|:--------------:|:----------------:|:----------:|
//! | `i8`..`i128`, `isize`        | yes            | yes              | yes        |
//! | `u8`..`u128`, `usize`        | yes            | yes              | yes        |
//! | `f32`, `f64`                 | yes            | yes              | yes        |
//! | `char`                       | yes            | no               | no         |
//! | `bool`, anything else        | no             | no               | no         |
//!
//! The traits are sealed, so the table above is exhaustive. Violations are
//! rejected by the compiler at the construction site:
//!
//! ```compile_fail
//! # use numrange_core::num::element::RangeElement;
//! fn assert_element<T: RangeElement>() {}
//! assert_element::<bool>();
//! ```
//!
//! ```compile_fail
//! # use numrange_core::num::element::StepType;
//! fn assert_step<T: StepType>() {}
//! assert_step::<char>();
//! ```
//!
//! Integer arithmetic wraps instead of panicking. An unsigned element paired
//! with a wrapped negative step therefore walks downwards, and an ascending
//! progression that overflows re-enters at the bottom of the type.

use crate::{
    direction::Direction,
    num::constants::{PlusOne, Zero},
};
use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// The category of a range element.
///
/// The category selects how a unit-step cursor detects its end: exact
/// categories compare for equality with the stop value, floating point
/// compares with the directional inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A signed or unsigned integer primitive.
    Integer,
    /// A Unicode scalar value (`char`).
    Character,
    /// An IEEE 754 floating point primitive.
    Float,
}

impl ElementKind {
    /// Returns `true` for floating point elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numrange_core::num::element::ElementKind;
    ///
    /// assert!(ElementKind::Float.is_float());
    /// assert!(!ElementKind::Character.is_float());
    /// ```
    #[inline(always)]
    pub const fn is_float(self) -> bool {
        matches!(self, ElementKind::Float)
    }

    /// Returns `true` if unit steps land exactly on every intermediate value.
    #[inline(always)]
    pub const fn is_exact(self) -> bool {
        !self.is_float()
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Integer => write!(f, "integer"),
            ElementKind::Character => write!(f, "character"),
            ElementKind::Float => write!(f, "floating point"),
        }
    }
}

/// A scalar type that can be the element of a range.
///
/// # Examples
///
/// ```rust
/// # use numrange_core::num::element::{ElementKind, RangeElement};
///
/// assert_eq!(<u8 as RangeElement>::KIND, ElementKind::Integer);
/// assert_eq!(7u8.increment(), 8);
/// assert_eq!(0u8.decrement(), 255);
/// assert_eq!('a'.increment(), 'b');
/// ```
pub trait RangeElement:
    Copy + PartialOrd + Zero + Debug + Display + sealed::Sealed + 'static
{
    /// The category of the element type.
    const KIND: ElementKind;

    /// Moves one unit upwards.
    fn increment(self) -> Self;

    /// Moves one unit downwards.
    fn decrement(self) -> Self;

    /// Returns `false` for NaN and infinities; always `true` for exact kinds.
    fn is_finite(self) -> bool;
}

/// A range element that supports advancing by an explicit step.
///
/// `char` is deliberately absent: character ranges only move by one.
pub trait SteppedElement: RangeElement {
    /// Adds `step` to `self`, wrapping on integer overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numrange_core::num::element::SteppedElement;
    ///
    /// assert_eq!(8u32.add_step(u32::MAX - 1), 6);
    /// assert_eq!(1.5f64.add_step(-0.5), 1.0);
    /// ```
    fn add_step(self, step: Self) -> Self;

    /// Returns `true` if repeatedly adding `step` to `self` reaches or passes
    /// `stop` in `direction` without wrapping around or getting stuck.
    ///
    /// Integers check that the last value before `stop` plus the step stays
    /// inside the type. Floats check that the step is more than half an ulp
    /// at the largest magnitude the progression visits, so every addition
    /// changes the value. Equal bounds always reach.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numrange_core::{direction::Direction, num::element::SteppedElement};
    ///
    /// assert!(0u8.reaches(250, 10, Direction::Ascending));
    /// assert!(!0u8.reaches(255, 200, Direction::Ascending));
    /// assert!(8u32.reaches(0, u32::MAX - 1, Direction::Descending));
    /// assert!(!0.0f32.reaches(3.0e7, 1.0, Direction::Ascending));
    /// ```
    fn reaches(self, stop: Self, step: Self, direction: Direction) -> bool;
}

/// A primitive that may be supplied as the step of a range.
///
/// Integers and floating point types qualify; `char` and `bool` do not.
pub trait StepType: Copy + Debug + Display + sealed::Sealed + 'static {}

macro_rules! impl_integer_element {
    ($($t:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl RangeElement for $t {
                const KIND: ElementKind = ElementKind::Integer;

                #[inline(always)]
                fn increment(self) -> Self {
                    self.wrapping_add(<$t as PlusOne>::PLUS_ONE)
                }

                #[inline(always)]
                fn decrement(self) -> Self {
                    self.wrapping_sub(<$t as PlusOne>::PLUS_ONE)
                }

                #[inline(always)]
                fn is_finite(self) -> bool {
                    true
                }
            }

            impl SteppedElement for $t {
                #[inline(always)]
                fn add_step(self, step: Self) -> Self {
                    self.wrapping_add(step)
                }

                fn reaches(self, stop: Self, step: Self, direction: Direction) -> bool {
                    if self == stop {
                        return true;
                    }
                    let next = self.wrapping_add(step);
                    if !direction.moves_toward(&self, &next) {
                        return false;
                    }
                    let bound = match direction {
                        Direction::Ascending => <$t>::MAX,
                        Direction::Descending => <$t>::MIN,
                    };
                    let delta = self.abs_diff(next);
                    let distance = self.abs_diff(stop);
                    let last = (distance - 1) / delta * delta;
                    last.checked_add(delta)
                        .is_some_and(|needed| needed <= self.abs_diff(bound))
                }
            }

            impl StepType for $t {}
        )+
    };
}

macro_rules! impl_float_element {
    ($($t:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl RangeElement for $t {
                const KIND: ElementKind = ElementKind::Float;

                #[inline(always)]
                fn increment(self) -> Self {
                    self + <$t as PlusOne>::PLUS_ONE
                }

                #[inline(always)]
                fn decrement(self) -> Self {
                    self - <$t as PlusOne>::PLUS_ONE
                }

                #[inline(always)]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }

            impl SteppedElement for $t {
                #[inline(always)]
                fn add_step(self, step: Self) -> Self {
                    self + step
                }

                fn reaches(self, stop: Self, step: Self, direction: Direction) -> bool {
                    if self == stop {
                        return true;
                    }
                    if !direction.moves_toward(&self, &(self + step)) {
                        return false;
                    }
                    let magnitude = self.abs().max(stop.abs());
                    let ulp = <$t>::from_bits(magnitude.to_bits() + 1) - magnitude;
                    step.abs() * 2.0 > ulp
                }
            }

            impl StepType for $t {}
        )+
    };
}

impl_integer_element!(i8, i16, i32, i64, i128, isize);
impl_integer_element!(u8, u16, u32, u64, u128, usize);
impl_float_element!(f32, f64);

const LAST_BEFORE_SURROGATES: char = '\u{D7FF}';
const FIRST_AFTER_SURROGATES: char = '\u{E000}';

impl sealed::Sealed for char {}

// Surrogate code points are not `char`s, so the block is skipped in both
// directions. Past `char::MAX` the value wraps to `'\0'` like an integer.
impl RangeElement for char {
    const KIND: ElementKind = ElementKind::Character;

    #[inline]
    fn increment(self) -> Self {
        match self {
            LAST_BEFORE_SURROGATES => FIRST_AFTER_SURROGATES,
            char::MAX => '\0',
            c => char::from_u32(c as u32 + 1).unwrap_or('\0'),
        }
    }

    #[inline]
    fn decrement(self) -> Self {
        match self {
            FIRST_AFTER_SURROGATES => LAST_BEFORE_SURROGATES,
            '\0' => char::MAX,
            c => char::from_u32(c as u32 - 1).unwrap_or(char::MAX),
        }
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn assert_stepped<T: SteppedElement>() {}
    fn assert_step_type<T: StepType>() {}

    #[test]
    fn test_kinds() {
        assert_eq!(<i32 as RangeElement>::KIND, ElementKind::Integer);
        assert_eq!(<usize as RangeElement>::KIND, ElementKind::Integer);
        assert_eq!(<f32 as RangeElement>::KIND, ElementKind::Float);
        assert_eq!(<char as RangeElement>::KIND, ElementKind::Character);
        assert!(ElementKind::Integer.is_exact());
        assert!(ElementKind::Character.is_exact());
        assert!(!ElementKind::Float.is_exact());
    }

    #[test]
    fn test_numeric_types_are_stepped_and_step_types() {
        assert_stepped::<i8>();
        assert_stepped::<u128>();
        assert_stepped::<f64>();
        assert_step_type::<isize>();
        assert_step_type::<u16>();
        assert_step_type::<f32>();
    }

    #[test]
    fn test_integer_increment_decrement_wraps() {
        assert_eq!(i8::MAX.increment(), i8::MIN);
        assert_eq!(i8::MIN.decrement(), i8::MAX);
        assert_eq!(u16::MAX.increment(), 0);
        assert_eq!(0u16.decrement(), u16::MAX);
        assert_eq!(41i64.increment(), 42);
    }

    #[test]
    fn test_unsigned_add_wrapped_negative_step() {
        let minus_two = (-2i32) as u32;
        assert_eq!(8u32.add_step(minus_two), 6);
        assert_eq!(2u32.add_step(minus_two), 0);
    }

    #[test]
    fn test_integer_reaches() {
        assert!(0u8.reaches(250, 10, Direction::Ascending));
        assert!(0u8.reaches(255, 1, Direction::Ascending));
        assert!(i8::MIN.reaches(i8::MAX, 1, Direction::Ascending));
        assert!(i8::MAX.reaches(i8::MIN, -1, Direction::Descending));
        assert!(10i32.reaches(0, -3, Direction::Descending));
        assert!(5u16.reaches(5, 0, Direction::Descending));
    }

    #[test]
    fn test_integer_reaches_rejects_wraparound() {
        // 0, 200, 144, 88, ... never gets to 255.
        assert!(!0u8.reaches(255, 200, Direction::Ascending));
        // 240 + 20 wraps to 4.
        assert!(!0u8.reaches(250, 20, Direction::Ascending));
        assert!(0u8.reaches(250, 15, Direction::Ascending));
        // -100, -120, then -140 wraps to 116.
        assert!(!(-100i8).reaches(-127, -20, Direction::Descending));
        assert!(!250u8.reaches(255, 10, Direction::Ascending));
    }

    #[test]
    fn test_integer_reaches_rejects_stalled_or_reversed_step() {
        assert!(!0i32.reaches(10, 0, Direction::Ascending));
        assert!(!0i32.reaches(10, -1, Direction::Ascending));
    }

    #[test]
    fn test_unsigned_wrapped_negative_step_reaches() {
        let minus_two = (-2i32) as u32;
        assert!(8u32.reaches(0, minus_two, Direction::Descending));
        // 9, 7, 5, 3, 1, then wraps to u32::MAX.
        assert!(!9u32.reaches(0, minus_two, Direction::Descending));
    }

    #[test]
    fn test_float_reaches() {
        assert!(13.4f64.reaches(-15.18, -3.0, Direction::Descending));
        assert!(0.0f32.reaches(1.0e6, 1.0, Direction::Ascending));
        assert!(0.0f64.reaches(1.0, 0.25, Direction::Ascending));
    }

    #[test]
    fn test_float_reaches_rejects_lost_precision() {
        // Adding 1.0 sticks at 2^24 in f32.
        assert!(!0.0f32.reaches(3.0e7, 1.0, Direction::Ascending));
        assert!(!(-3.0e7f32).reaches(0.0, 1.0, Direction::Ascending));
        assert!(!1.0e20f64.reaches(2.0e20, 1.0, Direction::Ascending));
        assert!(!0.0f64.reaches(1.0, -0.5, Direction::Ascending));
    }

    #[test]
    fn test_float_increment_decrement() {
        assert_eq!(10.4f64.increment(), 11.4);
        assert_eq!(0.5f32.decrement(), -0.5);
        assert_eq!(1.0f64.add_step(-3.0), -2.0);
    }

    #[test]
    fn test_float_is_finite() {
        assert!(1.0f64.is_finite());
        assert!(!RangeElement::is_finite(f64::NAN));
        assert!(!RangeElement::is_finite(f32::INFINITY));
        assert!(RangeElement::is_finite(i32::MIN));
        assert!(RangeElement::is_finite('x'));
    }

    #[test]
    fn test_char_skips_surrogates() {
        assert_eq!('\u{D7FF}'.increment(), '\u{E000}');
        assert_eq!('\u{E000}'.decrement(), '\u{D7FF}');
        assert_eq!('a'.increment(), 'b');
        assert_eq!('b'.decrement(), 'a');
    }

    #[test]
    fn test_char_wraps_at_bounds() {
        assert_eq!(char::MAX.increment(), '\0');
        assert_eq!('\0'.decrement(), char::MAX);
    }

    #[test]
    fn test_increment_then_decrement_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let v: i64 = rng.random();
            assert_eq!(v.increment().decrement(), v);
            let u: u8 = rng.random();
            assert_eq!(u.decrement().increment(), u);
        }
    }

    #[test]
    fn test_display_kind() {
        assert_eq!(format!("{}", ElementKind::Float), "floating point");
        assert_eq!(format!("{}", ElementKind::Character), "character");
    }
}
