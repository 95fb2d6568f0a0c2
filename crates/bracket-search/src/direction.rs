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

//! Bracket orientation conventions.
//!
//! A `Direction` fixes which side of the bracket is "toward failure" and
//! which is "toward success". It adds no convergence logic of its own: it
//! supplies the default known-bad bound and tells the refinement strategies
//! which way to expand while no success has been observed yet.

use crate::num::SearchNumeric;

/// Orientation of a boundary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Search upward from a known failure for the smallest value that succeeds.
    #[default]
    LowerBound,
    /// Search downward from a known failure for the largest value that succeeds.
    UpperBound,
}

impl Direction {
    /// The known-bad bound assumed when the caller does not provide one:
    /// zero for lower-bound searches, the maximum representable value for
    /// upper-bound searches.
    #[inline]
    pub fn default_bad<T>(self) -> T
    where
        T: SearchNumeric,
    {
        match self {
            Direction::LowerBound => T::zero(),
            Direction::UpperBound => T::max_value(),
        }
    }

    /// Geometric expansion away from a failure: doubles for lower-bound
    /// searches, halves for upper-bound searches.
    #[inline]
    pub fn expand_geometric<T>(self, value: T) -> T
    where
        T: SearchNumeric,
    {
        match self {
            Direction::LowerBound => value.doubled(),
            Direction::UpperBound => value.halved(),
        }
    }

    /// Linear expansion away from a failure by `step`.
    #[inline]
    pub fn expand_linear<T>(self, value: T, step: T) -> T
    where
        T: SearchNumeric,
    {
        match self {
            Direction::LowerBound => value.stepped_up(step),
            Direction::UpperBound => value.stepped_down(step),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::LowerBound => write!(f, "LowerBound"),
            Direction::UpperBound => write!(f, "UpperBound"),
        }
    }
}
