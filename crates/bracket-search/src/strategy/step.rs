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

//! Fixed-step bracket expansion.
//!
//! Intended for coarse, evenly spaced probes where doubling would overshoot
//! past feasible values. Until the first success, every failure moves the
//! candidate by a fixed `step`; afterwards the bracket is bisected exactly
//! like [`Bisect`](crate::strategy::Bisect) does.

use crate::{direction::Direction, num::SearchNumeric, strategy::RefinementStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step<T> {
    step: T,
}

impl<T> Step<T>
where
    T: SearchNumeric,
{
    /// Creates a step strategy moving by `step` per failed probe.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not strictly positive.
    #[inline]
    pub fn new(step: T) -> Self {
        assert!(
            step > T::zero(),
            "called `Step::new` with a non-positive step: {}",
            step
        );

        Self { step }
    }

    /// Creates a step strategy, returning `None` if `step` is not strictly positive.
    #[inline]
    pub fn try_new(step: T) -> Option<Self> {
        if step > T::zero() {
            Some(Self { step })
        } else {
            None
        }
    }

    #[inline]
    pub fn step(&self) -> T {
        self.step
    }
}

impl<T> RefinementStrategy<T> for Step<T>
where
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        "Step"
    }

    #[inline]
    fn expand(&self, value: T, direction: Direction) -> T {
        direction.expand_linear(value, self.step)
    }
}

impl<T> std::fmt::Display for Step<T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step({})", self.step)
    }
}
