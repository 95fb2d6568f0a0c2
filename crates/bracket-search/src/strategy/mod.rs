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

//! # Refinement Strategies
//!
//! Policies that propose the next candidate after each evaluation. The
//! engine calls exactly two hooks: `next_after_bad` once a candidate failed
//! and `next_after_good` once a candidate succeeded. Every strategy shares
//! the same narrowing rule once a success has been observed (bisect between
//! `bad` and `good`); strategies only differ in how they expand the bracket
//! while searching for the first success.
//!
//! ## Submodules
//!
//! - `bisect`: exponential expansion (`Bisect`).
//! - `step`: fixed-step linear expansion (`Step<T>`), for domains where
//!   doubling would overshoot feasible values.
//! - `clamped`: stops another strategy's expansion at a known-good limit.
//!
//! `Refinement<T>` wraps the closed set of provided strategies so that the
//! choice can be made at runtime (e.g. from configuration).

pub mod bisect;
pub mod clamped;
pub mod step;

pub use bisect::Bisect;
pub use clamped::Clamped;
pub use step::Step;

use crate::{direction::Direction, num::SearchNumeric, state::SearchState};

/// A policy that proposes the next candidate to evaluate.
pub trait RefinementStrategy<T>
where
    T: SearchNumeric,
{
    /// Returns the name of the strategy.
    fn name(&self) -> &str;

    /// Moves `value` away from a failure while no success has been observed.
    fn expand(&self, value: T, direction: Direction) -> T;

    /// Given a value that succeeded, proposes a value between the current
    /// `bad` and `good` to tighten the bound. The midpoint is biased toward
    /// `bad`, so once `good` is adjacent to `bad` the proposal equals `bad`
    /// and the search terminates.
    #[inline]
    fn next_after_good(&self, _value: T, state: &SearchState<T>) -> T {
        state.bad().midpoint_toward(state.good_bound())
    }

    /// Given a value that failed, proposes the next value to evaluate.
    #[inline]
    fn next_after_bad(&self, value: T, state: &SearchState<T>, direction: Direction) -> T {
        if state.good_found() {
            self.next_after_good(value, state)
        } else {
            self.expand(value, direction)
        }
    }
}

impl<T> std::fmt::Debug for dyn RefinementStrategy<T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RefinementStrategy({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn RefinementStrategy<T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RefinementStrategy({})", self.name())
    }
}

/// One of the provided strategies, selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refinement<T> {
    Bisect(Bisect),
    Step(Step<T>),
}

impl<T> From<Bisect> for Refinement<T> {
    #[inline]
    fn from(strategy: Bisect) -> Self {
        Refinement::Bisect(strategy)
    }
}

impl<T> From<Step<T>> for Refinement<T> {
    #[inline]
    fn from(strategy: Step<T>) -> Self {
        Refinement::Step(strategy)
    }
}

impl<T> RefinementStrategy<T> for Refinement<T>
where
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        match self {
            Refinement::Bisect(strategy) => <Bisect as RefinementStrategy<T>>::name(strategy),
            Refinement::Step(strategy) => <Step<T> as RefinementStrategy<T>>::name(strategy),
        }
    }

    #[inline]
    fn expand(&self, value: T, direction: Direction) -> T {
        match self {
            Refinement::Bisect(strategy) => strategy.expand(value, direction),
            Refinement::Step(strategy) => strategy.expand(value, direction),
        }
    }
}
