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

//! Mutable search state for a single boundary-search run.
//!
//! `SearchState` tracks the current bracket (`bad`, `good`, `good_found`)
//! together with the iteration counter and budget. The engine owns exactly
//! one instance and resets it at the start of every run; it is never shared
//! across concurrent searches.

use crate::num::SearchNumeric;

/// The pair of bounds that frames a search: a value known to fail and a
/// value assumed to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bracket<T> {
    starting_bad: T,
    starting_good: T,
}

impl<T> Bracket<T>
where
    T: SearchNumeric,
{
    #[inline]
    pub fn new(starting_bad: T, starting_good: T) -> Self {
        Self {
            starting_bad,
            starting_good,
        }
    }

    #[inline]
    pub fn starting_bad(&self) -> T {
        self.starting_bad
    }

    #[inline]
    pub fn starting_good(&self) -> T {
        self.starting_good
    }
}

impl<T> std::fmt::Display for Bracket<T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bracket(bad: {}, good: {})",
            self.starting_bad, self.starting_good
        )
    }
}

/// The state of one boundary-search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState<T> {
    bad: T,
    good: T,
    good_found: bool,
    iteration: u64,
    max_iterations: u64,
}

impl<T> SearchState<T>
where
    T: SearchNumeric,
{
    /// Creates a fresh state from `bracket` with the given budget.
    #[inline]
    pub fn new(bracket: Bracket<T>, max_iterations: u64) -> Self {
        Self {
            bad: bracket.starting_bad(),
            good: bracket.starting_good(),
            good_found: false,
            iteration: 0,
            max_iterations,
        }
    }

    /// Resets the state in place to prepare for a new run.
    #[inline]
    pub fn reset(&mut self, bracket: Bracket<T>, max_iterations: u64) {
        self.bad = bracket.starting_bad();
        self.good = bracket.starting_good();
        self.good_found = false;
        self.iteration = 0;
        self.max_iterations = max_iterations;
    }

    /// The most recently confirmed failing value.
    #[inline]
    pub fn bad(&self) -> T {
        self.bad
    }

    /// The tightest confirmed succeeding value, if any success was observed.
    #[inline]
    pub fn good(&self) -> Option<T> {
        if self.good_found {
            Some(self.good)
        } else {
            None
        }
    }

    /// The `good` slot regardless of whether a success was observed. Before
    /// the first success this is the starting good bound of the bracket.
    #[inline]
    pub fn good_bound(&self) -> T {
        self.good
    }

    #[inline]
    pub fn good_found(&self) -> bool {
        self.good_found
    }

    /// Number of iterations started so far in this run.
    #[inline]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    #[inline]
    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    /// Starts the next iteration. Returns `false` once the budget is spent.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.iteration = self.iteration.saturating_add(1);
        self.iteration < self.max_iterations
    }

    /// Returns `true` if probing `candidate` would repeat the last known
    /// failure after a success was found, i.e. `good` is adjacent to `bad`.
    #[inline]
    pub fn is_converged(&self, candidate: T) -> bool {
        self.good_found && self.bad == candidate
    }

    #[inline]
    pub fn record_failure(&mut self, value: T) {
        self.bad = value;
    }

    #[inline]
    pub fn record_success(&mut self, value: T) {
        self.good_found = true;
        self.good = value;
    }
}

#[cfg(test)]
mod tests {
    use super::{Bracket, SearchState};

    #[test]
    fn test_new_state_starts_from_bracket() {
        let state = SearchState::new(Bracket::new(0i32, 500), 50);
        assert_eq!(state.bad(), 0);
        assert_eq!(state.good(), None);
        assert_eq!(state.good_bound(), 500);
        assert!(!state.good_found());
        assert_eq!(state.iteration(), 0);
        assert_eq!(state.max_iterations(), 50);
    }

    #[test]
    fn test_advance_stops_at_budget() {
        let mut state = SearchState::new(Bracket::new(0i32, 500), 3);
        assert!(state.advance());
        assert!(state.advance());
        assert!(!state.advance());
        assert_eq!(state.iteration(), 3);
    }

    #[test]
    fn test_convergence_requires_a_success() {
        let mut state = SearchState::new(Bracket::new(0i32, 500), 50);
        state.record_failure(36);
        assert!(!state.is_converged(36));

        state.record_success(37);
        assert!(state.is_converged(36));
        assert!(!state.is_converged(35));
        assert_eq!(state.good(), Some(37));
    }

    #[test]
    fn test_reset_clears_previous_run() {
        let mut state = SearchState::new(Bracket::new(0i32, 500), 50);
        state.advance();
        state.record_failure(30);
        state.record_success(40);

        state.reset(Bracket::new(1, 100), 10);
        assert_eq!(state.bad(), 1);
        assert_eq!(state.good_bound(), 100);
        assert!(!state.good_found());
        assert_eq!(state.iteration(), 0);
        assert_eq!(state.max_iterations(), 10);
    }

    #[test]
    fn test_bracket_display() {
        let bracket = Bracket::new(0u32, 500);
        assert_eq!(bracket.to_string(), "Bracket(bad: 0, good: 500)");
    }
}
