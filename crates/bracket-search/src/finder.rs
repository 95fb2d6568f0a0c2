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

//! Boundary search engine.
//!
//! `BoundFinder` finds the tightest value at which a monotonic evaluator
//! flips between failure and success. A run combines bracket expansion
//! (until the first success) with bisection (until the success is adjacent
//! to the last failure), driven by a pluggable [`RefinementStrategy`].
//!
//! Each iteration:
//! - increments the iteration counter and fails with
//!   [`BoundSearchError::Exhausted`] once it reaches the budget;
//! - stops and returns `good` if a success was seen and the candidate equals
//!   the last failing value (no further narrowing is possible);
//! - otherwise evaluates the candidate, updates the bracket, and asks the
//!   strategy for the next candidate.
//!
//! The loop is iterative; the iteration budget is the only bound on its
//! length. The evaluator is borrowed, never owned, and its failures are
//! returned unchanged inside [`BoundSearchError::Evaluator`].
//!
//! ## Usage
//!
//! ```rust
//! use bracket_search::finder::BoundFinder;
//! use bracket_search::strategy::Bisect;
//!
//! let mut routes = |width: i32| width >= 37;
//!
//! let mut finder = BoundFinder::lower_bound(Bisect);
//! finder.bind_with_limit(&mut routes, 500);
//!
//! assert_eq!(finder.start(30, 50), Ok(37));
//! ```

use crate::{
    direction::Direction,
    error::BoundSearchError,
    evaluator::{Evaluator, Verdict},
    monitor::{no_op::NoOpMonitor, search_monitor::SearchMonitor, trace::Probe},
    num::SearchNumeric,
    result::SearchOutcome,
    state::{Bracket, SearchState},
    stats::SearchStatistics,
    strategy::RefinementStrategy,
};
use std::time::Instant;

/// The iteration budget used by [`BoundFinder::start_default`].
pub const DEFAULT_MAX_ITERATIONS: u64 = 50;

/// Boundary search engine over a borrowed evaluator.
///
/// One engine supports exactly one in-flight search; `start` takes
/// `&mut self`, so the search state can never be observed mid-run.
pub struct BoundFinder<'e, T, S, E>
where
    T: SearchNumeric,
    E: ?Sized,
{
    strategy: S,
    direction: Direction,
    default_max_iterations: u64,
    bracket: Option<Bracket<T>>,
    evaluator: Option<&'e mut E>,
    state: SearchState<T>,
    statistics: SearchStatistics,
    trace: Vec<Probe<T>>,
    last_outcome: Option<SearchOutcome<T>>,
}

impl<'e, T, S, E> std::fmt::Debug for BoundFinder<'e, T, S, E>
where
    T: SearchNumeric,
    S: RefinementStrategy<T>,
    E: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundFinder")
            .field("strategy", &self.strategy.name())
            .field("direction", &self.direction)
            .field("bracket", &self.bracket)
            .field("bound", &self.evaluator.is_some())
            .field("state", &self.state)
            .finish()
    }
}

impl<'e, T, S, E> BoundFinder<'e, T, S, E>
where
    T: SearchNumeric,
    S: RefinementStrategy<T>,
    E: Evaluator<T> + ?Sized,
{
    /// Creates an unbound engine with the given strategy and orientation.
    #[inline]
    pub fn new(strategy: S, direction: Direction) -> Self {
        let placeholder = Bracket::new(direction.default_bad(), direction.default_bad());
        Self {
            strategy,
            direction,
            default_max_iterations: DEFAULT_MAX_ITERATIONS,
            bracket: None,
            evaluator: None,
            state: SearchState::new(placeholder, DEFAULT_MAX_ITERATIONS),
            statistics: SearchStatistics::default(),
            trace: Vec::new(),
            last_outcome: None,
        }
    }

    /// Creates an engine searching for the smallest succeeding value.
    #[inline]
    pub fn lower_bound(strategy: S) -> Self {
        Self::new(strategy, Direction::LowerBound)
    }

    /// Creates an engine searching for the largest succeeding value.
    #[inline]
    pub fn upper_bound(strategy: S) -> Self {
        Self::new(strategy, Direction::UpperBound)
    }

    /// Stores the evaluator and the initial bracket. No evaluation happens.
    #[inline]
    pub fn bind(&mut self, evaluator: &'e mut E, starting_bad: T, starting_good: T) {
        self.evaluator = Some(evaluator);
        self.bracket = Some(Bracket::new(starting_bad, starting_good));
    }

    /// Binds the evaluator using the direction's default known-bad bound.
    ///
    /// `limit` is the known-good ceiling of a lower-bound search or the
    /// known-good floor of an upper-bound search.
    #[inline]
    pub fn bind_with_limit(&mut self, evaluator: &'e mut E, limit: T) {
        let starting_bad = self.direction.default_bad();
        self.bind(evaluator, starting_bad, limit);
    }

    /// Releases the bound evaluator, returning the borrow to the caller.
    #[inline]
    pub fn unbind(&mut self) -> Option<&'e mut E> {
        self.bracket = None;
        self.evaluator.take()
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.evaluator.is_some() && self.bracket.is_some()
    }

    #[inline]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn bracket(&self) -> Option<Bracket<T>> {
        self.bracket
    }

    /// The state left behind by the most recent run.
    #[inline]
    pub fn state(&self) -> &SearchState<T> {
        &self.state
    }

    /// The statistics of the most recent run.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Every candidate evaluated by the most recent run, in order.
    #[inline]
    pub fn trace(&self) -> &[Probe<T>] {
        &self.trace
    }

    /// The outcome of the most recent run, or `None` if it did not converge.
    #[inline]
    pub fn last_outcome(&self) -> Option<&SearchOutcome<T>> {
        self.last_outcome.as_ref()
    }

    #[inline]
    pub fn default_max_iterations(&self) -> u64 {
        self.default_max_iterations
    }

    /// Runs a search from `initial_value` with the given iteration budget and
    /// returns the tightest succeeding value.
    pub fn start(
        &mut self,
        initial_value: T,
        max_iterations: u64,
    ) -> Result<T, BoundSearchError<T, E::Error>> {
        self.start_with_monitor(initial_value, max_iterations, &mut NoOpMonitor)
            .map(|outcome| outcome.boundary())
    }

    /// Runs a search with the engine's default iteration budget.
    pub fn start_default(&mut self, initial_value: T) -> Result<T, BoundSearchError<T, E::Error>> {
        self.start(initial_value, self.default_max_iterations)
    }

    /// Runs a search, reporting lifecycle events to `monitor`, and returns the
    /// full outcome.
    pub fn start_with_monitor<M>(
        &mut self,
        initial_value: T,
        max_iterations: u64,
        monitor: &mut M,
    ) -> Result<SearchOutcome<T>, BoundSearchError<T, E::Error>>
    where
        M: SearchMonitor<T> + ?Sized,
    {
        let (Some(bracket), Some(evaluator)) = (self.bracket, self.evaluator.as_deref_mut())
        else {
            tracing::warn!(
                target: "bracket_search::finder",
                "`BoundFinder::start` called without a bound evaluator"
            );
            return Err(BoundSearchError::Unbound);
        };

        let result = converge(
            &self.strategy,
            self.direction,
            bracket,
            evaluator,
            &mut self.state,
            &mut self.statistics,
            &mut self.trace,
            monitor,
            initial_value,
            max_iterations,
        );
        self.last_outcome = result.as_ref().ok().cloned();
        result
    }

    /// Runs a search against `evaluator` instead of the bound one, using
    /// `bracket`. The evaluator borrow lasts for this call only.
    pub fn search_with<M>(
        &mut self,
        evaluator: &mut E,
        bracket: Bracket<T>,
        initial_value: T,
        max_iterations: u64,
        monitor: &mut M,
    ) -> Result<SearchOutcome<T>, BoundSearchError<T, E::Error>>
    where
        M: SearchMonitor<T> + ?Sized,
    {
        let result = converge(
            &self.strategy,
            self.direction,
            bracket,
            evaluator,
            &mut self.state,
            &mut self.statistics,
            &mut self.trace,
            monitor,
            initial_value,
            max_iterations,
        );
        self.last_outcome = result.as_ref().ok().cloned();
        result
    }
}

#[allow(clippy::too_many_arguments)]
fn converge<T, S, E, M>(
    strategy: &S,
    direction: Direction,
    bracket: Bracket<T>,
    evaluator: &mut E,
    state: &mut SearchState<T>,
    statistics: &mut SearchStatistics,
    trace: &mut Vec<Probe<T>>,
    monitor: &mut M,
    initial_value: T,
    max_iterations: u64,
) -> Result<SearchOutcome<T>, BoundSearchError<T, E::Error>>
where
    T: SearchNumeric,
    S: RefinementStrategy<T> + ?Sized,
    E: Evaluator<T> + ?Sized,
    M: SearchMonitor<T> + ?Sized,
{
    let start_time = Instant::now();
    state.reset(bracket, max_iterations);
    *statistics = SearchStatistics::default();
    trace.clear();

    tracing::debug!(
        target: "bracket_search::finder",
        strategy = strategy.name(),
        direction = %direction,
        initial = %initial_value,
        bad = %bracket.starting_bad(),
        good = %bracket.starting_good(),
        max_iterations,
        "starting boundary search"
    );

    monitor.on_enter_search(initial_value, state);

    let mut candidate = initial_value;
    let result = loop {
        statistics.on_iteration();
        if !state.advance() {
            tracing::debug!(
                target: "bracket_search::finder",
                max_iterations,
                bad = %state.bad(),
                good = ?state.good(),
                "iteration budget exhausted"
            );
            break Err(BoundSearchError::Exhausted {
                max_iterations,
                bad: state.bad(),
                good: state.good(),
            });
        }

        if state.is_converged(candidate) {
            // Back at the most recent failure: `good` is adjacent to `bad`.
            break Ok(state.good_bound());
        }

        let passed = match evaluator.evaluate(candidate) {
            Ok(passed) => passed,
            Err(source) => {
                break Err(BoundSearchError::Evaluator {
                    value: candidate,
                    source,
                });
            }
        };

        let verdict = Verdict::from(passed);
        statistics.on_evaluation(verdict);
        trace.push(Probe {
            value: candidate,
            verdict,
        });

        tracing::trace!(
            target: "bracket_search::finder",
            iteration = state.iteration(),
            value = %candidate,
            verdict = %verdict,
            "probe evaluated"
        );

        let previous = candidate;
        candidate = match verdict {
            Verdict::Pass => {
                state.record_success(previous);
                strategy.next_after_good(previous, state)
            }
            Verdict::Fail => {
                state.record_failure(previous);
                strategy.next_after_bad(previous, state, direction)
            }
        };

        monitor.on_probe(previous, verdict, state);
    };

    statistics.set_total_time(start_time.elapsed());
    monitor.on_exit_search(state, statistics);

    let boundary = result?;
    tracing::debug!(
        target: "bracket_search::finder",
        boundary = %boundary,
        evaluations = statistics.evaluations,
        "boundary search converged"
    );

    Ok(SearchOutcome::new(
        boundary,
        state.bad(),
        direction,
        statistics.clone(),
    ))
}

/// Builder for an unbound [`BoundFinder`].
#[derive(Debug, Clone)]
pub struct BoundFinderBuilder<S> {
    strategy: S,
    direction: Direction,
    default_max_iterations: u64,
}

impl<S> BoundFinderBuilder<S> {
    #[inline]
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            direction: Direction::default(),
            default_max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    #[inline]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the budget used by [`BoundFinder::start_default`].
    #[inline]
    pub fn default_max_iterations(mut self, max_iterations: u64) -> Self {
        self.default_max_iterations = max_iterations;
        self
    }

    #[inline]
    pub fn build<'e, T, E>(self) -> BoundFinder<'e, T, S, E>
    where
        T: SearchNumeric,
        S: RefinementStrategy<T>,
        E: Evaluator<T> + ?Sized,
    {
        let mut finder = BoundFinder::new(self.strategy, self.direction);
        finder.default_max_iterations = self.default_max_iterations;
        finder
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundFinder, BoundFinderBuilder, DEFAULT_MAX_ITERATIONS};
    use crate::{
        direction::Direction,
        error::BoundSearchError,
        evaluator::{TryEvaluator, Verdict},
        monitor::{
            no_op::NoOpMonitor,
            trace::{Probe, TraceMonitor},
        },
        state::Bracket,
        strategy::{Bisect, Refinement, Step},
    };

    const THRESHOLD: i32 = 37;

    fn at_least_threshold(value: i32) -> bool {
        value >= THRESHOLD
    }

    fn at_most_threshold(value: i32) -> bool {
        value <= THRESHOLD
    }

    #[test]
    fn test_lower_bound_bisect_finds_threshold_from_any_start() {
        for start in [1, 30, 100] {
            let mut evaluator = at_least_threshold;
            let mut finder = BoundFinder::lower_bound(Bisect);
            finder.bind_with_limit(&mut evaluator, 500);

            assert_eq!(finder.start(start, DEFAULT_MAX_ITERATIONS), Ok(37), "start={start}");
        }
    }

    #[test]
    fn test_lower_bound_bisect_probe_sequence() {
        let mut evaluator = at_least_threshold;
        let mut finder = BoundFinder::lower_bound(Bisect);
        finder.bind(&mut evaluator, 0, 500);

        let mut trace = TraceMonitor::new();
        let outcome = finder
            .start_with_monitor(30, DEFAULT_MAX_ITERATIONS, &mut trace)
            .unwrap();

        assert_eq!(trace.values(), vec![30, 60, 45, 37, 33, 35, 36]);
        assert_eq!(trace.passed(), vec![60, 45, 37]);
        assert_eq!(outcome.boundary(), 37);
        assert_eq!(outcome.last_bad(), 36);
        assert_eq!(outcome.statistics().evaluations, 7);
        assert_eq!(outcome.statistics().iterations, 8);
    }

    #[test]
    fn test_step_strategy_converges_within_budget() {
        let range: u64 = 500;
        let step: u64 = 5;
        let budget = (range as f64).log2().ceil() as u64 + range / step;

        let mut evaluator = at_least_threshold;
        let mut finder = BoundFinder::lower_bound(Step::new(5));
        finder.bind_with_limit(&mut evaluator, 500);

        let mut trace = TraceMonitor::new();
        let outcome = finder.start_with_monitor(30, budget, &mut trace).unwrap();

        assert_eq!(outcome.boundary(), 37);
        assert_eq!(trace.values(), vec![30, 35, 40, 37, 36]);
        assert!(outcome.statistics().iterations <= budget);
    }

    #[test]
    fn test_repeated_starts_are_identical() {
        let mut evaluator = at_least_threshold;
        let mut finder = BoundFinder::lower_bound(Bisect);
        finder.bind_with_limit(&mut evaluator, 500);

        let first = finder.start(1, DEFAULT_MAX_ITERATIONS);
        let first_evaluations = finder.statistics().evaluations;
        let second = finder.start(1, DEFAULT_MAX_ITERATIONS);

        assert_eq!(first, Ok(37));
        assert_eq!(first, second);
        assert_eq!(first_evaluations, finder.statistics().evaluations);
    }

    #[test]
    fn test_budget_of_one_is_exhausted_before_evaluating() {
        let mut calls = 0;
        let mut evaluator = |value: i32| {
            calls += 1;
            value >= THRESHOLD
        };

        {
            let mut finder = BoundFinder::lower_bound(Bisect);
            finder.bind_with_limit(&mut evaluator, 500);

            let err = finder.start(30, 1).unwrap_err();
            assert!(err.is_exhausted());
            assert_eq!(
                err,
                BoundSearchError::Exhausted {
                    max_iterations: 1,
                    bad: 0,
                    good: None,
                }
            );
        }

        assert_eq!(calls, 0);
    }

    #[test]
    fn test_small_budget_reports_exhaustion_not_a_value() {
        let mut evaluator = at_least_threshold;
        let mut finder = BoundFinder::lower_bound(Bisect);
        finder.bind_with_limit(&mut evaluator, 500);

        // Needs 13 iterations from 1; give it 5.
        let err = finder.start(1, 5).unwrap_err();
        assert_eq!(
            err,
            BoundSearchError::Exhausted {
                max_iterations: 5,
                bad: 8,
                good: None,
            }
        );
        assert_eq!(finder.statistics().evaluations, 4);
    }

    #[test]
    fn test_upper_bound_bisect_finds_threshold() {
        for start in [1, 30, 100] {
            let mut evaluator = at_most_threshold;
            let mut finder = BoundFinder::upper_bound(Bisect);
            finder.bind_with_limit(&mut evaluator, 0);

            assert_eq!(finder.start(start, 64), Ok(37), "start={start}");
        }
    }

    #[test]
    fn test_upper_bound_probe_sequence_with_explicit_bad() {
        let mut evaluator = at_most_threshold;
        let mut finder = BoundFinder::upper_bound(Bisect);
        finder.bind(&mut evaluator, 500, 0);

        let mut trace = TraceMonitor::new();
        let outcome = finder
            .start_with_monitor(100, DEFAULT_MAX_ITERATIONS, &mut trace)
            .unwrap();

        assert_eq!(trace.values(), vec![100, 50, 25, 38, 32, 35, 37]);
        assert_eq!(outcome.boundary(), 37);
        assert_eq!(outcome.last_bad(), 38);
        assert_eq!(outcome.direction(), Direction::UpperBound);
    }

    #[test]
    fn test_upper_bound_unsigned_full_range() {
        let mut evaluator = |value: u32| value <= 37;
        let mut finder = BoundFinder::upper_bound(Bisect);
        finder.bind_with_limit(&mut evaluator, 0);

        assert_eq!(finder.start(30, 64), Ok(37));
    }

    #[test]
    fn test_upper_bound_step_strategy() {
        let mut evaluator = at_most_threshold;
        let mut finder = BoundFinder::upper_bound(Step::new(10));
        finder.bind(&mut evaluator, 500, 0);

        assert_eq!(finder.start(100, DEFAULT_MAX_ITERATIONS), Ok(37));
    }

    #[test]
    fn test_non_monotonic_evaluator_terminates() {
        let mut flip = false;
        let mut evaluator = |_value: i64| {
            flip = !flip;
            flip
        };

        let mut finder = BoundFinder::lower_bound(Bisect);
        finder.bind_with_limit(&mut evaluator, 1_000);

        let max_iterations = 20;
        let _ = finder.start(10, max_iterations);
        assert!(finder.statistics().iterations <= max_iterations);
        assert!(finder.statistics().evaluations < max_iterations);
    }

    #[test]
    fn test_zero_start_never_expands_and_is_exhausted() {
        let mut evaluator = |value: i32| value >= 1;
        let mut finder = BoundFinder::lower_bound(Bisect);
        finder.bind_with_limit(&mut evaluator, 100);

        let err = finder.start(0, 10).unwrap_err();
        assert!(err.is_exhausted());
        assert_eq!(finder.statistics().evaluations, 9);
    }

    #[test]
    fn test_start_without_bind_is_configuration_error() {
        let mut finder: BoundFinder<'_, i32, Bisect, fn(i32) -> bool> =
            BoundFinder::lower_bound(Bisect);

        assert!(!finder.is_bound());
        assert_eq!(finder.start(30, 50), Err(BoundSearchError::Unbound));
    }

    #[test]
    fn test_unbind_releases_evaluator() {
        let mut evaluator = at_least_threshold as fn(i32) -> bool;
        let mut finder = BoundFinder::lower_bound(Bisect);
        finder.bind_with_limit(&mut evaluator, 500);
        assert!(finder.is_bound());

        assert!(finder.unbind().is_some());
        assert_eq!(finder.start(30, 50), Err(BoundSearchError::Unbound));
    }

    #[test]
    fn test_evaluator_failure_propagates_unchanged() {
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct RouterCrashed {
            width: i32,
        }

        let mut evaluator = TryEvaluator::new(|value: i32| {
            if value >= 64 {
                Err(RouterCrashed { width: value })
            } else {
                Ok(value >= THRESHOLD)
            }
        });

        let mut finder = BoundFinder::lower_bound(Bisect);
        finder.bind_with_limit(&mut evaluator, 500);

        let err = finder.start(1, DEFAULT_MAX_ITERATIONS).unwrap_err();
        assert!(matches!(err, BoundSearchError::Evaluator { value: 64, .. }));
        assert_eq!(err.into_evaluator_error(), Some(RouterCrashed { width: 64 }));
    }

    #[test]
    fn test_search_with_uses_call_scoped_evaluator() {
        let mut finder = BoundFinder::lower_bound(Refinement::from(Bisect));

        let mut evaluator = at_least_threshold as fn(i32) -> bool;
        let outcome = finder
            .search_with(
                &mut evaluator,
                Bracket::new(0, 500),
                100,
                DEFAULT_MAX_ITERATIONS,
                &mut NoOpMonitor,
            )
            .unwrap();

        assert_eq!(outcome.boundary(), 37);
        assert!(!finder.is_bound());
    }

    #[test]
    fn test_builder_configures_engine() {
        let mut evaluator = at_most_threshold as fn(i32) -> bool;
        let mut finder = BoundFinderBuilder::new(Step::new(7))
            .direction(Direction::UpperBound)
            .default_max_iterations(40)
            .build();
        finder.bind(&mut evaluator, 200, 0);

        assert_eq!(finder.direction(), Direction::UpperBound);
        assert_eq!(finder.default_max_iterations(), 40);
        assert_eq!(finder.start_default(100), Ok(37));
        assert_eq!(finder.state().max_iterations(), 40);
    }

    #[test]
    fn test_engine_keeps_trace_and_outcome_of_last_run() {
        let mut evaluator = at_least_threshold;
        let mut finder = BoundFinder::lower_bound(Bisect);
        finder.bind_with_limit(&mut evaluator, 500);
        assert!(finder.last_outcome().is_none());

        assert_eq!(finder.start(30, DEFAULT_MAX_ITERATIONS), Ok(37));

        let values: Vec<i32> = finder.trace().iter().map(|probe| probe.value).collect();
        assert_eq!(values, vec![30, 60, 45, 37, 33, 35, 36]);
        assert_eq!(
            finder.trace()[0],
            Probe {
                value: 30,
                verdict: Verdict::Fail
            }
        );

        let outcome = finder.last_outcome().unwrap();
        assert_eq!(outcome.boundary(), 37);
        assert_eq!(outcome.last_bad(), 36);
        assert_eq!(outcome.statistics().evaluations, 7);

        // A run that does not converge clears the previous outcome.
        assert!(finder.start(30, 3).is_err());
        assert!(finder.last_outcome().is_none());
        assert_eq!(finder.trace().len(), 2);
    }
}
