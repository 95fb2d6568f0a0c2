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

use crate::{
    evaluator::Verdict, num::SearchNumeric, state::SearchState, stats::SearchStatistics,
};

/// Observer of a boundary-search run.
pub trait SearchMonitor<T>
where
    T: SearchNumeric,
{
    fn name(&self) -> &str;

    /// Called once the state has been reset, before the first probe.
    fn on_enter_search(&mut self, initial_value: T, state: &SearchState<T>);

    /// Called after each evaluation, once `state` reflects its verdict.
    fn on_probe(&mut self, value: T, verdict: Verdict, state: &SearchState<T>);

    /// Called when the run ends, whether it converged or not.
    fn on_exit_search(&mut self, state: &SearchState<T>, statistics: &SearchStatistics);
}

impl<T, M> SearchMonitor<T> for &mut M
where
    T: SearchNumeric,
    M: SearchMonitor<T> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn on_enter_search(&mut self, initial_value: T, state: &SearchState<T>) {
        (**self).on_enter_search(initial_value, state);
    }

    #[inline]
    fn on_probe(&mut self, value: T, verdict: Verdict, state: &SearchState<T>) {
        (**self).on_probe(value, verdict, state);
    }

    #[inline]
    fn on_exit_search(&mut self, state: &SearchState<T>, statistics: &SearchStatistics) {
        (**self).on_exit_search(state, statistics);
    }
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
