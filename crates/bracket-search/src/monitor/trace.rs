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
    evaluator::Verdict, monitor::search_monitor::SearchMonitor, num::SearchNumeric,
    state::SearchState, stats::SearchStatistics,
};

/// A single evaluated candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Probe<T> {
    pub value: T,
    pub verdict: Verdict,
}

/// A monitor that records every probe of the most recent run, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceMonitor<T> {
    probes: Vec<Probe<T>>,
}

impl<T> Default for TraceMonitor<T> {
    fn default() -> Self {
        Self { probes: Vec::new() }
    }
}

impl<T> TraceMonitor<T>
where
    T: SearchNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn probes(&self) -> &[Probe<T>] {
        &self.probes
    }

    /// The probed values, in evaluation order.
    pub fn values(&self) -> Vec<T> {
        self.probes.iter().map(|probe| probe.value).collect()
    }

    /// The probed values that passed, in evaluation order.
    pub fn passed(&self) -> Vec<T> {
        self.probes
            .iter()
            .filter(|probe| probe.verdict.is_pass())
            .map(|probe| probe.value)
            .collect()
    }

    /// The probed values that failed, in evaluation order.
    pub fn failed(&self) -> Vec<T> {
        self.probes
            .iter()
            .filter(|probe| probe.verdict.is_fail())
            .map(|probe| probe.value)
            .collect()
    }
}

impl<T> SearchMonitor<T> for TraceMonitor<T>
where
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        "TraceMonitor"
    }

    fn on_enter_search(&mut self, _initial_value: T, _state: &SearchState<T>) {
        self.probes.clear();
    }

    fn on_probe(&mut self, value: T, verdict: Verdict, _state: &SearchState<T>) {
        self.probes.push(Probe { value, verdict });
    }

    fn on_exit_search(&mut self, _state: &SearchState<T>, _statistics: &SearchStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::TraceMonitor;
    use crate::{
        evaluator::Verdict,
        monitor::search_monitor::SearchMonitor,
        state::{Bracket, SearchState},
    };

    #[test]
    fn test_records_and_splits_probes() {
        let state = SearchState::new(Bracket::new(0u32, 500), 50);
        let mut monitor = TraceMonitor::new();

        monitor.on_enter_search(30, &state);
        monitor.on_probe(30, Verdict::Fail, &state);
        monitor.on_probe(60, Verdict::Pass, &state);
        monitor.on_probe(45, Verdict::Pass, &state);

        assert_eq!(monitor.values(), vec![30, 60, 45]);
        assert_eq!(monitor.passed(), vec![60, 45]);
        assert_eq!(monitor.failed(), vec![30]);
    }

    #[test]
    fn test_enter_search_clears_previous_run() {
        let state = SearchState::new(Bracket::new(0u32, 500), 50);
        let mut monitor = TraceMonitor::new();

        monitor.on_probe(30, Verdict::Fail, &state);
        monitor.on_enter_search(1, &state);
        assert!(monitor.probes().is_empty());
    }
}
