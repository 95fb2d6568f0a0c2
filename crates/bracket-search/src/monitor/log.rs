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
use std::time::{Duration, Instant};

/// A monitor that emits a structured `tracing` event for every probe and a
/// summary once the run ends.
///
/// Events are emitted under the `bracket_search::monitor` target at `info`
/// level, tagged with a caller-chosen `label` so that interleaved searches
/// can be told apart.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    label: String,
    start_time: Instant,
    probes: u64,
}

impl LogMonitor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start_time: Instant::now(),
            probes: 0,
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of probes logged during the current run.
    #[inline]
    pub fn probes(&self) -> u64 {
        self.probes
    }
}

#[inline]
fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new("search")
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(label: {})", self.label)
    }
}

impl<T> SearchMonitor<T> for LogMonitor
where
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, initial_value: T, state: &SearchState<T>) {
        self.start_time = Instant::now();
        self.probes = 0;

        tracing::info!(
            target: "bracket_search::monitor",
            label = %self.label,
            initial = %initial_value,
            bad = %state.bad(),
            good = %state.good_bound(),
            max_iterations = state.max_iterations(),
            "boundary search started"
        );
    }

    fn on_probe(&mut self, value: T, verdict: Verdict, state: &SearchState<T>) {
        self.probes = self.probes.saturating_add(1);

        tracing::info!(
            target: "bracket_search::monitor",
            label = %self.label,
            iteration = state.iteration(),
            value = %value,
            verdict = %verdict,
            bad = %state.bad(),
            good = ?state.good(),
            "probe"
        );
    }

    fn on_exit_search(&mut self, state: &SearchState<T>, statistics: &SearchStatistics) {
        tracing::info!(
            target: "bracket_search::monitor",
            label = %self.label,
            bad = %state.bad(),
            good = ?state.good(),
            iterations = statistics.iterations,
            evaluations = statistics.evaluations,
            elapsed_ms = saturating_millis(self.start_time.elapsed()),
            "boundary search finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{LogMonitor, saturating_millis};
    use crate::{
        evaluator::Verdict,
        monitor::search_monitor::SearchMonitor,
        state::{Bracket, SearchState},
        stats::SearchStatistics,
    };
    use std::time::Duration;

    #[test]
    fn test_counts_probes_per_run() {
        let subscriber = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let state = SearchState::new(Bracket::new(0i32, 500), 50);
            let mut monitor = LogMonitor::new("channel-width");

            monitor.on_enter_search(30, &state);
            monitor.on_probe(30, Verdict::Fail, &state);
            monitor.on_probe(60, Verdict::Pass, &state);
            monitor.on_exit_search(&state, &SearchStatistics::default());
            assert_eq!(monitor.probes(), 2);

            monitor.on_enter_search(30, &state);
            assert_eq!(monitor.probes(), 0);
        });
    }

    #[test]
    fn test_elapsed_millis_saturate() {
        assert_eq!(saturating_millis(Duration::from_millis(1_500)), 1_500);
        assert_eq!(saturating_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_display_and_default_label() {
        assert_eq!(LogMonitor::default().label(), "search");
        assert_eq!(
            LogMonitor::new("w").to_string(),
            "LogMonitor(label: w)"
        );
    }
}
