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

//! Statistics reporting for boundary-search runs.
//!
//! A lightweight container for the aggregate metrics of one run: iterations
//! started, evaluations performed, how many of them passed or failed, and the
//! elapsed wall-clock time. Updates use saturating arithmetic so that the
//! counters never trap, whatever budget the caller configures.

use crate::evaluator::Verdict;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchStatistics {
    /// Number of iterations started, including the final convergence check.
    pub iterations: u64,

    /// Number of calls made to the evaluator.
    pub evaluations: u64,

    /// Number of evaluations that passed.
    pub successes: u64,

    /// Number of evaluations that failed.
    pub failures: u64,

    /// Total time taken by the run.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    #[inline]
    pub fn on_evaluation(&mut self, verdict: Verdict) {
        self.evaluations = self.evaluations.saturating_add(1);
        match verdict {
            Verdict::Pass => self.successes = self.successes.saturating_add(1),
            Verdict::Fail => self.failures = self.failures.saturating_add(1),
        }
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Boundary Search Statistics:")?;
        writeln!(f, "   Iterations:   {}", self.iterations)?;
        writeln!(f, "   Evaluations:  {}", self.evaluations)?;
        writeln!(f, "   Successes:    {}", self.successes)?;
        writeln!(f, "   Failures:     {}", self.failures)?;
        writeln!(f, "   Total Time:   {:?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SearchStatistics;
    use crate::evaluator::Verdict;
    use std::time::Duration;

    #[test]
    fn test_counters_track_verdicts() {
        let mut stats = SearchStatistics::default();
        stats.on_iteration();
        stats.on_evaluation(Verdict::Fail);
        stats.on_iteration();
        stats.on_evaluation(Verdict::Pass);
        stats.on_iteration();

        assert_eq!(stats.iterations, 3);
        assert_eq!(stats.evaluations, 2);
        assert_eq!(stats.successes, 1);
        assert_eq!(stats.failures, 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = SearchStatistics {
            iterations: u64::MAX,
            ..SearchStatistics::default()
        };
        stats.on_iteration();
        assert_eq!(stats.iterations, u64::MAX);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let mut stats = SearchStatistics::default();
        stats.on_evaluation(Verdict::Pass);
        stats.set_total_time(Duration::from_millis(5));

        let text = stats.to_string();
        assert!(text.contains("Boundary Search Statistics:"));
        assert!(text.contains("Evaluations:  1"));
        assert!(text.contains("Successes:    1"));
        assert!(text.contains("Failures:     0"));
        assert!(text.contains("Total Time:"));
    }
}
