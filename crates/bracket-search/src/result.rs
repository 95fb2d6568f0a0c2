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

use crate::{direction::Direction, num::SearchNumeric, stats::SearchStatistics};

/// The outcome of a converged boundary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T>
where
    T: SearchNumeric,
{
    boundary: T,
    last_bad: T,
    direction: Direction,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: SearchNumeric,
{
    #[inline]
    pub fn new(
        boundary: T,
        last_bad: T,
        direction: Direction,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            boundary,
            last_bad,
            direction,
            statistics,
        }
    }

    /// The tightest value for which the evaluator succeeded.
    #[inline]
    pub fn boundary(&self) -> T {
        self.boundary
    }

    /// The failing value adjacent to the boundary.
    #[inline]
    pub fn last_bad(&self) -> T {
        self.last_bad
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_statistics(self) -> SearchStatistics {
        self.statistics
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(boundary={}, last_bad={}, evaluations={})",
            self.direction, self.boundary, self.last_bad, self.statistics.evaluations
        )
    }
}
