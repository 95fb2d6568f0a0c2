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

use serde::{Deserialize, Serialize};

/// Channel widths attempted during one search, split by outcome and kept in
/// attempt order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAttempts {
    pub success_channel_widths: Vec<u32>,
    pub failure_channel_widths: Vec<u32>,
}

impl RouteAttempts {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, channel_width: u32, routed: bool) {
        if routed {
            self.success_channel_widths.push(channel_width);
        } else {
            self.failure_channel_widths.push(channel_width);
        }
    }

    /// Total number of router invocations.
    #[inline]
    pub fn len(&self) -> usize {
        self.success_channel_widths.len() + self.failure_channel_widths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The narrowest width that routed.
    ///
    /// Once a width routes, every later probe lies strictly below the
    /// narrowest success so far, so this is the last recorded success.
    #[inline]
    pub fn best_channel_width(&self) -> Option<u32> {
        self.success_channel_widths.last().copied()
    }

    /// The widest width that failed to route, if any.
    #[inline]
    pub fn widest_failure(&self) -> Option<u32> {
        self.failure_channel_widths.iter().copied().max()
    }
}

impl std::fmt::Display for RouteAttempts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RouteAttempts(routed: {:?}, failed: {:?})",
            self.success_channel_widths, self.failure_channel_widths
        )
    }
}

#[cfg(test)]
mod tests {
    use super::RouteAttempts;

    #[test]
    fn test_record_splits_by_outcome() {
        let mut attempts = RouteAttempts::new();
        assert!(attempts.is_empty());
        assert_eq!(attempts.best_channel_width(), None);

        for (width, routed) in [(12, false), (24, false), (48, true), (36, false), (42, true)] {
            attempts.record(width, routed);
        }

        assert_eq!(attempts.len(), 5);
        assert_eq!(attempts.success_channel_widths, vec![48, 42]);
        assert_eq!(attempts.failure_channel_widths, vec![12, 24, 36]);
        assert_eq!(attempts.best_channel_width(), Some(42));
        assert_eq!(attempts.widest_failure(), Some(36));
    }

    #[test]
    fn test_display() {
        let mut attempts = RouteAttempts::new();
        attempts.record(12, false);
        attempts.record(24, true);
        assert_eq!(
            attempts.to_string(),
            "RouteAttempts(routed: [24], failed: [12])"
        );
    }
}
