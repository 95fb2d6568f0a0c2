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

/// Fans every lifecycle event out to a list of monitors, in insertion order.
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    fn member_names(&self) -> String {
        let names: Vec<&str> = self.monitors.iter().map(|monitor| monitor.name()).collect();
        names.join(", ")
    }
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMonitor")
            .field("members", &self.member_names())
            .finish()
    }
}

impl<'a, T> std::fmt::Display for CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor([{}])", self.member_names())
    }
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Appends `monitor`; it observes events after every monitor added before it.
    #[inline]
    pub fn push<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.push_boxed(Box::new(monitor));
    }

    #[inline]
    pub fn push_boxed(&mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn SearchMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> SearchMonitor<T> for CompositeMonitor<'a, T>
where
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, initial_value: T, state: &SearchState<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(initial_value, state);
        }
    }

    fn on_probe(&mut self, value: T, verdict: Verdict, state: &SearchState<T>) {
        for monitor in &mut self.monitors {
            monitor.on_probe(value, verdict, state);
        }
    }

    fn on_exit_search(&mut self, state: &SearchState<T>, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(state, statistics);
        }
    }
}
