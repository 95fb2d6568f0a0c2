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

//! Minimum channel width search.
//!
//! The search runs a lower-bound `BoundFinder` over granules (multiples of
//! `granularity`) starting from a known-failing width of zero. Each probe
//! runs one routing attempt. Expansion stops at `max_width`, so the widest
//! admissible channel is always attempted before the design is declared
//! unroutable, and nothing wider is ever handed to the router.

use crate::{
    attempts::RouteAttempts,
    config::ChannelWidthConfig,
    error::{ConfigError, ProbeError, RouteSearchError},
    router::Router,
};
use bracket_search::{
    evaluator::Evaluator,
    finder::BoundFinder,
    monitor::{log::LogMonitor, search_monitor::SearchMonitor},
    state::Bracket,
    stats::SearchStatistics,
    strategy::{Bisect, Clamped, Refinement, Step},
};

/// The result of a successful channel width search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelWidthReport {
    /// The narrowest width that routed, with the next narrower granule
    /// proven to fail.
    pub min_channel_width: u32,
    pub attempts: RouteAttempts,
    pub statistics: SearchStatistics,
}

impl std::fmt::Display for ChannelWidthReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ChannelWidthReport(min_channel_width={}, attempts={})",
            self.min_channel_width,
            self.attempts.len()
        )
    }
}

/// Routes one probe, keeping a record of every width handed to the router.
struct ChannelWidthProbe<'a, R: ?Sized> {
    router: &'a mut R,
    config: &'a ChannelWidthConfig,
    attempts: RouteAttempts,
}

impl<R> Evaluator<u32> for ChannelWidthProbe<'_, R>
where
    R: Router + ?Sized,
{
    type Error = ProbeError<R::Error>;

    fn evaluate(&mut self, units: u32) -> Result<bool, Self::Error> {
        let channel_width = self.config.width_of(units);
        let routed = self
            .router
            .route(channel_width)
            .map_err(ProbeError::Router)?;
        self.attempts.record(channel_width, routed);

        tracing::debug!(
            target: "bracket_route::search",
            channel_width,
            routed,
            "routing attempt"
        );

        // Nothing wider may be tried, so a failure here ends the search.
        if !routed && units >= self.config.max_units() {
            tracing::debug!(
                target: "bracket_route::search",
                max_width = self.config.max_width,
                "widest admissible channel failed to route"
            );
            return Err(ProbeError::CeilingFailed);
        }
        Ok(routed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelWidthSearch {
    config: ChannelWidthConfig,
}

impl ChannelWidthSearch {
    pub fn new(config: ChannelWidthConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &ChannelWidthConfig {
        &self.config
    }

    fn refinement(&self) -> Clamped<Refinement<u32>, u32> {
        let inner: Refinement<u32> = match self.config.step {
            Some(step) => Step::new(step).into(),
            None => Bisect::new().into(),
        };
        Clamped::new(inner, self.config.max_units())
    }

    /// Finds the minimum routable channel width, logging every probe.
    pub fn run<R>(&self, router: &mut R) -> Result<ChannelWidthReport, RouteSearchError<R::Error>>
    where
        R: Router + ?Sized,
    {
        self.run_with_monitor(router, &mut LogMonitor::new("channel-width"))
    }

    /// Finds the minimum routable channel width, reporting probes (in
    /// granules) to `monitor`.
    pub fn run_with_monitor<R, M>(
        &self,
        router: &mut R,
        monitor: &mut M,
    ) -> Result<ChannelWidthReport, RouteSearchError<R::Error>>
    where
        R: Router + ?Sized,
        M: SearchMonitor<u32> + ?Sized,
    {
        let config = &self.config;
        config.validate()?;

        tracing::info!(
            target: "bracket_route::search",
            initial_width = config.initial_width,
            max_width = config.max_width,
            granularity = config.granularity,
            step = ?config.step,
            max_iterations = config.max_iterations,
            "searching for the minimum channel width"
        );

        let mut probe = ChannelWidthProbe {
            router,
            config,
            attempts: RouteAttempts::new(),
        };
        let mut finder = BoundFinder::lower_bound(self.refinement());
        let bracket = Bracket::new(0, config.max_units());

        let outcome = finder
            .search_with(
                &mut probe,
                bracket,
                config.initial_units(),
                config.max_iterations,
                monitor,
            )
            .map_err(|err| {
                RouteSearchError::from_search(err, config.granularity, config.max_width)
            });

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(
                    target: "bracket_route::search",
                    error = %err,
                    attempts = probe.attempts.len(),
                    "channel width search failed"
                );
                return Err(err);
            }
        };

        let min_channel_width = config.width_of(outcome.boundary());
        tracing::info!(
            target: "bracket_route::search",
            min_channel_width,
            attempts = probe.attempts.len(),
            "minimum channel width found"
        );

        Ok(ChannelWidthReport {
            min_channel_width,
            attempts: probe.attempts,
            statistics: outcome.into_statistics(),
        })
    }
}
