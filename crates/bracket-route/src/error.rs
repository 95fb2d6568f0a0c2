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

use bracket_search::error::BoundSearchError;

/// Invalid `ChannelWidthConfig` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("granularity must be at least 1")]
    ZeroGranularity,

    #[error("expansion step must be at least 1 granule")]
    ZeroStep,

    #[error("iteration budget must be at least 1")]
    ZeroIterations,

    #[error("initial width {initial_width} exceeds maximum width {max_width}")]
    InitialAboveMax { initial_width: u32, max_width: u32 },

    #[error("maximum width {max_width} is below the granularity {granularity}")]
    MaxBelowGranularity { max_width: u32, granularity: u32 },
}

/// Failure of a channel-width search.
#[derive(Debug, thiserror::Error)]
pub enum RouteSearchError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[error("invalid channel width configuration")]
    InvalidConfig(#[from] ConfigError),

    /// `max_width` itself failed to route, or the budget ran out before any
    /// attempted width routed.
    #[error("design did not route at any attempted width up to {max_width}")]
    Unroutable { max_width: u32 },

    /// The budget ran out after at least one width routed, without proving
    /// that it is the minimum.
    #[error("search did not converge within {max_iterations} iterations (best routed width {best_width})")]
    NotConverged { max_iterations: u64, best_width: u32 },

    /// The search engine was started without a router attached.
    #[error("channel width search started without a router")]
    Unbound,

    /// The router itself failed while attempting `channel_width`.
    #[error("router failed at channel width {channel_width}")]
    Router {
        channel_width: u32,
        #[source]
        source: E,
    },
}

/// Why a single probe stopped the search.
#[derive(Debug)]
pub(crate) enum ProbeError<E> {
    /// The widest admissible channel failed to route.
    CeilingFailed,
    Router(E),
}

impl<E> RouteSearchError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// Translates a search error over granules into a width-level error.
    pub(crate) fn from_search(
        error: BoundSearchError<u32, ProbeError<E>>,
        granularity: u32,
        max_width: u32,
    ) -> Self {
        match error {
            BoundSearchError::Exhausted {
                max_iterations,
                good: Some(units),
                ..
            } => RouteSearchError::NotConverged {
                max_iterations,
                best_width: units.saturating_mul(granularity),
            },
            BoundSearchError::Exhausted { good: None, .. }
            | BoundSearchError::Evaluator {
                source: ProbeError::CeilingFailed,
                ..
            } => RouteSearchError::Unroutable { max_width },
            BoundSearchError::Evaluator {
                value,
                source: ProbeError::Router(source),
            } => RouteSearchError::Router {
                channel_width: value.saturating_mul(granularity),
                source,
            },
            BoundSearchError::Unbound => RouteSearchError::Unbound,
        }
    }
}
