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

use bracket_route::{
    config::{ChannelWidthConfig, ChannelWidthConfigBuilder},
    error::RouteSearchError,
    router::{FnRouter, Router},
    search::ChannelWidthSearch,
};
use bracket_search::monitor::trace::TraceMonitor;
use std::convert::Infallible;

/// A router that routes every width at or above `threshold` and remembers
/// what it was asked.
struct ThresholdRouter {
    threshold: u32,
    calls: Vec<u32>,
}

impl ThresholdRouter {
    fn new(threshold: u32) -> Self {
        Self {
            threshold,
            calls: Vec::new(),
        }
    }
}

impl Router for ThresholdRouter {
    type Error = Infallible;

    fn route(&mut self, channel_width: u32) -> Result<bool, Infallible> {
        self.calls.push(channel_width);
        Ok(channel_width >= self.threshold)
    }
}

#[test]
fn test_even_widths_only() {
    let config = ChannelWidthConfigBuilder::new()
        .initial_width(12)
        .granularity(2)
        .build()
        .unwrap();
    let search = ChannelWidthSearch::new(config).unwrap();
    let mut router = ThresholdRouter::new(37);
    let mut monitor = TraceMonitor::new();

    let report = search.run_with_monitor(&mut router, &mut monitor).unwrap();

    assert_eq!(report.min_channel_width, 38);
    assert_eq!(router.calls, vec![12, 24, 48, 36, 42, 38]);
    assert_eq!(monitor.values(), vec![6, 12, 24, 18, 21, 19]);
    assert_eq!(report.attempts.success_channel_widths, vec![48, 42, 38]);
    assert_eq!(report.attempts.failure_channel_widths, vec![12, 24, 36]);
    assert_eq!(report.statistics.evaluations, 6);
    assert_eq!(report.statistics.iterations, 7);
}

#[test]
fn test_unroutable_after_max_width_fails() {
    let config = ChannelWidthConfigBuilder::new()
        .initial_width(12)
        .max_width(64)
        .build()
        .unwrap();
    let search = ChannelWidthSearch::new(config).unwrap();
    let mut router = ThresholdRouter::new(u32::MAX);

    let err = search.run(&mut router).unwrap_err();

    assert!(matches!(err, RouteSearchError::Unroutable { max_width: 64 }));
    assert_eq!(router.calls, vec![12, 24, 48, 64]);
}

#[test]
fn test_doubling_past_max_width_still_tries_max_width() {
    let config = ChannelWidthConfigBuilder::new()
        .initial_width(12)
        .max_width(64)
        .build()
        .unwrap();
    let search = ChannelWidthSearch::new(config).unwrap();
    let mut router = ThresholdRouter::new(60);

    let report = search.run(&mut router).unwrap();

    assert_eq!(report.min_channel_width, 60);
    assert_eq!(router.calls, vec![12, 24, 48, 64, 56, 60, 58, 59]);
    assert!(router.calls.iter().all(|&width| width <= 64));
}

#[test]
fn test_max_width_rounds_down_to_granularity() {
    let config = ChannelWidthConfigBuilder::new()
        .initial_width(12)
        .max_width(63)
        .granularity(2)
        .build()
        .unwrap();
    let search = ChannelWidthSearch::new(config).unwrap();
    let mut router = ThresholdRouter::new(61);

    let report = search.run(&mut router).unwrap();

    assert_eq!(report.min_channel_width, 62);
    assert_eq!(router.calls, vec![12, 24, 48, 62, 54, 58, 60]);
}

#[test]
fn test_router_failure_aborts_search() {
    let search = ChannelWidthSearch::new(ChannelWidthConfig::default()).unwrap();
    let mut calls = 0;
    let mut router = FnRouter::new(|width: u32| {
        calls += 1;
        if width > 20 {
            Err(std::io::Error::other("placement file missing"))
        } else {
            Ok(false)
        }
    });

    let err = search.run(&mut router).unwrap_err();
    drop(router);

    match err {
        RouteSearchError::Router {
            channel_width,
            source,
        } => {
            assert_eq!(channel_width, 24);
            assert_eq!(source.to_string(), "placement file missing");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(calls, 2);
}

#[test]
fn test_config_from_json() {
    let config: ChannelWidthConfig =
        serde_json::from_str(r#"{ "initial_width": 16, "granularity": 2, "step": 4 }"#).unwrap();

    assert_eq!(config.initial_width, 16);
    assert_eq!(config.granularity, 2);
    assert_eq!(config.step, Some(4));
    assert_eq!(config.max_width, ChannelWidthConfig::default().max_width);
    assert!(config.validate().is_ok());

    let json = serde_json::to_string(&config).unwrap();
    let parsed: ChannelWidthConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_rejects_unknown_fields() {
    let parsed = serde_json::from_str::<ChannelWidthConfig>(r#"{ "widht": 16 }"#);
    assert!(parsed.is_err());
}

#[test]
fn test_search_is_repeatable() {
    let search = ChannelWidthSearch::new(ChannelWidthConfig::default()).unwrap();

    let first = search.run(&mut ThresholdRouter::new(100)).unwrap();
    let second = search.run(&mut ThresholdRouter::new(100)).unwrap();

    assert_eq!(first.min_channel_width, 100);
    assert_eq!(first.attempts, second.attempts);
}
