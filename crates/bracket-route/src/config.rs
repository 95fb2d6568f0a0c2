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

//! Channel-width search configuration.
//!
//! Widths are probed in multiples of `granularity` (e.g. `2` when the
//! architecture only accepts even channel widths). The search runs over the
//! number of granules, so bisection never proposes an unsupported width.
//! When `step` is set, bracket expansion moves by that many granules per
//! failed attempt instead of doubling.

use crate::error::ConfigError;
use bracket_search::finder::DEFAULT_MAX_ITERATIONS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChannelWidthConfig {
    /// The first channel width to attempt.
    pub initial_width: u32,
    /// Widest channel the router may be asked for. Expansion stops here,
    /// and a failure at this width makes the design unroutable.
    pub max_width: u32,
    /// Probed widths are multiples of this value.
    pub granularity: u32,
    /// Linear expansion step in granules; `None` doubles instead.
    pub step: Option<u32>,
    /// Iteration budget for one search.
    pub max_iterations: u64,
}

impl Default for ChannelWidthConfig {
    fn default() -> Self {
        Self {
            initial_width: 12,
            max_width: 1024,
            granularity: 1,
            step: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ChannelWidthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.granularity == 0 {
            return Err(ConfigError::ZeroGranularity);
        }
        if self.step == Some(0) {
            return Err(ConfigError::ZeroStep);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.initial_width > self.max_width {
            return Err(ConfigError::InitialAboveMax {
                initial_width: self.initial_width,
                max_width: self.max_width,
            });
        }
        if self.max_width < self.granularity {
            return Err(ConfigError::MaxBelowGranularity {
                max_width: self.max_width,
                granularity: self.granularity,
            });
        }
        Ok(())
    }

    /// The initial probe in granules, never below one.
    #[inline]
    pub(crate) fn initial_units(&self) -> u32 {
        (self.initial_width / self.granularity).max(1)
    }

    /// The widest admissible probe in granules.
    #[inline]
    pub(crate) fn max_units(&self) -> u32 {
        self.max_width / self.granularity
    }

    #[inline]
    pub(crate) fn width_of(&self, units: u32) -> u32 {
        units.saturating_mul(self.granularity)
    }
}

/// Builder for `ChannelWidthConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelWidthConfigBuilder {
    config: ChannelWidthConfig,
}

impl ChannelWidthConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn initial_width(mut self, initial_width: u32) -> Self {
        self.config.initial_width = initial_width;
        self
    }

    #[inline]
    pub fn max_width(mut self, max_width: u32) -> Self {
        self.config.max_width = max_width;
        self
    }

    #[inline]
    pub fn granularity(mut self, granularity: u32) -> Self {
        self.config.granularity = granularity;
        self
    }

    #[inline]
    pub fn step(mut self, step: u32) -> Self {
        self.config.step = Some(step);
        self
    }

    #[inline]
    pub fn max_iterations(mut self, max_iterations: u64) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<ChannelWidthConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelWidthConfig, ChannelWidthConfigBuilder};
    use crate::error::ConfigError;

    #[test]
    fn test_default_is_valid() {
        let config = ChannelWidthConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.step, None);
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        assert_eq!(
            ChannelWidthConfigBuilder::new().granularity(0).build(),
            Err(ConfigError::ZeroGranularity)
        );
        assert_eq!(
            ChannelWidthConfigBuilder::new().step(0).build(),
            Err(ConfigError::ZeroStep)
        );
        assert_eq!(
            ChannelWidthConfigBuilder::new().max_iterations(0).build(),
            Err(ConfigError::ZeroIterations)
        );
        assert_eq!(
            ChannelWidthConfigBuilder::new()
                .initial_width(80)
                .max_width(64)
                .build(),
            Err(ConfigError::InitialAboveMax {
                initial_width: 80,
                max_width: 64
            })
        );
        assert_eq!(
            ChannelWidthConfigBuilder::new()
                .initial_width(1)
                .max_width(3)
                .granularity(4)
                .build(),
            Err(ConfigError::MaxBelowGranularity {
                max_width: 3,
                granularity: 4
            })
        );
    }

    #[test]
    fn test_unit_conversions() {
        let config = ChannelWidthConfigBuilder::new()
            .initial_width(13)
            .max_width(101)
            .granularity(2)
            .build()
            .unwrap();

        assert_eq!(config.initial_units(), 6);
        assert_eq!(config.max_units(), 50);
        assert_eq!(config.width_of(19), 38);
        assert_eq!(config.width_of(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_initial_units_never_zero() {
        let config = ChannelWidthConfigBuilder::new()
            .initial_width(1)
            .granularity(4)
            .build()
            .unwrap();
        assert_eq!(config.initial_units(), 1);
    }
}
