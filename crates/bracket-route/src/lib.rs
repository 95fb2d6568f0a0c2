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

//! # Bracket Route
//!
//! Minimum channel width search. A detailed router is consumed as a black
//! box (`Router`): each probe configures a channel width, runs one full
//! routing attempt, and reports whether it routed. `ChannelWidthSearch`
//! drives the probes with `bracket_search` and records every attempt.
//!
//! ## Modules
//!
//! - `router`: The `Router` capability and a closure adapter.
//! - `config`: `ChannelWidthConfig`, serde-loadable search configuration.
//! - `attempts`: `RouteAttempts`, the per-run record of routed / failed widths.
//! - `search`: `ChannelWidthSearch` and its `ChannelWidthReport`.
//! - `error`: Configuration and search errors.

#![forbid(unsafe_code)]

pub mod attempts;
pub mod config;
pub mod error;
pub mod router;
pub mod search;
