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

//! # Bracket Search
//!
//! Generic monotonic boundary search. Given an expensive, externally supplied
//! yes/no evaluation over an ordered integer domain, the engine finds the
//! tightest value at which the evaluation flips between failure and success,
//! assuming it is monotonic in the search direction.
//!
//! ## Modules
//!
//! - `finder`: The convergence engine (`BoundFinder`) and its builder.
//! - `strategy`: Refinement policies (`Bisect`, `Step`) behind the
//!   `RefinementStrategy<T>` trait.
//! - `direction`: Lower-bound / upper-bound bracket conventions.
//! - `evaluator`: The evaluator capability (`Evaluator<T>`, `TryEvaluator`).
//! - `state`: Per-run search state and the starting `Bracket`.
//! - `monitor`: Observers for logging and probe tracing.
//! - `error`, `result`, `stats`: Run outcomes and diagnostics.
//! - `num`: The `SearchNumeric` bound shared by all components.

#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod evaluator;
pub mod finder;
pub mod monitor;
pub mod num;
pub mod result;
pub mod state;
pub mod stats;
pub mod strategy;
