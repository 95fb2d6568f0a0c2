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

//! Evaluator capability consumed by the boundary search.
//!
//! An evaluator is the expensive, externally supplied yes/no test the search
//! narrows in on. It may block for an arbitrary amount of time and may record
//! side effects elsewhere; the engine treats it as opaque and never retries
//! it. Any closure `FnMut(T) -> bool` is an infallible evaluator. Closures
//! returning `Result<bool, E>` are wrapped in [`TryEvaluator`] so that their
//! failures reach the caller of the search unchanged.

use std::convert::Infallible;

/// Outcome of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The evaluator accepted the candidate.
    Pass,
    /// The evaluator rejected the candidate.
    Fail,
}

impl Verdict {
    #[inline]
    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }

    #[inline]
    pub fn is_fail(self) -> bool {
        matches!(self, Verdict::Fail)
    }
}

impl From<bool> for Verdict {
    #[inline]
    fn from(passed: bool) -> Self {
        if passed { Verdict::Pass } else { Verdict::Fail }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Fail => write!(f, "fail"),
        }
    }
}

/// A monotonic predicate over candidate values.
///
/// For a lower-bound search, success at `v` must imply success at every value
/// greater than `v`; for an upper-bound search, success at `v` must imply
/// success at every value less than `v`. The engine does not verify this; a
/// non-monotonic evaluator still terminates within the iteration budget but
/// the returned boundary is meaningless.
pub trait Evaluator<T> {
    /// The failure type raised by the evaluator itself.
    type Error;

    /// Returns `Ok(true)` if `value` succeeds, `Ok(false)` if it fails.
    fn evaluate(&mut self, value: T) -> Result<bool, Self::Error>;
}

impl<T, F> Evaluator<T> for F
where
    F: FnMut(T) -> bool,
{
    type Error = Infallible;

    #[inline]
    fn evaluate(&mut self, value: T) -> Result<bool, Infallible> {
        Ok(self(value))
    }
}

/// Adapts a fallible closure `FnMut(T) -> Result<bool, E>` into an [`Evaluator`].
///
/// # Examples
///
/// ```rust
/// # use bracket_search::evaluator::{Evaluator, TryEvaluator};
/// let mut evaluator = TryEvaluator::new(|width: u32| {
///     if width > 1000 {
///         Err("width out of range")
///     } else {
///         Ok(width >= 37)
///     }
/// });
/// assert_eq!(evaluator.evaluate(40), Ok(true));
/// assert_eq!(evaluator.evaluate(2000), Err("width out of range"));
/// ```
#[derive(Debug, Clone)]
pub struct TryEvaluator<F> {
    inner: F,
}

impl<F> TryEvaluator<F> {
    #[inline]
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<T, E, F> Evaluator<T> for TryEvaluator<F>
where
    F: FnMut(T) -> Result<bool, E>,
{
    type Error = E;

    #[inline]
    fn evaluate(&mut self, value: T) -> Result<bool, E> {
        (self.inner)(value)
    }
}
