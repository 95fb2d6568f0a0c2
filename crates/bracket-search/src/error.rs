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

//! Typed boundary-search errors.
//!
//! `BoundSearchError` distinguishes a misconfigured engine (no evaluator
//! bound), an exhausted iteration budget, and failures raised by the
//! evaluator itself. Evaluator failures are carried verbatim; the engine
//! never retries or suppresses them.

use crate::num::SearchNumeric;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundSearchError<T, E>
where
    T: SearchNumeric,
{
    /// `start` was called before an evaluator and bracket were bound.
    #[error("no evaluator has been bound")]
    Unbound,

    /// The iteration budget ran out before the boundary was proven.
    #[error("maximum number of iterations ({max_iterations}) reached")]
    Exhausted {
        max_iterations: u64,
        /// The last failing value when the budget ran out.
        bad: T,
        /// The tightest succeeding value seen so far, if any.
        good: Option<T>,
    },

    /// The evaluator failed while probing `value`.
    #[error("evaluator failed at value {value}")]
    Evaluator {
        value: T,
        #[source]
        source: E,
    },
}

impl<T, E> BoundSearchError<T, E>
where
    T: SearchNumeric,
{
    #[inline]
    pub fn is_unbound(&self) -> bool {
        matches!(self, BoundSearchError::Unbound)
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, BoundSearchError::Exhausted { .. })
    }

    /// Returns the evaluator's own failure, if that is what stopped the search.
    #[inline]
    pub fn into_evaluator_error(self) -> Option<E> {
        match self {
            BoundSearchError::Evaluator { source, .. } => Some(source),
            _ => None,
        }
    }
}
