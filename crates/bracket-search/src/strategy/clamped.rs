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

//! Expansion bounded by a known-good limit.
//!
//! `Clamped` wraps another strategy and stops its expansion at `limit`: the
//! ceiling of a lower-bound search or the floor of an upper-bound search.
//! The limit itself is therefore probed instead of being jumped over.
//! Narrowing is unaffected, since bisected candidates already lie inside the
//! bracket.
//!
//! Once the probe at `limit` fails, further expansion keeps proposing
//! `limit`; callers treat that failure as terminal.

use crate::{direction::Direction, num::SearchNumeric, strategy::RefinementStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clamped<S, T> {
    inner: S,
    limit: T,
}

impl<S, T> Clamped<S, T>
where
    S: RefinementStrategy<T>,
    T: SearchNumeric,
{
    #[inline]
    pub fn new(inner: S, limit: T) -> Self {
        Self { inner, limit }
    }

    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn limit(&self) -> T {
        self.limit
    }
}

impl<S, T> RefinementStrategy<T> for Clamped<S, T>
where
    S: RefinementStrategy<T>,
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        RefinementStrategy::<T>::name(&self.inner)
    }

    #[inline]
    fn expand(&self, value: T, direction: Direction) -> T {
        let expanded = self.inner.expand(value, direction);
        match direction {
            Direction::LowerBound => expanded.min(self.limit),
            Direction::UpperBound => expanded.max(self.limit),
        }
    }
}
