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

//! Bisection with exponential bracket expansion.
//!
//! Until the first success, every failure doubles the candidate (or halves
//! it for upper-bound searches) to find any succeeding value quickly. After
//! that, each evaluation bisects the remaining bracket.

use crate::{direction::Direction, num::SearchNumeric, strategy::RefinementStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bisect;

impl Bisect {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> RefinementStrategy<T> for Bisect
where
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        "Bisect"
    }

    #[inline]
    fn expand(&self, value: T, direction: Direction) -> T {
        direction.expand_geometric(value)
    }
}

impl std::fmt::Display for Bisect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bisect")
    }
}
