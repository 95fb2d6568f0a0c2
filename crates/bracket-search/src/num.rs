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

//! # Search Numeric Trait
//!
//! Unified numeric bounds for boundary search. `SearchNumeric` collects the
//! integer capabilities the engine and its strategies need into a single
//! alias: the intrinsic traits from `num_traits` (`PrimInt`), formatting for
//! diagnostics, and the by-value bracket arithmetic defined here.
//!
//! ## Bracket arithmetic
//!
//! `BracketArithmetic` exposes the handful of operations the refinement
//! strategies perform on candidate values:
//!
//! - `midpoint_toward`: `self + (other - self) / 2` truncating toward zero,
//!   i.e. biased toward `self`. Computed without overflow for every primitive
//!   integer, including brackets spanning the whole type range.
//! - `doubled` / `halved`: geometric bracket expansion (saturating).
//! - `stepped_up` / `stepped_down`: linear bracket expansion (saturating).
//!
//! All primitive integer types (signed and unsigned) implement the trait.
//! Floating-point domains are deliberately not supported: the convergence
//! rule compares candidates for exact equality, which only terminates
//! reliably on a discrete domain.

use num_traits::PrimInt;
use std::hash::Hash;

/// By-value arithmetic used to move a candidate inside or outside a bracket.
pub trait BracketArithmetic: Sized + Copy {
    /// Returns the midpoint between `self` and `other`, rounded toward `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_search::num::BracketArithmetic;
    /// assert_eq!(30i32.midpoint_toward(60), 45);
    /// assert_eq!(36i32.midpoint_toward(37), 36);
    /// assert_eq!(38u32.midpoint_toward(37), 38);
    /// assert_eq!(i64::MAX.midpoint_toward(-5), i64::MAX / 2 - 2);
    /// ```
    fn midpoint_toward(self, other: Self) -> Self;

    /// Returns `self * 2`, clamped to the type bounds.
    fn doubled(self) -> Self;

    /// Returns `self / 2`, truncating toward zero.
    fn halved(self) -> Self;

    /// Returns `self + step`, clamped to the type bounds.
    fn stepped_up(self, step: Self) -> Self;

    /// Returns `self - step`, clamped to the type bounds.
    fn stepped_down(self, step: Self) -> Self;
}

macro_rules! impl_bracket_arithmetic_for {
    ($t:ty) => {
        impl BracketArithmetic for $t {
            #[inline(always)]
            fn midpoint_toward(self, other: $t) -> $t {
                let midpoint = if other >= self {
                    other.checked_sub(self).map(|distance| self + distance / 2)
                } else {
                    self.checked_sub(other).map(|distance| self - distance / 2)
                };
                midpoint.unwrap_or_else(|| {
                    // Floor of the exact midpoint, bumped up by one when an odd
                    // sum has to round toward a larger `self`.
                    let floor = (self & other) + ((self ^ other) >> 1);
                    if self > other && ((self ^ other) & 1) == 1 {
                        floor + 1
                    } else {
                        floor
                    }
                })
            }

            #[inline(always)]
            fn doubled(self) -> $t {
                self.saturating_mul(2)
            }

            #[inline(always)]
            fn halved(self) -> $t {
                self / 2
            }

            #[inline(always)]
            fn stepped_up(self, step: $t) -> $t {
                self.saturating_add(step)
            }

            #[inline(always)]
            fn stepped_down(self, step: $t) -> $t {
                self.saturating_sub(step)
            }
        }
    };
}

impl_bracket_arithmetic_for!(u8);
impl_bracket_arithmetic_for!(u16);
impl_bracket_arithmetic_for!(u32);
impl_bracket_arithmetic_for!(u64);
impl_bracket_arithmetic_for!(u128);
impl_bracket_arithmetic_for!(usize);

impl_bracket_arithmetic_for!(i8);
impl_bracket_arithmetic_for!(i16);
impl_bracket_arithmetic_for!(i32);
impl_bracket_arithmetic_for!(i64);
impl_bracket_arithmetic_for!(i128);
impl_bracket_arithmetic_for!(isize);

/// A trait alias for numeric types that can be searched over.
/// These are all primitive integer types, signed and unsigned.
pub trait SearchNumeric:
    PrimInt
    + BracketArithmetic
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Send
    + Sync
    + 'static
{
}

impl<T> SearchNumeric for T where
    T: PrimInt
        + BracketArithmetic
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Send
        + Sync
        + 'static
{
}
