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

//! The detailed-router capability.

/// One full detailed-routing attempt at a given channel width.
///
/// Implementations configure the routing-resource width, run the router and
/// return `Ok(true)` if every net routed within the resource limits. Failures
/// of the router itself (crashes, I/O, invalid inputs) are returned as
/// `Err` and abort the search.
pub trait Router {
    type Error: std::error::Error + Send + Sync + 'static;

    fn route(&mut self, channel_width: u32) -> Result<bool, Self::Error>;
}

impl<R> Router for &mut R
where
    R: Router + ?Sized,
{
    type Error = R::Error;

    #[inline]
    fn route(&mut self, channel_width: u32) -> Result<bool, Self::Error> {
        (**self).route(channel_width)
    }
}

/// Adapts a closure `FnMut(u32) -> Result<bool, E>` into a [`Router`].
#[derive(Debug, Clone)]
pub struct FnRouter<F> {
    route_fn: F,
}

impl<F> FnRouter<F> {
    #[inline]
    pub fn new(route_fn: F) -> Self {
        Self { route_fn }
    }
}

impl<F, E> Router for FnRouter<F>
where
    F: FnMut(u32) -> Result<bool, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    #[inline]
    fn route(&mut self, channel_width: u32) -> Result<bool, E> {
        (self.route_fn)(channel_width)
    }
}

#[cfg(test)]
mod tests {
    use super::{FnRouter, Router};
    use std::convert::Infallible;

    #[test]
    fn test_fn_router_forwards_to_closure() {
        let mut widths = Vec::new();
        let mut router = FnRouter::new(|width: u32| {
            widths.push(width);
            Ok::<_, Infallible>(width >= 38)
        });

        assert_eq!(router.route(30).ok(), Some(false));
        assert_eq!(router.route(40).ok(), Some(true));
        drop(router);

        assert_eq!(widths, vec![30, 40]);
    }
}
