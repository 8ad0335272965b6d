// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Explicit view on the emptiness of an interval.
//!
//! Operators work on `Interval` and its `[1,0]` sentinel; `Extent` is offered to callers who prefer matching on emptiness rather than testing the bounds.
//!
//! ```rust
//! use bitinterval::{Extent, Interval};
//!
//! match Extent::from(Interval::new(3, 1)) {
//!   Extent::Empty => (),
//!   Extent::Bounds(lb, ub) => panic!("[{},{}] should be empty", lb, ub)
//! }
//! ```

use crate::interval::Interval;
use crate::ops::*;
use gcollections::ops::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Extent<Bound> {
  Empty,
  /// Non-empty interval, `lb <= ub`.
  Bounds(Bound, Bound)
}

impl<Bound: Width> Extent<Bound>
{
  pub fn is_empty(&self) -> bool {
    match *self {
      Extent::Empty => true,
      Extent::Bounds(_, _) => false
    }
  }
}

impl<Bound: Width> From<Interval<Bound>> for Extent<Bound>
{
  fn from(i: Interval<Bound>) -> Extent<Bound> {
    if i.is_empty() { Extent::Empty }
    else { Extent::Bounds(i.lower(), i.upper()) }
  }
}

impl<Bound: Width> From<Extent<Bound>> for Interval<Bound>
{
  fn from(e: Extent<Bound>) -> Interval<Bound> {
    match e {
      Extent::Empty => Interval::empty(),
      Extent::Bounds(lb, ub) => Interval::new(lb, ub)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_interval() {
    assert_eq!(Extent::from(Interval::new(-8, 7)), Extent::Bounds(-8, 7));
    assert_eq!(Extent::from(Interval::new(4, 4)), Extent::Bounds(4, 4));
    assert_eq!(Extent::from(Interval::<i32>::empty()), Extent::Empty);
    assert!(Extent::from(Interval::new(10, -10)).is_empty());
  }

  #[test]
  fn to_interval() {
    assert_eq!(Interval::from(Extent::Bounds(0, 1)), Interval::new(0, 1));
    // Any empty interval comes back as the canonical one.
    let canonical: Interval<i32> = Extent::from(Interval::new(10, -10)).into();
    assert_eq!(canonical, Interval::new(1, 0));
  }
}
