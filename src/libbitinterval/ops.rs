// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval and bound specific operations.

use num_integer::{Integer, Roots};
use num_traits::{PrimInt, Signed};
use std::fmt::{Debug, Display};

pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// Integer type usable as an interval bound.
///
/// Bounds are signed so that the sign-sensitive operators (negation, subtraction, the signed multiplication and division rules) can be computed inside the bound type itself. `bits()` is the storage width of the host integer, it limits the bit-widths that can be converted to an interval.
pub trait Width : PrimInt + Signed + Integer + Roots + Display + Debug
{
  fn bits() -> u32;

  /// Lossless conversion used where a result may exceed the bound type (widths, cardinalities).
  fn widen(self) -> i128;

  fn two() -> Self {
    Self::one() + Self::one()
  }
}

macro_rules! width_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Width for $t
    {
      fn bits() -> u32 {
        <$t>::BITS
      }

      fn widen(self) -> i128 {
        self as i128
      }
    }
  )*}
}

width_impl!(i8,i16,i32,i64,isize);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bits() {
    assert_eq!(<i8 as Width>::bits(), 8);
    assert_eq!(<i16 as Width>::bits(), 16);
    assert_eq!(<i32 as Width>::bits(), 32);
    assert_eq!(<i64 as Width>::bits(), 64);
    assert_eq!(<i32 as Width>::two(), 2);
    assert_eq!(i64::MIN.widen(), -(1i128 << 63));
  }
}
