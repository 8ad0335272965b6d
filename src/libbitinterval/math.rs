// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integer helpers for bit-width computations.

use crate::error::*;
use crate::ops::Width;
use num_traits::PrimInt;
use std::fmt::Display;

/// Smallest `k` such that `2^k >= v`.
pub fn ceil_log2<T: PrimInt + Display>(v: T) -> Result<u32> {
  if v <= T::zero() {
    log::debug!("ceil_log2 of non-positive value {}", v);
    return Err(IntervalError::Domain { op: "ceil_log2" });
  }
  let bits = T::zero().count_zeros();
  // `v - 1` has `k` significant bits exactly when `2^(k-1) < v <= 2^k`.
  Ok(bits - (v - T::one()).leading_zeros())
}

/// `base^exponent` by repeated multiplication. Overflow is not checked.
pub fn int_pow<Bound: Width>(base: Bound, exponent: u32) -> Bound {
  let mut res = Bound::one();
  for _ in 0..exponent {
    res = res * base;
  }
  res
}

pub fn floor_sqrt<Bound: Width>(v: Bound) -> Bound {
  v.sqrt()
}

pub fn ceil_sqrt<Bound: Width>(v: Bound) -> Bound {
  let root = v.sqrt();
  if root * root == v { root }
  else { root + Bound::one() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ceil_log2_test() {
    let cases = vec![(1, 0), (2, 1), (3, 2), (4, 2), (5, 3), (72, 7), (1024, 10), (1025, 11)];
    for (v, expected) in cases {
      assert_eq!(ceil_log2(v as i32), Ok(expected), "ceil_log2({})", v);
    }
    assert_eq!(ceil_log2(i32::MAX), Ok(31));
    assert_eq!(ceil_log2(1i64 << 40), Ok(40));
    assert_eq!(ceil_log2(1i128 << 64), Ok(64));
    assert_eq!(ceil_log2(0), Err(IntervalError::Domain { op: "ceil_log2" }));
    assert_eq!(ceil_log2(-8), Err(IntervalError::Domain { op: "ceil_log2" }));
  }

  #[test]
  fn int_pow_test() {
    assert_eq!(int_pow(2, 0), 1);
    assert_eq!(int_pow(2, 10), 1024);
    assert_eq!(int_pow(-3, 3), -27);
    assert_eq!(int_pow(0i64, 0), 1);
    assert_eq!(int_pow(2i64, 32), 4294967296);
  }

  #[test]
  fn sqrt_test() {
    assert_eq!(floor_sqrt(15), 3);
    assert_eq!(ceil_sqrt(15), 4);
    assert_eq!(floor_sqrt(16), 4);
    assert_eq!(ceil_sqrt(16), 4);
    assert_eq!(ceil_sqrt(244), 16);
    assert_eq!(ceil_sqrt(0), 0);
  }
}
