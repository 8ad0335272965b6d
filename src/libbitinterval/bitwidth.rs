// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversions between bit-widths and intervals.
//!
//! An `n`-bit unsigned integer ranges over `[0, 2^n - 1]` and an `n`-bit signed (two's complement) integer over `[-2^(n-1), 2^(n-1) - 1]`. In the other direction, the bit-width of an interval is `ceil(log2(ub - lb + 1))` for both kinds.
//!
//! # Examples
//!
//! ```rust
//! use bitinterval::{ArithKind, Interval};
//!
//! let i = Interval::<i32>::bitwidth_to_interval(11, ArithKind::Unsigned).unwrap();
//! assert_eq!(i, Interval::new(0, 2047));
//! assert_eq!(i.interval_to_bitwidth(ArithKind::Unsigned), Ok(11));
//! assert_eq!(Interval::new(5, 38).to_balanced(ArithKind::Unsigned), Ok(Interval::new(0, 63)));
//! ```

use crate::arith_kind::ArithKind;
use crate::error::*;
use crate::interval::Interval;
use crate::math::*;
use crate::ops::*;
use crate::MAX_BITWIDTH;
use gcollections::ops::*;

// `2^exponent - 1` without computing `2^exponent`, so that the largest value of `Bound` stays reachable.
fn power_of_two_minus_one<Bound: Width>(exponent: u32) -> Option<Bound> {
  if exponent == 0 {
    Some(Bound::zero())
  }
  else {
    let half = num_traits::checked_pow(Bound::two(), (exponent - 1) as usize)?;
    (half - Bound::one()).checked_add(&half)
  }
}

// Powers of two are computed in `i128` and narrowed back, so that `2^31` never materializes in an `i32`.
fn narrow<Bound: Width>(v: i128, bitwidth: u32) -> Result<Bound> {
  num_traits::cast(v).ok_or(IntervalError::Overflow { bitwidth: bitwidth })
}

fn check_kind(op: &'static str, kind: ArithKind) -> Result<()> {
  match kind {
    ArithKind::Unsigned | ArithKind::Signed => Ok(()),
    _ => {
      log::debug!("{} requires an unsigned or signed kind, got {}", op, kind);
      Err(IntervalError::UnsupportedArithKind { op: op, kinds: kind.name().to_string() })
    }
  }
}

impl<Bound: Width> Interval<Bound>
{
  /// Every value representable on `bitwidth` bits of the given kind.
  pub fn universe(bitwidth: u32, kind: ArithKind) -> Result<Interval<Bound>> {
    Interval::bitwidth_to_interval(bitwidth, kind)
  }

  /// `[0, 2^n - 1]` for `Unsigned`, `[-2^(n-1), 2^(n-1) - 1]` for the signed family.
  ///
  /// `n` must be in `1..=MAX_BITWIDTH` and the resulting bounds must fit in `Bound`.
  pub fn bitwidth_to_interval(n: u32, kind: ArithKind) -> Result<Interval<Bound>> {
    if n == 0 || n > MAX_BITWIDTH {
      log::debug!("bit-width {} out of range", n);
      return Err(IntervalError::Range { bitwidth: n });
    }
    let overflow = IntervalError::Overflow { bitwidth: n };
    let res =
      if kind.is_unsigned() {
        let ub = power_of_two_minus_one(n).ok_or(overflow)?;
        Interval::new(Bound::zero(), ub)
      }
      else {
        let ub: Bound = power_of_two_minus_one(n - 1).ok_or(overflow)?;
        Interval::new(-ub - Bound::one(), ub)
      };
    log::trace!("{} bits ({}) -> {}", n, kind, res);
    Ok(res)
  }

  /// Minimal number of bits counting the values of the interval.
  ///
  /// The same formula is used for both kinds: a signed interval does not get an extra sign bit.
  pub fn interval_to_bitwidth(&self, kind: ArithKind) -> Result<u32> {
    if self.is_empty() {
      log::debug!("bit-width of the empty interval {}", self);
      return Err(IntervalError::EmptyInterval);
    }
    check_kind("interval_to_bitwidth", kind)?;
    let range = self.ub.widen() - self.lb.widen() + 1;
    let n = ceil_log2(range)?;
    log::trace!("{} ({}) -> {} bits", self, kind, n);
    Ok(n)
  }

  /// Smallest power-of-two aligned interval of the given kind built from the bounds of `self`.
  ///
  /// `Unsigned` requires a positive interval and yields `[0, 2^ceil(log2(ub)) - 1]`. `Signed` yields `[-2^e, 2^e - 1]` where `e = max(ceil(log2(|lb|)), ceil(log2(|ub|)))`. A zero bound has no logarithm and fails with `Domain`.
  pub fn to_balanced(&self, kind: ArithKind) -> Result<Interval<Bound>> {
    match kind {
      ArithKind::Unsigned if self.is_positive() => {
        let e = ceil_log2(self.ub)?;
        let ub = narrow((1i128 << e) - 1, e)?;
        Ok(Interval::new(Bound::zero(), ub))
      }
      ArithKind::Signed => {
        let e = std::cmp::max(
          ceil_log2(self.ub.widen().abs())?,
          ceil_log2(self.lb.widen().abs())?);
        let power = 1i128 << e;
        Ok(Interval::new(narrow(-power, e + 1)?, narrow(power - 1, e + 1)?))
      }
      _ => {
        log::debug!("cannot balance {} as {}", self, kind);
        Err(IntervalError::UnsupportedArithKind { op: "to_balanced", kinds: kind.name().to_string() })
      }
    }
  }

  /// `self` equals `[0, 2^n - 1]` (`Unsigned`) or `[-2^n, 2^n - 1]` (`Signed`) where `n` is its own bit-width.
  ///
  /// The signed form uses `n` and not `n - 1` on the lower bound, hence no non-empty interval is signed-balanced under this definition.
  pub fn is_balanced(&self, kind: ArithKind) -> Result<bool> {
    let n = self.interval_to_bitwidth(kind)?;
    let power = 1i128 << n;
    let (lb, ub) = (self.lb.widen(), self.ub.widen());
    let balanced = match kind {
      ArithKind::Unsigned => lb == 0 && ub == power - 1,
      _ => lb == -power && ub == power - 1
    };
    Ok(balanced)
  }
}
