// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed and bounded integer interval.
//!
//! An interval `[lb, ub]` stands for every integer `x` such that `lb <= x <= ub`. Any interval with `lb > ub` is empty, and operations producing an empty result return the canonical empty interval `[1,0]`.
//!
//! Operators are over-approximations: the result of `x op y` contains every `a op b` with `a` in `x` and `b` in `y`. Some of them (the bitwise operators, the relational set) are deliberately coarse and return the hull of their operands.
//!
//! # Examples
//!
//! ```rust
//! use bitinterval::Interval;
//! use gcollections::ops::*;
//!
//! let a = Interval::new(0, 1);
//! let b = Interval::new(2, 5);
//! assert_eq!(a + b, Interval::new(2, 6));
//! assert_eq!(a - a, Interval::new(-1, 1));
//! assert!(a.intersection(&b).is_empty());
//! assert_eq!(format!("{}", -b), "[-5,-2]");
//! ```

use crate::ops::*;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::cmp::{max, min};
use std::fmt::{Display, Formatter};
use std::ops::{Add, BitAnd, BitOr, BitXor, Neg, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Interval<Bound> {
  pub(crate) lb: Bound,
  pub(crate) ub: Bound
}

impl<Bound: Width> Interval<Bound>
{
  /// Builds `[lb, ub]` as given. An inverted pair is accepted and denotes an empty interval.
  pub fn new(lb: Bound, ub: Bound) -> Interval<Bound> {
    Interval { lb: lb, ub: ub }
  }

  /// Both bounds are greater or equal to zero.
  pub fn is_positive(&self) -> bool {
    self.lb >= Bound::zero() && self.ub >= Bound::zero()
  }

  /// Both bounds are less or equal to zero. `[0,0]` is both positive and negative.
  pub fn is_negative(&self) -> bool {
    self.lb <= Bound::zero() && self.ub <= Bound::zero()
  }

  pub fn is_symmetric(&self) -> bool {
    self.lb == -self.ub
  }

  /// Saturates the bounds to `[lo, hi]`. The result is not normalized, it may be inverted.
  pub fn clamp(&self, lo: Bound, hi: Bound) -> Interval<Bound> {
    Interval::new(max(self.lb, lo), min(self.ub, hi))
  }

  fn disjoint(&self, other: &Interval<Bound>) -> bool {
    self.ub < other.lb || other.ub < self.lb
  }
}

impl<Bound> Collection for Interval<Bound>
{
  type Item = Bound;
}

impl<Bound: Width> Bounded for Interval<Bound>
{
  fn lower(&self) -> Bound {
    self.lb
  }

  fn upper(&self) -> Bound {
    self.ub
  }
}

impl<Bound: Width> Empty for Interval<Bound>
{
  fn empty() -> Interval<Bound> {
    Interval::new(Bound::one(), Bound::zero())
  }
}

impl<Bound: Width> Singleton for Interval<Bound>
{
  fn singleton(x: Bound) -> Interval<Bound> {
    Interval::new(x, x)
  }
}

/// `IsEmpty` and `IsSingleton` follow from the size.
impl<Bound: Width> Cardinality for Interval<Bound>
{
  type Size = u128;

  fn size(&self) -> u128 {
    if self.lb > self.ub { 0 }
    else { (self.ub.widen() - self.lb.widen() + 1) as u128 }
  }
}

impl<Bound: Width> Contains for Interval<Bound>
{
  fn contains(&self, value: &Bound) -> bool {
    self.lb <= *value && *value <= self.ub
  }
}

impl<Bound: Width> Intersection for Interval<Bound>
{
  type Output = Interval<Bound>;

  fn intersection(&self, other: &Interval<Bound>) -> Interval<Bound> {
    if self.is_empty() || other.is_empty() || self.disjoint(other) {
      Interval::empty()
    }
    else {
      Interval::new(max(self.lb, other.lb), min(self.ub, other.ub))
    }
  }
}

/// Interval hull of both operands. Empty operands are not special-cased: their sentinel bounds take part in the hull.
impl<Bound: Width> Hull for Interval<Bound>
{
  type Output = Interval<Bound>;

  fn hull(&self, other: &Interval<Bound>) -> Interval<Bound> {
    Interval::new(min(self.lb, other.lb), max(self.ub, other.ub))
  }
}

impl<Bound: Width> Union for Interval<Bound>
{
  type Output = Interval<Bound>;

  fn union(&self, other: &Interval<Bound>) -> Interval<Bound> {
    self.hull(other)
  }
}

impl<Bound: Width> Display for Interval<Bound>
{
  fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
    write!(formatter, "[{},{}]", self.lb, self.ub)
  }
}

impl<Bound: Width> Serialize for Interval<Bound> where
  Bound: Serialize
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where S: Serializer
  {
    (self.lb, self.ub).serialize(serializer)
  }
}

impl<'de, Bound: Width> Deserialize<'de> for Interval<Bound> where
  Bound: Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<Interval<Bound>, D::Error>
    where D: Deserializer<'de>
  {
    let (lb, ub) = <(Bound, Bound)>::deserialize(deserializer)?;
    Ok(Interval::new(lb, ub))
  }
}

impl<'a, 'b, Bound: Width> Add<&'b Interval<Bound>> for &'a Interval<Bound>
{
  type Output = Interval<Bound>;

  fn add(self, other: &Interval<Bound>) -> Interval<Bound> {
    Interval::new(self.lb + other.lb, self.ub + other.ub)
  }
}

forward_all_binop!(impl<Bound: Width> Add for Interval<Bound>, add);

impl<'a, 'b, Bound: Width> Sub<&'b Interval<Bound>> for &'a Interval<Bound>
{
  type Output = Interval<Bound>;

  fn sub(self, other: &Interval<Bound>) -> Interval<Bound> {
    Interval::new(self.lb - other.ub, self.ub - other.lb)
  }
}

forward_all_binop!(impl<Bound: Width> Sub for Interval<Bound>, sub);

/// Negating a bound equal to `Bound::MIN` overflows, as it does on `Bound`.
impl<'a, Bound: Width> Neg for &'a Interval<Bound>
{
  type Output = Interval<Bound>;

  fn neg(self) -> Interval<Bound> {
    Interval::new(-self.ub, -self.lb)
  }
}

impl<Bound: Width> Neg for Interval<Bound>
{
  type Output = Interval<Bound>;

  fn neg(self) -> Interval<Bound> {
    -&self
  }
}

// No tight bitwise bounds are computed, the result is the hull of the operands.
macro_rules! bitwise_hull_impl
{
  ( $( $imp: ident, $method: ident );* ) =>
  {$(
    impl<'a, 'b, Bound: Width> $imp<&'b Interval<Bound>> for &'a Interval<Bound>
    {
      type Output = Interval<Bound>;

      fn $method(self, other: &Interval<Bound>) -> Interval<Bound> {
        self.hull(other)
      }
    }

    forward_all_binop!(impl<Bound: Width> $imp for Interval<Bound>, $method);
  )*}
}

bitwise_hull_impl! {
  BitAnd, bitand;
  BitOr, bitor;
  BitXor, bitxor
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_tokens, Token};

  const empty: Interval<i32> = Interval {lb: 1, ub: 0};
  const invalid: Interval<i32> = Interval {lb: 10, ub: -10};
  const zero: Interval<i32> = Interval {lb: 0, ub: 0};
  const one: Interval<i32> = Interval {lb: 1, ub: 1};

  const i0_1: Interval<i32> = Interval {lb: 0, ub: 1};
  const i2_5: Interval<i32> = Interval {lb: 2, ub: 5};
  const i7_7: Interval<i32> = Interval {lb: 7, ub: 7};
  const im8_7: Interval<i32> = Interval {lb: -8, ub: 7};
  const i0_10: Interval<i32> = Interval {lb: 0, ub: 10};
  const i5_10: Interval<i32> = Interval {lb: 5, ub: 10};
  const i20_30: Interval<i32> = Interval {lb: 20, ub: 30};
  const im30_m20: Interval<i32> = Interval {lb: -30, ub: -20};

  #[test]
  fn new_is_verbatim() {
    assert_eq!(Interval::new(10, -10), invalid);
    assert_eq!(Interval::new(-8, 7), im8_7);
    assert_eq!(Interval::<i32>::empty(), empty);
  }

  #[test]
  fn is_empty_test() {
    assert!(empty.is_empty());
    assert!(invalid.is_empty());
    assert!(!zero.is_empty());
    assert!(!im30_m20.is_empty());
    assert!(zero.is_singleton() && i7_7.is_singleton());
    assert!(!empty.is_singleton() && !i0_1.is_singleton());
  }

  #[test]
  fn sign_predicates() {
    assert!(zero.is_positive() && zero.is_negative());
    assert!(i0_10.is_positive() && !i0_10.is_negative());
    assert!(im30_m20.is_negative() && !im30_m20.is_positive());
    assert!(!im8_7.is_positive() && !im8_7.is_negative());
    assert!(zero.is_symmetric());
    assert!(Interval::new(-4, 4).is_symmetric());
    assert!(!im8_7.is_symmetric());
  }

  #[test]
  fn singleton_contains() {
    for v in -5..5 {
      let s = Interval::singleton(v);
      assert!(s.is_singleton());
      assert!(s.contains(&v));
      assert!(!s.contains(&(v + 1)));
      assert!(!s.contains(&(v - 1)));
    }
    assert!(!empty.contains(&0) && !empty.contains(&1));
    assert!(im8_7.contains(&-8) && im8_7.contains(&7) && !im8_7.contains(&8));
  }

  #[test]
  fn size_test() {
    assert_eq!(zero.size(), 1);
    assert_eq!(one.size(), 1);
    assert_eq!(empty.size(), 0);
    assert_eq!(invalid.size(), 0);
    assert_eq!(i0_10.size(), 11);
    assert_eq!(im30_m20.size(), 11);
    assert_eq!(Interval::new(i32::MIN, i32::MAX).size(), 1u128 << 32);
  }

  #[test]
  fn clamp_test() {
    assert_eq!(im8_7.clamp(-2, 3), Interval::new(-2, 3));
    assert_eq!(i2_5.clamp(-20, 30), i2_5);
    // Not normalized to the canonical empty interval.
    assert_eq!(i20_30.clamp(0, 10), Interval::new(20, 10));
  }

  #[test]
  fn intersection_test() {
    let cases = vec![
      (1, i0_10, i5_10, i5_10),
      (2, i0_10, i20_30, empty),
      (3, i0_10, empty, empty),
      (4, empty, i0_10, empty),
      (5, invalid, i0_10, empty),
      (6, im8_7, i2_5, i2_5),
      (7, im8_7, i5_10, Interval::new(5, 7)),
      (8, im30_m20, im8_7, empty),
      (9, i0_1, one, one),
    ];
    for (id, x, y, expected) in cases {
      assert_eq!(x.intersection(&y), expected, "test #{} of intersection", id);
      assert_eq!(y.intersection(&x), expected, "test #{} of intersection (sym)", id);
    }
  }

  #[test]
  fn hull_test() {
    assert_eq!(i0_1.hull(&i7_7), Interval::new(0, 7));
    assert_eq!(im30_m20.union(&i20_30), Interval::new(-30, 30));
    assert_eq!(i0_10.union(&i5_10), i0_10);
    // The sentinel bounds of the empty interval take part in the hull.
    assert_eq!(i5_10.union(&empty), Interval::new(1, 10));
    assert_eq!(im8_7.union(&empty), im8_7);
  }

  #[test]
  fn add_sub_neg() {
    assert_eq!(i0_1 + i2_5, Interval::new(2, 6));
    assert_eq!(i0_1 + i7_7, Interval::new(7, 8));
    assert_eq!(&i0_1 + i2_5, i2_5 + &i0_1);
    assert_eq!((i0_1 + i2_5) + im8_7, i0_1 + (i2_5 + im8_7));
    assert_eq!(i2_5 - i0_1, Interval::new(1, 5));
    assert_eq!(i0_1 - i0_1, Interval::new(-1, 1));
    assert_eq!(im8_7 - im8_7, Interval::new(-15, 15));
    assert_eq!(-i0_1, Interval::new(-1, 0));
    assert_eq!(-&im30_m20, i20_30);
  }

  #[test]
  fn bitwise_hull() {
    let hull = Interval::new(-8, 7);
    assert_eq!(i2_5 & im8_7, hull);
    assert_eq!(i2_5 | &im8_7, hull);
    assert_eq!(&i2_5 ^ im8_7, hull);
    assert_eq!(i0_1 & i7_7, Interval::new(0, 7));
  }

  #[test]
  fn display() {
    assert_eq!(format!("{}", im8_7), "[-8,7]");
    assert_eq!(format!("{}", empty), "[1,0]");
    assert_eq!(Interval::new(-8388608i64, 8388607).to_string(), "[-8388608,8388607]");
  }

  #[test]
  fn serde() {
    assert_tokens(&im8_7, &[
      Token::Tuple { len: 2 },
      Token::I32(-8),
      Token::I32(7),
      Token::TupleEnd
    ]);
    assert_tokens(&empty, &[
      Token::Tuple { len: 2 },
      Token::I32(1),
      Token::I32(0),
      Token::TupleEnd
    ]);
  }
}
