// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sign-sensitive and fallible interval operators.
//!
//! Multiplication, division and modulo take the arithmetic kind of their operands; `Signed`, `SignedPositive` and `SignedNegative` select the same rule. Operators whose result is not computed (`not`, the even power of an interval straddling zero) fail with `NotImplemented` instead of returning an arbitrary interval.
//!
//! # Examples
//!
//! ```rust
//! use bitinterval::{ArithKind, Interval, IntervalError};
//! use bitinterval::ArithKind::*;
//!
//! let x = Interval::new(2, 5);
//! let y = Interval::new(-8, 7);
//! assert_eq!(x.mul(&y, Signed, Signed), Interval::new(-40, 35));
//! assert_eq!(Interval::new(25, 178).div(&x, Unsigned, Unsigned), Ok(Interval::new(5, 89)));
//! assert_eq!(x.div(&y, Signed, Signed), Err(IntervalError::DivisionByZero));
//! ```

use crate::arith_kind::ArithKind;
use crate::error::*;
use crate::interval::Interval;
use crate::math::*;
use crate::ops::*;
use gcollections::ops::*;
use num_integer::Integer;
use std::cmp::{max, min};
use trilean::SKleene;

/// Relational operators of the comparison queries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RelOp {
  Eq, Ne, Lt, Le, Gt, Ge
}

fn min4<Bound: Width>(a: Bound, b: Bound, c: Bound, d: Bound) -> Bound {
  min(min(a, b), min(c, d))
}

fn max4<Bound: Width>(a: Bound, b: Bound, c: Bound, d: Bound) -> Bound {
  max(max(a, b), max(c, d))
}

fn unsupported(op: &'static str, kinds: &[ArithKind]) -> IntervalError {
  let kinds: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
  log::debug!("{} rejects the arithmetic kind(s) {:?}", op, kinds);
  IntervalError::UnsupportedArithKind { op: op, kinds: kinds.join(", ") }
}

impl<Bound: Width> Interval<Bound>
{
  /// Product of `self` (of kind `kx`) and `rhs` (of kind `ky`). The result is not truncated to any bit-width.
  pub fn mul(&self, rhs: &Interval<Bound>, kx: ArithKind, ky: ArithKind) -> Interval<Bound> {
    let (xl, xh, yl, yh) = (self.lb, self.ub, rhs.lb, rhs.ub);
    match (kx.is_signed_family(), ky.is_signed_family()) {
      (false, false) => Interval::new(xl * yl, xh * yh),
      (false, true) => Interval::new(
        min(xh * yl, xl * yl),
        max(xh * yh, xl * yh)),
      (true, false) => Interval::new(
        min(xl * yh, xl * yl),
        max(xh * yh, xh * yl)),
      (true, true) => Interval::new(
        min4(xl * yl, xl * yh, xh * yl, xh * yh),
        max4(xl * yl, xl * yh, xh * yl, xh * yh))
    }
  }

  /// Truncated quotient. Both operands must be unsigned, or both of the signed family.
  pub fn div(&self, rhs: &Interval<Bound>, kx: ArithKind, ky: ArithKind) -> Result<Interval<Bound>> {
    if rhs.is_empty() {
      log::debug!("div by the empty interval {}", rhs);
      return Err(IntervalError::EmptyOperand { op: "div" });
    }
    if rhs.contains(&Bound::zero()) {
      log::debug!("div by {} which contains zero", rhs);
      return Err(IntervalError::DivisionByZero);
    }
    let (xl, xh, yl, yh) = (self.lb, self.ub, rhs.lb, rhs.ub);
    match (kx.is_signed_family(), ky.is_signed_family()) {
      (false, false) => Ok(Interval::new(xl / yh, xh / yl)),
      (true, true) => Ok(Interval::new(
        min4(xl / yl, xl / yh, xh / yl, xh / yh),
        max4(xl / yl, xl / yh, xh / yl, xh / yh))),
      _ => Err(unsupported("div", &[kx, ky]))
    }
  }

  /// Remainder envelope. Only `Unsigned` and `Signed` are accepted for `kx`.
  pub fn modulo(&self, rhs: &Interval<Bound>, kx: ArithKind) -> Result<Interval<Bound>> {
    let divisor = max(rhs.ub, -rhs.lb) - Bound::one();
    match kx {
      ArithKind::Unsigned => Ok(Interval::new(Bound::zero(), max(self.ub, divisor))),
      ArithKind::Signed => {
        let m = max(max(self.ub, -self.lb), divisor);
        Ok(Interval::new(-m, m))
      }
      _ => Err(unsupported("modulo", &[kx]))
    }
  }

  /// `self` raised to the power `n`.
  pub fn exp_integer(&self, n: u32) -> Result<Interval<Bound>> {
    if n.is_odd() || self.lb >= Bound::zero() {
      Ok(Interval::new(int_pow(self.lb, n), int_pow(self.ub, n)))
    }
    else if self.ub <= Bound::zero() {
      Ok(Interval::new(int_pow(self.ub, n), int_pow(self.lb, n)))
    }
    else {
      // TODO: decide whether an even power straddling zero should yield `[0, max(lb^n, ub^n)]`.
      log::debug!("exp_integer of {} straddling zero with even exponent {}", self, n);
      Err(IntervalError::NotImplemented { op: "exp_integer" })
    }
  }

  pub fn sqrt(&self) -> Result<Interval<Bound>> {
    if self.lb >= Bound::zero() && self.ub >= Bound::zero() {
      Ok(Interval::new(floor_sqrt(self.lb), ceil_sqrt(self.ub)))
    }
    else {
      log::debug!("sqrt of {} which has a negative bound", self);
      Err(IntervalError::Domain { op: "sqrt" })
    }
  }

  /// `[0, max(|lb|, |ub|)]`. A bound equal to `Bound::MIN` overflows, as `Bound::abs` does.
  pub fn abs(&self) -> Interval<Bound> {
    Interval::new(Bound::zero(), max(self.ub.abs(), self.lb.abs()))
  }

  pub fn max(&self, rhs: &Interval<Bound>) -> Interval<Bound> {
    Interval::new(max(self.lb, rhs.lb), max(self.ub, rhs.ub))
  }

  pub fn min(&self, rhs: &Interval<Bound>) -> Interval<Bound> {
    Interval::new(min(self.lb, rhs.lb), min(self.ub, rhs.ub))
  }

  /// Result of `(a relop b) ? self : rhs`: the hull of both branches.
  pub fn mux(&self, rhs: &Interval<Bound>) -> Interval<Bound> {
    self.hull(rhs)
  }

  pub fn not(&self) -> Result<Interval<Bound>> {
    log::debug!("bitwise not of {} requested", self);
    Err(IntervalError::NotImplemented { op: "not" })
  }

  /// Result of `self relop rhs` as an integer: always the boolean interval `[0,1]`.
  pub fn relational_set(&self, rhs: &Interval<Bound>) -> Result<Interval<Bound>> {
    if self.is_empty() || rhs.is_empty() {
      log::debug!("relational set of {} and {} with an empty operand", self, rhs);
      return Err(IntervalError::EmptyOperand { op: "relational_set" });
    }
    Ok(Interval::new(Bound::zero(), Bound::one()))
  }

  /// Truth of `a op b` over every `a` in `self` and `b` in `rhs`: `True` if it holds for all pairs, `False` if it holds for none and `Unknown` otherwise.
  pub fn compare(&self, rhs: &Interval<Bound>, op: RelOp) -> Result<SKleene> {
    if self.is_empty() || rhs.is_empty() {
      log::debug!("compare {} {:?} {} with an empty operand", self, op, rhs);
      return Err(IntervalError::EmptyOperand { op: "compare" });
    }
    let (x, y) = (self, rhs);
    let res = match op {
      RelOp::Lt => kleene(x.ub < y.lb, x.lb >= y.ub),
      RelOp::Le => kleene(x.ub <= y.lb, x.lb > y.ub),
      RelOp::Gt => kleene(y.ub < x.lb, y.lb >= x.ub),
      RelOp::Ge => kleene(y.ub <= x.lb, y.lb > x.ub),
      RelOp::Eq => kleene(x.is_singleton() && x == y, x.intersection(y).is_empty()),
      RelOp::Ne => kleene(x.intersection(y).is_empty(), x.is_singleton() && x == y)
    };
    Ok(res)
  }
}

fn kleene(always: bool, never: bool) -> SKleene {
  if always { SKleene::True }
  else if never { SKleene::False }
  else { SKleene::Unknown }
}
