// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised by interval operations.
//!
//! Every operation that can reject its input returns a [`Result`](type.Result.html) carrying an [`IntervalError`](enum.IntervalError.html). Nothing in this crate aborts the process, the caller decides whether an error is fatal.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
  #[error("bit-width {bitwidth} is outside the supported range 1..=32")]
  Range { bitwidth: u32 },

  #[error("bit-width {bitwidth} does not fit the bound type")]
  Overflow { bitwidth: u32 },

  #[error("division by an interval containing zero")]
  DivisionByZero,

  #[error("input is outside the domain of {op}")]
  Domain { op: &'static str },

  #[error("{op} does not support the arithmetic kind(s) {kinds}")]
  UnsupportedArithKind { op: &'static str, kinds: String },

  #[error("{op} received an empty operand")]
  EmptyOperand { op: &'static str },

  #[error("unable to compute the bit-width of an empty interval")]
  EmptyInterval,

  #[error("{op} is not implemented")]
  NotImplemented { op: &'static str },
}

pub type Result<T> = std::result::Result<T, IntervalError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    assert_eq!(IntervalError::Range { bitwidth: 33 }.to_string(),
      "bit-width 33 is outside the supported range 1..=32");
    assert_eq!(IntervalError::Domain { op: "sqrt" }.to_string(),
      "input is outside the domain of sqrt");
    assert_eq!(IntervalError::UnsupportedArithKind { op: "div", kinds: "unsigned, signed".into() }.to_string(),
      "div does not support the arithmetic kind(s) unsigned, signed");
  }
}
