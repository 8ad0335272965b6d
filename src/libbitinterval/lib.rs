// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval arithmetic over integers, aimed at inferring the bit-width of integer computations without executing them. An interval `[lb, ub]` bounds every value a variable may take; operators combine intervals into the interval of the result, and the [bitwidth module](bitwidth/index.html) converts between intervals and the number of bits needed to store them.
//!
//! The arithmetic kind (`Unsigned` or a signed variant) of the operands is given to the operators whose bounds depend on it. Every operation is a pure function returning a new interval; operations that can reject their input return a `Result` (see the [error module](error/index.html)).
//!
//! # Examples
//!
//! ```rust
//! use bitinterval::{ArithKind, Interval};
//!
//! // Width of `x * y + 3` for an 8-bit unsigned `x` and a 4-bit signed `y`.
//! let x = Interval::<i32>::universe(8, ArithKind::Unsigned).unwrap();
//! let y = Interval::<i32>::universe(4, ArithKind::Signed).unwrap();
//! let res = x.mul(&y, ArithKind::Unsigned, ArithKind::Signed) + Interval::new(3, 3);
//! assert_eq!(res, Interval::new(-2037, 1788));
//! assert_eq!(res.interval_to_bitwidth(ArithKind::Signed), Ok(12));
//! ```
//!
//! # References
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)
//! * H. Yamashita, H. Yasuura, F.N. Eko and C. Yun, Variable Size Analysis and Validation of Computation Quality.

#[macro_use]
mod macros;
pub mod arith_kind;
pub mod arithmetic;
pub mod bitwidth;
pub mod error;
pub mod extent;
pub mod interval;
pub mod math;
pub mod ops;

pub use crate::arith_kind::ArithKind;
pub use crate::arithmetic::RelOp;
pub use crate::error::{IntervalError, Result};
pub use crate::extent::Extent;
pub use crate::interval::Interval;

/// Largest bit-width accepted by the bit-width conversions.
pub const MAX_BITWIDTH: u32 = 32;
