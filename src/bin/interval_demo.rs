// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints the result of each interval operator on a few sample intervals.

use bitinterval::ArithKind::*;
use bitinterval::{Interval, Result};
use std::fmt::Display;

fn report<T: Display>(name: &str, expr: String, res: Result<T>) {
  match res {
    Ok(value) => println!("Testing {}: {} = {}", name, expr, value),
    Err(error) => log::error!("{}: {} failed: {}", name, expr, error)
  }
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let a: Interval<i32> = Interval::new(0, 1);
  let b = Interval::new(2, 5);
  let c = Interval::new(7, 7);
  let d = Interval::new(-8, 7);
  let f = Interval::new(25, 178);

  report("IntervalAdd", format!("{} + {}", a, b), Ok(a + b));
  report("IntervalAdd", format!("{} + {}", a, c), Ok(a + c));
  report("IntervalSub", format!("{} - {}", a, a), Ok(a - a));
  report("IntervalNeg", format!("neg {}", a), Ok(-a));
  report("IntervalMul", format!("{} * {}", b, d), Ok(b.mul(&d, Signed, Signed)));
  report("IntervalDiv for UNSIGNEDs", format!("{} / {}", f, b), f.div(&b, Unsigned, Unsigned));
  report("IntervalDiv for SIGNEDs", format!("{} / {}", f, b), f.div(&b, Signed, Signed));
  report("IntervalMod for UNSIGNEDs", format!("{} % {}", f, b), f.modulo(&b, Unsigned));
  report("IntervalMod for SIGNEDs", format!("{} % {}", f, b), f.modulo(&b, Signed));

  let g = Interval::new(15, 244);
  report("IntervalSqrt", format!("sqrt {}", g), g.sqrt());
  let h = Interval::new(-32, 63);
  report("IntervalAbs", format!("abs {}", h), Ok(h.abs()));
  report("IntervalMax", format!("max {} , {}", a, b), Ok(a.max(&b)));
  report("IntervalMin", format!("min {} , {}", a, b), Ok(a.min(&b)));

  report("IntegerBitwidthToInterval for UNSIGNEDs", "BW2IA 11".to_string(),
    Interval::<i32>::bitwidth_to_interval(11, Unsigned));
  report("IntegerBitwidthToInterval for SIGNEDs", "BW2IA 24".to_string(),
    Interval::<i32>::bitwidth_to_interval(24, Signed));

  let i = Interval::new(0, 1023);
  report("IntervalToIntegerBitwidth for UNSIGNEDs", format!("IA2BW {}", i), i.interval_to_bitwidth(Unsigned));
  let j = Interval::new(-64, 7);
  report("IntervalToIntegerBitwidth for SIGNEDs", format!("IA2BW {}", j), j.interval_to_bitwidth(Signed));

  let k = Interval::new(5, 38);
  report("IntervalBalanced for UNSIGNEDs", format!("BALANCE {}", k), k.to_balanced(Unsigned));
  let l = Interval::new(-65, 121);
  report("IntervalBalanced for SIGNEDs", format!("BALANCE {}", l), l.to_balanced(Signed));

  // Rejected inputs are reported through the logger.
  report("IntervalDiv by zero", format!("{} / {}", f, d), f.div(&d, Signed, Signed));
  report("IntervalNot", format!("not {}", a), a.not());
}
