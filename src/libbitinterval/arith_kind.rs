// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arithmetic representation of the values an interval bounds.
//!
//! The kind is not stored inside an interval, it is given by the caller to the operators whose result depends on the signedness of the operands (multiplication, division, modulo, balancing and bit-width conversions).

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ArithKind {
  Unsigned,
  /// Two's complement integer.
  Signed,
  /// Signed, and known to be greater or equal to zero.
  SignedPositive,
  /// Signed, and known to be less or equal to zero.
  SignedNegative
}

impl ArithKind
{
  pub fn is_unsigned(self) -> bool {
    self == ArithKind::Unsigned
  }

  /// `Signed`, `SignedPositive` and `SignedNegative` share the same rules in the sign-sensitive operators.
  pub fn is_signed_family(self) -> bool {
    !self.is_unsigned()
  }

  pub fn name(self) -> &'static str {
    match self {
      ArithKind::Unsigned => "unsigned",
      ArithKind::Signed => "signed",
      ArithKind::SignedPositive => "signed positive",
      ArithKind::SignedNegative => "signed negative"
    }
  }
}

impl Display for ArithKind
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.write_str(self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseArithKindError {
  _priv: ()
}

impl Display for ParseArithKindError
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.write_str("unknown arithmetic kind")
  }
}

impl std::error::Error for ParseArithKindError {}

impl FromStr for ArithKind
{
  type Err = ParseArithKindError;

  fn from_str(s: &str) -> Result<ArithKind, ParseArithKindError> {
    match s {
      "unsigned" => Ok(ArithKind::Unsigned),
      "signed" => Ok(ArithKind::Signed),
      "signed positive" => Ok(ArithKind::SignedPositive),
      "signed negative" => Ok(ArithKind::SignedNegative),
      _ => Err(ParseArithKindError { _priv: () })
    }
  }
}

impl Serialize for ArithKind
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
  {
    serializer.serialize_str(self.name())
  }
}

impl<'de> Deserialize<'de> for ArithKind
{
  fn deserialize<D>(deserializer: D) -> Result<ArithKind, D::Error>
    where D: Deserializer<'de>
  {
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(|_| de::Error::unknown_variant(&name,
      &["unsigned", "signed", "signed positive", "signed negative"]))
  }
}
