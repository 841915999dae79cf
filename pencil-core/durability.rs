//! Finite or unlimited wear counters.
//!
//! Every resource of a pencil (point, body length, eraser) is a
//! [`Durability`]. A limited counter only ever goes down, saturating at zero;
//! an unlimited one ignores wear entirely and can afford any cost.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Durability {
  Limited(u64),
  #[default]
  Unlimited,
}

impl Durability {
  #[inline]
  pub const fn is_unlimited(self) -> bool {
    matches!(self, Self::Unlimited)
  }

  /// Whether nothing is left to spend.
  #[inline]
  pub const fn is_exhausted(self) -> bool {
    matches!(self, Self::Limited(0))
  }

  #[inline]
  pub const fn can_afford(self, cost: u64) -> bool {
    match self {
      Self::Limited(remaining) => remaining >= cost,
      Self::Unlimited => true,
    }
  }

  /// Remaining units, `None` when unlimited.
  #[inline]
  pub const fn remaining(self) -> Option<u64> {
    match self {
      Self::Limited(remaining) => Some(remaining),
      Self::Unlimited => None,
    }
  }

  /// Wear the counter down by `cost`, clamping at zero.
  #[inline]
  pub fn degrade(&mut self, cost: u64) {
    if let Self::Limited(remaining) = self {
      *remaining = remaining.saturating_sub(cost);
    }
  }
}

impl From<u64> for Durability {
  fn from(value: u64) -> Self {
    Self::Limited(value)
  }
}

impl From<Option<u64>> for Durability {
  fn from(value: Option<u64>) -> Self {
    value.map_or(Self::Unlimited, Self::Limited)
  }
}

impl fmt::Display for Durability {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Limited(remaining) => write!(f, "{remaining}"),
      Self::Unlimited => f.write_str("unlimited"),
    }
  }
}
