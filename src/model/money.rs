use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in minor currency units (paise, cents).
///
/// Never floating point. Arithmetic is checked and reports overflow as
/// `None` so callers can turn it into a validation error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub fn minor(self) -> i64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_minor_digits() {
        assert_eq!(Money(12_050).to_string(), "120.50");
        assert_eq!(Money(7).to_string(), "0.07");
        assert_eq!(Money(-250).to_string(), "-2.50");
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(Money(i64::MAX).checked_add(Money(1)), None);
        assert_eq!(Money(i64::MAX / 2).checked_mul(3), None);
        assert_eq!(Money(250).checked_mul(4), Some(Money(1000)));
    }

    #[test]
    fn serializes_as_a_bare_integer() {
        assert_eq!(serde_json::to_string(&Money(999)).unwrap(), "999");
    }
}
