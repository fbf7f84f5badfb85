use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::EngineError;

/// Signed token amount (the "T2C" unit).
///
/// Use this type for **all** token arithmetic in the engine (balances,
/// credit payouts, purchase prices). Amounts are whole tokens; there is no
/// fractional unit.
///
/// The value is signed:
/// - positive = credited to the wallet
/// - negative = debited from the wallet
///
/// # Examples
///
/// ```rust
/// use engine::Tokens;
///
/// let amount = Tokens::new(150);
/// assert_eq!(amount.raw(), 150);
/// assert_eq!(amount.to_string(), "150 T2C");
/// assert_eq!((-amount).to_string(), "-150 T2C");
/// ```
///
/// Parsing from user input (whole numbers only):
///
/// ```rust
/// use engine::Tokens;
///
/// assert_eq!("25".parse::<Tokens>().unwrap().raw(), 25);
/// assert!("12.5".parse::<Tokens>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Tokens(i64);

impl Tokens {
    pub const ZERO: Tokens = Tokens(0);

    /// Creates a new amount from a raw signed token count.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw signed token count.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Tokens) -> Option<Tokens> {
        self.0.checked_add(rhs.0).map(Tokens)
    }

    /// Checked subtraction (returns `None` on overflow).
    #[must_use]
    pub fn checked_sub(self, rhs: Tokens) -> Option<Tokens> {
        self.0.checked_sub(rhs.0).map(Tokens)
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} T2C", self.0)
    }
}

impl From<i64> for Tokens {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Tokens> for i64 {
    fn from(value: Tokens) -> Self {
        value.0
    }
}

impl Add for Tokens {
    type Output = Tokens;

    fn add(self, rhs: Tokens) -> Self::Output {
        Tokens(self.0 + rhs.0)
    }
}

impl AddAssign for Tokens {
    fn add_assign(&mut self, rhs: Tokens) {
        self.0 += rhs.0;
    }
}

impl Sub for Tokens {
    type Output = Tokens;

    fn sub(self, rhs: Tokens) -> Self::Output {
        Tokens(self.0 - rhs.0)
    }
}

impl SubAssign for Tokens {
    fn sub_assign(&mut self, rhs: Tokens) {
        self.0 -= rhs.0;
    }
}

impl Neg for Tokens {
    type Output = Tokens;

    fn neg(self) -> Self::Output {
        Tokens(-self.0)
    }
}

impl FromStr for Tokens {
    type Err = EngineError;

    /// Parses a whole-number token amount with an optional leading `+`/`-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount("invalid amount".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (-1i64, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (1i64, stripped)
        } else {
            (1i64, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }
        if !rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let raw: i64 = rest
            .parse()
            .map_err(|_| EngineError::InvalidAmount("amount too large".to_string()))?;

        Ok(Tokens(sign * raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_unit() {
        assert_eq!(Tokens::new(0).to_string(), "0 T2C");
        assert_eq!(Tokens::new(150).to_string(), "150 T2C");
        assert_eq!(Tokens::new(-60).to_string(), "-60 T2C");
    }

    #[test]
    fn parse_accepts_signed_integers() {
        assert_eq!("25".parse::<Tokens>().unwrap().raw(), 25);
        assert_eq!("+100".parse::<Tokens>().unwrap().raw(), 100);
        assert_eq!("-60".parse::<Tokens>().unwrap().raw(), -60);
        assert_eq!("  40 ".parse::<Tokens>().unwrap().raw(), 40);
    }

    #[test]
    fn parse_rejects_fractions_and_garbage() {
        assert!("12.5".parse::<Tokens>().is_err());
        assert!("".parse::<Tokens>().is_err());
        assert!("ten".parse::<Tokens>().is_err());
    }
}
