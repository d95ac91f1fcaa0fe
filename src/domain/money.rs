use std::ops::Sub;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Error;

/// Signed monetary quantity. Stored exactly, displayed as `$` plus two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const DISPLAY_DECIMALS: u32 = 2;

    /// Zero is not positive.
    pub fn is_positive(&self) -> bool {
        *self > Self::ZERO
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if !is_numeric_literal(s) {
            return Err(Error::InvalidAmount(s.to_string()));
        }

        // Syntax is already valid, so any failure left is a range problem.
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(Money)
            .map_err(|_| Error::AmountOutOfRange(s.to_string()))
    }
}

/// `[+-]digits[.digits][(e|E)[+-]digits]`, at least one mantissa digit.
fn is_numeric_literal(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };

    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int.len() + frac.len() == 0 || !all_digits(int) || !all_digits(frac) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_DECIMALS, RoundingStrategy::MidpointNearestEven);
        // Negatives that round to zero keep their sign: `$-0.00`.
        if rounded.is_zero() {
            let sign = if self.0 < Decimal::ZERO { "-" } else { "" };
            return write!(f, "${}0.00", sign);
        }
        write!(f, "${:.2}", rounded)
    }
}
