//! Monetary amounts in whole dollars and cents.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidValue;

/// An amount of money, ordered by `dollars` and then by `cents`.
///
/// `cents` is always within `[0, 99]`. Negative amounts borrow from the dollars, so that
/// `-1.25` is stored as `-2` dollars and `75` cents, and the field order agrees with the
/// numeric order.
///
/// # Examples
///
/// ```
/// use threeway::{Money, Outcome, ThreeWay};
///
/// let price = Money::new(42, 50).unwrap();
/// assert_eq!(price.compare(&Money::new(42, 51).unwrap()), Outcome::Less);
/// assert_eq!(price.compare(&Money::new(0, 99).unwrap()), Outcome::Greater);
/// assert!(Money::new(42, 150).is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMoney")]
pub struct Money {
    dollars: i64,
    cents: u8,
}

crate::fieldwise_order!(strong Money { dollars: i64, cents: u8 });

impl Money {
    /// Creates an amount, failing unless `cents` is within `[0, 99]`.
    pub fn new(dollars: i64, cents: i64) -> Result<Money, InvalidValue> {
        if !(0..=99).contains(&cents) {
            return Err(InvalidValue::new("cents", format!("{} is outside [0, 99]", cents)));
        }
        Ok(Money { dollars, cents: cents as u8 })
    }

    /// Creates an amount from a total number of cents.
    pub const fn from_cents(total: i64) -> Money {
        Money {
            dollars: total.div_euclid(100),
            cents: total.rem_euclid(100) as u8,
        }
    }

    /// The dollars field.
    pub fn dollars(&self) -> i64 {
        self.dollars
    }

    /// The cents field, within `[0, 99]`.
    pub fn cents(&self) -> u8 {
        self.cents
    }

    /// The amount as a number of cents.
    pub fn total_cents(&self) -> i128 {
        i128::from(self.dollars) * 100 + i128::from(self.cents)
    }
}

/// The fixed-point pair `(dollars, cents)`.
impl TryFrom<(i64, i64)> for Money {
    type Error = InvalidValue;
    fn try_from((dollars, cents): (i64, i64)) -> Result<Self, Self::Error> {
        Money::new(dollars, cents)
    }
}

/// A floating point amount that names a whole number of cents.
///
/// The amount may differ from a cent only by floating point error, so `0.1 + 0.2` is thirty
/// cents while `42.504` is rejected rather than rounded.
impl TryFrom<f64> for Money {
    type Error = InvalidValue;
    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        if !amount.is_finite() {
            return Err(InvalidValue::new("amount", format!("{} is not a finite number", amount)));
        }
        let scaled = amount * 100.0;
        let cents = scaled.round();
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(InvalidValue::new("amount", format!("{} is out of range", amount)));
        }
        if (scaled - cents).abs() > scaled.abs().max(1.0) * 4.0 * f64::EPSILON {
            return Err(InvalidValue::new("cents", format!("{} has more than two decimals", amount)));
        }
        Ok(Money::from_cents(cents as i64))
    }
}

/// Parses `42.50`, `$42.50`, `-$3.07`, `7` and the like; at most two decimals.
impl FromStr for Money {
    type Err = InvalidValue;
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidValue::new("amount", format!("cannot parse {:?}", text));

        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) if !fraction.is_empty() => (whole, fraction),
            Some(_) => return Err(invalid()),
            None => (unsigned, ""),
        };
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(whole) || (!fraction.is_empty() && !digits(fraction)) {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(InvalidValue::new("cents", format!("{:?} has more than two decimals", text)));
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse::<i64>().map_err(|_| invalid())?,
        };
        let total = whole
            .checked_mul(100)
            .and_then(|total| total.checked_add(cents))
            .ok_or_else(invalid)?;
        Ok(Money::from_cents(if negative { -total } else { total }))
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_cents();
        let sign = if total < 0 { "-" } else { "" };
        let magnitude = total.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

#[derive(Deserialize)]
struct RawMoney {
    dollars: i64,
    cents: u8,
}

impl TryFrom<RawMoney> for Money {
    type Error = InvalidValue;
    fn try_from(raw: RawMoney) -> Result<Self, Self::Error> {
        Money::new(raw.dollars, i64::from(raw.cents))
    }
}
