use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::ReceiptError;

/// Two fraction digits, no sign, no exponent.
pub(crate) static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("amount pattern is a valid regex"));

/// A monetary amount written with exactly two fraction digits, e.g. `"35.35"`.
///
/// The value is held as an exact decimal, so divisibility checks such as
/// "is a multiple of 0.25" are never affected by binary floating-point error.
///
/// # Examples
///
/// ```
/// use receipt_storage::models::Amount;
///
/// let total: Amount = "12.50".parse().unwrap();
/// assert!(total.is_multiple_of_quarter());
/// assert!(!total.is_whole());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    const QUARTER: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

    /// True when the fraction part is `.00`
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// True when the amount is an exact multiple of 0.25
    pub fn is_multiple_of_quarter(&self) -> bool {
        (self.0 % Self::QUARTER).is_zero()
    }

    /// Multiplies by `rate` and rounds the product up to the next integer.
    ///
    /// Returns `None` if the result does not fit in a `u64`.
    pub fn ceil_mul(&self, rate: Decimal) -> Option<u64> {
        use rust_decimal::prelude::ToPrimitive;

        self.0.checked_mul(rate)?.ceil().to_u64()
    }
}

impl FromStr for Amount {
    type Err = ReceiptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !AMOUNT_PATTERN.is_match(s) {
            return Err(ReceiptError::InvalidAmount(s.to_string()));
        }

        Decimal::from_str_exact(s)
            .map(Self)
            .map_err(|_| ReceiptError::InvalidAmount(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
