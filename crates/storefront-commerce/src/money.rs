//! Money and price types.
//!
//! Monetary values use a cents-based integer representation to avoid the
//! floating-point precision issues that plague monetary calculations. The
//! catalog provider delivers prices as decimal strings (e.g., "2000.00"),
//! which `Money::parse` converts losslessly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BDT,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BDT => "BDT",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BDT => "\u{09f3}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse a decimal string such as "2000.00" or "1950.5".
    ///
    /// Returns `None` for malformed input or more fractional digits than the
    /// currency carries.
    pub fn parse(s: &str, currency: Currency) -> Option<Self> {
        let s = s.trim();
        let (sign, s) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        let places = currency.decimal_places() as usize;
        if frac.len() > places || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };
        let mut cents = whole.checked_mul(10_i64.pow(currency.decimal_places()))?;
        if !frac.is_empty() {
            let frac_value: i64 = frac.parse().ok()?;
            cents = cents.checked_add(frac_value * 10_i64.pow((places - frac.len()) as u32))?;
        }
        Some(Self::new(sign * cents, currency))
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value for display purposes.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Try to add another Money value, returning None if currencies differ.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents.checked_add(other.amount_cents)?,
            self.currency,
        ))
    }

    /// Multiply by a scalar quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// The price a customer actually pays, distinguishing a genuine discount
/// from a plain price.
///
/// `Discounted` is only ever constructed when the discount is strictly below
/// the original, so `original()` is present if and only if a real discount
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Price {
    /// No discount applies.
    Plain { amount: Money },
    /// A discount applies; `original` is the pre-discount price.
    Discounted { amount: Money, original: Money },
}

impl Price {
    /// Build a price from a base amount and an optional discount.
    ///
    /// The discount is honored only when it is strictly lower than the base
    /// amount in the same currency.
    pub fn of(base: Money, discount: Option<Money>) -> Self {
        match discount {
            Some(d) if d.currency == base.currency && d.amount_cents < base.amount_cents => {
                Price::Discounted {
                    amount: d,
                    original: base,
                }
            }
            _ => Price::Plain { amount: base },
        }
    }

    /// The effective amount the customer pays.
    pub fn amount(&self) -> Money {
        match self {
            Price::Plain { amount } => *amount,
            Price::Discounted { amount, .. } => *amount,
        }
    }

    /// The pre-discount amount, when a genuine discount applies.
    pub fn original(&self) -> Option<Money> {
        match self {
            Price::Plain { .. } => None,
            Price::Discounted { original, .. } => Some(*original),
        }
    }

    /// Check whether a discount applies.
    pub fn is_discounted(&self) -> bool {
        matches!(self, Price::Discounted { .. })
    }
}
