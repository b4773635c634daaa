//! Voucher types managed in the admin console.

use crate::ids::VoucherId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Type of voucher discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    /// Percentage off the subtotal.
    Percentage,
    /// Fixed amount off.
    FixedAmount,
}

/// A voucher code with a validity window and usage limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Voucher {
    /// Unique voucher identifier.
    pub id: VoucherId,
    /// Voucher code (e.g., "SAVE10").
    pub code: String,
    /// Type of discount.
    pub discount_type: DiscountType,
    /// Percentage (0.0 - 100.0) or fixed amount in cents, per type.
    pub discount_value: f64,
    /// Start of validity (Unix timestamp).
    pub valid_from: i64,
    /// End of validity (Unix timestamp).
    pub valid_to: i64,
    /// Maximum number of redemptions.
    pub usage_limit: u32,
    /// Cap on the discount a percentage voucher may grant.
    pub max_discount_amount: Money,
    /// Redemptions so far.
    pub times_used: u32,
}

impl Voucher {
    /// Check whether the voucher is inside its validity window.
    pub fn is_valid_at(&self, timestamp: i64) -> bool {
        timestamp >= self.valid_from && timestamp <= self.valid_to
    }

    /// Check whether the usage limit has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.times_used >= self.usage_limit
    }

    /// Calculate the discount this voucher grants on a subtotal.
    ///
    /// Percentage discounts are capped at `max_discount_amount`; fixed
    /// discounts never exceed the subtotal itself.
    pub fn discount_for(&self, subtotal: Money) -> Money {
        match self.discount_type {
            DiscountType::Percentage => {
                let raw = (subtotal.amount_cents as f64 * self.discount_value / 100.0).round()
                    as i64;
                let capped = raw.min(self.max_discount_amount.amount_cents);
                Money::new(capped, subtotal.currency)
            }
            DiscountType::FixedAmount => {
                let amount = (self.discount_value as i64).min(subtotal.amount_cents);
                Money::new(amount, subtotal.currency)
            }
        }
    }
}
