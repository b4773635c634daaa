//! Read-only cart summary for the checkout page.

use crate::cart::Cart;
use crate::ids::CartItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A point-in-time snapshot of the cart for checkout display.
///
/// Pure read model; mutating the cart afterwards does not update an
/// existing summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Per-line breakdown in cart order.
    pub lines: Vec<SummaryLine>,
    /// Total quantity across all lines.
    pub total_items: i64,
    /// Total price across all lines.
    pub total_price: Money,
}

/// One line of the checkout summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryLine {
    /// The cart line this summarizes.
    pub item_id: CartItemId,
    /// Product name.
    pub name: String,
    /// SKU code, when a variant was selected.
    pub sku_code: Option<String>,
    /// Quantity.
    pub quantity: i64,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Unit price times quantity.
    pub line_total: Money,
}

impl CartSummary {
    /// Build a summary from the cart's current state.
    pub fn of(cart: &Cart) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| SummaryLine {
                item_id: item.id,
                name: item.name.clone(),
                sku_code: item.sku_code.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                line_total: item.line_total(),
            })
            .collect();
        Self {
            lines,
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::ProductId;
    use crate::money::Currency;

    #[test]
    fn test_summary_matches_cart() {
        let mut cart = Cart::new(Currency::USD);
        let product = Product::new(
            ProductId::new(1),
            "Widget",
            Money::new(1000, Currency::USD),
        );
        cart.add_item(&product, 3, None).unwrap();

        let summary = CartSummary::of(&cart);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].line_total.amount_cents, 3000);
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.total_price, cart.total_price());
    }

    #[test]
    fn test_summary_is_a_snapshot() {
        let mut cart = Cart::new(Currency::USD);
        let product = Product::new(
            ProductId::new(1),
            "Widget",
            Money::new(1000, Currency::USD),
        );
        cart.add_item(&product, 1, None).unwrap();

        let summary = CartSummary::of(&cart);
        cart.clear();
        assert_eq!(summary.total_items, 1);
        assert!(cart.is_empty());
    }
}
