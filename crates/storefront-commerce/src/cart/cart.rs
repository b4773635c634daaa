//! Cart state and line items.

use crate::catalog::resolver;
use crate::catalog::{Product, Sku};
use crate::error::CommerceError;
use crate::ids::{CartItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A line item in the cart.
///
/// The unit price is the effective price at add time; later catalog price
/// changes do not touch lines already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Cart-local identifier, unique within the session.
    pub id: CartItemId,
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Effective unit price snapshotted at add time.
    pub unit_price: Money,
    /// Quantity, always at least 1.
    pub quantity: i64,
    /// Thumbnail URL for the mini-cart.
    pub image: String,
    /// SKU code, when a variant was resolved.
    pub sku_code: Option<String>,
    /// The attribute values that picked the SKU, for display.
    pub selected_attributes: Option<BTreeMap<String, String>>,
}

impl CartItem {
    /// Total for this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// The shopping cart: an ordered list of line items plus the mini-cart
/// visibility flag.
///
/// The cart owns its state exclusively; pages read derived values and go
/// through the operations here for every mutation. Totals are recomputed on
/// every read, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    is_open: bool,
    currency: Currency,
    next_item_id: i64,
}

impl Cart {
    /// Create an empty, closed cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            is_open: false,
            currency,
            next_item_id: 1,
        }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the mini-cart is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of line items (not summed quantities).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all lines.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Total price across all lines.
    pub fn total_price(&self) -> Money {
        self.items.iter().fold(Money::zero(self.currency), |acc, i| {
            acc.try_add(&i.line_total()).unwrap_or(acc)
        })
    }

    /// Add a product to the cart, appending a new line item.
    ///
    /// `resolved` is the SKU picked by the variant resolver; it must be
    /// present for variant-bearing products. The cart opens as a side
    /// effect. Two adds of the same product and SKU yield two lines.
    ///
    /// Returns an error, before any state change, if:
    /// - `quantity` is below 1
    /// - the product has variants and no SKU was resolved
    /// - the effective price is in a different currency than the cart
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: i64,
        resolved: Option<&Sku>,
    ) -> Result<CartItemId, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if product.has_variants && resolved.is_none() {
            return Err(CommerceError::UnresolvedVariant {
                product_id: product.id,
            });
        }

        let unit_price = resolver::effective_price(product, resolved).amount();
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code(),
                got: unit_price.currency.code(),
            });
        }

        let id = CartItemId::new(self.next_item_id);
        self.next_item_id += 1;
        self.items.push(CartItem {
            id,
            product_id: product.id,
            name: product.name.clone(),
            unit_price,
            quantity,
            image: product.thumbnail.clone(),
            sku_code: resolved.map(|s| s.sku_code.clone()),
            selected_attributes: resolved.map(|s| s.attributes.clone()),
        });
        self.is_open = true;
        tracing::debug!(
            product = %product.id,
            %quantity,
            sku = resolved.map(|s| s.sku_code.as_str()).unwrap_or("-"),
            "cart item added"
        );
        Ok(id)
    }

    /// Remove a line item. Returns false, leaving state untouched, when the
    /// id is unknown.
    pub fn remove_item(&mut self, id: CartItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        let removed = self.items.len() < before;
        if removed {
            tracing::debug!(item = %id, "cart item removed");
        }
        removed
    }

    /// Set a line item's quantity, clamped to a minimum of 1.
    ///
    /// The decrement button in the UI relies on this floor; an explicit 0 or
    /// negative request stores 1. Returns false when the id is unknown.
    pub fn update_quantity(&mut self, id: CartItemId, quantity: i64) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity.max(1);
                true
            }
            None => false,
        }
    }

    /// Remove every line item. Visibility is untouched.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
    }

    /// Open the mini-cart.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the mini-cart.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Toggle the mini-cart.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ProductId, SkuId};

    fn plain_product(id: i64, price_cents: i64) -> Product {
        let mut p = Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Money::new(price_cents, Currency::USD),
        );
        p.stock_quantity = 10;
        p
    }

    fn variant_product() -> Product {
        let mut p = plain_product(1, 2000);
        p.has_variants = true;
        p.skus = vec![
            Sku::new(
                SkuId::new(1),
                p.id,
                "SKU-M",
                Money::new(1000, Currency::USD),
                [("Size".to_string(), "M".to_string())],
            ),
            Sku::new(
                SkuId::new(2),
                p.id,
                "SKU-L",
                Money::new(1200, Currency::USD),
                [("Size".to_string(), "L".to_string())],
            ),
        ];
        p
    }

    #[test]
    fn test_add_opens_cart_and_snapshots_price() {
        let mut cart = Cart::new(Currency::USD);
        assert!(!cart.is_open());

        let product = plain_product(1, 500);
        cart.add_item(&product, 2, None).unwrap();

        assert!(cart.is_open());
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().amount_cents, 1000);
    }

    #[test]
    fn test_same_sku_added_twice_appends_two_lines() {
        let mut cart = Cart::new(Currency::USD);
        let product = variant_product();
        let sku2 = product.skus[1].clone();

        cart.add_item(&product, 2, Some(&sku2)).unwrap();
        cart.add_item(&product, 1, Some(&sku2)).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price().amount_cents, 3600);
    }

    #[test]
    fn test_add_rejects_unresolved_variant_before_mutation() {
        let mut cart = Cart::new(Currency::USD);
        let product = variant_product();

        let err = cart.add_item(&product, 1, None).unwrap_err();
        assert!(matches!(err, CommerceError::UnresolvedVariant { .. }));
        assert!(cart.is_empty());
        assert!(!cart.is_open());
    }

    #[test]
    fn test_add_rejects_quantity_below_one() {
        let mut cart = Cart::new(Currency::USD);
        let product = plain_product(1, 500);

        assert!(matches!(
            cart.add_item(&product, 0, None),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(matches!(
            cart.add_item(&product, -3, None),
            Err(CommerceError::InvalidQuantity(-3))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_currency_mismatch() {
        let mut cart = Cart::new(Currency::EUR);
        let product = plain_product(1, 500);
        assert!(matches!(
            cart.add_item(&product, 1, None),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let mut cart = Cart::new(Currency::USD);
        let product = plain_product(1, 500);
        let id = cart.add_item(&product, 3, None).unwrap();

        assert!(cart.update_quantity(id, 0));
        assert_eq!(cart.items()[0].quantity, 1);

        assert!(cart.update_quantity(id, -5));
        assert_eq!(cart.items()[0].quantity, 1);

        assert!(cart.update_quantity(id, 4));
        assert_eq!(cart.items()[0].quantity, 4);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new(Currency::USD);
        let product = plain_product(1, 500);
        cart.add_item(&product, 1, None).unwrap();

        assert!(!cart.update_quantity(CartItemId::new(999), 5));
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new(Currency::USD);
        let product = plain_product(1, 500);
        let id = cart.add_item(&product, 1, None).unwrap();
        let snapshot = cart.items().to_vec();

        assert!(!cart.remove_item(CartItemId::new(999)));
        assert_eq!(cart.items(), snapshot.as_slice());

        assert!(cart.remove_item(id));
        assert!(!cart.remove_item(id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_hold_after_every_operation() {
        let mut cart = Cart::new(Currency::USD);
        let a = plain_product(1, 1000);
        let b = plain_product(2, 2500);

        let check = |cart: &Cart| {
            let items: i64 = cart.items().iter().map(|i| i.quantity).sum();
            let price: i64 = cart
                .items()
                .iter()
                .map(|i| i.unit_price.amount_cents * i.quantity)
                .sum();
            assert_eq!(cart.total_items(), items);
            assert_eq!(cart.total_price().amount_cents, price);
        };

        let id_a = cart.add_item(&a, 2, None).unwrap();
        check(&cart);
        cart.add_item(&b, 1, None).unwrap();
        check(&cart);
        cart.update_quantity(id_a, 5);
        check(&cart);
        cart.remove_item(id_a);
        check(&cart);
        cart.clear();
        check(&cart);
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_visibility_toggles_do_not_touch_items() {
        let mut cart = Cart::new(Currency::USD);
        let product = plain_product(1, 500);
        cart.add_item(&product, 1, None).unwrap();

        cart.close();
        assert!(!cart.is_open());
        cart.toggle();
        assert!(cart.is_open());
        cart.toggle();
        cart.open();
        assert!(cart.is_open());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_item_ids_are_session_unique() {
        let mut cart = Cart::new(Currency::USD);
        let product = plain_product(1, 500);
        let id1 = cart.add_item(&product, 1, None).unwrap();
        let id2 = cart.add_item(&product, 1, None).unwrap();
        assert_ne!(id1, id2);

        // Ids are not reused after removal.
        cart.remove_item(id2);
        let id3 = cart.add_item(&product, 1, None).unwrap();
        assert_ne!(id2, id3);
    }
}
