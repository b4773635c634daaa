//! Variant resolution: matching selected attribute values to a concrete SKU.
//!
//! The product detail page builds a [`Selection`] one attribute at a time as
//! the user picks option chips. Resolution finds the SKU that agrees with
//! every selected value; attributes the user has not picked yet act as
//! wildcards. When a partial selection matches more than one SKU, the first
//! in source order wins. That tie-break is deliberate: it mirrors the
//! observed catalog behavior, and callers wanting a deterministic unit must
//! pin every attribute.

use crate::catalog::product::{Product, Sku};
use crate::money::Price;
use std::collections::BTreeMap;

/// The user's current attribute choices, attribute name to value.
pub type Selection = BTreeMap<String, String>;

/// Distinct values observed for one attribute across a product's SKUs,
/// in first-observed order, for rendering option chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeOptions {
    /// Attribute name (e.g., "Color").
    pub name: String,
    /// Distinct values in first-observed order.
    pub values: Vec<String>,
}

/// Find the SKU matching a selection, if any.
///
/// Never panics; no match is an ordinary `None` and the caller must refuse
/// to add to cart rather than fall back to a wrong price.
pub fn resolve<'a>(skus: &'a [Sku], selection: &Selection) -> Option<&'a Sku> {
    skus.iter().find(|sku| sku.matches(selection))
}

/// The selection the detail page starts from before any user interaction:
/// the first SKU's full attribute map.
pub fn default_selection(skus: &[Sku]) -> Selection {
    skus.first()
        .map(|sku| sku.attributes.clone())
        .unwrap_or_default()
}

/// Collect the distinct values per attribute across all SKUs.
pub fn available_options(skus: &[Sku]) -> Vec<AttributeOptions> {
    let mut options: Vec<AttributeOptions> = Vec::new();
    for sku in skus {
        for (name, value) in &sku.attributes {
            match options.iter_mut().find(|o| &o.name == name) {
                Some(existing) => {
                    if !existing.values.contains(value) {
                        existing.values.push(value.clone());
                    }
                }
                None => options.push(AttributeOptions {
                    name: name.clone(),
                    values: vec![value.clone()],
                }),
            }
        }
    }
    options
}

/// The unit price the customer pays for the current resolution state.
///
/// A resolved SKU is authoritative; otherwise the product-level price
/// applies (which is also the plain-product path).
pub fn effective_price(product: &Product, resolved: Option<&Sku>) -> Price {
    match resolved {
        Some(sku) => sku.effective_price(),
        None => product.base_effective_price(),
    }
}

/// The stock available for the current resolution state.
pub fn effective_stock(product: &Product, resolved: Option<&Sku>) -> u32 {
    match resolved {
        Some(sku) => sku.stock_quantity,
        None => product.stock_quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ProductId, SkuId};
    use crate::money::{Currency, Money};

    fn sku(id: i64, price_cents: i64, pairs: &[(&str, &str)]) -> Sku {
        Sku::new(
            SkuId::new(id),
            ProductId::new(1),
            format!("SKU-{id}"),
            Money::new(price_cents, Currency::USD),
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    fn selection(pairs: &[(&str, &str)]) -> Selection {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Red/M at 10.00, Red/L at 12.00.
    fn two_skus() -> Vec<Sku> {
        vec![
            sku(1, 1000, &[("Color", "Red"), ("Size", "M")]),
            sku(2, 1200, &[("Color", "Red"), ("Size", "L")]),
        ]
    }

    #[test]
    fn test_full_selection_is_deterministic() {
        let skus = two_skus();
        let resolved = resolve(&skus, &selection(&[("Color", "Red"), ("Size", "L")])).unwrap();
        assert_eq!(resolved.id, SkuId::new(2));
        assert_eq!(resolved.price.amount_cents, 1200);
    }

    #[test]
    fn test_partial_selection_takes_first_source_order_match() {
        let skus = two_skus();
        // Only Size pinned: Size L matches only SKU 2 here, but Color alone
        // matches both and resolves to the first in source order.
        let resolved = resolve(&skus, &selection(&[("Size", "L")])).unwrap();
        assert_eq!(resolved.id, SkuId::new(2));

        let resolved = resolve(&skus, &selection(&[("Color", "Red")])).unwrap();
        assert_eq!(resolved.id, SkuId::new(1));
    }

    #[test]
    fn test_no_match_is_none() {
        let skus = two_skus();
        assert!(resolve(&skus, &selection(&[("Color", "Green")])).is_none());
        assert!(resolve(&[], &Selection::new()).is_none());
    }

    #[test]
    fn test_default_selection_comes_from_first_sku() {
        let skus = two_skus();
        let sel = default_selection(&skus);
        assert_eq!(sel.get("Color").map(String::as_str), Some("Red"));
        assert_eq!(sel.get("Size").map(String::as_str), Some("M"));
        assert!(default_selection(&[]).is_empty());
    }

    #[test]
    fn test_available_options_dedup_and_order() {
        let skus = vec![
            sku(1, 1000, &[("Color", "Blue"), ("Size", "L")]),
            sku(2, 1000, &[("Color", "Green"), ("Size", "XXL")]),
            sku(3, 1000, &[("Color", "Blue"), ("Size", "M")]),
        ];
        let options = available_options(&skus);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].name, "Color");
        assert_eq!(options[0].values, vec!["Blue", "Green"]);
        assert_eq!(options[1].values, vec!["L", "XXL", "M"]);
    }

    #[test]
    fn test_effective_price_prefers_resolved_sku() {
        let mut product = Product::new(
            ProductId::new(1),
            "Tee",
            Money::new(2000, Currency::USD),
        );
        product.discount_price = Some(Money::new(1900, Currency::USD));
        product.has_variants = true;
        product.skus = two_skus();

        let resolved = resolve(&product.skus, &selection(&[("Size", "L")]));
        let price = effective_price(&product, resolved);
        assert_eq!(price.amount().amount_cents, 1200);

        // No resolution falls back to the product-level discount.
        let price = effective_price(&product, None);
        assert_eq!(price.amount().amount_cents, 1900);
        assert_eq!(price.original().unwrap().amount_cents, 2000);
    }

    #[test]
    fn test_effective_price_plain_product_fallback() {
        let product = Product::new(
            ProductId::new(1),
            "Socks",
            Money::new(500, Currency::USD),
        );
        let price = effective_price(&product, None);
        assert_eq!(price.amount().amount_cents, 500);
        assert!(price.original().is_none());
    }

    #[test]
    fn test_effective_stock() {
        let mut product = Product::new(
            ProductId::new(1),
            "Tee",
            Money::new(2000, Currency::USD),
        );
        product.stock_quantity = 7;
        let mut s = sku(1, 1000, &[("Color", "Red")]);
        s.stock_quantity = 3;

        assert_eq!(effective_stock(&product, Some(&s)), 3);
        assert_eq!(effective_stock(&product, None), 7);
    }
}
