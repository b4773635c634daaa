//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront commerce operations.
///
/// Nothing here is fatal; every failure is local and recoverable by the
/// caller (typically by surfacing a message and letting the user retry).
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A quantity below 1 was requested where clamping would be unsafe.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// A variant-bearing product was added to the cart without a resolved SKU.
    #[error("No SKU matches the selected options for product {product_id}")]
    UnresolvedVariant { product_id: ProductId },

    /// Two SKUs of one product carry an identical attribute combination,
    /// making resolution ambiguous.
    #[error("Duplicate attribute combination on SKU {sku_code} of product {product_id}")]
    DuplicateSkuAttributes {
        product_id: ProductId,
        sku_code: String,
    },

    /// A variant-bearing product has no SKUs at all.
    #[error("Product {product_id} is marked as having variants but carries no SKUs")]
    MissingSkus { product_id: ProductId },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        expected: &'static str,
        got: &'static str,
    },
}
