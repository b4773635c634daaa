//! E-commerce domain types and logic for the storefront.
//!
//! This crate provides the client-side core of the storefront:
//!
//! - **Catalog**: category tree, products, SKUs, variant attributes, vouchers
//! - **Variant resolution**: matching selected options to a concrete SKU
//! - **Cart**: line items, visibility, derived totals
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! // Resolve the user's selection to a SKU
//! let selection = default_selection(&product.skus);
//! let sku = resolve(&product.skus, &selection);
//!
//! // Add it to the cart at the effective price
//! let mut cart = Cart::new(Currency::BDT);
//! cart.add_item(&product, 1, sku)?;
//! println!("Total: {}", cart.total_price());
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money, Price};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money, Price};

    // Catalog
    pub use crate::catalog::{
        available_options, default_selection, effective_price, effective_stock, resolve,
        AttributeOptions, Brand, Category, CategoryTree, Product, ProductImage, Selection, Sku,
        Tag, VariantAttribute, Voucher,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem, CartSummary, SummaryLine};
}
