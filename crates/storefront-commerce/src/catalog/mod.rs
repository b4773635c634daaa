//! Product catalog module.
//!
//! Contains the category tree, products and SKUs, variant attribute
//! definitions, vouchers, and the variant resolver.

mod attribute;
mod category;
mod product;
pub mod resolver;
mod voucher;

pub use attribute::{AttributeValue, VariantAttribute};
pub use category::{slugify, Category, CategoryIter, CategoryTree};
pub use product::{Brand, Product, ProductImage, Sku, Tag};
pub use resolver::{
    available_options, default_selection, effective_price, effective_stock, resolve,
    AttributeOptions, Selection,
};
pub use voucher::{DiscountType, Voucher};
