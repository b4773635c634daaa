//! Catalog provider seam and in-memory data access for the storefront.
//!
//! This crate provides:
//! - `CatalogProvider` - per-entity async CRUD, the only interface the core
//!   consumes
//! - `CatalogRecord` - how each admin-managed entity builds from a draft
//!   and applies a partial update
//! - `MemoryProvider` - seedable in-memory implementation for tests and
//!   demos
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::{CatalogProvider, MemoryProvider, NewBrand};
//! use storefront_commerce::catalog::Brand;
//!
//! let brands: MemoryProvider<Brand> = MemoryProvider::new();
//! let nike = brands.create(NewBrand {
//!     name: "Nike".to_string(),
//!     description: "Global sportswear brand".to_string(),
//! }).await?;
//! brands.delete(nike.id.value()).await?;
//! ```

mod error;
mod memory;
mod provider;
mod records;

pub use error::ProviderError;
pub use memory::MemoryProvider;
pub use provider::{CatalogProvider, CatalogRecord};
pub use records::{
    AttributePatch, BrandPatch, CategoryPatch, NewAttribute, NewBrand, NewCategory, NewProduct,
    NewTag, NewVoucher, ProductPatch, TagPatch, VoucherPatch,
};
