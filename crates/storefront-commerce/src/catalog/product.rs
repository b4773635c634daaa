//! Product and SKU types.

use crate::error::CommerceError;
use crate::ids::{BrandId, CategoryId, ProductId, SkuId, TagId};
use crate::money::{Money, Price};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tag attached to products for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique tag identifier.
    pub id: TagId,
    /// Tag name (e.g., "Slim Fit").
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
}

/// A product brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// Brand name.
    pub name: String,
    /// Brand description.
    pub description: String,
}

/// A product gallery image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    /// Unique image identifier.
    pub id: i64,
    /// Image URL.
    pub image: String,
}

/// A concrete stock-keeping unit of a variant-bearing product.
///
/// Each SKU pins one value per variant attribute (e.g., Color: Blue,
/// Size: L) and carries its own price, discount, and stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sku {
    /// Unique SKU identifier.
    pub id: SkuId,
    /// Parent product ID.
    pub product: ProductId,
    /// Unique SKU code.
    pub sku_code: String,
    /// Price of this SKU.
    pub price: Money,
    /// Discounted price, when a sale applies.
    pub discount_price: Option<Money>,
    /// Units in stock.
    pub stock_quantity: u32,
    /// Attribute name to value (e.g., "Color" -> "Blue").
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Sku {
    /// Create a SKU with the given attribute pairs.
    pub fn new(
        id: SkuId,
        product: ProductId,
        sku_code: impl Into<String>,
        price: Money,
        attributes: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            id,
            product,
            sku_code: sku_code.into(),
            price,
            discount_price: None,
            stock_quantity: 0,
            attributes: attributes.into_iter().collect(),
        }
    }

    /// The price the customer pays for this SKU.
    pub fn effective_price(&self) -> Price {
        Price::of(self.price, self.discount_price)
    }

    /// Check if this SKU has units in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Check whether this SKU satisfies a partial attribute selection.
    ///
    /// Every selected (name, value) pair must equal this SKU's value for
    /// that attribute; attributes absent from the selection are wildcards.
    pub fn matches(&self, selection: &BTreeMap<String, String>) -> bool {
        selection
            .iter()
            .all(|(name, value)| self.attributes.get(name) == Some(value))
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Short description for listings.
    pub short_description: String,
    /// Base price, authoritative when the product has no variants.
    pub base_price: Money,
    /// Product-level discounted price.
    pub discount_price: Option<Money>,
    /// Product-level stock, authoritative when the product has no variants.
    pub stock_quantity: u32,
    /// Whether purchasable units are the SKUs rather than the product itself.
    pub has_variants: bool,
    /// Category this product is listed under.
    pub category: Option<CategoryId>,
    /// Brand, when known.
    pub brand: Option<BrandId>,
    /// Bullet-point selling features.
    #[serde(default)]
    pub key_features: Vec<String>,
    /// Thumbnail URL for listings.
    pub thumbnail: String,
    /// Tags for filtering.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Gallery images.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Stock-keeping units; empty unless `has_variants`.
    #[serde(default)]
    pub skus: Vec<Sku>,
    /// Whether the product is visible in the storefront.
    pub is_active: bool,
}

impl Product {
    /// Create a minimal active product with no variants.
    pub fn new(id: ProductId, name: impl Into<String>, base_price: Money) -> Self {
        let name = name.into();
        let slug = super::category::slugify(&name);
        Self {
            id,
            name,
            slug,
            short_description: String::new(),
            base_price,
            discount_price: None,
            stock_quantity: 0,
            has_variants: false,
            category: None,
            brand: None,
            key_features: Vec::new(),
            thumbnail: String::new(),
            tags: Vec::new(),
            images: Vec::new(),
            skus: Vec::new(),
            is_active: true,
        }
    }

    /// The product-level price, used when no SKU applies.
    pub fn base_effective_price(&self) -> Price {
        Price::of(self.base_price, self.discount_price)
    }

    /// Validate the variant invariants.
    ///
    /// A variant-bearing product must carry at least one SKU, and no two
    /// SKUs may pin an identical attribute combination (resolution would be
    /// ambiguous otherwise).
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !self.has_variants {
            return Ok(());
        }
        if self.skus.is_empty() {
            return Err(CommerceError::MissingSkus {
                product_id: self.id,
            });
        }
        for (i, sku) in self.skus.iter().enumerate() {
            if self.skus[..i].iter().any(|s| s.attributes == sku.attributes) {
                return Err(CommerceError::DuplicateSkuAttributes {
                    product_id: self.id,
                    sku_code: sku.sku_code.clone(),
                });
            }
        }
        Ok(())
    }
}
