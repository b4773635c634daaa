//! `CatalogRecord` implementations for the admin-managed entities.
//!
//! Drafts carry what the create forms submit; patches carry what the edit
//! forms submit, with unset fields leaving the record untouched. Slugs are
//! derived from names on create and re-derived when a name changes, the way
//! the admin console does.

use crate::provider::CatalogRecord;
use serde::{Deserialize, Serialize};
use storefront_commerce::catalog::{
    slugify, AttributeValue, Brand, Category, Product, Tag, VariantAttribute, Voucher,
};
use storefront_commerce::ids::{
    AttributeId, BrandId, CategoryId, ProductId, TagId, VoucherId,
};
use storefront_commerce::money::Money;

// ---------------------------------------------------------------------------
// Brand
// ---------------------------------------------------------------------------

/// Payload for creating a brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBrand {
    pub name: String,
    pub description: String,
}

/// Partial update for a brand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CatalogRecord for Brand {
    const ENTITY: &'static str = "brand";
    type Draft = NewBrand;
    type Patch = BrandPatch;

    fn id(&self) -> i64 {
        self.id.value()
    }

    fn build(id: i64, draft: NewBrand) -> Self {
        Brand {
            id: BrandId::new(id),
            name: draft.name,
            description: draft.description,
        }
    }

    fn apply(&mut self, patch: BrandPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

/// Payload for creating a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTag {
    pub name: String,
}

/// Partial update for a tag. A new name re-derives the slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagPatch {
    pub name: Option<String>,
}

impl CatalogRecord for Tag {
    const ENTITY: &'static str = "tag";
    type Draft = NewTag;
    type Patch = TagPatch;

    fn id(&self) -> i64 {
        self.id.value()
    }

    fn build(id: i64, draft: NewTag) -> Self {
        let slug = slugify(&draft.name);
        Tag {
            id: TagId::new(id),
            name: draft.name,
            slug,
        }
    }

    fn apply(&mut self, patch: TagPatch) {
        if let Some(name) = patch.name {
            self.slug = slugify(&name);
            self.name = name;
        }
    }
}

// ---------------------------------------------------------------------------
// Category (flat admin rows; the storefront rebuilds the tree)
// ---------------------------------------------------------------------------

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent: Option<CategoryId>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Partial update for a category. A new label re-derives the slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub label: Option<String>,
    pub description: Option<String>,
    pub parent: Option<CategoryId>,
    pub image: Option<String>,
}

impl CatalogRecord for Category {
    const ENTITY: &'static str = "category";
    type Draft = NewCategory;
    type Patch = CategoryPatch;

    fn id(&self) -> i64 {
        self.id.value()
    }

    fn build(id: i64, draft: NewCategory) -> Self {
        let mut category = Category::new(
            CategoryId::new(id),
            draft.label.clone(),
            slugify(&draft.label),
            draft.parent,
        );
        category.description = draft.description.unwrap_or_default();
        category.image = draft.image;
        category
    }

    fn apply(&mut self, patch: CategoryPatch) {
        if let Some(label) = patch.label {
            self.slug = slugify(&label);
            self.label = label;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(parent) = patch.parent {
            self.parent = Some(parent);
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
    }
}

// ---------------------------------------------------------------------------
// Variant attribute
// ---------------------------------------------------------------------------

/// Payload for creating a variant attribute with its values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttribute {
    pub name: String,
    pub values: Vec<String>,
}

/// Partial update for a variant attribute. New values replace the old set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributePatch {
    pub name: Option<String>,
    pub values: Option<Vec<String>>,
}

fn attribute_values(values: Vec<String>) -> Vec<AttributeValue> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| AttributeValue {
            id: i as i64 + 1,
            value,
        })
        .collect()
}

impl CatalogRecord for VariantAttribute {
    const ENTITY: &'static str = "variant attribute";
    type Draft = NewAttribute;
    type Patch = AttributePatch;

    fn id(&self) -> i64 {
        self.id.value()
    }

    fn build(id: i64, draft: NewAttribute) -> Self {
        let slug = slugify(&draft.name);
        VariantAttribute {
            id: AttributeId::new(id),
            name: draft.name,
            slug,
            values: attribute_values(draft.values),
        }
    }

    fn apply(&mut self, patch: AttributePatch) {
        if let Some(name) = patch.name {
            self.slug = slugify(&name);
            self.name = name;
        }
        if let Some(values) = patch.values {
            self.values = attribute_values(values);
        }
    }
}

// ---------------------------------------------------------------------------
// Voucher
// ---------------------------------------------------------------------------

/// Payload for creating a voucher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVoucher {
    pub code: String,
    pub discount_type: storefront_commerce::catalog::DiscountType,
    pub discount_value: f64,
    pub valid_from: i64,
    pub valid_to: i64,
    pub usage_limit: u32,
    pub max_discount_amount: Money,
}

/// Partial update for a voucher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoucherPatch {
    pub code: Option<String>,
    pub discount_type: Option<storefront_commerce::catalog::DiscountType>,
    pub discount_value: Option<f64>,
    pub valid_from: Option<i64>,
    pub valid_to: Option<i64>,
    pub usage_limit: Option<u32>,
    pub max_discount_amount: Option<Money>,
}

impl CatalogRecord for Voucher {
    const ENTITY: &'static str = "voucher";
    type Draft = NewVoucher;
    type Patch = VoucherPatch;

    fn id(&self) -> i64 {
        self.id.value()
    }

    fn build(id: i64, draft: NewVoucher) -> Self {
        Voucher {
            id: VoucherId::new(id),
            code: draft.code,
            discount_type: draft.discount_type,
            discount_value: draft.discount_value,
            valid_from: draft.valid_from,
            valid_to: draft.valid_to,
            usage_limit: draft.usage_limit,
            max_discount_amount: draft.max_discount_amount,
            times_used: 0,
        }
    }

    fn apply(&mut self, patch: VoucherPatch) {
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(discount_type) = patch.discount_type {
            self.discount_type = discount_type;
        }
        if let Some(discount_value) = patch.discount_value {
            self.discount_value = discount_value;
        }
        if let Some(valid_from) = patch.valid_from {
            self.valid_from = valid_from;
        }
        if let Some(valid_to) = patch.valid_to {
            self.valid_to = valid_to;
        }
        if let Some(usage_limit) = patch.usage_limit {
            self.usage_limit = usage_limit;
        }
        if let Some(max_discount_amount) = patch.max_discount_amount {
            self.max_discount_amount = max_discount_amount;
        }
    }
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// Payload for creating a product. Variants are attached afterwards through
/// the product edit flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub base_price: Money,
    #[serde(default)]
    pub discount_price: Option<Money>,
    #[serde(default)]
    pub stock_quantity: u32,
    #[serde(default)]
    pub category: Option<CategoryId>,
    #[serde(default)]
    pub brand: Option<BrandId>,
    #[serde(default)]
    pub thumbnail: String,
}

/// Partial update for a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub base_price: Option<Money>,
    pub discount_price: Option<Money>,
    pub stock_quantity: Option<u32>,
    pub category: Option<CategoryId>,
    pub brand: Option<BrandId>,
    pub is_active: Option<bool>,
}

impl CatalogRecord for Product {
    const ENTITY: &'static str = "product";
    type Draft = NewProduct;
    type Patch = ProductPatch;

    fn id(&self) -> i64 {
        self.id.value()
    }

    fn build(id: i64, draft: NewProduct) -> Self {
        let mut product = Product::new(ProductId::new(id), draft.name, draft.base_price);
        product.discount_price = draft.discount_price;
        product.stock_quantity = draft.stock_quantity;
        product.category = draft.category;
        product.brand = draft.brand;
        product.thumbnail = draft.thumbnail;
        product
    }

    fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.slug = slugify(&name);
            self.name = name;
        }
        if let Some(base_price) = patch.base_price {
            self.base_price = base_price;
        }
        if let Some(discount_price) = patch.discount_price {
            self.discount_price = Some(discount_price);
        }
        if let Some(stock_quantity) = patch.stock_quantity {
            self.stock_quantity = stock_quantity;
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(brand) = patch.brand {
            self.brand = Some(brand);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}
