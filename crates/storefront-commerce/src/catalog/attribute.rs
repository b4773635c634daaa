//! Variant attribute definitions managed in the admin console.
//!
//! An attribute names one axis of variation (Color, Size, Fit) together with
//! the values a SKU may pin for it. SKUs reference attributes by name in
//! their attribute maps.

use crate::ids::AttributeId;
use serde::{Deserialize, Serialize};

/// One selectable value of a variant attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeValue {
    /// Unique value identifier.
    pub id: i64,
    /// The value itself (e.g., "Blue", "XL").
    pub value: String,
}

/// A variant attribute definition (e.g., Color with its palette).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantAttribute {
    /// Unique attribute identifier.
    pub id: AttributeId,
    /// Attribute name (e.g., "Color").
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Admissible values.
    pub values: Vec<AttributeValue>,
}

impl VariantAttribute {
    /// Check whether a value is admissible for this attribute.
    pub fn allows(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows() {
        let color = VariantAttribute {
            id: AttributeId::new(1),
            name: "Color".to_string(),
            slug: "color".to_string(),
            values: vec![
                AttributeValue {
                    id: 1,
                    value: "Red".to_string(),
                },
                AttributeValue {
                    id: 2,
                    value: "Blue".to_string(),
                },
            ],
        };
        assert!(color.allows("Blue"));
        assert!(!color.allows("Chartreuse"));
    }
}
