//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a `ProductId` where a `SkuId` is expected. Catalog IDs
//! are assigned by the catalog provider; cart item IDs are assigned by
//! the cart itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs over the provider's numeric ids.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an ID from a raw value.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw numeric value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

// Define all ID types
define_id!(ProductId);
define_id!(SkuId);
define_id!(CategoryId);
define_id!(TagId);
define_id!(BrandId);
define_id!(AttributeId);
define_id!(VoucherId);
define_id!(CartItemId);
