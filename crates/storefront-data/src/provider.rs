//! The catalog provider seam.
//!
//! Every admin-managed entity goes through the same per-entity CRUD
//! surface. The storefront core does not care whether a provider is backed
//! by HTTP, a file, or memory; callers must treat every method as
//! potentially suspending and must not assume the catalog is immediately
//! consistent with a pending write.

use crate::error::ProviderError;
use async_trait::async_trait;

/// An entity the catalog provider manages.
///
/// The provider assigns ids; records describe how to build themselves from
/// a creation payload and how to apply a partial update.
pub trait CatalogRecord: Clone + Send + Sync + 'static {
    /// Entity name used in errors and logs (e.g., "brand").
    const ENTITY: &'static str;

    /// Payload for creating a record. The id is assigned by the provider.
    type Draft: Send;

    /// Partial update payload; unset fields leave the record untouched.
    type Patch: Send;

    /// This record's id.
    fn id(&self) -> i64;

    /// Build a record from a provider-assigned id and a draft.
    fn build(id: i64, draft: Self::Draft) -> Self;

    /// Apply a partial update in place.
    fn apply(&mut self, patch: Self::Patch);
}

/// Per-entity CRUD, the only interface the core consumes.
#[async_trait]
pub trait CatalogProvider<R: CatalogRecord>: Send + Sync {
    /// Fetch every record.
    async fn get_all(&self) -> Result<Vec<R>, ProviderError>;

    /// Fetch one record by id.
    async fn get(&self, id: i64) -> Result<R, ProviderError>;

    /// Create a record, assigning a new unique id.
    async fn create(&self, draft: R::Draft) -> Result<R, ProviderError>;

    /// Apply a partial update. Fails with `NotFound` for an unknown id.
    async fn update(&self, id: i64, patch: R::Patch) -> Result<R, ProviderError>;

    /// Delete a record. Fails with `NotFound` for an unknown id.
    async fn delete(&self, id: i64) -> Result<(), ProviderError>;
}
