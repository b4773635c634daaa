//! In-memory catalog provider.
//!
//! Backs the per-entity CRUD surface with a guarded vector: ids are
//! max-so-far plus one, updates find by id, deletes splice. Used by tests
//! and demos; a network client swaps in behind the same trait without
//! touching core logic.

use crate::error::ProviderError;
use crate::provider::{CatalogProvider, CatalogRecord};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// A seedable in-memory provider for one entity type.
pub struct MemoryProvider<R> {
    rows: RwLock<Vec<R>>,
}

impl<R: CatalogRecord> MemoryProvider<R> {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Create a provider pre-populated with records.
    pub fn seeded(rows: Vec<R>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

impl<R: CatalogRecord> Default for MemoryProvider<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: CatalogRecord> CatalogProvider<R> for MemoryProvider<R> {
    async fn get_all(&self) -> Result<Vec<R>, ProviderError> {
        Ok(self.rows.read().await.clone())
    }

    async fn get(&self, id: i64) -> Result<R, ProviderError> {
        self.rows
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(ProviderError::NotFound {
                entity: R::ENTITY,
                id,
            })
    }

    async fn create(&self, draft: R::Draft) -> Result<R, ProviderError> {
        let mut rows = self.rows.write().await;
        let id = rows.iter().map(R::id).max().unwrap_or(0) + 1;
        let record = R::build(id, draft);
        rows.push(record.clone());
        tracing::debug!(entity = R::ENTITY, id, "record created");
        Ok(record)
    }

    async fn update(&self, id: i64, patch: R::Patch) -> Result<R, ProviderError> {
        let mut rows = self.rows.write().await;
        let record = rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(ProviderError::NotFound {
                entity: R::ENTITY,
                id,
            })?;
        record.apply(patch);
        tracing::debug!(entity = R::ENTITY, id, "record updated");
        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), ProviderError> {
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or(ProviderError::NotFound {
                entity: R::ENTITY,
                id,
            })?;
        rows.remove(index);
        tracing::debug!(entity = R::ENTITY, id, "record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{BrandPatch, NewBrand};
    use storefront_commerce::catalog::Brand;
    use storefront_commerce::ids::BrandId;

    fn brand(id: i64, name: &str) -> Brand {
        Brand {
            id: BrandId::new(id),
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let provider = MemoryProvider::seeded(vec![brand(1, "Nike"), brand(5, "Puma")]);
        let created = provider
            .create(NewBrand {
                name: "Adidas".to_string(),
                description: "German sportswear".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, BrandId::new(6));
        assert_eq!(provider.get_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_on_empty_starts_at_one() {
        let provider: MemoryProvider<Brand> = MemoryProvider::new();
        let created = provider
            .create(NewBrand {
                name: "Levi's".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, BrandId::new(1));
    }

    #[tokio::test]
    async fn test_update_applies_partial_patch() {
        let provider = MemoryProvider::seeded(vec![brand(1, "Nike")]);
        let updated = provider
            .update(
                1,
                BrandPatch {
                    description: Some("Sportswear".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Nike");
        assert_eq!(updated.description, "Sportswear");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let provider = MemoryProvider::seeded(vec![brand(1, "Nike")]);
        let err = provider.update(99, BrandPatch::default()).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::NotFound { entity: "brand", id: 99 }
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_and_rejects_unknown() {
        let provider = MemoryProvider::seeded(vec![brand(1, "Nike")]);
        provider.delete(1).await.unwrap();
        assert!(provider.get_all().await.unwrap().is_empty());
        assert!(matches!(
            provider.delete(1).await,
            Err(ProviderError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let provider = MemoryProvider::seeded(vec![brand(1, "Nike"), brand(2, "Puma")]);
        assert_eq!(provider.get(2).await.unwrap().name, "Puma");
        assert!(matches!(
            provider.get(3).await,
            Err(ProviderError::NotFound { .. })
        ));
    }
}
