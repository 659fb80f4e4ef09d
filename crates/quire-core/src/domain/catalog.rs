//! Collection catalog interface
//!
//! The catalog is where collections come from. The resolver only needs to
//! enumerate them and look them up by handle or id; a database-backed
//! implementation can be plugged in behind the same trait.

use async_trait::async_trait;
use uuid::Uuid;

use super::collection::{Collection, QueryContext};
use crate::CoreError;

/// Source of collections
#[async_trait]
pub trait CollectionCatalog: Send + Sync {
    /// List every collection
    async fn find_all(&self, ctx: &QueryContext) -> Result<Vec<Collection>, CoreError>;

    /// Find a collection by its handle
    async fn find_by_handle(
        &self,
        ctx: &QueryContext,
        handle: &str,
    ) -> Result<Option<Collection>, CoreError>;

    /// Find a collection by its id
    async fn find_by_id(&self, ctx: &QueryContext, id: &Uuid)
        -> Result<Option<Collection>, CoreError>;
}

/// In-memory catalog, loaded once
pub mod memory {
    use super::*;
    use std::collections::HashMap;

    /// Immutable in-memory collection catalog
    #[derive(Debug, Clone, Default)]
    pub struct InMemoryCollectionCatalog {
        collections: Vec<Collection>,
        by_handle: HashMap<String, usize>,
        by_id: HashMap<Uuid, usize>,
    }

    impl InMemoryCollectionCatalog {
        /// Create a catalog over the given collections.
        ///
        /// When two collections share a handle or id, lookups return the last one.
        pub fn new(collections: Vec<Collection>) -> Self {
            let mut by_handle = HashMap::with_capacity(collections.len());
            let mut by_id = HashMap::with_capacity(collections.len());

            for (index, collection) in collections.iter().enumerate() {
                by_handle.insert(collection.handle.clone(), index);
                by_id.insert(collection.id, index);
            }

            Self {
                collections,
                by_handle,
                by_id,
            }
        }

        /// Number of collections
        pub fn len(&self) -> usize {
            self.collections.len()
        }

        /// Whether the catalog holds no collections
        pub fn is_empty(&self) -> bool {
            self.collections.is_empty()
        }
    }

    #[async_trait]
    impl CollectionCatalog for InMemoryCollectionCatalog {
        async fn find_all(&self, _ctx: &QueryContext) -> Result<Vec<Collection>, CoreError> {
            Ok(self.collections.clone())
        }

        async fn find_by_handle(
            &self,
            _ctx: &QueryContext,
            handle: &str,
        ) -> Result<Option<Collection>, CoreError> {
            Ok(self
                .by_handle
                .get(handle)
                .map(|&index| self.collections[index].clone()))
        }

        async fn find_by_id(
            &self,
            _ctx: &QueryContext,
            id: &Uuid,
        ) -> Result<Option<Collection>, CoreError> {
            Ok(self
                .by_id
                .get(id)
                .map(|&index| self.collections[index].clone()))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_lookup_by_handle_and_id() {
            let theses = Collection::new("123456789/2", "Theses");
            let articles = Collection::new("123456789/3", "Articles");
            let catalog = InMemoryCollectionCatalog::new(vec![theses.clone(), articles.clone()]);
            let ctx = QueryContext::default();

            assert_eq!(catalog.len(), 2);
            assert_eq!(
                catalog.find_by_handle(&ctx, "123456789/3").await.unwrap(),
                Some(articles)
            );
            assert_eq!(catalog.find_by_id(&ctx, &theses.id).await.unwrap(), Some(theses));
            assert_eq!(catalog.find_by_handle(&ctx, "123456789/99").await.unwrap(), None);
            assert_eq!(catalog.find_by_id(&ctx, &Uuid::new_v4()).await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_empty_catalog() {
            let catalog = InMemoryCollectionCatalog::default();

            assert!(catalog.is_empty());
            assert!(catalog
                .find_all(&QueryContext::default())
                .await
                .unwrap()
                .is_empty());
        }
    }
}
