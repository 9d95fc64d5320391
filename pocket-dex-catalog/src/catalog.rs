//! A store paired with the extractor table for its keys.

use crate::error::CatalogResult;
use crate::extract::{ExtractorRegistry, FieldKey};
use crate::store::Store;
use crate::view::{View, ViewState};

/// One loaded catalog: its store and the extractor table for its keys.
#[derive(Debug, Clone)]
pub struct Catalog<K: FieldKey> {
    store: Store,
    registry: ExtractorRegistry<K>,
}

impl<K: FieldKey> Catalog<K> {
    pub fn new(store: Store, registry: ExtractorRegistry<K>) -> Self {
        Self { store, registry }
    }

    /// A fresh view over every entry.
    pub fn view(&self) -> View<'_, K> {
        View::new(&self.store, &self.registry)
    }

    /// Pick up a detached view again.
    pub fn resume(&self, state: ViewState) -> CatalogResult<View<'_, K>> {
        View::resume(&self.store, &self.registry, state)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn registry(&self) -> &ExtractorRegistry<K> {
        &self.registry
    }
}
