//! Views: the sorted/filtered subset of a store that a browser shows.
//!
//! A view is an ordered list of identifiers plus borrowed references to a
//! [`Store`] and an [`ExtractorRegistry`]. Sorting and filtering rewrite
//! that list only; the store is never touched, so any number of views can
//! browse one store independently.

use std::cmp::Ordering;

use crate::criterion::Criterion;
use crate::error::{CatalogError, CatalogResult};
use crate::extract::{Extractor, ExtractorRegistry, FieldKey};
use crate::id::EntryId;
use crate::record::Record;
use crate::store::Store;
use crate::value::FieldValue;

/// The current ordered subset of one store.
///
/// Every operation is all-or-nothing: values are extracted for every
/// visible entry before the identifier list is replaced, so a failing
/// extraction leaves the view as it was.
#[derive(Debug, Clone)]
pub struct View<'a, K: FieldKey> {
    store: &'a Store,
    registry: &'a ExtractorRegistry<K>,
    ids: Vec<EntryId>,
}

/// A view's identifier list, detached from the store it came from.
///
/// Lets a caller release the borrow, update a record through
/// [`Store::get_mut`], and pick up browsing where it left off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    ids: Vec<EntryId>,
}

impl ViewState {
    pub fn ids(&self) -> &[EntryId] {
        &self.ids
    }
}

impl<'a, K: FieldKey> View<'a, K> {
    /// A view over every entry, in natural identifier order.
    pub fn new(store: &'a Store, registry: &'a ExtractorRegistry<K>) -> Self {
        Self {
            store,
            registry,
            ids: store.sorted_keys(),
        }
    }

    /// Re-attach a detached state. Fails if the state names an identifier
    /// the store does not have.
    pub fn resume(
        store: &'a Store,
        registry: &'a ExtractorRegistry<K>,
        state: ViewState,
    ) -> CatalogResult<Self> {
        if let Some(missing) = state.ids.iter().find(|id| !store.contains(id.as_str())) {
            return Err(CatalogError::KeyNotFound(missing.to_string()));
        }
        Ok(Self {
            store,
            registry,
            ids: state.ids,
        })
    }

    pub fn into_state(self) -> ViewState {
        ViewState { ids: self.ids }
    }

    pub fn store(&self) -> &'a Store {
        self.store
    }

    /// Stable sort by the value `key` extracts. Entries with equal values
    /// keep their current relative order, in both directions.
    pub fn sort(&mut self, key: K, descending: bool) -> CatalogResult<()> {
        let extractor = self.registry.resolve(key);
        self.sort_with(key.name(), extractor, descending)
    }

    /// [`View::sort`] by key name; unknown names sort by identifier.
    pub fn sort_by_name(&mut self, name: &str, descending: bool) -> CatalogResult<()> {
        let extractor = self.registry.resolve_name(name);
        self.sort_with(name, extractor, descending)
    }

    /// Keep only entries whose extracted value satisfies `criterion`.
    /// Survivors keep their order; dropped entries stay in the store.
    pub fn filter(&mut self, key: K, criterion: &Criterion) -> CatalogResult<()> {
        let extractor = self.registry.resolve(key);
        self.filter_with(key.name(), extractor, criterion)
    }

    /// [`View::filter`] by key name; unknown names filter on identifier.
    pub fn filter_by_name(&mut self, name: &str, criterion: &Criterion) -> CatalogResult<()> {
        let extractor = self.registry.resolve_name(name);
        self.filter_with(name, extractor, criterion)
    }

    /// Back to every entry of the store in natural identifier order.
    pub fn reset(&mut self) {
        self.ids = self.store.sorted_keys();
    }

    /// The visible records, in view order, as a fresh list.
    pub fn results(&self) -> Vec<&'a Record> {
        let store = self.store;
        self.ids
            .iter()
            .filter_map(|id| store.get(id.as_str()).ok())
            .collect()
    }

    pub fn ids(&self) -> &[EntryId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i.as_str() == id)
    }

    fn sort_with(&mut self, key: &str, extractor: &Extractor, descending: bool) -> CatalogResult<()> {
        let mut keyed = self.extract_all(extractor)?;
        if let Some((_, value)) = keyed.iter().find(|(_, v)| v.is_container()) {
            return Err(CatalogError::invalid_sort_key(
                key,
                format!("{} values cannot be ordered", value.kind_name()),
            ));
        }

        keyed.sort_by(|(_, a), (_, b)| {
            let ord = a.scalar_cmp(b).unwrap_or(Ordering::Equal);
            if descending { ord.reverse() } else { ord }
        });
        self.ids = keyed.into_iter().map(|(id, _)| id).collect();
        Ok(())
    }

    fn filter_with(
        &mut self,
        key: &str,
        extractor: &Extractor,
        criterion: &Criterion,
    ) -> CatalogResult<()> {
        let mut survivors = Vec::with_capacity(self.ids.len());
        for (id, value) in self.extract_all(extractor)? {
            if criterion.accepts(key, &value)? {
                survivors.push(id);
            }
        }
        self.ids = survivors;
        Ok(())
    }

    fn extract_all(&self, extractor: &Extractor) -> CatalogResult<Vec<(EntryId, FieldValue)>> {
        self.ids
            .iter()
            .map(|id| {
                let record = self.store.get(id.as_str())?;
                Ok((id.clone(), extractor.extract(record)?))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
