//! The record store: every entry of one catalog, keyed by identifier.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::id::EntryId;
use crate::record::{RawRow, Record};
use crate::schema::Schema;
use crate::source::{CatalogSource, read_rows};

/// All records of one catalog.
///
/// Membership is fixed once built; records keep source row order. Lookups
/// go through an identifier index.
#[derive(Debug, Clone)]
pub struct Store {
    schema: Arc<Schema>,
    records: Vec<Record>,
    by_id: HashMap<EntryId, usize>,
}

impl Store {
    /// Build a store from raw rows, one record per row.
    ///
    /// Fails on the first undecodable row or repeated identifier.
    pub fn build<I>(schema: Schema, rows: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let schema = Arc::new(schema);
        let mut records = Vec::new();
        let mut by_id = HashMap::new();

        for (i, row) in rows.into_iter().enumerate() {
            let record = Record::from_row(&schema, i + 1, &row)?;
            if by_id.contains_key(record.id()) {
                return Err(CatalogError::DuplicateKey(record.id().to_string()));
            }
            by_id.insert(record.id().clone(), records.len());
            records.push(record);
        }

        log::debug!("built '{}' store with {} entries", schema.name, records.len());

        Ok(Self {
            schema,
            records,
            by_id,
        })
    }

    /// Read rows from a CSV path or reader and build a store from them.
    pub fn load(schema: Schema, source: impl Into<CatalogSource>) -> CatalogResult<Self> {
        let rows = read_rows(source.into())?;
        Self::build(schema, rows)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn get(&self, id: &str) -> CatalogResult<&Record> {
        self.by_id
            .get(id)
            .map(|&i| &self.records[i])
            .ok_or_else(|| CatalogError::KeyNotFound(id.to_string()))
    }

    /// Mutable access for choice-field updates. Membership cannot change
    /// through this.
    pub fn get_mut(&mut self, id: &str) -> CatalogResult<&mut Record> {
        match self.by_id.get(id) {
            Some(&i) => Ok(&mut self.records[i]),
            None => Err(CatalogError::KeyNotFound(id.to_string())),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifiers in source row order. Each call starts a fresh iterator.
    pub fn keys(&self) -> impl Iterator<Item = &EntryId> + '_ {
        self.records.iter().map(Record::id)
    }

    /// Records in source row order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    /// All identifiers in natural order.
    pub fn sorted_keys(&self) -> Vec<EntryId> {
        let mut keys: Vec<EntryId> = self.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
