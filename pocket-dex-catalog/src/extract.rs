//! Field extractors: how a sort/filter key pulls a value out of a record.
//!
//! Each catalog kind has a closed enum of keys (implementing [`FieldKey`])
//! and an [`ExtractorRegistry`] mapping every key to an [`Extractor`]. Sort
//! and filter use the same table.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::record::Record;
use crate::value::FieldValue;

/// A closed set of named sort/filter targets.
pub trait FieldKey: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Canonical name, used for lookup by string and in messages.
    fn name(&self) -> &'static str;

    /// Every key, in display order.
    fn all() -> &'static [Self];

    /// Case-insensitive lookup by name; `-`, `_` and spaces are ignored.
    fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::all()
            .iter()
            .copied()
            .find(|key| normalize(key.name()) == wanted)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

type ExtractFn = dyn Fn(&Record) -> CatalogResult<FieldValue> + Send + Sync;

/// A pure function from a record to the value a key sorts/filters on.
#[derive(Clone)]
pub struct Extractor {
    label: String,
    func: Arc<ExtractFn>,
}

impl Extractor {
    /// Wrap an arbitrary function. `label` names it in error messages.
    pub fn custom<F>(label: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Record) -> CatalogResult<FieldValue> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            func: Arc::new(func),
        }
    }

    /// The whole value of one field.
    pub fn field(name: impl Into<String>) -> Self {
        let name = name.into();
        let field = name.clone();
        Self::custom(name, move |record| record.get(&field))
    }

    /// One entry of a mapping field, e.g. `name` → `English`.
    pub fn map_entry(field: impl Into<String>, key: impl Into<String>) -> Self {
        let field = field.into();
        let key = key.into();
        Self::custom(format!("{field}.{key}"), move |record| {
            let value = record.peek(&field)?;
            value
                .as_map()
                .and_then(|map| map.get(&key))
                .cloned()
                .ok_or_else(|| {
                    CatalogError::field_not_found(record.id().as_str(), format!("{field}.{key}"))
                })
        })
    }

    /// Sum of a mapping's numeric values, e.g. a base-stat total.
    pub fn map_total(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::custom(format!("{field} total"), move |record| {
            let value = record.peek(&field)?;
            let map = value.as_map().ok_or_else(|| {
                CatalogError::invalid_sort_key(
                    &field,
                    format!("expected a mapping, found {}", value.kind_name()),
                )
            })?;
            let mut total: i64 = 0;
            for (key, v) in map.iter() {
                let n = v.as_integer().ok_or_else(|| {
                    CatalogError::invalid_sort_key(
                        &field,
                        format!("value for '{key}' is {}, not an integer", v.kind_name()),
                    )
                })?;
                total = total.checked_add(n).ok_or_else(|| {
                    CatalogError::invalid_sort_key(
                        &field,
                        format!("total for entry '{}' overflows", record.id()),
                    )
                })?;
            }
            Ok(FieldValue::Integer(total))
        })
    }

    /// The element at a fixed position of a list field.
    ///
    /// A shorter list is an error, never a silent default.
    pub fn list_slot(field: impl Into<String>, index: usize) -> Self {
        let field = field.into();
        Self::custom(format!("{field}[{index}]"), move |record| {
            let value = record.peek(&field)?;
            let items = value.as_list().ok_or_else(|| {
                CatalogError::invalid_sort_key(
                    &field,
                    format!("expected a list, found {}", value.kind_name()),
                )
            })?;
            items
                .get(index)
                .cloned()
                .ok_or_else(|| CatalogError::IndexOutOfRange {
                    id: record.id().to_string(),
                    field: field.clone(),
                    index,
                    len: items.len(),
                })
        })
    }

    /// The record identifier, as an orderable value.
    pub fn identifier() -> Self {
        Self::custom("identifier", |record| Ok(FieldValue::Id(record.id().clone())))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn extract(&self, record: &Record) -> CatalogResult<FieldValue> {
        (self.func)(record)
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor").field("label", &self.label).finish()
    }
}

/// Key → extractor table for one catalog kind.
///
/// Keys with no registered extractor resolve to the fallback (the
/// identifier, unless replaced). This leniency is deliberate: an unknown
/// key sorts by identifier instead of failing.
#[derive(Debug, Clone)]
pub struct ExtractorRegistry<K: FieldKey> {
    table: HashMap<K, Extractor>,
    fallback: Extractor,
}

impl<K: FieldKey> Default for ExtractorRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: FieldKey> ExtractorRegistry<K> {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            fallback: Extractor::identifier(),
        }
    }

    /// Builder-style registration.
    pub fn with(mut self, key: K, extractor: Extractor) -> Self {
        self.register(key, extractor);
        self
    }

    pub fn register(&mut self, key: K, extractor: Extractor) {
        self.table.insert(key, extractor);
    }

    pub fn set_fallback(&mut self, extractor: Extractor) {
        self.fallback = extractor;
    }

    pub fn is_registered(&self, key: K) -> bool {
        self.table.contains_key(&key)
    }

    /// Registered keys, in the order of [`FieldKey::all`].
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        K::all().iter().copied().filter(|k| self.table.contains_key(k))
    }

    pub fn resolve(&self, key: K) -> &Extractor {
        self.table.get(&key).unwrap_or(&self.fallback)
    }

    /// Resolve by name. Unknown names get the fallback extractor.
    pub fn resolve_name(&self, name: &str) -> &Extractor {
        match K::from_name(name) {
            Some(key) => self.resolve(key),
            None => {
                log::debug!(
                    "unknown field key '{name}', using '{}'",
                    self.fallback.label()
                );
                &self.fallback
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
