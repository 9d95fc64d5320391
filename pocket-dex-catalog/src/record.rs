//! A single catalog entry.

use std::sync::Arc;

use crate::decode::decode_field;
use crate::error::{CatalogError, CatalogResult};
use crate::id::EntryId;
use crate::schema::{FieldKind, Schema};
use crate::value::{FieldValue, Mapping};

/// One raw input row: `(column, raw value)` pairs in column order.
pub type RawRow = Vec<(String, String)>;

/// One parsed catalog row.
///
/// Field shapes are fixed at construction. General access through
/// [`Record::get`] hands out copies; the only way to change a value is
/// [`Record::set_choice`] on a field the schema declares as a choice.
#[derive(Debug, Clone)]
pub struct Record {
    id: EntryId,
    fields: Mapping,
    schema: Arc<Schema>,
}

impl Record {
    /// Build a record from one raw row. `row_number` is 1-based and only
    /// used in error messages before the identifier is known.
    pub fn from_row(
        schema: &Arc<Schema>,
        row_number: usize,
        row: &[(String, String)],
    ) -> CatalogResult<Self> {
        let id = row
            .iter()
            .rev()
            .find(|(col, _)| *col == schema.id_field)
            .map(|(_, raw)| raw.trim())
            .filter(|raw| !raw.is_empty())
            .map(EntryId::new)
            .ok_or_else(|| {
                CatalogError::malformed(
                    format!("#{row_number}"),
                    &schema.id_field,
                    "missing identifier",
                )
            })?;

        let mut fields = Mapping::new();
        for (column, raw) in row {
            if *column == schema.id_field {
                fields.insert(column.as_str(), FieldValue::Id(id.clone()));
                continue;
            }
            let kind = schema.kind_of(column);
            let value = match &kind {
                FieldKind::Choice { choices, .. } => {
                    let value = if raw.trim().is_empty() {
                        kind.choice_default().unwrap_or_default()
                    } else {
                        raw.trim().to_lowercase()
                    };
                    check_choice(column, &value, choices).map_err(|e| {
                        CatalogError::malformed(id.as_str(), column, e.to_string())
                    })?;
                    FieldValue::Text(value)
                }
                FieldKind::Integer | FieldKind::Decimal | FieldKind::Flag
                    if raw.trim().is_empty() =>
                {
                    continue;
                }
                _ => decode_field(raw, &kind)
                    .map_err(|e| CatalogError::malformed(id.as_str(), column, e.0))?,
            };
            fields.insert(column.as_str(), value);
        }

        for spec in &schema.fields {
            if fields.contains_key(&spec.name) {
                continue;
            }
            match &spec.kind {
                FieldKind::List(_) => {
                    fields.insert(spec.name.as_str(), FieldValue::List(Vec::new()));
                }
                FieldKind::Map(_) => {
                    fields.insert(spec.name.as_str(), FieldValue::Map(Mapping::new()));
                }
                FieldKind::Choice { .. } => {
                    if let Some(default) = spec.kind.choice_default() {
                        fields.insert(spec.name.as_str(), FieldValue::Text(default));
                    }
                }
                _ => {}
            }
        }

        Ok(Self {
            id,
            fields,
            schema: Arc::clone(schema),
        })
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// A copy of the value stored for `field`.
    pub fn get(&self, field: &str) -> CatalogResult<FieldValue> {
        self.peek(field).cloned()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in column order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys()
    }

    /// A copy of every field, in column order.
    pub fn to_mapping(&self) -> Mapping {
        self.fields.clone()
    }

    /// Current value of a choice field.
    pub fn choice(&self, field: &str) -> CatalogResult<String> {
        if self.schema.choices(field).is_none() {
            return Err(CatalogError::field_not_found(self.id.as_str(), field));
        }
        match self.peek(field)? {
            FieldValue::Text(value) => Ok(value.clone()),
            other => Ok(other.to_string()),
        }
    }

    /// Set a choice field. The value is case-normalized; anything outside
    /// the allow-list is rejected and the previous value kept.
    pub fn set_choice(&mut self, field: &str, value: &str) -> CatalogResult<()> {
        let normalized = value.trim().to_lowercase();
        match self.schema.choices(field) {
            Some(choices) => check_choice(field, &normalized, choices)?,
            None => {
                return Err(CatalogError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    allowed: "none (field is read-only)".to_string(),
                });
            }
        }
        self.fields.insert(field, FieldValue::Text(normalized));
        Ok(())
    }

    /// Borrowed access for extractors inside the crate.
    pub(crate) fn peek(&self, field: &str) -> CatalogResult<&FieldValue> {
        self.fields
            .get(field)
            .ok_or_else(|| CatalogError::field_not_found(self.id.as_str(), field))
    }
}

fn check_choice(field: &str, value: &str, choices: &[String]) -> CatalogResult<()> {
    if choices.iter().any(|c| c.eq_ignore_ascii_case(value)) {
        Ok(())
    } else {
        Err(CatalogError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            allowed: choices.join(", "),
        })
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
