use thiserror::Error;

/// Errors produced while building, querying, or reordering a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error while opening or reading a data source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tabular source itself could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A schema descriptor could not be read
    #[error("schema error in {path}: {source}")]
    Schema {
        path: String,
        source: serde_yml::Error,
    },

    /// A delimited sub-field (or the row itself) could not be decoded
    #[error("malformed input in row {row}, field '{field}': {reason}")]
    MalformedInput {
        row: String,
        field: String,
        reason: String,
    },

    /// Two rows share the same identifier
    #[error("duplicate identifier: {0}")]
    DuplicateKey(String),

    /// No entry exists for the identifier
    #[error("no entry with identifier '{0}'")]
    KeyNotFound(String),

    /// The entry exists but has no such field
    #[error("entry '{id}' has no field '{field}'")]
    FieldNotFound { id: String, field: String },

    /// A choice field was given a value outside its allow-list
    #[error("invalid value '{value}' for '{field}' (allowed: {allowed})")]
    InvalidValue {
        field: String,
        value: String,
        allowed: String,
    },

    /// The extracted value cannot be ordered (or range-compared)
    #[error("cannot sort by '{key}': {reason}")]
    InvalidSortKey { key: String, reason: String },

    /// A fixed-position list was shorter than the requested slot
    #[error("entry '{id}': slot {index} of '{field}' is out of range (length {len})")]
    IndexOutOfRange {
        id: String,
        field: String,
        index: usize,
        len: usize,
    },
}

impl CatalogError {
    pub fn malformed(
        row: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedInput {
            row: row.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn field_not_found(id: impl Into<String>, field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            id: id.into(),
            field: field.into(),
        }
    }

    pub fn invalid_sort_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSortKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// True for both missing entries and missing fields.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound(_) | Self::FieldNotFound { .. })
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
