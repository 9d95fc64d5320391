//! Decoding of raw column strings into typed [`FieldValue`]s.
//!
//! Delimited fields use `[item1,item2]` for lists and `[k1:v1,k2:v2]` for
//! mappings. Empty strings and `[]` are empty collections.

use crate::schema::{FieldKind, ScalarKind};
use crate::value::{FieldValue, Mapping, parse_flag};

/// Why a raw string could not be decoded. Carries no row context; the
/// record builder attaches that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError(pub String);

impl DecodeError {
    fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for DecodeError {}

/// Decode one raw column according to its declared kind.
///
/// Choice fields are not handled here; the record validates them against
/// the allow-list.
pub fn decode_field(raw: &str, kind: &FieldKind) -> Result<FieldValue, DecodeError> {
    match kind {
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Integer => decode_scalar(raw, ScalarKind::Integer),
        FieldKind::Decimal => decode_scalar(raw, ScalarKind::Decimal),
        FieldKind::Flag => decode_scalar(raw, ScalarKind::Flag),
        FieldKind::List(item) => decode_list(raw, *item).map(FieldValue::List),
        FieldKind::Map(value) => decode_map(raw, *value).map(FieldValue::Map),
        FieldKind::Choice { .. } => Ok(FieldValue::Text(raw.trim().to_lowercase())),
    }
}

/// Decode a single scalar token.
pub fn decode_scalar(raw: &str, kind: ScalarKind) -> Result<FieldValue, DecodeError> {
    let token = raw.trim();
    match kind {
        ScalarKind::Text => Ok(FieldValue::Text(token.to_string())),
        ScalarKind::Integer => token
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|_| DecodeError::new(format!("'{token}' is not an integer"))),
        ScalarKind::Decimal => token
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite())
            .map(FieldValue::Decimal)
            .ok_or_else(|| DecodeError::new(format!("'{token}' is not a number"))),
        ScalarKind::Flag => parse_flag(token)
            .map(FieldValue::Flag)
            .ok_or_else(|| DecodeError::new(format!("'{token}' is not a flag"))),
    }
}

/// Decode `[a,b,c]` into a list of scalars.
///
/// A bare value without brackets is read as a one-element list.
pub fn decode_list(raw: &str, item: ScalarKind) -> Result<Vec<FieldValue>, DecodeError> {
    tokens(raw)?
        .into_iter()
        .map(|token| decode_scalar(token, item))
        .collect()
}

/// Decode `[k1:v1,k2:v2]` into a mapping. Pairs split at the first `:`.
pub fn decode_map(raw: &str, value: ScalarKind) -> Result<Mapping, DecodeError> {
    let mut map = Mapping::new();
    for token in tokens(raw)? {
        let (key, val) = token
            .split_once(':')
            .ok_or_else(|| DecodeError::new(format!("pair '{token}' has no ':'")))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(DecodeError::new(format!("pair '{token}' has an empty key")));
        }
        map.insert(key, decode_scalar(val, value)?);
    }
    Ok(map)
}

/// Strip the enclosing brackets and split on commas.
fn tokens(raw: &str) -> Result<Vec<&str>, DecodeError> {
    let trimmed = raw.trim();
    let inner = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => trimmed,
        (Some(_), false) => {
            return Err(DecodeError::new(format!("'{trimmed}' has no closing ']'")));
        }
        (None, true) => {
            return Err(DecodeError::new(format!("'{trimmed}' has no opening '['")));
        }
    };
    if inner.contains(['[', ']']) {
        return Err(DecodeError::new(format!("'{trimmed}' has nested brackets")));
    }
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(DecodeError::new(format!("'{trimmed}' has an empty element")));
    }
    Ok(parts)
}

#[cfg(test)]
#[path = "tests/decode_tests.rs"]
mod tests;
