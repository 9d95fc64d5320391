//! Filter criteria.

use std::cmp::Ordering;

use crate::error::{CatalogError, CatalogResult};
use crate::id::EntryId;
use crate::value::{FieldValue, parse_flag};

/// What an extracted value must satisfy to stay in a view.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Membership for lists (elements) and mappings (keys), equality for
    /// scalars. Text compares without regard to case.
    Is(FieldValue),
    /// Case-insensitive substring of a scalar's text, or of any list
    /// element or mapping key.
    Contains(String),
    /// Inclusive range over orderable scalars.
    Between(FieldValue, FieldValue),
}

impl Criterion {
    pub fn is(value: impl Into<FieldValue>) -> Self {
        Self::Is(value.into())
    }

    pub fn contains(text: impl Into<String>) -> Self {
        Self::Contains(text.into())
    }

    pub fn between(low: impl Into<FieldValue>, high: impl Into<FieldValue>) -> Self {
        Self::Between(low.into(), high.into())
    }

    /// Test one extracted value. `key` only names the field in errors.
    pub fn accepts(&self, key: &str, value: &FieldValue) -> CatalogResult<bool> {
        match self {
            Self::Is(wanted) => Ok(if value.is_container() {
                value.has_member(wanted)
            } else {
                value.loosely_eq(wanted)
            }),
            Self::Contains(needle) => {
                let needle = needle.to_lowercase();
                let hit = |s: &str| s.to_lowercase().contains(&needle);
                Ok(match value {
                    FieldValue::List(items) => items.iter().any(|item| hit(&item.to_string())),
                    FieldValue::Map(map) => map.keys().any(hit),
                    scalar => hit(&scalar.to_string()),
                })
            }
            Self::Between(low, high) => {
                let low = coerce_bound(low, value);
                let high = coerce_bound(high, value);
                let (Some(above), Some(below)) = (value.scalar_cmp(&low), value.scalar_cmp(&high))
                else {
                    return Err(CatalogError::invalid_sort_key(
                        key,
                        format!("a {} value has no range", value.kind_name()),
                    ));
                };
                Ok(above != Ordering::Less && below != Ordering::Greater)
            }
        }
    }
}

/// Textual bounds take the shape of the value they are compared with:
/// numbers for numeric values, identifiers for identifiers, flags for flags.
fn coerce_bound(bound: &FieldValue, value: &FieldValue) -> FieldValue {
    let FieldValue::Text(t) = bound else {
        return bound.clone();
    };
    let t = t.trim();
    match value {
        FieldValue::Integer(_) | FieldValue::Decimal(_) => match t.parse::<i64>() {
            Ok(n) => FieldValue::Integer(n),
            Err(_) => t
                .parse::<f64>()
                .map(FieldValue::Decimal)
                .unwrap_or_else(|_| bound.clone()),
        },
        FieldValue::Id(_) => FieldValue::Id(EntryId::new(t)),
        FieldValue::Flag(_) => parse_flag(t).map_or_else(|| bound.clone(), FieldValue::Flag),
        _ => bound.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> FieldValue {
        FieldValue::List(vec![FieldValue::text("Grass"), FieldValue::text("Poison")])
    }

    #[test]
    fn is_checks_membership_for_lists() {
        assert!(Criterion::is("Poison").accepts("type", &types()).unwrap());
        assert!(!Criterion::is("Fire").accepts("type", &types()).unwrap());
    }

    #[test]
    fn is_checks_equality_for_scalars() {
        let rate = FieldValue::Integer(45);
        assert!(Criterion::is("45").accepts("capture_rate", &rate).unwrap());
        assert!(Criterion::is(45_i64).accepts("capture_rate", &rate).unwrap());
        assert!(!Criterion::is(3_i64).accepts("capture_rate", &rate).unwrap());
    }

    #[test]
    fn contains_is_case_insensitive() {
        let name = FieldValue::text("Ivysaur");
        assert!(Criterion::contains("ivy").accepts("name", &name).unwrap());
        assert!(!Criterion::contains("bulba").accepts("name", &name).unwrap());
        assert!(Criterion::contains("pois").accepts("type", &types()).unwrap());
    }

    #[test]
    fn between_is_inclusive_and_coerces_text() {
        let rate = FieldValue::Integer(45);
        assert!(Criterion::between("45", "100").accepts("capture_rate", &rate).unwrap());
        assert!(Criterion::between(0_i64, 45_i64).accepts("capture_rate", &rate).unwrap());
        assert!(!Criterion::between("46", "255").accepts("capture_rate", &rate).unwrap());
        let height = FieldValue::Decimal(0.7);
        assert!(Criterion::between("0.5", "1").accepts("height", &height).unwrap());
    }

    #[test]
    fn between_rejects_containers() {
        let err = Criterion::between("a", "z").accepts("type", &types()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSortKey { .. }));
    }

    #[test]
    fn between_reads_text_bounds_as_identifiers() {
        let pikachu = FieldValue::Id(EntryId::new("25"));
        assert!(Criterion::between("1", "151").accepts("number", &pikachu).unwrap());
        assert!(!Criterion::between("1", "10").accepts("number", &pikachu).unwrap());
        let alolan = FieldValue::Id(EntryId::new("26:alolan"));
        assert!(Criterion::between("26", "27").accepts("number", &alolan).unwrap());
    }

    #[test]
    fn between_reads_text_bounds_as_flags() {
        let contact = FieldValue::Flag(true);
        assert!(Criterion::between("no", "yes").accepts("contact", &contact).unwrap());
        assert!(!Criterion::between("false", "false").accepts("contact", &contact).unwrap());
    }
}
