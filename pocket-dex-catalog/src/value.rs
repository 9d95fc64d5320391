//! Typed field values held by catalog records.

use std::cmp::Ordering;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::id::EntryId;

/// One decoded field value.
///
/// Scalars (`Text`, `Integer`, `Decimal`, `Flag`, `Id`) are orderable;
/// containers (`List`, `Map`) only support membership tests.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Flag(bool),
    Id(EntryId),
    List(Vec<FieldValue>),
    Map(Mapping),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Short name of the variant, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Decimal(_) => "decimal",
            Self::Flag(_) => "flag",
            Self::Id(_) => "identifier",
            Self::List(_) => "list",
            Self::Map(_) => "mapping",
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Id(id) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of `Integer` and `Decimal` values.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Total order over scalars; `None` when either side is a container.
    ///
    /// Numbers sort before flags, flags before identifiers, identifiers
    /// before text. Integers and decimals compare by numeric value.
    pub fn scalar_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_container() || other.is_container() {
            return None;
        }
        let ord = match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Flag(a), Self::Flag(b)) => a.cmp(b),
            (Self::Id(a), Self::Id(b)) => a.cmp(b),
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.rank().cmp(&b.rank()),
            },
        };
        Some(ord)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Integer(_) | Self::Decimal(_) => 0,
            Self::Flag(_) => 1,
            Self::Id(_) => 2,
            Self::Text(_) => 3,
            Self::List(_) | Self::Map(_) => 4,
        }
    }

    /// Scalar equality that tolerates textual criteria.
    ///
    /// `Text("45")` equals `Integer(45)`, `Text("true")` equals `Flag(true)`,
    /// and text equals text or an identifier spelled the same up to case.
    /// Containers are never loosely equal to anything; use membership instead.
    pub fn loosely_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (a, b) if a.is_container() || b.is_container() => false,
            (Self::Text(a), Self::Text(b)) => a.to_lowercase() == b.to_lowercase(),
            (Self::Text(t), v) | (v, Self::Text(t)) if !matches!(v, Self::Text(_)) => {
                match v {
                    Self::Integer(n) => t.trim().parse::<i64>().is_ok_and(|x| x == *n),
                    Self::Decimal(d) => t.trim().parse::<f64>().is_ok_and(|x| x == *d),
                    Self::Flag(b) => parse_flag(t) == Some(*b),
                    Self::Id(id) => id.as_str().eq_ignore_ascii_case(t.trim()),
                    _ => false,
                }
            }
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
        }
    }

    /// True when `needle` is an element of a list or a key of a mapping.
    pub fn has_member(&self, needle: &FieldValue) -> bool {
        match self {
            Self::List(items) => items.iter().any(|item| item.loosely_eq(needle)),
            Self::Map(map) => map
                .keys()
                .any(|key| FieldValue::text(key).loosely_eq(needle)),
            _ => false,
        }
    }
}

/// Parse the textual spellings accepted for flag fields.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Id(id) => write!(f, "{id}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => write!(f, "{map}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for FieldValue {
    fn from(d: f64) -> Self {
        Self::Decimal(d)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// An insertion-ordered string-keyed mapping.
///
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(String, FieldValue)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(pos) => self.entries[pos].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        let mut map = Mapping::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{k}:{v}")?;
        }
        f.write_str("]")
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_across_integer_and_decimal() {
        let a = FieldValue::Integer(2);
        let b = FieldValue::Decimal(1.5);
        assert_eq!(a.scalar_cmp(&b), Some(Ordering::Greater));
    }

    #[test]
    fn containers_are_not_orderable() {
        let list = FieldValue::List(vec![FieldValue::text("Grass")]);
        assert_eq!(list.scalar_cmp(&FieldValue::text("Grass")), None);
    }

    #[test]
    fn text_criteria_match_numbers_and_flags() {
        assert!(FieldValue::Integer(45).loosely_eq(&FieldValue::text("45")));
        assert!(FieldValue::text(" 45 ").loosely_eq(&FieldValue::Integer(45)));
        assert!(!FieldValue::Integer(45).loosely_eq(&FieldValue::text("forty-five")));
        assert!(FieldValue::Flag(true).loosely_eq(&FieldValue::text("Yes")));
    }

    #[test]
    fn text_equality_ignores_case() {
        assert!(FieldValue::text("owned").loosely_eq(&FieldValue::text("Owned")));
        assert!(FieldValue::Id(EntryId::new("Ember")).loosely_eq(&FieldValue::text("ember")));
        assert!(!FieldValue::text("seen").loosely_eq(&FieldValue::text("owned")));
    }

    #[test]
    fn as_flag_only_reads_flags() {
        assert_eq!(FieldValue::Flag(true).as_flag(), Some(true));
        assert_eq!(FieldValue::text("true").as_flag(), None);
    }

    #[test]
    fn membership_checks_list_elements_and_map_keys() {
        let types = FieldValue::List(vec![FieldValue::text("Grass"), FieldValue::text("Poison")]);
        assert!(types.has_member(&FieldValue::text("Poison")));
        assert!(!types.has_member(&FieldValue::text("Fire")));

        let names: Mapping = [("English", FieldValue::text("Bulbasaur"))].into_iter().collect();
        let names = FieldValue::Map(names);
        assert!(names.has_member(&FieldValue::text("English")));
        assert!(!names.has_member(&FieldValue::text("Bulbasaur")));
    }

    #[test]
    fn mapping_insert_replaces_in_place() {
        let mut map = Mapping::new();
        map.insert("hp", FieldValue::Integer(45));
        map.insert("atk", FieldValue::Integer(49));
        map.insert("hp", FieldValue::Integer(50));
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["hp", "atk"]);
        assert_eq!(map.get("hp"), Some(&FieldValue::Integer(50)));
    }

    #[test]
    fn display_uses_bracket_notation() {
        let list = FieldValue::List(vec![FieldValue::text("Grass"), FieldValue::text("Poison")]);
        assert_eq!(list.to_string(), "[Grass,Poison]");
        let map: Mapping = [("hp", FieldValue::Integer(45))].into_iter().collect();
        assert_eq!(FieldValue::Map(map).to_string(), "[hp:45]");
    }
}
