//! Catalog entry identifiers.
//!
//! Identifiers are strings of the form `<base>[:<variant>]`, e.g. `"25"` or
//! `"25:alolan"`. They order naturally: numeric bases by value, so `"2"`
//! sorts before `"10"`, and a bare base sorts before any of its variants.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A unique catalog identifier with natural ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the first `:`.
    pub fn base(&self) -> &str {
        self.split().0
    }

    /// The variant tag after the first `:`, if any.
    pub fn variant(&self) -> Option<&str> {
        self.split().1
    }

    /// The base parsed as a number, when it is one.
    pub fn number(&self) -> Option<u64> {
        self.base().parse().ok()
    }

    fn split(&self) -> (&str, Option<&str>) {
        match self.0.split_once(':') {
            Some((base, variant)) => (base, Some(variant)),
            None => (&self.0, None),
        }
    }
}

impl Ord for EntryId {
    fn cmp(&self, other: &Self) -> Ordering {
        let base = match (self.number(), other.number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.base().cmp(other.base())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.base().cmp(other.base()),
        };
        base.then_with(|| self.variant().cmp(&other.variant()))
    }
}

impl PartialOrd for EntryId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
