//! Schema descriptors: which columns a catalog has and how to decode them.
//!
//! A single generic [`Record`](crate::Record) type is paired with a
//! descriptor per catalog kind, instead of one record type per kind.
//! Descriptors are plain data and can be loaded from YAML (see
//! [`crate::yaml`]).

use serde::Deserialize;

/// Element type for scalar fields and for the items of list/mapping fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    #[default]
    Text,
    Integer,
    Decimal,
    Flag,
}

/// How a raw column string is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Flag,
    /// `[a,b,c]`
    List(ScalarKind),
    /// `[k1:v1,k2:v2]`
    Map(ScalarKind),
    /// An enumerated, mutable value. Stored lowercase.
    Choice {
        choices: Vec<String>,
        default: Option<String>,
    },
}

impl FieldKind {
    pub fn scalar(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Text => Self::Text,
            ScalarKind::Integer => Self::Integer,
            ScalarKind::Decimal => Self::Decimal,
            ScalarKind::Flag => Self::Flag,
        }
    }

    pub fn choice<S: Into<String>>(choices: impl IntoIterator<Item = S>) -> Self {
        Self::Choice {
            choices: choices.into_iter().map(|c| c.into().to_lowercase()).collect(),
            default: None,
        }
    }

    /// The value a choice field takes when the column is absent or empty.
    pub fn choice_default(&self) -> Option<String> {
        match self {
            Self::Choice { choices, default } => default
                .as_ref()
                .map(|d| d.to_lowercase())
                .or_else(|| choices.first().cloned()),
            _ => None,
        }
    }
}

/// One declared column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FieldSpecDef")]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum KindTag {
    Text,
    Integer,
    Decimal,
    Flag,
    List,
    Map,
    Choice,
}

/// Flat on-disk form of a [`FieldSpec`]:
///
/// ```yaml
/// - { name: type, kind: list, of: text }
/// - { name: owned, kind: choice, choices: [unknown, seen, owned] }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldSpecDef {
    name: String,
    kind: KindTag,
    #[serde(default)]
    of: Option<ScalarKind>,
    #[serde(default)]
    choices: Vec<String>,
    #[serde(default)]
    default: Option<String>,
}

impl TryFrom<FieldSpecDef> for FieldSpec {
    type Error = String;

    fn try_from(def: FieldSpecDef) -> Result<Self, Self::Error> {
        let kind = match def.kind {
            KindTag::Text => FieldKind::Text,
            KindTag::Integer => FieldKind::Integer,
            KindTag::Decimal => FieldKind::Decimal,
            KindTag::Flag => FieldKind::Flag,
            KindTag::List => FieldKind::List(def.of.unwrap_or_default()),
            KindTag::Map => FieldKind::Map(def.of.unwrap_or_default()),
            KindTag::Choice => {
                if def.choices.is_empty() {
                    return Err(format!("choice field '{}' declares no choices", def.name));
                }
                let choices: Vec<String> = def.choices.iter().map(|c| c.to_lowercase()).collect();
                if let Some(d) = &def.default {
                    if !choices.contains(&d.to_lowercase()) {
                        return Err(format!(
                            "default '{d}' of '{}' is not one of its choices",
                            def.name
                        ));
                    }
                }
                FieldKind::Choice {
                    choices,
                    default: def.default,
                }
            }
        };
        Ok(FieldSpec {
            name: def.name,
            kind,
        })
    }
}

/// Describes one catalog kind: its identifier column and typed columns.
///
/// Columns present in the data but not declared here are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Schema {
    pub name: String,
    pub id_field: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(name: impl Into<String>, id_field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_field: id_field.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style column declaration. Redeclaring a name replaces it.
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        self.fields.retain(|f| f.name != name);
        self.fields.push(FieldSpec { name, kind });
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The kind a column decodes as; undeclared columns are text.
    pub fn kind_of(&self, name: &str) -> FieldKind {
        self.lookup(name)
            .map(|f| f.kind.clone())
            .unwrap_or(FieldKind::Text)
    }

    /// Allowed values for a choice field, or `None` if the field is not one.
    pub fn choices(&self, name: &str) -> Option<&[String]> {
        match self.lookup(name).map(|f| &f.kind) {
            Some(FieldKind::Choice { choices, .. }) => Some(choices),
            _ => None,
        }
    }

    /// Declared choice fields, in declaration order.
    pub fn choice_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::Choice { .. }))
    }
}
