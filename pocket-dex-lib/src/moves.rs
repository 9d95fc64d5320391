//! The battledex: moves, looked up by name.

use pocket_dex_catalog::{Catalog, Extractor, ExtractorRegistry, FieldKey, FieldKind, Schema};

pub type Battledex = Catalog<MoveField>;

/// Boolean columns describing how a move interacts with other mechanics.
pub const MOVE_FLAGS: &[&str] = &[
    "contact",
    "sound",
    "punch",
    "biting",
    "snatchable",
    "gravity",
    "defrost",
    "reflectable",
    "blockable",
    "copyable",
];

/// Sort/filter targets for moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveField {
    Name,
    Type,
    Category,
    Pp,
    BasePower,
    Accuracy,
    Priority,
    Target,
    Contact,
    Sound,
}

const ALL_MOVE_FIELDS: &[MoveField] = &[
    MoveField::Name,
    MoveField::Type,
    MoveField::Category,
    MoveField::Pp,
    MoveField::BasePower,
    MoveField::Accuracy,
    MoveField::Priority,
    MoveField::Target,
    MoveField::Contact,
    MoveField::Sound,
];

impl FieldKey for MoveField {
    fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Category => "category",
            Self::Pp => "pp",
            Self::BasePower => "base_power",
            Self::Accuracy => "accuracy",
            Self::Priority => "priority",
            Self::Target => "target",
            Self::Contact => "contact",
            Self::Sound => "sound",
        }
    }

    fn all() -> &'static [Self] {
        ALL_MOVE_FIELDS
    }
}

pub fn schema() -> Schema {
    let schema = Schema::new("moves", "name")
        .field("type", FieldKind::Text)
        .field("category", FieldKind::Text)
        .field("pp", FieldKind::Integer)
        .field("base_power", FieldKind::Integer)
        .field("accuracy", FieldKind::Integer)
        .field("effect", FieldKind::Text)
        .field("effect_rate", FieldKind::Integer)
        .field("crit_ratio", FieldKind::Integer)
        .field("priority", FieldKind::Integer)
        .field("target", FieldKind::Text)
        .field("flavor_text", FieldKind::Text);
    MOVE_FLAGS
        .iter()
        .fold(schema, |schema, flag| schema.field(*flag, FieldKind::Flag))
}

pub fn registry() -> ExtractorRegistry<MoveField> {
    let mut registry = ExtractorRegistry::new().with(MoveField::Name, Extractor::identifier());
    for &key in &ALL_MOVE_FIELDS[1..] {
        registry.register(key, Extractor::field(key.name()));
    }
    registry
}
