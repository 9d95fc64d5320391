//! The pokedex: one entry per species (and per regional/alternate form).

use pocket_dex_catalog::{
    Catalog, Extractor, ExtractorRegistry, FieldKey, FieldKind, ScalarKind, Schema,
};

use crate::possession::OWNED_FIELD;

/// Display language used for the `name` key.
pub const NAME_LANGUAGE: &str = "English";

pub type Pokedex = Catalog<SpeciesField>;

/// Sort/filter targets for species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeciesField {
    Name,
    Type,
    Number,
    Classification,
    Height,
    Weight,
    CaptureRate,
    EggCycles,
    Abilities,
    ExpYield,
    ExpGrowthRate,
    Happiness,
    StatsTotal,
    StatsHp,
    StatsAtk,
    StatsDef,
    StatsSpAtk,
    StatsSpDef,
    StatsSpd,
    EvTotal,
    EvHp,
    EvAtk,
    EvDef,
    EvSpAtk,
    EvSpDef,
    EvSpd,
    EggGroups,
    Evolution,
    Owned,
    AbilitySlot1,
    AbilitySlot2,
    AbilityHidden,
}

const ALL_SPECIES_FIELDS: &[SpeciesField] = &[
    SpeciesField::Name,
    SpeciesField::Type,
    SpeciesField::Number,
    SpeciesField::Classification,
    SpeciesField::Height,
    SpeciesField::Weight,
    SpeciesField::CaptureRate,
    SpeciesField::EggCycles,
    SpeciesField::Abilities,
    SpeciesField::ExpYield,
    SpeciesField::ExpGrowthRate,
    SpeciesField::Happiness,
    SpeciesField::StatsTotal,
    SpeciesField::StatsHp,
    SpeciesField::StatsAtk,
    SpeciesField::StatsDef,
    SpeciesField::StatsSpAtk,
    SpeciesField::StatsSpDef,
    SpeciesField::StatsSpd,
    SpeciesField::EvTotal,
    SpeciesField::EvHp,
    SpeciesField::EvAtk,
    SpeciesField::EvDef,
    SpeciesField::EvSpAtk,
    SpeciesField::EvSpDef,
    SpeciesField::EvSpd,
    SpeciesField::EggGroups,
    SpeciesField::Evolution,
    SpeciesField::Owned,
    SpeciesField::AbilitySlot1,
    SpeciesField::AbilitySlot2,
    SpeciesField::AbilityHidden,
];

impl FieldKey for SpeciesField {
    fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Number => "number",
            Self::Classification => "classification",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::CaptureRate => "capture_rate",
            Self::EggCycles => "egg_cycles",
            Self::Abilities => "abilities",
            Self::ExpYield => "exp_yield",
            Self::ExpGrowthRate => "exp_growth_rate",
            Self::Happiness => "happiness",
            Self::StatsTotal => "stats_total",
            Self::StatsHp => "stats_hp",
            Self::StatsAtk => "stats_atk",
            Self::StatsDef => "stats_def",
            Self::StatsSpAtk => "stats_sp_atk",
            Self::StatsSpDef => "stats_sp_def",
            Self::StatsSpd => "stats_spd",
            Self::EvTotal => "ev_total",
            Self::EvHp => "ev_hp",
            Self::EvAtk => "ev_atk",
            Self::EvDef => "ev_def",
            Self::EvSpAtk => "ev_sp_atk",
            Self::EvSpDef => "ev_sp_def",
            Self::EvSpd => "ev_spd",
            Self::EggGroups => "egg_groups",
            Self::Evolution => "evolution",
            Self::Owned => "owned",
            Self::AbilitySlot1 => "ability_slot_1",
            Self::AbilitySlot2 => "ability_slot_2",
            Self::AbilityHidden => "ability_hidden",
        }
    }

    fn all() -> &'static [Self] {
        ALL_SPECIES_FIELDS
    }
}

/// Built-in descriptor of the pokedex CSV.
pub fn schema() -> Schema {
    Schema::new("species", "number")
        .field("name", FieldKind::Map(ScalarKind::Text))
        .field("type", FieldKind::List(ScalarKind::Text))
        .field("classification", FieldKind::Text)
        .field("height", FieldKind::Decimal)
        .field("weight", FieldKind::Decimal)
        .field("capture_rate", FieldKind::Integer)
        .field("base_egg_cycles", FieldKind::Integer)
        .field("abilities", FieldKind::List(ScalarKind::Text))
        .field("exp_yield", FieldKind::Integer)
        .field("experience_growth", FieldKind::Integer)
        .field("happiness", FieldKind::Integer)
        .field("base_stats", FieldKind::Map(ScalarKind::Integer))
        .field("evs", FieldKind::Map(ScalarKind::Integer))
        .field("egg_groups", FieldKind::List(ScalarKind::Text))
        .field("evolve_to", FieldKind::List(ScalarKind::Text))
        .field("flavor_text", FieldKind::Map(ScalarKind::Text))
        .field("move_set_level", FieldKind::Map(ScalarKind::Text))
        .field("move_set_machine", FieldKind::List(ScalarKind::Text))
        .field("move_set_egg", FieldKind::List(ScalarKind::Text))
        .field("move_set_tutor", FieldKind::List(ScalarKind::Text))
        .field(OWNED_FIELD, FieldKind::choice(["unknown", "seen", "owned"]))
}

/// Extractor table for [`SpeciesField`].
pub fn registry() -> ExtractorRegistry<SpeciesField> {
    use SpeciesField as F;

    let stat = |key: &str| Extractor::map_entry("base_stats", key);
    let ev = |key: &str| Extractor::map_entry("evs", key);

    ExtractorRegistry::new()
        .with(F::Name, Extractor::map_entry("name", NAME_LANGUAGE))
        .with(F::Type, Extractor::field("type"))
        .with(F::Number, Extractor::identifier())
        .with(F::Classification, Extractor::field("classification"))
        .with(F::Height, Extractor::field("height"))
        .with(F::Weight, Extractor::field("weight"))
        .with(F::CaptureRate, Extractor::field("capture_rate"))
        .with(F::EggCycles, Extractor::field("base_egg_cycles"))
        .with(F::Abilities, Extractor::field("abilities"))
        .with(F::ExpYield, Extractor::field("exp_yield"))
        .with(F::ExpGrowthRate, Extractor::field("experience_growth"))
        .with(F::Happiness, Extractor::field("happiness"))
        .with(F::StatsTotal, Extractor::map_total("base_stats"))
        .with(F::StatsHp, stat("hp"))
        .with(F::StatsAtk, stat("atk"))
        .with(F::StatsDef, stat("def"))
        .with(F::StatsSpAtk, stat("sp_atk"))
        .with(F::StatsSpDef, stat("sp_def"))
        .with(F::StatsSpd, stat("spd"))
        .with(F::EvTotal, Extractor::map_total("evs"))
        .with(F::EvHp, ev("hp"))
        .with(F::EvAtk, ev("atk"))
        .with(F::EvDef, ev("def"))
        .with(F::EvSpAtk, ev("sp_atk"))
        .with(F::EvSpDef, ev("sp_def"))
        .with(F::EvSpd, ev("spd"))
        .with(F::EggGroups, Extractor::field("egg_groups"))
        .with(F::Evolution, Extractor::field("evolve_to"))
        .with(F::Owned, Extractor::field(OWNED_FIELD))
        .with(F::AbilitySlot1, Extractor::list_slot("abilities", 0))
        .with(F::AbilitySlot2, Extractor::list_slot("abilities", 1))
        .with(F::AbilityHidden, Extractor::list_slot("abilities", 2))
}

#[cfg(test)]
#[path = "tests/species_tests.rs"]
mod tests;
