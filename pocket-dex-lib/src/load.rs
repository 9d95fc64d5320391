//! Loading the three catalogs from CSV, with optional schema overrides.

use std::path::Path;

use pocket_dex_catalog::{CatalogSource, Schema, Store, load_schema_override};

use crate::dex::DexKind;
use crate::error::DexResult;
use crate::items::{self, Itemdex};
use crate::moves::{self, Battledex};
use crate::species::{self, Pokedex};

/// The descriptor for `kind`: `<schema_dir>/<kind>.yaml` when present,
/// otherwise the built-in one.
pub fn schema_for(kind: DexKind, schema_dir: Option<&Path>) -> DexResult<Schema> {
    if let Some(dir) = schema_dir {
        if let Some(schema) = load_schema_override(dir, kind.short_name())? {
            return Ok(schema);
        }
    }
    Ok(kind.builtin_schema())
}

fn load_store(
    kind: DexKind,
    source: impl Into<CatalogSource>,
    schema_dir: Option<&Path>,
) -> DexResult<Store> {
    let schema = schema_for(kind, schema_dir)?;
    let store = Store::load(schema, source)?;
    log::debug!("loaded {} with {} entries", kind, store.len());
    Ok(store)
}

pub fn load_pokedex(source: impl Into<CatalogSource>, schema_dir: Option<&Path>) -> DexResult<Pokedex> {
    let store = load_store(DexKind::Species, source, schema_dir)?;
    Ok(Pokedex::new(store, species::registry()))
}

pub fn load_itemdex(source: impl Into<CatalogSource>, schema_dir: Option<&Path>) -> DexResult<Itemdex> {
    let store = load_store(DexKind::Items, source, schema_dir)?;
    Ok(Itemdex::new(store, items::registry()))
}

pub fn load_battledex(
    source: impl Into<CatalogSource>,
    schema_dir: Option<&Path>,
) -> DexResult<Battledex> {
    let store = load_store(DexKind::Moves, source, schema_dir)?;
    Ok(Battledex::new(store, moves::registry()))
}
