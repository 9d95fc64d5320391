//! Shared application settings (data file locations, schema overrides).
//!
//! The settings file is always `~/.config/pocket-dex/settings.toml`:
//!
//! ```toml
//! [data]
//! species = "/home/me/dex/pokedex.csv"
//!
//! [schemas]
//! dir = "/home/me/dex/schemas"
//! ```

use std::path::{Path, PathBuf};

use crate::dex::DexKind;
use crate::error::{DexError, DexResult};

/// Canonical path to the shared settings file: `~/.config/pocket-dex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("pocket-dex").join("settings.toml")
}

/// Resolve a catalog's data file using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `data.<kind>` in `settings.toml`
/// 3. `<cwd>/<default file name>`
pub fn resolve_data_path(kind: DexKind, cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_data_path(kind) {
        return p;
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(kind.default_file_name())
}

/// Saved data file for `kind`, if any.
pub fn load_data_path(kind: DexKind) -> Option<PathBuf> {
    read_path(&settings_path(), "data", kind.short_name())
}

/// Directory searched for `<kind>.yaml` schema overrides, if configured.
pub fn schema_dir() -> Option<PathBuf> {
    read_path(&settings_path(), "schemas", "dir")
}

/// Save (or clear) the data file for `kind`.
pub fn save_data_path(kind: DexKind, path: Option<&Path>) -> DexResult<()> {
    write_path(&settings_path(), "data", kind.short_name(), path)
}

/// Save (or clear) the schema override directory.
pub fn save_schema_dir(dir: Option<&Path>) -> DexResult<()> {
    write_path(&settings_path(), "schemas", "dir", dir)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

/// Read `[table] key` from a settings file as a path. Empty strings count as
/// unset.
pub fn read_path(settings: &Path, table: &str, key: &str) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let value = doc.get(table)?.get(key)?.as_str()?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Set or remove `[table] key` in a settings file.
///
/// Uses `toml::Value` for a surgical update so unrelated keys are kept.
pub fn write_path(settings: &Path, table: &str, key: &str, path: Option<&Path>) -> DexResult<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let root = doc
        .as_table_mut()
        .ok_or_else(|| DexError::settings("settings.toml root is not a table"))?;
    let section = root
        .entry(table)
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| DexError::settings(format!("[{table}] is not a table")))?;

    match path {
        Some(p) => {
            section.insert(
                key.to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            section.remove(key);
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized =
        toml::to_string_pretty(&doc).map_err(|e| DexError::settings(e.to_string()))?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;
    log::debug!("updated [{table}] {key} in {}", settings.display());

    Ok(())
}
