pub(crate) mod browse;
pub(crate) mod config;
pub(crate) mod fields;
pub(crate) mod mark;
pub(crate) mod show;

use std::path::PathBuf;

use pocket_dex_catalog::Record;
use pocket_dex_lib::DexKind;
use pocket_dex_lib::settings;
use pocket_dex_lib::species::NAME_LANGUAGE;

/// Data file and schema override directory for one dex.
pub(crate) struct Sources {
    pub data: PathBuf,
    pub schema_dir: Option<PathBuf>,
}

pub(crate) fn resolve_sources(dex: DexKind, file: Option<PathBuf>) -> Sources {
    let data = settings::resolve_data_path(dex, file);
    log::debug!("{} data: {}", dex, data.display());
    Sources {
        data,
        schema_dir: settings::schema_dir(),
    }
}

/// The English name when the entry has one, otherwise its identifier.
pub(crate) fn display_name(record: &Record) -> String {
    record
        .get("name")
        .ok()
        .and_then(|name| {
            name.as_map()
                .and_then(|m| m.get(NAME_LANGUAGE))
                .map(|v| v.to_string())
        })
        .unwrap_or_else(|| record.id().to_string())
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}
