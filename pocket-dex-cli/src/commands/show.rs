use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pocket_dex_catalog::{FieldValue, Record, Store};
use pocket_dex_lib::{DexKind, load_battledex, load_itemdex, load_pokedex};

use crate::CliError;

use super::{display_name, resolve_sources};

pub(crate) fn run_show(
    dex: DexKind,
    id: &str,
    file: Option<std::path::PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let sources = resolve_sources(dex, file);
    let schema_dir = sources.schema_dir.as_deref();

    match dex {
        DexKind::Species => show(load_pokedex(&sources.data, schema_dir)?.store(), id, json),
        DexKind::Items => show(load_itemdex(&sources.data, schema_dir)?.store(), id, json),
        DexKind::Moves => show(load_battledex(&sources.data, schema_dir)?.store(), id, json),
    }
}

fn show(store: &Store, id: &str, json: bool) -> Result<(), CliError> {
    let record = store.get(id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record.to_mapping())?);
        return Ok(());
    }
    print_record(record);
    Ok(())
}

/// Every field of a record, one per line, in column order.
pub(crate) fn print_record(record: &Record) {
    log::info!(
        "{} {}",
        format!("#{}", record.id()).if_supports_color(Stdout, |t| t.cyan()),
        display_name(record).if_supports_color(Stdout, |t| t.bold()),
    );
    for (name, value) in record.to_mapping().iter() {
        if name == record.schema().id_field {
            continue;
        }
        log::info!("  {:<20} {}", name, format_value(value));
    }
}

fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::List(items) if items.is_empty() => "-".to_string(),
        FieldValue::List(items) => items
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        FieldValue::Map(map) if map.is_empty() => "-".to_string(),
        FieldValue::Map(map) => map
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", "),
        FieldValue::Text(t) if t.is_empty() => "-".to_string(),
        other => other.to_string(),
    }
}
