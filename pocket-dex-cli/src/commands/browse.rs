use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pocket_dex_catalog::{Catalog, Criterion, FieldKey, Record};
use pocket_dex_lib::{DexKind, load_battledex, load_itemdex, load_pokedex};

use crate::CliError;
use crate::cli_types::BrowseArgs;

use super::{display_name, resolve_sources, truncate_str};

const NAME_WIDTH: usize = 24;

pub(crate) fn run_browse(dex: DexKind, args: BrowseArgs) -> Result<(), CliError> {
    let sources = resolve_sources(dex, args.source.file.clone());
    let schema_dir = sources.schema_dir.as_deref();

    match dex {
        DexKind::Species => browse(dex, &load_pokedex(&sources.data, schema_dir)?, &args),
        DexKind::Items => browse(dex, &load_itemdex(&sources.data, schema_dir)?, &args),
        DexKind::Moves => browse(dex, &load_battledex(&sources.data, schema_dir)?, &args),
    }
}

fn browse<K: FieldKey>(dex: DexKind, catalog: &Catalog<K>, args: &BrowseArgs) -> Result<(), CliError> {
    let filters = parse_filters(args)?;
    for (key, _) in &filters {
        warn_unknown_key::<K>(key);
    }
    for key in &args.sort {
        warn_unknown_key::<K>(key);
    }

    let mut view = catalog.view();
    for (key, criterion) in &filters {
        view.filter_by_name(key, criterion)?;
    }
    // Stable passes: the last pass decides the primary order.
    for key in args.sort.iter().rev() {
        view.sort_by_name(key, args.desc)?;
    }

    let shown = args.limit.unwrap_or(view.len()).min(view.len());
    let results: Vec<&Record> = view.results().into_iter().take(shown).collect();

    if args.json {
        let entries: Vec<_> = results.iter().map(|r| r.to_mapping()).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    log::info!(
        "{} ({} of {} entries)",
        dex.display_name().if_supports_color(Stdout, |t| t.bold()),
        view.len(),
        catalog.store().len(),
    );
    crate::log_blank();

    for record in &results {
        let id = format!("{:>10}", record.id().as_str());
        let mut line = format!(
            "  {}  {:<width$}",
            id.if_supports_color(Stdout, |t| t.cyan()),
            truncate_str(&display_name(record), NAME_WIDTH),
            width = NAME_WIDTH,
        );
        for key in &args.sort {
            let value = catalog.registry().resolve_name(key).extract(record)?;
            line.push_str(&format!(
                "  {}={}",
                key.if_supports_color(Stdout, |t| t.dimmed()),
                value
            ));
        }
        log::info!("{}", line.trim_end());
    }

    if shown < view.len() {
        crate::log_blank();
        log::info!(
            "{}",
            format!("... {} more (raise --limit to see them)", view.len() - shown)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

fn warn_unknown_key<K: FieldKey>(key: &str) {
    if K::from_name(key).is_none() {
        log::warn!("Unknown key '{}', using the identifier instead", key);
    }
}

/// Filters in command-line order: every `--is`, then `--contains`, then
/// `--between`.
fn parse_filters(args: &BrowseArgs) -> Result<Vec<(String, Criterion)>, CliError> {
    let mut filters = Vec::new();
    for raw in &args.is {
        let (key, value) = split_key_value(raw)?;
        filters.push((key, Criterion::is(value)));
    }
    for raw in &args.contains {
        let (key, text) = split_key_value(raw)?;
        filters.push((key, Criterion::contains(text)));
    }
    for raw in &args.between {
        let (key, range) = split_key_value(raw)?;
        let (low, high) = range.split_once("..").ok_or_else(|| {
            CliError::invalid_argument(format!("expected KEY=LO..HI, got '{raw}'"))
        })?;
        filters.push((key, Criterion::between(low.trim(), high.trim())));
    }
    Ok(filters)
}

fn split_key_value(raw: &str) -> Result<(String, String), CliError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(CliError::invalid_argument(format!(
            "expected KEY=VALUE, got '{raw}'"
        ))),
    }
}
