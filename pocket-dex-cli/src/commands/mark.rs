use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pocket_dex_lib::{DexKind, Possession, load_pokedex, possession, set_possession};

use crate::CliError;

use super::{display_name, resolve_sources};

/// Apply a possession change to the loaded pokedex and report it. The data
/// file is left untouched.
pub(crate) fn run_mark(
    id: &str,
    status: Possession,
    file: Option<std::path::PathBuf>,
) -> Result<(), CliError> {
    let sources = resolve_sources(DexKind::Species, file);
    let mut dex = load_pokedex(&sources.data, sources.schema_dir.as_deref())?;

    let record = dex.store_mut().get_mut(id)?;
    let before = possession(record)?;
    set_possession(record, status)?;
    let after = possession(record)?;

    log::info!(
        "{} {}: {} -> {}",
        format!("#{}", record.id()).if_supports_color(Stdout, |t| t.cyan()),
        display_name(record).if_supports_color(Stdout, |t| t.bold()),
        before,
        after.if_supports_color(Stdout, |t| t.green()),
    );

    let counts: Vec<String> = Possession::all()
        .iter()
        .map(|&p| {
            let n = dex
                .store()
                .records()
                .filter(|r| possession(r).is_ok_and(|q| q == p))
                .count();
            format!("{p}: {n}")
        })
        .collect();
    log::info!("  {}", counts.join(", "));
    log::warn!("Possession changes are not saved to {}", sources.data.display());

    Ok(())
}
