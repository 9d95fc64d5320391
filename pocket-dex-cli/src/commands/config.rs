use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pocket_dex_lib::DexKind;
use pocket_dex_lib::settings;

use crate::CliError;

/// Show the settings file and what each dex resolves to.
pub(crate) fn run_config_show() {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "Pocket Dex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    for &dex in DexKind::all() {
        let resolved = settings::resolve_data_path(dex, None);
        let source = if settings::load_data_path(dex).is_some() {
            "(settings)"
        } else {
            "(default)"
        };
        log::info!(
            "  {:<10} {} {}",
            dex.short_name(),
            resolved.display(),
            source.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    match settings::schema_dir() {
        Some(dir) => log::info!("  {:<10} {}", "schemas", dir.display()),
        None => log::info!(
            "  {:<10} {}",
            "schemas",
            "built-in".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

pub(crate) fn run_config_set_data(dex: DexKind, path: PathBuf) -> Result<(), CliError> {
    let path = absolute(path)?;
    if !path.is_file() {
        log::warn!("{} does not exist yet", path.display());
    }
    settings::save_data_path(dex, Some(&path))
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;
    log::info!(
        "{} data file set to {}",
        dex.display_name(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

pub(crate) fn run_config_set_schemas(dir: PathBuf) -> Result<(), CliError> {
    let dir = absolute(dir)?;
    if !dir.is_dir() {
        return Err(CliError::config(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    settings::save_schema_dir(Some(&dir))
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;
    log::info!(
        "Schema overrides will be read from {}",
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

fn absolute(path: PathBuf) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
