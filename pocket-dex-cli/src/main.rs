//! pocket-dex CLI
//!
//! Command-line browser for the Pokedex, Itemdex and Battledex catalogs.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

fn init_logger(verbose: bool, quiet: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);
    if !verbose {
        // Bare messages; warnings and errors keep a level prefix
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        });
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Browse { dex, args } => commands::browse::run_browse(dex, args),
        Commands::Show {
            dex,
            id,
            source,
            json,
        } => commands::show::run_show(dex, &id, source.file, json),
        Commands::Fields { dex } => commands::fields::run_fields(dex),
        Commands::Mark { id, status, source } => {
            commands::mark::run_mark(&id, status, source.file)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetData { dex, path } => {
                commands::config::run_config_set_data(dex, path)
            }
            ConfigAction::SetSchemas { dir } => commands::config::run_config_set_schemas(dir),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
