use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pocket_dex_catalog::FieldKind;
use pocket_dex_lib::DexKind;
use pocket_dex_lib::load::schema_for;
use pocket_dex_lib::settings;

use crate::CliError;

pub(crate) fn run_fields(dex: DexKind) -> Result<(), CliError> {
    let schema = schema_for(dex, settings::schema_dir().as_deref())?;

    log::info!(
        "{} keys:",
        dex.display_name().if_supports_color(Stdout, |t| t.bold()),
    );
    for name in dex.field_names() {
        log::info!("  {}", name);
    }

    crate::log_blank();
    log::info!(
        "{} (identifier: {}):",
        "Columns".if_supports_color(Stdout, |t| t.bold()),
        schema.id_field.if_supports_color(Stdout, |t| t.cyan()),
    );
    for field in &schema.fields {
        log::info!(
            "  {:<20} {}",
            field.name,
            describe(&field.kind).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

fn describe(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::Integer => "integer".to_string(),
        FieldKind::Decimal => "decimal".to_string(),
        FieldKind::Flag => "flag".to_string(),
        FieldKind::List(item) => format!("list of {}", format!("{item:?}").to_lowercase()),
        FieldKind::Map(value) => format!("mapping of {}", format!("{value:?}").to_lowercase()),
        FieldKind::Choice { choices, .. } => format!("one of {}", choices.join("/")),
    }
}
