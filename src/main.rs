//! mods-display - render a MODS record as HTML
//!
//! Usage: `mods-display <record.xml> [--json]`

use std::env;
use std::process;

use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mods_display::{DisplayConfig, FieldKind, ModsDisplayHtml, ModsRecord};

#[derive(Serialize)]
struct JsonField<'a> {
    kind: FieldKind,
    label: &'a str,
    values: &'a [String],
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = DisplayConfig::load()?;

    // Logs go to stderr so stdout stays clean HTML/JSON
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("mods_display={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|arg| arg == "--json");
    let Some(path) = args.iter().skip(1).find(|arg| !arg.starts_with("--")) else {
        let program = args.first().map(String::as_str).unwrap_or("mods-display");
        eprintln!("Usage: {} <record.xml> [--json]", program);
        process::exit(2);
    };

    let record = ModsRecord::from_path(path)?;
    let display = ModsDisplayHtml::new(&record, &config);

    if json {
        let fields = display.all_fields();
        let output: Vec<JsonField> = fields
            .iter()
            .map(|(kind, field)| JsonField {
                kind: *kind,
                label: &field.label,
                values: &field.values,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", display.to_html());
    }

    Ok(())
}
