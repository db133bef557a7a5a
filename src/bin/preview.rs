//! Preview binary - prints one dashboard page to the terminal
//!
//! Usage:
//!   cargo run --bin preview -- Tamil                          # Full page for Tamil
//!   cargo run --bin preview -- Hindi --state Bihar            # Narrowed to Bihar
//!   cargo run --bin preview -- Hindi --state Bihar --json     # Page model as JSON
//!   cargo run --bin preview -- --list                         # Languages and states
//!
//! Optional:
//! - CATALOG_PATH (defaults to the built-in table)
//! - GEOJSON_URL, GEOJSON_FEATURE_KEY

use anyhow::{bail, Context, Result};
use bhasha_kosha::config::GeoConfig;
use bhasha_kosha::dashboard::DashboardView;
use bhasha_kosha::Catalog;

/// Parsed command line
#[derive(Debug, Default)]
struct PreviewArgs {
    language: Option<String>,
    states: Vec<String>,
    json: bool,
    list: bool,
}

impl PreviewArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--state" | "-s" => {
                    let state = args.next().context("--state needs a state name")?;
                    parsed.states.push(state);
                }
                "--json" => parsed.json = true,
                "--list" => parsed.list = true,
                flag if flag.starts_with('-') => bail!("Unknown flag: {}", flag),
                language => {
                    if parsed.language.is_some() {
                        bail!("Only one language can be previewed");
                    }
                    parsed.language = Some(language.to_string());
                }
            }
        }

        Ok(parsed)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bhasha_kosha=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args = PreviewArgs::parse(std::env::args().skip(1))?;

    let catalog = match std::env::var("CATALOG_PATH") {
        Ok(path) if !path.trim().is_empty() => Catalog::load(&path)
            .with_context(|| format!("Failed to load language table {}", path))?,
        _ => Catalog::builtin().clone(),
    };

    if args.list {
        println!("Languages: {}", catalog.language_names().join(", "));
        println!("States: {}", catalog.state_names().join(", "));
        return Ok(());
    }

    let Some(language) = args.language.as_deref() else {
        bail!("Usage: preview <language> [--state <name>]... [--json]");
    };

    let result = catalog.filter(language, args.states.as_slice())?;
    let view = DashboardView::build(&result, &GeoConfig::from_env());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view);
    }

    Ok(())
}
