//! choreboard CLI
//!
//! Runs the library's form and collection helpers against JSON files, which
//! is handy for checking form schemas and API fixtures without the app.
//!
//! # Usage
//!
//! ```bash
//! choreboard validate schema.json values.json   # Exit 1 if the form is invalid
//! choreboard sanitize schema.json values.json   # Print cleaned values
//! choreboard init schema.json                   # Print starting values
//! choreboard changed current.json initial.json  # Did the user edit anything?
//! choreboard list tasks.json --sort pointsValue --desc --page 2
//! choreboard list tasks.json --search dish --keys title,description
//! choreboard list tasks.json --max-width 20         # Shorten long text fields
//! choreboard group tasks.json --by status
//! choreboard contrast "#F59E0B"
//! choreboard config --page-size 25                  # Update the saved config
//! ```

use choreboard::collections::{self, SortOrder};
use choreboard::config::{self, AppConfig};
use choreboard::{FormData, FormField, colors, forms, utils, validators};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

shadow_rs::shadow!(build);

#[derive(Parser)]
#[command(name = "choreboard", version, long_version = build::CLAP_LONG_VERSION)]
#[command(about = "Form and card helpers for a household chore app", long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate form values against a schema
    Validate {
        /// JSON array of field descriptors
        schema: PathBuf,
        /// JSON object of field values
        values: PathBuf,
    },
    /// Trim and coerce form values according to a schema
    Sanitize { schema: PathBuf, values: PathBuf },
    /// Print the initial values for a schema
    Init { schema: PathBuf },
    /// Report whether form values differ from their initial state
    Changed { current: PathBuf, initial: PathBuf },
    /// Filter, sort and paginate a JSON array of records
    List {
        records: PathBuf,
        /// Field to sort by
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending
        #[arg(long)]
        desc: bool,
        /// Case-insensitive search term
        #[arg(long)]
        search: Option<String>,
        /// Comma-separated fields to search
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
        /// 1-indexed page number
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Records per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
        /// Truncate text fields to this many characters
        #[arg(long)]
        max_width: Option<usize>,
    },
    /// Group a JSON array of records by a field
    Group {
        records: PathBuf,
        #[arg(long)]
        by: String,
    },
    /// Print the text color that contrasts with a background color
    Contrast { color: String },
    /// Show the saved configuration, updating any values given
    Config {
        #[arg(long)]
        page_size: Option<usize>,
        #[arg(long)]
        log_to_file: Option<bool>,
        #[arg(long)]
        default_color: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = runtime.block_on(config::load_config());
    init_logging(&config, cli.verbose);

    match runtime.block_on(handle_cli(cli.command, &config)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e
                .downcast_ref::<choreboard::Error>()
                .and_then(choreboard::Error::suggestion)
            {
                eprintln!("  hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &AppConfig, verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let builder = tracing_subscriber::fmt().with_max_level(level);

    if config.log_to_file {
        let _ = utils::ensure_dirs();
        if let Some(mut log_path) = utils::get_state_dir() {
            log_path.push("choreboard.log");
            if let Ok(file) = std::fs::File::create(log_path) {
                builder.with_writer(file).with_ansi(false).init();
                return;
            }
        }
    }

    builder.with_writer(std::io::stderr).init();
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> choreboard::Result<T> {
    tracing::debug!("Reading {}", path.display());
    let json = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}

async fn read_schema(path: &Path) -> choreboard::Result<Vec<FormField>> {
    let fields: Vec<FormField> = read_json(path).await?;
    forms::check_schema(&fields)?;
    Ok(fields)
}

fn print_json<T: serde::Serialize>(value: &T) -> choreboard::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn handle_cli(
    command: Commands,
    config: &AppConfig,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Commands::Validate { schema, values } => {
            let fields = read_schema(&schema).await?;
            let values: FormData = read_json(&values).await?;
            let result = forms::validate_form(&values, &fields);

            if result.is_valid {
                println!("✓ Form is valid");
                return Ok(ExitCode::SUCCESS);
            }
            println!(
                "✗ {} {} failed validation:",
                result.errors.len(),
                utils::pluralize(result.errors.len(), "field", None)
            );
            // Report in schema order
            for field in &fields {
                if let Some(message) = result.error(&field.name) {
                    println!("  {}: {message}", field.name);
                }
            }
            return Ok(ExitCode::FAILURE);
        }
        Commands::Sanitize { schema, values } => {
            let fields = read_schema(&schema).await?;
            let values: FormData = read_json(&values).await?;
            print_json(&forms::sanitize_form_data(&values, &fields))?;
        }
        Commands::Init { schema } => {
            let fields = read_schema(&schema).await?;
            print_json(&forms::get_initial_form_data(&fields))?;
        }
        Commands::Changed { current, initial } => {
            let current: FormData = read_json(&current).await?;
            let initial: FormData = read_json(&initial).await?;
            if forms::has_form_changes(&current, &initial) {
                println!("changed");
            } else {
                println!("unchanged");
            }
        }
        Commands::List {
            records,
            sort,
            desc,
            search,
            keys,
            page,
            page_size,
            max_width,
        } => {
            let mut items: Vec<serde_json::Value> = read_json(&records).await?;

            if let Some(term) = search {
                let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
                if keys.is_empty() {
                    return Err("--search needs at least one field in --keys".into());
                }
                items = collections::filter_by_search(&items, &term, &keys);
            }

            if let Some(key) = sort {
                let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
                items = collections::sort_by(&items, &key, order);
            }

            let page_size = page_size.unwrap_or(config.page_size);
            let mut page = collections::paginate(&items, page, page_size);
            if let Some(width) = max_width {
                page.items.iter_mut().for_each(|item| truncate_text_fields(item, width));
            }
            tracing::debug!(
                "Page {} of {} ({} records)",
                page.page,
                page.total_pages,
                items.len()
            );
            print_json(&page)?;
        }
        Commands::Group { records, by } => {
            let items: Vec<serde_json::Value> = read_json(&records).await?;
            print_json(&collections::group_by(&items, &by))?;
        }
        Commands::Contrast { color } => {
            let background = if validators::is_valid_hex_color(&color) {
                color.as_str()
            } else {
                tracing::warn!(
                    "{color:?} is not a hex color, using {}",
                    config.default_color
                );
                config.default_color.as_str()
            };
            println!("{}", colors::contrasting_text_color(background));
        }
        Commands::Config {
            page_size,
            log_to_file,
            default_color,
        } => {
            let mut updated = config.clone();
            if let Some(size) = page_size {
                updated.page_size = size.clamp(1, config::MAX_PAGE_SIZE);
            }
            if let Some(enabled) = log_to_file {
                updated.log_to_file = enabled;
            }
            if let Some(color) = default_color {
                if !validators::is_valid_hex_color(&color) {
                    return Err(format!("{color:?} is not a hex color").into());
                }
                updated.default_color = color;
            }

            if updated != *config {
                config::save_config(&updated).await?;
                if let Some(path) = config::config_path() {
                    tracing::info!("Saved config to {}", path.display());
                }
            }
            print_json(&updated)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn truncate_text_fields(record: &mut serde_json::Value, max_chars: usize) {
    if let Some(fields) = record.as_object_mut() {
        for value in fields.values_mut() {
            if let serde_json::Value::String(text) = value {
                *text = utils::truncate_string(text, max_chars);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate_text_fields_only_touches_strings() {
        let mut record = json!({"title": "Vacuum the living room", "pointsValue": 15});
        truncate_text_fields(&mut record, 10);
        assert_eq!(record, json!({"title": "Vacuum ...", "pointsValue": 15}));
    }
}
