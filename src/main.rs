//! wbschema - evaluate a statement schema against rows of data

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wbschema::context::{CachedResolver, CellValue, StaticResolver, TableContext};
use wbschema::schema::{BatchConfig, BatchEvaluator, Schema};
use wbschema::value::DEFAULT_SITE_IRI;

/// Evaluate a statement schema against rows of data
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Schema file (JSON)
    #[arg(short, long)]
    schema: PathBuf,

    /// Rows file (JSON array of objects mapping column names to cells)
    #[arg(short, long)]
    rows: PathBuf,

    /// Entity table (JSON object mapping labels to item ids)
    #[arg(short, long)]
    entities: Option<PathBuf>,

    /// Accepted language codes, comma separated (default: any well-formed code)
    #[arg(short, long, value_delimiter = ',')]
    languages: Vec<String>,

    /// Entity IRI prefix of the target site
    #[arg(long, default_value = DEFAULT_SITE_IRI)]
    site_iri: String,

    /// Number of worker threads (default: available parallelism)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

type Row = HashMap<String, Option<CellValue>>;

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let schema = Arc::new(Schema::from_file(&args.schema).context("Failed to load schema")?);
    let rows: Vec<Row> = read_json(&args.rows).context("Failed to load rows")?;
    let resolver = match &args.entities {
        Some(path) => {
            let entries: HashMap<String, String> =
                read_json(path).context("Failed to load entity table")?;
            entries.into_iter().collect()
        }
        None => StaticResolver::new(),
    };

    let columns: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();
    for missing in schema.columns().difference(&columns) {
        log::warn!("Schema reads column {:?} which no row has", missing);
    }

    let mut table = TableContext::new(columns.iter().copied())
        .with_site_iri(args.site_iri.clone())
        .with_resolver(CachedResolver::new(resolver));
    if !args.languages.is_empty() {
        table = table.with_languages(args.languages.iter().map(|code| code.to_lowercase()));
    }

    let contexts: Vec<_> = rows
        .into_iter()
        .map(|row| {
            table.row(
                row.into_iter()
                    .filter_map(|(column, cell)| cell.map(|cell| (column, cell)))
                    .collect(),
            )
        })
        .collect();

    let config = match args.workers {
        Some(workers) => BatchConfig { workers },
        None => BatchConfig::default(),
    };
    let report = BatchEvaluator::with_config(schema, config).evaluate(&contexts);

    for (index, row) in report.rows.iter().enumerate() {
        match row {
            Ok(output) => {
                println!("row {}:", index + 1);
                for value in &output.values {
                    println!("  {}: {}", value.field, value.snak);
                }
                for field in &output.skipped {
                    println!("  {}: skipped", field);
                }
            }
            Err(err) => eprintln!("row {}: {}", index + 1, err),
        }
    }

    println!(
        "{} rows, {} failed, {} fields skipped",
        report.rows.len(),
        report.failed(),
        report.skipped_fields()
    );

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}
