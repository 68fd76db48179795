//! `convert-screenshot-data`: turn screenshot fixtures into desktop debug data.
//!
//! # Usage
//!
//! ```text
//! convert-screenshot-data ~/src/screenshots
//! convert-screenshot-data ~/src/screenshots --root ~/src/desktop --schema legacy
//! convert-screenshot-data ~/src/screenshots --config shotdata.toml
//! ```
//!
//! Reads `<screenshots>/chat_data/{work,consumer}/data.json` and writes
//! `<root>/src/common/dom/debug/screenshot-data-{work,consumer}.json`.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use config::ConfigFile;
use shotdata_convert::{Schema, VARIANTS, run_variant};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "convert-screenshot-data",
  version,
  about = "Convert screenshot fixture data into desktop debug data"
)]
struct Args {
  /// Directory containing `chat_data/<variant>/data.json`.
  #[arg(value_name = "SCREENSHOTS_DIR")]
  screenshots_dir: PathBuf,

  /// Root the output path is built under (default: current directory).
  #[arg(long, value_name = "DIR")]
  root: Option<PathBuf>,

  /// Output shape: `full` or `legacy` (default: full).
  #[arg(long)]
  schema: Option<Schema>,

  /// Path to a TOML config file (root, schema).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr; stdout only carries progress lines.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::load(path)?,
    None => ConfigFile::default(),
  };
  let options = file_cfg.into_options(args.screenshots_dir, args.root, args.schema);

  tracing::debug!(?options, "resolved options");
  println!("{}", options.root.display());

  for variant in VARIANTS {
    println!("Writing {variant} data");
    run_variant(&options, variant)
      .with_context(|| format!("converting {variant} screenshot data"))?;
  }

  println!("Done!");
  Ok(())
}
