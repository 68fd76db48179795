//! Optional TOML config file.
//!
//! ```toml
//! root   = "../desktop"
//! schema = "legacy"
//! ```
//!
//! Command-line flags override the file, which overrides the defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use shotdata_convert::{Options, Schema};

/// Shape of the optional TOML config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
  /// Destination root the output path is built under.
  #[serde(default)]
  pub root:   Option<PathBuf>,
  #[serde(default)]
  pub schema: Option<Schema>,
}

impl ConfigFile {
  pub fn load(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }

  /// Merge with command-line flags into converter options.
  pub fn into_options(
    self,
    screenshots_dir: PathBuf,
    root: Option<PathBuf>,
    schema: Option<Schema>,
  ) -> Options {
    let root = root.or(self.root).unwrap_or_else(|| PathBuf::from("."));
    let schema = schema.or(self.schema).unwrap_or_default();
    Options::new(screenshots_dir, root).with_schema(schema)
  }
}
