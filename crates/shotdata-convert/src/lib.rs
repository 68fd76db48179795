//! Screenshot fixture converter.
//!
//! Turns a hand-written fixture set (`chat_data/<variant>/data.json` plus the
//! media files it references) into the JSON document the desktop app loads
//! in screenshot mode. Pure synchronous; every error aborts the variant.
//!
//! # Quick start
//!
//! ```no_run
//! use shotdata_convert::{Options, VARIANTS, run_variant};
//!
//! let options = Options::new("/path/to/screenshots", ".");
//! for variant in VARIANTS {
//!   let written = run_variant(&options, variant).unwrap();
//!   println!("wrote {}", written.display());
//! }
//! ```

pub mod contacts;
pub mod error;
pub mod groups;
pub mod media;
pub mod messages;


use std::{
  fs,
  path::{Path, PathBuf},
};

pub use error::{Error, Result};
pub use shotdata_core::output::Schema;
use shotdata_core::{
  output::{OutputDocument, Profile},
  source::SourceDocument,
};

// ─── Layout ───────────────────────────────────────────────────────────────────

/// Fixture sets converted on every run, in this order.
pub const VARIANTS: [&str; 2] = ["work", "consumer"];

/// Name of the fixture document inside a variant directory.
pub const DATA_FILE: &str = "data.json";

/// Owner profile picture inside a variant directory (full schema only).
pub const OWN_PICTURE_FILE: &str = "me.jpg";

/// `<screenshots_dir>/chat_data/<variant>`
pub fn data_dir(screenshots_dir: &Path, variant: &str) -> PathBuf {
  screenshots_dir.join("chat_data").join(variant)
}

/// `<root>/src/common/dom/debug/screenshot-data-<variant>.json`
pub fn output_path(root: &Path, variant: &str) -> PathBuf {
  root
    .join("src")
    .join("common")
    .join("dom")
    .join("debug")
    .join(format!("screenshot-data-{variant}.json"))
}

// ─── Options ──────────────────────────────────────────────────────────────────

/// Where to read fixtures, where to write output, and in which shape.
#[derive(Debug, Clone)]
pub struct Options {
  pub screenshots_dir: PathBuf,
  pub root:            PathBuf,
  pub schema:          Schema,
}

impl Options {
  /// Options with the default (full) schema.
  pub fn new(screenshots_dir: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
    Self {
      screenshots_dir: screenshots_dir.into(),
      root:            root.into(),
      schema:          Schema::default(),
    }
  }

  pub fn with_schema(mut self, schema: Schema) -> Self {
    self.schema = schema;
    self
  }
}

/// Per-variant state shared by the contact, group and message converters.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
  /// Directory media references are resolved against.
  pub data_dir:     &'a Path,
  pub schema:       Schema,
  pub own_identity: &'a str,
}

// ─── Pipeline ─────────────────────────────────────────────────────────────────

/// Read and parse `data.json` from a variant directory.
pub fn load_document(data_dir: &Path) -> Result<SourceDocument> {
  let path = data_dir.join(DATA_FILE);
  let raw = fs::read_to_string(&path).map_err(|source| Error::Read {
    path: path.clone(),
    source,
  })?;
  serde_json::from_str(&raw).map_err(|source| Error::Parse { path, source })
}

fn load_profile(ctx: &Context<'_>, document: &SourceDocument) -> Result<Profile> {
  let nickname = document.nickname.clone().ok_or_else(|| Error::MissingField {
    scope: DATA_FILE.to_string(),
    field: "nickname",
  })?;
  Ok(Profile {
    identity: document.my_identity.clone(),
    nickname,
    profile_picture: media::inline(ctx.data_dir, OWN_PICTURE_FILE)?,
  })
}

/// Convert an already-parsed document whose media live in `data_dir`.
pub fn convert_document(
  document: &SourceDocument,
  data_dir: &Path,
  schema: Schema,
) -> Result<OutputDocument> {
  let ctx = Context {
    data_dir,
    schema,
    own_identity: &document.my_identity,
  };

  let profile = match schema {
    Schema::Full => Some(load_profile(&ctx, document)?),
    Schema::Legacy => None,
  };
  let contacts = contacts::convert_contacts(&ctx, &document.contacts)?;
  let groups = groups::convert_groups(&ctx, document.groups.as_deref(), &contacts)?;

  Ok(OutputDocument {
    profile,
    contacts,
    groups,
  })
}

/// Load and convert one variant without writing anything.
pub fn convert_variant(options: &Options, variant: &str) -> Result<OutputDocument> {
  let dir = data_dir(&options.screenshots_dir, variant);
  let document = load_document(&dir)?;
  tracing::debug!(
    variant,
    schema = %options.schema,
    contacts = document.contacts.iter().count(),
    groups = document.groups.as_ref().map_or(0, Vec::len),
    "loaded fixture"
  );
  convert_document(&document, &dir, options.schema)
}

/// Pretty-print with two-space indentation and a trailing newline.
pub fn render_document(document: &OutputDocument) -> Result<String> {
  let mut out = serde_json::to_string_pretty(document)?;
  out.push('\n');
  Ok(out)
}

/// Write `document` to `path`, replacing any existing file.
pub fn write_document(path: &Path, document: &OutputDocument) -> Result<()> {
  let rendered = render_document(document)?;
  let write_err = |source| Error::Write {
    path: path.to_path_buf(),
    source,
  };
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).map_err(write_err)?;
  }
  fs::write(path, rendered).map_err(write_err)
}

/// Convert one variant and write its output file. Returns the path written.
///
/// The document is fully converted before anything is written, so a bad
/// fixture never leaves a partial file behind.
pub fn run_variant(options: &Options, variant: &str) -> Result<PathBuf> {
  let document = convert_variant(options, variant)?;
  let path = output_path(&options.root, variant);
  write_document(&path, &document)?;
  tracing::info!(variant, path = %path.display(), "wrote screenshot data");
  Ok(path)
}
