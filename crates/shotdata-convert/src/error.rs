//! Error types for the fixture converter.

use std::{io, path::PathBuf};

use shotdata_core::message::MessageType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] shotdata_core::Error),

  #[error("failed to read {}: {source}", path.display())]
  Read {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to write {}: {source}", path.display())]
  Write {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse {}: {source}", path.display())]
  Parse {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("{scope}: missing required field `{field}`")]
  MissingField { scope: String, field: &'static str },

  #[error("{scope}: invalid {kind} content: {source}")]
  InvalidContent {
    scope:  String,
    kind:   MessageType,
    #[source]
    source: serde_json::Error,
  },

  #[error("{scope}: image {reference:?} is not a .jpg file")]
  NotJpeg { scope: String, reference: String },

  #[error("group {group:?} contains member {member} who is not in the contact list")]
  UnknownMember { group: String, member: String },

  #[error("group {group:?} has creator {creator} who is not in the contact list")]
  UnknownCreator { group: String, creator: String },

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
