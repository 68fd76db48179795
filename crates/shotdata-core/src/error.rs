//! Error types for `shotdata-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(
    "contact {identity}: public key must be {expected} characters, got {actual}"
  )]
  PublicKeyLength {
    identity: String,
    expected: usize,
    actual:   usize,
  },

  #[error("contact {identity}: public key is not valid hex: {source}")]
  PublicKeyHex {
    identity: String,
    #[source]
    source:   hex::FromHexError,
  },

  #[error("unsupported message type: {0:?}")]
  UnsupportedMessageType(String),

  #[error("unsupported message state: {0:?}")]
  UnsupportedState(String),

  #[error("unknown schema: {0:?}")]
  UnknownSchema(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
