//! Identity helpers: self-reference resolution and public-key checks.
//!
//! Fixture authors refer to the device owner either by the real identity
//! string or by the `$` shorthand. The desktop app must never see the real
//! owner identity in group data, so both spellings collapse to
//! [`OWN_IDENTITY`].

use crate::{Error, Result};

/// Placeholder the desktop app substitutes with its own identity.
pub const OWN_IDENTITY: &str = "OWN_IDENTITY";

/// Shorthand fixture authors may use instead of the owner's identity.
pub const SELF_TOKEN: &str = "$";

/// Length of a hex-encoded 32-byte public key.
pub const PUBLIC_KEY_HEX_LEN: usize = 64;

/// Whether `identity` refers to the owner.
pub fn is_self(identity: &str, own_identity: &str) -> bool {
  identity == own_identity || identity == SELF_TOKEN
}

/// Map owner references to [`OWN_IDENTITY`]; leave every other identity
/// untouched.
pub fn resolve_self<'a>(identity: &'a str, own_identity: &str) -> &'a str {
  if is_self(identity, own_identity) {
    OWN_IDENTITY
  } else {
    identity
  }
}

/// Check that `public_key` is exactly [`PUBLIC_KEY_HEX_LEN`] hex digits.
pub fn validate_public_key(identity: &str, public_key: &str) -> Result<()> {
  if public_key.len() != PUBLIC_KEY_HEX_LEN {
    return Err(Error::PublicKeyLength {
      identity: identity.to_string(),
      expected: PUBLIC_KEY_HEX_LEN,
      actual:   public_key.len(),
    });
  }
  hex::decode(public_key).map_err(|source| Error::PublicKeyHex {
    identity: identity.to_string(),
    source,
  })?;
  Ok(())
}
