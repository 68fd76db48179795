//! Inlining of media files referenced by the fixture.

use std::{fs, path::Path};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;

use crate::error::{Error, Result};

/// Media type of every inlined image; fixtures only carry JPEGs.
pub const JPEG_MEDIA_TYPE: &str = "image/jpeg";

/// Read `reference` (relative to `dir`) and return its bytes as base64.
pub fn inline(dir: &Path, reference: &str) -> Result<String> {
  let path = dir.join(reference);
  let bytes = fs::read(&path).map_err(|source| Error::Read {
    path: path.clone(),
    source,
  })?;
  tracing::debug!(path = %path.display(), bytes = bytes.len(), "inlined media");
  Ok(B64.encode(bytes))
}

/// Whether an image reference points at a JPEG file.
pub fn is_jpeg(reference: &str) -> bool {
  reference.ends_with(".jpg")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inline_round_trips_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let bytes: Vec<u8> = (0..=255).collect();
    fs::write(dir.path().join("blob.bin"), &bytes).unwrap();

    let encoded = inline(dir.path(), "blob.bin").unwrap();
    assert_eq!(B64.decode(encoded).unwrap(), bytes);
  }

  #[test]
  fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = inline(dir.path(), "nope.jpg").unwrap_err();
    assert!(matches!(&err, Error::Read { path, .. } if path.ends_with("nope.jpg")));
    assert!(err.to_string().contains("nope.jpg"));
  }

  #[test]
  fn only_jpg_extension_counts_as_jpeg() {
    assert!(is_jpeg("photos/beach.jpg"));
    assert!(!is_jpeg("photos/beach.jpeg"));
    assert!(!is_jpeg("photos/beach.png"));
  }
}
