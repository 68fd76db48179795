//! The hand-written fixture document (`chat_data/<variant>/data.json`).
//!
//! Field names follow the fixture files as they are written, which is why a
//! few of them are not camelCase (`pk`, `created_at`, `mime-type`). Every
//! optional field documents its default.

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::{Localized, OrderedMap};

/// Root of a fixture document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
  /// The owner's own identity.
  pub my_identity: String,
  /// Owner nickname; required when a profile block is produced.
  #[serde(default)]
  pub nickname:    Option<String>,
  /// Contacts keyed by identity, in document order.
  pub contacts:    OrderedMap<SourceContact>,
  /// Required when groups are converted.
  #[serde(default)]
  pub groups:      Option<Vec<SourceGroup>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceContact {
  /// Hex-encoded public key.
  pub pk:           String,
  /// `[first, last]` per language.
  pub name:         Localized<(String, String)>,
  /// 1-based verification level, defaults to 1.
  #[serde(default = "default_verification")]
  pub verification: i64,
  /// Contact is only known through a group. Defaults to false.
  #[serde(default)]
  pub hidden:       bool,
  /// Defaults to false.
  #[serde(default)]
  pub is_work:      bool,
  /// Avatar image path relative to the fixture directory.
  #[serde(default)]
  pub avatar:       Option<Localized<String>>,
  #[serde(default)]
  pub conversation: Vec<SourceMessage>,
}

fn default_verification() -> i64 {
  1
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceGroup {
  pub id:           String,
  /// Creator identity; the owner may be written as `$`.
  pub creator:      String,
  pub name:         Localized<String>,
  /// Member identities; the owner may be written as `$`.
  pub members:      Vec<String>,
  /// Creation time as a (negative) offset in minutes from now.
  pub created_at:   Number,
  #[serde(default)]
  pub avatar:       Option<Localized<String>>,
  #[serde(default)]
  pub conversation: Vec<SourceMessage>,
}

/// A message as written in the fixture. The `type` tag decides which of the
/// optional fields are required; see the converter for the dispatch.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceMessage {
  /// Offset in minutes from now; negative for the past.
  pub date:             Number,
  #[serde(rename = "type")]
  pub kind:             String,
  pub out:              bool,
  #[serde(rename = "messageId", default)]
  pub message_id:       Option<String>,
  /// Sender identity; required for incoming group messages.
  #[serde(default)]
  pub identity:         Option<String>,
  /// Delivery state, e.g. `USERACK`.
  #[serde(default)]
  pub state:            Option<String>,
  /// Read flag for incoming messages; defaults to true.
  #[serde(default)]
  pub read:             Option<bool>,
  #[serde(default)]
  pub content:          Option<Value>,
  #[serde(default)]
  pub caption:          Option<Value>,
  #[serde(rename = "mime-type", default)]
  pub mime_type:        Option<String>,
  #[serde(rename = "contentQuoteV2", default)]
  pub content_quote_v2: Option<Value>,
}

/// Negate a minutes offset, keeping integers integral.
pub fn minutes_ago(offset: &Number) -> Number {
  if let Some(n) = offset.as_i64().and_then(i64::checked_neg) {
    return Number::from(n);
  }
  offset
    .as_f64()
    .and_then(|f| Number::from_f64(-f))
    .unwrap_or_else(|| offset.clone())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn minutes_ago_negates_integers_and_floats() {
    assert_eq!(minutes_ago(&Number::from(-90)), Number::from(90));
    assert_eq!(minutes_ago(&Number::from(0)), Number::from(0));
    let half = Number::from_f64(-1.5).unwrap();
    assert_eq!(minutes_ago(&half).as_f64(), Some(1.5));
    assert!(minutes_ago(&half).is_f64());
  }

  #[test]
  fn contact_defaults_apply() {
    let contact: SourceContact = serde_json::from_value(json!({
      "pk": "00".repeat(32),
      "name": {"default": ["Ada", "Lovelace"]},
    }))
    .unwrap();
    assert_eq!(contact.verification, 1);
    assert!(!contact.hidden);
    assert!(!contact.is_work);
    assert!(contact.avatar.is_none());
    assert!(contact.conversation.is_empty());
  }

  #[test]
  fn contact_without_pk_is_rejected() {
    let err = serde_json::from_value::<SourceContact>(json!({
      "name": {"default": ["Ada", "Lovelace"]},
    }))
    .unwrap_err();
    assert!(err.to_string().contains("missing field `pk`"));
  }

  #[test]
  fn message_fields_use_fixture_names() {
    let message: SourceMessage = serde_json::from_value(json!({
      "date": -5,
      "type": "FILE",
      "out": false,
      "messageId": "0102030405060708",
      "mime-type": "application/pdf",
      "contentQuoteV2": {"default": "> quoted"},
      "content": {"default": "report.pdf"},
    }))
    .unwrap();
    assert_eq!(message.kind, "FILE");
    assert_eq!(message.message_id.as_deref(), Some("0102030405060708"));
    assert_eq!(message.mime_type.as_deref(), Some("application/pdf"));
    assert!(message.content_quote_v2.is_some());
    assert!(message.read.is_none());
  }

  #[test]
  fn document_without_groups_is_distinguished_from_empty_groups() {
    let doc: SourceDocument = serde_json::from_value(json!({
      "myIdentity": "ECHOECHO",
      "contacts": {},
    }))
    .unwrap();
    assert!(doc.groups.is_none());
    assert!(doc.nickname.is_none());

    let doc: SourceDocument = serde_json::from_value(json!({
      "myIdentity": "ECHOECHO",
      "contacts": {},
      "groups": [],
    }))
    .unwrap();
    assert_eq!(doc.groups.map(|g| g.len()), Some(0));
  }
}
