//! The normalized document the desktop app loads in screenshot mode.
//!
//! Two output shapes exist, selected by [`Schema`]. They are kept as
//! separate shapes rather than one shape with optional fields: the legacy
//! shape has no profile, no groups, no captions or quotes, and reports a
//! reaction as a single `lastReaction` value.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use serde_json::{Number, Value};

use crate::{
  Error, Localized,
  message::{Direction, MessageType, ReactionKind},
};

// ─── Schema ──────────────────────────────────────────────────────────────────

/// Which output shape to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
  /// Profile, contacts and groups, with reaction lists.
  #[default]
  Full,
  /// Contacts only (groups emitted empty), with a scalar `lastReaction`.
  Legacy,
}

impl Schema {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Full => "full",
      Self::Legacy => "legacy",
    }
  }
}

impl fmt::Display for Schema {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Schema {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "full" => Ok(Self::Full),
      "legacy" => Ok(Self::Legacy),
      other => Err(Error::UnknownSchema(other.to_string())),
    }
  }
}

// ─── Document ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct OutputDocument {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub profile:  Option<Profile>,
  pub contacts: Vec<Contact>,
  pub groups:   Vec<Group>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub identity:        String,
  pub nickname:        String,
  /// Base64 of `me.jpg`.
  pub profile_picture: String,
}

// ─── Contacts ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcquaintanceLevel {
  Direct,
  GroupOrDeleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityType {
  Regular,
  Work,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactName {
  pub first: String,
  pub last:  String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub identity:           String,
  pub public_key:         String,
  pub name:               Localized<ContactName>,
  /// 0-based.
  pub verification_level: i64,
  pub acquaintance_level: AcquaintanceLevel,
  pub identity_type:      IdentityType,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar:             Option<String>,
  pub conversation:       Vec<Message>,
}

// ─── Groups ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
  pub id:                  String,
  pub creator:             String,
  pub name:                Localized<String>,
  pub members:             Vec<String>,
  pub created_minutes_ago: Number,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar:              Option<String>,
  pub conversation:        Vec<Message>,
}

// ─── Messages ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
  pub reaction:        ReactionKind,
  pub sender_identity: String,
}

/// How a reaction is reported, depending on the [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub enum Reactions {
  /// Full schema: `"reactions": [{...}]`.
  List(Vec<Reaction>),
  /// Legacy schema: `"lastReaction": "..."`.
  Last(ReactionKind),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
  pub image_bytes: String,
  pub media_type:  String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption:     Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
  pub file_name:  String,
  pub file_bytes: String,
  pub media_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioContent {
  pub audio_bytes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationContent {
  /// Coordinates are copied through as written, integers included.
  pub lat:         Number,
  pub lon:         Number,
  pub description: String,
}

/// Type-specific message payload.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
  Image(ImageContent),
  File(FileContent),
  Audio(AudioContent),
  Location(LocationContent),
  /// Text, call status and ballot messages; content is passed through as
  /// written in the fixture.
  Generic {
    kind:             MessageType,
    content:          Option<Value>,
    content_quote_v2: Option<Value>,
  },
}

impl MessageBody {
  pub fn message_type(&self) -> MessageType {
    match self {
      Self::Image(_) => MessageType::Image,
      Self::File(_) => MessageType::File,
      Self::Audio(_) => MessageType::Audio,
      Self::Location(_) => MessageType::Location,
      Self::Generic { kind, .. } => *kind,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
  pub minutes_ago: Number,
  pub direction:   Direction,
  pub message_id:  Option<String>,
  /// Sender identity; only set for incoming group messages.
  pub identity:    Option<String>,
  pub reactions:   Option<Reactions>,
  pub body:        MessageBody,
  /// Only set for incoming messages.
  pub is_read:     Option<bool>,
}

impl Serialize for Message {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(None)?;
    map.serialize_entry("minutesAgo", &self.minutes_ago)?;
    map.serialize_entry("type", &self.body.message_type())?;
    map.serialize_entry("direction", &self.direction)?;
    if let Some(message_id) = &self.message_id {
      map.serialize_entry("messageId", message_id)?;
    }
    if let Some(identity) = &self.identity {
      map.serialize_entry("identity", identity)?;
    }
    match &self.reactions {
      Some(Reactions::List(list)) => map.serialize_entry("reactions", list)?,
      Some(Reactions::Last(kind)) => map.serialize_entry("lastReaction", kind)?,
      None => {}
    }
    match &self.body {
      MessageBody::Image(content) => map.serialize_entry("content", content)?,
      MessageBody::File(content) => map.serialize_entry("content", content)?,
      MessageBody::Audio(content) => map.serialize_entry("content", content)?,
      MessageBody::Location(content) => {
        map.serialize_entry("content", content)?
      }
      MessageBody::Generic {
        content,
        content_quote_v2,
        ..
      } => {
        if let Some(content) = content {
          map.serialize_entry("content", content)?;
        }
        if let Some(quote) = content_quote_v2 {
          map.serialize_entry("contentQuoteV2", quote)?;
        }
      }
    }
    if let Some(is_read) = self.is_read {
      map.serialize_entry("isRead", &is_read)?;
    }
    map.end()
  }
}
