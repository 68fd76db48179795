//! Message enums shared by the source and output documents.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{Error, Result};

// ─── Type tag ────────────────────────────────────────────────────────────────

/// The closed set of message kinds the desktop screenshot mode can render.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
  Text,
  Image,
  File,
  Audio,
  Location,
  VoipStatus,
  Ballot,
}

impl MessageType {
  /// Parse a fixture `type` tag, rejecting anything outside the closed set.
  pub fn parse(tag: &str) -> Result<Self> {
    tag
      .parse()
      .map_err(|_| Error::UnsupportedMessageType(tag.to_string()))
  }
}

// ─── Direction ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
  Incoming,
  Outgoing,
}

impl Direction {
  /// Map the fixture `out` flag.
  pub fn from_outgoing(out: bool) -> Self {
    if out { Self::Outgoing } else { Self::Incoming }
  }
}

// ─── Reactions ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionKind {
  Acknowledge,
  Decline,
}

impl ReactionKind {
  /// Fixture delivery state for a user acknowledgement.
  pub const USER_ACK: &'static str = "USERACK";
  /// Fixture delivery state for a user decline.
  pub const USER_DEC: &'static str = "USERDEC";

  /// Map a fixture delivery `state`. Only user reactions are supported.
  pub fn from_state(state: &str) -> Result<Self> {
    match state {
      Self::USER_ACK => Ok(Self::Acknowledge),
      Self::USER_DEC => Ok(Self::Decline),
      other => Err(Error::UnsupportedState(other.to_string())),
    }
  }
}
