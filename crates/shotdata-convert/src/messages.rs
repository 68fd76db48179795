//! Conversation message conversion.
//!
//! Each fixture message is turned into a typed [`Message`]: the `type` tag is
//! parsed into the closed [`MessageType`] set and dispatched to exactly one
//! [`MessageBody`] variant.

use std::fmt;

use serde::Deserialize;
use serde_json::{Number, Value};
use shotdata_core::{
  Localized,
  message::{Direction, MessageType, ReactionKind},
  output::{
    AudioContent, FileContent, ImageContent, LocationContent, Message,
    MessageBody, Reaction, Reactions, Schema,
  },
  source::{SourceMessage, minutes_ago},
};

use crate::{
  Context,
  error::{Error, Result},
  media,
};

/// The conversation a message belongs to.
#[derive(Debug, Clone, Copy)]
pub enum Conversation<'a> {
  Contact { identity: &'a str },
  Group { name: &'a str },
}

impl Conversation<'_> {
  /// Who is credited with a reaction to a message in this conversation.
  fn reaction_sender<'a>(&'a self, own_identity: &'a str) -> &'a str {
    match self {
      Self::Contact { identity } => *identity,
      Self::Group { .. } => own_identity,
    }
  }
}

impl fmt::Display for Conversation<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Contact { identity } => write!(f, "contact {identity}"),
      Self::Group { name } => write!(f, "group {name:?}"),
    }
  }
}

/// `[lat, lon, <unused>, description]` as written for LOCATION messages.
type LocationTuple = (Number, Number, Value, String);

/// Convert every message of one conversation, keeping their order.
pub fn convert_messages(
  ctx: &Context<'_>,
  conversation: Conversation<'_>,
  messages: &[SourceMessage],
) -> Result<Vec<Message>> {
  messages
    .iter()
    .enumerate()
    .map(|(index, message)| {
      let scope = format!("{conversation} message #{index}");
      convert_message(ctx, conversation, &scope, message)
    })
    .collect()
}

fn convert_message(
  ctx: &Context<'_>,
  conversation: Conversation<'_>,
  scope: &str,
  source: &SourceMessage,
) -> Result<Message> {
  let message_type = MessageType::parse(&source.kind)?;
  let direction = Direction::from_outgoing(source.out);

  let identity = match (conversation, direction) {
    (Conversation::Group { .. }, Direction::Incoming) => {
      Some(source.identity.clone().ok_or_else(|| Error::MissingField {
        scope: scope.to_string(),
        field: "identity",
      })?)
    }
    _ => None,
  };

  let reactions = match source.state.as_deref() {
    Some(state) => {
      let kind = ReactionKind::from_state(state)?;
      Some(match ctx.schema {
        Schema::Full => Reactions::List(vec![Reaction {
          reaction:        kind,
          sender_identity: conversation
            .reaction_sender(ctx.own_identity)
            .to_string(),
        }]),
        Schema::Legacy => Reactions::Last(kind),
      })
    }
    None => None,
  };

  let body = convert_body(ctx, scope, message_type, source)?;

  let is_read = match direction {
    Direction::Incoming => Some(source.read.unwrap_or(true)),
    Direction::Outgoing => None,
  };

  Ok(Message {
    minutes_ago: minutes_ago(&source.date),
    direction,
    message_id: source.message_id.clone(),
    identity,
    reactions,
    body,
    is_read,
  })
}

fn convert_body(
  ctx: &Context<'_>,
  scope: &str,
  kind: MessageType,
  source: &SourceMessage,
) -> Result<MessageBody> {
  let full = ctx.schema == Schema::Full;

  let body = match kind {
    MessageType::Image => {
      let reference = media_reference(scope, kind, source)?;
      if !media::is_jpeg(&reference) {
        return Err(Error::NotJpeg {
          scope: scope.to_string(),
          reference,
        });
      }
      MessageBody::Image(ImageContent {
        image_bytes: media::inline(ctx.data_dir, &reference)?,
        media_type:  media::JPEG_MEDIA_TYPE.to_string(),
        caption:     source.caption.clone().filter(|_| full),
      })
    }
    MessageType::File => {
      let reference = media_reference(scope, kind, source)?;
      let file_bytes = media::inline(ctx.data_dir, &reference)?;
      let media_type =
        source.mime_type.clone().ok_or_else(|| Error::MissingField {
          scope: scope.to_string(),
          field: "mime-type",
        })?;
      MessageBody::File(FileContent {
        file_name: reference,
        file_bytes,
        media_type,
      })
    }
    MessageType::Audio => {
      let reference = media_reference(scope, kind, source)?;
      MessageBody::Audio(AudioContent {
        audio_bytes: media::inline(ctx.data_dir, &reference)?,
      })
    }
    MessageType::Location => {
      let content = required_content(scope, source)?;
      let location = Localized::<LocationTuple>::deserialize(content)
        .map_err(|source| Error::InvalidContent {
          scope: scope.to_string(),
          kind,
          source,
        })?;
      let (lat, lon, _, description) = location.default_value().clone();
      MessageBody::Location(LocationContent {
        lat,
        lon,
        description,
      })
    }
    MessageType::Text | MessageType::VoipStatus | MessageType::Ballot => {
      let content = source.content.clone();
      let content_quote_v2 = source
        .content_quote_v2
        .clone()
        .filter(|_| full && content.is_some());
      MessageBody::Generic {
        kind,
        content,
        content_quote_v2,
      }
    }
  };

  Ok(body)
}

fn required_content<'a>(
  scope: &str,
  source: &'a SourceMessage,
) -> Result<&'a Value> {
  source.content.as_ref().ok_or_else(|| Error::MissingField {
    scope: scope.to_string(),
    field: "content",
  })
}

/// The default-language file reference of a media message.
fn media_reference(
  scope: &str,
  kind: MessageType,
  source: &SourceMessage,
) -> Result<String> {
  let content = required_content(scope, source)?;
  let reference = Localized::<String>::deserialize(content).map_err(|source| {
    Error::InvalidContent {
      scope: scope.to_string(),
      kind,
      source,
    }
  })?;
  Ok(reference.default_value().clone())
}
