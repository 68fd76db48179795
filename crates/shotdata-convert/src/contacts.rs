//! Contact conversion.

use shotdata_core::{
  OrderedMap,
  identity::validate_public_key,
  output::{AcquaintanceLevel, Contact, ContactName, IdentityType},
  source::SourceContact,
};

use crate::{
  Context,
  error::Result,
  media,
  messages::{Conversation, convert_messages},
};

/// Convert all contacts in document order.
pub fn convert_contacts(
  ctx: &Context<'_>,
  contacts: &OrderedMap<SourceContact>,
) -> Result<Vec<Contact>> {
  contacts
    .iter()
    .map(|(identity, contact)| convert_contact(ctx, identity, contact))
    .collect()
}

fn convert_contact(
  ctx: &Context<'_>,
  identity: &str,
  source: &SourceContact,
) -> Result<Contact> {
  validate_public_key(identity, &source.pk)?;

  let avatar = source
    .avatar
    .as_ref()
    .map(|avatar| media::inline(ctx.data_dir, avatar.default_value()))
    .transpose()?;

  let conversation = convert_messages(
    ctx,
    Conversation::Contact { identity },
    &source.conversation,
  )?;

  tracing::debug!(identity, messages = conversation.len(), "converted contact");

  Ok(Contact {
    identity: identity.to_string(),
    public_key: source.pk.clone(),
    name: source.name.map(|(first, last)| ContactName {
      first: first.clone(),
      last:  last.clone(),
    }),
    // Fixtures count levels from 1, the desktop app from 0.
    verification_level: source.verification - 1,
    acquaintance_level: if source.hidden {
      AcquaintanceLevel::GroupOrDeleted
    } else {
      AcquaintanceLevel::Direct
    },
    identity_type: if source.is_work {
      IdentityType::Work
    } else {
      IdentityType::Regular
    },
    avatar,
    conversation,
  })
}
