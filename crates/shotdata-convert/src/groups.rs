//! Group conversion and membership validation.

use std::collections::HashSet;

use shotdata_core::{
  identity::{is_self, resolve_self},
  output::{Contact, Group, Schema},
  source::{SourceGroup, minutes_ago},
};

use crate::{
  Context, DATA_FILE,
  error::{Error, Result},
  media,
  messages::{Conversation, convert_messages},
};

/// Convert all groups, checking their members against `contacts`.
///
/// The legacy schema has no group support; every group is skipped and
/// `groups` may be absent. The full schema requires it.
pub fn convert_groups(
  ctx: &Context<'_>,
  groups: Option<&[SourceGroup]>,
  contacts: &[Contact],
) -> Result<Vec<Group>> {
  if ctx.schema == Schema::Legacy {
    tracing::debug!(
      skipped = groups.map_or(0, <[_]>::len),
      "legacy schema has no groups"
    );
    return Ok(Vec::new());
  }
  let groups = groups.ok_or_else(|| Error::MissingField {
    scope: DATA_FILE.to_string(),
    field: "groups",
  })?;

  let known: HashSet<&str> =
    contacts.iter().map(|c| c.identity.as_str()).collect();

  groups
    .iter()
    .map(|group| convert_group(ctx, group, &known))
    .collect()
}

/// Every member and the creator must be a known contact or the owner.
fn validate_membership(
  ctx: &Context<'_>,
  group: &SourceGroup,
  known: &HashSet<&str>,
) -> Result<()> {
  let is_known =
    |identity: &str| known.contains(identity) || is_self(identity, ctx.own_identity);

  if let Some(member) = group.members.iter().find(|m| !is_known(m.as_str())) {
    return Err(Error::UnknownMember {
      group:  group.name.default_value().clone(),
      member: member.clone(),
    });
  }
  if !is_known(group.creator.as_str()) {
    return Err(Error::UnknownCreator {
      group:   group.name.default_value().clone(),
      creator: group.creator.clone(),
    });
  }
  Ok(())
}

fn convert_group(
  ctx: &Context<'_>,
  source: &SourceGroup,
  known: &HashSet<&str>,
) -> Result<Group> {
  validate_membership(ctx, source, known)?;

  let avatar = source
    .avatar
    .as_ref()
    .map(|avatar| media::inline(ctx.data_dir, avatar.default_value()))
    .transpose()?;

  let conversation = convert_messages(
    ctx,
    Conversation::Group {
      name: source.name.default_value(),
    },
    &source.conversation,
  )?;

  tracing::debug!(
    id = %source.id,
    members = source.members.len(),
    messages = conversation.len(),
    "converted group"
  );

  Ok(Group {
    id: source.id.clone(),
    creator: resolve_self(&source.creator, ctx.own_identity).to_string(),
    name: source.name.clone(),
    members: source
      .members
      .iter()
      .map(|member| resolve_self(member, ctx.own_identity).to_string())
      .collect(),
    created_minutes_ago: minutes_ago(&source.created_at),
    avatar,
    conversation,
  })
}
