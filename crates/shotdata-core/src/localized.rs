//! Ordered string-keyed maps and language-keyed values.
//!
//! Fixture documents are written by hand, so the order of contacts and of
//! translations is meaningful to whoever reads the output. [`OrderedMap`]
//! keeps entries in document order through a serde round trip.

use std::{fmt, marker::PhantomData};

use serde::{
  Deserialize, Deserializer, Serialize, Serializer,
  de::{self, MapAccess, Visitor},
  ser::SerializeMap,
};

// ─── OrderedMap ──────────────────────────────────────────────────────────────

/// A string-keyed map that iterates in insertion order.
///
/// Inserting an existing key replaces its value in place, matching how a
/// JSON object with duplicate keys is usually read (last value wins).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
  entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
  pub fn new() -> Self {
    Self {
      entries: Vec::new(),
    }
  }

  pub fn insert(&mut self, key: impl Into<String>, value: V) {
    let key = key.into();
    match self.entries.iter_mut().find(|(k, _)| *k == key) {
      Some((_, slot)) => *slot = value,
      None => self.entries.push((key, value)),
    }
  }

  fn remove(&mut self, key: &str) -> Option<V> {
    let index = self.entries.iter().position(|(k, _)| k == key)?;
    Some(self.entries.remove(index).1)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }

  /// Apply `f` to every value, keeping keys and order.
  pub fn map<U>(&self, mut f: impl FnMut(&V) -> U) -> OrderedMap<U> {
    OrderedMap {
      entries: self
        .entries
        .iter()
        .map(|(k, v)| (k.clone(), f(v)))
        .collect(),
    }
  }
}

impl<V> Default for OrderedMap<V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for (k, v) in &self.entries {
      map.serialize_entry(k, v)?;
    }
    map.end()
  }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
  type Value = OrderedMap<V>;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a JSON object")
  }

  fn visit_map<A: MapAccess<'de>>(
    self,
    mut access: A,
  ) -> Result<Self::Value, A::Error> {
    let mut map = OrderedMap::new();
    while let Some((k, v)) = access.next_entry::<String, V>()? {
      map.insert(k, v);
    }
    Ok(map)
  }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
  }
}

// ─── Localized ───────────────────────────────────────────────────────────────

/// Language key every [`Localized`] value must carry.
pub const DEFAULT_LANGUAGE: &str = "default";

/// A value with per-language variants, e.g. `{"default": "Work", "de": "Arbeit"}`.
///
/// The `default` entry is required and always serialized first; other
/// languages follow in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Localized<T> {
  default: T,
  others:  OrderedMap<T>,
}

impl<T> Localized<T> {
  /// The value for the default language.
  pub fn default_value(&self) -> &T {
    &self.default
  }

  pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Localized<U> {
    Localized {
      default: f(&self.default),
      others:  self.others.map(f),
    }
  }
}

impl<T: Serialize> Serialize for Localized<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.others.len() + 1))?;
    map.serialize_entry(DEFAULT_LANGUAGE, &self.default)?;
    for (language, value) in self.others.iter() {
      map.serialize_entry(language, value)?;
    }
    map.end()
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Localized<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let mut others = OrderedMap::<T>::deserialize(deserializer)?;
    let default = others
      .remove(DEFAULT_LANGUAGE)
      .ok_or_else(|| de::Error::missing_field(DEFAULT_LANGUAGE))?;
    Ok(Self { default, others })
  }
}
