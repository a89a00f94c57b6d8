use std::ops::Index;

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::{SnapshotVersion, Token};

/// Immutable view of a rule set, handed to the downstream validator.
///
/// Field order is the order keys were first inserted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RuleSnapshot {
    fields: IndexMap<String, Vec<Token>>,
}

impl RuleSnapshot {
    pub(crate) fn new(fields: IndexMap<String, Vec<Token>>) -> Self {
        Self { fields }
    }

    pub fn field(&self, key: &str) -> Option<&[Token]> {
        self.fields.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Token])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Hash of the JSON form. Custom rules contribute only their name.
    pub fn version(&self) -> SnapshotVersion {
        SnapshotVersion::from_content(&self.to_json_bytes())
    }

    pub fn to_json_bytes(&self) -> Vec<u8> {
        // Tokens and string keys always serialize.
        serde_json::to_vec(self).unwrap_or_default()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<Token>> {
        self.fields
    }
}

impl Index<&str> for RuleSnapshot {
    type Output = [Token];

    /// Panics if the field is absent, like map indexing.
    fn index(&self, key: &str) -> &Self::Output {
        &self.fields[key]
    }
}

impl<'a> IntoIterator for &'a RuleSnapshot {
    type Item = (&'a String, &'a Vec<Token>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<Token>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl From<RuleSnapshot> for IndexMap<String, Vec<Token>> {
    fn from(snapshot: RuleSnapshot) -> Self {
        snapshot.fields
    }
}
