use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::builder::RuleSnapshot;
use crate::ruleset::Ruleset;
use crate::types::{SnapshotVersion, Token};

/// Everything the downstream validator needs from a [`Ruleset`].
///
/// Serializes as `rules`, `messages`, `attributes`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulesetBundle {
    pub rules: RuleSnapshot,
    pub messages: IndexMap<String, String>,
    pub attributes: IndexMap<String, String>,
}

impl RulesetBundle {
    pub fn from_ruleset<R: Ruleset + ?Sized>(ruleset: &R) -> Self {
        let bundle = Self {
            rules: ruleset.rules(),
            messages: ruleset.messages(),
            attributes: ruleset.attributes(),
        };
        debug!(
            "bundled {} fields, {} messages, {} attributes",
            bundle.rules.len(),
            bundle.messages.len(),
            bundle.attributes.len()
        );
        bundle
    }

    /// Custom message for a field's rule, looked up as `"field.rule"`.
    pub fn message_for(&self, field: &str, rule: &str) -> Option<&str> {
        self.messages
            .get(format!("{field}.{rule}").as_str())
            .map(String::as_str)
    }

    /// Display label for a field, falling back to the field name.
    pub fn label_for<'a>(&'a self, field: &'a str) -> &'a str {
        self.attributes.get(field).map_or(field, String::as_str)
    }

    /// Message keys that no text rule in `rules` would use.
    ///
    /// `"field.rule"` keys need that rule on that field; bare `"rule"` keys
    /// apply to every field and need the rule somewhere.
    pub fn orphaned_messages(&self) -> Vec<&str> {
        self.messages
            .keys()
            .filter(|key| !self.message_targets_rule(key))
            .map(String::as_str)
            .collect()
    }

    fn message_targets_rule(&self, key: &str) -> bool {
        let has_rule = |tokens: &[Token], rule: &str| {
            tokens
                .iter()
                .filter_map(Token::as_text)
                .any(|text| text.rule_name() == rule)
        };

        match key.rsplit_once('.') {
            Some((field, rule)) => self
                .rules
                .field(field)
                .is_some_and(|tokens| has_rule(tokens, rule)),
            None => self.rules.iter().any(|(_, tokens)| has_rule(tokens, key)),
        }
    }

    pub fn version(&self) -> SnapshotVersion {
        // String maps and tokens always serialize.
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        SnapshotVersion::from_content(&bytes)
    }
}
