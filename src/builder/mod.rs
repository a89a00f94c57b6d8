//! Fluent, order-preserving rule set assembly.
//!
//! ```
//! use ruleset_core::RuleBuilder;
//!
//! let rules = RuleBuilder::new()
//!     .set("email", "required|string|email")
//!     .add("email", "max:255")
//!     .prepend("email", "nullable")
//!     .get();
//!
//! assert_eq!(rules["email"], ["nullable", "required", "string", "email", "max:255"]);
//! ```

pub mod config;
pub mod keys;
pub mod snapshot;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::merge;
use crate::normalize::Tokenizer;
use crate::types::{RuleSpec, Token};

pub use config::BuilderConfig;
pub use keys::KeyList;
pub use snapshot::RuleSnapshot;

/// Owned rule set plus the config used to normalize input into it.
///
/// Single-owner and unsynchronized. No operation fails.
#[derive(Debug, Clone, Default)]
pub struct RuleBuilder {
    rules: IndexMap<String, Vec<Token>>,
    config: BuilderConfig,
}

impl RuleBuilder {
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::v0())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            rules: IndexMap::new(),
            config,
        }
    }

    /// Seed from an initial mapping, normalizing each value.
    pub fn from_rules<I, K, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<RuleSpec>,
    {
        let mut builder = Self::new();
        builder.seed(rules);
        builder
    }

    pub(crate) fn seed<I, K, S>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<RuleSpec>,
    {
        for (key, spec) in rules {
            self.set(key, spec);
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Flatten and strictly deduplicate a spec using this builder's config.
    pub fn normalize(&self, spec: impl Into<RuleSpec>) -> Vec<Token> {
        Tokenizer::new(&self.config).normalize(spec)
    }

    pub fn clear(&mut self) -> &mut Self {
        debug!("clearing {} fields", self.rules.len());
        self.rules.clear();
        self
    }

    /// Replace the field's sequence.
    pub fn set(&mut self, key: impl Into<String>, spec: impl Into<RuleSpec>) -> &mut Self {
        let key = key.into();
        let tokens = self.normalize(spec);
        trace!("set {key}: {} tokens", tokens.len());
        self.rules.insert(key, tokens);
        self
    }

    /// Union into the field's sequence, appending new tokens.
    pub fn add(&mut self, key: impl Into<String>, spec: impl Into<RuleSpec>) -> &mut Self {
        let key = key.into();
        let incoming = self.normalize(spec);
        let equality = self.config.merge_equality;

        let entry = self.rules.entry(key).or_default();
        let before = entry.len();
        *entry = merge::union(std::mem::take(entry), incoming, equality);
        trace!("add: {before} -> {} tokens", entry.len());
        self
    }

    /// `add` for every entry of `rules`, in iteration order.
    pub fn merge<I, K, S>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<RuleSpec>,
    {
        for (key, spec) in rules {
            self.add(key, spec);
        }
        self
    }

    /// Drop the named fields. Absent keys are ignored.
    pub fn remove(&mut self, keys: impl Into<KeyList>) -> &mut Self {
        let keys = keys.into();
        for key in keys.iter() {
            if self.rules.shift_remove(key).is_some() {
                debug!("removed field {key}");
            }
        }
        self
    }

    /// Put the normalized tokens at the front of the field, removing matching
    /// tokens from the rest of the sequence.
    pub fn prepend(&mut self, key: impl Into<String>, spec: impl Into<RuleSpec>) -> &mut Self {
        let key = key.into();
        let incoming = self.normalize(spec);
        let equality = self.config.merge_equality;

        let entry = self.rules.entry(key).or_default();
        *entry = merge::prepend(std::mem::take(entry), incoming, equality);
        trace!("prepend: {} tokens", entry.len());
        self
    }

    /// `prepend` on every field except those listed.
    pub fn prepend_all(&mut self, spec: impl Into<RuleSpec>, except: impl Into<KeyList>) -> &mut Self {
        let except = except.into();
        let incoming = self.normalize(spec);
        let equality = self.config.merge_equality;

        for (key, tokens) in self.rules.iter_mut() {
            if except.contains(key) {
                trace!("prepend_all: skipping {key}");
                continue;
            }
            *tokens = merge::prepend(std::mem::take(tokens), incoming.clone(), equality);
        }
        self
    }

    /// Run `callback` against the builder only when `condition` holds.
    pub fn when<F>(&mut self, condition: bool, callback: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        if condition {
            callback(self);
        }
        self
    }

    pub fn get(&self) -> RuleSnapshot {
        RuleSnapshot::new(self.rules.clone())
    }

    pub fn collect(&self) -> IndexMap<String, Vec<Token>> {
        self.rules.clone()
    }

    pub fn field(&self, key: &str) -> Option<&[Token]> {
        self.rules.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn into_snapshot(self) -> RuleSnapshot {
        RuleSnapshot::new(self.rules)
    }
}
