use serde::{Deserialize, Serialize};

use crate::types::Equality;

pub const DEFAULT_SEPARATOR: char = '|';
pub const REGEX_PREFIX: &str = "regex:";

// Serializable and comparable, with explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    pub separator: char,
    /// Strings starting with any of these are kept as a single token.
    pub verbatim_prefixes: Vec<String>,
    /// Policy used by `add`, `merge` and `prepend` against existing tokens.
    pub merge_equality: Equality,
}

impl BuilderConfig {
    pub fn v0() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            verbatim_prefixes: vec![REGEX_PREFIX.into()],
            merge_equality: Equality::Strict,
        }
    }

    pub fn with_merge_equality(mut self, equality: Equality) -> Self {
        self.merge_equality = equality;
        self
    }

    pub fn with_verbatim_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.verbatim_prefixes.push(prefix.into());
        self
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::v0()
    }
}
