pub mod bundle;
pub mod loader;

use indexmap::IndexMap;

use crate::builder::{RuleBuilder, RuleSnapshot};

pub use bundle::RulesetBundle;
pub use loader::LoadError;

/// A named collection of field rules with optional messages and labels.
///
/// Only `rules` is required. `messages` is keyed by `"field.rule"` and
/// `attributes` maps field names to display labels.
pub trait Ruleset {
    fn rules(&self) -> RuleSnapshot;

    fn messages(&self) -> IndexMap<String, String> {
        IndexMap::new()
    }

    fn attributes(&self) -> IndexMap<String, String> {
        IndexMap::new()
    }

    /// Fresh builder for implementors assembling `rules`.
    fn builder(&self) -> RuleBuilder {
        RuleBuilder::new()
    }
}

impl Ruleset for RuleBuilder {
    fn rules(&self) -> RuleSnapshot {
        self.get()
    }

    fn builder(&self) -> RuleBuilder {
        RuleBuilder::with_config(self.config().clone())
    }
}

impl Ruleset for RuleSnapshot {
    fn rules(&self) -> RuleSnapshot {
        self.clone()
    }
}
