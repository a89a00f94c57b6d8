//! Deterministic normalization and composition of field validation rule sets.
//!
//! `ruleset-core` turns heterogeneous rule input (pipe-delimited strings,
//! nested sequences, scalars, custom rule objects) into ordered, duplicate-free
//! token sequences per field, and offers a fluent builder to set, add, merge,
//! prepend and remove rules. It never evaluates rules; the resulting snapshot
//! is handed to an external validator.

pub mod builder;
pub mod merge;
pub mod normalize;
pub mod ruleset;
pub mod types;

pub use builder::{BuilderConfig, KeyList, RuleBuilder, RuleSnapshot};
pub use normalize::{normalize, Tokenizer};
pub use ruleset::{LoadError, Ruleset, RulesetBundle};
pub use types::{CustomRule, Equality, RuleRef, RuleSpec, ScalarKind, SnapshotVersion, Text, Token};
