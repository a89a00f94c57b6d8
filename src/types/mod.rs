pub mod identifiers;
pub mod rule_ref;
pub mod spec;
pub mod token;

pub use identifiers::SnapshotVersion;
pub use rule_ref::{CustomRule, RuleRef};
pub use spec::RuleSpec;
pub use token::{Equality, ScalarKind, Text, Token};
