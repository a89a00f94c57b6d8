use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde_json::Value;

/// A user-defined rule the downstream validator invokes as a predicate.
///
/// The builder never calls these methods. It only stores and orders
/// references to implementors.
pub trait CustomRule: Send + Sync {
    fn passes(&self, attribute: &str, value: &Value) -> bool;

    fn message(&self) -> String;

    /// Label used in debug output and serialized snapshots.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a [`CustomRule`].
///
/// Equality and hashing use the address of the shared allocation, so clones
/// of one handle are equal while two structurally identical rules are not.
#[derive(Clone)]
pub struct RuleRef(Arc<dyn CustomRule>);

impl RuleRef {
    pub fn new<R: CustomRule + 'static>(rule: R) -> Self {
        RuleRef(Arc::new(rule))
    }

    /// Wrap a closure. Every call creates a new identity.
    pub fn from_fn<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str, &Value) -> bool + Send + Sync + 'static,
    {
        RuleRef::new(FnRule {
            message: message.into(),
            predicate,
        })
    }

    pub fn rule(&self) -> &dyn CustomRule {
        self.0.as_ref()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl PartialEq for RuleRef {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for RuleRef {}

impl Hash for RuleRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for RuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RuleRef")
            .field(&self.name())
            .field(&format_args!("{:#x}", self.addr()))
            .finish()
    }
}

impl<R: CustomRule + 'static> From<Arc<R>> for RuleRef {
    fn from(rule: Arc<R>) -> Self {
        RuleRef(rule)
    }
}

struct FnRule<F> {
    message: String,
    predicate: F,
}

impl<F> CustomRule for FnRule<F>
where
    F: Fn(&str, &Value) -> bool + Send + Sync,
{
    fn passes(&self, attribute: &str, value: &Value) -> bool {
        (self.predicate)(attribute, value)
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn name(&self) -> &str {
        "closure"
    }
}

/// A JSON object found where a rule was expected.
///
/// Kept as an opaque rule so seed documents never fail to load. It never
/// passes; the downstream validator is expected to reject it or resolve it.
#[derive(Debug)]
pub(crate) struct RawRule(pub(crate) Value);

impl CustomRule for RawRule {
    fn passes(&self, _attribute: &str, _value: &Value) -> bool {
        false
    }

    fn message(&self) -> String {
        format!("Unresolved rule object: {}", self.0)
    }

    fn name(&self) -> &str {
        "raw"
    }
}
