use serde_json::Value;

use crate::types::rule_ref::{RawRule, RuleRef};
use crate::types::token::{Text, Token};

/// Raw, unnormalized rule input.
///
/// Strings may hold several `|`-separated directives, sequences may nest to
/// any depth, and custom rules pass through untouched. A `Nested` value
/// normalizes exactly like the same items passed one after another.
#[derive(Debug, Clone, Default)]
pub enum RuleSpec {
    #[default]
    Blank,
    Text(String),
    /// A non-string scalar (integer, float or boolean). Never split.
    Scalar(Text),
    Nested(Vec<RuleSpec>),
    Custom(RuleRef),
}

impl RuleSpec {
    pub fn nested<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RuleSpec>,
    {
        RuleSpec::Nested(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for RuleSpec {
    fn from(value: &str) -> Self {
        RuleSpec::Text(value.to_string())
    }
}

impl From<String> for RuleSpec {
    fn from(value: String) -> Self {
        RuleSpec::Text(value)
    }
}

impl From<&String> for RuleSpec {
    fn from(value: &String) -> Self {
        RuleSpec::Text(value.clone())
    }
}

macro_rules! integer_spec {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RuleSpec {
                fn from(value: $ty) -> Self {
                    RuleSpec::Scalar(Text::integer(i64::from(value)))
                }
            }
        )*
    };
}

integer_spec!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for RuleSpec {
    fn from(value: u64) -> Self {
        RuleSpec::Scalar(Text::unsigned(value))
    }
}

impl From<f64> for RuleSpec {
    fn from(value: f64) -> Self {
        RuleSpec::Scalar(Text::float(value))
    }
}

impl From<bool> for RuleSpec {
    fn from(value: bool) -> Self {
        RuleSpec::Scalar(Text::boolean(value))
    }
}

impl From<RuleRef> for RuleSpec {
    fn from(rule: RuleRef) -> Self {
        RuleSpec::Custom(rule)
    }
}

impl From<&RuleRef> for RuleSpec {
    fn from(rule: &RuleRef) -> Self {
        RuleSpec::Custom(rule.clone())
    }
}

impl From<Token> for RuleSpec {
    fn from(token: Token) -> Self {
        match token {
            Token::Text(text) => RuleSpec::Scalar(text),
            Token::Opaque(rule) => RuleSpec::Custom(rule),
        }
    }
}

impl From<&Token> for RuleSpec {
    fn from(token: &Token) -> Self {
        RuleSpec::from(token.clone())
    }
}

impl From<()> for RuleSpec {
    fn from(_: ()) -> Self {
        RuleSpec::Blank
    }
}

impl<T: Into<RuleSpec>> From<Option<T>> for RuleSpec {
    fn from(value: Option<T>) -> Self {
        value.map_or(RuleSpec::Blank, Into::into)
    }
}

impl<T: Into<RuleSpec>> From<Vec<T>> for RuleSpec {
    fn from(items: Vec<T>) -> Self {
        RuleSpec::nested(items)
    }
}

impl<T: Into<RuleSpec>, const N: usize> From<[T; N]> for RuleSpec {
    fn from(items: [T; N]) -> Self {
        RuleSpec::nested(items)
    }
}

impl<T: Clone + Into<RuleSpec>> From<&[T]> for RuleSpec {
    fn from(items: &[T]) -> Self {
        RuleSpec::nested(items.iter().cloned())
    }
}

impl From<Value> for RuleSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RuleSpec::Blank,
            Value::String(s) => RuleSpec::Text(s),
            Value::Bool(b) => RuleSpec::Scalar(Text::boolean(b)),
            Value::Number(n) => {
                let text = if let Some(i) = n.as_i64() {
                    Text::integer(i)
                } else if let Some(u) = n.as_u64() {
                    Text::unsigned(u)
                } else {
                    Text::float(n.as_f64().unwrap_or(f64::NAN))
                };
                RuleSpec::Scalar(text)
            }
            Value::Array(items) => RuleSpec::nested(items),
            object @ Value::Object(_) => RuleSpec::Custom(RuleRef::new(RawRule(object))),
        }
    }
}

/// Build a heterogeneous [`RuleSpec::Nested`].
///
/// Bracketed groups nest; any other item must be a single token tree, so wrap
/// compound expressions in parentheses.
///
/// ```
/// use ruleset_core::{rules, RuleRef};
///
/// let uppercase = RuleRef::from_fn("must be uppercase", |_, v| {
///     v.as_str().is_some_and(|s| s == s.to_uppercase())
/// });
/// let spec = rules!["required|string", ["max:255", 0], (uppercase.clone())];
/// # let _ = spec;
/// ```
#[macro_export]
macro_rules! rules {
    (@item [ $($inner:tt),* $(,)? ]) => {
        $crate::RuleSpec::Nested(::std::vec![ $( $crate::rules!(@item $inner) ),* ])
    };
    (@item $item:tt) => {
        $crate::RuleSpec::from($item)
    };
    ($($item:tt),* $(,)?) => {
        $crate::RuleSpec::Nested(::std::vec![ $( $crate::rules!(@item $item) ),* ])
    };
}
