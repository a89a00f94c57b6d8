use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::types::rule_ref::RuleRef;

/// The scalar type a text token was written as.
///
/// Two tokens with the same display value but different kinds (`"0"` and `0`)
/// are distinct under strict equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
}

/// A plain rule keyword, optionally with arguments (`"max:255"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
    value: String,
    kind: ScalarKind,
}

impl Text {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: ScalarKind::String,
        }
    }

    pub fn integer(value: i64) -> Self {
        Self {
            value: value.to_string(),
            kind: ScalarKind::Integer,
        }
    }

    /// Integers beyond `i64::MAX`, kept exact.
    pub fn unsigned(value: u64) -> Self {
        Self {
            value: value.to_string(),
            kind: ScalarKind::Integer,
        }
    }

    pub fn float(value: f64) -> Self {
        Self {
            value: value.to_string(),
            kind: ScalarKind::Float,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            value: value.to_string(),
            kind: ScalarKind::Boolean,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// Rule name before the first `:` (`"max:255"` → `"max"`).
    pub fn rule_name(&self) -> &str {
        self.value
            .split_once(':')
            .map_or(self.value.as_str(), |(name, _)| name)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Display forms were produced from these exact scalars, so parsing back
        // cannot fail except for non-finite floats, which fall back to strings.
        match self.kind {
            ScalarKind::String => serializer.serialize_str(&self.value),
            ScalarKind::Integer => {
                if let Ok(n) = self.value.parse::<i64>() {
                    serializer.serialize_i64(n)
                } else if let Ok(n) = self.value.parse::<u64>() {
                    serializer.serialize_u64(n)
                } else {
                    serializer.serialize_str(&self.value)
                }
            }
            ScalarKind::Float => match self.value.parse::<f64>() {
                Ok(n) if n.is_finite() => serializer.serialize_f64(n),
                _ => serializer.serialize_str(&self.value),
            },
            ScalarKind::Boolean => serializer.serialize_bool(self.value == "true"),
        }
    }
}

/// An atomic directive in a field's rule sequence.
///
/// `PartialEq` and `Hash` are strict: text tokens match on value and scalar
/// kind, opaque tokens on reference identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Text(Text),
    Opaque(RuleRef),
}

impl Token {
    pub fn text(value: impl Into<String>) -> Self {
        Token::Text(Text::string(value))
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Token::Text(text) => Some(text),
            Token::Opaque(_) => None,
        }
    }

    pub fn as_rule(&self) -> Option<&RuleRef> {
        match self {
            Token::Text(_) => None,
            Token::Opaque(rule) => Some(rule),
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Token::Opaque(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => fmt::Display::fmt(text, f),
            Token::Opaque(rule) => write!(f, "<{}>", rule.name()),
        }
    }
}

impl From<Text> for Token {
    fn from(text: Text) -> Self {
        Token::Text(text)
    }
}

impl From<RuleRef> for Token {
    fn from(rule: RuleRef) -> Self {
        Token::Opaque(rule)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Token::Text(t) if t.kind == ScalarKind::String && t.value == other)
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<i64> for Token {
    fn eq(&self, other: &i64) -> bool {
        *self == Token::Text(Text::integer(*other))
    }
}

impl PartialEq<RuleRef> for Token {
    fn eq(&self, other: &RuleRef) -> bool {
        matches!(self, Token::Opaque(rule) if rule == other)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Token::Text(text) => text.serialize(serializer),
            Token::Opaque(rule) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("custom", rule.name())?;
                map.end()
            }
        }
    }
}

/// How two tokens are compared when deduplicating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equality {
    /// Value and scalar kind must both match.
    #[default]
    Strict,
    /// Only the display value must match, so `0` and `"0"` collide.
    ///
    /// Values are compared as text, not numerically: `"1.0"` and `1.0`
    /// (displayed `1`) stay distinct, as do `"01"` and `1`.
    Loose,
}

/// Hashable view of a token under an [`Equality`] policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TokenKey<'a> {
    Text(&'a str, Option<ScalarKind>),
    Opaque(usize),
}

impl Equality {
    pub(crate) fn key<'a>(&self, token: &'a Token) -> TokenKey<'a> {
        match token {
            Token::Text(text) => {
                let kind = match self {
                    Equality::Strict => Some(text.kind),
                    Equality::Loose => None,
                };
                TokenKey::Text(&text.value, kind)
            }
            Token::Opaque(rule) => TokenKey::Opaque(rule.addr()),
        }
    }

    pub fn matches(&self, a: &Token, b: &Token) -> bool {
        self.key(a) == self.key(b)
    }
}
