//! Flattening of raw [`RuleSpec`] input into directive tokens.
//!
//! Rules applied depth-first, left to right:
//! - blank values (empty or whitespace-only strings, `Blank`, empty sequences) yield nothing
//! - strings starting with a verbatim prefix (`regex:` by default) become one token, unsplit
//! - other strings split on the separator; pieces are trimmed and empty pieces dropped
//! - sequences flatten recursively
//! - scalars and custom rules become one token each
//!
//! The flattened output is then deduplicated under strict equality, keeping
//! first occurrences.

use crate::builder::BuilderConfig;
use crate::merge::dedup;
use crate::types::{Equality, RuleSpec, Text, Token};

/// Stateless view over the parts of [`BuilderConfig`] that affect splitting.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    separator: char,
    verbatim_prefixes: &'a [String],
}

impl<'a> Tokenizer<'a> {
    pub fn new(config: &'a BuilderConfig) -> Self {
        Self {
            separator: config.separator,
            verbatim_prefixes: &config.verbatim_prefixes,
        }
    }

    /// Flatten and strictly deduplicate one spec.
    pub fn normalize(&self, spec: impl Into<RuleSpec>) -> Vec<Token> {
        let mut out = Vec::new();
        self.flatten_into(spec.into(), &mut out);
        dedup(out, Equality::Strict)
    }

    /// Flatten without deduplicating.
    pub fn flatten(&self, spec: impl Into<RuleSpec>) -> Vec<Token> {
        let mut out = Vec::new();
        self.flatten_into(spec.into(), &mut out);
        out
    }

    fn flatten_into(&self, spec: RuleSpec, out: &mut Vec<Token>) {
        match spec {
            RuleSpec::Blank => {}
            RuleSpec::Text(s) => self.split_into(s, out),
            RuleSpec::Scalar(text) => out.push(Token::Text(text)),
            RuleSpec::Nested(items) => {
                for item in items {
                    self.flatten_into(item, out);
                }
            }
            RuleSpec::Custom(rule) => out.push(Token::Opaque(rule)),
        }
    }

    fn split_into(&self, s: String, out: &mut Vec<Token>) {
        if s.trim().is_empty() {
            return;
        }

        if self.is_verbatim(&s) {
            out.push(Token::Text(Text::string(s)));
            return;
        }

        out.extend(
            s.split(self.separator)
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(Token::text),
        );
    }

    fn is_verbatim(&self, s: &str) -> bool {
        self.verbatim_prefixes
            .iter()
            .any(|prefix| s.starts_with(prefix.as_str()))
    }
}

/// Normalize with the default configuration.
pub fn normalize(spec: impl Into<RuleSpec>) -> Vec<Token> {
    let config = BuilderConfig::v0();
    Tokenizer::new(&config).normalize(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;
    use crate::types::RuleRef;

    fn texts(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn blank_inputs_produce_nothing() {
        assert!(normalize(RuleSpec::Blank).is_empty());
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize(rules![]).is_empty());
        assert!(normalize(rules!["", (None::<&str>), [], [[]]]).is_empty());
    }

    #[test]
    fn splits_and_trims_pipes() {
        assert_eq!(texts(&normalize("a|b|c")), ["a", "b", "c"]);
        assert_eq!(texts(&normalize(" |required || string| ")), ["required", "string"]);
    }

    #[test]
    fn regex_guard_keeps_pattern_whole() {
        let tokens = normalize(r"regex:/^foo\|bar$/");
        assert_eq!(texts(&tokens), [r"regex:/^foo\|bar$/"]);
    }

    #[test]
    fn regex_guard_only_applies_at_start() {
        let tokens = normalize("string|regex:/a|b/");
        assert_eq!(texts(&tokens), ["string", "regex:/a", "b/"]);
    }

    #[test]
    fn extra_verbatim_prefixes_are_honoured() {
        let mut config = BuilderConfig::v0();
        config.verbatim_prefixes.push("not_regex:".into());
        let tokens = Tokenizer::new(&config).normalize("not_regex:/x|y/");
        assert_eq!(texts(&tokens), ["not_regex:/x|y/"]);
    }

    #[test]
    fn custom_separator() {
        let mut config = BuilderConfig::v0();
        config.separator = ';';
        let tokens = Tokenizer::new(&config).normalize("required;max:3|4");
        assert_eq!(texts(&tokens), ["required", "max:3|4"]);
    }

    #[test]
    fn flatten_keeps_duplicates_normalize_drops_them() {
        let tokenizer_config = BuilderConfig::v0();
        let tokenizer = Tokenizer::new(&tokenizer_config);
        assert_eq!(tokenizer.flatten("a|a").len(), 2);
        assert_eq!(tokenizer.normalize("a|a").len(), 1);
    }

    #[test]
    fn scalars_are_never_split_and_stay_distinct() {
        let tokens = normalize(rules!["0", 0, "in:0,1", 0]);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], "0");
        assert_eq!(tokens[1], 0);
        assert_eq!(tokens[2], "in:0,1");
    }

    #[test]
    fn custom_rules_dedup_by_identity() {
        let a = RuleRef::from_fn("a", |_, _| true);
        let b = RuleRef::from_fn("a", |_, _| true);
        let tokens = normalize(rules![(a.clone()), "string", (b.clone()), (a.clone())]);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], a);
        assert_eq!(tokens[2], b);
    }
}
