use indexmap::IndexMap;
use ruleset_core::{RuleBuilder, RuleRef, RuleSnapshot, Ruleset, RulesetBundle};

struct SignupRuleset;

impl Ruleset for SignupRuleset {
    fn rules(&self) -> RuleSnapshot {
        self.builder()
            .set("email", "required|email")
            .set("name", "required|string|min:3")
            .prepend_all("bail", ())
            .get()
    }

    fn messages(&self) -> IndexMap<String, String> {
        IndexMap::from([
            ("email.required".to_string(), ":attribute is mandatory".to_string()),
            ("min".to_string(), "Too short".to_string()),
            ("email.unique".to_string(), "Taken".to_string()),
        ])
    }

    fn attributes(&self) -> IndexMap<String, String> {
        IndexMap::from([("email".to_string(), "User Email".to_string())])
    }
}

struct BareRuleset;

impl Ruleset for BareRuleset {
    fn rules(&self) -> RuleSnapshot {
        RuleBuilder::from_rules([("x", "required|integer")]).get()
    }
}

#[test]
fn bundle_carries_rules_messages_and_attributes() {
    let bundle = RulesetBundle::from_ruleset(&SignupRuleset);

    assert_eq!(bundle.rules["email"], ["bail", "required", "email"]);
    assert_eq!(bundle.rules["name"], ["bail", "required", "string", "min:3"]);
    assert_eq!(bundle.message_for("email", "required"), Some(":attribute is mandatory"));
    assert_eq!(bundle.message_for("name", "required"), None);
    assert_eq!(bundle.label_for("email"), "User Email");
    assert_eq!(bundle.label_for("name"), "name");
}

#[test]
fn default_messages_and_attributes_are_empty() {
    let bundle = RulesetBundle::from_ruleset(&BareRuleset);

    assert!(bundle.messages.is_empty());
    assert!(bundle.attributes.is_empty());
    assert_eq!(bundle.rules["x"], ["required", "integer"]);
}

#[test]
fn orphaned_messages_are_reported() {
    let bundle = RulesetBundle::from_ruleset(&SignupRuleset);

    assert_eq!(bundle.orphaned_messages(), ["email.unique"]);
}

#[test]
fn builder_and_snapshot_are_rulesets() {
    let mut builder = RuleBuilder::new();
    builder.set("title", "required|string");

    let from_builder = RulesetBundle::from_ruleset(&builder);
    let from_snapshot = RulesetBundle::from_ruleset(&builder.get());

    assert_eq!(from_builder, from_snapshot);
    assert!(builder.builder().is_empty());
}

#[test]
fn trait_objects_can_be_bundled() {
    let rulesets: Vec<Box<dyn Ruleset>> = vec![Box::new(SignupRuleset), Box::new(BareRuleset)];
    let bundles: Vec<RulesetBundle> = rulesets.iter().map(|r| RulesetBundle::from_ruleset(r.as_ref())).collect();

    assert_eq!(bundles.len(), 2);
    assert_eq!(bundles[1].rules.len(), 1);
}

#[test]
fn custom_rules_survive_bundling_by_identity() {
    let rule = RuleRef::from_fn("must be foo", |_, v| v == "foo");
    let mut builder = RuleBuilder::new();
    builder.set("x", ruleset_core::rules!["required", (rule.clone())]);

    let bundle = RulesetBundle::from_ruleset(&builder);
    let stored = bundle.rules["x"][1].as_rule().expect("custom rule kept");

    assert_eq!(stored, &rule);
    assert!(stored.rule().passes("x", &serde_json::json!("foo")));
    assert_eq!(stored.rule().message(), "must be foo");
}
