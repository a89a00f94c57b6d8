use ruleset_core::{normalize, rules, BuilderConfig, RuleBuilder, RuleRef, RuleSpec, Token, Tokenizer};

fn labels(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn normalized_field(spec: RuleSpec) -> Vec<Token> {
    RuleBuilder::new().set("field", spec).get()["field"].to_vec()
}

#[test]
fn invariant_no_specs_yield_no_tokens() {
    assert!(normalize(rules![]).is_empty());
    assert!(normalize(RuleSpec::Blank).is_empty());
    assert!(normalize(()).is_empty());
}

#[test]
fn pipe_string_splits_in_order() {
    assert_eq!(labels(&normalize("a|b|c")), ["a", "b", "c"]);
    assert_eq!(labels(&normalized_field("required|string|email".into())), ["required", "string", "email"]);
}

#[test]
fn regex_guard_keeps_internal_pipes() {
    let tokens = normalize(r"regex:/^foo\|bar$/");
    assert_eq!(tokens, [r"regex:/^foo\|bar$/"]);

    let inside_array = normalize(rules![[r"regex:/^foo\|bar$/", "string", "min:3"]]);
    assert_eq!(inside_array, [r"regex:/^foo\|bar$/", "string", "min:3"]);
}

#[test]
fn blank_entries_are_skipped() {
    let tokens = normalize(rules!["", (None::<&str>), [], "required||string"]);
    assert_eq!(tokens, ["required", "string"]);
}

#[test]
fn nested_sequences_flatten_depth_first() {
    let tokens = normalize(rules![[["required"], ["string", "max:255"], [["min:3"]]]]);
    assert_eq!(tokens, ["required", "string", "max:255", "min:3"]);

    let mixed = normalize(rules![["nullable", "email"], "required|string"]);
    assert_eq!(mixed, ["nullable", "email", "required", "string"]);

    let wrapped = normalize(rules![["required|string"]]);
    assert_eq!(wrapped, ["required", "string"]);
}

#[test]
fn duplicates_keep_first_occurrence() {
    let tokens = normalize(rules!["required|string", ["string", "required", "max:10"], "required|max:10"]);
    assert_eq!(tokens, ["required", "string", "max:10"]);

    let variadic = normalize(rules!["required|string", ["email", ["max:255"]], "nullable|email", ["string"]]);
    assert_eq!(variadic, ["required", "string", "email", "max:255", "nullable"]);
}

#[test]
fn strict_dedup_distinguishes_scalar_types() {
    let tokens = normalized_field(rules!["0", 0, "in:0,1"]);
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], "0");
    assert_eq!(tokens[1], 0);
    assert_eq!(tokens[2], "in:0,1");

    let reordered = normalized_field(rules!["in:0,1", "0", 0, "required"]);
    assert_eq!(labels(&reordered), ["in:0,1", "0", "0", "required"]);
}

#[test]
fn custom_rules_pass_through_and_dedup_by_identity() {
    let object_rule = RuleRef::from_fn("ok", |_, _| true);
    let tokens = normalize(rules![(object_rule.clone()), "required|string"]);
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], object_rule);
    assert_eq!(tokens[1..], ["required", "string"]);

    let same_twice = normalize(rules![(object_rule.clone()), (object_rule.clone()), "required"]);
    assert_eq!(same_twice.len(), 2);
    assert_eq!(same_twice[0], object_rule);

    let c1 = RuleRef::from_fn("ok", |_, _| true);
    let c2 = RuleRef::from_fn("ok", |_, _| true);
    let distinct = normalize(rules![(c1.clone()), "string", (c2.clone())]);
    assert_eq!(distinct.len(), 3);
    assert_eq!(distinct[0], c1);
    assert_eq!(distinct[2], c2);
}

#[test]
fn variadic_and_single_array_paths_agree() {
    let single = RuleSpec::nested([rules!["required|string", ["email", ["max:255"]], "nullable|email", ["string"]]]);
    let flat = rules!["required|string", ["email", ["max:255"]], "nullable|email", ["string"]];

    assert_eq!(normalize(single), normalize(flat));
}

#[test]
fn normalizing_normalized_output_is_identity() {
    let rule = RuleRef::from_fn("ok", |_, _| true);
    let once = normalize(rules!["required|string", (rule.clone()), 5, "max:10"]);
    let twice = normalize(once.clone());

    assert_eq!(once, twice);
}

#[test]
fn verbatim_prefixes_are_configurable() {
    let config = BuilderConfig::v0().with_verbatim_prefix("not_regex:");
    let tokens = Tokenizer::new(&config).normalize(rules!["not_regex:/a|b/", "regex:/c|d/"]);
    assert_eq!(tokens, ["not_regex:/a|b/", "regex:/c|d/"]);

    let default_split = normalize("not_regex:/a|b/");
    assert_eq!(default_split, ["not_regex:/a", "b/"]);
}
