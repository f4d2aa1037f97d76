//! Behavioural and property tests for the object-literal serializer.
//!
//! The serializer keeps insertion order, but the properties below are
//! written against structure (which keys are present, how each is quoted,
//! what each value looks like) rather than a fixed field order wherever the
//! input comes from an unordered source.

use forgeui_js::{JsObject, JsValue, RawJs, build_object, is_identifier, js_object, quote_string};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Rewrites `{ key: value, ... }` into JSON by quoting the given bare keys.
fn literal_to_json(literal: &str, keys: &[String]) -> String {
    let mut json = literal.to_string();
    for key in keys {
        json = json.replace(&format!("{{ {key}: "), &format!("{{ \"{key}\": "));
        json = json.replace(&format!(", {key}: "), &format!(", \"{key}\": "));
    }
    json
}

/// Splits the fields of a flat literal, for order-insensitive comparisons.
fn fields(literal: &str) -> Vec<String> {
    let inner = literal
        .strip_prefix("{ ")
        .and_then(|s| s.strip_suffix(" }"))
        .unwrap_or_default();
    let mut fields: Vec<String> = inner.split(", ").map(str::to_string).collect();
    fields.sort();
    fields
}

// ─────────────────────────────────────────────────────────────────────
// Contract examples
// ─────────────────────────────────────────────────────────────────────

#[test]
fn open_false_is_unquoted_key_and_bare_token() {
    let literal = js_object! { "open" => false }.to_js();
    assert_eq!(literal, "{ open: false }");
}

#[test]
fn hyphenated_key_is_quoted_identifier_is_not() {
    let literal = js_object! { "data-x" => 1, "count" => 2 }.to_js();
    assert_eq!(fields(&literal), ["'data-x': 1", "count: 2"]);
}

#[test]
fn raw_code_is_embedded_verbatim() {
    let code = "function() { return this.items.filter(i => i.name !== 'x') }";
    let literal = js_object! { "visible" => RawJs::new(code) }.to_js();
    assert_eq!(literal, format!("{{ visible: {code} }}"));
}

#[test]
fn empty_mapping_is_empty_braces() {
    assert_eq!(JsObject::new().to_js(), "{}");
    assert_eq!(build_object(&js_object! {}, ""), "{}");
}

#[test]
fn methods_trail_the_state_fields() {
    let state = js_object! { "open" => false, "count" => 0 };
    let literal = build_object(
        &state,
        "\n    toggle() {\n        this.open = !this.open;\n    },\n    inc() { this.count++ }\n",
    );
    assert_eq!(
        literal,
        "{ open: false, count: 0, toggle() { this.open = !this.open; }, inc() { this.count++ } }"
    );
}

#[test]
fn null_and_nested_values() {
    let state = js_object! {
        "selected" => JsValue::Null,
        "filters" => js_object! { "q" => "", "page" => 1 },
        "tags" => vec!["a", "b"],
    };
    assert_eq!(
        state.to_js(),
        "{ selected: null, filters: { q: '', page: 1 }, tags: ['a', 'b'] }"
    );
}

#[test]
fn serde_json_input_round_trips_structure() {
    let value = serde_json::json!({ "open": true, "user": { "id": 7, "email": null } });
    let literal = JsValue::from(value).to_js();
    assert_eq!(literal, "{ open: true, user: { id: 7, email: null } }");
}

// ─────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────

fn arb_primitive() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i32>().prop_map(serde_json::Value::from),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Primitive-only objects with identifier keys become valid JSON once
    /// their bare keys are quoted, and that JSON matches the input.
    #[test]
    fn prop_primitive_objects_are_json_like(
        entries in prop::collection::btree_map("[a-z_][a-z0-9_]{0,6}", arb_primitive(), 0..8)
    ) {
        let object: JsObject = entries
            .iter()
            .map(|(k, v)| (k.clone(), JsValue::from(v.clone())))
            .collect();
        let keys: Vec<String> = entries.keys().cloned().collect();
        let json = literal_to_json(&object.to_js(), &keys);

        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let expected = serde_json::Value::Object(entries.into_iter().collect());
        prop_assert_eq!(parsed, expected);
    }

    /// Keys are bare exactly when they are identifiers.
    #[test]
    fn prop_key_quoting_matches_identifier_rule(key in "[a-zA-Z0-9_$ -]{1,10}") {
        let literal = JsObject::new().with(key.clone(), 1).to_js();
        if is_identifier(&key) {
            prop_assert_eq!(literal, format!("{{ {key}: 1 }}"));
        } else {
            prop_assert_eq!(literal, format!("{{ {}: 1 }}", quote_string(&key)));
        }
    }

    /// Quoted strings never contain an unescaped quote or a raw newline.
    #[test]
    fn prop_strings_are_single_line_and_closed(s in any::<String>()) {
        let quoted = quote_string(&s);
        prop_assert!(quoted.starts_with('\'') && quoted.ends_with('\''));
        prop_assert!(!quoted.contains('\n'));
        let body = &quoted[1..quoted.len() - 1];
        let mut escaped = false;
        for c in body.chars() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else {
                prop_assert_ne!(c, '\'');
            }
        }
        prop_assert!(!escaped);
    }

    /// Raw code passes through untouched whatever it contains.
    #[test]
    fn prop_raw_is_verbatim(code in "[ -~]{0,40}") {
        let literal = JsObject::new().with("f", RawJs::new(code.clone())).to_js();
        prop_assert_eq!(literal, format!("{{ f: {code} }}"));
    }

    /// Method text never introduces line breaks or tab characters.
    #[test]
    fn prop_methods_are_whitespace_collapsed(
        methods in "[a-z(){};=\\n\\t ]{0,40}",
        count in any::<u8>(),
    ) {
        let literal = build_object(&JsObject::new().with("count", count), &methods);
        prop_assert!(!literal.contains('\n'));
        prop_assert!(!literal.contains('\t'));
        prop_assert!(!literal.contains("  "));
        let head = format!("{{ count: {count}");
        prop_assert!(literal.starts_with(&head));
    }
}

#[test]
fn btree_input_order_does_not_change_fields() {
    let mut a = BTreeMap::new();
    a.insert("b", 2);
    a.insert("a", 1);
    let from_map: JsObject = a.into_iter().collect();
    let reversed = js_object! { "b" => 2, "a" => 1 };
    assert_eq!(fields(&from_map.to_js()), fields(&reversed.to_js()));
}
