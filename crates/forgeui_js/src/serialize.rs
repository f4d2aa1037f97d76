//! Serialization of [`JsValue`]s and object literals.

use crate::object::JsObject;
use crate::value::JsValue;

/// Returns true if `key` can be written as a bare property name.
///
/// Only ASCII letters, digits, `_` and `$` are accepted, and the first
/// character must not be a digit. Reserved words are allowed since they are
/// valid property names in object literals.
#[must_use]
pub fn is_identifier(key: &str) -> bool {
    let Some(first) = key.chars().next() else {
        return false;
    };
    if first.is_ascii_digit() {
        return false;
    }
    key.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Formats an object key, quoting it unless it is an identifier.
#[must_use]
pub fn quote_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote_string(key)
    }
}

/// Single-quotes a string literal.
///
/// Backslashes and single quotes are escaped, as are line breaks and tabs
/// so the literal stays on one line.
#[must_use]
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Serializes a value as JavaScript source.
#[must_use]
pub fn to_js(value: &JsValue) -> String {
    match value {
        JsValue::Null => "null".to_string(),
        JsValue::Bool(b) => b.to_string(),
        JsValue::Int(i) => i.to_string(),
        JsValue::UInt(u) => u.to_string(),
        JsValue::Float(f) if f.is_finite() => f.to_string(),
        JsValue::Float(_) => "null".to_string(),
        JsValue::String(s) => quote_string(s),
        JsValue::Array(items) => {
            let items: Vec<String> = items.iter().map(to_js).collect();
            format!("[{}]", items.join(", "))
        }
        JsValue::Object(object) => build_object(object, ""),
        JsValue::Raw(raw) => raw.as_str().to_string(),
    }
}

/// Collapses whitespace in free-form method text.
///
/// Every run of spaces, tabs and newlines becomes a single space, and
/// leading/trailing whitespace and commas are removed so the text can be
/// comma-joined with serialized fields.
#[must_use]
pub fn normalize_methods(methods: &str) -> String {
    let collapsed = methods.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}

/// Builds an object literal from serialized state plus method text.
///
/// State fields come first as `key: value`, then the normalized `methods`
/// text, all joined with `, `. An empty object with no methods is `{}`.
///
/// ```
/// use forgeui_js::{JsObject, build_object};
///
/// assert_eq!(build_object(&JsObject::new(), ""), "{}");
/// assert_eq!(
///     build_object(&JsObject::new().with("count", 0), "inc() { this.count++ }"),
///     "{ count: 0, inc() { this.count++ } }"
/// );
/// ```
#[must_use]
pub fn build_object(state: &JsObject, methods: &str) -> String {
    let mut parts: Vec<String> = state
        .iter()
        .map(|(key, value)| format!("{}: {}", quote_key(key), to_js(value)))
        .collect();

    let methods = normalize_methods(methods);
    if !methods.is_empty() {
        parts.push(methods);
    }

    if parts.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::RawJs;

    #[test]
    fn identifier_rules() {
        assert!(is_identifier("count"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$el"));
        assert!(is_identifier("item2"));
        assert!(!is_identifier("2fa"));
        assert!(!is_identifier("data-x"));
        assert!(!is_identifier("with space"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("café"));
    }

    #[test]
    fn keys_are_quoted_only_when_needed() {
        assert_eq!(quote_key("count"), "count");
        assert_eq!(quote_key("data-x"), "'data-x'");
        assert_eq!(quote_key("it's"), r"'it\'s'");
    }

    #[test]
    fn strings_escape_backslash_and_quote() {
        assert_eq!(quote_string(r"C:\path"), r"'C:\\path'");
        assert_eq!(quote_string("don't"), r"'don\'t'");
        assert_eq!(quote_string("a\nb\tc"), r"'a\nb\tc'");
    }

    #[test]
    fn primitive_tokens() {
        assert_eq!(to_js(&JsValue::Null), "null");
        assert_eq!(to_js(&JsValue::Bool(false)), "false");
        assert_eq!(to_js(&JsValue::Int(-4)), "-4");
        assert_eq!(to_js(&JsValue::Float(3.0)), "3");
        assert_eq!(to_js(&JsValue::Float(0.25)), "0.25");
        assert_eq!(to_js(&JsValue::Float(f64::NAN)), "null");
        assert_eq!(to_js(&JsValue::Float(f64::INFINITY)), "null");
    }

    #[test]
    fn raw_is_not_escaped() {
        let value = JsValue::from(RawJs::new("function() { return 'it\\'s' }"));
        assert_eq!(to_js(&value), "function() { return 'it\\'s' }");
    }

    #[test]
    fn nested_structures() {
        let object = JsObject::new()
            .with("user", JsObject::new().with("name", "Ada").with("tags", vec!["x"]))
            .with("empty", JsObject::new());
        assert_eq!(
            to_js(&JsValue::Object(object)),
            "{ user: { name: 'Ada', tags: ['x'] }, empty: {} }"
        );
    }

    #[test]
    fn methods_whitespace_collapses() {
        assert_eq!(
            normalize_methods("\n  toggle() {\n\t\tthis.open = !this.open\n  },\n"),
            "toggle() { this.open = !this.open }"
        );
        assert_eq!(normalize_methods(" \n\t "), "");
    }

    #[test]
    fn empty_state_and_methods() {
        assert_eq!(build_object(&JsObject::new(), ""), "{}");
        assert_eq!(build_object(&JsObject::new(), "   "), "{}");
    }

    #[test]
    fn methods_only() {
        assert_eq!(
            build_object(&JsObject::new(), "init() { }"),
            "{ init() { } }"
        );
    }
}
