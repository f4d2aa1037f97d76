//! Ordered attribute sets.
//!
//! [`Attrs`] is the return type of every directive builder in ForgeUI. It
//! keeps attributes in insertion order so rendered markup is stable, and it
//! knows how to combine two sets: later values win, except `class`, whose
//! values are joined.

use crate::class::class_names;
use crate::escape::escape_attr;
use indexmap::IndexMap;
use indexmap::map::Iter;

/// The value half of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// `name="value"`.
    Text(String),
    /// A boolean attribute rendered as a bare name (`x-cloak`, `defer`).
    Flag,
}

impl AttrValue {
    /// Returns the text value, or `None` for a flag.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Flag => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// An insertion-ordered set of HTML attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: IndexMap<String, AttrValue>,
}

impl Attrs {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates a set holding a single `name="value"` attribute.
    #[must_use]
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with(name, value)
    }

    /// Adds `name="value"`, replacing any previous value for `name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a boolean attribute.
    #[must_use]
    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.insert_flag(name);
        self
    }

    /// Inserts `name="value"` and returns the previous value, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<AttrValue> {
        self.entries
            .insert(name.into(), AttrValue::Text(value.into()))
    }

    /// Inserts a boolean attribute and returns the previous value, if any.
    pub fn insert_flag(&mut self, name: impl Into<String>) -> Option<AttrValue> {
        self.entries.insert(name.into(), AttrValue::Flag)
    }

    /// Returns the value stored for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Returns the text value stored for `name`. Flags yield `None`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_text)
    }

    /// Returns true if `name` is present (as text or flag).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Removes `name`, keeping the order of the remaining attributes.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.shift_remove(name)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, String, AttrValue> {
        self.entries.iter()
    }

    /// Merges `other` into `self`.
    ///
    /// Attributes from `other` replace those in `self`, except `class`,
    /// whose values are joined with [`class_names`].
    #[must_use]
    pub fn merge(mut self, other: Attrs) -> Self {
        for (name, value) in other.entries {
            if name == "class"
                && let (Some(AttrValue::Text(existing)), AttrValue::Text(incoming)) =
                    (self.entries.get(&name), &value)
            {
                let joined = class_names([existing.as_str(), incoming.as_str()]);
                self.entries.insert(name, AttrValue::Text(joined));
                continue;
            }
            self.entries.insert(name, value);
        }
        self
    }

    /// Renders the set as it appears inside a start tag.
    ///
    /// Every attribute is preceded by a single space so the result can be
    /// appended directly after the tag name. An empty set renders as `""`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.entries {
            out.push(' ');
            out.push_str(name);
            if let AttrValue::Text(text) = value {
                out.push_str("=\"");
                out.push_str(&escape_attr(text));
                out.push('"');
            }
        }
        out
    }
}

impl core::fmt::Display for Attrs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a Attrs {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attrs = Attrs::new();
        attrs.extend(iter);
        attrs
    }
}

impl<K, V> Extend<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(Attrs::new().render(), "");
        assert!(Attrs::default().is_empty());
    }

    #[test]
    fn render_preserves_insertion_order() {
        let attrs = Attrs::new()
            .with("hx-get", "/items")
            .with("hx-target", "#list")
            .with_flag("hx-preserve");
        assert_eq!(
            attrs.render(),
            r##" hx-get="/items" hx-target="#list" hx-preserve"##
        );
    }

    #[test]
    fn render_escapes_values() {
        let attrs = Attrs::single("x-data", "{ label: 'Save \"now\"' }");
        assert_eq!(
            attrs.to_string(),
            r#" x-data="{ label: &#39;Save &quot;now&quot;&#39; }""#
        );
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut attrs = Attrs::new().with("a", "1").with("b", "2");
        let previous = attrs.insert("a", "3");
        assert_eq!(previous, Some(AttrValue::Text("1".into())));
        assert_eq!(attrs.render(), r#" a="3" b="2""#);
    }

    #[test]
    fn merge_later_wins_but_class_joins() {
        let base = Attrs::new().with("class", "p-4 flex").with("id", "a");
        let extra = Attrs::new().with("class", "flex rounded").with("id", "b");
        let merged = base.merge(extra);
        assert_eq!(merged.value("class"), Some("p-4 flex rounded"));
        assert_eq!(merged.value("id"), Some("b"));
    }

    #[test]
    fn remove_keeps_order() {
        let mut attrs: Attrs = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        attrs.remove("b");
        assert_eq!(attrs.render(), r#" a="1" c="3""#);
    }

    #[test]
    fn flags_have_no_text_value() {
        let attrs = Attrs::new().with_flag("x-cloak");
        assert!(attrs.contains("x-cloak"));
        assert_eq!(attrs.value("x-cloak"), None);
    }
}
