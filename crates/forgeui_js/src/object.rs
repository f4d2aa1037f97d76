//! Ordered JavaScript object literals.

use crate::value::JsValue;
use indexmap::IndexMap;
use serde::Serialize;

/// An ordered mapping from keys to [`JsValue`]s.
///
/// Fields serialize in insertion order. Inserting an existing key replaces
/// its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    fields: IndexMap<String, JsValue>,
}

impl JsObject {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Converts a serializable struct or map into an object.
    ///
    /// Anything that does not serialize to a JSON object (including
    /// serialization failures) yields an empty object and a warning.
    #[must_use]
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        match JsValue::from_serialize(value) {
            JsValue::Object(object) => object,
            JsValue::Null => Self::new(),
            other => {
                tracing::warn!(
                    value = %other,
                    "value does not serialize to an object, emitting {{}}"
                );
                Self::new()
            }
        }
    }

    /// Adds a field and returns the object.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a field, returning the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsValue>) -> Option<JsValue> {
        self.fields.insert(key.into(), value.into())
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsValue> {
        self.fields.get(key)
    }

    /// Removes `key`, keeping the order of the remaining fields.
    pub fn remove(&mut self, key: &str) -> Option<JsValue> {
        self.fields.shift_remove(key)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the object has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copies every field of `other` into `self`; `other` wins on conflicts.
    pub fn extend_from(&mut self, other: &JsObject) {
        for (key, value) in &other.fields {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// Serializes the object as a JavaScript literal.
    #[must_use]
    pub fn to_js(&self) -> String {
        crate::serialize::build_object(self, "")
    }
}

impl core::fmt::Display for JsObject {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_js())
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for JsObject {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut object = JsObject::new();
        for (key, value) in map {
            object.insert(key, JsValue::from(value));
        }
        object
    }
}

impl<K, V> FromIterator<(K, V)> for JsObject
where
    K: Into<String>,
    V: Into<JsValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut object = JsObject::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Dropdown {
        open: bool,
        items: Vec<&'static str>,
    }

    #[test]
    fn from_struct() {
        let object = JsObject::from_serialize(&Dropdown {
            open: true,
            items: vec!["a", "b"],
        });
        assert_eq!(object.to_js(), "{ open: true, items: ['a', 'b'] }");
    }

    #[test]
    fn non_object_serializes_to_empty() {
        assert!(JsObject::from_serialize(&42).is_empty());
        assert!(JsObject::from_serialize(&Option::<u8>::None).is_empty());
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut object = JsObject::new().with("a", 1).with("b", 2);
        object.insert("a", 3);
        assert_eq!(object.to_js(), "{ a: 3, b: 2 }");
    }

    #[test]
    fn extend_from_overrides() {
        let mut base = JsObject::new().with("open", false).with("size", "md");
        base.extend_from(&JsObject::new().with("open", true));
        assert_eq!(base.get("open"), Some(&JsValue::Bool(true)));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn collect_from_pairs() {
        let object: JsObject = [("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(object.to_string(), "{ x: 1, y: 2 }");
    }
}
