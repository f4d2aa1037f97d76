//! Values that can appear in a JavaScript object literal.

use crate::object::JsObject;
use serde::Serialize;

/// JavaScript source emitted verbatim.
///
/// Wrapping a string in `RawJs` opts it out of quoting and escaping, so it
/// can carry functions, arrow functions or arbitrary expressions:
///
/// ```
/// use forgeui_js::{JsObject, RawJs};
///
/// let state = JsObject::new().with("now", RawJs::new("Date.now()"));
/// assert_eq!(state.to_js(), "{ now: Date.now() }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawJs(String);

impl RawJs {
    /// Wraps `code` without validating it.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the wrapped code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the marker, returning the code.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for RawJs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value inside a JavaScript object literal.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    /// `null`.
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer too large for `Int`.
    UInt(u64),
    /// A float. Non-finite values serialize as `null`.
    Float(f64),
    /// A string, serialized single-quoted.
    String(String),
    /// `[a, b, c]`.
    Array(Vec<JsValue>),
    /// A nested object literal.
    Object(JsObject),
    /// Verbatim code.
    Raw(RawJs),
}

impl JsValue {
    /// Shorthand for `JsValue::Raw(RawJs::new(code))`.
    #[must_use]
    pub fn raw(code: impl Into<String>) -> Self {
        Self::Raw(RawJs::new(code))
    }

    /// Converts any serializable value through `serde_json`.
    ///
    /// Serialization failures (for example a map with non-string keys) are
    /// logged and produce [`JsValue::Null`].
    #[must_use]
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Self::from(json),
            Err(err) => {
                tracing::warn!(error = %err, "value is not serializable, emitting null");
                Self::Null
            }
        }
    }

    /// Serializes this value as JavaScript source.
    #[must_use]
    pub fn to_js(&self) -> String {
        crate::serialize::to_js(self)
    }

    /// Returns true for [`JsValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl core::fmt::Display for JsValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_js())
    }
}

impl From<bool> for JsValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for JsValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UInt(value), Self::Int)
    }
}

impl From<usize> for JsValue {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Self::UInt(value as u64), Self::Int)
    }
}

impl From<isize> for JsValue {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f32> for JsValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for JsValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for JsValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for JsValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for JsValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<RawJs> for JsValue {
    fn from(value: RawJs) -> Self {
        Self::Raw(value)
    }
}

impl From<JsObject> for JsValue {
    fn from(value: JsObject) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<JsValue>> From<Option<T>> for JsValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<JsValue>> From<Vec<T>> for JsValue {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<()> for JsValue {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<serde_json::Value> for JsValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    n.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(JsObject::from(map)),
        }
    }
}
