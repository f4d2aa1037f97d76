//! JavaScript object-literal serialization.
//!
//! Alpine directives such as `x-data` and `Alpine.store()` take JavaScript
//! object literals, not JSON. This crate turns typed Rust values into those
//! literals:
//!
//! - keys that are valid identifiers stay bare (`open`), everything else is
//!   quoted (`'data-x'`);
//! - strings are single-quoted so the literal survives inside a double-quoted
//!   HTML attribute;
//! - [`RawJs`] values are spliced in verbatim, which is how functions and
//!   expressions get embedded in otherwise serialized state;
//! - free-form method text (`toggle() { this.open = !this.open }`) can be
//!   appended after the serialized fields with [`build_object`].
//!
//! # Example
//!
//! ```
//! use forgeui_js::{JsObject, RawJs, build_object};
//!
//! let state = JsObject::new()
//!     .with("open", false)
//!     .with("label", "Menu")
//!     .with("close", RawJs::new("() => this.open = false"));
//!
//! assert_eq!(
//!     build_object(&state, "toggle() {\n    this.open = !this.open\n}"),
//!     "{ open: false, label: 'Menu', close: () => this.open = false, toggle() { this.open = !this.open } }"
//! );
//! ```
//!
//! # Ordering
//!
//! [`JsObject`] keeps fields in insertion order, so output is deterministic.
//! Consumers should still treat two literals with the same fields in a
//! different order as equivalent.

mod object;
mod serialize;
mod value;

pub use object::JsObject;
pub use serialize::{
    build_object, is_identifier, normalize_methods, quote_key, quote_string, to_js,
};
pub use value::{JsValue, RawJs};

/// Builds a [`JsObject`] from `key => value` pairs.
///
/// Values go through `JsValue::from`, so anything with a `From` impl works.
///
/// ```
/// use forgeui_js::{js_object, RawJs};
///
/// let state = js_object! {
///     "count" => 0,
///     "inc" => RawJs::new("function() { this.count++ }"),
/// };
/// assert_eq!(state.to_js(), "{ count: 0, inc: function() { this.count++ } }");
/// ```
#[macro_export]
macro_rules! js_object {
    () => {
        $crate::JsObject::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut object = $crate::JsObject::new();
        $(
            object.insert($key, $value);
        )+
        object
    }};
}
