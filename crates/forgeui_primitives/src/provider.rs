//! Alpine state scope.

use crate::Primitive;
use forgeui_alpine::directives::{x_cloak, x_data_with_methods, x_init};
use forgeui_html::Attrs;
use forgeui_js::{JsObject, JsValue};

/// An element that opens an `x-data` scope for its children.
///
/// State fields are serialized with `forgeui_js`; methods are free-form
/// JavaScript appended after them.
///
/// ```
/// use forgeui_primitives::{Primitive, Provider};
///
/// let html = Provider::new()
///     .with_state("open", false)
///     .with_methods("toggle() { this.open = !this.open }")
///     .with_cloak()
///     .render(r#"<button @click="toggle()">Menu</button>"#);
///
/// assert_eq!(
///     html,
///     r#"<div x-data="{ open: false, toggle() { this.open = !this.open } }" x-cloak><button @click="toggle()">Menu</button></div>"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Provider {
    state: JsObject,
    methods: String,
    init: Option<String>,
    cloak: bool,
    tag: Option<String>,
    class: Option<String>,
}

impl Provider {
    /// An empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a prepared state object.
    #[must_use]
    pub fn from_state(state: JsObject) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Adds a state field.
    #[must_use]
    pub fn with_state(mut self, key: impl Into<String>, value: impl Into<JsValue>) -> Self {
        self.state.insert(key, value);
        self
    }

    /// Appends method definitions (`name() { ... }`), comma-separated.
    #[must_use]
    pub fn with_methods(mut self, methods: impl AsRef<str>) -> Self {
        let methods = methods
            .as_ref()
            .trim_matches(|c: char| c == ',' || c.is_whitespace());
        if !methods.is_empty() {
            if !self.methods.is_empty() {
                self.methods.push_str(", ");
            }
            self.methods.push_str(methods);
        }
        self
    }

    /// Sets `x-init`.
    #[must_use]
    pub fn with_init(mut self, expr: impl Into<String>) -> Self {
        self.init = Some(expr.into());
        self
    }

    /// Adds `x-cloak`.
    #[must_use]
    pub fn with_cloak(mut self) -> Self {
        self.cloak = true;
        self
    }

    /// Renders as `tag` instead of `div`.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the `class` attribute.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Returns the state object.
    #[must_use]
    pub fn state(&self) -> &JsObject {
        &self.state
    }
}

impl Primitive for Provider {
    fn classes(&self) -> String {
        self.class.clone().unwrap_or_default()
    }

    fn attrs(&self) -> Attrs {
        let mut attrs = x_data_with_methods(&self.state, &self.methods);
        if let Some(init) = &self.init {
            attrs = attrs.merge(x_init(init));
        }
        if self.cloak {
            attrs = attrs.merge(x_cloak());
        }
        attrs
    }

    fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or("div")
    }
}
