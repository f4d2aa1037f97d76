//! Global Alpine registrations.
//!
//! Stores, reusable components, custom directives and magics must be
//! registered before Alpine walks the DOM. Alpine fires `alpine:init`
//! right before that walk, so [`init_script`] wraps every registration in a
//! listener for it. The resulting script has to run before the Alpine core
//! script executes, which is why the plugin registry places it ahead of the
//! core `<script>` tag.

use forgeui_js::{JsObject, RawJs, build_object, quote_string};

/// `Alpine.store('name', { ... })`.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    name: String,
    state: JsObject,
    methods: String,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: JsObject::new(),
            methods: String::new(),
        }
    }

    /// Sets the serialized state fields.
    #[must_use]
    pub fn with_state(mut self, state: JsObject) -> Self {
        self.state = state;
        self
    }

    /// Sets free-form method text appended after the state.
    #[must_use]
    pub fn with_methods(mut self, methods: impl Into<String>) -> Self {
        self.methods = methods.into();
        self
    }

    /// The store name (`$store.<name>`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registration statement.
    #[must_use]
    pub fn to_js(&self) -> String {
        format!(
            "Alpine.store({}, {});",
            quote_string(&self.name),
            build_object(&self.state, &self.methods)
        )
    }
}

/// `Alpine.data('name', (params) => ({ ... }))`.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    params: Vec<String>,
    state: JsObject,
    methods: String,
}

impl Component {
    /// Creates a component with no parameters or state.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            state: JsObject::new(),
            methods: String::new(),
        }
    }

    /// Sets the factory's parameter names.
    #[must_use]
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the serialized state fields.
    #[must_use]
    pub fn with_state(mut self, state: JsObject) -> Self {
        self.state = state;
        self
    }

    /// Sets free-form method text appended after the state.
    #[must_use]
    pub fn with_methods(mut self, methods: impl Into<String>) -> Self {
        self.methods = methods.into();
        self
    }

    /// The component name used in `x-data="name()"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registration statement.
    #[must_use]
    pub fn to_js(&self) -> String {
        format!(
            "Alpine.data({}, ({}) => ({}));",
            quote_string(&self.name),
            self.params.join(", "),
            build_object(&self.state, &self.methods)
        )
    }
}

/// `Alpine.directive('name', callback)`, registering `x-<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    name: String,
    body: RawJs,
}

impl Directive {
    /// `body` is the directive callback, e.g.
    /// `(el, { expression }, { evaluate }) => { ... }`.
    #[must_use]
    pub fn new(name: impl Into<String>, body: RawJs) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// The directive name without the `x-` prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registration statement.
    #[must_use]
    pub fn to_js(&self) -> String {
        format!("Alpine.directive({}, {});", quote_string(&self.name), self.body)
    }
}

/// `Alpine.magic('name', callback)`, registering `$<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magic {
    name: String,
    body: RawJs,
}

impl Magic {
    /// `body` is the magic factory, e.g. `(el) => (subject) => { ... }`.
    #[must_use]
    pub fn new(name: impl Into<String>, body: RawJs) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// The magic name without the `$` prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registration statement.
    #[must_use]
    pub fn to_js(&self) -> String {
        format!("Alpine.magic({}, {});", quote_string(&self.name), self.body)
    }
}

/// Wraps all registrations in a single `alpine:init` listener.
///
/// Registration order is stores, components, directives, magics. Returns an
/// empty string when there is nothing to register.
///
/// ```
/// use forgeui_alpine::bootstrap::{Store, init_script};
/// use forgeui_js::JsObject;
///
/// let store = Store::new("cart").with_state(JsObject::new().with("items", 0));
/// assert_eq!(
///     init_script(&[store], &[], &[], &[]),
///     "document.addEventListener('alpine:init', () => { Alpine.store('cart', { items: 0 }); });"
/// );
/// assert_eq!(init_script(&[], &[], &[], &[]), "");
/// ```
#[must_use]
pub fn init_script(
    stores: &[Store],
    components: &[Component],
    directives: &[Directive],
    magics: &[Magic],
) -> String {
    let statements: Vec<String> = stores
        .iter()
        .map(Store::to_js)
        .chain(components.iter().map(Component::to_js))
        .chain(directives.iter().map(Directive::to_js))
        .chain(magics.iter().map(Magic::to_js))
        .collect();

    if statements.is_empty() {
        return String::new();
    }

    format!(
        "document.addEventListener('alpine:init', () => {{ {} }});",
        statements.join(" ")
    )
}
