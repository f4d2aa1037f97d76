//! Head assets contributed by plugins.
//!
//! Each asset lands in an [`AssetSlot`]. The registry sorts assets by slot
//! (stable within a slot), which is how Alpine plugin scripts end up before
//! the `alpine:init` script, and that script before the Alpine core.

use forgeui_html::{Attrs, Element};

/// Ordered position of an asset in the rendered `<head>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetSlot {
    /// `<meta>` tags and blocking inline scripts (anti-flash theme script).
    Meta,
    /// Stylesheets and `<style>` blocks.
    Style,
    /// Third-party libraries (htmx, Chart.js, analytics).
    Library,
    /// `@alpinejs/*` plugin scripts.
    AlpinePlugin,
    /// The generated `alpine:init` registration script.
    AlpineInit,
    /// The Alpine core script. Must come after everything that hooks `alpine:init`.
    AlpineCore,
    /// Anything that should run last.
    Body,
}

/// Where a script's code comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// `<script src="...">`.
    Src(String),
    /// `<script>code</script>`.
    Inline(String),
}

/// A single head asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    /// A `<script>` tag.
    Script {
        /// External URL or inline code.
        source: ScriptSource,
        /// Extra attributes (`defer`, `data-domain`, ...).
        attrs: Attrs,
        /// Ordering slot.
        slot: AssetSlot,
    },
    /// A `<link rel="stylesheet">`, always in [`AssetSlot::Style`].
    Stylesheet {
        /// Stylesheet URL.
        href: String,
        /// Extra attributes.
        attrs: Attrs,
    },
    /// Any other pre-built element (`<meta>`, `<style>`, JSON-LD).
    Head {
        /// The element.
        element: Element,
        /// Ordering slot.
        slot: AssetSlot,
    },
}

impl Asset {
    /// An external script in `slot`.
    #[must_use]
    pub fn script(src: impl Into<String>, slot: AssetSlot) -> Self {
        Self::Script {
            source: ScriptSource::Src(src.into()),
            attrs: Attrs::new(),
            slot,
        }
    }

    /// An inline script in `slot`.
    #[must_use]
    pub fn inline_script(code: impl Into<String>, slot: AssetSlot) -> Self {
        Self::Script {
            source: ScriptSource::Inline(code.into()),
            attrs: Attrs::new(),
            slot,
        }
    }

    /// A stylesheet link.
    #[must_use]
    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self::Stylesheet {
            href: href.into(),
            attrs: Attrs::new(),
        }
    }

    /// A pre-built head element.
    #[must_use]
    pub fn head(element: Element, slot: AssetSlot) -> Self {
        Self::Head { element, slot }
    }

    /// Adds an attribute. No effect on [`Asset::Head`], whose element is already built.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        if let Self::Script { attrs, .. } | Self::Stylesheet { attrs, .. } = &mut self {
            attrs.insert(name, value);
        }
        self
    }

    /// Adds a boolean attribute.
    #[must_use]
    pub fn with_flag(mut self, name: &str) -> Self {
        if let Self::Script { attrs, .. } | Self::Stylesheet { attrs, .. } = &mut self {
            attrs.insert_flag(name);
        }
        self
    }

    /// Adds `defer`.
    #[must_use]
    pub fn defer(self) -> Self {
        self.with_flag("defer")
    }

    /// Adds `async`.
    #[must_use]
    pub fn async_(self) -> Self {
        self.with_flag("async")
    }

    /// Returns the ordering slot.
    #[must_use]
    pub fn slot(&self) -> AssetSlot {
        match self {
            Self::Script { slot, .. } | Self::Head { slot, .. } => *slot,
            Self::Stylesheet { .. } => AssetSlot::Style,
        }
    }

    /// The URL an external script or stylesheet loads, used for deduplication.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Script {
                source: ScriptSource::Src(src),
                ..
            } => Some(src),
            Self::Stylesheet { href, .. } => Some(href),
            _ => None,
        }
    }

    /// Converts the asset to its element.
    #[must_use]
    pub fn to_element(&self) -> Element {
        match self {
            Self::Script { source, attrs, .. } => {
                let element = match source {
                    ScriptSource::Src(src) => Element::script_src(src.clone()),
                    ScriptSource::Inline(code) => Element::inline_script(code.clone()),
                };
                element.attrs(attrs.clone())
            }
            Self::Stylesheet { href, attrs } => Element::stylesheet(href.clone()).attrs(attrs.clone()),
            Self::Head { element, .. } => element.clone(),
        }
    }

    /// Renders the asset's HTML.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_element().render()
    }
}
