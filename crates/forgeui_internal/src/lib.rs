//! # ForgeUI Internal Library
//!
//! Re-exports the ForgeUI crates for convenience.

/// Markup: attribute sets, escaping, elements.
pub use forgeui_html as html;

/// JavaScript object-literal serialization.
pub use forgeui_js as js;

/// Alpine.js directives, bootstrap registrations and scripts.
pub use forgeui_alpine as alpine;

/// htmx attributes, headers and scripts.
pub use forgeui_htmx as htmx;

/// Plugin trait, groups and the registry.
pub use forgeui_plugin as plugin;

/// Built-in plugins.
pub use forgeui_plugins as plugins;

/// Layout primitives.
pub use forgeui_primitives as primitives;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use forgeui_alpine::directives::*;
    pub use forgeui_alpine::{Component, Directive, Magic, Model, On, Store, Transition};
    pub use forgeui_html::{Attrs, Element, class_names};
    pub use forgeui_htmx::attrs::*;
    pub use forgeui_htmx::{Swap, SwapStyle, Trigger, TriggerSpec};
    pub use forgeui_js::{JsObject, JsValue, RawJs, build_object, js_object};
    pub use forgeui_plugin::{AssetSlot, Plugin, PluginGroup, PluginId, Registry, RegistryError};
    pub use forgeui_plugins::{
        AlpinePlugin, DefaultPlugins, ForgeConfig, HtmxPlugin, MinimalPlugins, ThemePlugin,
    };
    pub use forgeui_primitives::{
        Center, Container, Grid, Primitive, Provider, Space, Spacer, hstack, vstack,
    };
}
