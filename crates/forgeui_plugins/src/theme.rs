//! Light/dark theming.
//!
//! [`ThemePlugin`] contributes three things:
//!
//! - an inline script in [`AssetSlot::Meta`] that applies the dark class
//!   before first paint, so a stored dark preference never flashes light
//! - a `theme` Alpine store (`$store.theme.toggle()`, `$store.theme.dark`)
//! - a `<style>` block of CSS custom properties from color tokens

use crate::alpine::AlpinePlugin;
use forgeui_alpine::Store;
use forgeui_html::{Attrs, Element};
use forgeui_js::{JsObject, quote_string};
use forgeui_plugin::{AssetSlot, Plugin, PluginId, Registry, RegistryError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// User-selectable theme mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow `prefers-color-scheme`.
    #[default]
    System,
}

impl ThemeMode {
    /// The value stored in `localStorage`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

/// Theme settings, also readable by other plugins as a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Mode used when nothing is stored yet.
    pub default_mode: ThemeMode,
    /// `localStorage` key.
    pub storage_key: String,
    /// Class toggled on `<html>` in dark mode.
    pub dark_class: String,
    /// Light tokens, emitted as `--color-<name>` on `:root`.
    pub colors: BTreeMap<String, String>,
    /// Dark overrides, emitted under the dark class.
    pub dark_colors: BTreeMap<String, String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::System,
            storage_key: "theme".to_string(),
            dark_class: "dark".to_string(),
            colors: BTreeMap::new(),
            dark_colors: BTreeMap::new(),
        }
    }
}

impl ThemeSettings {
    /// Script run before first paint.
    #[must_use]
    pub fn anti_flash_script(&self) -> String {
        format!(
            "(function () {{ var m = localStorage.getItem({key}) || {default}; \
             if (m === 'dark' || (m === 'system' && window.matchMedia({query}).matches)) {{ \
             document.documentElement.classList.add({class}); }} }})();",
            key = quote_string(&self.storage_key),
            default = quote_string(self.default_mode.as_str()),
            query = quote_string(DARK_QUERY),
            class = quote_string(&self.dark_class),
        )
    }

    /// The `theme` store.
    #[must_use]
    pub fn store(&self) -> Store {
        let key = quote_string(&self.storage_key);
        let class = quote_string(&self.dark_class);
        let query = quote_string(DARK_QUERY);
        Store::new("theme")
            .with_state(JsObject::new().with("mode", self.default_mode.as_str()))
            .with_methods(format!(
                "get dark() {{ return this.mode === 'dark' || (this.mode === 'system' && window.matchMedia({query}).matches) }},
                 init() {{ this.mode = localStorage.getItem({key}) || this.mode; this.apply() }},
                 apply() {{ document.documentElement.classList.toggle({class}, this.dark) }},
                 set(mode) {{ this.mode = mode; localStorage.setItem({key}, mode); this.apply() }},
                 toggle() {{ this.set(this.dark ? 'light' : 'dark') }}"
            ))
    }

    /// `:root { --color-x: v; } .dark { ... }`, or `None` without tokens.
    #[must_use]
    pub fn css(&self) -> Option<String> {
        let mut rules = Vec::new();
        if !self.colors.is_empty() {
            rules.push(format!(":root {{ {} }}", declarations(&self.colors)));
        }
        if !self.dark_colors.is_empty() {
            rules.push(format!(".{} {{ {} }}", self.dark_class, declarations(&self.dark_colors)));
        }
        (!rules.is_empty()).then(|| rules.join(" "))
    }
}

fn declarations(tokens: &BTreeMap<String, String>) -> String {
    tokens
        .iter()
        .map(|(name, value)| format!("--color-{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Attributes for a button that toggles the theme.
#[must_use]
pub fn theme_toggle_attrs() -> Attrs {
    Attrs::new()
        .with("@click", "$store.theme.toggle()")
        .with(":aria-pressed", "$store.theme.dark")
}

/// Light/dark theming plugin. Requires [`AlpinePlugin`].
///
/// ```
/// use forgeui_plugin::Registry;
/// use forgeui_plugins::{AlpinePlugin, ThemeMode, ThemePlugin};
///
/// let mut registry = Registry::new();
/// registry
///     .add_plugins(AlpinePlugin::default())
///     .add_plugins(
///         ThemePlugin::default()
///             .with_default_mode(ThemeMode::Dark)
///             .with_color("primary", "#4f46e5"),
///     );
/// registry.finish()?;
///
/// let html = registry.head_html()?;
/// assert!(html.starts_with("<script>(function () {"));
/// assert!(html.contains("<style>:root { --color-primary: #4f46e5; }</style>"));
/// assert!(html.contains("Alpine.store('theme', { mode: 'dark', get dark()"));
/// # Ok::<(), forgeui_plugin::RegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemePlugin {
    settings: ThemeSettings,
}

impl ThemePlugin {
    /// Builds the plugin from complete settings.
    #[must_use]
    pub fn from_settings(settings: ThemeSettings) -> Self {
        Self { settings }
    }

    /// Sets the initial mode.
    #[must_use]
    pub fn with_default_mode(mut self, mode: ThemeMode) -> Self {
        self.settings.default_mode = mode;
        self
    }

    /// Sets the `localStorage` key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.settings.storage_key = key.into();
        self
    }

    /// Sets the dark class.
    #[must_use]
    pub fn with_dark_class(mut self, class: impl Into<String>) -> Self {
        self.settings.dark_class = class.into();
        self
    }

    /// Adds a light color token.
    #[must_use]
    pub fn with_color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.colors.insert(name.into(), value.into());
        self
    }

    /// Adds a dark color token.
    #[must_use]
    pub fn with_dark_color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.dark_colors.insert(name.into(), value.into());
        self
    }
}

impl Plugin for ThemePlugin {
    fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        registry.add_inline_script(self.settings.anti_flash_script(), AssetSlot::Meta);
        if let Some(css) = self.settings.css() {
            registry.add_head(Element::new("style").raw(css), AssetSlot::Style);
        }
        registry.add_store(self.settings.store())?;
        registry.insert_resource(self.settings.clone());
        Ok(())
    }

    fn dependencies(&self) -> Vec<PluginId> {
        vec![PluginId::of::<AlpinePlugin>()]
    }
}
