//! htmx script tags and the `htmx-config` meta tag.

use forgeui_html::Element;
use forgeui_htmx::scripts::{
    DEFAULT_CDN, DEFAULT_EXT_VERSION, DEFAULT_VERSION, core_script_url, extension_script_url,
};
use forgeui_plugin::{AssetSlot, Plugin, Registry, RegistryError};
use serde_json::Value;

/// Loads htmx and its extensions into [`AssetSlot::Library`].
///
/// ```
/// use forgeui_plugin::Registry;
/// use forgeui_plugins::HtmxPlugin;
///
/// let mut registry = Registry::new();
/// registry.add_plugins(
///     HtmxPlugin::default()
///         .with_extension("json-enc")
///         .with_config(serde_json::json!({ "defaultSwapStyle": "outerHTML" })),
/// );
/// registry.finish()?;
///
/// let html = registry.head_html()?;
/// assert!(html.contains("htmx-ext-json-enc"));
/// assert!(html.contains(r#"<meta name="htmx-config" content="{&quot;defaultSwapStyle&quot;:&quot;outerHTML&quot;}">"#));
/// # Ok::<(), forgeui_plugin::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HtmxPlugin {
    cdn: String,
    version: String,
    ext_version: String,
    extensions: Vec<String>,
    config: Option<Value>,
}

impl Default for HtmxPlugin {
    fn default() -> Self {
        Self {
            cdn: DEFAULT_CDN.to_string(),
            version: DEFAULT_VERSION.to_string(),
            ext_version: DEFAULT_EXT_VERSION.to_string(),
            extensions: Vec::new(),
            config: None,
        }
    }
}

impl HtmxPlugin {
    /// Sets the CDN base URL.
    #[must_use]
    pub fn with_cdn(mut self, cdn: impl Into<String>) -> Self {
        self.cdn = cdn.into();
        self
    }

    /// Sets the htmx version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the version used for every `htmx-ext-*` package.
    #[must_use]
    pub fn with_extension_version(mut self, version: impl Into<String>) -> Self {
        self.ext_version = version.into();
        self
    }

    /// Adds an extension (`sse`, `ws`, `json-enc`, ...).
    #[must_use]
    pub fn with_extension(mut self, name: impl Into<String>) -> Self {
        self.extensions.push(name.into());
        self
    }

    /// Emits `<meta name="htmx-config">` with this JSON object.
    #[must_use]
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }
}

impl Plugin for HtmxPlugin {
    fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        if let Some(config) = &self.config {
            registry.add_head(
                Element::meta_name("htmx-config", config.to_string()),
                AssetSlot::Meta,
            );
        }
        registry.add_script(core_script_url(&self.cdn, &self.version), AssetSlot::Library);
        for name in &self.extensions {
            registry.add_script(
                extension_script_url(&self.cdn, name, &self.ext_version),
                AssetSlot::Library,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_before_extensions() {
        let mut registry = Registry::new();
        registry.add_plugins(
            HtmxPlugin::default()
                .with_version("2.0.3")
                .with_extension_version("2.2.0")
                .with_extension("sse")
                .with_extension("sse"),
        );
        registry.finish().unwrap();
        let urls: Vec<String> = registry
            .assets()
            .unwrap()
            .iter()
            .filter_map(|a| a.url().map(str::to_string))
            .collect();
        assert_eq!(
            urls,
            [
                "https://cdn.jsdelivr.net/npm/htmx.org@2.0.3/dist/htmx.min.js",
                "https://cdn.jsdelivr.net/npm/htmx-ext-sse@2.2.0/sse.js",
            ]
        );
    }

    #[test]
    fn no_config_no_meta() {
        let mut registry = Registry::new();
        registry.add_plugins(HtmxPlugin::default());
        registry.finish().unwrap();
        assert!(!registry.head_html().unwrap().contains("<meta"));
    }
}
