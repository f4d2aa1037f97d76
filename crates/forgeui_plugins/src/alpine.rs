//! Alpine.js script tags.

use forgeui_alpine::AlpineExt;
use forgeui_alpine::scripts::{DEFAULT_CDN, DEFAULT_VERSION, core_script_url, plugin_script_url};
use forgeui_plugin::{Asset, AssetSlot, Plugin, Registry, RegistryError};

/// Which Alpine build to load and which official plugins to add.
///
/// Inserted by [`AlpinePlugin::build`]. Dependents may push more plugins
/// during their own `build()`; tags are emitted in `ready()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlpineSettings {
    /// CDN base URL.
    pub cdn: String,
    /// Alpine version for the core and every plugin.
    pub version: String,
    /// Official plugins, loaded in this order.
    pub plugins: Vec<AlpineExt>,
}

impl AlpineSettings {
    /// Adds `ext` unless it is already listed.
    pub fn require(&mut self, ext: AlpineExt) {
        if !self.plugins.contains(&ext) {
            self.plugins.push(ext);
        }
    }
}

/// Loads Alpine and its official plugins.
///
/// Plugin scripts go in [`AssetSlot::AlpinePlugin`] and the core script in
/// [`AssetSlot::AlpineCore`], so the `alpine:init` script generated by the
/// registry lands between them.
///
/// ```
/// use forgeui_alpine::AlpineExt;
/// use forgeui_plugin::Registry;
/// use forgeui_plugins::AlpinePlugin;
///
/// let mut registry = Registry::new();
/// registry.add_plugins(AlpinePlugin::default().with_plugin(AlpineExt::Collapse));
/// registry.finish()?;
///
/// let html = registry.head_html()?;
/// assert!(html.find("@alpinejs/collapse") < html.find("/alpinejs@"));
/// # Ok::<(), forgeui_plugin::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AlpinePlugin {
    cdn: String,
    version: String,
    plugins: Vec<AlpineExt>,
}

impl Default for AlpinePlugin {
    fn default() -> Self {
        Self {
            cdn: DEFAULT_CDN.to_string(),
            version: DEFAULT_VERSION.to_string(),
            plugins: Vec::new(),
        }
    }
}

impl AlpinePlugin {
    /// Sets the CDN base URL.
    #[must_use]
    pub fn with_cdn(mut self, cdn: impl Into<String>) -> Self {
        self.cdn = cdn.into();
        self
    }

    /// Sets the Alpine version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Adds an official plugin.
    #[must_use]
    pub fn with_plugin(mut self, ext: AlpineExt) -> Self {
        self.plugins.push(ext);
        self
    }

    /// Adds several official plugins.
    #[must_use]
    pub fn with_plugins(mut self, exts: impl IntoIterator<Item = AlpineExt>) -> Self {
        self.plugins.extend(exts);
        self
    }
}

impl Plugin for AlpinePlugin {
    fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        let mut settings = AlpineSettings {
            cdn: self.cdn.clone(),
            version: self.version.clone(),
            plugins: Vec::new(),
        };
        for &ext in &self.plugins {
            settings.require(ext);
        }
        registry.insert_resource(settings);
        Ok(())
    }

    fn ready(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        let Some(settings) = registry.resource::<AlpineSettings>().cloned() else {
            return Ok(());
        };
        for &ext in &settings.plugins {
            registry.add_asset(
                Asset::script(
                    plugin_script_url(&settings.cdn, ext, &settings.version),
                    AssetSlot::AlpinePlugin,
                )
                .defer(),
            );
        }
        registry.add_asset(
            Asset::script(
                core_script_url(&settings.cdn, &settings.version),
                AssetSlot::AlpineCore,
            )
            .defer(),
        );
        tracing::debug!(
            version = %settings.version,
            plugins = settings.plugins.len(),
            "Alpine scripts registered"
        );
        Ok(())
    }
}
