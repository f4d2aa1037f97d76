//! Declarative plugin configuration.
//!
//! [`ForgeConfig`] describes a whole head setup as data (usually a JSON file
//! checked in next to the templates) and turns it into a
//! [`PluginGroupBuilder`]. Every section is optional.
//!
//! ```
//! use forgeui_plugin::Registry;
//! use forgeui_plugins::ForgeConfig;
//!
//! let config = ForgeConfig::from_json_str(r#"{
//!     "alpine": { "plugins": ["focus"] },
//!     "htmx": { "extensions": ["sse"] },
//!     "theme": { "default_mode": "dark" },
//!     "charts": true
//! }"#)?;
//!
//! let mut registry = Registry::new();
//! registry.add_plugins(config.plugins());
//! registry.finish()?;
//! assert!(registry.head_html()?.contains("chart.umd.min.js"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::alpine::AlpinePlugin;
use crate::analytics::{AnalyticsPlugin, AnalyticsProvider};
use crate::charts::{ChartsPlugin, DEFAULT_CHARTJS_VERSION};
use crate::htmx::HtmxPlugin;
use crate::seo::{SeoDefaults, SeoPlugin};
use crate::theme::{ThemePlugin, ThemeSettings};
use crate::tracing_plugin::{TracingFormat, TracingPlugin};
use forgeui_alpine::AlpineExt;
use forgeui_plugin::PluginGroupBuilder;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

/// Errors from loading a [`ForgeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input is not valid JSON for this schema.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The input parsed but a value is unusable.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// CDN and version pins shared by the script plugins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// npm CDN base URL.
    pub cdn: String,
    /// Alpine version.
    pub alpine_version: String,
    /// htmx version.
    pub htmx_version: String,
    /// Version for every `htmx-ext-*` package.
    pub htmx_ext_version: String,
    /// Chart.js version.
    pub chartjs_version: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            cdn: forgeui_alpine::scripts::DEFAULT_CDN.to_string(),
            alpine_version: forgeui_alpine::scripts::DEFAULT_VERSION.to_string(),
            htmx_version: forgeui_htmx::scripts::DEFAULT_VERSION.to_string(),
            htmx_ext_version: forgeui_htmx::scripts::DEFAULT_EXT_VERSION.to_string(),
            chartjs_version: DEFAULT_CHARTJS_VERSION.to_string(),
        }
    }
}

/// `tracing` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TracingSection {
    /// Level name (`info`, `debug`, ...).
    pub level: Option<String>,
    /// Output format.
    pub format: TracingFormat,
}

/// `alpine` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlpineSection {
    /// Official plugins to load.
    pub plugins: Vec<AlpineExt>,
}

/// `htmx` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HtmxSection {
    /// Set to `false` to leave htmx out.
    pub enabled: bool,
    /// Extensions to load.
    pub extensions: Vec<String>,
    /// Contents of `<meta name="htmx-config">`.
    pub config: Option<Value>,
}

impl Default for HtmxSection {
    fn default() -> Self {
        Self {
            enabled: true,
            extensions: Vec::new(),
            config: None,
        }
    }
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// CDN and versions.
    pub assets: AssetsConfig,
    /// Logging; omitted means no [`TracingPlugin`].
    pub tracing: Option<TracingSection>,
    /// Alpine options. Alpine itself is always loaded.
    pub alpine: AlpineSection,
    /// htmx options.
    pub htmx: HtmxSection,
    /// Theme; omitted means no [`ThemePlugin`].
    pub theme: Option<ThemeSettings>,
    /// Load Chart.js and `x-chart`.
    pub charts: bool,
    /// Analytics provider.
    pub analytics: Option<AnalyticsProvider>,
    /// Site-wide SEO defaults.
    pub seo: Option<SeoDefaults>,
}

impl ForgeConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed input, [`ConfigError::Invalid`]
    /// when [`validate`](Self::validate) fails.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_json_str`](Self::from_json_str), for an already parsed value.
    ///
    /// # Errors
    ///
    /// See [`from_json_str`](Self::from_json_str).
    pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] for an empty CDN or version, or an unknown
    /// tracing level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assets.cdn.trim().is_empty() {
            return Err(ConfigError::Invalid("assets.cdn is empty".to_string()));
        }
        let versions = [
            ("alpine_version", &self.assets.alpine_version),
            ("htmx_version", &self.assets.htmx_version),
            ("htmx_ext_version", &self.assets.htmx_ext_version),
            ("chartjs_version", &self.assets.chartjs_version),
        ];
        for (field, version) in versions {
            if version.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("assets.{field} is empty")));
            }
        }
        if let Some(level) = self.tracing.as_ref().and_then(|t| t.level.as_deref()) {
            Level::from_str(level)
                .map_err(|_| ConfigError::Invalid(format!("unknown tracing level: {level}")))?;
        }
        Ok(())
    }

    /// The plugins this configuration describes, in a fixed order:
    /// tracing, Alpine, htmx, theme, charts, analytics, SEO.
    #[must_use]
    pub fn plugins(&self) -> PluginGroupBuilder {
        let assets = &self.assets;
        let mut group = PluginGroupBuilder::new();

        if let Some(section) = &self.tracing {
            let mut plugin = TracingPlugin::default().with_format(section.format);
            if let Some(level) = section.level.as_deref().and_then(|l| Level::from_str(l).ok()) {
                plugin = plugin.with_level(level);
            }
            group = group.add(plugin);
        }

        group = group.add(
            AlpinePlugin::default()
                .with_cdn(&assets.cdn)
                .with_version(&assets.alpine_version)
                .with_plugins(self.alpine.plugins.iter().copied()),
        );

        if self.htmx.enabled {
            let mut htmx = HtmxPlugin::default()
                .with_cdn(&assets.cdn)
                .with_version(&assets.htmx_version)
                .with_extension_version(&assets.htmx_ext_version);
            for name in &self.htmx.extensions {
                htmx = htmx.with_extension(name);
            }
            if let Some(config) = &self.htmx.config {
                htmx = htmx.with_config(config.clone());
            }
            group = group.add(htmx);
        }

        if let Some(theme) = &self.theme {
            group = group.add(ThemePlugin::from_settings(theme.clone()));
        }
        if self.charts {
            group = group.add(
                ChartsPlugin::default()
                    .with_cdn(&assets.cdn)
                    .with_version(&assets.chartjs_version),
            );
        }
        if let Some(provider) = &self.analytics {
            group = group.add(AnalyticsPlugin::new(provider.clone()));
        }
        if let Some(seo) = &self.seo {
            group = group.add(SeoPlugin::new(seo.clone()));
        }

        group
    }
}
