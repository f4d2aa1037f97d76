//! Built-in plugins for ForgeUI.
//!
//! This crate provides the plugins most ForgeUI pages need:
//!
//! - [`TracingPlugin`] - Logging via the `tracing` crate
//! - [`AlpinePlugin`] - Alpine.js and its official plugins
//! - [`HtmxPlugin`] - htmx, its extensions and `htmx-config`
//! - [`ThemePlugin`] - Light/dark mode without a flash of the wrong theme
//! - [`ChartsPlugin`] - Chart.js behind an `x-chart` directive
//! - [`AnalyticsPlugin`] - Plausible, Google Analytics or Umami with `$track`
//! - [`SeoPlugin`] - Site-wide SEO defaults and per-page [`SeoMeta`]
//! - [`DefaultPlugins`] / [`MinimalPlugins`] - Ready-made bundles
//! - [`ForgeConfig`] - The same setup described as JSON
//!
//! # Example
//!
//! ```
//! use forgeui_plugin::{PluginGroup, Registry};
//! use forgeui_plugins::{MinimalPlugins, ThemePlugin};
//!
//! let mut registry = Registry::new();
//! registry.add_plugins(MinimalPlugins.build().add(ThemePlugin::default()));
//! registry.finish()?;
//!
//! let head = registry.head_html()?;
//! assert!(head.contains("alpinejs@"));
//! assert!(head.contains("Alpine.store('theme'"));
//! # Ok::<(), forgeui_plugin::RegistryError>(())
//! ```

mod alpine;
pub mod analytics;
pub mod charts;
mod config;
mod htmx;
pub mod seo;
mod theme;
mod tracing_plugin;

// Re-export plugins
pub use alpine::AlpinePlugin;
pub use analytics::AnalyticsPlugin;
pub use charts::ChartsPlugin;
pub use htmx::HtmxPlugin;
pub use seo::SeoPlugin;
pub use theme::ThemePlugin;
pub use tracing_plugin::{TracingFormat, TracingPlugin};

// Re-export resources
pub use alpine::AlpineSettings;
pub use seo::SeoDefaults;
pub use theme::ThemeSettings;
pub use tracing_plugin::TracingConfig;

// Re-export everything else
pub use analytics::{AnalyticsProvider, track_attrs};
pub use charts::{ChartConfig, ChartKind, Dataset, chart_attrs};
pub use config::{
    AlpineSection, AssetsConfig, ConfigError, ForgeConfig, HtmxSection, TracingSection,
};
pub use seo::{SeoMeta, TwitterCard};
pub use theme::{ThemeMode, theme_toggle_attrs};

use forgeui_plugin::{PluginGroup, PluginGroupBuilder};

/// Default plugins for most ForgeUI pages.
///
/// Includes:
/// - [`TracingPlugin`] - Logging
/// - [`AlpinePlugin`] - Alpine.js
/// - [`HtmxPlugin`] - htmx
///
/// # Customization
///
/// ```
/// use forgeui_plugin::PluginGroup;
/// use forgeui_plugins::{DefaultPlugins, ThemePlugin, TracingPlugin};
///
/// let group = DefaultPlugins
///     .build()
///     .disable::<TracingPlugin>()
///     .add(ThemePlugin::default());
/// assert_eq!(group.len(), 3);
/// ```
pub struct DefaultPlugins;

impl PluginGroup for DefaultPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::new()
            .add(TracingPlugin::default())
            .add(AlpinePlugin::default())
            .add(HtmxPlugin::default())
    }
}

/// Alpine.js only.
///
/// Does not include tracing, making it suitable for unit tests
/// that don't need logging output.
pub struct MinimalPlugins;

impl PluginGroup for MinimalPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::new().add(AlpinePlugin::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgeui_plugin::Registry;

    #[test]
    fn default_plugins_builds() {
        let builder = DefaultPlugins.build();
        assert_eq!(builder.len(), 3);
        assert!(builder.contains::<TracingPlugin>());
    }

    #[test]
    fn minimal_plugins_builds() {
        let builder = MinimalPlugins.build();
        assert_eq!(builder.len(), 1);
        assert!(builder.contains::<AlpinePlugin>());
    }

    #[test]
    fn registry_with_minimal_plugins() {
        let mut registry = Registry::new();
        registry.add_plugins(MinimalPlugins.build());
        registry.finish().unwrap();

        assert!(registry.contains_resource::<AlpineSettings>());
        assert!(!registry.contains_resource::<TracingConfig>());
        assert_eq!(registry.init_script().unwrap(), "");
    }
}
