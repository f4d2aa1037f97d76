//! Logging plugin.
//!
//! Provides [`TracingPlugin`], which installs a `tracing` subscriber and
//! exposes its configuration as a resource.
//!
//! # Lifecycle
//!
//! - **`build()`** registers the [`TracingConfig`] resource so other plugins
//!   can read the intended configuration during build.
//! - **`ready()`** initializes the subscriber. Installing a second subscriber
//!   in the same process is silently skipped, so several registries (or
//!   tests) can each carry a `TracingPlugin`.
//!
//! # Example
//!
//! ```
//! use forgeui_plugin::Registry;
//! use forgeui_plugins::{TracingConfig, TracingFormat, TracingPlugin};
//! use tracing::Level;
//!
//! let mut registry = Registry::new();
//! registry.add_plugins(
//!     TracingPlugin::default()
//!         .with_level(Level::DEBUG)
//!         .with_format(TracingFormat::Compact),
//! );
//! registry.finish()?;
//!
//! let config = registry.resource::<TracingConfig>().copied();
//! assert_eq!(config.map(|c| c.level), Some(Level::DEBUG));
//! # Ok::<(), forgeui_plugin::RegistryError>(())
//! ```

use forgeui_plugin::{Plugin, Registry, RegistryError};
use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// ─────────────────────────────────────────────────────────────────────────────
// TracingFormat
// ─────────────────────────────────────────────────────────────────────────────

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingFormat {
    /// Human-readable multi-line output (default).
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
    /// JSON structured output for log aggregation.
    Json,
}

// ─────────────────────────────────────────────────────────────────────────────
// TracingConfig Resource
// ─────────────────────────────────────────────────────────────────────────────

/// The configured level and format, readable by other plugins.
#[derive(Debug, Clone, Copy)]
pub struct TracingConfig {
    /// The configured log level.
    pub level: Level,
    /// The configured output format.
    pub format: TracingFormat,
}

// ─────────────────────────────────────────────────────────────────────────────
// TracingPlugin
// ─────────────────────────────────────────────────────────────────────────────

/// Tracing and logging plugin.
///
/// # Resources Provided
///
/// | Resource | Description |
/// |----------|-------------|
/// | [`TracingConfig`] | Level and format |
///
/// # Configuration Options
///
/// ```
/// use forgeui_plugins::{TracingFormat, TracingPlugin};
/// use tracing::Level;
///
/// // Development: pretty output with span enter/exit
/// let dev = TracingPlugin::default()
///     .with_level(Level::DEBUG)
///     .with_span_events(true);
///
/// // Production: JSON with per-crate levels
/// let prod = TracingPlugin::default()
///     .with_format(TracingFormat::Json)
///     .with_env_filter("forgeui_plugin=info,forgeui_js=warn");
/// ```
#[derive(Debug, Clone)]
pub struct TracingPlugin {
    level: Level,
    format: TracingFormat,
    /// Target-specific directives (e.g. `forgeui_plugin=debug`).
    env_filter: Option<String>,
    span_events: bool,
}

impl Default for TracingPlugin {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: TracingFormat::Pretty,
            env_filter: None,
            span_events: false,
        }
    }
}

impl TracingPlugin {
    /// Creates a new `TracingPlugin` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum log level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets a custom filter string: `target=level,target=level,...`.
    ///
    /// An unparsable filter falls back to the plain level.
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables span enter/exit events in output.
    #[must_use]
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        match &self.env_filter {
            Some(filter) => {
                EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
            }
            None => EnvFilter::new(self.level.as_str()),
        }
    }
}

impl Plugin for TracingPlugin {
    fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        registry.insert_resource(TracingConfig {
            level: self.level,
            format: self.format,
        });
        Ok(())
    }

    fn ready(&self, _registry: &mut Registry) -> Result<(), RegistryError> {
        let env_filter = self.env_filter();
        let span_events = if self.span_events {
            FmtSpan::ENTER | FmtSpan::EXIT
        } else {
            FmtSpan::NONE
        };

        // try_init().ok(): a subscriber may already be installed
        match self.format {
            TracingFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_span_events(span_events),
                    )
                    .try_init()
                    .ok();
            }
            TracingFormat::Compact => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_span_events(span_events),
                    )
                    .try_init()
                    .ok();
            }
            TracingFormat::Json => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_span_events(span_events),
                    )
                    .try_init()
                    .ok();
            }
        }

        tracing::info!(
            level = %self.level,
            format = ?self.format,
            "TracingPlugin initialized"
        );
        Ok(())
    }

    fn cleanup(&self, _registry: &mut Registry) {
        tracing::info!("TracingPlugin shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_format_default_is_pretty() {
        assert_eq!(TracingFormat::default(), TracingFormat::Pretty);
    }

    #[test]
    fn tracing_plugin_builders() {
        let plugin = TracingPlugin::new()
            .with_level(Level::DEBUG)
            .with_format(TracingFormat::Json)
            .with_env_filter("forgeui_plugin=debug")
            .with_span_events(true);
        assert_eq!(plugin.level, Level::DEBUG);
        assert_eq!(plugin.format, TracingFormat::Json);
        assert_eq!(plugin.env_filter.as_deref(), Some("forgeui_plugin=debug"));
        assert!(plugin.span_events);
    }

    #[test]
    fn tracing_plugin_registers_resource() {
        let mut registry = Registry::new();
        registry.add_plugins(TracingPlugin::default());
        registry.finish().unwrap();
        assert!(registry.contains_resource::<TracingConfig>());
    }

    #[test]
    fn format_names() {
        let format: TracingFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, TracingFormat::Json);
    }
}
