//! Chart.js integration.
//!
//! [`ChartsPlugin`] loads Chart.js and registers an `x-chart` directive:
//! the directive evaluates its expression to a Chart.js config, draws the
//! chart on the element (or its first `<canvas>`), and destroys it when
//! Alpine tears the element down. The config is unwrapped with `Alpine.raw`
//! first since Chart.js writes into it. Elements without a canvas are skipped.

use crate::alpine::AlpinePlugin;
use forgeui_alpine::Directive;
use forgeui_alpine::directives::x_data;
use forgeui_html::Attrs;
use forgeui_js::{JsObject, JsValue, RawJs};
use forgeui_plugin::{AssetSlot, Plugin, PluginId, Registry, RegistryError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default Chart.js version.
pub const DEFAULT_CHARTJS_VERSION: &str = "4.4.7";

const CHART_DIRECTIVE: &str = "(el, { expression }, { evaluate, cleanup }) => { \
    const canvas = el instanceof HTMLCanvasElement ? el : el.querySelector('canvas'); \
    if (!canvas) return; \
    const chart = new Chart(canvas, Alpine.raw(evaluate(expression))); \
    cleanup(() => chart.destroy()); }";

/// Chart.js chart type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    /// `line`.
    #[default]
    Line,
    /// `bar`.
    Bar,
    /// `pie`.
    Pie,
    /// `doughnut`.
    Doughnut,
    /// `radar`.
    Radar,
    /// `polarArea`.
    PolarArea,
    /// `scatter`.
    Scatter,
    /// `bubble`.
    Bubble,
}

/// One series of a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend label.
    pub label: String,
    /// Values, one per label.
    pub data: Vec<f64>,
    /// Fill color(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Line/border color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Fill the area under a line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    /// Bezier curve tension for line charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

impl Dataset {
    /// A dataset with a label and values.
    #[must_use]
    pub fn new(label: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
            ..Self::default()
        }
    }

    /// Sets the background color.
    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the border color.
    #[must_use]
    pub fn with_border(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }
}

/// `data` block of a chart config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Category labels.
    pub labels: Vec<String>,
    /// Series.
    pub datasets: Vec<Dataset>,
}

/// A Chart.js configuration object.
///
/// ```
/// use forgeui_plugins::charts::{ChartConfig, ChartKind, Dataset, chart_attrs};
///
/// let config = ChartConfig::new(ChartKind::Bar)
///     .with_labels(["Mon", "Tue"])
///     .with_dataset(Dataset::new("Visits", [3.0, 5.5]));
///
/// let attrs = chart_attrs(&config);
/// assert_eq!(
///     attrs.value("x-data"),
///     Some("{ config: { type: 'bar', data: { labels: ['Mon', 'Tue'], datasets: [{ label: 'Visits', data: [3, 5.5] }] } } }")
/// );
/// assert_eq!(attrs.value("x-chart"), Some("config"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart type.
    #[serde(rename = "type")]
    pub kind: ChartKind,
    /// Labels and datasets.
    pub data: ChartData,
    /// Free-form Chart.js options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl ChartConfig {
    /// An empty chart of the given type.
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Sets the category labels.
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a dataset.
    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.data.datasets.push(dataset);
        self
    }

    /// Sets the Chart.js `options` object.
    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }
}

/// `x-data="{ config: ... }" x-chart="config"`, for a `<canvas>` or its wrapper.
#[must_use]
pub fn chart_attrs(config: &ChartConfig) -> Attrs {
    x_data(&JsObject::new().with("config", JsValue::from_serialize(config)))
        .with("x-chart", "config")
}

/// Loads Chart.js and registers `x-chart`. Requires [`AlpinePlugin`].
#[derive(Debug, Clone)]
pub struct ChartsPlugin {
    cdn: String,
    version: String,
}

impl Default for ChartsPlugin {
    fn default() -> Self {
        Self {
            cdn: forgeui_alpine::scripts::DEFAULT_CDN.to_string(),
            version: DEFAULT_CHARTJS_VERSION.to_string(),
        }
    }
}

impl ChartsPlugin {
    /// Sets the CDN base URL.
    #[must_use]
    pub fn with_cdn(mut self, cdn: impl Into<String>) -> Self {
        self.cdn = cdn.into();
        self
    }

    /// Sets the Chart.js version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// `{cdn}/chart.js@{version}/dist/chart.umd.min.js`.
    #[must_use]
    pub fn script_url(&self) -> String {
        format!(
            "{}/chart.js@{}/dist/chart.umd.min.js",
            self.cdn.trim_end_matches('/'),
            self.version
        )
    }
}

impl Plugin for ChartsPlugin {
    fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        registry.add_script(self.script_url(), AssetSlot::Library);
        registry.add_directive(Directive::new("chart", RawJs::new(CHART_DIRECTIVE)))
    }

    fn dependencies(&self) -> Vec<PluginId> {
        vec![PluginId::of::<AlpinePlugin>()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_serializes_like_chartjs_expects() {
        let config = ChartConfig::new(ChartKind::PolarArea)
            .with_labels(["a"])
            .with_dataset(Dataset::new("s", [1.0]).with_background("#f00").with_border("#0f0"))
            .with_options(serde_json::json!({ "responsive": true }));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "polarArea");
        assert_eq!(json["data"]["datasets"][0]["backgroundColor"], "#f00");
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "#0f0");
        assert!(json["data"]["datasets"][0].get("fill").is_none());
        assert_eq!(json["options"]["responsive"], true);
    }

    #[test]
    fn plugin_registers_script_and_directive() {
        let mut registry = Registry::new();
        registry
            .add_plugins(AlpinePlugin::default())
            .add_plugins(ChartsPlugin::default().with_version("4.4.0"));
        registry.finish().unwrap();

        assert_eq!(registry.directives().len(), 1);
        assert_eq!(registry.directives()[0].name(), "chart");
        let init = registry.init_script().unwrap();
        assert!(init.contains("Alpine.directive('chart', (el, { expression }, { evaluate, cleanup }) =>"));
        assert!(init.contains("chart.destroy()"));
        assert!(init.contains("if (!canvas) return;"));
        assert!(init.contains("new Chart(canvas, Alpine.raw(evaluate(expression)))"));
        assert!(!init.contains("new Chart(canvas, evaluate("));
        assert!(
            registry
                .head_html()
                .unwrap()
                .contains("https://cdn.jsdelivr.net/npm/chart.js@4.4.0/dist/chart.umd.min.js")
        );
    }
}
