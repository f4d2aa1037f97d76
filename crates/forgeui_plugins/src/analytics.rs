//! Privacy-friendly and classic web analytics.
//!
//! [`AnalyticsPlugin`] loads the provider's script and gives templates two
//! provider-independent ways to record events:
//!
//! - the `$track(name, props)` magic, for use inside Alpine expressions
//! - the `x-track` directive: `x-track:click="'signup'"` records `signup`
//!   whenever the element is clicked

use crate::alpine::AlpinePlugin;
use forgeui_alpine::{Directive, Magic};
use forgeui_html::Attrs;
use forgeui_js::{JsObject, RawJs, build_object, quote_string};
use forgeui_plugin::{Asset, AssetSlot, Plugin, PluginId, Registry, RegistryError};
use serde::{Deserialize, Serialize};

/// Supported analytics backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum AnalyticsProvider {
    /// Plausible Analytics.
    Plausible {
        /// Site domain as configured in Plausible.
        domain: String,
        /// Script URL, for self-hosted instances.
        #[serde(default = "default_plausible_src")]
        script_src: String,
    },
    /// Google Analytics 4 via `gtag.js`.
    GoogleAnalytics {
        /// `G-XXXXXXX`.
        measurement_id: String,
    },
    /// Umami.
    Umami {
        /// Website id from the Umami dashboard.
        website_id: String,
        /// Script URL, for self-hosted instances.
        #[serde(default = "default_umami_src")]
        script_src: String,
    },
}

fn default_plausible_src() -> String {
    "https://plausible.io/js/script.js".to_string()
}

fn default_umami_src() -> String {
    "https://cloud.umami.is/script.js".to_string()
}

impl AnalyticsProvider {
    /// Plausible with the hosted script.
    #[must_use]
    pub fn plausible(domain: impl Into<String>) -> Self {
        Self::Plausible {
            domain: domain.into(),
            script_src: default_plausible_src(),
        }
    }

    /// Google Analytics 4.
    #[must_use]
    pub fn google_analytics(measurement_id: impl Into<String>) -> Self {
        Self::GoogleAnalytics {
            measurement_id: measurement_id.into(),
        }
    }

    /// Umami with the hosted script.
    #[must_use]
    pub fn umami(website_id: impl Into<String>) -> Self {
        Self::Umami {
            website_id: website_id.into(),
            script_src: default_umami_src(),
        }
    }

    /// Script assets for this provider.
    #[must_use]
    pub fn assets(&self) -> Vec<Asset> {
        match self {
            Self::Plausible { domain, script_src } => vec![
                Asset::script(script_src.as_str(), AssetSlot::Library)
                    .defer()
                    .with_attr("data-domain", domain),
            ],
            Self::GoogleAnalytics { measurement_id } => vec![
                Asset::script(
                    format!("https://www.googletagmanager.com/gtag/js?id={measurement_id}"),
                    AssetSlot::Library,
                )
                .async_(),
                Asset::inline_script(
                    format!(
                        "window.dataLayer = window.dataLayer || []; \
                         function gtag(){{dataLayer.push(arguments);}} \
                         gtag('js', new Date()); gtag('config', {});",
                        quote_string(measurement_id)
                    ),
                    AssetSlot::Library,
                ),
            ],
            Self::Umami {
                website_id,
                script_src,
            } => vec![
                Asset::script(script_src.as_str(), AssetSlot::Library)
                    .defer()
                    .with_attr("data-website-id", website_id),
            ],
        }
    }

    /// JavaScript statement recording `name` with `props`, both JS expressions.
    #[must_use]
    pub fn track_call(&self, name: &str, props: &str) -> String {
        match self {
            Self::Plausible { .. } => {
                format!("window.plausible && window.plausible({name}, {{ props: {props} }})")
            }
            Self::GoogleAnalytics { .. } => {
                format!("window.gtag && window.gtag('event', {name}, {props})")
            }
            Self::Umami { .. } => {
                format!("window.umami && window.umami.track({name}, {props})")
            }
        }
    }

    fn track_magic(&self) -> Magic {
        Magic::new(
            "track",
            RawJs::new(format!(
                "() => (name, props = {{}}) => {{ {} }}",
                self.track_call("name", "props")
            )),
        )
    }

    fn track_directive(&self) -> Directive {
        Directive::new(
            "track",
            RawJs::new(format!(
                "(el, {{ value, expression }}, {{ evaluate, cleanup }}) => {{ \
                 const event = value || 'click'; \
                 const handler = () => {{ \
                 const r = evaluate(expression); \
                 const name = typeof r === 'string' ? r : r.name; \
                 const props = typeof r === 'string' ? {{}} : (r.props || {{}}); \
                 {}; }}; \
                 el.addEventListener(event, handler); \
                 cleanup(() => el.removeEventListener(event, handler)); }}",
                self.track_call("name", "props")
            )),
        )
    }
}

/// `x-track:<event>` for recording `name` (with optional props) on a DOM event.
///
/// ```
/// use forgeui_js::JsObject;
/// use forgeui_plugins::analytics::track_attrs;
///
/// assert_eq!(track_attrs("click", "signup", &JsObject::new()).render(), r#" x-track:click="&#39;signup&#39;""#);
/// assert_eq!(
///     track_attrs("submit", "order", &JsObject::new().with("plan", "pro")).value("x-track:submit"),
///     Some("{ name: 'order', props: { plan: 'pro' } }")
/// );
/// ```
#[must_use]
pub fn track_attrs(event: &str, name: &str, props: &JsObject) -> Attrs {
    let expression = if props.is_empty() {
        quote_string(name)
    } else {
        build_object(
            &JsObject::new().with("name", name).with("props", props.clone()),
            "",
        )
    };
    Attrs::single(format!("x-track:{event}"), expression)
}

/// Analytics plugin. Requires [`AlpinePlugin`].
#[derive(Debug, Clone)]
pub struct AnalyticsPlugin {
    provider: AnalyticsProvider,
}

impl AnalyticsPlugin {
    /// Tracks with the given provider.
    #[must_use]
    pub fn new(provider: AnalyticsProvider) -> Self {
        Self { provider }
    }

    /// Returns the configured provider.
    #[must_use]
    pub fn provider(&self) -> &AnalyticsProvider {
        &self.provider
    }
}

impl Plugin for AnalyticsPlugin {
    fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        for asset in self.provider.assets() {
            registry.add_asset(asset);
        }
        registry.add_magic(self.provider.track_magic())?;
        registry.add_directive(self.provider.track_directive())
    }

    fn dependencies(&self) -> Vec<PluginId> {
        vec![PluginId::of::<AlpinePlugin>()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head(provider: AnalyticsProvider) -> String {
        let mut registry = Registry::new();
        registry
            .add_plugins(AlpinePlugin::default())
            .add_plugins(AnalyticsPlugin::new(provider));
        registry.finish().unwrap();
        registry.head_html().unwrap()
    }

    #[test]
    fn plausible_script() {
        let html = head(AnalyticsProvider::plausible("example.com"));
        assert!(html.contains(
            r#"<script src="https://plausible.io/js/script.js" defer data-domain="example.com"></script>"#
        ));
        assert!(html.contains("Alpine.magic('track', () => (name, props = {}) => { window.plausible && window.plausible(name, { props: props }) });"));
    }

    #[test]
    fn google_analytics_scripts_in_order() {
        let html = head(AnalyticsProvider::google_analytics("G-TEST"));
        let loader = html.find("gtag/js?id=G-TEST").unwrap();
        let config = html.find("gtag('config', 'G-TEST')").unwrap();
        assert!(loader < config);
        assert!(html.contains(" async></script>"));
    }

    #[test]
    fn umami_directive() {
        let html = head(AnalyticsProvider::umami("abc-123"));
        assert!(html.contains(r#"data-website-id="abc-123""#));
        assert!(html.contains("Alpine.directive('track', (el, { value, expression }, { evaluate, cleanup }) =>"));
        assert!(html.contains("window.umami && window.umami.track(name, props);"));
    }

    #[test]
    fn provider_from_config() {
        let provider: AnalyticsProvider =
            serde_json::from_str(r#"{ "provider": "plausible", "domain": "forge.dev" }"#).unwrap();
        assert_eq!(provider, AnalyticsProvider::plausible("forge.dev"));

        let provider: AnalyticsProvider =
            serde_json::from_str(r#"{ "provider": "google_analytics", "measurement_id": "G-1" }"#)
                .unwrap();
        assert_eq!(AnalyticsPlugin::new(provider).provider(), &AnalyticsProvider::google_analytics("G-1"));
    }
}
