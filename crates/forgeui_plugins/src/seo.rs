//! Page metadata: `<title>`, description, Open Graph, Twitter cards,
//! canonical links and JSON-LD.
//!
//! [`SeoPlugin`] stores site-wide [`SeoDefaults`] and emits the tags that
//! never change between pages. Per-page tags come from [`SeoMeta`], usually
//! after [`SeoDefaults::page`] has filled in whatever the page left out.

use forgeui_html::Element;
use forgeui_plugin::{AssetSlot, Plugin, Registry, RegistryError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Site-wide SEO settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoDefaults {
    /// `og:site_name`.
    pub site_name: String,
    /// Title template; `%s` is replaced with the page title.
    pub title_template: String,
    /// Description for pages that set none.
    pub description: Option<String>,
    /// Share image for pages that set none.
    pub image: Option<String>,
    /// `@handle` for `twitter:site`.
    pub twitter_handle: Option<String>,
}

impl Default for SeoDefaults {
    fn default() -> Self {
        Self {
            site_name: String::new(),
            title_template: "%s".to_string(),
            description: None,
            image: None,
            twitter_handle: None,
        }
    }
}

impl SeoDefaults {
    /// Defaults for a site, with `%s | <site>` as the title template.
    #[must_use]
    pub fn new(site_name: impl Into<String>) -> Self {
        let site_name = site_name.into();
        Self {
            title_template: format!("%s | {site_name}"),
            site_name,
            ..Self::default()
        }
    }

    /// Applies the title template.
    #[must_use]
    pub fn title(&self, page_title: &str) -> String {
        self.title_template.replace("%s", page_title)
    }

    /// Completes `meta` with these defaults.
    ///
    /// The title goes through the template; description and image are only
    /// filled when the page has none.
    #[must_use]
    pub fn page(&self, mut meta: SeoMeta) -> SeoMeta {
        meta.title = Some(match meta.title.take() {
            Some(title) => self.title(&title),
            None => self.site_name.clone(),
        });
        if meta.description.is_none() {
            meta.description.clone_from(&self.description);
        }
        if meta.og_image.is_none() {
            meta.og_image.clone_from(&self.image);
        }
        meta
    }

    fn site_elements(&self) -> Vec<Element> {
        let mut elements = Vec::new();
        if !self.site_name.is_empty() {
            elements.push(Element::meta_property("og:site_name", &self.site_name));
        }
        if let Some(handle) = &self.twitter_handle {
            elements.push(Element::meta_name("twitter:site", handle));
        }
        elements
    }
}

/// `twitter:card` type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    /// Small square image.
    #[default]
    Summary,
    /// Wide image above the text.
    SummaryLargeImage,
}

impl TwitterCard {
    /// The `content` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
        }
    }
}

/// Metadata for one page.
///
/// ```
/// use forgeui_plugins::seo::{SeoDefaults, SeoMeta};
///
/// let site = SeoDefaults::new("Forge");
/// let meta = site.page(SeoMeta::new().title("Pricing").description("Plans & prices"));
///
/// let html = meta.render();
/// assert!(html.starts_with("<title>Pricing | Forge</title>\n"));
/// assert!(html.contains(r#"<meta name="description" content="Plans &amp; prices">"#));
/// assert!(html.contains(r#"<meta property="og:title" content="Pricing | Forge">"#));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeoMeta {
    title: Option<String>,
    description: Option<String>,
    canonical: Option<String>,
    robots: Option<String>,
    keywords: Vec<String>,
    og_type: Option<String>,
    og_image: Option<String>,
    og_url: Option<String>,
    twitter_card: Option<TwitterCard>,
    json_ld: Vec<Value>,
}

impl SeoMeta {
    /// Empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `<title>` and `og:title`/`twitter:title`.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// `description` and its Open Graph/Twitter variants.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// `<link rel="canonical">`.
    #[must_use]
    pub fn canonical(mut self, url: impl Into<String>) -> Self {
        self.canonical = Some(url.into());
        self
    }

    /// `robots`, e.g. `noindex, nofollow`.
    #[must_use]
    pub fn robots(mut self, robots: impl Into<String>) -> Self {
        self.robots = Some(robots.into());
        self
    }

    /// Appends a keyword.
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// `og:type`, defaults to `website` when rendering.
    #[must_use]
    pub fn og_type(mut self, kind: impl Into<String>) -> Self {
        self.og_type = Some(kind.into());
        self
    }

    /// `og:image` and `twitter:image`.
    #[must_use]
    pub fn og_image(mut self, url: impl Into<String>) -> Self {
        self.og_image = Some(url.into());
        self
    }

    /// `og:url`.
    #[must_use]
    pub fn og_url(mut self, url: impl Into<String>) -> Self {
        self.og_url = Some(url.into());
        self
    }

    /// `twitter:card`. Defaults to a large image card when an image is set.
    #[must_use]
    pub fn twitter_card(mut self, card: TwitterCard) -> Self {
        self.twitter_card = Some(card);
        self
    }

    /// Adds a structured-data document.
    #[must_use]
    pub fn json_ld(mut self, document: Value) -> Self {
        self.json_ld.push(document);
        self
    }

    /// Returns the title, if set.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// All tags, in document order.
    #[must_use]
    pub fn to_elements(&self) -> Vec<Element> {
        let mut out = Vec::new();

        if let Some(title) = &self.title {
            out.push(Element::new("title").text(title));
        }
        if let Some(description) = &self.description {
            out.push(Element::meta_name("description", description));
        }
        if !self.keywords.is_empty() {
            out.push(Element::meta_name("keywords", self.keywords.join(", ")));
        }
        if let Some(robots) = &self.robots {
            out.push(Element::meta_name("robots", robots));
        }
        if let Some(canonical) = &self.canonical {
            out.push(
                Element::new("link")
                    .attr("rel", "canonical")
                    .attr("href", canonical),
            );
        }

        // Open Graph
        out.push(Element::meta_property(
            "og:type",
            self.og_type.as_deref().unwrap_or("website"),
        ));
        if let Some(title) = &self.title {
            out.push(Element::meta_property("og:title", title));
        }
        if let Some(description) = &self.description {
            out.push(Element::meta_property("og:description", description));
        }
        if let Some(url) = self.og_url.as_ref().or(self.canonical.as_ref()) {
            out.push(Element::meta_property("og:url", url));
        }
        if let Some(image) = &self.og_image {
            out.push(Element::meta_property("og:image", image));
        }

        // Twitter
        let card = self.twitter_card.unwrap_or(if self.og_image.is_some() {
            TwitterCard::SummaryLargeImage
        } else {
            TwitterCard::Summary
        });
        out.push(Element::meta_name("twitter:card", card.as_str()));
        if let Some(title) = &self.title {
            out.push(Element::meta_name("twitter:title", title));
        }
        if let Some(description) = &self.description {
            out.push(Element::meta_name("twitter:description", description));
        }
        if let Some(image) = &self.og_image {
            out.push(Element::meta_name("twitter:image", image));
        }

        for document in &self.json_ld {
            match serde_json::to_string(document) {
                Ok(json) => out.push(
                    Element::new("script")
                        .attr("type", "application/ld+json")
                        .raw(json),
                ),
                Err(error) => tracing::warn!(%error, "Skipping JSON-LD document"),
            }
        }

        out
    }

    /// Renders [`to_elements`](Self::to_elements), one tag per line.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_elements()
            .iter()
            .map(Element::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Stores [`SeoDefaults`] and emits the site-wide tags.
#[derive(Debug, Clone, Default)]
pub struct SeoPlugin {
    defaults: SeoDefaults,
}

impl SeoPlugin {
    /// Uses the given defaults.
    #[must_use]
    pub fn new(defaults: SeoDefaults) -> Self {
        Self { defaults }
    }
}

impl Plugin for SeoPlugin {
    fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        for element in self.defaults.site_elements() {
            registry.add_head(element, AssetSlot::Meta);
        }
        registry.insert_resource(self.defaults.clone());
        Ok(())
    }
}
