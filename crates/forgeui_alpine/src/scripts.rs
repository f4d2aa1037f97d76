//! CDN script tags for Alpine and its official plugins.
//!
//! Alpine plugins register themselves through `alpine:init`, so their
//! scripts must be parsed before the core script runs. All tags are
//! `defer`red, which preserves document order; [`scripts`] therefore emits
//! plugins first and the core last.

use forgeui_html::Element;
use serde::{Deserialize, Serialize};

/// Default npm CDN.
pub const DEFAULT_CDN: &str = "https://cdn.jsdelivr.net/npm";

/// Default Alpine version.
pub const DEFAULT_VERSION: &str = "3.14.9";

/// An official `@alpinejs/*` plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlpineExt {
    /// `x-mask` input masking.
    Mask,
    /// `x-intersect` viewport observation.
    Intersect,
    /// `x-resize` element size observation.
    Resize,
    /// `$persist` local storage persistence.
    Persist,
    /// `x-trap` and `$focus`.
    Focus,
    /// `x-collapse` height transitions.
    Collapse,
    /// `x-anchor` positioning.
    Anchor,
    /// `Alpine.morph` DOM morphing.
    Morph,
    /// `x-sort` drag-and-drop sorting.
    Sort,
}

/// Error returned when parsing an unknown plugin name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Alpine plugin: {0}")]
pub struct UnknownExtension(pub String);

impl AlpineExt {
    /// Every official plugin.
    pub const ALL: [AlpineExt; 9] = [
        Self::Mask,
        Self::Intersect,
        Self::Resize,
        Self::Persist,
        Self::Focus,
        Self::Collapse,
        Self::Anchor,
        Self::Morph,
        Self::Sort,
    ];

    /// Short name (`collapse`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Mask => "mask",
            Self::Intersect => "intersect",
            Self::Resize => "resize",
            Self::Persist => "persist",
            Self::Focus => "focus",
            Self::Collapse => "collapse",
            Self::Anchor => "anchor",
            Self::Morph => "morph",
            Self::Sort => "sort",
        }
    }

    /// npm package name (`@alpinejs/collapse`).
    #[must_use]
    pub fn package(self) -> String {
        format!("@alpinejs/{}", self.name())
    }
}

impl core::str::FromStr for AlpineExt {
    type Err = UnknownExtension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ext| ext.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownExtension(s.to_string()))
    }
}

impl core::fmt::Display for AlpineExt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// `{cdn}/alpinejs@{version}/dist/cdn.min.js`.
#[must_use]
pub fn core_script_url(cdn: &str, version: &str) -> String {
    format!("{}/alpinejs@{version}/dist/cdn.min.js", cdn.trim_end_matches('/'))
}

/// `{cdn}/@alpinejs/{name}@{version}/dist/cdn.min.js`.
#[must_use]
pub fn plugin_script_url(cdn: &str, ext: AlpineExt, version: &str) -> String {
    format!(
        "{}/{}@{version}/dist/cdn.min.js",
        cdn.trim_end_matches('/'),
        ext.package()
    )
}

/// Deferred `<script>` tags: each plugin once, in the given order, then the core.
#[must_use]
pub fn scripts(cdn: &str, version: &str, plugins: &[AlpineExt]) -> Vec<Element> {
    let mut seen: Vec<AlpineExt> = Vec::new();
    for &ext in plugins {
        if !seen.contains(&ext) {
            seen.push(ext);
        }
    }

    seen.into_iter()
        .map(|ext| Element::script_src(plugin_script_url(cdn, ext, version)).flag("defer"))
        .chain(core::iter::once(
            Element::script_src(core_script_url(cdn, version)).flag("defer"),
        ))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls() {
        assert_eq!(
            core_script_url("https://cdn.example.com/npm/", "3.14.9"),
            "https://cdn.example.com/npm/alpinejs@3.14.9/dist/cdn.min.js"
        );
        assert_eq!(
            plugin_script_url(DEFAULT_CDN, AlpineExt::Collapse, "3.14.9"),
            "https://cdn.jsdelivr.net/npm/@alpinejs/collapse@3.14.9/dist/cdn.min.js"
        );
    }

    #[test]
    fn plugins_precede_core_and_are_deduplicated() {
        let tags = scripts(
            DEFAULT_CDN,
            DEFAULT_VERSION,
            &[AlpineExt::Focus, AlpineExt::Persist, AlpineExt::Focus],
        );
        assert_eq!(tags.len(), 3);
        assert!(tags[0].render().contains("@alpinejs/focus"));
        assert!(tags[1].render().contains("@alpinejs/persist"));
        assert!(tags[2].render().contains("/alpinejs@"));
        assert!(tags.iter().all(|tag| tag.attributes().contains("defer")));
    }

    #[test]
    fn parse_names() {
        assert_eq!("Collapse".parse::<AlpineExt>(), Ok(AlpineExt::Collapse));
        assert_eq!(
            "tooltip".parse::<AlpineExt>(),
            Err(UnknownExtension("tooltip".into()))
        );
    }

    #[test]
    fn serde_names_are_lowercase() {
        let ext: AlpineExt = serde_json::from_str("\"intersect\"").unwrap();
        assert_eq!(ext, AlpineExt::Intersect);
        assert_eq!(serde_json::to_string(&AlpineExt::Sort).unwrap(), "\"sort\"");
    }
}
