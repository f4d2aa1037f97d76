//! CDN script tags for htmx and its extensions.
//!
//! Extensions register against the global `htmx` object, so unlike Alpine
//! plugins they load after the core.

use forgeui_html::Element;

/// Default npm CDN.
pub const DEFAULT_CDN: &str = "https://cdn.jsdelivr.net/npm";

/// Default htmx version.
pub const DEFAULT_VERSION: &str = "2.0.4";

/// Default version for `htmx-ext-*` packages.
pub const DEFAULT_EXT_VERSION: &str = "2.0.2";

/// `{cdn}/htmx.org@{version}/dist/htmx.min.js`.
#[must_use]
pub fn core_script_url(cdn: &str, version: &str) -> String {
    format!("{}/htmx.org@{version}/dist/htmx.min.js", cdn.trim_end_matches('/'))
}

/// `{cdn}/htmx-ext-{name}@{version}/{name}.js`.
#[must_use]
pub fn extension_script_url(cdn: &str, name: &str, version: &str) -> String {
    format!("{}/htmx-ext-{name}@{version}/{name}.js", cdn.trim_end_matches('/'))
}

/// The core `<script>` followed by one per extension, duplicates skipped.
#[must_use]
pub fn scripts<S: AsRef<str>>(cdn: &str, version: &str, ext_version: &str, extensions: &[S]) -> Vec<Element> {
    let mut tags = vec![Element::script_src(core_script_url(cdn, version))];
    let mut seen: Vec<&str> = Vec::new();
    for name in extensions {
        let name = name.as_ref();
        if seen.contains(&name) {
            continue;
        }
        seen.push(name);
        tags.push(Element::script_src(extension_script_url(cdn, name, ext_version)));
    }
    tags
}
