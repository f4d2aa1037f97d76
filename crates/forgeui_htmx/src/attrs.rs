//! htmx attributes.
//!
//! Every builder returns an [`Attrs`] set, mirroring the Alpine directive
//! builders, so htmx and Alpine attributes merge freely on one element.

use crate::swap::Swap;
use crate::trigger::Trigger;
use forgeui_html::Attrs;
use forgeui_js::{JsObject, build_object};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP verb issued by an htmx request attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// `hx-get`.
    Get,
    /// `hx-post`.
    Post,
    /// `hx-put`.
    Put,
    /// `hx-patch`.
    Patch,
    /// `hx-delete`.
    Delete,
}

impl Method {
    /// The attribute name for this verb (`hx-post`).
    #[must_use]
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Get => "hx-get",
            Self::Post => "hx-post",
            Self::Put => "hx-put",
            Self::Patch => "hx-patch",
            Self::Delete => "hx-delete",
        }
    }
}

/// `hx-{method}="url"`.
#[must_use]
pub fn request(method: Method, url: &str) -> Attrs {
    Attrs::single(method.attribute(), url)
}

/// `hx-get="url"`.
#[must_use]
pub fn hx_get(url: &str) -> Attrs {
    request(Method::Get, url)
}

/// `hx-post="url"`.
#[must_use]
pub fn hx_post(url: &str) -> Attrs {
    request(Method::Post, url)
}

/// `hx-put="url"`.
#[must_use]
pub fn hx_put(url: &str) -> Attrs {
    request(Method::Put, url)
}

/// `hx-patch="url"`.
#[must_use]
pub fn hx_patch(url: &str) -> Attrs {
    request(Method::Patch, url)
}

/// `hx-delete="url"`.
#[must_use]
pub fn hx_delete(url: &str) -> Attrs {
    request(Method::Delete, url)
}

// ─────────────────────────────────────────────────────────────────────────────
// Targeting
// ─────────────────────────────────────────────────────────────────────────────

/// `hx-target="selector"` (`this`, `closest tr`, `#id`, ...).
#[must_use]
pub fn hx_target(selector: &str) -> Attrs {
    Attrs::single("hx-target", selector)
}

/// `hx-select="selector"` - the part of the response to swap in.
#[must_use]
pub fn hx_select(selector: &str) -> Attrs {
    Attrs::single("hx-select", selector)
}

/// `hx-select-oob="selectors"` - response parts swapped out of band.
#[must_use]
pub fn hx_select_oob(selectors: &str) -> Attrs {
    Attrs::single("hx-select-oob", selectors)
}

/// `hx-swap="style modifiers..."`.
#[must_use]
pub fn hx_swap(swap: &Swap) -> Attrs {
    Attrs::single("hx-swap", swap.to_string())
}

/// `hx-swap-oob="value"` on an element of a response (`true`, `outerHTML:#id`).
#[must_use]
pub fn hx_swap_oob(value: &str) -> Attrs {
    Attrs::single("hx-swap-oob", value)
}

/// `hx-include="selector"` - extra inputs sent with the request.
#[must_use]
pub fn hx_include(selector: &str) -> Attrs {
    Attrs::single("hx-include", selector)
}

/// `hx-indicator="selector"` - element that gets `htmx-request` while in flight.
#[must_use]
pub fn hx_indicator(selector: &str) -> Attrs {
    Attrs::single("hx-indicator", selector)
}

/// `hx-disabled-elt="selector"` - elements disabled while in flight.
#[must_use]
pub fn hx_disabled_elt(selector: &str) -> Attrs {
    Attrs::single("hx-disabled-elt", selector)
}

// ─────────────────────────────────────────────────────────────────────────────
// Behaviour
// ─────────────────────────────────────────────────────────────────────────────

/// Value of `hx-push-url` / `hx-replace-url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushUrl {
    /// Push the request URL.
    True,
    /// Disable history updates (overrides an inherited value).
    False,
    /// Push a specific URL.
    Url(String),
}

impl core::fmt::Display for PushUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::True => f.write_str("true"),
            Self::False => f.write_str("false"),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Value of `hx-params`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Params {
    /// `*` - every parameter.
    All,
    /// `none`.
    None,
    /// Only the listed parameters.
    Only(Vec<String>),
    /// Every parameter except the listed ones.
    Not(Vec<String>),
}

impl core::fmt::Display for Params {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::All => f.write_str("*"),
            Self::None => f.write_str("none"),
            Self::Only(names) => f.write_str(&names.join(",")),
            Self::Not(names) => write!(f, "not {}", names.join(",")),
        }
    }
}

/// How `hx-sync` resolves requests racing on the same element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Drop the new request if one is in flight (default).
    Drop,
    /// Abort the new request if another is issued.
    Abort,
    /// Abort the in-flight request and issue the new one.
    Replace,
    /// Queue only the first request.
    QueueFirst,
    /// Queue only the last request.
    QueueLast,
    /// Queue every request.
    QueueAll,
}

impl SyncStrategy {
    /// The htmx keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Abort => "abort",
            Self::Replace => "replace",
            Self::QueueFirst => "queue first",
            Self::QueueLast => "queue last",
            Self::QueueAll => "queue all",
        }
    }
}

/// `hx-trigger="..."`.
#[must_use]
pub fn hx_trigger(trigger: &Trigger) -> Attrs {
    Attrs::single("hx-trigger", trigger.to_string())
}

/// `hx-confirm="message"`.
#[must_use]
pub fn hx_confirm(message: &str) -> Attrs {
    Attrs::single("hx-confirm", message)
}

/// `hx-prompt="message"`; the answer is sent in the `HX-Prompt` header.
#[must_use]
pub fn hx_prompt(message: &str) -> Attrs {
    Attrs::single("hx-prompt", message)
}

/// `hx-push-url`.
#[must_use]
pub fn hx_push_url(value: PushUrl) -> Attrs {
    Attrs::single("hx-push-url", value.to_string())
}

/// `hx-replace-url`.
#[must_use]
pub fn hx_replace_url(value: PushUrl) -> Attrs {
    Attrs::single("hx-replace-url", value.to_string())
}

/// `hx-boost="true|false"`.
#[must_use]
pub fn hx_boost(enabled: bool) -> Attrs {
    Attrs::single("hx-boost", enabled.to_string())
}

/// `hx-ext="a, b"`.
#[must_use]
pub fn hx_ext(extensions: &[&str]) -> Attrs {
    Attrs::single("hx-ext", extensions.join(", "))
}

/// `hx-params`.
#[must_use]
pub fn hx_params(params: Params) -> Attrs {
    Attrs::single("hx-params", params.to_string())
}

/// `hx-encoding="multipart/form-data"` for file uploads.
#[must_use]
pub fn hx_encoding_multipart() -> Attrs {
    Attrs::single("hx-encoding", "multipart/form-data")
}

/// `hx-preserve` - keep this element unchanged across swaps. Needs an `id`.
#[must_use]
pub fn hx_preserve() -> Attrs {
    Attrs::new().with_flag("hx-preserve")
}

/// `hx-validate="true"` - run HTML5 validation before the request.
#[must_use]
pub fn hx_validate() -> Attrs {
    Attrs::single("hx-validate", "true")
}

/// `hx-disable` - ignore htmx processing on this element and its children.
#[must_use]
pub fn hx_disable() -> Attrs {
    Attrs::new().with_flag("hx-disable")
}

/// `hx-sync="selector:strategy"`.
#[must_use]
pub fn hx_sync(selector: &str, strategy: SyncStrategy) -> Attrs {
    Attrs::single("hx-sync", format!("{selector}:{}", strategy.as_str()))
}

/// `hx-on:event="js"`.
///
/// htmx events (`htmx:afterRequest`) use the `hx-on::after-request` short
/// form, since HTML attribute names are case-insensitive.
///
/// ```
/// use forgeui_htmx::attrs::hx_on;
///
/// assert!(hx_on("click", "alert(1)").contains("hx-on:click"));
/// assert!(hx_on("htmx:afterRequest", "done()").contains("hx-on::after-request"));
/// ```
#[must_use]
pub fn hx_on(event: &str, js: &str) -> Attrs {
    let name = match event.strip_prefix("htmx:") {
        Some(htmx_event) => format!("hx-on::{}", kebab_case(htmx_event)),
        None => format!("hx-on:{event}"),
    };
    Attrs::single(name, js)
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Values
// ─────────────────────────────────────────────────────────────────────────────

fn json_or_empty<T: Serialize + ?Sized>(attribute: &str, value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        tracing::warn!(attribute, error = %err, "failed to serialize value, using {{}}");
        "{}".to_string()
    })
}

/// `hx-vals='{"k":"v"}'` from any serializable value.
#[must_use]
pub fn hx_vals<T: Serialize + ?Sized>(values: &T) -> Attrs {
    Attrs::single("hx-vals", json_or_empty("hx-vals", values))
}

/// `hx-vals="js:{ k: expr }"` - values computed on the client.
///
/// ```
/// use forgeui_htmx::attrs::hx_vals_js;
/// use forgeui_js::{JsObject, RawJs};
///
/// let attrs = hx_vals_js(&JsObject::new().with("width", RawJs::new("window.innerWidth")));
/// assert_eq!(attrs.value("hx-vals"), Some("js:{ width: window.innerWidth }"));
/// ```
#[must_use]
pub fn hx_vals_js(values: &JsObject) -> Attrs {
    Attrs::single("hx-vals", format!("js:{}", build_object(values, "")))
}

/// `hx-headers='{"X-Name":"v"}'`.
#[must_use]
pub fn hx_headers<T: Serialize + ?Sized>(headers: &T) -> Attrs {
    Attrs::single("hx-headers", json_or_empty("hx-headers", headers))
}
