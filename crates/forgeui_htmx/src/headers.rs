//! `HX-*` request and response headers.
//!
//! Headers are plain `(name, value)` pairs so any HTTP stack can feed
//! [`HxRequest::from_headers`] and write out [`HxResponse::headers`].

use crate::attrs::PushUrl;
use crate::swap::Swap;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors produced while building response headers.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// An event detail could not be serialized to JSON.
    #[error("failed to serialize HX-Trigger detail: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

/// The `HX-*` headers htmx sends with each request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HxRequest {
    /// `HX-Request: true`.
    pub request: bool,
    /// `HX-Boosted: true` - the request comes from an `hx-boost`ed link or form.
    pub boosted: bool,
    /// `HX-Current-URL`.
    pub current_url: Option<String>,
    /// `HX-History-Restore-Request: true` - a history cache miss.
    pub history_restore_request: bool,
    /// `HX-Prompt` - the user's answer to `hx-prompt`.
    pub prompt: Option<String>,
    /// `HX-Target` - id of the target element.
    pub target: Option<String>,
    /// `HX-Trigger-Name` - name of the triggering element.
    pub trigger_name: Option<String>,
    /// `HX-Trigger` - id of the triggering element.
    pub trigger: Option<String>,
}

impl HxRequest {
    /// Reads the htmx headers out of any list of header pairs. Names are
    /// matched case-insensitively; unrelated headers are ignored.
    ///
    /// ```
    /// use forgeui_htmx::HxRequest;
    ///
    /// let req = HxRequest::from_headers([("hx-request", "true"), ("HX-Target", "results")]);
    /// assert!(req.is_partial());
    /// assert_eq!(req.target.as_deref(), Some("results"));
    /// ```
    pub fn from_headers<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut req = Self::default();
        for (name, value) in headers {
            let name = name.as_ref().to_ascii_lowercase();
            let value = value.as_ref();
            match name.as_str() {
                "hx-request" => req.request = is_true(value),
                "hx-boosted" => req.boosted = is_true(value),
                "hx-current-url" => req.current_url = Some(value.to_string()),
                "hx-history-restore-request" => req.history_restore_request = is_true(value),
                "hx-prompt" => req.prompt = Some(value.to_string()),
                "hx-target" => req.target = Some(value.to_string()),
                "hx-trigger-name" => req.trigger_name = Some(value.to_string()),
                "hx-trigger" => req.trigger = Some(value.to_string()),
                _ => {}
            }
        }
        req
    }

    /// The request was issued by htmx.
    #[must_use]
    pub fn is_htmx(&self) -> bool {
        self.request
    }

    /// The request came from a boosted link or form.
    #[must_use]
    pub fn is_boosted(&self) -> bool {
        self.boosted
    }

    /// The server should answer with a fragment rather than a full page.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.request && !self.boosted && !self.history_restore_request
    }
}

fn is_true(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

// ─────────────────────────────────────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Events {
    events: IndexMap<String, Option<Value>>,
}

impl Events {
    fn push(&mut self, event: String, detail: Option<Value>) {
        self.events.insert(event, detail);
    }

    fn header_value(&self) -> Result<Option<String>, HeaderError> {
        if self.events.is_empty() {
            return Ok(None);
        }
        if self.events.values().all(Option::is_none) {
            let names: Vec<&str> = self.events.keys().map(String::as_str).collect();
            return Ok(Some(names.join(", ")));
        }
        let object: serde_json::Map<String, Value> = self
            .events
            .iter()
            .map(|(name, detail)| (name.clone(), detail.clone().unwrap_or(Value::Null)))
            .collect();
        Ok(Some(serde_json::to_string(&object)?))
    }
}

/// Builder for the `HX-*` response headers.
///
/// ```
/// use forgeui_htmx::HxResponse;
///
/// let headers = HxResponse::new()
///     .trigger("saved")
///     .trigger("refresh-list")
///     .retarget("#flash")
///     .headers()?;
/// assert_eq!(
///     headers,
///     [("HX-Retarget", "#flash".to_string()), ("HX-Trigger", "saved, refresh-list".to_string())]
/// );
/// # Ok::<(), forgeui_htmx::HeaderError>(())
/// ```
#[derive(Debug, Default)]
pub struct HxResponse {
    location: Option<String>,
    push_url: Option<PushUrl>,
    replace_url: Option<PushUrl>,
    redirect: Option<String>,
    refresh: bool,
    reswap: Option<Swap>,
    retarget: Option<String>,
    reselect: Option<String>,
    trigger: Events,
    after_settle: Events,
    after_swap: Events,
    error: Option<serde_json::Error>,
}

impl HxResponse {
    /// An empty response header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `HX-Location` - client-side navigation without a full reload.
    #[must_use]
    pub fn location(mut self, path: impl Into<String>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// `HX-Push-Url`.
    #[must_use]
    pub fn push_url(mut self, url: PushUrl) -> Self {
        self.push_url = Some(url);
        self
    }

    /// `HX-Replace-Url`.
    #[must_use]
    pub fn replace_url(mut self, url: PushUrl) -> Self {
        self.replace_url = Some(url);
        self
    }

    /// `HX-Redirect` - full page redirect.
    #[must_use]
    pub fn redirect(mut self, url: impl Into<String>) -> Self {
        self.redirect = Some(url.into());
        self
    }

    /// `HX-Refresh: true`.
    #[must_use]
    pub fn refresh(mut self) -> Self {
        self.refresh = true;
        self
    }

    /// `HX-Reswap` - overrides the element's `hx-swap`.
    #[must_use]
    pub fn reswap(mut self, swap: Swap) -> Self {
        self.reswap = Some(swap);
        self
    }

    /// `HX-Retarget` - overrides the element's `hx-target`.
    #[must_use]
    pub fn retarget(mut self, selector: impl Into<String>) -> Self {
        self.retarget = Some(selector.into());
        self
    }

    /// `HX-Reselect` - overrides the element's `hx-select`.
    #[must_use]
    pub fn reselect(mut self, selector: impl Into<String>) -> Self {
        self.reselect = Some(selector.into());
        self
    }

    /// Adds an event to `HX-Trigger`.
    #[must_use]
    pub fn trigger(mut self, event: impl Into<String>) -> Self {
        self.trigger.push(event.into(), None);
        self
    }

    /// Adds an event with a JSON detail to `HX-Trigger`. A detail that fails
    /// to serialize is reported by [`headers`](Self::headers).
    #[must_use]
    pub fn trigger_with<T: Serialize + ?Sized>(mut self, event: impl Into<String>, detail: &T) -> Self {
        match serde_json::to_value(detail) {
            Ok(value) => self.trigger.push(event.into(), Some(value)),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Adds an event to `HX-Trigger-After-Settle`.
    #[must_use]
    pub fn trigger_after_settle(mut self, event: impl Into<String>) -> Self {
        self.after_settle.push(event.into(), None);
        self
    }

    /// Adds an event to `HX-Trigger-After-Swap`.
    #[must_use]
    pub fn trigger_after_swap(mut self, event: impl Into<String>) -> Self {
        self.after_swap.push(event.into(), None);
        self
    }

    /// Renders the header pairs in a fixed order.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::Serialize`] if an event detail passed to
    /// [`trigger_with`](Self::trigger_with) could not be serialized.
    pub fn headers(self) -> Result<Vec<(&'static str, String)>, HeaderError> {
        if let Some(err) = self.error {
            return Err(err.into());
        }

        let mut out = Vec::new();
        if let Some(location) = self.location {
            out.push(("HX-Location", location));
        }
        if let Some(url) = self.push_url {
            out.push(("HX-Push-Url", url.to_string()));
        }
        if let Some(url) = self.replace_url {
            out.push(("HX-Replace-Url", url.to_string()));
        }
        if let Some(url) = self.redirect {
            out.push(("HX-Redirect", url));
        }
        if self.refresh {
            out.push(("HX-Refresh", "true".to_string()));
        }
        if let Some(swap) = self.reswap {
            out.push(("HX-Reswap", swap.to_string()));
        }
        if let Some(selector) = self.retarget {
            out.push(("HX-Retarget", selector));
        }
        if let Some(selector) = self.reselect {
            out.push(("HX-Reselect", selector));
        }
        if let Some(value) = self.trigger.header_value()? {
            out.push(("HX-Trigger", value));
        }
        if let Some(value) = self.after_settle.header_value()? {
            out.push(("HX-Trigger-After-Settle", value));
        }
        if let Some(value) = self.after_swap.header_value()? {
            out.push(("HX-Trigger-After-Swap", value));
        }
        Ok(out)
    }
}
