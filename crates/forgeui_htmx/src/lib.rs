//! htmx support for ForgeUI.
//!
//! - [`attrs`] - `hx-get`, `hx-target`, `hx-vals`, ... as [`Attrs`](forgeui_html::Attrs)
//! - [`swap`] - the `hx-swap` grammar ([`Swap`], [`SwapStyle`])
//! - [`trigger`] - the `hx-trigger` grammar ([`Trigger`], [`TriggerSpec`])
//! - [`headers`] - parsing `HX-*` request headers and building `HX-*` response headers
//! - [`scripts`] - CDN `<script>` tags for htmx and its extensions
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use forgeui_htmx::attrs::{hx_get, hx_swap, hx_target, hx_trigger};
//! use forgeui_htmx::{Swap, SwapStyle, Trigger, TriggerSpec};
//!
//! let attrs = hx_get("/search")
//!     .merge(hx_trigger(&Trigger::new(
//!         TriggerSpec::event("keyup").changed().delay(Duration::from_millis(300)),
//!     )))
//!     .merge(hx_target("#results"))
//!     .merge(hx_swap(&Swap::new(SwapStyle::InnerHtml)));
//!
//! assert_eq!(
//!     attrs.render(),
//!     r##" hx-get="/search" hx-trigger="keyup changed delay:300ms" hx-target="#results" hx-swap="innerHTML""##
//! );
//! ```

pub mod attrs;
pub mod headers;
pub mod scripts;
pub mod swap;
pub mod trigger;

pub use attrs::{Method, Params, PushUrl, SyncStrategy};
pub use headers::{HeaderError, HxRequest, HxResponse};
pub use swap::{ScrollTarget, Swap, SwapStyle};
pub use trigger::{Queue, Trigger, TriggerSpec};

use core::time::Duration;

/// Formats an htmx time interval: whole seconds as `2s`, anything else as `ms`.
pub(crate) fn format_interval(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis > 0 && millis % 1000 == 0 {
        format!("{}s", millis / 1000)
    } else {
        format!("{millis}ms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals() {
        assert_eq!(format_interval(Duration::from_millis(250)), "250ms");
        assert_eq!(format_interval(Duration::from_secs(2)), "2s");
        assert_eq!(format_interval(Duration::from_millis(1500)), "1500ms");
        assert_eq!(format_interval(Duration::ZERO), "0ms");
    }
}
