//! The `hx-swap` value grammar.

use crate::format_interval;
use core::time::Duration;
use serde::{Deserialize, Serialize};

/// How the response is inserted relative to the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapStyle {
    /// Replace the inner HTML of the target (htmx default).
    #[default]
    #[serde(rename = "innerHTML")]
    InnerHtml,
    /// Replace the whole target element.
    #[serde(rename = "outerHTML")]
    OuterHtml,
    /// Replace the text content without parsing HTML.
    #[serde(rename = "textContent")]
    TextContent,
    /// Insert before the target.
    #[serde(rename = "beforebegin")]
    BeforeBegin,
    /// Insert before the target's first child.
    #[serde(rename = "afterbegin")]
    AfterBegin,
    /// Insert after the target's last child.
    #[serde(rename = "beforeend")]
    BeforeEnd,
    /// Insert after the target.
    #[serde(rename = "afterend")]
    AfterEnd,
    /// Delete the target regardless of the response.
    #[serde(rename = "delete")]
    Delete,
    /// Do not swap (out-of-band swaps still happen).
    #[serde(rename = "none")]
    None,
}

impl SwapStyle {
    /// The htmx keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InnerHtml => "innerHTML",
            Self::OuterHtml => "outerHTML",
            Self::TextContent => "textContent",
            Self::BeforeBegin => "beforebegin",
            Self::AfterBegin => "afterbegin",
            Self::BeforeEnd => "beforeend",
            Self::AfterEnd => "afterend",
            Self::Delete => "delete",
            Self::None => "none",
        }
    }
}

/// Where `scroll:` / `show:` modifiers point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Top of the swapped element.
    Top,
    /// Bottom of the swapped element.
    Bottom,
    /// Top or bottom of another element (`#log:bottom`, `window:top`).
    Selector {
        /// CSS selector, or `window`.
        selector: String,
        /// Scroll to the bottom edge instead of the top.
        bottom: bool,
    },
    /// Disables the default `show` behaviour (`show:none`).
    None,
}

impl ScrollTarget {
    /// Top edge of the element matching `selector`.
    #[must_use]
    pub fn top_of(selector: impl Into<String>) -> Self {
        Self::Selector {
            selector: selector.into(),
            bottom: false,
        }
    }

    /// Bottom edge of the element matching `selector`.
    #[must_use]
    pub fn bottom_of(selector: impl Into<String>) -> Self {
        Self::Selector {
            selector: selector.into(),
            bottom: true,
        }
    }
}

impl core::fmt::Display for ScrollTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Bottom => f.write_str("bottom"),
            Self::Selector { selector, bottom } => {
                write!(f, "{selector}:{}", if *bottom { "bottom" } else { "top" })
            }
            Self::None => f.write_str("none"),
        }
    }
}

/// A complete `hx-swap` value: a style plus modifiers.
///
/// ```
/// use core::time::Duration;
/// use forgeui_htmx::{ScrollTarget, Swap, SwapStyle};
///
/// let swap = Swap::new(SwapStyle::BeforeEnd)
///     .settle(Duration::from_millis(100))
///     .scroll(ScrollTarget::Bottom);
/// assert_eq!(swap.to_string(), "beforeend settle:100ms scroll:bottom");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Swap {
    style: SwapStyle,
    transition: bool,
    swap_delay: Option<Duration>,
    settle_delay: Option<Duration>,
    ignore_title: bool,
    scroll: Option<ScrollTarget>,
    show: Option<ScrollTarget>,
    focus_scroll: Option<bool>,
}

impl Swap {
    /// Starts from a swap style with no modifiers.
    #[must_use]
    pub fn new(style: SwapStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Returns the swap style.
    #[must_use]
    pub fn style(&self) -> SwapStyle {
        self.style
    }

    /// `transition:true` - use the View Transitions API.
    #[must_use]
    pub fn transition(mut self) -> Self {
        self.transition = true;
        self
    }

    /// `swap:<t>` - delay between receiving the response and swapping.
    #[must_use]
    pub fn swap(mut self, delay: Duration) -> Self {
        self.swap_delay = Some(delay);
        self
    }

    /// `settle:<t>` - delay between swapping and settling.
    #[must_use]
    pub fn settle(mut self, delay: Duration) -> Self {
        self.settle_delay = Some(delay);
        self
    }

    /// `ignoreTitle:true` - keep the current document title.
    #[must_use]
    pub fn ignore_title(mut self) -> Self {
        self.ignore_title = true;
        self
    }

    /// `scroll:<target>`.
    #[must_use]
    pub fn scroll(mut self, target: ScrollTarget) -> Self {
        self.scroll = Some(target);
        self
    }

    /// `show:<target>`.
    #[must_use]
    pub fn show(mut self, target: ScrollTarget) -> Self {
        self.show = Some(target);
        self
    }

    /// `focus-scroll:<bool>`.
    #[must_use]
    pub fn focus_scroll(mut self, enabled: bool) -> Self {
        self.focus_scroll = Some(enabled);
        self
    }
}

impl From<SwapStyle> for Swap {
    fn from(style: SwapStyle) -> Self {
        Self::new(style)
    }
}

impl core::fmt::Display for Swap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.style.as_str())?;
        if self.transition {
            f.write_str(" transition:true")?;
        }
        if let Some(delay) = self.swap_delay {
            write!(f, " swap:{}", format_interval(delay))?;
        }
        if let Some(delay) = self.settle_delay {
            write!(f, " settle:{}", format_interval(delay))?;
        }
        if self.ignore_title {
            f.write_str(" ignoreTitle:true")?;
        }
        if let Some(target) = &self.scroll {
            write!(f, " scroll:{target}")?;
        }
        if let Some(target) = &self.show {
            write!(f, " show:{target}")?;
        }
        if let Some(enabled) = self.focus_scroll {
            write!(f, " focus-scroll:{enabled}")?;
        }
        Ok(())
    }
}
