//! The general-purpose box.

use crate::Primitive;
use crate::space::Space;
use forgeui_html::{Attrs, class_names};

/// Corner radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radius {
    /// `rounded-none`
    None,
    /// `rounded-sm`
    Sm,
    /// `rounded`
    Default,
    /// `rounded-md`
    Md,
    /// `rounded-lg`
    Lg,
    /// `rounded-xl`
    Xl,
    /// `rounded-full`
    Full,
}

impl Radius {
    /// The utility class.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::None => "rounded-none",
            Self::Sm => "rounded-sm",
            Self::Default => "rounded",
            Self::Md => "rounded-md",
            Self::Lg => "rounded-lg",
            Self::Xl => "rounded-xl",
            Self::Full => "rounded-full",
        }
    }
}

/// Drop shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shadow {
    /// `shadow-sm`
    Sm,
    /// `shadow`
    Default,
    /// `shadow-md`
    Md,
    /// `shadow-lg`
    Lg,
    /// `shadow-xl`
    Xl,
}

impl Shadow {
    /// The utility class.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "shadow-sm",
            Self::Default => "shadow",
            Self::Md => "shadow-md",
            Self::Lg => "shadow-lg",
            Self::Xl => "shadow-xl",
        }
    }
}

/// Visual properties of a [`Box`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxProps {
    /// `p-*`
    pub padding: Option<Space>,
    /// `px-*`
    pub padding_x: Option<Space>,
    /// `py-*`
    pub padding_y: Option<Space>,
    /// `m-*`
    pub margin: Option<Space>,
    /// Background color name, rendered as `bg-<name>`.
    pub background: Option<String>,
    /// Corner radius.
    pub rounded: Option<Radius>,
    /// Drop shadow.
    pub shadow: Option<Shadow>,
    /// Adds `border`.
    pub border: bool,
    /// Appended verbatim.
    pub class: Option<String>,
}

impl BoxProps {
    /// The utility-class string.
    #[must_use]
    pub fn classes(&self) -> String {
        class_names([
            self.padding.map(|s| s.class("p")).unwrap_or_default(),
            self.padding_x.map(|s| s.class("px")).unwrap_or_default(),
            self.padding_y.map(|s| s.class("py")).unwrap_or_default(),
            self.margin.map(|s| s.class("m")).unwrap_or_default(),
            self.background
                .as_deref()
                .map(|bg| format!("bg-{bg}"))
                .unwrap_or_default(),
            self.rounded.map(Radius::class).unwrap_or_default().to_string(),
            self.shadow.map(Shadow::class).unwrap_or_default().to_string(),
            if self.border { "border" } else { "" }.to_string(),
            self.class.clone().unwrap_or_default(),
        ])
    }
}

/// A `<div>` with padding, margin and surface styling.
///
/// ```
/// use forgeui_primitives::{Box, Primitive, Radius, Shadow, Space};
///
/// let card = Box::new()
///     .with_padding(Space::S6)
///     .with_background("white")
///     .with_rounded(Radius::Lg)
///     .with_shadow(Shadow::Md)
///     .with_border();
/// assert_eq!(card.classes(), "p-6 bg-white rounded-lg shadow-md border");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Box {
    props: BoxProps,
    tag: Option<String>,
    attrs: Attrs,
}

impl Box {
    /// An unstyled box.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A box from prepared props.
    #[must_use]
    pub fn from_props(props: BoxProps) -> Self {
        Self {
            props,
            ..Self::default()
        }
    }

    /// Returns the props.
    #[must_use]
    pub fn props(&self) -> &BoxProps {
        &self.props
    }

    /// Sets padding on all sides.
    #[must_use]
    pub fn with_padding(mut self, space: Space) -> Self {
        self.props.padding = Some(space);
        self
    }

    /// Sets horizontal padding.
    #[must_use]
    pub fn with_padding_x(mut self, space: Space) -> Self {
        self.props.padding_x = Some(space);
        self
    }

    /// Sets vertical padding.
    #[must_use]
    pub fn with_padding_y(mut self, space: Space) -> Self {
        self.props.padding_y = Some(space);
        self
    }

    /// Sets margin on all sides.
    #[must_use]
    pub fn with_margin(mut self, space: Space) -> Self {
        self.props.margin = Some(space);
        self
    }

    /// Sets the background color (`gray-100`, `white`, ...).
    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.props.background = Some(color.into());
        self
    }

    /// Sets the corner radius.
    #[must_use]
    pub fn with_rounded(mut self, radius: Radius) -> Self {
        self.props.rounded = Some(radius);
        self
    }

    /// Sets the shadow.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.props.shadow = Some(shadow);
        self
    }

    /// Adds a border.
    #[must_use]
    pub fn with_border(mut self) -> Self {
        self.props.border = true;
        self
    }

    /// Appends extra classes.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.props.class = Some(class.into());
        self
    }

    /// Renders as `tag` instead of `div`.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Adds attributes, e.g. from an Alpine or htmx builder.
    #[must_use]
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = self.attrs.merge(attrs);
        self
    }
}

impl Primitive for Box {
    fn classes(&self) -> String {
        self.props.classes()
    }

    fn attrs(&self) -> Attrs {
        self.attrs.clone()
    }

    fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or("div")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_has_no_class_attribute() {
        assert_eq!(Box::new().render("x"), "<div>x</div>");
    }

    #[test]
    fn axis_padding_and_margin() {
        let props = BoxProps {
            padding_x: Some(Space::S4),
            padding_y: Some(Space::Half),
            margin: Some(Space::S0),
            class: Some("grow border".into()),
            border: true,
            ..BoxProps::default()
        };
        assert_eq!(props.classes(), "px-4 py-0.5 m-0 border grow");
    }

    #[test]
    fn tag_and_attrs() {
        let html = Box::new()
            .with_tag("section")
            .with_padding(Space::S2)
            .with_attrs(Attrs::single("id", "main").with("class", "relative"))
            .render("<p>hi</p>");
        assert_eq!(html, r#"<section class="p-2 relative" id="main"><p>hi</p></section>"#);
    }
}
