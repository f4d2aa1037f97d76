//! Max-width page container.

use crate::Primitive;
use crate::space::Space;
use forgeui_html::class_names;
use serde::{Deserialize, Serialize};

/// Container max width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// `max-w-sm`
    Sm,
    /// `max-w-md`
    Md,
    /// `max-w-lg`
    Lg,
    /// `max-w-xl`
    Xl,
    /// `max-w-2xl`
    #[serde(rename = "2xl")]
    Xl2,
    /// `max-w-3xl`
    #[serde(rename = "3xl")]
    Xl3,
    /// `max-w-4xl`
    #[serde(rename = "4xl")]
    Xl4,
    /// `max-w-5xl`
    #[serde(rename = "5xl")]
    Xl5,
    /// `max-w-6xl`
    #[serde(rename = "6xl")]
    Xl6,
    /// `max-w-7xl`
    #[default]
    #[serde(rename = "7xl")]
    Xl7,
    /// `max-w-full`
    Full,
    /// `max-w-prose`, about 65 characters.
    Prose,
}

impl Size {
    /// The `max-w-*` class.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "max-w-sm",
            Self::Md => "max-w-md",
            Self::Lg => "max-w-lg",
            Self::Xl => "max-w-xl",
            Self::Xl2 => "max-w-2xl",
            Self::Xl3 => "max-w-3xl",
            Self::Xl4 => "max-w-4xl",
            Self::Xl5 => "max-w-5xl",
            Self::Xl6 => "max-w-6xl",
            Self::Xl7 => "max-w-7xl",
            Self::Full => "max-w-full",
            Self::Prose => "max-w-prose",
        }
    }
}

/// A full-width wrapper capped at a maximum width, centered by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    size: Size,
    centered: bool,
    padding_x: Option<Space>,
    class: Option<String>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new(Size::default())
    }
}

impl Container {
    /// A centered container of the given width.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            centered: true,
            padding_x: None,
            class: None,
        }
    }

    /// Aligns to the start instead of centering.
    #[must_use]
    pub fn not_centered(mut self) -> Self {
        self.centered = false;
        self
    }

    /// Sets horizontal padding.
    #[must_use]
    pub fn with_padding_x(mut self, space: Space) -> Self {
        self.padding_x = Some(space);
        self
    }

    /// Appends extra classes.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Primitive for Container {
    fn classes(&self) -> String {
        let padding_x = self.padding_x.map(|s| s.class("px")).unwrap_or_default();
        class_names([
            if self.centered { "mx-auto" } else { "" },
            "w-full",
            self.size.class(),
            padding_x.as_str(),
            self.class.as_deref().unwrap_or_default(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_centered_7xl() {
        assert_eq!(Container::default().classes(), "mx-auto w-full max-w-7xl");
    }

    #[test]
    fn prose_with_padding() {
        let container = Container::new(Size::Prose)
            .not_centered()
            .with_padding_x(Space::S4)
            .with_class("py-8");
        assert_eq!(container.classes(), "w-full max-w-prose px-4 py-8");
    }

    #[test]
    fn size_names() {
        let size: Size = serde_json::from_str(r#""3xl""#).unwrap();
        assert_eq!(size.class(), "max-w-3xl");
        assert_eq!(serde_json::to_string(&Size::Prose).unwrap(), r#""prose""#);
    }
}
