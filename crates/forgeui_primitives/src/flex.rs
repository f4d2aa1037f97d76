//! Flexbox primitives: stacks, centering and spacers.

use crate::Primitive;
use crate::space::Space;
use forgeui_html::{Attrs, class_names};

/// Main axis of a [`Stack`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// `flex-col`
    #[default]
    Vertical,
    /// `flex-row`
    Horizontal,
}

/// Cross-axis alignment (`items-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `items-start`
    Start,
    /// `items-center`
    Center,
    /// `items-end`
    End,
    /// `items-stretch`
    Stretch,
    /// `items-baseline`
    Baseline,
}

impl Align {
    /// The utility class.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Start => "items-start",
            Self::Center => "items-center",
            Self::End => "items-end",
            Self::Stretch => "items-stretch",
            Self::Baseline => "items-baseline",
        }
    }
}

/// Main-axis distribution (`justify-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// `justify-start`
    Start,
    /// `justify-center`
    Center,
    /// `justify-end`
    End,
    /// `justify-between`
    Between,
    /// `justify-around`
    Around,
    /// `justify-evenly`
    Evenly,
}

impl Justify {
    /// The utility class.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Start => "justify-start",
            Self::Center => "justify-center",
            Self::End => "justify-end",
            Self::Between => "justify-between",
            Self::Around => "justify-around",
            Self::Evenly => "justify-evenly",
        }
    }
}

/// A flex container laying children out in one direction.
///
/// ```
/// use forgeui_primitives::{Align, Justify, Primitive, Space, hstack};
///
/// let toolbar = hstack()
///     .with_gap(Space::S2)
///     .with_align(Align::Center)
///     .with_justify(Justify::Between);
/// assert_eq!(toolbar.classes(), "flex flex-row gap-2 items-center justify-between");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    direction: Direction,
    gap: Option<Space>,
    align: Option<Align>,
    justify: Option<Justify>,
    wrap: bool,
    class: Option<String>,
    attrs: Attrs,
}

/// A vertical [`Stack`].
#[must_use]
pub fn vstack() -> Stack {
    Stack::new(Direction::Vertical)
}

/// A horizontal [`Stack`].
#[must_use]
pub fn hstack() -> Stack {
    Stack::new(Direction::Horizontal)
}

impl Stack {
    /// A stack along `direction`.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Sets the gap between children.
    #[must_use]
    pub fn with_gap(mut self, gap: Space) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Sets cross-axis alignment.
    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Sets main-axis distribution.
    #[must_use]
    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    /// Lets children wrap onto several lines.
    #[must_use]
    pub fn with_wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Appends extra classes.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Adds attributes.
    #[must_use]
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = self.attrs.merge(attrs);
        self
    }
}

impl Primitive for Stack {
    fn classes(&self) -> String {
        let direction = match self.direction {
            Direction::Vertical => "flex-col",
            Direction::Horizontal => "flex-row",
        };
        let gap = self.gap.map(|g| g.class("gap")).unwrap_or_default();
        class_names([
            "flex",
            direction,
            gap.as_str(),
            self.align.map(Align::class).unwrap_or_default(),
            self.justify.map(Justify::class).unwrap_or_default(),
            if self.wrap { "flex-wrap" } else { "" },
            self.class.as_deref().unwrap_or_default(),
        ])
    }

    fn attrs(&self) -> Attrs {
        self.attrs.clone()
    }
}

/// Centers its children on both axes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Center {
    inline: bool,
    class: Option<String>,
}

impl Center {
    /// A block-level centering wrapper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `inline-flex` so the wrapper only takes its content's width.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Appends extra classes.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Primitive for Center {
    fn classes(&self) -> String {
        class_names([
            if self.inline { "inline-flex" } else { "flex" },
            "items-center justify-center",
            self.class.as_deref().unwrap_or_default(),
        ])
    }
}

/// Empty space inside a [`Stack`].
///
/// ```
/// use forgeui_primitives::{Primitive, Space, Spacer};
///
/// assert_eq!(Spacer::flexible().render(""), r#"<div class="flex-1" aria-hidden="true"></div>"#);
/// assert_eq!(Spacer::fixed(Space::S8).classes(), "shrink-0 basis-8");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacer {
    size: Option<Space>,
}

impl Spacer {
    /// Takes all remaining space.
    #[must_use]
    pub fn flexible() -> Self {
        Self { size: None }
    }

    /// Takes exactly `size` along the stack's main axis.
    #[must_use]
    pub fn fixed(size: Space) -> Self {
        Self { size: Some(size) }
    }
}

impl Primitive for Spacer {
    fn classes(&self) -> String {
        match self.size {
            Some(size) => format!("shrink-0 {}", size.class("basis")),
            None => "flex-1".to_string(),
        }
    }

    fn attrs(&self) -> Attrs {
        Attrs::single("aria-hidden", "true")
    }
}
