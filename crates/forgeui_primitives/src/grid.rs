//! CSS grid.

use crate::Primitive;
use crate::space::Space;
use forgeui_html::class_names;

/// A grid with a fixed column count and optional breakpoints.
///
/// Column counts are clamped to `1..=12`.
///
/// ```
/// use forgeui_primitives::{Grid, Primitive, Space};
///
/// let grid = Grid::new(1).with_md(2).with_lg(4).with_gap(Space::S6);
/// assert_eq!(grid.classes(), "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: u8,
    md: Option<u8>,
    lg: Option<u8>,
    gap: Option<Space>,
    class: Option<String>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(1)
    }
}

fn clamp(cols: u8) -> u8 {
    cols.clamp(1, 12)
}

impl Grid {
    /// A grid with `cols` columns at every width.
    #[must_use]
    pub fn new(cols: u8) -> Self {
        Self {
            cols: clamp(cols),
            md: None,
            lg: None,
            gap: None,
            class: None,
        }
    }

    /// Column count from the `md` breakpoint up.
    #[must_use]
    pub fn with_md(mut self, cols: u8) -> Self {
        self.md = Some(clamp(cols));
        self
    }

    /// Column count from the `lg` breakpoint up.
    #[must_use]
    pub fn with_lg(mut self, cols: u8) -> Self {
        self.lg = Some(clamp(cols));
        self
    }

    /// Sets the gap between cells.
    #[must_use]
    pub fn with_gap(mut self, gap: Space) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Appends extra classes.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Primitive for Grid {
    fn classes(&self) -> String {
        class_names([
            "grid".to_string(),
            format!("grid-cols-{}", self.cols),
            self.md.map(|c| format!("md:grid-cols-{c}")).unwrap_or_default(),
            self.lg.map(|c| format!("lg:grid-cols-{c}")).unwrap_or_default(),
            self.gap.map(|g| g.class("gap")).unwrap_or_default(),
            self.class.clone().unwrap_or_default(),
        ])
    }
}
