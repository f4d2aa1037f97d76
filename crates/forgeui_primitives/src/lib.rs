//! Layout primitives for ForgeUI.
//!
//! Each primitive is a small builder that knows its utility classes
//! ([`Primitive::classes`]) and can wrap pre-rendered children in a tag
//! ([`Primitive::render`]). Children are inserted verbatim.
//!
//! - [`Box`] - padding, margin, background, radius, shadow, border
//! - [`Stack`] - flex row/column with gap and alignment ([`vstack`], [`hstack`])
//! - [`Grid`] - CSS grid with responsive column counts
//! - [`Container`] - centered max-width wrapper
//! - [`Center`] - flex centering
//! - [`Spacer`] - flexible or fixed gap
//! - [`Provider`] - an `x-data` scope with state and methods
//!
//! # Example
//!
//! ```
//! use forgeui_primitives::{Container, Primitive, Size, Space, vstack};
//!
//! let body = vstack().with_gap(Space::S4).render("<h1>Hi</h1><p>There</p>");
//! let page = Container::new(Size::Lg).render(&body);
//! assert_eq!(
//!     page,
//!     r#"<div class="mx-auto w-full max-w-lg"><div class="flex flex-col gap-4"><h1>Hi</h1><p>There</p></div></div>"#
//! );
//! ```

mod container;
mod flex;
mod grid;
mod provider;
mod space;
mod surface;

pub use container::{Container, Size};
pub use flex::{Align, Center, Direction, Justify, Spacer, Stack, hstack, vstack};
pub use grid::Grid;
pub use provider::Provider;
pub use space::Space;
pub use surface::{Box, BoxProps, Radius, Shadow};

use forgeui_html::{Attrs, Element};

/// A layout element described by utility classes.
pub trait Primitive {
    /// The utility-class string.
    fn classes(&self) -> String;

    /// Attributes besides `class`.
    fn attrs(&self) -> Attrs {
        Attrs::new()
    }

    /// The wrapping tag.
    fn tag(&self) -> &str {
        "div"
    }

    /// The wrapping element around `children`.
    fn to_element(&self, children: &str) -> Element {
        let classes = self.classes();
        let mut element = Element::new(self.tag());
        if !classes.is_empty() {
            element = element.attr("class", classes);
        }
        element.attrs(self.attrs()).raw(children)
    }

    /// `<tag class="...">children</tag>`.
    fn render(&self, children: &str) -> String {
        self.to_element(children).render()
    }
}
