//! Markup primitives shared by every ForgeUI crate.
//!
//! Everything ForgeUI produces is ultimately one of two things:
//!
//! - an [`Attrs`] set that gets spliced into an element the caller renders
//!   (`<button{attrs}>`), or
//! - a complete [`Element`] such as a `<script>`, `<link>` or `<meta>` tag.
//!
//! Attribute values are escaped when rendered; attribute names are emitted
//! verbatim because they always come from typed builders.
//!
//! # Example
//!
//! ```
//! use forgeui_html::{Attrs, Element};
//!
//! let attrs = Attrs::new()
//!     .with("x-show", "open")
//!     .with("class", "menu");
//! assert_eq!(attrs.render(), r#" x-show="open" class="menu""#);
//!
//! let tag = Element::script_src("https://cdn.example.com/app.js").flag("defer");
//! assert_eq!(
//!     tag.render(),
//!     r#"<script src="https://cdn.example.com/app.js" defer></script>"#
//! );
//! ```

pub mod attrs;
pub mod class;
pub mod element;
pub mod escape;

pub use attrs::{AttrValue, Attrs};
pub use class::class_names;
pub use element::Element;
pub use escape::{escape_attr, escape_text};
