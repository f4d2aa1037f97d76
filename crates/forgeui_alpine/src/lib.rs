//! Alpine.js support for ForgeUI.
//!
//! This crate mirrors Alpine's directive vocabulary as typed functions:
//!
//! - [`directives`] - `x-data`, `x-show`, `x-bind`, `x-on`, `x-for`, ... as [`Attrs`](forgeui_html::Attrs)
//! - [`modifiers`] - builders for directives that take modifiers ([`On`], [`Model`], [`Transition`])
//! - [`magic`] - expression helpers for `$dispatch`, `$store`, `$refs`, `$persist`, ...
//! - [`bootstrap`] - `Alpine.store()`, `Alpine.data()`, `Alpine.directive()` and
//!   `Alpine.magic()` registrations wrapped in an `alpine:init` listener
//! - [`scripts`] - CDN `<script>` tags for Alpine and its official plugins
//!
//! # Example
//!
//! ```
//! use forgeui_alpine::directives::{x_data, x_show};
//! use forgeui_alpine::modifiers::On;
//! use forgeui_js::JsObject;
//!
//! let root = x_data(&JsObject::new().with("open", false));
//! let button = On::click("open = !open").attrs();
//! let panel = x_show("open");
//!
//! assert_eq!(
//!     format!("<div{root}><button{button}></button><div{panel}></div></div>"),
//!     r#"<div x-data="{ open: false }"><button @click="open = !open"></button><div x-show="open"></div></div>"#
//! );
//! ```

pub mod bootstrap;
pub mod directives;
pub mod magic;
pub mod modifiers;
pub mod scripts;

pub use bootstrap::{Component, Directive, Magic, Store, init_script};
pub use modifiers::{Key, Model, On, Transition};
pub use scripts::{AlpineExt, UnknownExtension};
