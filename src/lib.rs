//! Typed server-side builders for Alpine.js and htmx markup.
//!
//! ForgeUI renders HTML attribute sets and `<head>` tags annotated for
//! Alpine.js and htmx, and assembles the page's scripts, stores and
//! directives through a plugin [`Registry`](forgeui_internal::plugin::Registry).
//!
//! ```
//! use forgeui::prelude::*;
//!
//! let mut registry = Registry::new();
//! registry.add_plugins(MinimalPlugins.build().add(ThemePlugin::default()));
//! registry.finish()?;
//!
//! let button = On::click("$store.theme.toggle()").attrs().merge(hx_get("/prefs"));
//! assert_eq!(
//!     format!("<button{button}>"),
//!     r#"<button @click="$store.theme.toggle()" hx-get="/prefs">"#
//! );
//! assert!(registry.head_html()?.contains("Alpine.store('theme'"));
//! # Ok::<(), RegistryError>(())
//! ```

pub use forgeui_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use forgeui_internal::prelude::*;
}

#[cfg(feature = "tracing")]
pub use tracing;
