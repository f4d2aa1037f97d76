//! Plugin system for ForgeUI.
//!
//! Everything beyond the attribute builders is delivered by plugins: the
//! Alpine and htmx script tags, themes, charts, analytics and SEO tags. A
//! [`Registry`] orchestrates them:
//!
//! - [`Plugin`] - the trait every plugin implements
//! - [`PluginGroup`] / [`PluginGroupBuilder`] - bundles that can be customized
//! - [`Registry`] - dependency-ordered build, asset ordering, `alpine:init`
//! - [`Asset`] / [`AssetSlot`] - what plugins put into `<head>`
//! - [`Resource`] - typed values plugins share with each other

pub mod asset;
mod error;
pub mod plugin;
pub mod registry;
pub mod resource;

pub use asset::{Asset, AssetSlot, ScriptSource};
pub use error::RegistryError;
pub use plugin::{Plugin, PluginGroup, PluginGroupBuilder, PluginId, Plugins};
pub use registry::Registry;
pub use resource::{Resource, Resources};
