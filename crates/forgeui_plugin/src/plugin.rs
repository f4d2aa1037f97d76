//! The plugin trait and plugin groups.
//!
//! Plugins are the unit of composition in ForgeUI. Themes, charts,
//! analytics and SEO tags are all plugins that contribute scripts, stores,
//! directives and resources to a [`Registry`].
//!
//! # Example
//!
//! ```
//! use forgeui_plugin::{AssetSlot, Plugin, PluginId, Registry, RegistryError};
//! use forgeui_alpine::Store;
//!
//! struct BasePlugin;
//!
//! impl Plugin for BasePlugin {
//!     fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
//!         registry.add_script("https://cdn.example.com/alpine.js", AssetSlot::AlpineCore);
//!         Ok(())
//!     }
//! }
//!
//! struct CartPlugin;
//!
//! impl Plugin for CartPlugin {
//!     fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
//!         registry.add_store(Store::new("cart"))
//!     }
//!
//!     fn dependencies(&self) -> Vec<PluginId> {
//!         vec![PluginId::of::<BasePlugin>()]
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.add_plugins(CartPlugin).add_plugins(BasePlugin);
//! registry.finish()?;
//! assert!(registry.init_script()?.contains("Alpine.store('cart'"));
//! # Ok::<(), RegistryError>(())
//! ```

use crate::error::RegistryError;
use crate::registry::Registry;
use core::any::TypeId;

// ─────────────────────────────────────────────────────────────────────────────
// PluginId
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for a plugin type.
///
/// Used for dependency resolution and duplicate detection. Based on [`TypeId`],
/// so each plugin type has exactly one `PluginId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PluginId {
    type_id: TypeId,
    type_name: &'static str,
}

impl PluginId {
    /// Creates a `PluginId` for the given plugin type.
    #[must_use]
    pub fn of<P: Plugin>() -> Self {
        Self {
            type_id: TypeId::of::<P>(),
            type_name: core::any::type_name::<P>(),
        }
    }

    /// Returns the underlying `TypeId`.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the type name for debugging.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A bundle of assets, Alpine registrations and resources.
///
/// The registry drives a fixed lifecycle:
///
/// 1. **Build Phase** - `build()` is called in dependency order
/// 2. **Ready Phase** - `ready()` is called in dependency order, after every
///    plugin has been built
/// 3. **Cleanup Phase** - `cleanup()` is called in reverse dependency order
pub trait Plugin: Send + Sync + 'static {
    /// Contributes assets, registrations and resources.
    ///
    /// # Errors
    ///
    /// Propagates registration conflicts such as
    /// [`RegistryError::DuplicateStore`].
    fn build(&self, registry: &mut Registry) -> Result<(), RegistryError>;

    /// Called after all plugins have been built.
    ///
    /// Use this for work that depends on what other plugins registered,
    /// or for process-wide side effects such as installing a subscriber.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    fn ready(&self, _registry: &mut Registry) -> Result<(), RegistryError> {
        Ok(())
    }

    /// Called by [`Registry::cleanup`], dependents before dependencies.
    fn cleanup(&self, _registry: &mut Registry) {}

    /// Returns the plugin's name for debugging and error messages.
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        core::any::type_name::<Self>()
    }

    /// Declares plugins that must be built before this one.
    ///
    /// [`Registry::finish`] fails with [`RegistryError::MissingDependency`]
    /// if one of them was never added.
    fn dependencies(&self) -> Vec<PluginId> {
        Vec::new()
    }

    /// Returns true if this plugin can only be added once.
    ///
    /// Default is `true`. Adding the same plugin type twice makes
    /// [`Registry::finish`] fail with [`RegistryError::DuplicatePlugin`].
    fn is_unique(&self) -> bool {
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugins Trait (for add_plugins polymorphism)
// ─────────────────────────────────────────────────────────────────────────────

/// Trait for types that can be added to a registry as plugins.
///
/// This trait enables `registry.add_plugins()` to accept both:
/// - Single plugins implementing [`Plugin`]
/// - Plugin groups via [`PluginGroupBuilder`]
///
/// Users typically don't implement this trait directly.
pub trait Plugins {
    /// Adds these plugins to the registry.
    fn add_to_registry(self, registry: &mut Registry);
}

impl<P: Plugin> Plugins for P {
    fn add_to_registry(self, registry: &mut Registry) {
        // Capture PluginId while we still have the concrete type
        let id = PluginId::of::<P>();
        registry.add_plugin_boxed(id, Box::new(self));
    }
}

impl Plugins for PluginGroupBuilder {
    fn add_to_registry(self, registry: &mut Registry) {
        for entry in self.entries {
            registry.add_plugin_boxed(entry.id, entry.plugin);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PluginGroup Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A collection of plugins that can be added together.
///
/// # Example
///
/// ```ignore
/// Registry::new().add_plugins(
///     DefaultPlugins
///         .build()
///         .disable::<TracingPlugin>()
///         .add(ThemePlugin::default()),
/// );
/// ```
pub trait PluginGroup {
    /// Returns the plugins in this group.
    fn build(self) -> PluginGroupBuilder;
}

// ─────────────────────────────────────────────────────────────────────────────
// PluginGroupBuilder
// ─────────────────────────────────────────────────────────────────────────────

/// A type-erased group member. The id is taken before boxing.
pub(crate) struct GroupEntry {
    pub(crate) id: PluginId,
    pub(crate) plugin: Box<dyn Plugin>,
}

impl GroupEntry {
    fn new<P: Plugin>(plugin: P) -> Self {
        Self {
            id: PluginId::of::<P>(),
            plugin: Box::new(plugin),
        }
    }
}

/// Where [`PluginGroupBuilder::place`] puts a new member relative to an
/// existing one.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    Before(PluginId),
    After(PluginId),
}

/// An ordered, editable list of plugins.
///
/// [`PluginGroup::build`] returns one; callers then drop members they do
/// not want or splice extra plugins in next to a known member before
/// handing it to [`Registry::add_plugins`].
///
/// ```
/// use forgeui_plugin::{Plugin, PluginGroupBuilder, Registry, RegistryError};
///
/// struct Fonts;
/// impl Plugin for Fonts {
///     fn build(&self, _: &mut Registry) -> Result<(), RegistryError> { Ok(()) }
/// }
/// struct Icons;
/// impl Plugin for Icons {
///     fn build(&self, _: &mut Registry) -> Result<(), RegistryError> { Ok(()) }
/// }
///
/// let group = PluginGroupBuilder::new().add(Icons).add_before::<_, Icons>(Fonts);
/// assert!(group.names()[0].ends_with("Fonts"));
/// ```
#[derive(Default)]
pub struct PluginGroupBuilder {
    pub(crate) entries: Vec<GroupEntry>,
}

impl PluginGroupBuilder {
    /// An empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `plugin`.
    #[must_use]
    #[expect(
        clippy::should_implement_trait,
        reason = "appends a plugin; the group has no `+` operator"
    )]
    pub fn add<P: Plugin>(mut self, plugin: P) -> Self {
        self.entries.push(GroupEntry::new(plugin));
        self
    }

    /// Inserts `plugin` in front of the first `Target`. Without a `Target`
    /// the plugin goes first.
    #[must_use]
    pub fn add_before<P: Plugin, Target: Plugin>(self, plugin: P) -> Self {
        self.place(Anchor::Before(PluginId::of::<Target>()), plugin)
    }

    /// Inserts `plugin` right behind the first `Target`. Without a `Target`
    /// the plugin goes last.
    #[must_use]
    pub fn add_after<P: Plugin, Target: Plugin>(self, plugin: P) -> Self {
        self.place(Anchor::After(PluginId::of::<Target>()), plugin)
    }

    /// Drops every member of type `P`.
    #[must_use]
    pub fn disable<P: Plugin>(mut self) -> Self {
        let id = PluginId::of::<P>();
        self.entries.retain(|entry| entry.id != id);
        self
    }

    /// Whether a member of type `P` is present.
    #[must_use]
    pub fn contains<P: Plugin>(&self) -> bool {
        self.index_of(PluginId::of::<P>()).is_some()
    }

    /// Member names, in build order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.plugin.name()).collect()
    }

    /// Member count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when every member was disabled or none was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, id: PluginId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn place<P: Plugin>(mut self, anchor: Anchor, plugin: P) -> Self {
        let index = match anchor {
            Anchor::Before(target) => self.index_of(target).unwrap_or(0),
            Anchor::After(target) => self
                .index_of(target)
                .map_or(self.entries.len(), |index| index + 1),
        };
        self.entries.insert(index, GroupEntry::new(plugin));
        self
    }
}

impl core::fmt::Debug for PluginGroupBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
