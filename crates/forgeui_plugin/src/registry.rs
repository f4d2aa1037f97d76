//! The plugin orchestrator.
//!
//! The [`Registry`] collects plugins, builds them in dependency order and
//! gathers what they contribute:
//!
//! - head assets (scripts, stylesheets, meta tags), ordered by [`AssetSlot`]
//! - Alpine stores, components, directives and magics, emitted as one
//!   `alpine:init` script
//! - typed resources that plugins share with each other
//!
//! # Lifecycle
//!
//! 1. **Dependency Resolution** - validate and topologically sort plugins
//! 2. **Build Phase** - call `plugin.build()` in dependency order
//! 3. **Ready Phase** - call `plugin.ready()` in dependency order
//! 4. **Output** - [`assets()`](Registry::assets), [`head_html()`](Registry::head_html),
//!    [`init_script()`](Registry::init_script)
//! 5. **Cleanup Phase** - call `plugin.cleanup()` in reverse order

use crate::asset::{Asset, AssetSlot};
use crate::error::RegistryError;
use crate::plugin::{Plugin, PluginId, Plugins};
use crate::resource::{Resource, Resources};
use forgeui_alpine::{Component, Directive, Magic, Store};
use forgeui_html::Element;
use hashbrown::{HashMap, HashSet};
use std::collections::BTreeSet;

/// Build state of the registry. Progresses linearly, or ends in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum BuildState {
    #[default]
    NotStarted,
    /// `build()` calls are running; plugins added now are built immediately.
    Building,
    /// `ready()` calls are running; plugins added now are ignored.
    Readying,
    Built,
    /// A `build()` or `ready()` call returned an error. Terminal.
    Failed,
}

/// Internal entry for a registered plugin.
struct PluginEntry {
    id: PluginId,
    plugin: Box<dyn Plugin>,
    /// Cached for error messages.
    name: String,
}

/// Collects plugins and their contributions.
///
/// # Example
///
/// ```
/// use forgeui_plugin::{AssetSlot, Plugin, Registry, RegistryError};
///
/// struct HtmxCdn;
///
/// impl Plugin for HtmxCdn {
///     fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
///         registry.add_script("https://cdn.example.com/htmx.min.js", AssetSlot::Library);
///         Ok(())
///     }
/// }
///
/// let mut registry = Registry::new();
/// registry.add_plugins(HtmxCdn);
/// registry.finish()?;
/// assert_eq!(
///     registry.head_html()?,
///     r#"<script src="https://cdn.example.com/htmx.min.js"></script>"#
/// );
/// # Ok::<(), RegistryError>(())
/// ```
#[derive(Default)]
pub struct Registry {
    resources: Resources,
    assets: Vec<Asset>,
    stores: Vec<Store>,
    components: Vec<Component>,
    directives: Vec<Directive>,
    magics: Vec<Magic>,

    /// Plugins pending build (not yet sorted).
    pending_plugins: Vec<PluginEntry>,
    /// Plugins that have been built, in sorted order.
    built_plugins: Vec<PluginEntry>,
    /// Set of plugin IDs that have been added (for duplicate detection).
    plugin_ids: HashSet<PluginId>,
    /// First error raised while adding plugins, reported by `finish()`.
    deferred_error: Option<RegistryError>,
    build_state: BuildState,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Plugin Management
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a single plugin or a [`PluginGroupBuilder`](crate::PluginGroupBuilder).
    ///
    /// Adding a unique plugin twice is reported by [`finish()`](Self::finish)
    /// as [`RegistryError::DuplicatePlugin`].
    pub fn add_plugins<P: Plugins>(&mut self, plugins: P) -> &mut Self {
        plugins.add_to_registry(self);
        self
    }

    /// Called by [`Plugins::add_to_registry`] implementations.
    pub(crate) fn add_plugin_boxed(&mut self, id: PluginId, plugin: Box<dyn Plugin>) {
        let name = plugin.name().to_string();

        match self.build_state {
            BuildState::Readying | BuildState::Built => {
                tracing::warn!(plugin = %name, "plugin added after the build phase; ignored");
                return;
            }
            BuildState::Failed => {
                tracing::warn!(plugin = %name, "plugin added to a failed registry; ignored");
                return;
            }
            BuildState::NotStarted | BuildState::Building => {}
        }

        if plugin.is_unique() && self.plugin_ids.contains(&id) {
            self.defer_error(RegistryError::DuplicatePlugin(name));
            return;
        }
        self.plugin_ids.insert(id);

        let entry = PluginEntry { id, plugin, name };

        // Sub-plugins added from build() are built right away
        if self.build_state == BuildState::Building {
            tracing::debug!(plugin = %entry.name, "building plugin");
            if let Err(err) = entry.plugin.build(self) {
                self.defer_error(err);
            }
            self.built_plugins.push(entry);
        } else {
            self.pending_plugins.push(entry);
        }
    }

    fn defer_error(&mut self, err: RegistryError) {
        if self.deferred_error.is_none() {
            self.deferred_error = Some(err);
        }
    }

    /// Returns true if a plugin of the given type has been added.
    #[must_use]
    pub fn has_plugin<P: Plugin>(&self) -> bool {
        self.plugin_ids.contains(&PluginId::of::<P>())
    }

    /// Returns true once [`finish()`](Self::finish) has completed.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.build_state == BuildState::Built
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resource Access
    // ─────────────────────────────────────────────────────────────────────────

    /// Inserts a resource, replacing and returning any previous value of the same type.
    pub fn insert_resource<R: Resource>(&mut self, resource: R) -> Option<R> {
        self.resources.insert(resource)
    }

    /// Gets a resource.
    #[must_use]
    pub fn resource<R: Resource>(&self) -> Option<&R> {
        self.resources.get::<R>()
    }

    /// Gets a resource mutably.
    #[must_use]
    pub fn resource_mut<R: Resource>(&mut self) -> Option<&mut R> {
        self.resources.get_mut::<R>()
    }

    /// Returns true if a resource of type `R` exists.
    #[must_use]
    pub fn contains_resource<R: Resource>(&self) -> bool {
        self.resources.contains::<R>()
    }

    /// Removes a resource and returns it.
    pub fn remove_resource<R: Resource>(&mut self) -> Option<R> {
        self.resources.remove::<R>()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Contributions
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds any asset.
    pub fn add_asset(&mut self, asset: Asset) -> &mut Self {
        self.assets.push(asset);
        self
    }

    /// Adds an external `<script src>` in `slot`.
    pub fn add_script(&mut self, src: impl Into<String>, slot: AssetSlot) -> &mut Self {
        self.add_asset(Asset::script(src, slot))
    }

    /// Adds an inline `<script>` in `slot`.
    pub fn add_inline_script(&mut self, code: impl Into<String>, slot: AssetSlot) -> &mut Self {
        self.add_asset(Asset::inline_script(code, slot))
    }

    /// Adds a `<link rel="stylesheet">`.
    pub fn add_stylesheet(&mut self, href: impl Into<String>) -> &mut Self {
        self.add_asset(Asset::stylesheet(href))
    }

    /// Adds a pre-built head element in `slot`.
    pub fn add_head(&mut self, element: Element, slot: AssetSlot) -> &mut Self {
        self.add_asset(Asset::head(element, slot))
    }

    /// Registers an `Alpine.store`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateStore`] if the name is taken.
    pub fn add_store(&mut self, store: Store) -> Result<(), RegistryError> {
        if self.stores.iter().any(|s| s.name() == store.name()) {
            return Err(RegistryError::DuplicateStore(store.name().to_string()));
        }
        self.stores.push(store);
        Ok(())
    }

    /// Registers an `Alpine.data` component.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateComponent`] if the name is taken.
    pub fn add_component(&mut self, component: Component) -> Result<(), RegistryError> {
        if self.components.iter().any(|c| c.name() == component.name()) {
            return Err(RegistryError::DuplicateComponent(component.name().to_string()));
        }
        self.components.push(component);
        Ok(())
    }

    /// Registers a custom `x-` directive.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateDirective`] if the name is taken.
    pub fn add_directive(&mut self, directive: Directive) -> Result<(), RegistryError> {
        if self.directives.iter().any(|d| d.name() == directive.name()) {
            return Err(RegistryError::DuplicateDirective(directive.name().to_string()));
        }
        self.directives.push(directive);
        Ok(())
    }

    /// Registers a `$` magic.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateMagic`] if the name is taken.
    pub fn add_magic(&mut self, magic: Magic) -> Result<(), RegistryError> {
        if self.magics.iter().any(|m| m.name() == magic.name()) {
            return Err(RegistryError::DuplicateMagic(magic.name().to_string()));
        }
        self.magics.push(magic);
        Ok(())
    }

    /// Registered stores, in registration order.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Registered components, in registration order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Registered directives, in registration order.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Registered magics, in registration order.
    #[must_use]
    pub fn magics(&self) -> &[Magic] {
        &self.magics
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle Methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Builds all plugins.
    ///
    /// This method:
    /// 1. Reports any error recorded while adding plugins
    /// 2. Topologically sorts plugins by dependencies, keeping insertion
    ///    order among independent plugins
    /// 3. Calls `build()` on each plugin in order
    /// 4. Calls `ready()` on each plugin in order
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AlreadyBuilt`] if called more than once
    /// - [`RegistryError::BuildFailed`] if an earlier call failed in `build()` or `ready()`
    /// - [`RegistryError::DuplicatePlugin`] if a unique plugin was added twice
    /// - [`RegistryError::MissingDependency`] / [`RegistryError::CircularDependency`]
    /// - any error returned by a plugin's `build()` or `ready()`
    ///
    /// Errors found before any plugin is built leave the registry untouched,
    /// so the caller may add the missing plugin and call `finish()` again.
    /// Once a plugin's `build()` or `ready()` fails the registry is spent:
    /// later plugins are ignored and `finish()` keeps failing.
    pub fn finish(&mut self) -> Result<(), RegistryError> {
        match self.build_state {
            BuildState::NotStarted => {}
            BuildState::Failed => return Err(RegistryError::BuildFailed),
            _ => return Err(RegistryError::AlreadyBuilt),
        }
        if let Some(err) = self.deferred_error.take() {
            return Err(err);
        }

        let sorted_plugins = self.sort_plugins_by_dependencies()?;

        if let Err(err) = self.build_and_ready(sorted_plugins) {
            tracing::error!(error = %err, "registry failed to build");
            self.build_state = BuildState::Failed;
            return Err(err);
        }

        self.build_state = BuildState::Built;
        tracing::info!(
            plugins = self.built_plugins.len(),
            assets = self.assets.len(),
            stores = self.stores.len(),
            directives = self.directives.len(),
            "registry finished"
        );
        Ok(())
    }

    fn build_and_ready(&mut self, sorted_plugins: Vec<PluginEntry>) -> Result<(), RegistryError> {
        self.build_state = BuildState::Building;
        for entry in sorted_plugins {
            tracing::debug!(plugin = %entry.name, "building plugin");
            let built = entry.plugin.build(self);
            self.built_plugins.push(entry);
            built?;
        }
        if let Some(err) = self.deferred_error.take() {
            return Err(err);
        }

        self.build_state = BuildState::Readying;
        let plugins = core::mem::take(&mut self.built_plugins);
        let readied = plugins.iter().try_for_each(|entry| entry.plugin.ready(self));
        self.built_plugins = plugins;
        readied
    }

    /// Calls `cleanup()` on every built plugin, dependents first.
    pub fn cleanup(&mut self) {
        let plugins = core::mem::take(&mut self.built_plugins);
        for entry in plugins.iter().rev() {
            entry.plugin.cleanup(self);
        }
        self.built_plugins = plugins;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_built(&self) -> Result<(), RegistryError> {
        if self.is_built() {
            Ok(())
        } else {
            Err(RegistryError::NotBuilt)
        }
    }

    /// Contributed assets, sorted by slot (stable) with repeated URLs dropped.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotBuilt`] before [`finish()`](Self::finish).
    pub fn assets(&self) -> Result<Vec<Asset>, RegistryError> {
        self.ensure_built()?;
        Ok(sort_and_dedup(self.assets.clone()))
    }

    /// The `alpine:init` script for every registered store, component,
    /// directive and magic; empty if nothing was registered.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotBuilt`] before [`finish()`](Self::finish).
    pub fn init_script(&self) -> Result<String, RegistryError> {
        self.ensure_built()?;
        Ok(forgeui_alpine::init_script(
            &self.stores,
            &self.components,
            &self.directives,
            &self.magics,
        ))
    }

    /// Renders every asset plus the `alpine:init` script, one tag per line.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotBuilt`] before [`finish()`](Self::finish).
    pub fn head_html(&self) -> Result<String, RegistryError> {
        let init = self.init_script()?;
        let mut assets = self.assets.clone();
        if !init.is_empty() {
            assets.push(Asset::inline_script(init, AssetSlot::AlpineInit));
        }
        let tags: Vec<String> = sort_and_dedup(assets).iter().map(Asset::render).collect();
        Ok(tags.join("\n"))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal: Dependency Resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Sorts pending plugins by dependencies using Kahn's algorithm.
    fn sort_plugins_by_dependencies(&mut self) -> Result<Vec<PluginEntry>, RegistryError> {
        let n = self.pending_plugins.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut id_to_indices: HashMap<PluginId, Vec<usize>> = HashMap::new();
        for (i, entry) in self.pending_plugins.iter().enumerate() {
            id_to_indices.entry(entry.id).or_default().push(i);
        }

        let mut in_degree = vec![0usize; n];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];

        for (i, entry) in self.pending_plugins.iter().enumerate() {
            for dep_id in entry.plugin.dependencies() {
                let Some(dep_indices) = id_to_indices.get(&dep_id) else {
                    return Err(RegistryError::MissingDependency {
                        plugin: entry.name.clone(),
                        dependency: dep_id.type_name().to_string(),
                    });
                };
                for &dep_idx in dep_indices {
                    dependents[dep_idx].push(i);
                    in_degree[i] += 1;
                }
            }
        }

        // Lowest index first, so independent plugins keep their insertion order
        let mut ready: BTreeSet<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut sorted_indices: Vec<usize> = Vec::with_capacity(n);

        while let Some(idx) = ready.pop_first() {
            sorted_indices.push(idx);
            for &dependent_idx in &dependents[idx] {
                in_degree[dependent_idx] -= 1;
                if in_degree[dependent_idx] == 0 {
                    ready.insert(dependent_idx);
                }
            }
        }

        if sorted_indices.len() != n {
            let in_cycle: Vec<String> = in_degree
                .iter()
                .enumerate()
                .filter(|(_, deg)| **deg > 0)
                .map(|(i, _)| self.pending_plugins[i].name.clone())
                .collect();
            return Err(RegistryError::CircularDependency(in_cycle));
        }

        let mut slots: Vec<Option<PluginEntry>> = core::mem::take(&mut self.pending_plugins)
            .into_iter()
            .map(Some)
            .collect();
        Ok(sorted_indices
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect())
    }
}

fn sort_and_dedup(mut assets: Vec<Asset>) -> Vec<Asset> {
    assets.sort_by_key(Asset::slot);
    let mut seen: HashSet<String> = HashSet::new();
    assets.retain(|asset| match asset.url() {
        Some(url) => seen.insert(url.to_string()),
        None => true,
    });
    assets
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("state", &self.build_state)
            .field("plugins", &self.plugin_ids.len())
            .field("assets", &self.assets.len())
            .field("resources", &self.resources)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::Mutex;

    type Log = Arc<Mutex<Vec<String>>>;

    struct Recorder {
        label: &'static str,
        log: Log,
        deps: Vec<PluginId>,
    }

    impl Recorder {
        fn record(&self, phase: &str) {
            self.log.lock().unwrap().push(format!("{phase}:{}", self.label));
        }
    }

    // One type per label so each has its own PluginId.
    macro_rules! recorder_plugin {
        ($name:ident) => {
            struct $name(Recorder);

            impl Plugin for $name {
                fn build(&self, _registry: &mut Registry) -> Result<(), RegistryError> {
                    self.0.record("build");
                    Ok(())
                }

                fn ready(&self, _registry: &mut Registry) -> Result<(), RegistryError> {
                    self.0.record("ready");
                    Ok(())
                }

                fn cleanup(&self, _registry: &mut Registry) {
                    self.0.record("cleanup");
                }

                fn dependencies(&self) -> Vec<PluginId> {
                    self.0.deps.clone()
                }
            }
        };
    }

    recorder_plugin!(First);
    recorder_plugin!(Second);
    recorder_plugin!(Third);

    fn recorder(label: &'static str, log: &Log, deps: Vec<PluginId>) -> Recorder {
        Recorder {
            label,
            log: Arc::clone(log),
            deps,
        }
    }

    #[test]
    fn builds_in_dependency_order_then_readies() {
        let log: Log = Arc::default();
        let mut registry = Registry::new();
        registry
            .add_plugins(Third(recorder("c", &log, vec![PluginId::of::<Second>()])))
            .add_plugins(Second(recorder("b", &log, vec![PluginId::of::<First>()])))
            .add_plugins(First(recorder("a", &log, vec![])));
        registry.finish().unwrap();
        registry.cleanup();

        assert_eq!(
            *log.lock().unwrap(),
            [
                "build:a", "build:b", "build:c", "ready:a", "ready:b", "ready:c", "cleanup:c",
                "cleanup:b", "cleanup:a"
            ]
        );
    }

    #[test]
    fn independent_plugins_keep_insertion_order() {
        let log: Log = Arc::default();
        let mut registry = Registry::new();
        registry
            .add_plugins(Second(recorder("b", &log, vec![])))
            .add_plugins(First(recorder("a", &log, vec![])));
        registry.finish().unwrap();
        assert_eq!(log.lock().unwrap()[..2], ["build:b", "build:a"]);
    }

    #[test]
    fn missing_dependency() {
        let log: Log = Arc::default();
        let mut registry = Registry::new();
        registry.add_plugins(Second(recorder("b", &log, vec![PluginId::of::<First>()])));
        let err = registry.finish().unwrap_err();
        assert!(matches!(err, RegistryError::MissingDependency { .. }));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn circular_dependency() {
        let log: Log = Arc::default();
        let mut registry = Registry::new();
        registry
            .add_plugins(First(recorder("a", &log, vec![PluginId::of::<Second>()])))
            .add_plugins(Second(recorder("b", &log, vec![PluginId::of::<First>()])))
            .add_plugins(Third(recorder("c", &log, vec![])));
        let Err(RegistryError::CircularDependency(names)) = registry.finish() else {
            panic!("expected a cycle");
        };
        assert_eq!(names.len(), 2);
        assert!(names.iter().any(|n| n.contains("First")));
    }

    #[test]
    fn duplicate_unique_plugin() {
        let log: Log = Arc::default();
        let mut registry = Registry::new();
        registry
            .add_plugins(First(recorder("a", &log, vec![])))
            .add_plugins(First(recorder("a", &log, vec![])));
        assert!(matches!(
            registry.finish(),
            Err(RegistryError::DuplicatePlugin(name)) if name.contains("First")
        ));
    }

    struct Counter;

    impl Plugin for Counter {
        fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
            match registry.resource_mut::<u32>() {
                Some(count) => *count += 1,
                None => {
                    registry.insert_resource(1u32);
                }
            }
            Ok(())
        }

        fn is_unique(&self) -> bool {
            false
        }
    }

    #[test]
    fn non_unique_plugin_can_be_added_multiple_times() {
        let mut registry = Registry::new();
        registry
            .add_plugins(Counter)
            .add_plugins(Counter)
            .add_plugins(Counter);
        registry.finish().unwrap();
        assert_eq!(registry.resource::<u32>(), Some(&3));
        assert!(registry.has_plugin::<Counter>());
    }

    #[test]
    fn finish_twice() {
        let mut registry = Registry::new();
        registry.finish().unwrap();
        assert_eq!(registry.finish(), Err(RegistryError::AlreadyBuilt));
    }

    struct Broken;

    impl Plugin for Broken {
        fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
            registry.add_store(Store::new("cart"))?;
            registry.add_store(Store::new("cart"))
        }
    }

    #[test]
    fn failed_build_closes_the_registry() {
        let log: Log = Arc::default();
        let mut registry = Registry::new();
        registry.add_plugins(Broken);
        assert_eq!(
            registry.finish(),
            Err(RegistryError::DuplicateStore("cart".into()))
        );
        assert!(!registry.is_built());

        registry.add_plugins(First(recorder("a", &log, vec![])));
        assert!(log.lock().unwrap().is_empty());
        assert!(!registry.has_plugin::<First>());
        assert_eq!(registry.finish(), Err(RegistryError::BuildFailed));
        assert_eq!(registry.head_html(), Err(RegistryError::NotBuilt));
    }

    #[test]
    fn missing_dependency_can_be_added_before_retry() {
        let log: Log = Arc::default();
        let mut registry = Registry::new();
        registry.add_plugins(Second(recorder("b", &log, vec![PluginId::of::<First>()])));
        assert!(registry.finish().is_err());

        registry.add_plugins(First(recorder("a", &log, vec![])));
        registry.finish().unwrap();
        assert_eq!(log.lock().unwrap()[..2], ["build:a", "build:b"]);
    }

    #[test]
    fn output_requires_finish() {
        let registry = Registry::new();
        assert_eq!(registry.assets(), Err(RegistryError::NotBuilt));
        assert_eq!(registry.head_html(), Err(RegistryError::NotBuilt));
        assert_eq!(registry.init_script(), Err(RegistryError::NotBuilt));
    }

    struct Parent;

    impl Plugin for Parent {
        fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
            registry.add_plugins(Child);
            registry.add_script("/parent.js", AssetSlot::Body);
            Ok(())
        }
    }

    struct Child;

    impl Plugin for Child {
        fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
            registry.add_script("/child.js", AssetSlot::Body);
            Ok(())
        }
    }

    #[test]
    fn sub_plugins_are_built_immediately() {
        let mut registry = Registry::new();
        registry.add_plugins(Parent);
        registry.finish().unwrap();
        let urls: Vec<String> = registry
            .assets()
            .unwrap()
            .iter()
            .filter_map(|a| a.url().map(str::to_string))
            .collect();
        assert_eq!(urls, ["/child.js", "/parent.js"]);
        assert!(registry.has_plugin::<Child>());
    }

    #[test]
    fn duplicate_registrations() {
        let mut registry = Registry::new();
        registry.add_store(Store::new("theme")).unwrap();
        assert_eq!(
            registry.add_store(Store::new("theme")),
            Err(RegistryError::DuplicateStore("theme".into()))
        );
        registry
            .add_magic(Magic::new("track", forgeui_js::RawJs::new("() => {}")))
            .unwrap();
        assert_eq!(
            registry.add_magic(Magic::new("track", forgeui_js::RawJs::new("() => {}"))),
            Err(RegistryError::DuplicateMagic("track".into()))
        );
        assert_eq!(registry.stores().len(), 1);
        assert_eq!(registry.magics().len(), 1);
    }

    #[test]
    fn assets_sorted_and_deduplicated() {
        let mut registry = Registry::new();
        registry
            .add_script("/alpine.js", AssetSlot::AlpineCore)
            .add_script("/collapse.js", AssetSlot::AlpinePlugin)
            .add_stylesheet("/app.css")
            .add_script("/collapse.js", AssetSlot::AlpinePlugin)
            .add_head(Element::meta_name("robots", "index"), AssetSlot::Meta);
        registry.finish().unwrap();

        let slots: Vec<AssetSlot> = registry.assets().unwrap().iter().map(Asset::slot).collect();
        assert_eq!(
            slots,
            [
                AssetSlot::Meta,
                AssetSlot::Style,
                AssetSlot::AlpinePlugin,
                AssetSlot::AlpineCore
            ]
        );
    }

    #[test]
    fn init_script_precedes_alpine_core() {
        let mut registry = Registry::new();
        registry.add_script("/alpine.js", AssetSlot::AlpineCore);
        registry.add_script("/focus.js", AssetSlot::AlpinePlugin);
        registry.add_store(Store::new("ui")).unwrap();
        registry.finish().unwrap();

        let html = registry.head_html().unwrap();
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("/focus.js"));
        assert!(lines[1].starts_with("<script>document.addEventListener('alpine:init'"));
        assert!(lines[2].contains("/alpine.js"));
    }
}
