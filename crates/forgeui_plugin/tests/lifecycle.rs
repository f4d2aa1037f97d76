//! Registry behaviour seen from plugin authors.

use forgeui_alpine::{Component, Directive, Store};
use forgeui_html::Element;
use forgeui_js::{JsObject, RawJs};
use forgeui_plugin::{
    AssetSlot, Plugin, PluginGroup, PluginGroupBuilder, PluginId, Registry, RegistryError,
};

struct Settings {
    cdn: String,
}

struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        registry.insert_resource(Settings {
            cdn: "https://cdn.example.com".into(),
        });
        registry.add_script("https://cdn.example.com/alpine.js", AssetSlot::AlpineCore);
        Ok(())
    }
}

struct WidgetPlugin;

impl Plugin for WidgetPlugin {
    fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        let cdn = registry
            .resource::<Settings>()
            .map(|s| s.cdn.clone())
            .unwrap_or_default();
        registry.add_script(format!("{cdn}/widget.js"), AssetSlot::Library);
        registry.add_component(
            Component::new("widget").with_state(JsObject::new().with("open", false)),
        )?;
        registry.add_directive(Directive::new(
            "focus-first",
            RawJs::new("(el) => el.querySelector('input')?.focus()"),
        ))?;
        Ok(())
    }

    fn ready(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        if let Some(settings) = registry.resource_mut::<Settings>() {
            settings.cdn.push_str("/ready");
        }
        Ok(())
    }

    fn dependencies(&self) -> Vec<PluginId> {
        vec![PluginId::of::<CorePlugin>()]
    }
}

struct ConflictingStore;

impl Plugin for ConflictingStore {
    fn build(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        registry.add_store(Store::new("widget"))?;
        registry.add_store(Store::new("widget"))
    }
}

struct AppPlugins;

impl PluginGroup for AppPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::new().add(WidgetPlugin).add(CorePlugin)
    }
}

#[test]
fn dependents_read_resources_from_dependencies() {
    let mut registry = Registry::new();
    registry.add_plugins(AppPlugins.build());
    registry.finish().unwrap();

    assert_eq!(
        registry.resource::<Settings>().map(|s| s.cdn.as_str()),
        Some("https://cdn.example.com/ready")
    );
    assert!(registry.is_built());

    let html = registry.head_html().unwrap();
    assert_eq!(
        html,
        "<script src=\"https://cdn.example.com/widget.js\"></script>\n\
         <script>document.addEventListener('alpine:init', () => { \
         Alpine.data('widget', () => ({ open: false })); \
         Alpine.directive('focus-first', (el) => el.querySelector('input')?.focus()); });</script>\n\
         <script src=\"https://cdn.example.com/alpine.js\"></script>"
    );
}

#[test]
fn build_errors_surface_from_finish() {
    let mut registry = Registry::new();
    registry.add_plugins(ConflictingStore);
    assert_eq!(
        registry.finish(),
        Err(RegistryError::DuplicateStore("widget".into()))
    );
    assert!(!registry.is_built());
}

#[test]
fn disabled_dependency_is_missing() {
    let mut registry = Registry::new();
    registry.add_plugins(AppPlugins.build().disable::<CorePlugin>());
    let err = registry.finish().unwrap_err();
    assert!(err.to_string().contains("CorePlugin"));
}

#[test]
fn empty_init_script_is_omitted() {
    let mut registry = Registry::new();
    registry.add_head(Element::meta_name("theme-color", "#000"), AssetSlot::Meta);
    registry.finish().unwrap();
    assert_eq!(registry.init_script().unwrap(), "");
    assert_eq!(
        registry.head_html().unwrap(),
        r##"<meta name="theme-color" content="#000">"##
    );
}
