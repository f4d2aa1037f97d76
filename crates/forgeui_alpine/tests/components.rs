//! Builds small Alpine components end to end from the public API.

use core::time::Duration;
use forgeui_alpine::directives::{x_bind, x_cloak, x_data_component, x_data_from, x_for_key, x_show, x_text};
use forgeui_alpine::magic::dispatch;
use forgeui_alpine::{AlpineExt, Component, Key, Model, On, Transition, init_script, scripts};
use forgeui_js::{JsObject, JsValue, RawJs};
use serde::Serialize;

#[derive(Serialize)]
struct Todos {
    draft: String,
    items: Vec<Todo>,
}

#[derive(Serialize)]
struct Todo {
    id: u32,
    title: String,
    done: bool,
}

#[test]
fn dropdown_markup() {
    let root = x_data_component("dropdown", &[]);
    let trigger = On::click("toggle()").attrs().merge(x_bind("aria-expanded", "open"));
    let close = On::click("close()").outside().attrs();
    let menu = x_show("open")
        .merge(Transition::new().origin("top.right").attrs())
        .merge(close)
        .merge(x_cloak());

    let html = format!("<div{root}><button{trigger}>Options</button><ul{menu}></ul></div>");
    assert_eq!(
        html,
        "<div x-data=\"dropdown()\">\
         <button @click=\"toggle()\" :aria-expanded=\"open\">Options</button>\
         <ul x-show=\"open\" x-transition.origin.top.right @click.outside=\"close()\" x-cloak></ul>\
         </div>"
    );
}

#[test]
fn todo_list_from_serde_state() {
    let state = Todos {
        draft: String::new(),
        items: vec![Todo {
            id: 1,
            title: "Write docs".into(),
            done: false,
        }],
    };
    let root = x_data_from(&state);
    assert_eq!(
        root.value("x-data"),
        Some("{ draft: '', items: [{ id: 1, title: 'Write docs', done: false }] }")
    );

    let input = Model::new("draft").attrs().merge(
        On::new("keydown", "items.push({ id: Date.now(), title: draft, done: false }); draft = ''")
            .key(Key::Enter)
            .prevent()
            .attrs(),
    );
    assert!(input.contains("@keydown.enter.prevent"));

    let rows = x_for_key("item", "items", "item.id");
    assert_eq!(rows.value("x-for"), Some("item in items"));
    assert_eq!(rows.value(":key"), Some("item.id"));
    assert_eq!(x_text("item.title").value("x-text"), Some("item.title"));
}

#[test]
fn registered_component_and_dispatch() {
    let component = Component::new("counter")
        .with_params(["start"])
        .with_state(JsObject::new().with("count", RawJs::new("start")))
        .with_methods(format!(
            "inc() {{ this.count++; {} }}",
            dispatch("counted", Some(&JsValue::raw("this.count")))
        ));
    let script = init_script(&[], &[component], &[], &[]);
    assert_eq!(
        script,
        "document.addEventListener('alpine:init', () => { \
         Alpine.data('counter', (start) => ({ count: start, inc() { this.count++; $dispatch('counted', this.count) } })); });"
    );
}

#[test]
fn search_box_debounce() {
    let attrs = Model::new("query")
        .debounce(Some(Duration::from_millis(400)))
        .attrs();
    assert_eq!(attrs.render(), r#" x-model.debounce.400ms="query""#);
}

#[test]
fn plugin_scripts_load_before_core() {
    let tags: Vec<String> = scripts::scripts(
        scripts::DEFAULT_CDN,
        "3.14.9",
        &[AlpineExt::Collapse, AlpineExt::Mask],
    )
    .iter()
    .map(forgeui_html::Element::render)
    .collect();
    assert_eq!(
        tags,
        [
            r#"<script src="https://cdn.jsdelivr.net/npm/@alpinejs/collapse@3.14.9/dist/cdn.min.js" defer></script>"#,
            r#"<script src="https://cdn.jsdelivr.net/npm/@alpinejs/mask@3.14.9/dist/cdn.min.js" defer></script>"#,
            r#"<script src="https://cdn.jsdelivr.net/npm/alpinejs@3.14.9/dist/cdn.min.js" defer></script>"#,
        ]
    );
}
