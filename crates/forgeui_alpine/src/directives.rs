//! Alpine directive attributes.
//!
//! Every function returns an [`Attrs`] set, so directives compose with
//! [`Attrs::merge`] and render straight into a start tag. Expressions are
//! passed through as written; they are escaped for the HTML attribute when
//! rendered, not for JavaScript.

use forgeui_html::Attrs;
use forgeui_js::{JsObject, JsValue, build_object, quote_string, to_js};
use serde::Serialize;

/// `x-data="{ ... }"` from serialized state.
#[must_use]
pub fn x_data(state: &JsObject) -> Attrs {
    Attrs::single("x-data", build_object(state, ""))
}

/// `x-data` from state plus free-form method text.
///
/// ```
/// use forgeui_alpine::directives::x_data_with_methods;
/// use forgeui_js::JsObject;
///
/// let attrs = x_data_with_methods(
///     &JsObject::new().with("count", 0),
///     "inc() { this.count++ }",
/// );
/// assert_eq!(attrs.value("x-data"), Some("{ count: 0, inc() { this.count++ } }"));
/// ```
#[must_use]
pub fn x_data_with_methods(state: &JsObject, methods: &str) -> Attrs {
    Attrs::single("x-data", build_object(state, methods))
}

/// `x-data` from any serializable struct or map.
#[must_use]
pub fn x_data_from<T: Serialize + ?Sized>(state: &T) -> Attrs {
    x_data(&JsObject::from_serialize(state))
}

/// `x-data="name(args)"`, referencing a component registered with `Alpine.data()`.
#[must_use]
pub fn x_data_component(name: &str, args: &[JsValue]) -> Attrs {
    let args: Vec<String> = args.iter().map(to_js).collect();
    Attrs::single("x-data", format!("{name}({})", args.join(", ")))
}

/// A bare `x-data`, which makes an element an Alpine component with no state.
#[must_use]
pub fn x_data_empty() -> Attrs {
    Attrs::new().with_flag("x-data")
}

/// `x-init="expr"`.
#[must_use]
pub fn x_init(expr: &str) -> Attrs {
    Attrs::single("x-init", expr)
}

/// `x-show="expr"`.
#[must_use]
pub fn x_show(expr: &str) -> Attrs {
    Attrs::single("x-show", expr)
}

/// `x-text="expr"`.
#[must_use]
pub fn x_text(expr: &str) -> Attrs {
    Attrs::single("x-text", expr)
}

/// `x-html="expr"`.
#[must_use]
pub fn x_html(expr: &str) -> Attrs {
    Attrs::single("x-html", expr)
}

/// `x-effect="expr"`.
#[must_use]
pub fn x_effect(expr: &str) -> Attrs {
    Attrs::single("x-effect", expr)
}

/// `x-ref="name"`.
#[must_use]
pub fn x_ref(name: &str) -> Attrs {
    Attrs::single("x-ref", name)
}

/// `x-if="expr"`. Alpine requires this on a `<template>` element.
#[must_use]
pub fn x_if(expr: &str) -> Attrs {
    Attrs::single("x-if", expr)
}

/// `x-teleport="selector"`. Alpine requires this on a `<template>` element.
#[must_use]
pub fn x_teleport(selector: &str) -> Attrs {
    Attrs::single("x-teleport", selector)
}

/// `x-modelable="property"`.
#[must_use]
pub fn x_modelable(property: &str) -> Attrs {
    Attrs::single("x-modelable", property)
}

/// `x-id="['a', 'b']"`, scoping `$id()` calls to this element.
#[must_use]
pub fn x_id(ids: &[&str]) -> Attrs {
    let ids: Vec<String> = ids.iter().map(|id| quote_string(id)).collect();
    Attrs::single("x-id", format!("[{}]", ids.join(", ")))
}

/// `x-cloak`, hidden until Alpine initializes (pair with `[x-cloak] { display: none }`).
#[must_use]
pub fn x_cloak() -> Attrs {
    Attrs::new().with_flag("x-cloak")
}

/// `x-ignore`, excluding the subtree from Alpine.
#[must_use]
pub fn x_ignore() -> Attrs {
    Attrs::new().with_flag("x-ignore")
}

/// `:attr="expr"` (shorthand for `x-bind:attr`).
#[must_use]
pub fn x_bind(attr: &str, expr: &str) -> Attrs {
    Attrs::single(format!(":{attr}"), expr)
}

/// `x-bind:attr="expr"`.
#[must_use]
pub fn x_bind_long(attr: &str, expr: &str) -> Attrs {
    Attrs::single(format!("x-bind:{attr}"), expr)
}

/// `x-bind="expr"`, binding an object of directives.
#[must_use]
pub fn x_bind_object(expr: &str) -> Attrs {
    Attrs::single("x-bind", expr)
}

/// `:class="{ 'class-name': condition }"`.
///
/// Values are usually [`RawJs`](forgeui_js::RawJs) conditions.
#[must_use]
pub fn x_bind_class(classes: &JsObject) -> Attrs {
    x_bind("class", &classes.to_js())
}

/// `:style="{ prop: value }"`.
#[must_use]
pub fn x_bind_style(styles: &JsObject) -> Attrs {
    x_bind("style", &styles.to_js())
}

/// `@event="handler"` (shorthand for `x-on:event`). See [`On`](crate::On) for modifiers.
#[must_use]
pub fn x_on(event: &str, handler: &str) -> Attrs {
    Attrs::single(format!("@{event}"), handler)
}

/// `x-model="expr"`. See [`Model`](crate::Model) for modifiers.
#[must_use]
pub fn x_model(expr: &str) -> Attrs {
    Attrs::single("x-model", expr)
}

/// `x-for="item in items"`. Alpine requires this on a `<template>` element.
#[must_use]
pub fn x_for(item: &str, items: &str) -> Attrs {
    Attrs::single("x-for", format!("{item} in {items}"))
}

/// `x-for="(item, index) in items"`.
#[must_use]
pub fn x_for_indexed(item: &str, index: &str, items: &str) -> Attrs {
    Attrs::single("x-for", format!("({item}, {index}) in {items}"))
}

/// `x-for="item in items" :key="key"`.
#[must_use]
pub fn x_for_key(item: &str, items: &str, key: &str) -> Attrs {
    x_for(item, items).merge(x_bind("key", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgeui_js::RawJs;

    #[test]
    fn x_data_empty_state_is_braces() {
        assert_eq!(x_data(&JsObject::new()).render(), r#" x-data="{}""#);
        assert_eq!(x_data_empty().render(), " x-data");
    }

    #[test]
    fn x_data_strings_survive_attribute_escaping() {
        let attrs = x_data(&JsObject::new().with("title", "Tom's \"list\""));
        assert_eq!(attrs.value("x-data"), Some(r#"{ title: 'Tom\'s "list"' }"#));
        assert_eq!(
            attrs.render(),
            r#" x-data="{ title: &#39;Tom\&#39;s &quot;list&quot;&#39; }""#
        );
    }

    #[test]
    fn x_data_component_call() {
        let attrs = x_data_component("dropdown", &[JsValue::from(true), JsValue::from("left")]);
        assert_eq!(attrs.value("x-data"), Some("dropdown(true, 'left')"));
        assert_eq!(
            x_data_component("counter", &[]).value("x-data"),
            Some("counter()")
        );
    }

    #[test]
    fn bind_shorthands() {
        assert_eq!(x_bind("disabled", "busy").render(), r#" :disabled="busy""#);
        assert_eq!(
            x_bind_long("href", "url").render(),
            r#" x-bind:href="url""#
        );
        let classes = JsObject::new()
            .with("active", RawJs::new("tab === 1"))
            .with("text-red-500", RawJs::new("error"));
        assert_eq!(
            x_bind_class(&classes).value(":class"),
            Some("{ active: tab === 1, 'text-red-500': error }")
        );
    }

    #[test]
    fn loops() {
        assert_eq!(x_for("todo", "todos").value("x-for"), Some("todo in todos"));
        assert_eq!(
            x_for_indexed("todo", "i", "todos").value("x-for"),
            Some("(todo, i) in todos")
        );
        assert_eq!(
            x_for_key("todo", "todos", "todo.id").render(),
            r#" x-for="todo in todos" :key="todo.id""#
        );
    }

    #[test]
    fn x_id_quotes_each_id() {
        assert_eq!(x_id(&["tab", "panel"]).value("x-id"), Some("['tab', 'panel']"));
    }

    #[test]
    fn flags() {
        assert_eq!(x_cloak().render(), " x-cloak");
        assert_eq!(x_ignore().render(), " x-ignore");
    }
}
