//! Integration tests for attribute sets and element rendering.

use forgeui_html::{AttrValue, Attrs, Element, class_names};

#[test]
fn directive_attrs_splice_into_a_start_tag() {
    let attrs = Attrs::new()
        .with("@click", "open = !open")
        .with(":aria-expanded", "open");
    let html = format!("<button{attrs}>Menu</button>");
    assert_eq!(
        html,
        r#"<button @click="open = !open" :aria-expanded="open">Menu</button>"#
    );
}

#[test]
fn collected_attrs_keep_last_value() {
    let attrs: Attrs = vec![("hx-get", "/a"), ("hx-get", "/b")].into_iter().collect();
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs.get("hx-get"), Some(&AttrValue::Text("/b".into())));
}

#[test]
fn iteration_matches_render_order() {
    let attrs = Attrs::new().with("b", "2").with("a", "1").with_flag("c");
    let names: Vec<&str> = attrs.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["b", "a", "c"]);
}

#[test]
fn head_document_fragment() {
    let head = Element::new("head")
        .child(Element::meta_property("og:title", "Docs & Guides"))
        .child(Element::new("style").raw(":root { --primary: #4f46e5; }"));
    assert_eq!(
        head.render(),
        "<head><meta property=\"og:title\" content=\"Docs &amp; Guides\">\
         <style>:root { --primary: #4f46e5; }</style></head>"
    );
}

#[test]
fn class_names_dedupes_across_fragments() {
    assert_eq!(
        class_names(["flex flex-col", "gap-4", "flex-col items-start"]),
        "flex flex-col gap-4 items-start"
    );
}
