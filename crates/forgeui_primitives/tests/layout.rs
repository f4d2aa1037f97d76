//! Composing primitives into page sections.

use forgeui_html::Attrs;
use forgeui_primitives::{
    Align, Box, Center, Container, Grid, Primitive, Provider, Radius, Size, Space, Spacer,
    hstack, vstack,
};

fn card(title: &str) -> String {
    Box::new()
        .with_padding(Space::S4)
        .with_rounded(Radius::Md)
        .with_border()
        .render(&format!("<h3>{title}</h3>"))
}

#[test]
fn dashboard_section() {
    let cards: String = ["Users", "Revenue", "Churn"].map(card).concat();
    let grid = Grid::new(1).with_md(3).with_gap(Space::S4).render(&cards);
    let header = hstack()
        .with_align(Align::Center)
        .render(&format!("<h2>Overview</h2>{}<a>All</a>", Spacer::flexible().render("")));
    let page = Container::new(Size::Xl6)
        .with_padding_x(Space::S6)
        .render(&vstack().with_gap(Space::S8).render(&(header + &grid)));

    assert!(page.starts_with(r#"<div class="mx-auto w-full max-w-6xl px-6"><div class="flex flex-col gap-8">"#));
    assert!(page.contains(r#"<div class="flex flex-row items-center"><h2>Overview</h2><div class="flex-1" aria-hidden="true"></div><a>All</a></div>"#));
    assert!(page.contains(r#"<div class="grid grid-cols-1 md:grid-cols-3 gap-4">"#));
    assert_eq!(page.matches(r#"<div class="p-4 rounded-md border">"#).count(), 3);
    assert!(page.ends_with("</div></div></div>"));
}

#[test]
fn provider_wraps_layout() {
    let panel = Center::new().render("<p x-show=\"open\">Hello</p>");
    let html = Provider::new()
        .with_state("open", true)
        .with_methods("close() { this.open = false }")
        .with_class("relative")
        .render(&panel);
    assert_eq!(
        html,
        r#"<div class="relative" x-data="{ open: true, close() { this.open = false } }"><div class="flex items-center justify-center"><p x-show="open">Hello</p></div></div>"#
    );
}

#[test]
fn primitives_accept_directive_attrs() {
    let html = Box::new()
        .with_tag("button")
        .with_padding_x(Space::S3)
        .with_attrs(Attrs::single("@click", "open = true").with("class", "font-medium"))
        .render("Open");
    assert_eq!(
        html,
        r#"<button class="px-3 font-medium" @click="open = true">Open</button>"#
    );
}
