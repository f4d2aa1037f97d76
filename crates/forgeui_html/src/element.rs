//! Minimal element rendering for the tags ForgeUI emits itself.

use crate::attrs::Attrs;
use crate::escape::escape_text;

/// Elements rendered without a closing tag.
const VOID_ELEMENTS: &[&str] = &["base", "br", "hr", "img", "input", "link", "meta"];

/// Elements whose content is raw text rather than markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Text(String),
    Raw(String),
    Element(Element),
}

/// An HTML element with ordered attributes and children.
///
/// Used for `<script>`, `<link>`, `<meta>`, `<style>` and the wrapper `<div>`s
/// of layout primitives. It is not a general DOM: children are either
/// escaped text, verbatim markup, or nested elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Attrs,
    children: Vec<Content>,
}

impl Element {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    /// `<script src="url"></script>`.
    #[must_use]
    pub fn script_src(url: impl Into<String>) -> Self {
        Self::new("script").attr("src", url)
    }

    /// `<script>js</script>`.
    #[must_use]
    pub fn inline_script(js: impl Into<String>) -> Self {
        Self::new("script").raw(js)
    }

    /// `<link rel="stylesheet" href="url">`.
    #[must_use]
    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self::new("link").attr("rel", "stylesheet").attr("href", href)
    }

    /// `<meta name="name" content="content">`.
    #[must_use]
    pub fn meta_name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new("meta").attr("name", name).attr("content", content)
    }

    /// `<meta property="property" content="content">`.
    #[must_use]
    pub fn meta_property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new("meta")
            .attr("property", property)
            .attr("content", content)
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the element's attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attrs {
        &self.attrs
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    /// Sets a boolean attribute.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attrs.insert_flag(name);
        self
    }

    /// Merges an attribute set into this element (see [`Attrs::merge`]).
    #[must_use]
    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = self.attrs.merge(attrs);
        self
    }

    /// Appends escaped text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Content::Text(text.into()));
        self
    }

    /// Appends verbatim content.
    #[must_use]
    pub fn raw(mut self, html: impl Into<String>) -> Self {
        self.children.push(Content::Raw(html.into()));
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Content::Element(element));
        self
    }

    /// Returns true if this is a void element.
    #[must_use]
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Renders the element to a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        out.push_str(&self.attrs.render());
        out.push('>');

        if self.is_void() {
            return;
        }

        let raw_text = RAW_TEXT_ELEMENTS.contains(&self.tag.as_str());
        for child in &self.children {
            match child {
                Content::Text(text) if raw_text => out.push_str(&guard_raw_text(text)),
                Content::Text(text) => out.push_str(&escape_text(text)),
                Content::Raw(html) if raw_text => out.push_str(&guard_raw_text(html)),
                Content::Raw(html) => out.push_str(html),
                Content::Element(element) => element.render_into(out),
            }
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl core::fmt::Display for Element {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Prevents inline script/style content from closing its element early.
fn guard_raw_text(text: &str) -> String {
    text.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_elements_have_no_end_tag() {
        let meta = Element::meta_name("description", "A page").text("ignored");
        assert_eq!(meta.render(), r#"<meta name="description" content="A page">"#);
    }

    #[test]
    fn stylesheet_link() {
        assert_eq!(
            Element::stylesheet("/app.css").render(),
            r#"<link rel="stylesheet" href="/app.css">"#
        );
    }

    #[test]
    fn text_is_escaped_raw_is_not() {
        let div = Element::new("div").text("a < b").raw("<span>c</span>");
        assert_eq!(div.render(), "<div>a &lt; b<span>c</span></div>");
    }

    #[test]
    fn inline_script_cannot_close_itself() {
        let script = Element::inline_script("let s = '</script><b>';");
        assert_eq!(script.render(), "<script>let s = '<\\/script><b>';</script>");
    }

    #[test]
    fn nested_children_render_in_order() {
        let head = Element::new("head")
            .child(Element::new("title").text("Home"))
            .child(Element::script_src("/a.js").flag("defer"));
        assert_eq!(
            head.render(),
            r#"<head><title>Home</title><script src="/a.js" defer></script></head>"#
        );
    }

    #[test]
    fn attrs_merge_into_element() {
        let div = Element::new("div")
            .attr("class", "flex")
            .attrs(Attrs::new().with("class", "gap-2").with("x-show", "open"));
        assert_eq!(div.render(), r#"<div class="flex gap-2" x-show="open"></div>"#);
    }
}
