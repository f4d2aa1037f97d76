//! Expression helpers for Alpine magics.
//!
//! These return JavaScript expressions for use inside directive values,
//! e.g. `On::click(dispatch("saved", None))`.

use forgeui_js::{JsValue, is_identifier, quote_string, to_js};

fn member(base: &str, name: &str) -> String {
    if is_identifier(name) {
        format!("{base}.{name}")
    } else {
        format!("{base}[{}]", quote_string(name))
    }
}

/// `$dispatch('event')` or `$dispatch('event', detail)`.
#[must_use]
pub fn dispatch(event: &str, detail: Option<&JsValue>) -> String {
    match detail {
        Some(detail) => format!("$dispatch({}, {})", quote_string(event), to_js(detail)),
        None => format!("$dispatch({})", quote_string(event)),
    }
}

/// `$store.name`.
#[must_use]
pub fn store(name: &str) -> String {
    member("$store", name)
}

/// `$refs.name`.
#[must_use]
pub fn refs(name: &str) -> String {
    member("$refs", name)
}

/// `$nextTick(() => { expr })`.
#[must_use]
pub fn next_tick(expr: &str) -> String {
    format!("$nextTick(() => {{ {expr} }})")
}

/// `$watch('property', callback)`.
#[must_use]
pub fn watch(property: &str, callback: &str) -> String {
    format!("$watch({}, {callback})", quote_string(property))
}

/// `$id('name')`.
#[must_use]
pub fn id(name: &str) -> String {
    format!("$id({})", quote_string(name))
}

/// `$persist(value)`. Requires the [`Persist`](crate::AlpineExt::Persist) plugin.
#[must_use]
pub fn persist(value: &JsValue) -> String {
    format!("$persist({})", to_js(value))
}

/// `$persist(value).as('key')`, persisting under an explicit storage key.
#[must_use]
pub fn persist_as(value: &JsValue, key: &str) -> String {
    format!("{}.as({})", persist(value), quote_string(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgeui_js::JsObject;

    #[test]
    fn dispatch_with_and_without_detail() {
        assert_eq!(dispatch("close", None), "$dispatch('close')");
        let detail = JsValue::from(JsObject::new().with("id", 3));
        assert_eq!(
            dispatch("item-selected", Some(&detail)),
            "$dispatch('item-selected', { id: 3 })"
        );
    }

    #[test]
    fn member_access_quotes_non_identifiers() {
        assert_eq!(store("cart"), "$store.cart");
        assert_eq!(store("side-nav"), "$store['side-nav']");
        assert_eq!(refs("input"), "$refs.input");
    }

    #[test]
    fn persist_helpers() {
        assert_eq!(persist(&JsValue::from(false)), "$persist(false)");
        assert_eq!(
            persist_as(&JsValue::from("light"), "theme"),
            "$persist('light').as('theme')"
        );
    }

    #[test]
    fn misc() {
        assert_eq!(next_tick("$refs.input.focus()"), "$nextTick(() => { $refs.input.focus() })");
        assert_eq!(watch("open", "v => log(v)"), "$watch('open', v => log(v))");
        assert_eq!(id("tab"), "$id('tab')");
    }
}
