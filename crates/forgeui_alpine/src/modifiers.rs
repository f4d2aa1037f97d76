//! Directives that take dot-separated modifiers.
//!
//! Alpine encodes options in the attribute *name*
//! (`@keydown.enter.prevent`, `x-model.lazy.number`,
//! `x-transition.duration.300ms`), so these builders assemble a name and
//! produce [`Attrs`] on [`attrs()`](On::attrs).

use core::time::Duration;
use forgeui_html::Attrs;

/// Alpine timing modifiers are always written in milliseconds.
fn millis(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

// ─────────────────────────────────────────────────────────────────────────────
// Key
// ─────────────────────────────────────────────────────────────────────────────

/// Keyboard modifiers for `@keydown` / `@keyup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// `.enter`
    Enter,
    /// `.escape`
    Escape,
    /// `.space`
    Space,
    /// `.tab`
    Tab,
    /// `.up`
    Up,
    /// `.down`
    Down,
    /// `.left`
    Left,
    /// `.right`
    Right,
    /// `.shift`
    Shift,
    /// `.ctrl`
    Ctrl,
    /// `.alt`
    Alt,
    /// `.meta`
    Meta,
    /// `.cmd`
    Cmd,
    /// `.slash`
    Slash,
    /// Any other key, written in kebab case (`page-down`).
    Other(String),
}

impl Key {
    /// Returns the modifier name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Enter => "enter",
            Self::Escape => "escape",
            Self::Space => "space",
            Self::Tab => "tab",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Shift => "shift",
            Self::Ctrl => "ctrl",
            Self::Alt => "alt",
            Self::Meta => "meta",
            Self::Cmd => "cmd",
            Self::Slash => "slash",
            Self::Other(key) => key,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// On
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for `@event.modifiers="handler"`.
///
/// ```
/// use core::time::Duration;
/// use forgeui_alpine::modifiers::{Key, On};
///
/// let attrs = On::new("keydown", "submit()").key(Key::Enter).prevent().attrs();
/// assert_eq!(attrs.render(), r#" @keydown.enter.prevent="submit()""#);
///
/// let search = On::new("input", "search()")
///     .debounce(Some(Duration::from_millis(300)))
///     .attrs();
/// assert_eq!(search.render(), r#" @input.debounce.300ms="search()""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct On {
    event: String,
    handler: String,
    long_form: bool,
    modifiers: Vec<String>,
}

impl On {
    /// Creates a listener for `event`.
    #[must_use]
    pub fn new(event: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            handler: handler.into(),
            long_form: false,
            modifiers: Vec::new(),
        }
    }

    /// Shorthand for `On::new("click", handler)`.
    #[must_use]
    pub fn click(handler: impl Into<String>) -> Self {
        Self::new("click", handler)
    }

    /// Shorthand for `On::new("submit", handler)`.
    #[must_use]
    pub fn submit(handler: impl Into<String>) -> Self {
        Self::new("submit", handler)
    }

    /// Writes `x-on:event` instead of `@event`.
    #[must_use]
    pub fn long_form(mut self) -> Self {
        self.long_form = true;
        self
    }

    fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// `.prevent` - calls `preventDefault()`.
    #[must_use]
    pub fn prevent(self) -> Self {
        self.modifier("prevent")
    }

    /// `.stop` - calls `stopPropagation()`.
    #[must_use]
    pub fn stop(self) -> Self {
        self.modifier("stop")
    }

    /// `.outside` - fires for events outside the element.
    #[must_use]
    pub fn outside(self) -> Self {
        self.modifier("outside")
    }

    /// `.window` - listens on `window`.
    #[must_use]
    pub fn window(self) -> Self {
        self.modifier("window")
    }

    /// `.document` - listens on `document`.
    #[must_use]
    pub fn document(self) -> Self {
        self.modifier("document")
    }

    /// `.once` - fires at most once.
    #[must_use]
    pub fn once(self) -> Self {
        self.modifier("once")
    }

    /// `.self` - only when the event originated on this element.
    #[must_use]
    pub fn self_(self) -> Self {
        self.modifier("self")
    }

    /// `.camel` - listens for the camel-cased event name.
    #[must_use]
    pub fn camel(self) -> Self {
        self.modifier("camel")
    }

    /// `.dot` - listens for the dotted event name.
    #[must_use]
    pub fn dot(self) -> Self {
        self.modifier("dot")
    }

    /// `.passive`.
    #[must_use]
    pub fn passive(self) -> Self {
        self.modifier("passive")
    }

    /// `.capture`.
    #[must_use]
    pub fn capture(self) -> Self {
        self.modifier("capture")
    }

    /// `.debounce`, optionally with an explicit wait (Alpine defaults to 250ms).
    #[must_use]
    pub fn debounce(self, wait: Option<Duration>) -> Self {
        let this = self.modifier("debounce");
        match wait {
            Some(wait) => this.modifier(millis(wait)),
            None => this,
        }
    }

    /// `.throttle`, optionally with an explicit limit (Alpine defaults to 250ms).
    #[must_use]
    pub fn throttle(self, limit: Option<Duration>) -> Self {
        let this = self.modifier("throttle");
        match limit {
            Some(limit) => this.modifier(millis(limit)),
            None => this,
        }
    }

    /// A keyboard modifier such as `.enter` or `.escape`.
    #[must_use]
    pub fn key(self, key: Key) -> Self {
        let name = key.as_str().to_string();
        self.modifier(name)
    }

    /// Returns the attribute name, e.g. `@keydown.enter.prevent`.
    #[must_use]
    pub fn name(&self) -> String {
        let prefix = if self.long_form { "x-on:" } else { "@" };
        let mut name = format!("{prefix}{}", self.event);
        for modifier in &self.modifiers {
            name.push('.');
            name.push_str(modifier);
        }
        name
    }

    /// Builds the attribute.
    #[must_use]
    pub fn attrs(&self) -> Attrs {
        Attrs::single(self.name(), self.handler.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Model
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for `x-model.modifiers="expr"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    expr: String,
    modifiers: Vec<String>,
}

impl Model {
    /// Binds the input to `expr`.
    #[must_use]
    pub fn new(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            modifiers: Vec::new(),
        }
    }

    fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// `.lazy` - update on `change` instead of `input`.
    #[must_use]
    pub fn lazy(self) -> Self {
        self.modifier("lazy")
    }

    /// `.number` - cast to a number.
    #[must_use]
    pub fn number(self) -> Self {
        self.modifier("number")
    }

    /// `.boolean` - cast to a boolean.
    #[must_use]
    pub fn boolean(self) -> Self {
        self.modifier("boolean")
    }

    /// `.fill` - initialize from the input's `value` attribute.
    #[must_use]
    pub fn fill(self) -> Self {
        self.modifier("fill")
    }

    /// `.debounce`, optionally with an explicit wait.
    #[must_use]
    pub fn debounce(self, wait: Option<Duration>) -> Self {
        let this = self.modifier("debounce");
        match wait {
            Some(wait) => this.modifier(millis(wait)),
            None => this,
        }
    }

    /// `.throttle`, optionally with an explicit limit.
    #[must_use]
    pub fn throttle(self, limit: Option<Duration>) -> Self {
        let this = self.modifier("throttle");
        match limit {
            Some(limit) => this.modifier(millis(limit)),
            None => this,
        }
    }

    /// Builds the attribute.
    #[must_use]
    pub fn attrs(&self) -> Attrs {
        let mut name = String::from("x-model");
        for modifier in &self.modifiers {
            name.push('.');
            name.push_str(modifier);
        }
        Attrs::single(name, self.expr.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transition
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Enter,
    Leave,
}

/// Builder for `x-transition`.
///
/// Two forms are supported, matching Alpine:
///
/// - the helper form, `x-transition.opacity.duration.300ms`, configured with
///   [`opacity`](Self::opacity), [`scale`](Self::scale), [`duration`](Self::duration), ...;
/// - the class form, `x-transition:enter="..."` etc., configured with
///   [`enter`](Self::enter), [`enter_start`](Self::enter_start), ...
///
/// Setting any class switches to the class form.
///
/// ```
/// use core::time::Duration;
/// use forgeui_alpine::modifiers::Transition;
///
/// let fade = Transition::new().opacity().duration(Duration::from_millis(150)).attrs();
/// assert_eq!(fade.render(), " x-transition.opacity.duration.150ms");
///
/// let classes = Transition::new()
///     .enter("transition ease-out duration-200")
///     .enter_start("opacity-0")
///     .enter_end("opacity-100")
///     .attrs();
/// assert_eq!(classes.value("x-transition:enter-start"), Some("opacity-0"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    phase: Option<Phase>,
    modifiers: Vec<String>,
    classes: Vec<(&'static str, String)>,
}

impl Transition {
    /// The default transition (fade + scale).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    fn class(mut self, stage: &'static str, classes: impl Into<String>) -> Self {
        self.classes.push((stage, classes.into()));
        self
    }

    /// Restricts the helper form to the enter phase (`x-transition:enter`).
    #[must_use]
    pub fn in_only(mut self) -> Self {
        self.phase = Some(Phase::Enter);
        self
    }

    /// Restricts the helper form to the leave phase (`x-transition:leave`).
    #[must_use]
    pub fn out_only(mut self) -> Self {
        self.phase = Some(Phase::Leave);
        self
    }

    /// `.opacity` - fade only.
    #[must_use]
    pub fn opacity(self) -> Self {
        self.modifier("opacity")
    }

    /// `.scale` - scale only, optionally to `percent` (Alpine defaults to 95).
    #[must_use]
    pub fn scale(self, percent: Option<u8>) -> Self {
        let this = self.modifier("scale");
        match percent {
            Some(percent) => this.modifier(percent.to_string()),
            None => this,
        }
    }

    /// `.duration.<ms>`.
    #[must_use]
    pub fn duration(self, duration: Duration) -> Self {
        self.modifier("duration").modifier(millis(duration))
    }

    /// `.delay.<ms>`.
    #[must_use]
    pub fn delay(self, delay: Duration) -> Self {
        self.modifier("delay").modifier(millis(delay))
    }

    /// `.origin.<corner>` (e.g. `top`, `top.left`).
    #[must_use]
    pub fn origin(self, origin: &str) -> Self {
        self.modifier("origin").modifier(origin)
    }

    /// Classes applied during the whole enter phase.
    #[must_use]
    pub fn enter(self, classes: impl Into<String>) -> Self {
        self.class("enter", classes)
    }

    /// Classes applied before the enter phase starts.
    #[must_use]
    pub fn enter_start(self, classes: impl Into<String>) -> Self {
        self.class("enter-start", classes)
    }

    /// Classes applied at the end of the enter phase.
    #[must_use]
    pub fn enter_end(self, classes: impl Into<String>) -> Self {
        self.class("enter-end", classes)
    }

    /// Classes applied during the whole leave phase.
    #[must_use]
    pub fn leave(self, classes: impl Into<String>) -> Self {
        self.class("leave", classes)
    }

    /// Classes applied before the leave phase starts.
    #[must_use]
    pub fn leave_start(self, classes: impl Into<String>) -> Self {
        self.class("leave-start", classes)
    }

    /// Classes applied at the end of the leave phase.
    #[must_use]
    pub fn leave_end(self, classes: impl Into<String>) -> Self {
        self.class("leave-end", classes)
    }

    /// Builds the attribute(s).
    #[must_use]
    pub fn attrs(&self) -> Attrs {
        if !self.classes.is_empty() {
            return self
                .classes
                .iter()
                .map(|(stage, classes)| (format!("x-transition:{stage}"), classes.clone()))
                .collect();
        }

        let mut name = String::from("x-transition");
        match self.phase {
            Some(Phase::Enter) => name.push_str(":enter"),
            Some(Phase::Leave) => name.push_str(":leave"),
            None => {}
        }
        for modifier in &self.modifiers {
            name.push('.');
            name.push_str(modifier);
        }
        Attrs::new().with_flag(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_modifiers_in_order() {
        let attrs = On::click("open = false").outside().window().attrs();
        assert_eq!(attrs.render(), r#" @click.outside.window="open = false""#);
    }

    #[test]
    fn on_long_form() {
        let attrs = On::new("custom-event", "handle($event)").long_form().attrs();
        assert_eq!(attrs.render(), r#" x-on:custom-event="handle($event)""#);
    }

    #[test]
    fn on_default_debounce_has_no_wait() {
        let on = On::new("input", "save()").debounce(None);
        assert_eq!(on.name(), "@input.debounce");
        let on = On::new("scroll", "track()").throttle(Some(Duration::from_secs(1)));
        assert_eq!(on.name(), "@scroll.throttle.1000ms");
    }

    #[test]
    fn custom_keys() {
        let on = On::new("keyup", "next()").key(Key::Other("page-down".into())).self_();
        assert_eq!(on.name(), "@keyup.page-down.self");
    }

    #[test]
    fn model_modifiers() {
        assert_eq!(Model::new("qty").attrs().render(), r#" x-model="qty""#);
        assert_eq!(
            Model::new("qty").lazy().number().attrs().render(),
            r#" x-model.lazy.number="qty""#
        );
        assert_eq!(
            Model::new("q")
                .debounce(Some(Duration::from_millis(500)))
                .attrs()
                .render(),
            r#" x-model.debounce.500ms="q""#
        );
    }

    #[test]
    fn transition_default_is_flag() {
        assert_eq!(Transition::new().attrs().render(), " x-transition");
    }

    #[test]
    fn transition_phase_and_modifiers() {
        let attrs = Transition::new()
            .in_only()
            .scale(Some(80))
            .origin("top")
            .delay(Duration::from_millis(50))
            .attrs();
        assert_eq!(
            attrs.render(),
            " x-transition:enter.scale.80.origin.top.delay.50ms"
        );
    }

    #[test]
    fn transition_class_form_ignores_helpers() {
        let attrs = Transition::new()
            .opacity()
            .leave("transition ease-in duration-100")
            .leave_end("opacity-0")
            .attrs();
        assert_eq!(
            attrs.render(),
            r#" x-transition:leave="transition ease-in duration-100" x-transition:leave-end="opacity-0""#
        );
    }
}
