//! The `hx-trigger` value grammar.

use crate::format_interval;
use core::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Event(String),
    Every(Duration),
}

/// `queue:` option for events that arrive while a request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Queue {
    /// Queue the first event.
    First,
    /// Queue the last event (htmx default).
    Last,
    /// Queue every event.
    All,
    /// Drop events.
    None,
}

impl Queue {
    fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::All => "all",
            Self::None => "none",
        }
    }
}

/// One comma-separated entry of an `hx-trigger` value.
///
/// ```
/// use core::time::Duration;
/// use forgeui_htmx::TriggerSpec;
///
/// let spec = TriggerSpec::event("click").filter("ctrlKey").once();
/// assert_eq!(spec.to_string(), "click[ctrlKey] once");
///
/// let poll = TriggerSpec::every(Duration::from_secs(5));
/// assert_eq!(poll.to_string(), "every 5s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSpec {
    source: Source,
    filter: Option<String>,
    modifiers: Vec<String>,
}

impl TriggerSpec {
    /// Triggers on a DOM (or htmx) event.
    #[must_use]
    pub fn event(name: impl Into<String>) -> Self {
        Self {
            source: Source::Event(name.into()),
            filter: None,
            modifiers: Vec::new(),
        }
    }

    /// Polls on an interval.
    #[must_use]
    pub fn every(interval: Duration) -> Self {
        Self {
            source: Source::Every(interval),
            filter: None,
            modifiers: Vec::new(),
        }
    }

    /// `load` - fires once when the element is loaded.
    #[must_use]
    pub fn load() -> Self {
        Self::event("load")
    }

    /// `revealed` - fires once when the element scrolls into view.
    #[must_use]
    pub fn revealed() -> Self {
        Self::event("revealed")
    }

    /// `intersect` - fires when the element intersects the viewport.
    #[must_use]
    pub fn intersect() -> Self {
        Self::event("intersect")
    }

    fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// `[expr]` - only fire when the JavaScript expression is truthy.
    #[must_use]
    pub fn filter(mut self, expr: impl Into<String>) -> Self {
        self.filter = Some(expr.into());
        self
    }

    /// `once`.
    #[must_use]
    pub fn once(self) -> Self {
        self.modifier("once")
    }

    /// `changed` - only when the element's value changed.
    #[must_use]
    pub fn changed(self) -> Self {
        self.modifier("changed")
    }

    /// `delay:<t>` - debounce.
    #[must_use]
    pub fn delay(self, delay: Duration) -> Self {
        self.modifier(format!("delay:{}", format_interval(delay)))
    }

    /// `throttle:<t>`.
    #[must_use]
    pub fn throttle(self, limit: Duration) -> Self {
        self.modifier(format!("throttle:{}", format_interval(limit)))
    }

    /// `from:<selector>` - listen on another element.
    #[must_use]
    pub fn from(self, selector: &str) -> Self {
        self.modifier(format!("from:{selector}"))
    }

    /// `target:<selector>` - only when the event target matches.
    #[must_use]
    pub fn target(self, selector: &str) -> Self {
        self.modifier(format!("target:{selector}"))
    }

    /// `consume` - stop the event from triggering parent htmx requests.
    #[must_use]
    pub fn consume(self) -> Self {
        self.modifier("consume")
    }

    /// `queue:<option>`.
    #[must_use]
    pub fn queue(self, queue: Queue) -> Self {
        self.modifier(format!("queue:{}", queue.as_str()))
    }
}

impl core::fmt::Display for TriggerSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.source {
            Source::Event(name) => {
                f.write_str(name)?;
                if let Some(filter) = &self.filter {
                    write!(f, "[{filter}]")?;
                }
            }
            Source::Every(interval) => {
                write!(f, "every {}", format_interval(*interval))?;
                if let Some(filter) = &self.filter {
                    write!(f, " [{filter}]")?;
                }
            }
        }
        for modifier in &self.modifiers {
            write!(f, " {modifier}")?;
        }
        Ok(())
    }
}

/// A full `hx-trigger` value: one or more specs joined with `, `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    specs: Vec<TriggerSpec>,
}

impl Trigger {
    /// Starts with a single spec.
    #[must_use]
    pub fn new(spec: TriggerSpec) -> Self {
        Self { specs: vec![spec] }
    }

    /// Adds another spec.
    #[must_use]
    pub fn or(mut self, spec: TriggerSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Returns the specs in order.
    #[must_use]
    pub fn specs(&self) -> &[TriggerSpec] {
        &self.specs
    }
}

impl From<TriggerSpec> for Trigger {
    fn from(spec: TriggerSpec) -> Self {
        Self::new(spec)
    }
}

impl core::fmt::Display for Trigger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, spec) in self.specs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{spec}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_specs() {
        let trigger = Trigger::new(TriggerSpec::load())
            .or(TriggerSpec::event("refresh").from("body"));
        assert_eq!(trigger.to_string(), "load, refresh from:body");
        assert_eq!(trigger.specs().len(), 2);
    }

    #[test]
    fn every_with_filter() {
        let spec = TriggerSpec::every(Duration::from_millis(750)).filter("!paused");
        assert_eq!(spec.to_string(), "every 750ms [!paused]");
    }

    #[test]
    fn modifier_order_follows_calls() {
        let spec = TriggerSpec::event("input")
            .changed()
            .delay(Duration::from_secs(1))
            .throttle(Duration::from_millis(200))
            .target("#q")
            .consume()
            .queue(Queue::Last);
        assert_eq!(
            spec.to_string(),
            "input changed delay:1s throttle:200ms target:#q consume queue:last"
        );
    }
}
