//! Fire-and-forget analytics events.
//!
//! Every event is traced; when the page provides an external reporter the
//! event is forwarded to it as well. No batching, retry or delivery receipt.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

pub const PAGE_VIEW: &str = "page_view";
pub const LINK_CLICK: &str = "link_click";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryEvent {
    pub name: String,
    pub attributes: Map<String, Value>,
}

impl TelemetryEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }

    pub fn attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn page_view(title: &str, location: &str) -> Self {
        Self::new(PAGE_VIEW)
            .attr("page_title", title)
            .attr("page_location", location)
    }

    /// Anchors without a resolvable destination are not tracked.
    pub fn link_click(url: &str, text: &str) -> Option<Self> {
        if url.is_empty() {
            return None;
        }
        Some(
            Self::new(LINK_CLICK)
                .attr("link_url", url)
                .attr("link_text", text),
        )
    }

    pub fn attributes_json(&self) -> String {
        serde_json::to_string(&self.attributes).unwrap_or_else(|_| "{}".to_string())
    }
}

/// External analytics sink, e.g. the page's `gtag` function.
pub trait Reporter {
    /// Attribute payload in whatever form the sink takes it.
    type Attributes: fmt::Debug + ?Sized;

    /// Returns `false` when the sink is not present on the page.
    fn report(&self, name: &str, attributes: &Self::Attributes) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct Telemetry<R> {
    reporter: R,
}

impl<R: Reporter> Telemetry<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Forwards `attributes` untouched. Returns whether the external reporter
    /// received the event.
    pub fn track(&self, name: &str, attributes: &R::Attributes) -> bool {
        let delivered = self.reporter.report(name, attributes);
        tracing::info!(event = %name, ?attributes, delivered, "Event tracked");
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording {
        present: bool,
        seen: RefCell<Vec<(String, Value)>>,
    }

    impl Reporter for &Recording {
        type Attributes = Value;

        fn report(&self, name: &str, attributes: &Value) -> bool {
            if !self.present {
                return false;
            }
            self.seen
                .borrow_mut()
                .push((name.to_string(), attributes.clone()));
            true
        }
    }

    #[test]
    fn page_view_carries_title_and_location() {
        let ev = TelemetryEvent::page_view("Net Bay", "https://netbay.example/");
        assert_eq!(ev.name, PAGE_VIEW);
        assert_eq!(ev.attributes["page_title"], "Net Bay");
        assert_eq!(ev.attributes["page_location"], "https://netbay.example/");
    }

    #[test]
    fn link_click_requires_destination() {
        assert!(TelemetryEvent::link_click("", "Home").is_none());
        let ev = TelemetryEvent::link_click("https://netbay.example/#contact", "Contact").unwrap();
        assert_eq!(ev.attributes_json(), r#"{"link_text":"Contact","link_url":"https://netbay.example/#contact"}"#);
    }

    #[test]
    fn forwards_only_when_reporter_present() {
        let sink = Recording {
            present: true,
            ..Default::default()
        };
        let t = Telemetry::new(&sink);
        let ev = TelemetryEvent::new("cta_click").attr("slot", 2);
        assert!(t.track(&ev.name, &Value::Object(ev.attributes.clone())));
        assert_eq!(sink.seen.borrow().len(), 1);
        assert_eq!(sink.seen.borrow()[0].1["slot"], 2);

        let missing = Recording::default();
        assert!(!Telemetry::new(&missing).track("cta_click", &Value::Null));
        assert!(missing.seen.borrow().is_empty());
    }

    #[test]
    fn attributes_reach_the_reporter_unchanged() {
        let sink = Recording {
            present: true,
            ..Default::default()
        };
        let t = Telemetry::new(&sink);
        assert!(t.track("video_progress", &Value::from(75)));
        assert!(t.track("scroll_depth", &Value::from("half")));
        let seen = sink.seen.borrow();
        assert_eq!(seen[0], ("video_progress".to_string(), Value::from(75)));
        assert_eq!(seen[1].1, Value::from("half"));
    }
}
