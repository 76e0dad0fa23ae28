use std::rc::Rc;

use gloo::events::EventListener;
use netbay::lifecycle::ReadyState;
use netbay::telemetry::{Reporter, TelemetryEvent};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlAnchorElement, Window};

use super::{dom, PageContext};

/// Forwards events to the page's `gtag` function when one is defined.
pub(crate) struct GtagReporter {
    window: Window,
}

impl GtagReporter {
    pub(crate) fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Reporter for GtagReporter {
    type Attributes = JsValue;

    fn report(&self, name: &str, attributes: &JsValue) -> bool {
        let Some(gtag) = dom::global_function(&self.window, "gtag") else {
            return false;
        };
        match gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(name),
            attributes,
        ) {
            Ok(_) => true,
            Err(e) => {
                warn!("gtag threw: {}", dom::js_message(&e));
                false
            }
        }
    }
}

/// Tracks one of the page's own events, whose attributes are plain JSON.
fn track(ctx: &PageContext, event: &TelemetryEvent) {
    match js_sys::JSON::parse(&event.attributes_json()) {
        Ok(attributes) => {
            ctx.telemetry.track(&event.name, &attributes);
        }
        Err(e) => warn!("telemetry attributes: {}", dom::js_message(&e)),
    }
}

fn track_page_view(ctx: &PageContext) {
    let location = ctx.window.location().href().unwrap_or_default();
    track(ctx, &TelemetryEvent::page_view(&ctx.document.title(), &location));
}

pub(super) fn wire(ctx: &Rc<PageContext>, listeners: &mut Vec<EventListener>) {
    if ReadyState::parse(&ctx.document.ready_state()).fully_loaded() {
        track_page_view(ctx);
    } else {
        let window = ctx.window.clone();
        let ctx = ctx.clone();
        listeners.push(EventListener::once(&window, "load", move |_| {
            track_page_view(&ctx);
        }));
    }

    let document = ctx.document.clone();
    let ctx = ctx.clone();
    listeners.push(EventListener::new(&document, "click", move |e: &Event| {
        // Only the click target itself counts, not an anchor it is nested in.
        let Some(anchor) = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlAnchorElement>().ok())
        else {
            return;
        };
        let text = anchor.text_content().unwrap_or_default();
        if let Some(event) = TelemetryEvent::link_click(&anchor.href(), &text) {
            track(&ctx, &event);
        }
    }));
}
