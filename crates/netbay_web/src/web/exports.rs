//! Functions other page scripts import from the wasm module.

use std::rc::Rc;

use netbay::toast::{Notify, Severity};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{context, forms, navigation, timing, PageContext};

fn page_context() -> Option<Rc<PageContext>> {
    match context() {
        Ok(ctx) => Some(ctx),
        Err(e) => {
            warn!("netbay unavailable: {e}");
            None
        }
    }
}

/// `severity` is `"success"`, `"error"` or anything else for informational.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: Option<String>) {
    if let Some(ctx) = page_context() {
        ctx.notify(message, Severity::parse(severity.as_deref()));
    }
}

/// Removes every visible notification and cancels their timers.
#[wasm_bindgen(js_name = dismissNotifications)]
pub fn dismiss_notifications() -> usize {
    page_context().map_or(0, |ctx| ctx.toasts.dismiss_all())
}

/// Forwards `data` to `gtag` as given; a missing argument becomes `{}`.
#[wasm_bindgen(js_name = trackEvent)]
pub fn track_event(name: &str, data: JsValue) -> bool {
    let Some(ctx) = page_context() else {
        return false;
    };
    let data = if data.is_undefined() {
        js_sys::Object::new().into()
    } else {
        data
    };
    ctx.telemetry.track(name, &data)
}

#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field: web_sys::Element) -> bool {
    forms::validate_element(field)
}

#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
    let Some(ctx) = page_context() else {
        return;
    };
    if let Some(menu) = ctx.document.get_element_by_id(&ctx.config.menu_id) {
        navigation::toggle_menu(&menu);
    }
}

/// Wraps `func` so it runs `wait` ms after the last call, with that call's argument.
#[wasm_bindgen]
pub fn debounce(func: js_sys::Function, wait: u32) -> js_sys::Function {
    let mut call = timing::debounced(wait, move |arg: JsValue| {
        if let Err(e) = func.call1(&JsValue::NULL, &arg) {
            warn!("debounced callback threw: {e:?}");
        }
    });
    let closure = Closure::wrap(Box::new(move |arg: JsValue| call(arg)) as Box<dyn FnMut(JsValue)>);
    closure.into_js_value().unchecked_into()
}

/// Wraps `func` so it runs at most once every `limit` ms.
#[wasm_bindgen]
pub fn throttle(func: js_sys::Function, limit: u32) -> js_sys::Function {
    let mut call = timing::throttled(limit, move |arg: JsValue| {
        if let Err(e) = func.call1(&JsValue::NULL, &arg) {
            warn!("throttled callback threw: {e:?}");
        }
    });
    let closure = Closure::wrap(Box::new(move |arg: JsValue| call(arg)) as Box<dyn FnMut(JsValue)>);
    closure.into_js_value().unchecked_into()
}
