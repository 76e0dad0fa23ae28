use js_sys::{Function, Reflect};
use netbay::DomError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

pub(super) fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub(super) fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::NoDocument)
}

pub(super) fn body(document: &Document) -> Result<HtmlElement, DomError> {
    document.body().ok_or(DomError::NoBody)
}

pub(super) fn js_message(v: &JsValue) -> String {
    if let Some(s) = v.as_string() {
        return s;
    }
    if let Some(e) = v.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{v:?}")
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub(super) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    document
        .query_selector_all(selector)
        .map(elements)
        .map_err(|e| DomError::js("query_selector_all", js_message(&e)))
}

pub(super) fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    root.query_selector_all(selector)
        .map(elements)
        .map_err(|e| DomError::js("query_selector_all", js_message(&e)))
}

pub(super) fn create_element(document: &Document, tag: &str) -> Result<Element, DomError> {
    document
        .create_element(tag)
        .map_err(|e| DomError::js("create_element", js_message(&e)))
}

pub(super) fn append_to_body(document: &Document, el: &Element) -> Result<(), DomError> {
    body(document)?
        .append_child(el)
        .map(|_| ())
        .map_err(|e| DomError::js("append_child", js_message(&e)))
}

/// Vertical scroll offset; 0 when the browser refuses to say.
pub(super) fn scroll_offset(window: &Window) -> f64 {
    window
        .page_y_offset()
        .or_else(|_| window.scroll_y())
        .unwrap_or(0.0)
        .max(0.0)
}

pub(super) fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<HtmlElement>() {
        let _ = h.style().set_property(property, value);
    }
}

pub(super) fn has_global(window: &Window, name: &str) -> bool {
    Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false)
}

/// A page-level function such as `gtag`, looked up at call time.
pub(super) fn global_function(window: &Window, name: &str) -> Option<Function> {
    Reflect::get(window, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}
