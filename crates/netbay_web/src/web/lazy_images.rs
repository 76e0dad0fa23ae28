use std::cell::RefCell;
use std::rc::Rc;

use netbay::lazy_images::{deferred_image_selector, LoadStrategy, PendingImages, REVEAL_CLASSES};
use netbay::DomError;
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use super::{dom, PageContext};

/// Keeps the observer and its callback alive for the page lifetime.
pub(super) struct LazyImageWatcher {
    _observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

fn resolve_source(img: &Element, attr: &str) {
    if let Some(src) = img.get_attribute(attr) {
        let _ = img.set_attribute("src", &src);
    }
}

pub(super) fn wire(ctx: &Rc<PageContext>) -> Result<Option<LazyImageWatcher>, DomError> {
    let attr = ctx.config.deferred_src_attr.clone();
    let images = dom::query_all(&ctx.document, &deferred_image_selector(&attr))?;
    if images.is_empty() {
        return Ok(None);
    }

    let mut pending = PendingImages::new();
    for img in images {
        pending.register(img);
    }

    let strategy =
        LoadStrategy::for_platform(dom::has_global(&ctx.window, "IntersectionObserver"));
    if strategy == LoadStrategy::Eager {
        let all = pending.drain();
        debug!(count = all.len(), "no IntersectionObserver; loading images eagerly");
        for img in &all {
            resolve_source(img, &attr);
        }
        return Ok(None);
    }

    let targets: Vec<Element> = pending.iter().cloned().collect();
    let count = pending.len();
    let pending = Rc::new(RefCell::new(pending));

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let img = entry.target();
                if pending.borrow_mut().reveal(&img, entry.is_intersecting()) {
                    resolve_source(&img, &attr);
                    let _ = img
                        .class_list()
                        .add_2(REVEAL_CLASSES[0], REVEAL_CLASSES[1]);
                    observer.unobserve(&img);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| DomError::js("IntersectionObserver", dom::js_message(&e)))?;
    for img in &targets {
        observer.observe(img);
    }
    debug!(count, "watching deferred images");

    Ok(Some(LazyImageWatcher {
        _observer: observer,
        _callback: callback,
    }))
}
