use js_sys::{Array, Function, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use super::dom;

/// Starts the page's scroll-reveal library (`new WOW().init()`) if it is loaded.
pub(super) fn start_reveal_library(window: &Window) {
    let Some(ctor) = dom::global_function(window, "WOW") else {
        debug!("WOW not present; scroll reveal animations disabled");
        return;
    };
    let instance = match Reflect::construct(&ctor, &Array::new()) {
        Ok(v) => v,
        Err(e) => {
            warn!("new WOW() threw: {}", dom::js_message(&e));
            return;
        }
    };
    let init = Reflect::get(&instance, &JsValue::from_str("init"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());
    match init {
        Some(init) => match init.call0(&instance) {
            Ok(_) => debug!("WOW initialized"),
            Err(e) => warn!("WOW.init() threw: {}", dom::js_message(&e)),
        },
        None => warn!("WOW instance has no init()"),
    }
}
