use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use netbay::navigation::{
    anchor_action, AnchorAction, MenuState, FRAGMENT_ANCHOR_SELECTOR, MENU_OPEN_CLASS,
    NAV_REGION_SELECTOR,
};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{dom, PageContext};

pub(super) fn wire(ctx: &Rc<PageContext>, listeners: &mut Vec<EventListener>) {
    wire_mobile_menu(ctx, listeners);
    wire_smooth_scroll(ctx, listeners);
}

fn menu_state(menu: &Element) -> MenuState {
    MenuState::from_open(menu.class_list().contains(MENU_OPEN_CLASS))
}

fn apply_menu(menu: &Element, state: MenuState) {
    let _ = menu
        .class_list()
        .toggle_with_force(MENU_OPEN_CLASS, state.is_open());
}

/// Flips the menu and returns whether it is now open.
pub(super) fn toggle_menu(menu: &Element) -> bool {
    let mut state = menu_state(menu);
    state.toggle();
    apply_menu(menu, state);
    state.is_open()
}

fn wire_mobile_menu(ctx: &Rc<PageContext>, listeners: &mut Vec<EventListener>) {
    let doc = &ctx.document;
    let (Some(toggle), Some(menu)) = (
        doc.get_element_by_id(&ctx.config.menu_toggle_id),
        doc.get_element_by_id(&ctx.config.menu_id),
    ) else {
        debug!(
            toggle = %ctx.config.menu_toggle_id,
            menu = %ctx.config.menu_id,
            "menu button or mobile menu not found"
        );
        return;
    };

    {
        let menu = menu.clone();
        listeners.push(EventListener::new(&toggle, "click", move |e: &Event| {
            // Keep the document-level outside-click handler from seeing this click.
            e.stop_propagation();
            let open = toggle_menu(&menu);
            debug!(open, "menu button clicked");
        }));
    }

    match dom::query_all_in(&menu, "a") {
        Ok(links) => {
            debug!(count = links.len(), "menu links found");
            for link in links {
                let menu = menu.clone();
                listeners.push(EventListener::new(&link, "click", move |_| {
                    let mut state = menu_state(&menu);
                    if state.close() {
                        apply_menu(&menu, state);
                        debug!("menu link clicked, closing menu");
                    }
                }));
            }
        }
        Err(e) => warn!("menu links: {e}"),
    }

    listeners.push(EventListener::new(doc, "click", move |e: &Event| {
        let inside_nav = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(NAV_REGION_SELECTOR).ok().flatten())
            .is_some();
        let mut state = menu_state(&menu);
        if state.on_document_click(inside_nav) {
            apply_menu(&menu, state);
            debug!("click outside nav, closing menu");
        }
    }));
}

fn wire_smooth_scroll(ctx: &Rc<PageContext>, listeners: &mut Vec<EventListener>) {
    let anchors = match dom::query_all(&ctx.document, FRAGMENT_ANCHOR_SELECTOR) {
        Ok(a) => a,
        Err(e) => {
            warn!("smooth scroll disabled: {e}");
            return;
        }
    };

    for anchor in anchors {
        let document = ctx.document.clone();
        let el = anchor.clone();
        listeners.push(EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |e: &Event| {
                let href = el.get_attribute("href").unwrap_or_default();
                match anchor_action(&href) {
                    AnchorAction::PassThrough => {}
                    AnchorAction::Suppress => e.prevent_default(),
                    AnchorAction::ScrollTo(selector) => {
                        e.prevent_default();
                        // Fragments that are not valid selectors throw; treat as missing.
                        if let Ok(Some(target)) = document.query_selector(selector) {
                            scroll_into_view(&target);
                        }
                    }
                }
            },
        ));
    }
}

fn scroll_into_view(target: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}
