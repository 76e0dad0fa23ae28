//! Scroll-derived UI: navbar elevation and the scroll-to-top button.
//!
//! Both are pure functions of the scroll offset. Scroll events only request a
//! commit; with `throttle_scroll` on, at most one commit runs per animation
//! frame, and a commit writes styles only when the derived state changed.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use netbay::navbar::NavbarResponder;
use netbay::navigation::NAV_REGION_SELECTOR;
use netbay::scroll_top::{
    display_value, ScrollTopControl, BUTTON_CLASS, BUTTON_ICON_HTML, BUTTON_MARKER_CLASS,
};
use netbay::timing::FrameGate;
use netbay::DomError;
use tracing::{debug, warn};
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use super::{dom, PageContext};

pub(super) struct ScrollBinding {
    window: Window,
    document: Document,
    throttle: bool,
    navbar: Option<(Element, RefCell<NavbarResponder>)>,
    scroll_top: RefCell<ScrollTopControl>,
    button: RefCell<Option<(Element, EventListener)>>,
    gate: RefCell<FrameGate>,
    frame: RefCell<Option<AnimationFrame>>,
    listener: RefCell<Option<EventListener>>,
}

pub(super) fn wire(ctx: &Rc<PageContext>) -> Rc<ScrollBinding> {
    let navbar = ctx
        .document
        .query_selector(NAV_REGION_SELECTOR)
        .ok()
        .flatten()
        .map(|nav| (nav, RefCell::new(NavbarResponder::new(ctx.config.navbar_elevate_after))));
    if navbar.is_none() {
        debug!("no nav element; navbar scroll effect disabled");
    }

    let binding = Rc::new(ScrollBinding {
        window: ctx.window.clone(),
        document: ctx.document.clone(),
        throttle: ctx.config.throttle_scroll,
        navbar,
        scroll_top: RefCell::new(ScrollTopControl::new(ctx.config.scroll_top_show_after)),
        button: RefCell::new(None),
        gate: RefCell::new(FrameGate::new()),
        frame: RefCell::new(None),
        listener: RefCell::new(None),
    });

    let weak = Rc::downgrade(&binding);
    let listener = EventListener::new(&ctx.window, "scroll", move |_| {
        if let Some(b) = weak.upgrade() {
            on_scroll(&b);
        }
    });
    *binding.listener.borrow_mut() = Some(listener);
    binding
}

fn on_scroll(binding: &Rc<ScrollBinding>) {
    if !binding.throttle {
        binding.commit();
        return;
    }
    if !binding.gate.borrow_mut().request() {
        return;
    }

    let weak = Rc::downgrade(binding);
    let frame = request_animation_frame(move |_ts| {
        if let Some(b) = weak.upgrade() {
            b.gate.borrow_mut().begin_commit();
            b.commit();
        }
    });
    // The previous handle belongs to a frame that already ran.
    *binding.frame.borrow_mut() = Some(frame);
}

impl ScrollBinding {
    fn commit(&self) {
        let offset = dom::scroll_offset(&self.window);

        if let Some((nav, responder)) = &self.navbar {
            if let Some(look) = responder.borrow_mut().observe(offset) {
                dom::set_style(nav, "box-shadow", look.box_shadow());
                dom::set_style(nav, "border-bottom-color", look.border_bottom_color());
            }
        }

        let mut control = self.scroll_top.borrow_mut();
        if control.needs_button() {
            match self.ensure_button() {
                Ok(()) => control.attach(),
                Err(e) => warn!("scroll-to-top button unavailable: {e}"),
            }
        }
        if let Some(visible) = control.observe(offset) {
            if let Some((button, _)) = self.button.borrow().as_ref() {
                dom::set_style(button, "display", display_value(visible));
            }
        }
    }

    fn ensure_button(&self) -> Result<(), DomError> {
        let existing = self
            .document
            .query_selector(&format!(".{BUTTON_MARKER_CLASS}"))
            .ok()
            .flatten();

        let button = match existing {
            Some(el) => el,
            None => {
                let el = dom::create_element(&self.document, "button")?;
                el.set_inner_html(BUTTON_ICON_HTML);
                el.set_class_name(BUTTON_CLASS);
                dom::set_style(&el, "display", display_value(false));
                dom::append_to_body(&self.document, &el)?;
                debug!("scroll-to-top button created");
                el
            }
        };

        let window = self.window.clone();
        let click = EventListener::new(&button, "click", move |_| {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        });
        *self.button.borrow_mut() = Some((button, click));
        Ok(())
    }
}
