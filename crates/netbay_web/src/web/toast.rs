//! Toast elements and their timers.
//!
//! The phase schedule lives in `ToastBoard`; this host mounts the elements
//! and keeps exactly one pending `Timeout` per live toast. Dropping a timer
//! cancels it, so `dismiss_all` never leaves a stray callback behind.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;
use netbay::toast::{
    toast_class_list, Severity, ToastBoard, ToastId, ToastSurface, ToastTiming, ENTER_CLASS,
    EXIT_CLASS,
};
use netbay::DomError;
use tracing::debug;
use web_sys::{Document, Element};

use super::dom;

/// Applies board steps to real elements.
struct DomToasts;

impl ToastSurface for DomToasts {
    type Handle = Element;

    fn begin_exit(&mut self, toast: &Element) {
        let classes = toast.class_list();
        let _ = classes.remove_1(ENTER_CLASS);
        let _ = classes.add_1(EXIT_CLASS);
    }

    fn remove(&mut self, toast: Element) {
        toast.remove();
    }
}

struct Inner {
    board: ToastBoard<Element>,
    timers: HashMap<ToastId, Timeout>,
}

pub(crate) struct ToastHost {
    document: Document,
    timing: ToastTiming,
    inner: Rc<RefCell<Inner>>,
}

impl ToastHost {
    pub(crate) fn new(document: Document, timing: ToastTiming) -> Self {
        Self {
            document,
            timing,
            inner: Rc::new(RefCell::new(Inner {
                board: ToastBoard::new(timing),
                timers: HashMap::new(),
            })),
        }
    }

    pub(crate) fn show(&self, message: &str, severity: Severity) -> Result<ToastId, DomError> {
        let element = dom::create_element(&self.document, "div")?;
        element.set_class_name(&toast_class_list(severity));
        element.set_text_content(Some(message));
        dom::append_to_body(&self.document, &element)?;

        let mut inner = self.inner.borrow_mut();
        let (id, delay) = inner.board.open(element);
        let timer = schedule(&self.inner, id, delay);
        inner.timers.insert(id, timer);
        debug!(
            %id,
            severity = severity.label(),
            lifetime_ms = self.timing.total_ms(),
            live = inner.board.len(),
            "toast shown"
        );
        Ok(id)
    }

    pub(crate) fn dismiss_all(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        inner.timers.clear();
        inner.board.retire_all(&mut DomToasts)
    }
}

fn schedule(inner: &Rc<RefCell<Inner>>, id: ToastId, delay_ms: u32) -> Timeout {
    let weak = Rc::downgrade(inner);
    Timeout::new(delay_ms, move || step(&weak, id))
}

fn step(inner: &Weak<RefCell<Inner>>, id: ToastId) {
    let Some(rc) = inner.upgrade() else {
        return;
    };
    let mut guard = rc.borrow_mut();
    match guard.board.advance(id, &mut DomToasts) {
        Some(delay) => {
            let timer = schedule(&rc, id, delay);
            guard.timers.insert(id, timer);
        }
        None => {
            guard.timers.remove(&id);
            debug!(%id, "toast removed");
        }
    }
}
