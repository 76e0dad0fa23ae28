//! Callback wrappers over the `netbay::timing` gates.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use netbay::time::Instant;
use netbay::timing::{Debouncer, Throttle};

/// Calls `f` with the latest argument once `wait_ms` passes without another call.
pub(crate) fn debounced<T: 'static>(wait_ms: u32, f: impl FnMut(T) + 'static) -> impl FnMut(T) {
    let state = Rc::new(RefCell::new(Debouncer::from_millis(wait_ms)));
    let f = Rc::new(RefCell::new(f));
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::default();

    move |value: T| {
        let now = Instant::now();
        let deadline = state.borrow_mut().poke(now, value);
        let delay_ms = u32::try_from((deadline - now).as_millis()).unwrap_or(u32::MAX);
        let state = state.clone();
        let f = f.clone();
        // Replacing the handle cancels the previous timer.
        *timer.borrow_mut() = Some(Timeout::new(delay_ms, move || {
            let value = state.borrow_mut().flush();
            if let Some(value) = value {
                (&mut *f.borrow_mut())(value);
            }
        }));
    }
}

/// Calls `f` at most once per `limit_ms`, dropping calls in between.
pub(crate) fn throttled<T>(limit_ms: u32, mut f: impl FnMut(T)) -> impl FnMut(T) {
    let mut gate = Throttle::from_millis(limit_ms);
    move |value: T| {
        if gate.try_pass(Instant::now()) {
            f(value);
        }
    }
}
