//! Field validation and form submission.
//!
//! Each submission runs as an abortable task. Submitting the same form again
//! aborts the previous task, and the generation check in `SubmitFlow` drops
//! any completion that still slips through.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::future::TimeoutFuture;
use netbay::submit::{FormPayload, FormSurface, SubmitFlow, SUBMIT_CONTROL_SELECTOR};
use netbay::validation::{validate, FieldKind, FieldMarker, FieldSnapshot, REQUIRED_FIELD_SELECTOR};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use super::{dom, PageContext};

const NAMED_CONTROL_SELECTOR: &str = "input[name], textarea[name], select[name]";

pub(crate) type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Destination for a validated form. A real endpoint plugs in here.
pub(crate) trait SubmissionBackend {
    fn submit(&self, payload: FormPayload) -> SubmitFuture;
}

/// Waits a fixed delay and reports success without any network traffic.
pub(crate) struct SimulatedBackend {
    delay_ms: u32,
}

impl SimulatedBackend {
    pub(crate) fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl SubmissionBackend for SimulatedBackend {
    fn submit(&self, payload: FormPayload) -> SubmitFuture {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            debug!(payload = %payload.to_json(), delay_ms, "simulated submission");
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        })
    }
}

enum FormControl {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl FormControl {
    /// Hands the element back when it is not an input, textarea or select.
    fn from_element(el: Element) -> Result<Self, Element> {
        let el = match el.dyn_into::<HtmlInputElement>() {
            Ok(i) => return Ok(FormControl::Input(i)),
            Err(el) => el,
        };
        let el = match el.dyn_into::<HtmlTextAreaElement>() {
            Ok(t) => return Ok(FormControl::TextArea(t)),
            Err(el) => el,
        };
        el.dyn_into::<HtmlSelectElement>().map(FormControl::Select)
    }

    fn element(&self) -> &Element {
        match self {
            FormControl::Input(i) => i.as_ref(),
            FormControl::TextArea(t) => t.as_ref(),
            FormControl::Select(s) => s.as_ref(),
        }
    }

    fn required(&self) -> bool {
        match self {
            FormControl::Input(i) => i.required(),
            FormControl::TextArea(t) => t.required(),
            FormControl::Select(s) => s.required(),
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            FormControl::Input(i) => FieldKind::from_input_type(&i.type_()),
            _ => FieldKind::Other,
        }
    }

    fn value(&self) -> String {
        match self {
            FormControl::Input(i) => i.value(),
            FormControl::TextArea(t) => t.value(),
            FormControl::Select(s) => s.value(),
        }
    }

    fn name(&self) -> String {
        match self {
            FormControl::Input(i) => i.name(),
            FormControl::TextArea(t) => t.name(),
            FormControl::Select(s) => s.name(),
        }
    }

    /// Mirrors what the browser would include in the form data set.
    fn is_submittable(&self) -> bool {
        match self {
            FormControl::Input(i) => {
                if i.disabled() {
                    return false;
                }
                match i.type_().to_ascii_lowercase().as_str() {
                    "submit" | "button" | "reset" | "image" | "file" => false,
                    "checkbox" | "radio" => i.checked(),
                    _ => true,
                }
            }
            FormControl::TextArea(t) => !t.disabled(),
            FormControl::Select(s) => !s.disabled(),
        }
    }
}

fn apply_marker(el: &Element, marker: FieldMarker) {
    let classes = el.class_list();
    let _ = classes.remove_1(marker.opposite().class());
    let _ = classes.add_1(marker.class());
}

fn validate_control(control: &FormControl) -> bool {
    let value = control.value();
    let ok = validate(&FieldSnapshot {
        required: control.required(),
        kind: control.kind(),
        value: &value,
    });
    apply_marker(control.element(), FieldMarker::from_valid(ok));
    ok
}

/// Validates any element and marks it. Elements that are not form controls
/// have no value and are never required, so they come out valid.
pub(crate) fn validate_element(el: Element) -> bool {
    match FormControl::from_element(el) {
        Ok(control) => validate_control(&control),
        Err(el) => {
            debug!(tag = %el.tag_name(), "validating an element that is not a form control");
            let ok = validate(&FieldSnapshot::valueless());
            apply_marker(&el, FieldMarker::from_valid(ok));
            ok
        }
    }
}

fn required_controls(form: &HtmlFormElement) -> Vec<FormControl> {
    match dom::query_all_in(form, REQUIRED_FIELD_SELECTOR) {
        Ok(els) => els
            .into_iter()
            .filter_map(|el| FormControl::from_element(el).ok())
            .collect(),
        Err(e) => {
            warn!("required fields: {e}");
            Vec::new()
        }
    }
}

fn submit_control(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    form.query_selector(SUBMIT_CONTROL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
}

fn collect_payload(form: &HtmlFormElement) -> FormPayload {
    let mut payload = FormPayload::new();
    let controls = dom::query_all_in(form, NAMED_CONTROL_SELECTOR).unwrap_or_default();
    for control in controls
        .into_iter()
        .filter_map(|el| FormControl::from_element(el).ok())
    {
        if control.is_submittable() {
            payload.push(&control.name(), control.value());
        }
    }
    payload
}

struct FormState {
    form: HtmlFormElement,
    flow: RefCell<SubmitFlow>,
    in_flight: RefCell<Option<AbortHandle>>,
}

pub(super) fn wire(ctx: &Rc<PageContext>, listeners: &mut Vec<EventListener>) {
    let forms = match dom::query_all(&ctx.document, "form") {
        Ok(f) => f,
        Err(e) => {
            warn!("form handling disabled: {e}");
            return;
        }
    };

    for el in forms {
        let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let state = Rc::new(FormState {
            form: form.clone(),
            flow: RefCell::new(SubmitFlow::new()),
            in_flight: RefCell::new(None),
        });

        {
            let ctx = ctx.clone();
            let state = state.clone();
            listeners.push(EventListener::new_with_options(
                &form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |e: &Event| {
                    e.prevent_default();
                    handle_submit(&ctx, &state);
                },
            ));
        }

        for control in required_controls(&form) {
            let el = control.element().clone();
            let control = Rc::new(control);
            {
                let control = control.clone();
                listeners.push(EventListener::new(&el, "blur", move |_| {
                    validate_control(&control);
                }));
            }
            listeners.push(EventListener::new(&el, "input", move |_| {
                // Typing only re-checks a field already marked invalid.
                if control
                    .element()
                    .class_list()
                    .contains(FieldMarker::Error.class())
                {
                    validate_control(&control);
                }
            }));
        }
    }
}

/// `FormSurface` over a live form element.
struct DomForm<'a>(&'a HtmlFormElement);

impl FormSurface for DomForm<'_> {
    fn validate_required(&mut self) -> bool {
        let mut all_valid = true;
        for control in required_controls(self.0) {
            if !validate_control(&control) {
                all_valid = false;
            }
        }
        all_valid
    }

    fn submit_label(&self) -> Option<String> {
        submit_control(self.0).and_then(|b| b.text_content())
    }

    fn show_pending(&mut self, label: &str) {
        if let Some(b) = submit_control(self.0) {
            b.set_disabled(true);
            b.set_text_content(Some(label));
        }
    }

    fn restore_control(&mut self, label: Option<&str>) {
        if let Some(b) = submit_control(self.0) {
            b.set_disabled(false);
            if let Some(label) = label {
                b.set_text_content(Some(label));
            }
        }
    }

    fn reset(&mut self) {
        self.0.reset();
    }

    fn payload(&self) -> FormPayload {
        collect_payload(self.0)
    }
}

fn handle_submit(ctx: &Rc<PageContext>, state: &Rc<FormState>) {
    if state.flow.borrow().is_pending() {
        debug!("form resubmitted while a submission is in flight");
    }
    let started = state
        .flow
        .borrow_mut()
        .start(&mut DomForm(&state.form), &**ctx);
    let Some((ticket, payload)) = started else {
        return;
    };
    info!(
        generation = ticket.generation,
        fields = payload.len(),
        "submitting form"
    );

    let (handle, registration) = AbortHandle::new_pair();
    if let Some(previous) = state.in_flight.borrow_mut().replace(handle) {
        previous.abort();
    }
    let task = Abortable::new(ctx.backend.submit(payload), registration);

    let ctx = ctx.clone();
    let state = state.clone();
    spawn_local(async move {
        let Ok(outcome) = task.await else {
            debug!(generation = ticket.generation, "submission superseded");
            return;
        };
        let applied = state.flow.borrow_mut().complete(
            &mut DomForm(&state.form),
            &*ctx,
            ticket.generation,
            outcome,
        );
        if applied {
            state.in_flight.borrow_mut().take();
        }
    });
}
