use std::cell::RefCell;

use netbay::navbar::{NavbarAppearance, NavbarResponder};
use netbay::navigation::MenuState;
use netbay::submit::{
    FormPayload, FormSurface, SubmitFlow, INVALID_FORM_MESSAGE, PENDING_LABEL, SUCCESS_MESSAGE,
};
use netbay::toast::{toast_class_list, Notify, Severity, ToastBoard, ToastSurface};
use netbay::validation::{validate, FieldKind, FieldMarker, FieldSnapshot};
use netbay::PageConfig;

/// In-memory form control: value plus its marker class.
struct Field {
    name: &'static str,
    required: bool,
    kind: FieldKind,
    value: String,
    marker: Option<FieldMarker>,
}

impl Field {
    fn new(name: &'static str, kind: FieldKind, value: &str) -> Self {
        Self {
            name,
            required: true,
            kind,
            value: value.to_string(),
            marker: None,
        }
    }

    fn validate(&mut self) -> bool {
        let ok = validate(&FieldSnapshot {
            required: self.required,
            kind: self.kind,
            value: &self.value,
        });
        self.marker = Some(FieldMarker::from_valid(ok));
        ok
    }
}

struct Form {
    fields: Vec<Field>,
    button_label: String,
    button_disabled: bool,
}

impl Form {
    fn contact(email: &str, phone: &str) -> Self {
        Self {
            fields: vec![
                Field::new("name", FieldKind::Other, "Ada"),
                Field::new("email", FieldKind::Email, email),
                Field::new("phone", FieldKind::Telephone, phone),
            ],
            button_label: "Send Message".to_string(),
            button_disabled: false,
        }
    }
}

impl FormSurface for Form {
    fn validate_required(&mut self) -> bool {
        let mut all_valid = true;
        for f in self.fields.iter_mut().filter(|f| f.required) {
            if !f.validate() {
                all_valid = false;
            }
        }
        all_valid
    }

    fn submit_label(&self) -> Option<String> {
        Some(self.button_label.clone())
    }

    fn show_pending(&mut self, label: &str) {
        self.button_disabled = true;
        self.button_label = label.to_string();
    }

    fn restore_control(&mut self, label: Option<&str>) {
        self.button_disabled = false;
        if let Some(label) = label {
            self.button_label = label.to_string();
        }
    }

    fn reset(&mut self) {
        for f in &mut self.fields {
            f.value.clear();
        }
    }

    fn payload(&self) -> FormPayload {
        let mut p = FormPayload::new();
        for f in &self.fields {
            p.push(f.name, f.value.clone());
        }
        p
    }
}

#[derive(Default)]
struct Toasts {
    shown: RefCell<Vec<(String, Severity)>>,
}

impl Notify for Toasts {
    fn notify(&self, message: &str, severity: Severity) {
        self.shown.borrow_mut().push((message.to_string(), severity));
    }
}

#[derive(Default)]
struct Body {
    mounted: Vec<String>,
    leaving: Vec<String>,
}

impl ToastSurface for Body {
    type Handle = String;

    fn begin_exit(&mut self, toast: &String) {
        self.leaving.push(toast.clone());
    }

    fn remove(&mut self, toast: String) {
        self.mounted.retain(|t| *t != toast);
    }
}

#[test]
fn blank_required_fields_get_only_the_error_marker() {
    for v in ["", "    "] {
        let mut f = Field::new("name", FieldKind::Other, v);
        assert!(!f.validate());
        assert_eq!(f.marker, Some(FieldMarker::Error));
    }
}

#[test]
fn valid_form_submits_once_and_restores_control() {
    let mut form = Form::contact("user@example.com", "+1 (555) 123-4567");
    let toasts = Toasts::default();
    let mut flow = SubmitFlow::new();

    let (ticket, payload) = flow.start(&mut form, &toasts).expect("form is valid");
    assert!(form.button_disabled);
    assert_eq!(form.button_label, PENDING_LABEL);
    assert!(toasts.shown.borrow().is_empty());
    assert_eq!(payload.len(), 3);
    assert!(payload.to_json().contains(r#""value":"user@example.com""#));

    // The fixed delay elapses, then the simulated backend reports success.
    assert!(flow.complete(&mut form, &toasts, ticket.generation, Ok(())));
    assert_eq!(
        *toasts.shown.borrow(),
        vec![(SUCCESS_MESSAGE.to_string(), Severity::Success)]
    );
    assert!(form.fields.iter().all(|f| f.value.is_empty()));
    assert!(!form.button_disabled);
    assert_eq!(form.button_label, "Send Message");
}

#[test]
fn invalid_form_shows_one_error_and_leaves_control_alone() {
    let mut form = Form::contact("user@@bad", "abc-123");
    let toasts = Toasts::default();
    let mut flow = SubmitFlow::new();

    assert!(flow.start(&mut form, &toasts).is_none());
    assert_eq!(
        *toasts.shown.borrow(),
        vec![(INVALID_FORM_MESSAGE.to_string(), Severity::Error)]
    );
    assert!(!form.button_disabled);
    assert_eq!(form.button_label, "Send Message");
    assert_eq!(form.fields[0].marker, Some(FieldMarker::Valid));
    assert_eq!(form.fields[1].marker, Some(FieldMarker::Error));
    assert_eq!(form.fields[2].marker, Some(FieldMarker::Error));
    assert_eq!(form.fields[1].value, "user@@bad");
}

#[test]
fn resubmitting_supersedes_the_first_submission() {
    let mut form = Form::contact("user@example.com", "555 0100");
    let toasts = Toasts::default();
    let mut flow = SubmitFlow::new();

    let (first, _) = flow.start(&mut form, &toasts).expect("valid");
    let (second, _) = flow.start(&mut form, &toasts).expect("valid");

    assert!(!flow.complete(&mut form, &toasts, first.generation, Ok(())));
    assert!(form.button_disabled);
    assert!(toasts.shown.borrow().is_empty());

    assert!(flow.complete(&mut form, &toasts, second.generation, Ok(())));
    assert_eq!(toasts.shown.borrow().len(), 1);
    assert_eq!(form.button_label, "Send Message");
}

#[test]
fn failed_backend_keeps_what_the_visitor_typed() {
    let mut form = Form::contact("user@example.com", "555 0100");
    let toasts = Toasts::default();
    let mut flow = SubmitFlow::new();

    let (ticket, _) = flow.start(&mut form, &toasts).expect("valid");
    assert!(flow.complete(&mut form, &toasts, ticket.generation, Err("timeout".into())));
    assert_eq!(toasts.shown.borrow()[0].1, Severity::Error);
    assert_eq!(form.fields[1].value, "user@example.com");
    assert!(!form.button_disabled);
}

#[test]
fn navbar_scroll_round_trip_leaves_no_residue() {
    let cfg = PageConfig::default();
    let mut navbar = NavbarResponder::new(cfg.navbar_elevate_after);
    assert_eq!(navbar.observe(0.0), Some(NavbarAppearance::Base));
    assert_eq!(navbar.observe(150.0), Some(NavbarAppearance::Elevated));
    assert_eq!(navbar.observe(50.0), Some(NavbarAppearance::Base));
    assert_eq!(
        NavbarAppearance::for_offset(50.0, cfg.navbar_elevate_after),
        NavbarAppearance::for_offset(0.0, cfg.navbar_elevate_after)
    );
}

#[test]
fn menu_toggle_twice_then_link_click() {
    let mut menu = MenuState::default();
    menu.toggle();
    menu.toggle();
    assert!(!menu.is_open());

    menu.toggle();
    assert!(menu.is_open());
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn toast_severity_classes() {
    assert!(toast_class_list(Severity::parse(Some("error"))).contains("bg-red-500"));
    assert!(toast_class_list(Severity::parse(None)).contains("bg-blue-500"));
}

#[test]
fn toast_is_removed_after_visible_plus_exit_time() {
    let timing = PageConfig::default().toast_timing();
    let mut board = ToastBoard::new(timing);
    let mut body = Body::default();

    body.mounted.push("Saved".to_string());
    let (id, mut delay) = board.open("Saved".to_string());

    // Drive the board the way the page's timers do: sleep, advance, repeat.
    let mut elapsed = 0;
    let mut steps = 0;
    loop {
        elapsed += delay;
        steps += 1;
        match board.advance(id, &mut body) {
            Some(next) => {
                assert_eq!(body.mounted, vec!["Saved".to_string()]);
                delay = next;
            }
            None => break,
        }
    }

    assert_eq!(steps, 2);
    assert_eq!(elapsed, timing.total_ms());
    assert_eq!(body.leaving, vec!["Saved".to_string()]);
    assert!(body.mounted.is_empty());
    assert!(board.is_empty());
}
