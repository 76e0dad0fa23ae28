use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use netbay::config::CONFIG_ELEMENT_ID;
use netbay::lifecycle::ReadyState;
use netbay::telemetry::Telemetry;
use netbay::toast::{Notify, Severity};
use netbay::{DomError, PageConfig};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod animations;
mod dom;
pub(crate) mod exports;
mod forms;
mod hover;
mod lazy_images;
mod navigation;
mod scroll;
mod telemetry;
mod timing;
mod toast;

use forms::{SimulatedBackend, SubmissionBackend};
use lazy_images::LazyImageWatcher;
use scroll::ScrollBinding;
use telemetry::GtagReporter;
use toast::ToastHost;

/// Everything a handler needs, shared by the wired listeners and the exported API.
pub(crate) struct PageContext {
    pub(crate) config: PageConfig,
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) toasts: ToastHost,
    pub(crate) telemetry: Telemetry<GtagReporter>,
    pub(crate) backend: Rc<dyn SubmissionBackend>,
}

impl Notify for PageContext {
    fn notify(&self, message: &str, severity: Severity) {
        if let Err(e) = self.toasts.show(message, severity) {
            warn!("notification not shown: {e}");
        }
    }
}

/// Owns the page-lifetime handles; dropping it would detach every listener.
#[derive(Default)]
struct PageController {
    listeners: Vec<EventListener>,
    #[allow(dead_code)]
    scroll: Option<Rc<ScrollBinding>>,
    #[allow(dead_code)]
    lazy_images: Option<LazyImageWatcher>,
}

thread_local! {
    static CONTEXT: RefCell<Option<Rc<PageContext>>> = const { RefCell::new(None) };
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if !ReadyState::parse(&document.ready_state()).content_ready() {
        EventListener::once(&document, "DOMContentLoaded", |_| initialize()).forget();
    } else {
        initialize();
    }
}

fn initialize() {
    let ctx = match context() {
        Ok(ctx) => ctx,
        Err(e) => {
            web_sys::console::error_1(&format!("netbay: {e}").into());
            return;
        }
    };
    info!("DOM content loaded, initializing interactions");

    animations::start_reveal_library(&ctx.window);

    let mut controller = PageController::default();
    navigation::wire(&ctx, &mut controller.listeners);
    controller.scroll = Some(scroll::wire(&ctx));
    match lazy_images::wire(&ctx) {
        Ok(watcher) => controller.lazy_images = watcher,
        Err(e) => warn!("lazy images disabled: {e}"),
    }
    hover::wire(&ctx, &mut controller.listeners);
    forms::wire(&ctx, &mut controller.listeners);
    telemetry::wire(&ctx, &mut controller.listeners);

    info!(listeners = controller.listeners.len(), "interactions ready");
    CONTROLLER.with(|c| *c.borrow_mut() = Some(controller));
}

/// Shared context, created on first use so exported functions work even when
/// called before `DOMContentLoaded`.
pub(crate) fn context() -> Result<Rc<PageContext>, DomError> {
    if let Some(ctx) = CONTEXT.with(|c| c.borrow().clone()) {
        return Ok(ctx);
    }

    let window = dom::window()?;
    let document = dom::document(&window)?;
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let (config, config_error) = PageConfig::from_inline(raw.as_deref());

    // Logging comes up before anything else so the config warning is kept.
    init_logging(&config);
    if let Some(e) = config_error {
        warn!("{e}; falling back to default config");
    }

    let ctx = Rc::new(PageContext {
        toasts: ToastHost::new(document.clone(), config.toast_timing()),
        telemetry: Telemetry::new(GtagReporter::new(window.clone())),
        backend: Rc::new(SimulatedBackend::new(config.submit_delay_ms)),
        config,
        window,
        document,
    });
    CONTEXT.with(|c| *c.borrow_mut() = Some(ctx.clone()));
    Ok(ctx)
}

fn init_logging(config: &PageConfig) {
    let level = config
        .tracing_level()
        .unwrap_or(tracing::Level::INFO)
        .as_str()
        .parse::<log::Level>()
        .unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
}
