//! Floating scroll-to-top button, created on the first scroll event.

pub const DEFAULT_SHOW_AFTER: f64 = 300.0;

pub const BUTTON_MARKER_CLASS: &str = "scroll-to-top";

pub const BUTTON_CLASS: &str = "scroll-to-top fixed bottom-8 right-8 bg-gradient-to-r from-deep-amber to-deep-indigo text-white w-12 h-12 rounded-full shadow-lg transition-all hover:scale-110 active:scale-95 z-40";

pub const BUTTON_ICON_HTML: &str = r#"<i class="fas fa-arrow-up"></i>"#;

pub fn display_value(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Tracks the button and its visibility. Visibility is only recorded once a
/// button exists, so a failed creation is retried on the next scroll and no
/// visibility change is lost in between.
#[derive(Debug, Clone)]
pub struct ScrollTopControl {
    threshold: f64,
    attached: bool,
    visible: Option<bool>,
}

impl ScrollTopControl {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            attached: false,
            visible: None,
        }
    }

    /// `true` until a button has been attached; the caller creates or adopts
    /// one, then calls [`attach`](Self::attach).
    pub fn needs_button(&self) -> bool {
        !self.attached
    }

    /// A button now exists (freshly created or already in the page). Its
    /// visibility is unknown, so the next observation always reports one.
    pub fn attach(&mut self) {
        self.attached = true;
        self.visible = None;
    }

    /// Returns the visibility to apply, or `None` when nothing changed or
    /// there is no button yet.
    pub fn observe(&mut self, offset: f64) -> Option<bool> {
        if !self.attached {
            return None;
        }
        let next = offset > self.threshold;
        if self.visible == Some(next) {
            return None;
        }
        self.visible = Some(next);
        Some(next)
    }
}
