//! Transient notifications.
//!
//! A toast enters with a slide-in, stays for `visible_ms`, slides out for
//! `exit_ms` and is then removed. Toasts are independent: concurrent calls
//! produce overlapping elements with no stacking policy. [`ToastBoard`] owns
//! the phase schedule; the browser binding only mounts elements, runs one
//! timer per toast and applies the steps the board asks for through
//! [`ToastSurface`].

use std::fmt;

pub const DEFAULT_VISIBLE_MS: u32 = 3000;
pub const DEFAULT_EXIT_MS: u32 = 500;

pub const ENTER_CLASS: &str = "animate__slideInRight";
pub const EXIT_CLASS: &str = "animate__slideOutRight";

const BASE_CLASSES: &str =
    "text-white px-6 py-3 rounded-lg fixed top-6 right-6 shadow-lg animate__animated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Tags match exactly; unknown, differently cased or missing tags fall
    /// back to `Info`.
    pub fn parse(tag: Option<&str>) -> Self {
        match tag {
            Some("success") => Severity::Success,
            Some("error") => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            Severity::Success => "bg-green-500",
            Severity::Error => "bg-red-500",
            Severity::Info => "bg-blue-500",
        }
    }
}

/// Full class attribute for a freshly created toast.
pub fn toast_class_list(severity: Severity) -> String {
    format!(
        "{} {BASE_CLASSES} {ENTER_CLASS} z-50",
        severity.color_class()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    pub visible_ms: u32,
    pub exit_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            visible_ms: DEFAULT_VISIBLE_MS,
            exit_ms: DEFAULT_EXIT_MS,
        }
    }
}

impl ToastTiming {
    pub fn total_ms(self) -> u32 {
        self.visible_ms.saturating_add(self.exit_ms)
    }
}

/// Anything that can show a message to the visitor.
pub trait Notify {
    fn notify(&self, message: &str, severity: Severity);
}

/// Where toasts are mounted. The board calls back into it as phases advance.
pub trait ToastSurface {
    type Handle;

    /// Swaps the entry animation for the exit animation.
    fn begin_exit(&mut self, toast: &Self::Handle);

    fn remove(&mut self, toast: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastPhase {
    Showing,
    Leaving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug)]
struct LiveToast<H> {
    id: ToastId,
    handle: H,
    phase: ToastPhase,
}

/// Live toasts in creation order, each with its own phase.
#[derive(Debug)]
pub struct ToastBoard<H> {
    timing: ToastTiming,
    next_id: u64,
    live: Vec<LiveToast<H>>,
}

impl<H> ToastBoard<H> {
    pub fn new(timing: ToastTiming) -> Self {
        Self {
            timing,
            next_id: 0,
            live: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Tracks a freshly mounted toast. Returns its id and the delay in ms
    /// before the first [`advance`](Self::advance).
    pub fn open(&mut self, handle: H) -> (ToastId, u32) {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.live.push(LiveToast {
            id,
            handle,
            phase: ToastPhase::Showing,
        });
        (id, self.timing.visible_ms)
    }

    /// Runs the step due when a toast's timer fires. Returns the delay until
    /// the next step, or `None` once the toast is gone.
    pub fn advance<S>(&mut self, id: ToastId, surface: &mut S) -> Option<u32>
    where
        S: ToastSurface<Handle = H>,
    {
        let i = self.live.iter().position(|t| t.id == id)?;
        match self.live[i].phase {
            ToastPhase::Showing => {
                let toast = &mut self.live[i];
                surface.begin_exit(&toast.handle);
                toast.phase = ToastPhase::Leaving;
                Some(self.timing.exit_ms)
            }
            ToastPhase::Leaving => {
                let toast = self.live.remove(i);
                surface.remove(toast.handle);
                None
            }
        }
    }

    /// Removes every live toast at once. Returns how many there were.
    pub fn retire_all<S>(&mut self, surface: &mut S) -> usize
    where
        S: ToastSurface<Handle = H>,
    {
        let n = self.live.len();
        for toast in self.live.drain(..) {
            surface.remove(toast.handle);
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Screen {
        leaving: Vec<&'static str>,
        removed: Vec<&'static str>,
    }

    impl ToastSurface for Screen {
        type Handle = &'static str;

        fn begin_exit(&mut self, toast: &&'static str) {
            self.leaving.push(*toast);
        }

        fn remove(&mut self, toast: &'static str) {
            self.removed.push(toast);
        }
    }

    #[test]
    fn severity_tags_match_exactly() {
        assert_eq!(Severity::parse(None), Severity::Info);
        assert_eq!(Severity::parse(Some("warning")), Severity::Info);
        assert_eq!(Severity::parse(Some("Error")), Severity::Info);
        assert_eq!(Severity::parse(Some(" error")), Severity::Info);
        assert_eq!(Severity::parse(Some("error")), Severity::Error);
        assert_eq!(Severity::parse(Some("success")), Severity::Success);
    }

    #[test]
    fn class_list_carries_color_and_entry_animation() {
        let c = toast_class_list(Severity::Error);
        assert!(c.starts_with("bg-red-500 "));
        assert!(c.contains(ENTER_CLASS));
        assert!(!c.contains(EXIT_CLASS));
        assert!(c.ends_with("z-50"));

        assert!(toast_class_list(Severity::default()).contains("bg-blue-500"));
    }

    #[test]
    fn toast_leaves_then_is_removed_after_total_time() {
        let timing = ToastTiming::default();
        let mut board = ToastBoard::new(timing);
        let mut screen = Screen::default();

        let (id, first) = board.open("saved");
        assert_eq!(first, 3000);
        assert_eq!(board.advance(id, &mut screen), Some(500));
        assert_eq!(screen.leaving, vec!["saved"]);
        assert!(screen.removed.is_empty());

        assert_eq!(board.advance(id, &mut screen), None);
        assert_eq!(screen.removed, vec!["saved"]);
        assert!(board.is_empty());
        assert_eq!(first + 500, timing.total_ms());

        // A late timer for a removed toast is a no-op.
        assert_eq!(board.advance(id, &mut screen), None);
        assert_eq!(screen.removed.len(), 1);
    }

    #[test]
    fn toasts_advance_independently() {
        let mut board = ToastBoard::new(ToastTiming {
            visible_ms: 10,
            exit_ms: 5,
        });
        let mut screen = Screen::default();
        let (a, _) = board.open("a");
        let (b, _) = board.open("b");
        assert_ne!(a, b);
        assert_eq!(b.to_string(), "toast-2");

        board.advance(b, &mut screen);
        board.advance(b, &mut screen);
        assert_eq!(screen.removed, vec!["b"]);
        assert_eq!(board.len(), 1);

        assert_eq!(board.retire_all(&mut screen), 1);
        assert_eq!(screen.removed, vec!["b", "a"]);
        assert_eq!(board.advance(a, &mut screen), None);
    }
}
