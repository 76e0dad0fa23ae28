//! Navbar look as a function of scroll offset.

pub const DEFAULT_ELEVATE_AFTER: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarAppearance {
    #[default]
    Base,
    Elevated,
}

impl NavbarAppearance {
    /// Strictly greater than: sitting exactly on the threshold is still `Base`.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            NavbarAppearance::Elevated
        } else {
            NavbarAppearance::Base
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            NavbarAppearance::Base => "none",
            NavbarAppearance::Elevated => "0 10px 30px rgba(0, 0, 0, 0.3)",
        }
    }

    pub fn border_bottom_color(self) -> &'static str {
        match self {
            NavbarAppearance::Base => "rgba(30, 58, 95, 0.5)",
            NavbarAppearance::Elevated => "rgba(184, 134, 11, 0.5)",
        }
    }
}

/// Tracks the last committed appearance so style writes only happen on change.
#[derive(Debug, Clone)]
pub struct NavbarResponder {
    threshold: f64,
    committed: Option<NavbarAppearance>,
}

impl NavbarResponder {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            committed: None,
        }
    }

    /// Returns the appearance to apply, or `None` when the document already shows it.
    pub fn observe(&mut self, offset: f64) -> Option<NavbarAppearance> {
        let next = NavbarAppearance::for_offset(offset, self.threshold);
        if self.committed == Some(next) {
            return None;
        }
        self.committed = Some(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(NavbarAppearance::for_offset(0.0, 100.0), NavbarAppearance::Base);
        assert_eq!(NavbarAppearance::for_offset(100.0, 100.0), NavbarAppearance::Base);
        assert_eq!(NavbarAppearance::for_offset(100.5, 100.0), NavbarAppearance::Elevated);
    }

    #[test]
    fn styles_differ_between_states() {
        assert_eq!(NavbarAppearance::Base.box_shadow(), "none");
        assert_ne!(
            NavbarAppearance::Base.border_bottom_color(),
            NavbarAppearance::Elevated.border_bottom_color()
        );
    }

    #[test]
    fn responder_only_reports_transitions() {
        let mut r = NavbarResponder::new(DEFAULT_ELEVATE_AFTER);
        assert_eq!(r.observe(0.0), Some(NavbarAppearance::Base));
        assert_eq!(r.observe(20.0), None);
        assert_eq!(r.observe(150.0), Some(NavbarAppearance::Elevated));
        assert_eq!(r.observe(400.0), None);
        assert_eq!(r.observe(50.0), Some(NavbarAppearance::Base));
        assert_eq!(r.observe(0.0), None);
    }
}
