//! Lift-and-scale affordance for card-like elements.

pub const DEFAULT_MARKERS: [&str; 2] = ["card", "service"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransform {
    Lifted,
    Rest,
}

impl HoverTransform {
    pub fn css(self) -> &'static str {
        match self {
            HoverTransform::Lifted => "translateY(-8px) scale(1.02)",
            HoverTransform::Rest => "translateY(0) scale(1)",
        }
    }
}

/// Attribute-substring selector, e.g. `[class*="card"], [class*="service"]`.
pub fn hover_target_selector(markers: &[String]) -> String {
    markers
        .iter()
        .map(|m| format!("[class*=\"{}\"]", m.replace('"', "\\\"")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Substring match on the raw class attribute, same as `[class*=...]`.
pub fn is_hover_target(class_attr: &str, markers: &[String]) -> bool {
    markers.iter().any(|m| class_attr.contains(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Vec<String> {
        DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn selector_covers_every_marker() {
        assert_eq!(
            hover_target_selector(&markers()),
            r#"[class*="card"], [class*="service"]"#
        );
    }

    #[test]
    fn substring_matching_is_not_word_matching() {
        let m = markers();
        assert!(is_hover_target("pricing-card shadow", &m));
        assert!(is_hover_target("services-grid", &m));
        assert!(is_hover_target("scorecard", &m));
        assert!(!is_hover_target("hero banner", &m));
    }
}
