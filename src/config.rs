//! Page-level settings.
//!
//! Every field has a default matching the stock site, so a page only needs an
//! inline `<script type="application/json" id="netbay-config">` block when it
//! wants to override something.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::toast::ToastTiming;

/// Id of the optional inline JSON block holding a [`PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "netbay-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Navbar switches to its elevated look once the page is scrolled past this offset.
    pub navbar_elevate_after: f64,
    /// Scroll-to-top button is shown once the page is scrolled past this offset.
    pub scroll_top_show_after: f64,
    pub submit_delay_ms: u32,
    pub toast_visible_ms: u32,
    pub toast_exit_ms: u32,
    pub menu_toggle_id: String,
    pub menu_id: String,
    pub deferred_src_attr: String,
    pub hover_class_markers: Vec<String>,
    pub log_level: String,
    /// Commit scroll-derived state at most once per animation frame.
    pub throttle_scroll: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_elevate_after: crate::navbar::DEFAULT_ELEVATE_AFTER,
            scroll_top_show_after: crate::scroll_top::DEFAULT_SHOW_AFTER,
            submit_delay_ms: crate::submit::DEFAULT_SUBMIT_DELAY_MS,
            toast_visible_ms: crate::toast::DEFAULT_VISIBLE_MS,
            toast_exit_ms: crate::toast::DEFAULT_EXIT_MS,
            menu_toggle_id: "mobileMenuBtn".to_string(),
            menu_id: "mobileMenu".to_string(),
            deferred_src_attr: crate::lazy_images::DEFAULT_DEFERRED_SRC_ATTR.to_string(),
            hover_class_markers: crate::hover::DEFAULT_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            log_level: "info".to_string(),
            throttle_scroll: true,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: PageConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads the page's inline config block. A missing block means defaults;
    /// a broken one also means defaults, with the error handed back so the
    /// caller can log it once logging is up.
    pub fn from_inline(raw: Option<&str>) -> (Self, Option<ConfigError>) {
        match raw.map(Self::from_json) {
            None => (Self::default(), None),
            Some(Ok(cfg)) => (cfg, None),
            Some(Err(e)) => (Self::default(), Some(e)),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_offset("navbar_elevate_after", self.navbar_elevate_after)?;
        check_offset("scroll_top_show_after", self.scroll_top_show_after)?;
        check_duration("submit_delay_ms", self.submit_delay_ms)?;
        check_duration("toast_visible_ms", self.toast_visible_ms)?;
        check_duration("toast_exit_ms", self.toast_exit_ms)?;
        check_non_empty("menu_toggle_id", &self.menu_toggle_id)?;
        check_non_empty("menu_id", &self.menu_id)?;
        check_non_empty("deferred_src_attr", &self.deferred_src_attr)?;

        if self.hover_class_markers.is_empty() {
            return Err(ConfigError::invalid(
                "hover_class_markers",
                "at least one marker is required",
            ));
        }
        if self.hover_class_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "hover_class_markers",
                "markers must not be empty",
            ));
        }

        self.tracing_level()?;
        Ok(())
    }

    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .trim()
            .parse::<tracing::Level>()
            .map_err(|_| ConfigError::invalid("log_level", format!("unknown level {:?}", self.log_level)))
    }

    pub fn toast_timing(&self) -> ToastTiming {
        ToastTiming {
            visible_ms: self.toast_visible_ms,
            exit_ms: self.toast_exit_ms,
        }
    }
}

fn check_offset(field: &'static str, v: f64) -> Result<(), ConfigError> {
    if !v.is_finite() || v < 0.0 {
        return Err(ConfigError::invalid(field, "must be a finite, non-negative offset"));
    }
    Ok(())
}

fn check_duration(field: &'static str, ms: u32) -> Result<(), ConfigError> {
    if ms == 0 {
        return Err(ConfigError::invalid(field, "must be greater than zero"));
    }
    Ok(())
}

fn check_non_empty(field: &'static str, v: &str) -> Result<(), ConfigError> {
    if v.trim().is_empty() {
        return Err(ConfigError::invalid(field, "must not be empty"));
    }
    Ok(())
}
