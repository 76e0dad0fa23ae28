//! Page interaction model for the Net Bay marketing site.
//!
//! Everything in this crate is DOM-free so the behavior behind each page
//! interaction (menu, navbar, lazy images, forms, toasts, telemetry) can be
//! unit-tested on the host. The browser binding in `crates/netbay_web` feeds
//! real events into these types and applies the results to the document.

pub mod config;
pub mod error;
pub mod hover;
pub mod lazy_images;
pub mod lifecycle;
pub mod navbar;
pub mod navigation;
pub mod scroll_top;
pub mod submit;
pub mod telemetry;
pub mod time;
pub mod timing;
pub mod toast;
pub mod validation;

pub use config::PageConfig;
pub use error::{ConfigError, DomError};
