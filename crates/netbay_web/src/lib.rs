//! Browser binding for the Net Bay page interactions.
//!
//! This crate is a stub by default so the workspace builds on native targets
//! without a wasm toolchain. Enable the real controller with `--features web`
//! on `wasm32-unknown-unknown`.

/// Placeholder for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::exports::{
    debounce, dismiss_notifications, show_notification, throttle, toggle_mobile_menu, track_event,
    validate_field,
};
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
