//! Monotonic clock for the rate-limiting gates in [`crate::timing`].
//!
//! On `wasm32` the clock is `performance.now()` through `web-time`, since
//! `std::time::Instant::now()` panics there. Host builds and tests use std.

pub use core::time::Duration;

#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;
