//! Browser runtime for sitekit.
//!
//! This module binds the platform-agnostic behaviours in `sitekit-core` to
//! the page DOM: it discovers elements, owns event listeners and timers, and
//! performs the commands returned by state updates.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod clock;
#[cfg(target_arch = "wasm32")]
pub mod contact;
#[cfg(target_arch = "wasm32")]
pub mod counter;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(target_arch = "wasm32")]
pub mod filter;
#[cfg(target_arch = "wasm32")]
pub mod modal;
#[cfg(target_arch = "wasm32")]
pub mod nav;
#[cfg(target_arch = "wasm32")]
pub mod slider;
#[cfg(target_arch = "wasm32")]
pub mod year;

// Cross-platform modules
pub mod error;
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub use app::Site;
pub use error::{MountError, SubmitError};
