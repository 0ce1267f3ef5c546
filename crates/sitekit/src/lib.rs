//! sitekit: interactive behaviours for a small marketing website, compiled to WASM.
//!
//! Re-exports the pure logic of `sitekit-core` and adds the browser runtime
//! that wires it to the page.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { Site } from './sitekit.js';
//!
//! await init();
//! const site = new Site();
//! console.log(site.mounted()); // ["nav", "counters", "clock", ...]
//!
//! // Or override page conventions:
//! const custom = Site.withConfig(JSON.stringify({
//!   log_level: "debug",
//!   clock: { element_id: "local-time" },
//! }));
//! ```
//!
//! Keep the returned `Site` referenced; freeing it detaches every behaviour.

pub use sitekit_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::Site;
pub use browser::{MountError, SubmitError};
