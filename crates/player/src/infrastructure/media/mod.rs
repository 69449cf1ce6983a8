//! Media element adapters
//!
//! The correct adapter is selected at compile time based on the target
//! architecture: the web build talks to the DOM element directly, the desktop
//! build drives the same element inside the webview through script
//! evaluation.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::{attach_video_element, WebVideoElement};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{attach_video_element, EvalVideoElement};
