//! Application layer: playback control on top of the media element port.

pub mod services;
pub mod state_store;

pub use services::{MountedPlayer, PlaybackService};
pub use state_store::PlayerStateStore;
