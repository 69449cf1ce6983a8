mod playback_service;

pub use playback_service::{MountedPlayer, PlaybackService};
