//! vidframe domain
//!
//! Pure player state and the transitions the UI drives through it. Nothing in
//! this crate touches a media element; transitions return [`MediaCommand`]s
//! that the player crate forwards to whatever element backs the view.

pub mod error;
pub mod playback;
pub mod time_format;
pub mod volume;

pub use error::{MediaError, PlaybackError};
pub use playback::{MediaCommand, MediaDuration, PlayIcon, PlayerState, VolumeIcon};
pub use time_format::{format_duration, format_time, UNKNOWN_TIME_PLACEHOLDER};
pub use volume::Volume;
