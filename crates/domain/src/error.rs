//! Error types for playback control
//!
//! Every error here is recoverable at the component level: the player reverts
//! or ignores the offending transition and keeps running.

use thiserror::Error;

/// Failures reported by (or while talking to) the media element
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MediaError {
    /// The host refused a play request (autoplay policy, no user gesture, ...)
    #[error("Playback denied: {0}")]
    PlaybackDenied(String),

    /// The element reported a duration that is not a usable number
    #[error("Media metadata unavailable")]
    MetadataUnavailable,

    /// The element could not be resolved when the player mounted
    #[error("Media element unavailable: {0}")]
    ElementUnavailable(String),

    /// The script bridge to the element failed
    #[error("Script bridge error: {0}")]
    Script(String),
}

impl MediaError {
    pub fn playback_denied(reason: impl Into<String>) -> Self {
        Self::PlaybackDenied(reason.into())
    }

    pub fn element_unavailable(msg: impl Into<String>) -> Self {
        Self::ElementUnavailable(msg.into())
    }

    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }
}

/// Rejected state transitions
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PlaybackError {
    /// Scrub value was NaN or infinite
    #[error("Invalid seek target: {0}")]
    InvalidSeek(f64),
}
