//! Media Element Port - The host's native playback element
//!
//! Decoding, rendering and the playback clock all belong to the host element.
//! This trait is the narrow surface the player drives it through, so the
//! control logic can run against a fake in tests.

use std::cell::Cell;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use vidframe_domain::MediaError;

/// Notifications the player subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    /// The playback cursor moved (fires continuously while playing)
    TimeUpdate,
    /// Metadata loaded or the media length changed
    DurationChange,
}

impl MediaEvent {
    /// DOM event name
    pub fn dom_name(self) -> &'static str {
        match self {
            MediaEvent::TimeUpdate => "timeupdate",
            MediaEvent::DurationChange => "durationchange",
        }
    }
}

/// Receives the element's reading at notification time: the cursor for
/// [`MediaEvent::TimeUpdate`], the duration (possibly NaN) for
/// [`MediaEvent::DurationChange`].
pub type MediaCallback = Box<dyn FnMut(f64)>;

/// Scoped notification subscription.
///
/// The listener stays attached for as long as the guard lives and is detached
/// when it is dropped.
pub struct MediaSubscription {
    event: MediaEvent,
    /// Cleared by the adapter if the listener stops on its own
    live: Rc<Cell<bool>>,
    release: Option<Box<dyn FnOnce()>>,
}

impl MediaSubscription {
    pub fn new(event: MediaEvent, release: impl FnOnce() + 'static) -> Self {
        Self::with_liveness(event, Rc::new(Cell::new(true)), release)
    }

    /// A subscription whose listener can die before the guard is dropped.
    /// The adapter keeps a clone of `live` and clears it when that happens.
    pub fn with_liveness(
        event: MediaEvent,
        live: Rc<Cell<bool>>,
        release: impl FnOnce() + 'static,
    ) -> Self {
        Self {
            event,
            live,
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release (the listener never attached).
    pub fn detached(event: MediaEvent) -> Self {
        Self {
            event,
            live: Rc::new(Cell::new(false)),
            release: None,
        }
    }

    pub fn event(&self) -> MediaEvent {
        self.event
    }

    pub fn is_attached(&self) -> bool {
        self.release.is_some() && self.live.get()
    }
}

impl Drop for MediaSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::trace!(event = self.event.dom_name(), "Detaching media listener");
            release();
        }
    }
}

impl std::fmt::Debug for MediaSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaSubscription")
            .field("event", &self.event)
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Port for the native playback element
///
/// Single-threaded: implementations hold DOM or webview handles and are not
/// `Send`.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait MediaElementPort {
    /// Request playback. Resolves once the host accepts or refuses.
    fn play(&self) -> LocalBoxFuture<'static, Result<(), MediaError>>;

    fn pause(&self);

    /// Move the playback cursor (seconds)
    fn seek(&self, time: f64);

    /// Set the output level, `[0, 1]`
    fn set_volume(&self, level: f64);

    fn set_muted(&self, muted: bool);

    /// Live playback cursor (seconds)
    fn current_time(&self) -> f64;

    /// Media length, `None` until metadata has loaded
    fn duration(&self) -> Option<f64>;

    /// Attach a listener for `event`. Dropping the returned guard detaches it.
    fn subscribe(&self, event: MediaEvent, callback: MediaCallback) -> MediaSubscription;
}
