//! In-memory media element
//!
//! Behaves like a host element that accepts every command instantly. Tests
//! fire notifications by hand with [`FakeMediaElement::fire`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures_util::future::{self, LocalBoxFuture};
use futures_util::FutureExt;
use vidframe_domain::{MediaCommand, MediaError};

use crate::ports::outbound::{MediaCallback, MediaElementPort, MediaEvent, MediaSubscription};

type Listeners = Rc<RefCell<Vec<(u64, MediaEvent, MediaCallback)>>>;

#[derive(Default)]
pub struct FakeMediaElement {
    commands: RefCell<Vec<MediaCommand>>,
    current_time: Cell<f64>,
    duration: Cell<Option<f64>>,
    volume: Cell<f64>,
    muted: Cell<bool>,
    deny_play: RefCell<Option<String>>,
    listeners: Listeners,
    next_listener: Cell<u64>,
}

impl FakeMediaElement {
    pub fn new() -> Self {
        Self {
            volume: Cell::new(1.0),
            ..Default::default()
        }
    }

    /// Pretend metadata loaded before anyone subscribed
    pub fn set_loaded_duration(&self, seconds: f64) {
        self.duration.set(Some(seconds));
    }

    /// Make every following play request fail with `reason`
    pub fn deny_play(&self, reason: impl Into<String>) {
        *self.deny_play.borrow_mut() = Some(reason.into());
    }

    /// Deliver a notification to every matching listener.
    ///
    /// The element's own reading is updated first, as the host would.
    pub fn fire(&self, event: MediaEvent, value: f64) {
        match event {
            MediaEvent::TimeUpdate => self.current_time.set(value),
            MediaEvent::DurationChange => self.duration.set(value.is_finite().then_some(value)),
        }
        for (_, subscribed, callback) in self.listeners.borrow_mut().iter_mut() {
            if *subscribed == event {
                callback(value);
            }
        }
    }

    pub fn commands(&self) -> Vec<MediaCommand> {
        self.commands.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn volume(&self) -> f64 {
        self.volume.get()
    }

    pub fn muted(&self) -> bool {
        self.muted.get()
    }

    fn record(&self, command: MediaCommand) {
        self.commands.borrow_mut().push(command);
    }
}

impl MediaElementPort for FakeMediaElement {
    fn play(&self) -> LocalBoxFuture<'static, Result<(), MediaError>> {
        self.record(MediaCommand::Play);
        let outcome = match self.deny_play.borrow().clone() {
            Some(reason) => Err(MediaError::PlaybackDenied(reason)),
            None => Ok(()),
        };
        future::ready(outcome).boxed_local()
    }

    fn pause(&self) {
        self.record(MediaCommand::Pause);
    }

    fn seek(&self, time: f64) {
        self.record(MediaCommand::Seek(time));
        self.current_time.set(time);
    }

    fn set_volume(&self, level: f64) {
        self.record(MediaCommand::SetVolume(level));
        self.volume.set(level);
    }

    fn set_muted(&self, muted: bool) {
        self.record(MediaCommand::SetMuted(muted));
        self.muted.set(muted);
    }

    fn current_time(&self) -> f64 {
        self.current_time.get()
    }

    fn duration(&self) -> Option<f64> {
        self.duration.get()
    }

    fn subscribe(&self, event: MediaEvent, callback: MediaCallback) -> MediaSubscription {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, event, callback));

        let listeners = Rc::clone(&self.listeners);
        MediaSubscription::new(event, move || {
            listeners.borrow_mut().retain(|(listener, _, _)| *listener != id);
        })
    }
}
