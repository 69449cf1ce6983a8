//! Playback service - forwards player controls to the media element
//!
//! Each control runs the matching `PlayerState` transition and applies the
//! resulting commands to the element. Element notifications are wired back
//! into the state when the player mounts.

use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use vidframe_domain::{MediaCommand, MediaError, PlaybackError, PlayerState};

use crate::application::state_store::PlayerStateStore;
use crate::ports::outbound::{MediaElementPort, MediaEvent, MediaSubscription};

/// Drives one media element on behalf of one player
#[derive(Clone)]
pub struct PlaybackService {
    media: Rc<dyn MediaElementPort>,
}

impl PlaybackService {
    pub fn new(media: Rc<dyn MediaElementPort>) -> Self {
        Self { media }
    }

    /// Start mirroring the element into `state`.
    ///
    /// Pushes the state's output level to the element, subscribes to the
    /// time-update and duration-change notifications, and picks up a duration
    /// the element may already know. The returned handle owns both
    /// subscriptions; dropping it detaches them.
    pub fn mount<S: PlayerStateStore>(&self, mut state: S) -> MountedPlayer {
        let snapshot = state.snapshot();
        self.media.set_volume(snapshot.effective_level());
        self.media.set_muted(snapshot.is_muted);

        let mut on_time = state.clone();
        let time_update = self.media.subscribe(
            MediaEvent::TimeUpdate,
            Box::new(move |seconds| on_time.update(|s| s.on_time_update(seconds))),
        );

        let mut on_duration = state.clone();
        let duration_change = self.media.subscribe(
            MediaEvent::DurationChange,
            Box::new(move |seconds| record_duration(&mut on_duration, seconds)),
        );

        if let Some(seconds) = self.media.duration() {
            record_duration(&mut state, seconds);
        }

        tracing::debug!("Player mounted");

        MountedPlayer {
            service: self.clone(),
            subscriptions: [time_update, duration_change],
        }
    }

    /// Play if paused, pause if playing.
    ///
    /// A refused play request reverts `is_playing` and is returned as
    /// [`MediaError::PlaybackDenied`]; the player keeps running.
    pub async fn toggle_play<S: PlayerStateStore>(&self, mut state: S) -> Result<(), MediaError> {
        let command = state.update(PlayerState::toggle_play);
        tracing::debug!(?command, "Toggle play");

        if let Some(pending) = self.apply(command) {
            if let Err(e) = pending.await {
                tracing::warn!(error = %e, "Play request refused, reverting to paused");
                state.update(PlayerState::play_denied);
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn toggle_mute<S: PlayerStateStore>(&self, mut state: S) {
        let commands = state.update(PlayerState::toggle_mute);
        tracing::debug!(?commands, "Toggle mute");
        self.apply_all(commands);
    }

    /// Volume slider moved.
    pub fn change_volume<S: PlayerStateStore>(&self, mut state: S, value: f64) {
        let commands = state.update(|s| s.change_volume(value));
        self.apply_all(commands);
    }

    /// Scrub control moved. The target is clamped to the media length.
    pub fn change_time<S: PlayerStateStore>(
        &self,
        mut state: S,
        value: f64,
    ) -> Result<(), PlaybackError> {
        let command = state.update(|s| s.change_time(value))?;
        self.apply(command);
        Ok(())
    }

    fn apply_all(&self, commands: impl IntoIterator<Item = MediaCommand>) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Forward one command. Only `Play` has an outcome to wait for.
    fn apply(&self, command: MediaCommand) -> Option<LocalBoxFuture<'static, Result<(), MediaError>>> {
        match command {
            MediaCommand::Play => return Some(self.media.play()),
            MediaCommand::Pause => self.media.pause(),
            MediaCommand::Seek(time) => self.media.seek(time),
            MediaCommand::SetVolume(level) => self.media.set_volume(level),
            MediaCommand::SetMuted(muted) => self.media.set_muted(muted),
        }
        None
    }
}

fn record_duration<S: PlayerStateStore>(state: &mut S, seconds: f64) {
    if let Err(e) = state.update(|s| s.on_duration_change(seconds)) {
        tracing::debug!(error = %e, reading = seconds, "Duration not usable yet");
    }
}

/// A player attached to its element.
///
/// Owns the notification subscriptions for the player's mounted lifetime.
pub struct MountedPlayer {
    service: PlaybackService,
    subscriptions: [MediaSubscription; 2],
}

impl MountedPlayer {
    pub fn service(&self) -> &PlaybackService {
        &self.service
    }

    /// Whether both notification listeners attached
    pub fn is_listening(&self) -> bool {
        self.subscriptions.iter().all(MediaSubscription::is_attached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use futures_util::FutureExt;
    use mockall::predicate::eq;
    use vidframe_domain::{MediaDuration, Volume};

    use crate::infrastructure::testing::FakeMediaElement;
    use crate::ports::outbound::MockMediaElementPort;

    type Store = Rc<RefCell<PlayerState>>;

    fn store() -> Store {
        Rc::new(RefCell::new(PlayerState::new()))
    }

    fn service_with(mock: MockMediaElementPort) -> PlaybackService {
        PlaybackService::new(Rc::new(mock))
    }

    mod mount_tests {
        use super::*;

        #[test]
        fn syncs_output_and_subscribes_to_both_notifications() {
            let mut mock = MockMediaElementPort::new();
            mock.expect_set_volume().with(eq(1.0)).times(1).return_const(());
            mock.expect_set_muted().with(eq(false)).times(1).return_const(());
            mock.expect_subscribe()
                .withf(|event, _| *event == MediaEvent::TimeUpdate)
                .times(1)
                .returning(|event, _| MediaSubscription::detached(event));
            mock.expect_subscribe()
                .withf(|event, _| *event == MediaEvent::DurationChange)
                .times(1)
                .returning(|event, _| MediaSubscription::detached(event));
            mock.expect_duration().returning(|| None);

            let mounted = service_with(mock).mount(store());
            assert!(!mounted.is_listening());
        }

        #[test]
        fn picks_up_already_loaded_duration() {
            let fake = Rc::new(FakeMediaElement::new());
            fake.set_loaded_duration(95.0);
            let state = store();

            let _mounted = PlaybackService::new(fake.clone()).mount(state.clone());

            assert_eq!(state.borrow().duration, MediaDuration::Known(95.0));
        }
    }

    mod play_tests {
        use super::*;

        #[tokio::test]
        async fn plays_then_pauses() {
            let mut mock = MockMediaElementPort::new();
            mock.expect_play()
                .times(1)
                .returning(|| async { Ok(()) }.boxed_local());
            mock.expect_pause().times(1).return_const(());
            let service = service_with(mock);
            let state = store();

            service.toggle_play(state.clone()).await.expect("play accepted");
            assert!(state.borrow().is_playing);

            service.toggle_play(state.clone()).await.expect("pause never fails");
            assert!(!state.borrow().is_playing);
        }

        #[tokio::test]
        async fn refused_play_reverts_to_paused() {
            let mut mock = MockMediaElementPort::new();
            mock.expect_play()
                .times(1)
                .returning(|| async { Err(MediaError::playback_denied("NotAllowedError")) }.boxed_local());
            let service = service_with(mock);
            let state = store();

            let result = service.toggle_play(state.clone()).await;

            assert_eq!(
                result,
                Err(MediaError::PlaybackDenied("NotAllowedError".into()))
            );
            assert!(!state.borrow().is_playing);
        }
    }

    mod output_tests {
        use super::*;

        #[test]
        fn mute_round_trip_restores_level() {
            let fake = Rc::new(FakeMediaElement::new());
            let service = PlaybackService::new(fake.clone());
            let state = store();

            service.change_volume(state.clone(), 0.6);
            service.toggle_mute(state.clone());
            assert_eq!(fake.volume(), 0.0);
            assert!(fake.muted());

            service.toggle_mute(state.clone());
            assert_eq!(fake.volume(), 0.6);
            assert!(!fake.muted());
            assert_eq!(state.borrow().volume, Volume::new(0.6));
        }

        #[test]
        fn zero_volume_mutes_element() {
            let mut mock = MockMediaElementPort::new();
            mock.expect_set_volume().with(eq(0.0)).times(1).return_const(());
            mock.expect_set_muted().with(eq(true)).times(1).return_const(());
            let state = store();

            service_with(mock).change_volume(state.clone(), 0.0);

            assert!(state.borrow().is_muted);
        }
    }

    mod seek_tests {
        use super::*;

        #[test]
        fn scrub_is_clamped_before_reaching_element() {
            let mut mock = MockMediaElementPort::new();
            mock.expect_seek().with(eq(120.0)).times(1).return_const(());
            let state = store();
            state
                .borrow_mut()
                .on_duration_change(120.0)
                .expect("finite duration");

            service_with(mock)
                .change_time(state.clone(), 300.0)
                .expect("finite seek");

            assert_eq!(state.borrow().current_time, 120.0);
        }

        #[test]
        fn non_finite_scrub_never_reaches_element() {
            // No expectations: any call on the mock fails the test
            let mock = MockMediaElementPort::new();
            let state = store();

            let result = service_with(mock).change_time(state.clone(), f64::NAN);

            assert!(matches!(result, Err(PlaybackError::InvalidSeek(_))));
            assert_eq!(state.borrow().current_time, 0.0);
        }

        #[test]
        fn scrub_to_fraction_updates_label() {
            let fake = Rc::new(FakeMediaElement::new());
            let state = store();
            let service = PlaybackService::new(fake.clone());
            let _mounted = service.mount(state.clone());
            fake.fire(MediaEvent::DurationChange, 120.0);

            service.change_time(state.clone(), 59.6).expect("finite seek");

            assert_eq!(fake.current_time(), 59.6);
            assert_eq!(state.borrow().current_time_label(), "00:00:59");
        }
    }

    mod notification_tests {
        use super::*;

        #[test]
        fn duration_change_updates_total_label() {
            let fake = Rc::new(FakeMediaElement::new());
            let state = store();
            let _mounted = PlaybackService::new(fake.clone()).mount(state.clone());

            fake.fire(MediaEvent::DurationChange, 120.0);

            assert_eq!(state.borrow().duration, MediaDuration::Known(120.0));
            assert_eq!(state.borrow().total_time_label(), "00:02:00");
        }

        #[test]
        fn time_update_mirrors_cursor() {
            let fake = Rc::new(FakeMediaElement::new());
            let state = store();
            let _mounted = PlaybackService::new(fake.clone()).mount(state.clone());
            fake.fire(MediaEvent::DurationChange, 30.0);

            fake.fire(MediaEvent::TimeUpdate, 7.5);

            assert_eq!(state.borrow().current_time, 7.5);
        }

        #[test]
        fn unmount_detaches_listeners() {
            let fake = Rc::new(FakeMediaElement::new());
            let state = store();
            let mounted = PlaybackService::new(fake.clone()).mount(state.clone());
            assert!(mounted.is_listening());
            assert_eq!(fake.listener_count(), 2);

            drop(mounted);
            assert_eq!(fake.listener_count(), 0);

            fake.fire(MediaEvent::TimeUpdate, 12.0);
            assert_eq!(state.borrow().current_time, 0.0);
        }
    }
}
