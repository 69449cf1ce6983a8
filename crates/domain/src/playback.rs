//! Player state and its transitions
//!
//! `PlayerState` mirrors the live properties of one media element. User
//! controls mutate it through the methods below, each of which returns the
//! commands that bring the element in line with the new state. Element
//! notifications flow back in through `on_time_update` and
//! `on_duration_change`.

use serde::{Deserialize, Serialize};

use crate::error::{MediaError, PlaybackError};
use crate::time_format::{format_duration, format_time};
use crate::volume::Volume;

/// Below this level the volume icon switches from high to low.
const LOW_VOLUME_THRESHOLD: f64 = 0.5;

// =============================================================================
// Media Duration
// =============================================================================

/// Total length of the loaded media.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "seconds")]
pub enum MediaDuration {
    /// Metadata has not loaded (or was unusable)
    #[default]
    Unknown,
    Known(f64),
}

impl MediaDuration {
    /// Interpret a raw element reading. Non-finite or negative values are
    /// treated as "not loaded".
    pub fn from_reading(seconds: f64) -> Self {
        if seconds.is_finite() && seconds >= 0.0 {
            Self::Known(seconds)
        } else {
            Self::Unknown
        }
    }

    pub fn seconds(self) -> Option<f64> {
        match self {
            Self::Known(seconds) => Some(seconds),
            Self::Unknown => None,
        }
    }

    pub fn seconds_or_zero(self) -> f64 {
        self.seconds().unwrap_or(0.0)
    }

    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

// =============================================================================
// Commands
// =============================================================================

/// An instruction for the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCommand {
    Play,
    Pause,
    /// Move the playback cursor (seconds)
    Seek(f64),
    /// Set the element's output level
    SetVolume(f64),
    /// Set the element's native muted flag
    SetMuted(bool),
}

// =============================================================================
// Icons
// =============================================================================

/// Which icon of the play/pause pair is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayIcon {
    Play,
    Pause,
}

/// Which icon of the volume triplet is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeIcon {
    High,
    Low,
    Muted,
}

// =============================================================================
// Player State
// =============================================================================

/// Mirrored state of one mounted player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub is_playing: bool,
    /// Level restored when unmuting. Never touched by the mute toggle.
    pub volume: Volume,
    /// Single source of truth for mute; the element's flag follows it.
    pub is_muted: bool,
    pub current_time: f64,
    pub duration: MediaDuration,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            is_playing: false,
            volume: Volume::FULL,
            is_muted: false,
            current_time: 0.0,
            duration: MediaDuration::Unknown,
        }
    }

    // -------------------------------------------------------------------------
    // User controls
    // -------------------------------------------------------------------------

    /// Flip between playing and paused.
    ///
    /// The flag flips optimistically; if the element later rejects the play
    /// request, call [`PlayerState::play_denied`].
    pub fn toggle_play(&mut self) -> MediaCommand {
        let command = if self.is_playing {
            MediaCommand::Pause
        } else {
            MediaCommand::Play
        };
        self.is_playing = !self.is_playing;
        command
    }

    /// Revert the optimistic flip after the host refused to play.
    pub fn play_denied(&mut self) {
        self.is_playing = false;
    }

    /// Silence or restore output. `volume` is preserved across the round trip.
    pub fn toggle_mute(&mut self) -> [MediaCommand; 2] {
        self.is_muted = !self.is_muted;
        self.output_commands()
    }

    /// Apply a volume slider value. Dragging to zero mutes; any audible
    /// level unmutes.
    pub fn change_volume(&mut self, value: f64) -> [MediaCommand; 2] {
        self.volume = Volume::new(value);
        self.is_muted = self.volume.is_silent();
        self.output_commands()
    }

    /// Apply a scrub value, clamped to the known media length.
    pub fn change_time(&mut self, value: f64) -> Result<MediaCommand, PlaybackError> {
        if !value.is_finite() {
            return Err(PlaybackError::InvalidSeek(value));
        }
        let target = self.clamp_to_duration(value);
        self.current_time = target;
        Ok(MediaCommand::Seek(target))
    }

    // -------------------------------------------------------------------------
    // Element notifications
    // -------------------------------------------------------------------------

    /// Mirror the element's live cursor.
    pub fn on_time_update(&mut self, seconds: f64) {
        if seconds.is_finite() {
            self.current_time = self.clamp_to_duration(seconds);
        }
    }

    /// Mirror the element's duration. An unusable reading leaves the
    /// duration unknown.
    pub fn on_duration_change(&mut self, seconds: f64) -> Result<(), MediaError> {
        self.duration = MediaDuration::from_reading(seconds);
        match self.duration {
            MediaDuration::Known(_) => {
                self.current_time = self.clamp_to_duration(self.current_time);
                Ok(())
            }
            MediaDuration::Unknown => Err(MediaError::MetadataUnavailable),
        }
    }

    // -------------------------------------------------------------------------
    // Derived view data
    // -------------------------------------------------------------------------

    /// Level the element should actually output.
    pub fn effective_level(&self) -> f64 {
        if self.is_muted {
            0.0
        } else {
            self.volume.level()
        }
    }

    pub fn play_icon(&self) -> PlayIcon {
        if self.is_playing {
            PlayIcon::Pause
        } else {
            PlayIcon::Play
        }
    }

    pub fn volume_icon(&self) -> VolumeIcon {
        if self.is_muted {
            VolumeIcon::Muted
        } else if self.volume.level() < LOW_VOLUME_THRESHOLD {
            VolumeIcon::Low
        } else {
            VolumeIcon::High
        }
    }

    pub fn current_time_label(&self) -> String {
        format_time(self.current_time)
    }

    pub fn total_time_label(&self) -> String {
        format_duration(self.duration)
    }

    /// Upper bound of the scrub control.
    pub fn scrub_max(&self) -> f64 {
        self.duration.seconds_or_zero()
    }

    /// Playback position as a fraction of the duration, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        match self.duration {
            MediaDuration::Known(total) if total > 0.0 => {
                (self.current_time / total).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    fn clamp_to_duration(&self, seconds: f64) -> f64 {
        match self.duration {
            MediaDuration::Known(total) => seconds.clamp(0.0, total),
            MediaDuration::Unknown => seconds.max(0.0),
        }
    }

    fn output_commands(&self) -> [MediaCommand; 2] {
        [
            MediaCommand::SetVolume(self.effective_level()),
            MediaCommand::SetMuted(self.is_muted),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(duration: f64) -> PlayerState {
        let mut state = PlayerState::new();
        state
            .on_duration_change(duration)
            .expect("finite duration is accepted");
        state
    }

    mod lifecycle_tests {
        use super::*;

        #[test]
        fn initial_state() {
            let state = PlayerState::new();
            assert!(!state.is_playing);
            assert_eq!(state.volume, Volume::FULL);
            assert!(!state.is_muted);
            assert_eq!(state.current_time, 0.0);
            assert_eq!(state.duration, MediaDuration::Unknown);
            assert_eq!(state.scrub_max(), 0.0);
        }

        #[test]
        fn instances_do_not_share_state() {
            let mut a = PlayerState::new();
            let b = PlayerState::new();
            a.toggle_play();
            a.change_volume(0.2);
            assert!(!b.is_playing);
            assert_eq!(b.volume, Volume::FULL);
        }
    }

    mod toggle_play_tests {
        use super::*;

        #[test]
        fn play_then_pause() {
            let mut state = PlayerState::new();
            assert_eq!(state.toggle_play(), MediaCommand::Play);
            assert!(state.is_playing);
            assert_eq!(state.toggle_play(), MediaCommand::Pause);
            assert!(!state.is_playing);
        }

        #[test]
        fn double_toggle_round_trips() {
            let mut state = PlayerState::new();
            let before = state.is_playing;
            state.toggle_play();
            state.toggle_play();
            assert_eq!(state.is_playing, before);
        }

        #[test]
        fn denied_play_reverts() {
            let mut state = PlayerState::new();
            state.toggle_play();
            state.play_denied();
            assert!(!state.is_playing);
            assert_eq!(state.play_icon(), PlayIcon::Play);
        }
    }

    mod volume_tests {
        use super::*;

        #[test]
        fn zero_volume_mutes() {
            let mut state = PlayerState::new();
            let commands = state.change_volume(0.0);
            assert!(state.is_muted);
            assert_eq!(
                commands,
                [MediaCommand::SetVolume(0.0), MediaCommand::SetMuted(true)]
            );
        }

        #[test]
        fn audible_volume_unmutes() {
            let mut state = PlayerState::new();
            state.change_volume(0.0);
            let commands = state.change_volume(0.4);
            assert!(!state.is_muted);
            assert_eq!(state.volume.level(), 0.4);
            assert_eq!(
                commands,
                [MediaCommand::SetVolume(0.4), MediaCommand::SetMuted(false)]
            );
        }

        #[test]
        fn slider_value_is_clamped() {
            let mut state = PlayerState::new();
            state.change_volume(1.5);
            assert_eq!(state.volume, Volume::FULL);
        }
    }

    mod mute_tests {
        use super::*;

        #[test]
        fn mute_forces_silence_without_touching_volume() {
            let mut state = PlayerState::new();
            state.change_volume(0.65);
            let commands = state.toggle_mute();
            assert!(state.is_muted);
            assert_eq!(state.volume.level(), 0.65);
            assert_eq!(
                commands,
                [MediaCommand::SetVolume(0.0), MediaCommand::SetMuted(true)]
            );
        }

        #[test]
        fn unmute_restores_exact_volume() {
            let mut state = PlayerState::new();
            state.change_volume(0.37);
            state.toggle_mute();
            let commands = state.toggle_mute();
            assert!(!state.is_muted);
            assert_eq!(state.volume.level(), 0.37);
            assert_eq!(
                commands,
                [MediaCommand::SetVolume(0.37), MediaCommand::SetMuted(false)]
            );
        }

        #[test]
        fn unmute_after_zero_volume_stays_silent() {
            let mut state = PlayerState::new();
            state.change_volume(0.0);
            state.toggle_mute();
            assert!(!state.is_muted);
            assert_eq!(state.effective_level(), 0.0);
        }
    }

    mod seek_tests {
        use super::*;

        #[test]
        fn scrub_sets_cursor() {
            let mut state = loaded(120.0);
            assert_eq!(state.change_time(59.6), Ok(MediaCommand::Seek(59.6)));
            assert_eq!(state.current_time, 59.6);
            assert_eq!(state.current_time_label(), "00:00:59");
        }

        #[test]
        fn scrub_past_end_is_clamped() {
            let mut state = loaded(120.0);
            assert_eq!(state.change_time(500.0), Ok(MediaCommand::Seek(120.0)));
            assert_eq!(state.current_time, 120.0);
        }

        #[test]
        fn negative_scrub_is_clamped() {
            let mut state = loaded(120.0);
            assert_eq!(state.change_time(-3.0), Ok(MediaCommand::Seek(0.0)));
        }

        #[test]
        fn unknown_duration_only_clamps_below() {
            let mut state = PlayerState::new();
            assert_eq!(state.change_time(42.0), Ok(MediaCommand::Seek(42.0)));
        }

        #[test]
        fn non_finite_scrub_is_rejected() {
            let mut state = loaded(120.0);
            state.change_time(10.0).expect("finite seek");
            assert!(matches!(
                state.change_time(f64::NAN),
                Err(PlaybackError::InvalidSeek(_))
            ));
            assert_eq!(state.current_time, 10.0);
        }
    }

    mod notification_tests {
        use super::*;

        #[test]
        fn duration_change_updates_total_label() {
            let state = loaded(120.0);
            assert_eq!(state.duration, MediaDuration::Known(120.0));
            assert_eq!(state.total_time_label(), "00:02:00");
            assert_eq!(state.scrub_max(), 120.0);
        }

        #[test]
        fn unusable_duration_keeps_placeholder() {
            let mut state = PlayerState::new();
            assert_eq!(
                state.on_duration_change(f64::NAN),
                Err(MediaError::MetadataUnavailable)
            );
            assert_eq!(state.duration, MediaDuration::Unknown);
            assert_eq!(state.total_time_label(), "--:--:--");
        }

        #[test]
        fn time_update_mirrors_cursor() {
            let mut state = loaded(120.0);
            state.on_time_update(12.25);
            assert_eq!(state.current_time, 12.25);
        }

        #[test]
        fn time_update_never_exceeds_duration() {
            let mut state = loaded(30.0);
            state.on_time_update(30.4);
            assert_eq!(state.current_time, 30.0);
        }

        #[test]
        fn non_finite_time_update_is_ignored() {
            let mut state = loaded(120.0);
            state.on_time_update(33.0);
            state.on_time_update(f64::NAN);
            assert_eq!(state.current_time, 33.0);
            state.on_time_update(f64::INFINITY);
            assert_eq!(state.current_time, 33.0);
        }

        #[test]
        fn shorter_duration_pulls_cursor_back() {
            let mut state = PlayerState::new();
            state.on_time_update(90.0);
            state.on_duration_change(60.0).expect("finite duration");
            assert_eq!(state.current_time, 60.0);
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn state_round_trips_through_json() {
            let mut state = loaded(95.5);
            state.change_volume(0.3);
            state.toggle_mute();
            state.on_time_update(12.0);

            let json = serde_json::to_string(&state).expect("state serializes");
            let restored: PlayerState = serde_json::from_str(&json).expect("state deserializes");
            assert_eq!(restored, state);
        }

        #[test]
        fn duration_uses_tagged_layout() {
            let known = serde_json::to_value(MediaDuration::Known(120.0)).expect("serializes");
            assert_eq!(known, serde_json::json!({ "kind": "known", "seconds": 120.0 }));

            let unknown: MediaDuration =
                serde_json::from_str(r#"{ "kind": "unknown" }"#).expect("deserializes");
            assert_eq!(unknown, MediaDuration::Unknown);
        }

        #[test]
        fn out_of_range_volume_is_clamped_on_load() {
            let json = r#"{
                "is_playing": false,
                "volume": 4.0,
                "is_muted": false,
                "current_time": 0.0,
                "duration": { "kind": "unknown" }
            }"#;
            let state: PlayerState = serde_json::from_str(json).expect("deserializes");
            assert_eq!(state.volume, Volume::FULL);
        }
    }

    mod icon_tests {
        use super::*;

        #[test]
        fn volume_icon_tracks_level_and_mute() {
            let mut state = PlayerState::new();
            assert_eq!(state.volume_icon(), VolumeIcon::High);
            state.change_volume(0.2);
            assert_eq!(state.volume_icon(), VolumeIcon::Low);
            state.toggle_mute();
            assert_eq!(state.volume_icon(), VolumeIcon::Muted);
        }

        #[test]
        fn progress_is_fraction_of_duration() {
            let mut state = loaded(200.0);
            state.on_time_update(50.0);
            assert_eq!(state.progress(), 0.25);
            assert_eq!(PlayerState::new().progress(), 0.0);
        }
    }
}
