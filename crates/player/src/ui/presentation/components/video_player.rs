//! Video player component
//!
//! Renders a native `<video>` element with custom controls. All visible
//! state comes from the mirrored `PlayerState`; the element itself is driven
//! through the `PlaybackService` attached when the `<video>` mounts.

use dioxus::prelude::*;
use vidframe_domain::{PlayIcon, PlayerState, VolumeIcon};

use super::icons::{self, icon_class, Icon};
use crate::application::{MountedPlayer, PlaybackService};
use crate::infrastructure::attach_video_element;

/// DOM id of the player's `<video>` element
pub const VIDEO_ELEMENT_ID: &str = "vidframe-video";

/// Bundled media file, fixed at build time
pub const MEDIA_SOURCE: Asset = asset!("/assets/media/clip.wav");

#[component]
pub fn VideoPlayer() -> Element {
    let state = use_signal(PlayerState::new);
    // Dropped with the component, which detaches the element listeners.
    let mut mounted = use_signal(|| None::<MountedPlayer>);

    let service = move || mounted.read().as_ref().map(|p| p.service().clone());

    let view = state.read().clone();
    let play_icon = view.play_icon();
    let volume_icon = view.volume_icon();
    let volume = view.volume.level();
    let current_time = view.current_time;
    let scrub_max = view.scrub_max();
    let progress = view.progress();
    let current_label = view.current_time_label();
    let total_label = view.total_time_label();

    rsx! {
        div {
            class: "video-container",
            video {
                id: VIDEO_ELEMENT_ID,
                src: MEDIA_SOURCE,
                preload: "metadata",
                onmounted: move |evt: MountedEvent| {
                    match attach_video_element(&evt.data(), VIDEO_ELEMENT_ID) {
                        Ok(media) => {
                            let player = PlaybackService::new(media).mount(state);
                            if !player.is_listening() {
                                tracing::warn!("Player mounted without element notifications");
                            }
                            mounted.set(Some(player));
                        }
                        Err(e) => tracing::error!(error = %e, "Video element unavailable"),
                    }
                },
            }
            div {
                class: "video-controls-container",
                div {
                    class: "timeline-container",
                    style: "--progress-position: {progress}",
                    div {
                        class: "timeline",
                        div { class: "thumb-indicator" }
                    }
                    input {
                        class: "scrub-slider",
                        r#type: "range",
                        min: "0",
                        max: "{scrub_max}",
                        step: "any",
                        value: "{current_time}",
                        oninput: move |evt: FormEvent| {
                            let raw = evt.value();
                            let Ok(value) = raw.parse::<f64>() else {
                                tracing::debug!(raw = %raw, "Ignoring unparsable scrub value");
                                return;
                            };
                            if let Some(service) = service() {
                                if let Err(e) = service.change_time(state, value) {
                                    tracing::debug!(error = %e, "Scrub rejected");
                                }
                            }
                        },
                    }
                }
                div {
                    class: "controls",
                    button {
                        class: "play-pause-btn",
                        onclick: move |_| {
                            if let Some(service) = service() {
                                spawn(async move {
                                    // Refusals are logged and reverted by the service.
                                    let _ = service.toggle_play(state).await;
                                });
                            }
                        },
                        Icon { class: icon_class("play-icon", play_icon == PlayIcon::Play), glyph: icons::PLAY }
                        Icon { class: icon_class("pause-icon", play_icon == PlayIcon::Pause), glyph: icons::PAUSE }
                    }
                    div {
                        class: "volume-container",
                        button {
                            class: "mute-btn",
                            onclick: move |_| {
                                if let Some(service) = service() {
                                    service.toggle_mute(state);
                                }
                            },
                            Icon { class: icon_class("volume-high-icon", volume_icon == VolumeIcon::High), glyph: icons::VOLUME_HIGH }
                            Icon { class: icon_class("volume-low-icon", volume_icon == VolumeIcon::Low), glyph: icons::VOLUME_LOW }
                            Icon { class: icon_class("volume-muted-icon", volume_icon == VolumeIcon::Muted), glyph: icons::VOLUME_MUTED }
                        }
                        input {
                            class: "volume-slider",
                            r#type: "range",
                            min: "0",
                            max: "1",
                            step: "any",
                            value: "{volume}",
                            oninput: move |evt: FormEvent| {
                                let raw = evt.value();
                                let Ok(value) = raw.parse::<f64>() else {
                                    tracing::debug!(raw = %raw, "Ignoring unparsable volume value");
                                    return;
                                };
                                if let Some(service) = service() {
                                    service.change_volume(state, value);
                                }
                            },
                        }
                    }
                    div {
                        class: "duration-container",
                        div { class: "current-time", "{current_label}" }
                        "/"
                        div { class: "total-time", "{total_label}" }
                    }
                    // Placeholders: no behaviour bound.
                    button {
                        class: "captions-btn",
                        Icon { class: "captions-icon".to_string(), glyph: icons::CAPTIONS }
                    }
                    button {
                        class: "settings-btn",
                        Icon { class: "settings-icon".to_string(), glyph: icons::SETTINGS }
                    }
                    button {
                        class: "full-screen-btn",
                        Icon { class: "full-screen-icon".to_string(), glyph: icons::FULL_SCREEN }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn bundled_media_is_a_loadable_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/media/clip.wav");
        let bytes = std::fs::read(path).expect("media file is committed");
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
    }
}
