//! Web media element adapter
//!
//! Wraps the page's `HtmlVideoElement` directly. Listeners are
//! `wasm-bindgen` closures that stay alive inside their subscription guard.

use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::future::{self, LocalBoxFuture};
use futures_util::FutureExt;
use vidframe_domain::MediaError;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

use crate::ports::outbound::{MediaCallback, MediaElementPort, MediaEvent, MediaSubscription};

pub struct WebVideoElement {
    video: HtmlVideoElement,
}

impl WebVideoElement {
    pub fn new(video: HtmlVideoElement) -> Self {
        Self { video }
    }
}

/// Best-effort name for a rejected promise or thrown DOM exception
fn describe(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

impl MediaElementPort for WebVideoElement {
    fn play(&self) -> LocalBoxFuture<'static, Result<(), MediaError>> {
        match self.video.play() {
            Ok(promise) => async move {
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| MediaError::PlaybackDenied(describe(&err)))
            }
            .boxed_local(),
            Err(err) => future::ready(Err(MediaError::PlaybackDenied(describe(&err)))).boxed_local(),
        }
    }

    fn pause(&self) {
        if let Err(err) = self.video.pause() {
            tracing::error!(error = %describe(&err), "Failed to pause video");
        }
    }

    fn seek(&self, time: f64) {
        self.video.set_current_time(time);
    }

    fn set_volume(&self, level: f64) {
        self.video.set_volume(level);
    }

    fn set_muted(&self, muted: bool) {
        self.video.set_muted(muted);
    }

    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn duration(&self) -> Option<f64> {
        let duration = self.video.duration();
        duration.is_finite().then_some(duration)
    }

    fn subscribe(&self, event: MediaEvent, mut callback: MediaCallback) -> MediaSubscription {
        let read: fn(&HtmlVideoElement) -> f64 = match event {
            MediaEvent::TimeUpdate => |video| video.current_time(),
            MediaEvent::DurationChange => |video| video.duration(),
        };

        let source = self.video.clone();
        let listener = Closure::<dyn FnMut()>::new(move || callback(read(&source)));

        if let Err(err) = self
            .video
            .add_event_listener_with_callback(event.dom_name(), listener.as_ref().unchecked_ref())
        {
            tracing::error!(
                event = event.dom_name(),
                error = %describe(&err),
                "Failed to attach media listener"
            );
            return MediaSubscription::detached(event);
        }

        let target = self.video.clone();
        MediaSubscription::new(event, move || {
            let _ = target.remove_event_listener_with_callback(
                event.dom_name(),
                listener.as_ref().unchecked_ref(),
            );
        })
    }
}

/// Resolve the player's `<video>` element once it has mounted
///
/// Prefers the element handed over by the mount event and falls back to an
/// id lookup.
pub fn attach_video_element(
    mounted: &MountedData,
    element_id: &str,
) -> Result<Rc<dyn MediaElementPort>, MediaError> {
    let element = match mounted.downcast::<web_sys::Element>() {
        Some(element) => element.clone(),
        None => web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .ok_or_else(|| MediaError::element_unavailable(format!("no element #{element_id}")))?,
    };

    let video = element
        .dyn_into::<HtmlVideoElement>()
        .map_err(|_| MediaError::element_unavailable(format!("#{element_id} is not a <video>")))?;

    tracing::debug!(element_id, "Attached DOM video element");
    Ok(Rc::new(WebVideoElement::new(video)))
}
