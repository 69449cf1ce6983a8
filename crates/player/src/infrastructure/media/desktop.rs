//! Desktop media element adapter
//!
//! The desktop renderer is a webview, so the `<video>` element lives on the
//! JavaScript side. Commands are sent as short scripts; notifications come
//! back over the eval channel (`dioxus.send`) and are cached so the synchronous
//! getters can answer without a round trip.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::document;
use dioxus::prelude::*;
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use serde::Deserialize;
use vidframe_domain::MediaError;

use crate::ports::outbound::{MediaCallback, MediaElementPort, MediaEvent, MediaSubscription};

/// Window property holding detach functions for live listeners
const LISTENER_REGISTRY: &str = "__vidframeListeners";

/// Message streamed back by a listener script
#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ListenerMessage {
    /// The element was not in the document; nothing was attached
    Missing,
    /// NaN serializes as null, so readings arrive as `Option<f64>`
    Reading { value: Option<f64> },
}

/// Wrap `body` so it runs with `video` bound. Resolves to whether the element
/// was found.
fn command_script(element_id: &str, body: &str) -> String {
    format!(
        "const video = document.getElementById({element_id}); \
         if (!video) {{ return false; }} {body} return true;"
    )
}

/// Attach a listener for `event` and keep the channel open until detached.
///
/// If metadata is already loaded the current reading is sent straight away,
/// since the element will not fire a `durationchange` it has already fired.
fn listener_script(element_id: &str, event: MediaEvent, key: &str) -> String {
    let name = event.dom_name();
    let reading = match event {
        MediaEvent::TimeUpdate => "video.currentTime",
        MediaEvent::DurationChange => "video.duration",
    };

    format!(
        r#"
        const video = document.getElementById({element_id});
        if (!video) {{
            dioxus.send({{ kind: "missing" }});
            return;
        }}
        const listener = () => dioxus.send({{ kind: "reading", value: {reading} }});
        video.addEventListener("{name}", listener);
        window.{LISTENER_REGISTRY} = window.{LISTENER_REGISTRY} || {{}};
        window.{LISTENER_REGISTRY}["{key}"] = () => video.removeEventListener("{name}", listener);
        if (video.readyState >= 1) {{ listener(); }}
        await new Promise(() => {{}});
        "#
    )
}

fn detach_script(key: &str) -> String {
    format!(
        r#"
        const registry = window.{LISTENER_REGISTRY};
        if (registry && registry["{key}"]) {{
            registry["{key}"]();
            delete registry["{key}"];
        }}
        "#
    )
}

pub struct EvalVideoElement {
    /// Element id, already quoted as a JS string literal
    element_id: String,
    current_time: Rc<Cell<f64>>,
    duration: Rc<Cell<Option<f64>>>,
    next_listener: Cell<u32>,
}

impl EvalVideoElement {
    pub fn new(element_id: &str) -> Result<Self, MediaError> {
        let element_id =
            serde_json::to_string(element_id).map_err(|e| MediaError::script(e.to_string()))?;

        Ok(Self {
            element_id,
            current_time: Rc::new(Cell::new(0.0)),
            duration: Rc::new(Cell::new(None)),
            next_listener: Cell::new(0),
        })
    }

    /// Run `body` against the element, logging if the command was lost
    fn run(&self, action: &'static str, body: &str) {
        let eval = document::eval(&command_script(&self.element_id, body));
        spawn(async move {
            match eval.join::<bool>().await {
                Ok(true) => {}
                Ok(false) => tracing::error!(action, "Video element missing, command dropped"),
                Err(e) => tracing::error!(action, error = ?e, "Media command script failed"),
            }
        });
    }
}

impl MediaElementPort for EvalVideoElement {
    fn play(&self) -> LocalBoxFuture<'static, Result<(), MediaError>> {
        let script = format!(
            r#"
            const video = document.getElementById({id});
            if (!video) {{ return "element missing"; }}
            try {{
                await video.play();
                return null;
            }} catch (err) {{
                return err && err.name ? err.name : String(err);
            }}
            "#,
            id = self.element_id
        );
        let eval = document::eval(&script);

        async move {
            match eval.join::<Option<String>>().await {
                Ok(None) => Ok(()),
                Ok(Some(reason)) => Err(MediaError::PlaybackDenied(reason)),
                Err(e) => Err(MediaError::script(format!("{e:?}"))),
            }
        }
        .boxed_local()
    }

    fn pause(&self) {
        self.run("pause", "video.pause();");
    }

    fn seek(&self, time: f64) {
        self.current_time.set(time);
        self.run("seek", &format!("video.currentTime = {time};"));
    }

    fn set_volume(&self, level: f64) {
        self.run("set_volume", &format!("video.volume = {level};"));
    }

    fn set_muted(&self, muted: bool) {
        self.run("set_muted", &format!("video.muted = {muted};"));
    }

    fn current_time(&self) -> f64 {
        self.current_time.get()
    }

    fn duration(&self) -> Option<f64> {
        self.duration.get()
    }

    fn subscribe(&self, event: MediaEvent, mut callback: MediaCallback) -> MediaSubscription {
        let listener_id = self.next_listener.get();
        self.next_listener.set(listener_id + 1);

        let name = event.dom_name();
        let key = format!("{name}-{listener_id}");
        let mut eval = document::eval(&listener_script(&self.element_id, event, &key));

        let live = Rc::new(Cell::new(true));
        let task_live = Rc::clone(&live);
        let current_time = Rc::clone(&self.current_time);
        let duration = Rc::clone(&self.duration);
        let task = spawn(async move {
            loop {
                match eval.recv::<ListenerMessage>().await {
                    Ok(ListenerMessage::Reading { value }) => {
                        let value = value.unwrap_or(f64::NAN);
                        match event {
                            MediaEvent::TimeUpdate => current_time.set(value),
                            MediaEvent::DurationChange => {
                                duration.set(value.is_finite().then_some(value))
                            }
                        }
                        callback(value);
                    }
                    Ok(ListenerMessage::Missing) => {
                        tracing::warn!(event = name, "Video element missing, listener not attached");
                        break;
                    }
                    Err(e) => {
                        tracing::warn!(event = name, error = ?e, "Media listener channel closed");
                        break;
                    }
                }
            }
            task_live.set(false);
        });

        let detach = detach_script(&key);
        let doc = document::document();

        MediaSubscription::with_liveness(event, live, move || {
            task.cancel();
            let _ = doc.eval(detach);
        })
    }
}

/// Resolve the player's `<video>` element once it has mounted
pub fn attach_video_element(
    _mounted: &MountedData,
    element_id: &str,
) -> Result<Rc<dyn MediaElementPort>, MediaError> {
    let element = EvalVideoElement::new(element_id)?;
    tracing::debug!(element_id, "Attached webview video element");
    Ok(Rc::new(element))
}
