//! Route table: one player page at `/`.

use dioxus::prelude::*;

use crate::ui::presentation::components::VideoPlayer;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    PlayerRoute {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn PlayerRoute() -> Element {
    rsx! {
        VideoPlayer {}
    }
}

/// Anything other than `/`
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(path = %path, "Unknown route");

    rsx! {
        div {
            class: "not-found",
            p { "Nothing at /{path}" }
            Link { to: Route::PlayerRoute {}, "Back to the player" }
        }
    }
}
