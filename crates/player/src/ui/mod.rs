use dioxus::prelude::*;

use crate::config::{PlayerConfig, ShellKind};

pub mod presentation;
pub mod routes;

pub use routes::Route;

const PLAYER_CSS: Asset = asset!("/assets/player.css");

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let config = use_context::<PlayerConfig>();

    rsx! {
        document::Title { "{config.window_title}" }
        document::Stylesheet { href: PLAYER_CSS }

        Shell {
            kind: config.shell,
            Router::<routes::Route> {}
        }
    }
}

/// Outer bounds of the app. Both kinds mount the same single-route router.
#[component]
fn Shell(kind: ShellKind, children: Element) -> Element {
    rsx! {
        div {
            class: kind.css_class(),
            {children}
        }
    }
}
