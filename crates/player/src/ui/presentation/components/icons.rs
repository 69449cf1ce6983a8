//! SVG glyphs for the player controls (24x24 viewBox).

use dioxus::prelude::*;

pub const PLAY: &str = "M8,5.14V19.14L19,12.14L8,5.14Z";
pub const PAUSE: &str = "M14,19H18V5H14M6,19H10V5H6V19Z";
pub const VOLUME_HIGH: &str = "M14,3.23V5.29C16.89,6.15 19,8.83 19,12C19,15.17 16.89,17.84 14,18.7V20.77C18,19.86 21,16.28 21,12C21,7.72 18,4.14 14,3.23M16.5,12C16.5,10.23 15.5,8.71 14,7.97V16C15.5,15.29 16.5,13.76 16.5,12M3,9V15H7L12,20V4L7,9H3Z";
pub const VOLUME_LOW: &str = "M5,9V15H9L14,20V4L9,9H5Z";
pub const VOLUME_MUTED: &str = "M12,4L9.91,6.09L12,8.18M4.27,3L3,4.27L7.73,9H3V15H7L12,20V13.27L16.25,17.53C15.58,18.04 14.83,18.46 14,18.7V20.77C15.38,20.45 16.63,19.82 17.68,18.96L19.73,21L21,19.73L12,10.73M19,12C19,12.94 18.8,13.82 18.46,14.64L19.97,16.15C20.62,14.91 21,13.5 21,12C21,7.72 18,4.14 14,3.23V5.29C16.89,6.15 19,8.83 19,12M16.5,12C16.5,10.23 15.5,8.71 14,7.97V10.18L16.45,12.63C16.5,12.43 16.5,12.21 16.5,12Z";
pub const CAPTIONS: &str = "M18,11H16.5V10.5H14.5V13.5H16.5V13H18V14A1,1 0 0,1 17,15H14A1,1 0 0,1 13,14V10A1,1 0 0,1 14,9H17A1,1 0 0,1 18,10M11,11H9.5V10.5H7.5V13.5H9.5V13H11V14A1,1 0 0,1 10,15H7A1,1 0 0,1 6,14V10A1,1 0 0,1 7,9H10A1,1 0 0,1 11,10M6,18H18V20H6V18Z";
pub const SETTINGS: &str = "M12,6C10.9,6 10,6.9 10,8C10,9.1 10.9,10 12,10C13.1,10 14,9.1 14,8C14,6.9 13.1,6 12,6M12,12C10.9,12 10,12.9 10,14C10,15.1 10.9,16 12,16C13.1,16 14,15.1 14,14C14,12.9 13.1,12 12,12M12,2C6.48,2 2,6.48 2,12C2,17.52 6.48,22 12,22C17.52,22 22,17.52 22,12C22,6.48 17.52,2 12,2M4,12C4,7.58 7.58,4 12,4C16.42,4 20,7.58 20,12C20,16.42 16.42,20 12,20C7.58,20 4,16.42 4,12Z";
pub const FULL_SCREEN: &str = "M21,9H19V5A1,1 0 0,0 18,4H14V2H10V4H6A1,1 0 0,0 5,5V9H3A1,1 0 0,0 2,10V14A1,1 0 0,0 3,15H5V19A1,1 0 0,0 6,20H10V22H14V20H18A1,1 0 0,0 19,19V15H21A1,1 0 0,0 22,14V10A1,1 0 0,0 21,9M18,14H6V10H18V14Z";

/// Class list for an icon that is always in the document and toggled by CSS.
pub fn icon_class(base: &str, visible: bool) -> String {
    if visible {
        base.to_string()
    } else {
        format!("{base} hidden")
    }
}

#[component]
pub fn Icon(class: String, glyph: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            path { fill: "currentColor", d: glyph }
        }
    }
}
