mod icons;
mod video_player;

pub use video_player::{VideoPlayer, MEDIA_SOURCE, VIDEO_ELEMENT_ID};
