//! Infrastructure adapters for the host platform.

pub mod media;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use media::attach_video_element;
