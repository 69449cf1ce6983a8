//! Test doubles for infrastructure adapters
//!
//! Available under `cfg(test)` or with the `testing` feature.

mod fake_media_element;

pub use fake_media_element::FakeMediaElement;
