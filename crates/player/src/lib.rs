//! vidframe player crate.
//!
//! This crate contains the UI, the playback service and the media element
//! adapters. Multi-platform support is provided via compile-time `cfg`
//! selection.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use config::{PlayerConfig, ShellKind};
pub use ui::{app, Route};
