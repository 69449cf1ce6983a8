//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to drive the host media element without
//! depending on a concrete platform.

pub mod media_element_port;

pub use media_element_port::{MediaCallback, MediaElementPort, MediaEvent, MediaSubscription};

#[cfg(any(test, feature = "testing"))]
pub use media_element_port::MockMediaElementPort;
