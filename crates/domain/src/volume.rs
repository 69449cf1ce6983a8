use serde::{Deserialize, Serialize};

/// Output level in `[0.0, 1.0]`.
///
/// Construction clamps, so a `Volume` can be handed to the element as-is.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Volume(f64);

impl Volume {
    pub const SILENT: Volume = Volume(0.0);
    pub const FULL: Volume = Volume(1.0);

    /// Clamp `level` into range; NaN is treated as silent.
    pub fn new(level: f64) -> Self {
        if level.is_nan() {
            return Self::SILENT;
        }
        Self(level.clamp(0.0, 1.0))
    }

    pub fn level(self) -> f64 {
        self.0
    }

    pub fn is_silent(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<f64> for Volume {
    fn from(level: f64) -> Self {
        Self::new(level)
    }
}

impl From<Volume> for f64 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}
