use crate::foundation::error::{CredenceError, CredenceResult};

pub use kurbo::{Point, Rect, Vec2};

/// Zero-based frame index on the caller's timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frame rate as an exact rational (e.g. 30000/1001 for NTSC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator, frames.
    pub num: u32,
    /// Denominator, seconds. Must be > 0.
    pub den: u32,
}

impl Fps {
    /// Construct a frame rate, rejecting zero terms.
    pub fn new(num: u32, den: u32) -> CredenceResult<Self> {
        if num == 0 {
            return Err(CredenceError::validation("Fps num must be > 0"));
        }
        if den == 0 {
            return Err(CredenceError::validation("Fps den must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert a frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Convert seconds to a frame count, flooring toward zero.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}
