use crate::{
    animation::ease::Ease,
    animation::tween::Lerp,
    diagram::area::AreaDiagram,
    diagram::params::DiagramParams,
    foundation::core::FrameIndex,
    foundation::error::{CredenceError, CredenceResult},
};

/// One keyframe on a [`ParamTrack`].
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Timeline frame this key lands on.
    pub frame: FrameIndex,
    /// Diagram parameters at this key.
    pub params: DiagramParams,
    /// Ease applied toward the next key.
    pub ease: Ease,
}

/// Keyframed diagram parameters over a frame timeline.
///
/// A track is the crate's "scene script": an ordered list of keyframes that
/// an external driver samples once per frame. Tracks hold the first key's
/// value before it and the last key's value after it, and ease between
/// neighbors in parameter space. Tracks serialize to/from JSON via
/// [`ParamTrack::from_json_str`] / [`ParamTrack::to_json_string`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ParamTrack {
    /// Keyframes, strictly increasing by frame.
    pub keys: Vec<Keyframe>,
}

impl ParamTrack {
    /// Build a validated track.
    pub fn new(keys: Vec<Keyframe>) -> CredenceResult<Self> {
        let track = Self { keys };
        track.validate()?;
        Ok(track)
    }

    /// Validate track structure and every key's parameters.
    pub fn validate(&self) -> CredenceResult<()> {
        if self.keys.is_empty() {
            return Err(CredenceError::animation(
                "ParamTrack must have at least one key",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 < w[1].frame.0) {
            return Err(CredenceError::animation(
                "ParamTrack keys must be strictly increasing by frame",
            ));
        }
        for key in &self.keys {
            key.params.validate()?;
        }
        Ok(())
    }

    /// Frame of the last key; the track is constant after this.
    pub fn end_frame(&self) -> FrameIndex {
        self.keys.last().map(|k| k.frame).unwrap_or(FrameIndex(0))
    }

    /// Interpolated parameters at `frame`.
    ///
    /// Assumes a validated track; on an empty one this returns the neutral
    /// all-zero parameters rather than panicking.
    pub fn sample(&self, frame: FrameIndex) -> DiagramParams {
        let Some(first) = self.keys.first() else {
            return DiagramParams {
                prior: 0.0,
                likelihood: 0.0,
                antilikelihood: 0.0,
            };
        };

        let f = frame.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);
        if idx == 0 {
            return first.params;
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].params;
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return a.params;
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        DiagramParams::lerp(&a.params, &b.params, a.ease.apply(t))
    }

    /// Validate, sample and solve the diagram for one frame.
    #[tracing::instrument(skip(self))]
    pub fn geometry_at(&self, frame: FrameIndex, side: f64) -> CredenceResult<AreaDiagram> {
        self.validate()?;
        AreaDiagram::solve(self.sample(frame), side)
    }

    /// Parse a track from a JSON script and validate it.
    pub fn from_json_str(s: &str) -> CredenceResult<Self> {
        let track: Self =
            serde_json::from_str(s).map_err(|e| CredenceError::serde(e.to_string()))?;
        track.validate()?;
        Ok(track)
    }

    /// Serialize the track as a JSON script.
    pub fn to_json_string(&self) -> CredenceResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CredenceError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
