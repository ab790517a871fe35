//! Credence is a pure geometry engine for animated probability diagrams.
//!
//! The crate turns probability parameters into exact rectangle tilings — the
//! Bayes'-theorem area diagram and the two-segment probability bar — and
//! provides the animation plumbing an external renderer drives frame by frame.
//!
//! # Pipeline overview
//!
//! 1. **Parameterize**: [`DiagramParams`] holds a prior and two likelihoods,
//!    validated on construction (fail fast, never clamp).
//! 2. **Solve**: `DiagramParams + side -> AreaDiagram` — six rectangles that
//!    exactly tile a square, plus the derived posterior.
//! 3. **Animate**: [`Ease`], [`DiagramTween`] and [`ParamTrack`] map
//!    frames/progress to fresh geometry; the caller owns time and rendering.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure and deterministic**: geometry is a function of its parameters;
//!   a parameter change produces a brand-new value, nothing mutates in place.
//! - **Tiling holds mid-animation**: tweens interpolate in parameter space
//!   and re-solve, so every intermediate sample is an exact tiling.
//! - **No I/O in the solver**: the only persistence surface is the JSON
//!   track script on [`ParamTrack`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod diagram;
mod foundation;

pub use animation::ease::Ease;
pub use animation::track::{Keyframe, ParamTrack};
pub use animation::tween::{BarTween, DiagramTween, Lerp};
pub use diagram::area::{AreaDiagram, DiagramAnchors};
pub use diagram::bar::BarDiagram;
pub use diagram::params::DiagramParams;
pub use foundation::core::{Fps, FrameIndex, Point, Rect, Vec2};
pub use foundation::error::{CredenceError, CredenceResult};
