use crate::{
    animation::ease::Ease,
    diagram::area::AreaDiagram,
    diagram::bar::BarDiagram,
    diagram::params::DiagramParams,
    foundation::core::{Point, Rect, Vec2},
    foundation::error::CredenceResult,
};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rect {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Rect::new(
            <f64 as Lerp>::lerp(&a.x0, &b.x0, t),
            <f64 as Lerp>::lerp(&a.y0, &b.y0, t),
            <f64 as Lerp>::lerp(&a.x1, &b.x1, t),
            <f64 as Lerp>::lerp(&a.y1, &b.y1, t),
        )
    }
}

impl Lerp for DiagramParams {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            prior: <f64 as Lerp>::lerp(&a.prior, &b.prior, t),
            likelihood: <f64 as Lerp>::lerp(&a.likelihood, &b.likelihood, t),
            antilikelihood: <f64 as Lerp>::lerp(&a.antilikelihood, &b.antilikelihood, t),
        }
    }
}

/// Eased morph between two area diagrams.
///
/// Interpolation happens in parameter space and each sample re-solves, so
/// the exact-tiling invariant holds at every intermediate diagram rather
/// than only at the endpoints.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct DiagramTween {
    /// Parameters at `t = 0`.
    pub from: DiagramParams,
    /// Parameters at `t = 1`.
    pub to: DiagramParams,
    /// Side length passed through to the solver.
    pub side: f64,
    /// Easing applied to progress.
    pub ease: Ease,
}

impl DiagramTween {
    /// Build a tween, validating both endpoints up front.
    pub fn new(
        from: DiagramParams,
        to: DiagramParams,
        side: f64,
        ease: Ease,
    ) -> CredenceResult<Self> {
        from.validate()?;
        to.validate()?;
        // Solve once to surface a bad side length at construction time.
        AreaDiagram::solve(from, side)?;
        Ok(Self {
            from,
            to,
            side,
            ease,
        })
    }

    /// Interpolated parameters at progress `t` (clamped to `[0, 1]`).
    pub fn params_at(&self, t: f64) -> DiagramParams {
        DiagramParams::lerp(&self.from, &self.to, self.ease.apply(t))
    }

    /// Solved diagram at progress `t`.
    pub fn sample(&self, t: f64) -> CredenceResult<AreaDiagram> {
        AreaDiagram::solve(self.params_at(t), self.side)
    }
}

/// Eased morph between two probability bars, e.g. prior to posterior.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BarTween {
    /// Probability at `t = 0`.
    pub from_p: f64,
    /// Probability at `t = 1`.
    pub to_p: f64,
    /// Bar width passed through to the solver.
    pub width: f64,
    /// Bar height passed through to the solver.
    pub height: f64,
    /// Easing applied to progress.
    pub ease: Ease,
}

impl BarTween {
    /// Build a tween, validating both endpoints up front.
    pub fn new(from_p: f64, to_p: f64, width: f64, height: f64, ease: Ease) -> CredenceResult<Self> {
        BarDiagram::solve(from_p, width, height)?;
        BarDiagram::solve(to_p, width, height)?;
        Ok(Self {
            from_p,
            to_p,
            width,
            height,
            ease,
        })
    }

    /// Solved bar at progress `t` (clamped to `[0, 1]`).
    pub fn sample(&self, t: f64) -> CredenceResult<BarDiagram> {
        let p = <f64 as Lerp>::lerp(&self.from_p, &self.to_p, self.ease.apply(t));
        BarDiagram::solve(p, self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
