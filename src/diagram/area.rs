use crate::{
    diagram::params::DiagramParams,
    foundation::core::{Point, Rect},
    foundation::error::{CredenceError, CredenceResult},
};

/// Solved Bayes area diagram: six rectangles tiling a `side x side` square.
///
/// Coordinates are y-down with the origin at the square's top-left corner;
/// evidence strips sit on the bottom edge. A diagram is immutable once
/// solved — changing a parameter means solving a new one, which is what
/// lets tweens interpolate between diagrams.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AreaDiagram {
    /// Side length of the square.
    pub side: f64,
    /// P(H|E) derived from the parameters.
    pub posterior: f64,
    /// The full square.
    pub outer: Rect,
    /// H column (left), width `prior * side`.
    pub h_rect: Rect,
    /// ¬H column (right), width `(1 - prior) * side`.
    pub not_h_rect: Rect,
    /// Evidence strip at the bottom of the H column, height `likelihood * side`.
    pub h_evidence_rect: Rect,
    /// Remainder of the H column above its evidence strip.
    pub h_not_evidence_rect: Rect,
    /// Evidence strip at the bottom of the ¬H column, height `antilikelihood * side`.
    pub not_h_evidence_rect: Rect,
    /// Remainder of the ¬H column above its evidence strip.
    pub not_h_not_evidence_rect: Rect,
}

/// Anchor points for the diagram's four labels.
///
/// Column labels hang below the square; evidence labels sit to the left of
/// the H strip and to the right of the ¬H strip, matching the braces the
/// diagram is conventionally drawn with. The caller decides whether a label
/// on a collapsed (zero-measure) region is worth rendering.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiagramAnchors {
    /// P(H) label, centered under the H column.
    pub h_label: Point,
    /// P(¬H) label, centered under the ¬H column.
    pub not_h_label: Point,
    /// P(E|H) label, left of the H evidence strip.
    pub h_evidence_label: Point,
    /// P(E|¬H) label, right of the ¬H evidence strip.
    pub not_h_evidence_label: Point,
}

impl AreaDiagram {
    /// Solve the diagram geometry for validated parameters and a side length.
    ///
    /// Pure and total on the documented domain: any `params` in `[0, 1]^3`
    /// and finite `side > 0` produce a tiling. Degenerate parameters
    /// (`prior == 0`, `likelihood == 1`, ...) collapse a rectangle to zero
    /// measure; that is a valid output, not an error.
    #[tracing::instrument]
    pub fn solve(params: DiagramParams, side: f64) -> CredenceResult<Self> {
        params.validate()?;
        if !side.is_finite() || side <= 0.0 {
            return Err(CredenceError::validation(format!(
                "diagram side must be finite and > 0, got {side}"
            )));
        }

        let split_x = params.prior * side;
        let h_evidence_h = params.likelihood * side;
        let not_h_evidence_h = params.antilikelihood * side;

        Ok(Self {
            side,
            posterior: params.posterior(),
            outer: Rect::new(0.0, 0.0, side, side),
            h_rect: Rect::new(0.0, 0.0, split_x, side),
            not_h_rect: Rect::new(split_x, 0.0, side, side),
            h_evidence_rect: Rect::new(0.0, side - h_evidence_h, split_x, side),
            h_not_evidence_rect: Rect::new(0.0, 0.0, split_x, side - h_evidence_h),
            not_h_evidence_rect: Rect::new(split_x, side - not_h_evidence_h, side, side),
            not_h_not_evidence_rect: Rect::new(split_x, 0.0, side, side - not_h_evidence_h),
        })
    }

    /// The four leaf strips, painter's order left-to-right, bottom-to-top.
    pub fn strips(&self) -> [Rect; 4] {
        [
            self.h_evidence_rect,
            self.h_not_evidence_rect,
            self.not_h_evidence_rect,
            self.not_h_not_evidence_rect,
        ]
    }

    /// Label anchor points offset `gap` outwards from the square's edges.
    pub fn label_anchors(&self, gap: f64) -> DiagramAnchors {
        DiagramAnchors {
            h_label: Point::new(self.h_rect.center().x, self.side + gap),
            not_h_label: Point::new(self.not_h_rect.center().x, self.side + gap),
            h_evidence_label: Point::new(-gap, self.h_evidence_rect.center().y),
            not_h_evidence_label: Point::new(self.side + gap, self.not_h_evidence_rect.center().y),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/area.rs"]
mod tests;
