use crate::{
    foundation::core::Rect,
    foundation::error::{CredenceError, CredenceResult},
};

/// Two-segment bar representing a probability `p` and its complement.
///
/// The left segment spans `p * width`, the right segment the rest; both are
/// `height` tall with the origin at the bar's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BarDiagram {
    /// The probability the bar visualizes.
    pub p: f64,
    /// Left segment, width `p * width`.
    pub left: Rect,
    /// Right segment, width `(1 - p) * width`.
    pub right: Rect,
}

impl BarDiagram {
    /// Solve the bar geometry for `p` in `[0, 1]` and a positive extent.
    pub fn solve(p: f64, width: f64, height: f64) -> CredenceResult<Self> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(CredenceError::validation(format!(
                "bar p must be within [0, 1], got {p}"
            )));
        }
        for (name, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CredenceError::validation(format!(
                    "bar {name} must be finite and > 0, got {value}"
                )));
            }
        }

        let split_x = p * width;
        Ok(Self {
            p,
            left: Rect::new(0.0, 0.0, split_x, height),
            right: Rect::new(split_x, 0.0, width, height),
        })
    }

    /// Left segment's share as a whole percentage (rounded).
    pub fn left_percent(&self) -> u32 {
        (self.p * 100.0).round() as u32
    }

    /// Right segment's share as a whole percentage (rounded).
    ///
    /// Rounded independently of [`Self::left_percent`], so the pair may not
    /// sum to exactly 100 when `p * 100` lands on a half.
    pub fn right_percent(&self) -> u32 {
        ((1.0 - self.p) * 100.0).round() as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/bar.rs"]
mod tests;
