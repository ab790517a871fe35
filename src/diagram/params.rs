use crate::foundation::error::{CredenceError, CredenceResult};

/// Probability parameters driving a Bayes area diagram.
///
/// All three values live in `[0, 1]`. They are a pure data model: build
/// programmatically via [`DiagramParams::new`] or deserialize via Serde and
/// run [`DiagramParams::validate`] before solving.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiagramParams {
    /// P(H): fraction of total width given to the H column.
    pub prior: f64,
    /// P(E|H): fraction of the H column's height given to its evidence strip.
    pub likelihood: f64,
    /// P(E|¬H): fraction of the ¬H column's height given to its evidence strip.
    pub antilikelihood: f64,
}

impl DiagramParams {
    /// Construct validated parameters.
    ///
    /// Out-of-range or non-finite values are rejected, never clamped:
    /// clamping would misrepresent the probabilities being visualized.
    pub fn new(prior: f64, likelihood: f64, antilikelihood: f64) -> CredenceResult<Self> {
        let params = Self {
            prior,
            likelihood,
            antilikelihood,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validate the `[0, 1]` domain of every field.
    pub fn validate(&self) -> CredenceResult<()> {
        for (name, value) in [
            ("prior", self.prior),
            ("likelihood", self.likelihood),
            ("antilikelihood", self.antilikelihood),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CredenceError::validation(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// P(H|E) by Bayes' theorem.
    ///
    /// Defined as `0.0` when the total evidence probability is zero, so a
    /// diagram with both evidence strips collapsed still samples cleanly.
    pub fn posterior(&self) -> f64 {
        let joint = self.likelihood * self.prior;
        let evidence = joint + self.antilikelihood * (1.0 - self.prior);
        if evidence == 0.0 { 0.0 } else { joint / evidence }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/params.rs"]
mod tests;
