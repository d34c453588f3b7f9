use super::metric::Metric;
use crate::Score;
use crate::engine::Error;

/// a weighted combination of metrics producing one score per candidate.
/// a round evaluates several profiles at once over a shared
/// normalization pass.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub weights: Vec<(Metric, Score)>,
}

impl From<Vec<(Metric, Score)>> for Profile {
    fn from(weights: Vec<(Metric, Score)>) -> Self {
        Self { weights }
    }
}

impl Profile {
    /// weights must be finite, non-negative, and not all zero
    pub fn validate(&self) -> Result<(), Error> {
        if self.weights.is_empty() {
            return Err(Error::InvalidInput("profile has no weights".into()));
        }
        if self.weights.iter().any(|(_, w)| !w.is_finite() || *w < 0.) {
            return Err(Error::InvalidInput("profile weights must be finite and non-negative".into()));
        }
        if !self.weights.iter().any(|(_, w)| *w > 0.) {
            return Err(Error::InvalidInput("profile weights are all zero".into()));
        }
        Ok(())
    }

    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.weights.iter().map(|(metric, _)| *metric)
    }
}
