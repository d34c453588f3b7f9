use crate::Price;
use crate::engine::Error;

/// the probability view over the price grid. weights are a non-negative
/// density sampled on the same points as the grid; the mean is supplied
/// by the upstream view module.
///
/// the vector is opaque here: it is never renormalized, so an
/// un-normalized upstream view flows through to every mixture-weighted
/// aggregate unchanged.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Mixture {
    weights: Vec<f64>,
    mean: Price,
}

impl Mixture {
    pub fn new(weights: Vec<f64>, mean: Price) -> Result<Self, Error> {
        if weights.iter().any(|w| !w.is_finite() || *w < 0.) {
            return Err(Error::InvalidInput("mixture weights must be finite and non-negative".into()));
        }
        if !mean.is_finite() {
            return Err(Error::InvalidInput("non-finite mixture mean".into()));
        }
        Ok(Self { weights, mean })
    }

    /// a flat view, mostly useful for tests
    pub fn uniform(len: usize, mean: Price) -> Self {
        Self {
            weights: vec![1. / len.max(1) as f64; len],
            mean,
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
    pub fn mean(&self) -> Price {
        self.mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_weight() {
        assert!(Mixture::new(vec![0.5, -0.5], 100.).is_err());
    }
    #[test]
    fn keeps_unnormalized_weights() {
        let mixture = Mixture::new(vec![2., 3.], 100.).unwrap();
        assert_eq!(mixture.weights(), &[2., 3.]);
    }
}
