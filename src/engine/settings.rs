use crate::Greek;
use crate::Price;
use crate::scoring::Profile;

/// the economic constraints one round filters against. defaults are
/// fully permissive, so a request only names the bounds it cares about.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Constraints {
    /// worst loss tolerated where the grid sits left of the body
    pub max_loss_left: f64,
    /// worst loss tolerated where the grid sits right of the body
    pub max_loss_right: f64,
    /// cap on the magnitude of the net premium
    pub max_premium: Price,
    /// tolerated excess of short puts over long puts
    pub open_left: i64,
    /// tolerated excess of short calls over long calls
    pub open_right: i64,
    /// minimum credit a short leg must collect
    pub min_premium_sell: Price,
    pub delta_min: Greek,
    pub delta_max: Greek,
    /// left edge of the body zone
    pub limit_left: Price,
    /// right edge of the body zone
    pub limit_right: Price,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_loss_left: f64::INFINITY,
            max_loss_right: f64::INFINITY,
            max_premium: f64::INFINITY,
            open_left: i64::MAX,
            open_right: i64::MAX,
            min_premium_sell: f64::NEG_INFINITY,
            delta_min: f64::NEG_INFINITY,
            delta_max: f64::INFINITY,
            limit_left: f64::INFINITY,
            limit_right: f64::INFINITY,
        }
    }
}

/// one full evaluation request: how many legs to combine, how deep the
/// rankings go, what to filter on, and which weight profiles to score
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Request {
    pub max_legs: usize,
    pub top_n: usize,
    pub constraints: Constraints,
    pub profiles: Vec<Profile>,
}
