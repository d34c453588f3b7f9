use super::leg::Leg;
use crate::Greek;
use crate::INTRA_DATES;
use crate::Pnl;
use crate::Price;

/// the full evaluation of one (combination, signs) pair that survived
/// the filter gauntlet.
///
/// every scalar is the signed sum over the legs; the P&L vector is the
/// pointwise signed sum on the shared grid. score and rank are assigned
/// later, over the whole survivor pool, so they live on the ranking
/// entry rather than here.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Candidate {
    pub legs: Vec<Leg>,
    pub premium: Price,
    pub delta: Greek,
    pub gamma: Greek,
    pub vega: Greek,
    pub theta: Greek,
    pub implied_volatility: f64,
    pub average_pnl: Pnl,
    /// signed sum of per-option sigmas, consistent with the upstream
    /// moments rather than recomputed from the summed vector
    pub sigma_pnl: Pnl,
    pub roll: f64,
    pub roll_quarterly: f64,
    pub roll_sum: f64,
    /// long legs contribute their long tail penalty, short legs their
    /// short one, both under the leg sign
    pub tail_penalty: f64,
    pub delta_leverage: f64,
    pub pnl_leverage: f64,
    pub call_count: usize,
    pub put_count: usize,
    pub intra_prices: [Price; INTRA_DATES],
    pub intra_pnl: [Pnl; INTRA_DATES],
    pub avg_intra_pnl: Pnl,
    /// worst P&L observed left of the body, 0 when the wing is empty
    pub worst_left: Pnl,
    /// worst P&L observed right of the body, 0 when the wing is empty
    pub worst_right: Pnl,
    /// minimum of the P&L vector
    pub max_loss: Pnl,
    /// maximum of the P&L vector
    pub max_profit: Pnl,
    pub breakevens: Vec<Price>,
    pub pnl: Vec<Pnl>,
}
