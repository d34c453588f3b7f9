use crate::Greek;
use crate::INTRA_DATES;
use crate::Pnl;
use crate::Price;

/// one quoted contract, frozen for the life of a cache.
///
/// everything the evaluator consumes is precomputed upstream: greeks and
/// premium from the pricer, the mixture-weighted P&L moments and roll
/// yields from the view module, and the terminal P&L vector sampled on
/// the shared price grid. the two tail penalties describe the long and
/// short exposure of the same contract respectively.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptionRecord {
    pub strike: Price,
    pub is_call: bool,
    pub premium: Price,
    pub delta: Greek,
    pub gamma: Greek,
    pub vega: Greek,
    pub theta: Greek,
    pub implied_volatility: f64,
    pub average_pnl: Pnl,
    pub sigma_pnl: Pnl,
    pub roll: f64,
    pub roll_quarterly: f64,
    pub roll_sum: f64,
    pub tail_penalty: f64,
    pub tail_penalty_short: f64,
    /// mark-to-market value under the view at evenly spaced dates before expiry
    pub intra_prices: [Price; INTRA_DATES],
    /// expected P&L under the view at the same dates
    pub intra_pnl: [Pnl; INTRA_DATES],
    /// terminal P&L on the shared price grid
    pub pnl: Vec<Pnl>,
}
