use crate::Score;
use crate::strategy::Candidate;

/// how a raw metric value maps onto desirability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// more is better
    Higher,
    /// less is better
    Lower,
    /// best near half of the pool maximum
    Moderate,
    /// negative values score zero, otherwise more is better
    Positive,
}

/// the closed set of scoring criteria. a profile references these by
/// variant, and the scorer keys its normalization table by discriminant,
/// so the hot loop never touches a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Metric {
    Premium,
    AveragePnl,
    Roll,
    PnlLeverage,
    TailPenalty,
    IntraLifePnl,
    SigmaPnl,
    RollQuarterly,
    MaxLoss,
    DeltaLeverage,
    DeltaNeutral,
    GammaLow,
    VegaLow,
    ThetaPositive,
    IvModerate,
}

impl Metric {
    pub const COUNT: usize = 15;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Premium,
        Self::AveragePnl,
        Self::Roll,
        Self::PnlLeverage,
        Self::TailPenalty,
        Self::IntraLifePnl,
        Self::SigmaPnl,
        Self::RollQuarterly,
        Self::MaxLoss,
        Self::DeltaLeverage,
        Self::DeltaNeutral,
        Self::GammaLow,
        Self::VegaLow,
        Self::ThetaPositive,
        Self::IvModerate,
    ];

    pub fn polarity(self) -> Polarity {
        match self {
            Self::Premium => Polarity::Lower,
            Self::AveragePnl => Polarity::Higher,
            Self::Roll => Polarity::Higher,
            Self::PnlLeverage => Polarity::Higher,
            Self::TailPenalty => Polarity::Lower,
            Self::IntraLifePnl => Polarity::Higher,
            Self::SigmaPnl => Polarity::Lower,
            Self::RollQuarterly => Polarity::Higher,
            Self::MaxLoss => Polarity::Lower,
            Self::DeltaLeverage => Polarity::Lower,
            Self::DeltaNeutral => Polarity::Lower,
            Self::GammaLow => Polarity::Lower,
            Self::VegaLow => Polarity::Lower,
            Self::ThetaPositive => Polarity::Positive,
            Self::IvModerate => Polarity::Moderate,
        }
    }

    /// metrics normalized against the pool maximum alone, with the
    /// lower bound pinned at zero
    pub fn zero_based(self) -> bool {
        matches!(self, Self::Premium | Self::PnlLeverage | Self::IvModerate)
    }

    /// the raw value this metric reads off a candidate.
    /// non-finite values coerce to zero.
    pub fn extract(self, candidate: &Candidate) -> Score {
        let x = match self {
            Self::Premium => candidate.premium.abs(),
            Self::AveragePnl => candidate.average_pnl,
            Self::Roll => candidate.roll,
            Self::PnlLeverage => candidate.pnl_leverage,
            Self::TailPenalty => candidate.tail_penalty.abs(),
            Self::IntraLifePnl => candidate.avg_intra_pnl,
            Self::SigmaPnl => candidate.sigma_pnl.abs(),
            Self::RollQuarterly => candidate.roll_quarterly,
            Self::MaxLoss => candidate.max_loss.abs(),
            Self::DeltaLeverage => candidate.delta_leverage.abs(),
            Self::DeltaNeutral => candidate.delta.abs(),
            Self::GammaLow => candidate.gamma.abs(),
            Self::VegaLow => candidate.vega.abs(),
            Self::ThetaPositive => candidate.theta,
            Self::IvModerate => candidate.implied_volatility,
        };
        match x.is_finite() {
            true => x,
            false => 0.,
        }
    }
}
