use super::grid::PriceGrid;
use super::mixture::Mixture;
use super::option::OptionRecord;
use crate::engine::Error;

/// the option cache for one evaluation round: the universe of single
/// contracts, the price axis they share, and the probability view over
/// that axis. built once, read-only afterwards, replaced wholesale by
/// the next round.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Universe {
    options: Vec<OptionRecord>,
    grid: PriceGrid,
    mixture: Mixture,
}

impl Universe {
    /// every per-option P&L vector and the mixture must agree with the
    /// grid on length. ragged input never becomes a cache.
    pub fn new(options: Vec<OptionRecord>, grid: PriceGrid, mixture: Mixture) -> Result<Self, Error> {
        if mixture.len() != grid.len() {
            return Err(Error::InvalidInput(format!(
                "mixture length {} does not match grid length {}",
                mixture.len(),
                grid.len()
            )));
        }
        if let Some(i) = options.iter().position(|o| o.pnl.len() != grid.len()) {
            return Err(Error::InvalidInput(format!(
                "option {} P&L length {} does not match grid length {}",
                i,
                options[i].pnl.len(),
                grid.len()
            )));
        }
        Ok(Self {
            options,
            grid,
            mixture,
        })
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
    pub fn options(&self) -> &[OptionRecord] {
        &self.options
    }
    pub fn grid(&self) -> &PriceGrid {
        &self.grid
    }
    pub fn mixture(&self) -> &Mixture {
        &self.mixture
    }

    /// a random but structurally coherent universe: strikes drawn inside
    /// the grid, terminal P&L equal to intrinsic value net of premium,
    /// average P&L consistent with the uniform view.
    pub fn sample(n: usize, m: usize) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let lo = 50.;
        let hi = 150.;
        let step = (hi - lo) / (m.max(2) - 1) as f64;
        let prices = (0..m).map(|j| lo + step * j as f64).collect::<Vec<_>>();
        let options = (0..n)
            .map(|_| {
                let is_call = rng.random_bool(0.5);
                let strike = rng.random_range(60.0..140.0);
                let premium = rng.random_range(0.5..12.0);
                let pnl = prices
                    .iter()
                    .map(|s| match is_call {
                        true => (s - strike).max(0.) - premium,
                        false => (strike - s).max(0.) - premium,
                    })
                    .collect::<Vec<_>>();
                let average_pnl = pnl.iter().sum::<f64>() / m.max(1) as f64;
                OptionRecord {
                    strike,
                    is_call,
                    premium,
                    delta: match is_call {
                        true => rng.random_range(0.0..1.0),
                        false => rng.random_range(-1.0..0.0),
                    },
                    gamma: rng.random_range(0.0..0.1),
                    vega: rng.random_range(0.0..0.5),
                    theta: rng.random_range(-0.5..0.0),
                    implied_volatility: rng.random_range(0.1..0.6),
                    average_pnl,
                    sigma_pnl: rng.random_range(0.5..5.0),
                    roll: rng.random_range(-0.1..0.3),
                    roll_quarterly: rng.random_range(-0.1..0.3),
                    roll_sum: rng.random_range(-0.2..0.6),
                    tail_penalty: rng.random_range(0.0..1.0),
                    tail_penalty_short: rng.random_range(0.0..2.0),
                    intra_prices: std::array::from_fn(|_| rng.random_range(0.0..12.0)),
                    intra_pnl: std::array::from_fn(|_| rng.random_range(-2.0..2.0)),
                    pnl,
                }
            })
            .collect();
        let grid = PriceGrid::new(prices).expect("evenly spaced grid");
        let mixture = Mixture::uniform(m, (lo + hi) / 2.);
        Self::new(options, grid, mixture).expect("coherent sample")
    }
}

impl crate::Arbitrary for Universe {
    fn random() -> Self {
        Self::sample(40, 121)
    }
}
