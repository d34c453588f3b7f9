use crate::Pnl;
use crate::Price;
use crate::engine::Error;

/// the shared terminal price axis. every per-option P&L vector is
/// sampled on these points, so the grid is validated once and then
/// treated as immutable for the life of a cache.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PriceGrid(Vec<Price>);

impl PriceGrid {
    /// prices must be finite and strictly increasing
    pub fn new(prices: Vec<Price>) -> Result<Self, Error> {
        if prices.iter().any(|p| !p.is_finite()) {
            return Err(Error::InvalidInput("non-finite grid price".into()));
        }
        if prices.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidInput("grid prices must increase".into()));
        }
        Ok(Self(prices))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn prices(&self) -> &[Price] {
        &self.0
    }

    /// linearly interpolated zero crossings of a P&L vector sampled on
    /// this grid. exact zeros land on their grid point; sign changes land
    /// between adjacent points. presentation only.
    pub fn crossings(&self, pnl: &[Pnl]) -> Vec<Price> {
        let mut roots = Vec::new();
        let n = pnl.len().min(self.len());
        for j in 0..n {
            if pnl[j] == 0. {
                if j == 0 || pnl[j - 1] != 0. {
                    roots.push(self.0[j]);
                }
            } else if j + 1 < n && pnl[j] * pnl[j + 1] < 0. {
                let dx = self.0[j + 1] - self.0[j];
                let dy = pnl[j + 1] - pnl[j];
                roots.push(self.0[j] - pnl[j] * dx / dy);
            }
        }
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsorted() {
        assert!(PriceGrid::new(vec![90., 100., 95.]).is_err());
    }
    #[test]
    fn rejects_repeats() {
        assert!(PriceGrid::new(vec![90., 90., 95.]).is_err());
    }
    #[test]
    fn rejects_non_finite() {
        assert!(PriceGrid::new(vec![90., f64::NAN]).is_err());
    }
    #[test]
    fn crossing_on_grid_point() {
        let grid = PriceGrid::new(vec![90., 95., 100., 105., 110., 115.]).unwrap();
        let roots = grid.crossings(&[-2., -2., -2., 0., 3., 8.]);
        assert_eq!(roots, vec![105.]);
    }
    #[test]
    fn crossing_between_grid_points() {
        let grid = PriceGrid::new(vec![90., 95., 100., 105., 110., 115.]).unwrap();
        let roots = grid.crossings(&[-50., -5., 0., 3., -5., -50.]);
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0], 100.);
        assert!((roots[1] - 106.875).abs() < 1e-9);
    }
}
