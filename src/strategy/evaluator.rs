use super::candidate::Candidate;
use super::leg::Leg;
use crate::INTRA_DATES;
use crate::LEVERAGE_FLOOR;
use crate::Pnl;
use crate::STRIKE_EPSILON;
use crate::combine::Combo;
use crate::combine::Signs;
use crate::engine::Constraints;
use crate::market::Universe;

/// evaluates (combination, signs) tasks against the cache and the
/// constraint set. owns a scratch P&L buffer of grid length that is
/// reused across tasks, so the hot loop allocates only when a candidate
/// is actually accepted. one evaluator per worker.
pub struct Evaluator<'a> {
    universe: &'a Universe,
    constraints: &'a Constraints,
    scratch: Vec<Pnl>,
}

impl<'a> Evaluator<'a> {
    pub fn new(universe: &'a Universe, constraints: &'a Constraints) -> Self {
        Self {
            universe,
            constraints,
            scratch: vec![0.; universe.grid().len()],
        }
    }

    /// run one task through aggregation and the filter gauntlet,
    /// cheapest checks first. the first violated constraint discards
    /// the task.
    pub fn evaluate(&mut self, combo: Combo, signs: Signs) -> Option<Candidate> {
        let options = self.universe.options();
        let constraints = self.constraints;

        // a short leg must collect at least the minimum credit
        for i in 0..combo.size() {
            if !signs.is_long(i) && options[combo.get(i)].premium < constraints.min_premium_sell {
                return None;
            }
        }
        // opposite signs on the same (strike, type) cancel out
        for i in 0..combo.size() {
            for j in i + 1..combo.size() {
                let a = &options[combo.get(i)];
                let b = &options[combo.get(j)];
                if signs.sign(i) != signs.sign(j)
                    && a.is_call == b.is_call
                    && (a.strike - b.strike).abs() <= STRIKE_EPSILON
                {
                    return None;
                }
            }
        }
        // wing openness: excess of shorts over longs per option type
        let mut long_puts = 0i64;
        let mut short_puts = 0i64;
        let mut long_calls = 0i64;
        let mut short_calls = 0i64;
        for i in 0..combo.size() {
            match (options[combo.get(i)].is_call, signs.is_long(i)) {
                (false, true) => long_puts += 1,
                (false, false) => short_puts += 1,
                (true, true) => long_calls += 1,
                (true, false) => short_calls += 1,
            }
        }
        if short_puts - long_puts > constraints.open_left {
            return None;
        }
        if short_calls - long_calls > constraints.open_right {
            return None;
        }

        // signed linear aggregates
        let mut premium = 0.;
        let mut delta = 0.;
        let mut gamma = 0.;
        let mut vega = 0.;
        let mut theta = 0.;
        let mut implied_volatility = 0.;
        let mut average_pnl = 0.;
        let mut sigma_pnl = 0.;
        let mut roll = 0.;
        let mut roll_quarterly = 0.;
        let mut roll_sum = 0.;
        let mut tail_penalty = 0.;
        let mut intra_prices = [0.; INTRA_DATES];
        let mut intra_pnl = [0.; INTRA_DATES];
        for i in 0..combo.size() {
            let option = &options[combo.get(i)];
            let sign = signs.sign(i) as f64;
            premium += sign * option.premium;
            delta += sign * option.delta;
            gamma += sign * option.gamma;
            vega += sign * option.vega;
            theta += sign * option.theta;
            implied_volatility += sign * option.implied_volatility;
            average_pnl += sign * option.average_pnl;
            sigma_pnl += sign * option.sigma_pnl;
            roll += sign * option.roll;
            roll_quarterly += sign * option.roll_quarterly;
            roll_sum += sign * option.roll_sum;
            tail_penalty += sign
                * match signs.is_long(i) {
                    true => option.tail_penalty,
                    false => option.tail_penalty_short,
                };
            for t in 0..INTRA_DATES {
                intra_prices[t] += sign * option.intra_prices[t];
                intra_pnl[t] += sign * option.intra_pnl[t];
            }
        }

        if premium.abs() > constraints.max_premium {
            return None;
        }
        if delta < constraints.delta_min || delta > constraints.delta_max {
            return None;
        }
        if average_pnl < 0. {
            return None;
        }

        // summed terminal P&L into the reusable scratch buffer
        self.scratch.fill(0.);
        for i in 0..combo.size() {
            let sign = signs.sign(i) as f64;
            for (acc, x) in self.scratch.iter_mut().zip(options[combo.get(i)].pnl.iter()) {
                *acc += sign * x;
            }
        }
        // zonal loss scan: each wing against its own bound, the body
        // against the premium at risk
        let body_floor = -premium.abs();
        let mut worst_left = f64::INFINITY;
        let mut worst_right = f64::INFINITY;
        for (price, pnl) in self.universe.grid().prices().iter().zip(self.scratch.iter()) {
            if *price < constraints.limit_left {
                if *pnl < -constraints.max_loss_left {
                    return None;
                }
                worst_left = worst_left.min(*pnl);
            } else if *price > constraints.limit_right {
                if *pnl < -constraints.max_loss_right {
                    return None;
                }
                worst_right = worst_right.min(*pnl);
            } else if *pnl < body_floor {
                return None;
            }
        }

        // accepted: materialize the candidate
        let levered = premium.abs().max(LEVERAGE_FLOOR);
        let max_loss = self.scratch.iter().copied().fold(f64::INFINITY, f64::min);
        let max_profit = self.scratch.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Candidate {
            legs: (0..combo.size())
                .map(|i| Leg {
                    index: combo.get(i),
                    sign: signs.sign(i),
                    strike: options[combo.get(i)].strike,
                    is_call: options[combo.get(i)].is_call,
                })
                .collect(),
            premium,
            delta,
            gamma,
            vega,
            theta,
            implied_volatility,
            average_pnl,
            sigma_pnl,
            roll,
            roll_quarterly,
            roll_sum,
            tail_penalty,
            delta_leverage: delta / levered,
            pnl_leverage: average_pnl / levered,
            call_count: (long_calls + short_calls) as usize,
            put_count: (long_puts + short_puts) as usize,
            intra_prices,
            intra_pnl,
            avg_intra_pnl: intra_pnl.iter().sum::<Pnl>() / INTRA_DATES as f64,
            worst_left: match worst_left.is_finite() {
                true => worst_left,
                false => 0.,
            },
            worst_right: match worst_right.is_finite() {
                true => worst_right,
                false => 0.,
            },
            max_loss: match max_loss.is_finite() {
                true => max_loss,
                false => 0.,
            },
            max_profit: match max_profit.is_finite() {
                true => max_profit,
                false => 0.,
            },
            breakevens: self.universe.grid().crossings(&self.scratch),
            pnl: self.scratch.clone(),
        })
    }
}
