use super::bounds::Bounds;
use super::metric::Metric;
use super::profile::Profile;
use crate::SCORE_FLOOR;
use crate::Score;
use crate::strategy::Candidate;

/// scores the survivor pool against every profile of a round.
///
/// calibration scans the pool once per referenced metric and freezes
/// the ranges in a table keyed by metric discriminant; every profile
/// then reads the same table, so two profiles weighting the same metric
/// see identical normalization.
pub struct Scorer {
    bounds: [Option<Bounds>; Metric::COUNT],
}

impl Scorer {
    pub fn calibrate(pool: &[Candidate], profiles: &[Profile]) -> Self {
        let mut referenced = [false; Metric::COUNT];
        for profile in profiles {
            for metric in profile.metrics() {
                referenced[metric as usize] = true;
            }
        }
        let mut bounds = [None; Metric::COUNT];
        for metric in Metric::ALL {
            if referenced[metric as usize] {
                bounds[metric as usize] =
                    Some(Bounds::over(pool.iter().map(|c| metric.extract(c)), metric));
            }
        }
        Self { bounds }
    }

    /// normalized [0, 1] score of one metric for one candidate
    pub fn unit(&self, metric: Metric, candidate: &Candidate) -> Score {
        self.bounds[metric as usize]
            .map(|bounds| bounds.unit(metric.extract(candidate), metric.polarity()))
            .unwrap_or(0.)
    }

    /// weighted geometric mean of the unit scores with a positive
    /// floor, so a candidate near zero on any weighted metric is pulled
    /// down hard rather than averaged away.
    pub fn score(&self, profile: &Profile, candidate: &Candidate) -> Score {
        let mut weighted = 0.;
        let mut total = 0.;
        for (metric, weight) in profile.weights.iter() {
            weighted += weight * (SCORE_FLOOR + self.unit(*metric, candidate)).ln();
            total += weight;
        }
        (weighted / total).exp().min(1.)
    }

    /// one score per pool candidate, in pool order
    pub fn scores(&self, profile: &Profile, pool: &[Candidate]) -> Vec<Score> {
        use rayon::iter::IntoParallelRefIterator;
        use rayon::iter::ParallelIterator;
        pool.par_iter().map(|c| self.score(profile, c)).collect()
    }
}

/// the consensus favors candidates that score decently across many
/// profiles over narrow single-profile winners: an unweighted sum of
/// already-comparable per-profile scores.
pub fn consensus(per_profile: &[Vec<Score>]) -> Vec<Score> {
    let pool = per_profile.first().map(Vec::len).unwrap_or(0);
    (0..pool)
        .map(|i| per_profile.iter().map(|scores| scores[i]).sum())
        .collect()
}
