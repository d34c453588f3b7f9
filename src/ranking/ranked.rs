use super::dedupe::dedupe;
use super::topk::Entry;
use super::topk::TopK;
use crate::Score;
use crate::strategy::Candidate;

/// one row of a ranking: the candidate, where it placed, and the score
/// that put it there
#[derive(Debug, Clone, serde::Serialize)]
pub struct Ranked {
    pub rank: usize,
    pub score: Score,
    pub strategy: Candidate,
}

/// an ordered result list for one profile, or for the consensus
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Ranking {
    pub entries: Vec<Ranked>,
    pub duplicates: usize,
}

impl Ranking {
    /// select the best cap candidates by score, drop payoff
    /// duplicates, and assign contiguous 1-based ranks
    pub fn assemble(pool: &[Candidate], scores: &[Score], cap: usize) -> Self {
        let mut topk = TopK::new(cap);
        for (index, score) in scores.iter().enumerate() {
            topk.push(Entry {
                score: *score,
                index,
            });
        }
        let (kept, duplicates) = dedupe(pool, topk.descending(), cap);
        Self {
            entries: kept
                .into_iter()
                .enumerate()
                .map(|(i, entry)| Ranked {
                    rank: i + 1,
                    score: entry.score,
                    strategy: pool[entry.index].clone(),
                })
                .collect(),
            duplicates,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Leg;

    fn pool(n: usize) -> Vec<Candidate> {
        (0..n)
            .map(|i| Candidate {
                legs: vec![Leg {
                    index: i,
                    sign: 1,
                    strike: 90. + i as f64,
                    is_call: true,
                }],
                max_loss: -(i as f64),
                ..Candidate::default()
            })
            .collect()
    }

    #[test]
    fn ranks_are_contiguous_and_scores_non_increasing() {
        let pool = pool(6);
        let scores = vec![0.3, 0.9, 0.1, 0.7, 0.5, 0.8];
        let ranking = Ranking::assemble(&pool, &scores, 4);
        assert_eq!(
            ranking.entries.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert!(ranking
            .entries
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
        assert_eq!(ranking.entries[0].strategy.legs[0].index, 1);
    }
    #[test]
    fn capacity_bounds_the_list() {
        let pool = pool(10);
        let scores = (0..10).map(|i| i as f64 / 10.).collect::<Vec<_>>();
        assert_eq!(Ranking::assemble(&pool, &scores, 3).len(), 3);
    }
    #[test]
    fn duplicates_are_dropped_and_counted() {
        let mut pool = pool(3);
        pool[1].legs[0].is_call = false;
        pool[1].legs[0].strike = 90.;
        pool[1].max_loss = 0.;
        pool[0].legs[0].strike = 90.;
        pool[0].max_loss = 0.;
        // 0 and 1 differ by a single put/call switch at the same strike:
        // odd parity keeps them distinct, so force a second switch
        pool[1].legs.push(Leg {
            index: 9,
            sign: 1,
            strike: 95.,
            is_call: false,
        });
        pool[0].legs.push(Leg {
            index: 9,
            sign: 1,
            strike: 95.,
            is_call: true,
        });
        let scores = vec![0.9, 0.8, 0.7];
        let ranking = Ranking::assemble(&pool, &scores, 3);
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking.duplicates, 1);
        assert_eq!(ranking.entries[0].strategy.legs[0].index, 0);
    }
}
