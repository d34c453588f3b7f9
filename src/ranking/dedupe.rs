use super::topk::Entry;
use crate::MAX_LOSS_EPSILON;
use crate::STRIKE_EPSILON;
use crate::strategy::Candidate;
use crate::strategy::Leg;

/// two candidates are payoff-equivalent when their sorted
/// (strike, sign) footprints match, the number of put/call
/// substitutions between them is even (such substitutions pair off at
/// the same strike and sign), and their worst losses agree closely
/// enough to confirm the symbolic parity did not hide a materially
/// different payoff.
pub fn equivalent(a: &Candidate, b: &Candidate) -> bool {
    if a.legs.len() != b.legs.len() {
        return false;
    }
    let mut xs = a.legs.clone();
    let mut ys = b.legs.clone();
    xs.sort_by(footprint);
    ys.sort_by(footprint);
    if xs
        .iter()
        .zip(ys.iter())
        .any(|(p, q)| (p.strike - q.strike).abs() > STRIKE_EPSILON || p.sign != q.sign)
    {
        return false;
    }
    let switches = xs
        .iter()
        .zip(ys.iter())
        .filter(|(p, q)| p.is_call != q.is_call)
        .count();
    if switches % 2 == 1 {
        return false;
    }
    (a.max_loss - b.max_loss).abs() <= MAX_LOSS_EPSILON
}

fn footprint(a: &Leg, b: &Leg) -> std::cmp::Ordering {
    a.strike
        .total_cmp(&b.strike)
        .then_with(|| a.sign.cmp(&b.sign))
}

/// walk a ranking in score order, keeping the first representative of
/// each equivalence class, until cap uniques are kept. returns the
/// keepers in their original order and the number of duplicates
/// dropped along the way.
pub fn dedupe(pool: &[Candidate], entries: Vec<Entry>, cap: usize) -> (Vec<Entry>, usize) {
    let mut kept: Vec<Entry> = Vec::with_capacity(cap.min(entries.len()));
    let mut dropped = 0;
    for entry in entries {
        if kept.len() == cap {
            break;
        }
        match kept
            .iter()
            .any(|k| equivalent(&pool[k.index], &pool[entry.index]))
        {
            true => dropped += 1,
            false => kept.push(entry),
        }
    }
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(strike: f64, sign: i8, is_call: bool) -> Leg {
        Leg {
            index: 0,
            sign,
            strike,
            is_call,
        }
    }

    fn spread(legs: Vec<Leg>, max_loss: f64) -> Candidate {
        Candidate {
            legs,
            max_loss,
            ..Candidate::default()
        }
    }

    fn call_spread() -> Candidate {
        spread(vec![leg(100., 1, true), leg(105., -1, true)], -2.)
    }
    fn put_spread() -> Candidate {
        spread(vec![leg(100., 1, false), leg(105., -1, false)], -2.)
    }

    #[test]
    fn call_put_switch_in_pairs_is_equivalent() {
        assert!(equivalent(&call_spread(), &put_spread()));
    }
    #[test]
    fn single_switch_is_not() {
        let mixed = spread(vec![leg(100., 1, false), leg(105., -1, true)], -2.);
        assert!(!equivalent(&call_spread(), &mixed));
    }
    #[test]
    fn diverging_max_loss_is_not() {
        let other = spread(vec![leg(100., 1, false), leg(105., -1, false)], -2.1);
        assert!(!equivalent(&call_spread(), &other));
    }
    #[test]
    fn opposite_signs_are_not() {
        let flipped = spread(vec![leg(100., -1, true), leg(105., 1, true)], -2.);
        assert!(!equivalent(&call_spread(), &flipped));
    }
    #[test]
    fn leg_order_does_not_matter() {
        let reversed = spread(vec![leg(105., -1, true), leg(100., 1, true)], -2.);
        assert!(equivalent(&call_spread(), &reversed));
    }
    #[test]
    fn walk_keeps_the_first_representative() {
        let pool = vec![
            call_spread(),
            put_spread(),
            spread(vec![leg(95., 1, true)], -1.),
        ];
        let entries = (0..3)
            .map(|index| Entry {
                score: 1. - index as f64 / 10.,
                index,
            })
            .collect();
        let (kept, dropped) = dedupe(&pool, entries, 3);
        assert_eq!(kept.iter().map(|e| e.index).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(dropped, 1);
    }
    #[test]
    fn walk_stops_at_capacity() {
        let pool = vec![
            spread(vec![leg(90., 1, true)], -1.),
            spread(vec![leg(95., 1, true)], -2.),
            spread(vec![leg(100., 1, true)], -3.),
        ];
        let entries = (0..3).map(|index| Entry { score: 0.5, index }).collect();
        let (kept, dropped) = dedupe(&pool, entries, 2);
        assert_eq!(kept.len(), 2);
        assert_eq!(dropped, 0);
    }
}
