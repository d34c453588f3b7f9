use spreadscan::Arbitrary;
use spreadscan::combine::Combo;
use spreadscan::combine::Combos;
use spreadscan::combine::Signs;
use spreadscan::engine::Constraints;
use spreadscan::engine::Engine;
use spreadscan::engine::Request;
use spreadscan::market::Universe;
use spreadscan::scoring::Metric;
use spreadscan::scoring::Profile;
use spreadscan::strategy::Evaluator;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        exhausting_four_leg_combinations,
        evaluating_a_four_leg_task,
        searching_a_two_leg_round,
}

fn exhausting_four_leg_combinations(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all 4-leg combinations of 40 options", |b| {
        b.iter(|| Combos::new(40, 4).count())
    });
}

fn evaluating_a_four_leg_task(c: &mut criterion::Criterion) {
    let universe = Universe::random();
    let constraints = Constraints::default();
    let combo = Combo::from(&[0, 7, 13, 21][..]);
    let signs = Signs::all(4).last().unwrap();
    c.bench_function("evaluate a 4-leg task", |b| {
        let mut evaluator = Evaluator::new(&universe, &constraints);
        b.iter(|| evaluator.evaluate(combo, signs))
    });
}

fn searching_a_two_leg_round(c: &mut criterion::Criterion) {
    let mut engine = Engine::new();
    engine.load(Universe::random());
    let request = Request {
        max_legs: 2,
        top_n: 10,
        constraints: Constraints {
            max_premium: 10.,
            ..Constraints::default()
        },
        profiles: vec![Profile::from(vec![
            (Metric::AveragePnl, 1.),
            (Metric::Premium, 1.),
        ])],
    };
    c.bench_function("search a 40-option universe up to 2 legs", |b| {
        b.iter(|| engine.search(&request).unwrap())
    });
}
