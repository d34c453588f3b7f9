pub mod combine;
pub mod engine;
pub mod market;
pub mod ranking;
pub mod scoring;
pub mod strategy;

/// dimensional analysis types
type Price = f64;
type Greek = f64;
type Pnl = f64;
type Score = f64;

/// hard cap on legs per strategy. combinations are fixed-capacity
/// so enumeration stays copy-only in the hot loop.
pub const MAX_LEGS: usize = 8;

// evaluation parameters
const INTRA_DATES: usize = 5;
const CHUNK_SIZE: usize = 64;

// numerical guard rails
const SCORE_FLOOR: Score = 1e-6;
const LEVERAGE_FLOOR: Price = 5e-3;
const STRIKE_EPSILON: Price = 1e-6;
const MAX_LOSS_EPSILON: Pnl = 0.05;

/// trait for random generation, mainly (strictly?) for testing
pub trait Arbitrary {
    fn random() -> Self;
}

/// initialize terminal logging
pub fn init() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
