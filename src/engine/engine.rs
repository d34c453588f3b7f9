use super::error::Error;
use super::report::Report;
use super::settings::Request;
use crate::CHUNK_SIZE;
use crate::MAX_LEGS;
use crate::combine::Combos;
use crate::combine::Signs;
use crate::market::Universe;
use crate::ranking::Ranking;
use crate::scoring;
use crate::scoring::Scorer;
use crate::strategy::Candidate;
use crate::strategy::Evaluator;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// drives a round end to end: enumerate every (combination, signs)
/// task per leg count, evaluate them across a worker pool, then score,
/// select, and dedupe the survivor pool.
///
/// the cache is written by load() before any worker starts and read
/// only afterwards. workers buffer accepted candidates locally and
/// merge under a mutex once per chunk. the stop flag may be set from
/// any thread at any time; workers observe it at task granularity and
/// bail out, and the round surfaces Cancelled only after the parallel
/// region has joined.
pub struct Engine {
    universe: Option<Universe>,
    stop: AtomicBool,
    workers: rayon::ThreadPool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            universe: None,
            stop: AtomicBool::new(false),
            workers: rayon::ThreadPoolBuilder::new()
                .num_threads(num_cpus::get())
                .build()
                .expect("build worker pool"),
        }
    }

    /// replace the option cache wholesale for subsequent rounds
    pub fn load(&mut self, universe: Universe) {
        log::info!(
            "caching {} options on a {} point grid",
            universe.len(),
            universe.grid().len()
        );
        self.universe = Some(universe);
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
    pub fn reset_stop(&self) {
        self.stop.store(false, Ordering::Relaxed);
    }
    pub fn is_stop_requested(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// run one full round. either every ranking comes back or none
    /// does.
    pub fn search(&self, request: &Request) -> Result<Report, Error> {
        let universe = self.universe.as_ref().ok_or(Error::CacheNotInitialized)?;
        Self::validate(request)?;
        if universe.is_empty() || request.max_legs == 0 {
            return Ok(Report {
                per_profile: vec![Ranking::default(); request.profiles.len()],
                consensus: Ranking::default(),
                n_profiles: request.profiles.len(),
                n_candidates: 0,
            });
        }
        if request.max_legs > universe.len() {
            return Err(Error::InvalidInput(format!(
                "max legs {} exceeds universe size {}",
                request.max_legs,
                universe.len()
            )));
        }
        log::info!(
            "searching {} options up to {} legs against {} profiles",
            universe.len(),
            request.max_legs,
            request.profiles.len()
        );
        let mut pool = self.enumerate(universe, request)?;
        pool.sort_by(Self::canonical);
        log::info!("{} candidates survive the filters", pool.len());
        let scorer = Scorer::calibrate(&pool, &request.profiles);
        let per_profile_scores = self.workers.install(|| {
            request
                .profiles
                .iter()
                .map(|profile| scorer.scores(profile, &pool))
                .collect::<Vec<_>>()
        });
        let consensus_scores = scoring::consensus(&per_profile_scores);
        let per_profile = per_profile_scores
            .iter()
            .map(|scores| Ranking::assemble(&pool, scores, request.top_n))
            .collect::<Vec<_>>();
        let consensus = Ranking::assemble(&pool, &consensus_scores, request.top_n);
        log::debug!(
            "dropped {} duplicates across {} rankings",
            per_profile.iter().map(|r| r.duplicates).sum::<usize>() + consensus.duplicates,
            per_profile.len() + 1
        );
        Ok(Report {
            per_profile,
            consensus,
            n_profiles: request.profiles.len(),
            n_candidates: pool.len(),
        })
    }

    fn validate(request: &Request) -> Result<(), Error> {
        if request.top_n == 0 {
            return Err(Error::InvalidInput("top_n must be positive".into()));
        }
        if request.max_legs > MAX_LEGS {
            return Err(Error::InvalidInput(format!(
                "max legs {} exceeds the engine cap {}",
                request.max_legs, MAX_LEGS
            )));
        }
        if request.profiles.is_empty() {
            return Err(Error::InvalidInput("no scoring profiles".into()));
        }
        request.profiles.iter().try_for_each(|p| p.validate())
    }

    /// evaluate every task of every leg count across the worker pool.
    /// chunks buffer their accepted candidates locally and merge under
    /// the mutex once, so contention stays at chunk granularity.
    fn enumerate(&self, universe: &Universe, request: &Request) -> Result<Vec<Candidate>, Error> {
        use rayon::iter::ParallelIterator;
        use rayon::slice::ParallelSlice;
        let merged = Mutex::new(Vec::new());
        for k in 1..=request.max_legs {
            if self.is_stop_requested() {
                return Err(Error::Cancelled);
            }
            let combos = Combos::new(universe.len(), k).collect::<Vec<_>>();
            log::debug!(
                "{} combinations of {} legs, {} tasks",
                combos.len(),
                k,
                combos.len() << k
            );
            self.workers.install(|| {
                combos.par_chunks(CHUNK_SIZE).for_each(|chunk| {
                    if self.is_stop_requested() {
                        return;
                    }
                    let mut evaluator = Evaluator::new(universe, &request.constraints);
                    let mut accepted = Vec::new();
                    for combo in chunk {
                        if self.is_stop_requested() {
                            return;
                        }
                        for signs in Signs::all(combo.size()) {
                            if let Some(candidate) = evaluator.evaluate(*combo, signs) {
                                accepted.push(candidate);
                            }
                        }
                    }
                    if !accepted.is_empty() {
                        merged.lock().unwrap().append(&mut accepted);
                    }
                });
            });
        }
        match self.is_stop_requested() {
            true => Err(Error::Cancelled),
            false => Ok(merged.into_inner().unwrap()),
        }
    }

    /// lexicographic (leg count, indices, signs). the merge order is
    /// thread-schedule dependent, so the pool is re-sorted onto this
    /// key to make index tie-breaking deterministic.
    fn canonical(a: &Candidate, b: &Candidate) -> std::cmp::Ordering {
        a.legs
            .len()
            .cmp(&b.legs.len())
            .then_with(|| a.legs.iter().map(|l| l.index).cmp(b.legs.iter().map(|l| l.index)))
            .then_with(|| a.legs.iter().map(|l| l.sign).cmp(b.legs.iter().map(|l| l.sign)))
    }
}
