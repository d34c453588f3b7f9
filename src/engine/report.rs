use crate::ranking::Ranking;

/// everything a round returns: one ranking per profile in request
/// order, the consensus ranking, and the size of the survivor pool the
/// scores were normalized over.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Report {
    pub per_profile: Vec<Ranking>,
    pub consensus: Ranking,
    pub n_profiles: usize,
    pub n_candidates: usize,
}
