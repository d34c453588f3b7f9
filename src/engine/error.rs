/// everything a round can fail with. validation errors surface before
/// any parallel work starts; cancellation surfaces only after the
/// parallel region has joined. a failed round never returns partial
/// rankings.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("option cache not initialized")]
    CacheNotInitialized,
    #[error("search cancelled")]
    Cancelled,
}
