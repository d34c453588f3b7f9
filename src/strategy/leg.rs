use crate::Price;

/// one option position within a strategy: which contract, which side,
/// and the contract identity kept for equivalence checks and display.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Leg {
    pub index: usize,
    pub sign: i8,
    pub strike: Price,
    pub is_call: bool,
}
