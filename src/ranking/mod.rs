mod dedupe;
mod ranked;
mod topk;

pub use dedupe::*;
pub use ranked::*;
pub use topk::*;
