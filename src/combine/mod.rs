mod combo;
mod signs;

pub use combo::*;
pub use signs::*;
