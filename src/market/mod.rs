mod grid;
mod mixture;
mod option;
mod universe;

pub use grid::*;
pub use mixture::*;
pub use option::*;
pub use universe::*;
