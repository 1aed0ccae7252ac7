pub mod comb;
pub mod pascal;

pub use comb::{comb, comb_u64, CombError};
pub use pascal::Pascal;
