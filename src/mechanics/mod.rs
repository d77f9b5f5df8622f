pub mod control;
pub mod econ;
pub mod scale;
pub mod stoch;

pub use control::*;
pub use econ::*;
