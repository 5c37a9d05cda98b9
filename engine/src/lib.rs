pub mod roulette;
pub mod spin;
pub mod storage;
pub mod wheel;

pub use roulette::{Item, Roulette};
pub use spin::{SpinController, SpinPhase, SpinPlan};
