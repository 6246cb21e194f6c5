//! Single-trial simulation: slot weighting, weighted selection and the trial runner

mod outcome;
mod runner;
pub mod selector;
mod weight;


pub use outcome::*;
pub use runner::*;
pub use selector::*;
pub use weight::*;
