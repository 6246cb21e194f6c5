//! Simulation module: outcome aggregation and the prediction engine

mod aggregator;
mod engine;
#[cfg(feature = "python")]
mod session;


pub use aggregator::*;
pub use engine::*;
#[cfg(feature = "python")]
pub use session::*;
