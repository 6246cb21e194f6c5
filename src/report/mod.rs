//! Report building and rendering

mod builder;
mod render;

pub use builder::*;
pub use render::*;
