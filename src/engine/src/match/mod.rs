pub mod definitions;
pub mod engine;
pub mod runner;

pub use definitions::*;
pub use engine::*;
pub use runner::*;
