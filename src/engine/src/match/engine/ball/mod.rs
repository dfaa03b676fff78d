#[allow(clippy::module_inception)]
pub mod ball;
pub mod physics;
pub mod trajectory;

pub use ball::*;
pub use physics::*;
pub use trajectory::*;
