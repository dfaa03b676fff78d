pub mod ball;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod error;
pub mod field;
pub mod injury;
pub mod player;
pub mod random;
pub mod setpieces;
pub mod state;
pub mod substitutions;
pub mod team;

#[cfg(test)]
pub mod test_support;

pub use ball::*;
pub use engine::*;
pub use error::*;
pub use field::*;
pub use injury::*;
pub use player::*;
pub use random::*;
pub use setpieces::*;
pub use state::*;
pub use substitutions::*;
pub use team::*;
