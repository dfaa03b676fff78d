pub mod actions;
pub mod intent;
pub mod movement;
pub mod offside;
#[allow(clippy::module_inception)]
pub mod player;
pub mod position;
pub mod tackling;

pub use actions::*;
pub use intent::*;
pub use movement::*;
pub use offside::*;
pub use player::*;
pub use position::*;
pub use tackling::*;

use crate::r#match::engine::team::TeamSide;

/// Stable address of a roster slot inside a match.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    pub side: TeamSide,
    pub index: usize,
}

impl PlayerRef {
    pub fn new(side: TeamSide, index: usize) -> Self {
        PlayerRef { side, index }
    }
}
