mod player;
mod team;

pub use player::*;
pub use team::*;
