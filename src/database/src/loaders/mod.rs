mod names;
mod pitch;
mod team;

pub use names::*;
pub use pitch::*;
pub use team::*;
