pub mod corner;
pub mod dispatcher;
pub mod freekick;
pub mod goal;
pub mod goal_kick;
pub mod penalty;
pub mod throw_in;

pub use corner::*;
pub use dispatcher::*;
pub use freekick::*;
pub use goal::*;
pub use goal_kick::*;
pub use penalty::*;
pub use throw_in::*;
