pub mod manager;
pub mod match_state;

pub use manager::*;
pub use match_state::*;
