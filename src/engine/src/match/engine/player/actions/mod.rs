pub mod action;
pub mod context;
pub mod rules;
pub mod selector;

pub use action::*;
pub use context::*;
pub use rules::*;
pub use selector::*;
