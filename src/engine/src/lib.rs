pub mod r#match;

pub use r#match::*;
