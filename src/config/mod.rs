//! Process configuration read from the environment (and `.env` when present).

pub mod loader;
pub mod types;

pub use types::*;
