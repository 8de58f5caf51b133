pub mod config;
pub mod engine;
pub mod error;
pub mod logger;
pub mod rng;

pub use error::{GameError, IllegalMoveReason};
pub use rng::SessionRng;
