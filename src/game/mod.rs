//! The game loop
//!
//! Drives the guess, grade and reduce cycle for one answer at a time.

mod config;
mod record;
mod session;

pub use config::{DEFAULT_MAX_TURNS, GameConfig};
pub use record::{GameRecord, TurnRecord};
pub use session::Session;
