//! Core engine types: sides, game state, RNG, configuration.

pub mod config;
pub mod rng;
pub mod side;
pub mod state;

pub use config::{ConfigError, EngineConfig};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use side::{Side, SideMap};
pub use state::{Game, GameId, GameStatus, Outcome, RoundRecord};
