//! # trump-duel
//!
//! Turn-resolution engine for a two-player stat-battle card game.
//!
//! Each side holds an ordered deck. On every turn the side holding the turn
//! names a stat, the two front cards are compared, and the winner's deck
//! absorbs both cards. The game ends when one deck is empty.
//!
//! ## Design Principles
//!
//! 1. **Conservation**: cards are only ever moved between the two decks;
//!    their combined size never changes during a game.
//!
//! 2. **Exclusive turns**: only the side that owns the turn may resolve it.
//!
//! 3. **Injected collaborators**: storage (`GameStore`), randomness
//!    (`RandomSource`) and the automated side's choice (`AttributePolicy`) are
//!    passed in, never global.
//!
//! ## Modules
//!
//! - `core`: Sides, game state, RNG, configuration
//! - `cards`: Card records, attributes, the catalog
//! - `deck`: Ordered decks and dealing
//! - `rules`: Turn resolution and automated attribute choice
//! - `store`: Game storage abstraction
//! - `engine`: The request/response API callers use

pub mod cards;
pub mod core;
pub mod deck;
pub mod engine;
pub mod error;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EngineConfig, Game, GameId, GameRng, GameStatus, Outcome, RandomSource,
    RoundRecord, ScriptedRng, Side, SideMap,
};

pub use crate::cards::{Attribute, Card, CardId, Catalog, CatalogError};

pub use crate::deck::{DealMode, Deck};

pub use crate::engine::{CreatedGame, GameEngine, TurnReport};

pub use crate::error::{EngineError, Result};

pub use crate::rules::{AttributePolicy, FixedAttribute, UniformAttribute};

pub use crate::store::{GameStore, MemoryStore};
