//! Game storage.
//!
//! The engine never keeps games in ambient state; it talks to a `GameStore`
//! passed in at construction. `MemoryStore` is the in-process default; a real
//! datastore can be substituted by implementing the trait.

mod memory;

pub use memory::MemoryStore;

use crate::core::{Game, GameId};
use crate::error::Result;

/// Keyed storage for games.
///
/// Implementations must be safe to share across threads. The engine serializes
/// writes per game id, so a store only needs per-call atomicity.
pub trait GameStore: Send + Sync {
    /// Fetch a copy of a game, `None` if unknown.
    fn get(&self, id: GameId) -> Result<Option<Game>>;

    /// Insert or replace a game under its own id.
    fn set(&self, game: Game) -> Result<()>;

    /// Remove a game. Returns whether it existed.
    fn delete(&self, id: GameId) -> Result<bool>;
}
