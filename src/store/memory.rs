//! In-memory game store.

use std::sync::RwLock;

use rustc_hash::FxHashMap;

use super::GameStore;
use crate::core::{Game, GameId};
use crate::error::{EngineError, Result};

/// Process-local store backed by a hash map.
///
/// Games live until deleted; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: RwLock<FxHashMap<GameId, Game>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Check if the store holds no games.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Ids of all stored games, in no particular order.
    pub fn ids(&self) -> Result<Vec<GameId>> {
        Ok(self.read()?.keys().copied().collect())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, FxHashMap<GameId, Game>>> {
        self.games
            .read()
            .map_err(|_| EngineError::Store("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, FxHashMap<GameId, Game>>> {
        self.games
            .write()
            .map_err(|_| EngineError::Store("memory store lock poisoned".to_string()))
    }
}

impl GameStore for MemoryStore {
    fn get(&self, id: GameId) -> Result<Option<Game>> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn set(&self, game: Game) -> Result<()> {
        self.write()?.insert(game.game_id, game);
        Ok(())
    }

    fn delete(&self, id: GameId) -> Result<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }
}
