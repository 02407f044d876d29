//! The game engine: the request/response surface callers use.
//!
//! ## Operations
//!
//! - `create_game`: deal a new game and store it
//! - `get_game`: read a copy of a game
//! - `resolve_user_turn`: the human picked an attribute
//! - `resolve_system_turn`: the automated side picks and plays
//! - `resolve_timeout`: the human ran out of time
//! - `delete_game`: drop a game from the store
//!
//! ## Concurrency
//!
//! Every mutation of one game runs under that game's own mutex, so two
//! resolutions for the same id never interleave. Different games only share
//! the lock table and the random source, each held for a handful of
//! instructions.

use std::sync::{Arc, Mutex, MutexGuard};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Attribute, Card, Catalog};
use crate::core::{EngineConfig, Game, GameId, GameRng, Outcome, RandomSource, RoundRecord, Side};
use crate::deck::{deal, DealMode};
use crate::error::{EngineError, Result};
use crate::rules::{self, AttributePolicy, UniformAttribute};
use crate::store::{GameStore, MemoryStore};

/// A freshly created game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGame {
    pub game_id: GameId,
    pub game_state: Game,
}

/// Result of a resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnReport {
    #[serde(rename = "selectedStat")]
    pub attribute: Attribute,
    pub user_card: Arc<Card>,
    pub system_card: Arc<Card>,
    #[serde(rename = "winner")]
    pub outcome: Outcome,
    /// Game state after the round.
    pub game_state: Game,
}

impl TurnReport {
    fn new(record: RoundRecord, game_state: Game) -> Self {
        Self {
            attribute: record.attribute,
            user_card: record.user_card,
            system_card: record.system_card,
            outcome: record.outcome,
            game_state,
        }
    }
}

/// Owns every game and resolves turns.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use trump_duel::{Catalog, DealMode, EngineConfig, GameEngine, MemoryStore, Side};
///
/// let catalog = Arc::new(Catalog::builtin().unwrap());
/// let engine = GameEngine::new(catalog, MemoryStore::new(), EngineConfig::default().with_seed(7));
///
/// let created = engine.create_game(DealMode::RandomPack).unwrap();
/// let game = engine.get_game(created.game_id).unwrap();
/// assert_eq!(game.total_cards(), 20);
///
/// if game.current_turn == Side::System {
///     let report = engine.resolve_system_turn(created.game_id).unwrap();
///     assert_eq!(report.game_state.total_cards(), 20);
/// }
/// ```
pub struct GameEngine<S: GameStore = MemoryStore> {
    catalog: Arc<Catalog>,
    store: S,
    config: EngineConfig,
    rng: Mutex<Box<dyn RandomSource>>,
    policy: Box<dyn AttributePolicy>,
    locks: Mutex<FxHashMap<GameId, Arc<Mutex<()>>>>,
}

impl<S: GameStore> GameEngine<S> {
    /// Create an engine.
    ///
    /// The random source is seeded from `config.seed`, or from OS entropy when
    /// no seed is set. The automated side picks uniformly at random.
    pub fn new(catalog: Arc<Catalog>, store: S, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            catalog,
            store,
            config,
            rng: Mutex::new(Box::new(rng)),
            policy: Box::new(UniformAttribute),
            locks: Mutex::new(FxHashMap::default()),
        }
    }

    /// Replace the random source.
    #[must_use]
    pub fn with_rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Mutex::new(Box::new(rng));
        self
    }

    /// Replace the automated side's attribute policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl AttributePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Card catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Deal and store a new game.
    pub fn create_game(&self, mode: DealMode) -> Result<CreatedGame> {
        let hands = {
            let mut rng = self.lock_rng()?;
            deal(&self.catalog, &mode, &self.config, &mut **rng)
        }
        .inspect_err(|err| tracing::warn!(error = %err, "Rejected game creation"))?;

        let game = Game::new(GameId::new_v4(), hands);
        self.store.set(game.clone())?;

        tracing::info!(
            game_id = %game.game_id,
            first_turn = %game.current_turn,
            chosen = matches!(mode, DealMode::ChosenSet(_)),
            "Game created"
        );

        Ok(CreatedGame {
            game_id: game.game_id,
            game_state: game,
        })
    }

    /// Read a copy of a game.
    pub fn get_game(&self, id: GameId) -> Result<Game> {
        self.store.get(id)?.ok_or(EngineError::NotFound(id))
    }

    /// Resolve the user's turn on the attribute they picked.
    pub fn resolve_user_turn(&self, id: GameId, attribute: Attribute) -> Result<TurnReport> {
        self.mutate(id, |game| rules::resolve_turn(game, attribute, Side::User))
    }

    /// Let the automated side pick an attribute and resolve its turn.
    pub fn resolve_system_turn(&self, id: GameId) -> Result<TurnReport> {
        self.mutate(id, |game| {
            rules::validate_turn(game, Side::System)?;
            let attribute = {
                let mut rng = self.lock_rng()?;
                self.policy.choose(game, &mut **rng)
            };
            rules::resolve_turn(game, attribute, Side::System)
        })
    }

    /// Resolve a user turn that ran out of time as a forced system win.
    ///
    /// The configured `timeout_attribute` is recorded as the attribute played.
    pub fn resolve_timeout(&self, id: GameId) -> Result<TurnReport> {
        let attribute = self.config.timeout_attribute;
        self.mutate(id, |game| rules::resolve_timeout(game, attribute))
    }

    /// Remove a game.
    pub fn delete_game(&self, id: GameId) -> Result<()> {
        let lock = self.game_lock(id)?;
        let _guard = lock
            .lock()
            .map_err(|_| EngineError::Store(format!("lock for game {} poisoned", id)))?;

        let existed = self.store.delete(id)?;
        self.lock_table()?.remove(&id);
        // Lost a race with another delete
        if !existed {
            return Err(EngineError::NotFound(id));
        }
        tracing::info!(game_id = %id, "Game deleted");
        Ok(())
    }

    /// Load, mutate and persist one game under its lock.
    ///
    /// The closure works on a private copy; the store is only written when it
    /// succeeds, so failures leave the stored game untouched.
    fn mutate<F>(&self, id: GameId, resolve: F) -> Result<TurnReport>
    where
        F: FnOnce(&mut Game) -> Result<RoundRecord>,
    {
        let lock = self.game_lock(id)?;
        let _guard = lock
            .lock()
            .map_err(|_| EngineError::Store(format!("lock for game {} poisoned", id)))?;

        let mut game = self.get_game(id)?;
        let record = resolve(&mut game).inspect_err(|err| {
            tracing::warn!(game_id = %id, error = %err, "Rejected turn");
        })?;
        self.store.set(game.clone())?;

        tracing::debug!(
            game_id = %id,
            attribute = %record.attribute,
            user_card = record.user_card.id.raw(),
            system_card = record.system_card.id.raw(),
            outcome = %record.outcome,
            user_deck = game.user_deck.len(),
            system_deck = game.system_deck.len(),
            round = game.round_number,
            "Round resolved"
        );
        if let Some(winner) = game.winner {
            tracing::info!(game_id = %id, %winner, rounds = game.round_number, "Game finished");
        }

        Ok(TurnReport::new(record, game))
    }

    /// Per-game mutex, created on first use.
    ///
    /// Unknown ids get `NotFound` and no entry, so the table only ever holds
    /// games that exist (or were deleted while a caller still held the lock).
    fn game_lock(&self, id: GameId) -> Result<Arc<Mutex<()>>> {
        let mut table = self.lock_table()?;
        if let Some(lock) = table.get(&id) {
            return Ok(Arc::clone(lock));
        }
        if self.store.get(id)?.is_none() {
            return Err(EngineError::NotFound(id));
        }
        Ok(Arc::clone(table.entry(id).or_default()))
    }

    fn lock_table(&self) -> Result<MutexGuard<'_, FxHashMap<GameId, Arc<Mutex<()>>>>> {
        self.locks
            .lock()
            .map_err(|_| EngineError::Store("game lock table poisoned".to_string()))
    }

    fn lock_rng(&self) -> Result<MutexGuard<'_, Box<dyn RandomSource>>> {
        self.rng
            .lock()
            .map_err(|_| EngineError::Store("random source lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::{GameStatus, ScriptedRng};
    use crate::rules::FixedAttribute;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_cards(
                (1..=20)
                    .map(|i| Card::new(CardId::new(i), format!("Dino {}", i)).with_stats([i; 6]))
                    .collect(),
            )
            .unwrap(),
        )
    }

    fn engine(first_turn_user: bool) -> GameEngine {
        // Random pack: 20 selections + 18 shuffle draws, then the coin
        let mut script = vec![usize::MAX; 38];
        script.push(if first_turn_user { 0 } else { 1 });
        GameEngine::new(catalog(), MemoryStore::new(), EngineConfig::default())
            .with_rng(ScriptedRng::new(script))
    }

    #[test]
    fn test_create_and_get() {
        let engine = engine(true);
        let created = engine.create_game(DealMode::RandomPack).unwrap();

        let game = engine.get_game(created.game_id).unwrap();
        assert_eq!(game, created.game_state);
        assert_eq!(game.current_turn, Side::User);
        // Last-candidate selection: user takes 20..=11, system takes 10..=1
        assert_eq!(game.user_deck.front().unwrap().id, CardId::new(20));
        assert_eq!(game.system_deck.front().unwrap().id, CardId::new(10));
    }

    #[test]
    fn test_get_unknown() {
        let engine = engine(true);
        let id = GameId::new_v4();
        assert_eq!(engine.get_game(id), Err(EngineError::NotFound(id)));
    }

    #[test]
    fn test_user_turn_persists() {
        let engine = engine(true);
        let id = engine.create_game(DealMode::RandomPack).unwrap().game_id;

        let report = engine.resolve_user_turn(id, Attribute::Age).unwrap();

        assert_eq!(report.outcome, Outcome::User);
        assert_eq!(report.attribute, Attribute::Age);
        assert_eq!(engine.get_game(id).unwrap(), report.game_state);
        assert_eq!(report.game_state.round_number, 2);
    }

    #[test]
    fn test_system_turn_uses_policy() {
        let engine = engine(false).with_policy(FixedAttribute(Attribute::Speed));
        let id = engine.create_game(DealMode::RandomPack).unwrap().game_id;

        let report = engine.resolve_system_turn(id).unwrap();

        assert_eq!(report.attribute, Attribute::Speed);
        // User holds the higher cards
        assert_eq!(report.outcome, Outcome::User);
        assert_eq!(report.game_state.current_turn, Side::User);
    }

    #[test]
    fn test_system_turn_rejected_on_user_turn() {
        let engine = engine(true);
        let id = engine.create_game(DealMode::RandomPack).unwrap().game_id;
        let before = engine.get_game(id).unwrap();

        let err = engine.resolve_system_turn(id).unwrap_err();

        assert!(matches!(
            err,
            EngineError::WrongTurn {
                expected: Side::User,
                actual: Side::System
            }
        ));
        assert_eq!(engine.get_game(id).unwrap(), before);
    }

    #[test]
    fn test_timeout() {
        let engine = engine(true);
        let id = engine.create_game(DealMode::RandomPack).unwrap().game_id;

        let report = engine.resolve_timeout(id).unwrap();

        assert_eq!(report.outcome, Outcome::System);
        assert_eq!(report.attribute, Attribute::Size);
        assert_eq!(report.game_state.current_turn, Side::System);
        assert_eq!(report.game_state.system_deck.len(), 11);
    }

    #[test]
    fn test_delete() {
        let engine = engine(true);
        let id = engine.create_game(DealMode::RandomPack).unwrap().game_id;

        engine.delete_game(id).unwrap();

        assert_eq!(engine.get_game(id), Err(EngineError::NotFound(id)));
        assert_eq!(engine.delete_game(id), Err(EngineError::NotFound(id)));
        assert_eq!(
            engine.resolve_user_turn(id, Attribute::Age),
            Err(EngineError::NotFound(id))
        );
        assert!(engine.locks.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_ids_leave_no_locks() {
        let engine = engine(true);
        let live = engine.create_game(DealMode::RandomPack).unwrap().game_id;
        engine.resolve_user_turn(live, Attribute::Age).unwrap();

        for _ in 0..1000 {
            let id = GameId::new_v4();
            let not_found = Err(EngineError::NotFound(id));
            assert_eq!(engine.resolve_user_turn(id, Attribute::Size), not_found);
            assert_eq!(engine.resolve_system_turn(id), not_found);
            assert_eq!(engine.resolve_timeout(id), not_found);
            assert_eq!(engine.delete_game(id), Err(EngineError::NotFound(id)));
        }

        let table = engine.locks.lock().unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains_key(&live));
    }

    #[test]
    fn test_invalid_create_stores_nothing() {
        let engine = engine(true);
        let err = engine
            .create_game(DealMode::ChosenSet(vec![CardId::new(1); 10]))
            .unwrap_err();

        assert!(matches!(err, EngineError::InvalidInput(_)));
        assert!(engine.store().is_empty().unwrap());
    }

    #[test]
    fn test_finished_game_is_frozen() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let config = EngineConfig::default().with_seed(11);
        let engine = GameEngine::new(catalog, MemoryStore::new(), config);
        let id = engine.create_game(DealMode::RandomPack).unwrap().game_id;

        let mut picker = GameRng::new(5);
        let mut game = engine.get_game(id).unwrap();
        let mut rounds = 0;
        while game.status == GameStatus::Playing && rounds < 100_000 {
            let report = match game.current_turn {
                Side::User => {
                    let attribute = UniformAttribute.choose(&game, &mut picker);
                    engine.resolve_user_turn(id, attribute).unwrap()
                }
                Side::System => engine.resolve_system_turn(id).unwrap(),
            };
            game = report.game_state;
            rounds += 1;
        }

        assert!(game.is_finished());
        assert_eq!(
            engine.resolve_user_turn(id, Attribute::Power),
            Err(EngineError::InvalidState(id))
        );
        assert_eq!(engine.resolve_system_turn(id), Err(EngineError::InvalidState(id)));
        assert_eq!(engine.resolve_timeout(id), Err(EngineError::InvalidState(id)));
    }
}
