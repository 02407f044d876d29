//! Dealing two disjoint decks from the catalog.
//!
//! Random draws happen in a fixed order so a scripted random source fully
//! determines the deal:
//! 1. user selection (random pack only)
//! 2. system selection
//! 3. user shuffle
//! 4. system shuffle
//! 5. first-turn coin flip

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::Deck;
use crate::cards::{Card, CardId, Catalog};
use crate::core::rng::{shuffle, RandomSource};
use crate::core::{EngineConfig, Side};
use crate::error::{EngineError, Result};

/// How the user's hand is assembled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "ids", rename_all = "kebab-case")]
pub enum DealMode {
    /// Both hands drawn at random.
    RandomPack,
    /// The user picks exactly `deck_size` distinct catalog cards.
    ChosenSet(Vec<CardId>),
}

/// Result of a deal, before it becomes a game.
#[derive(Clone, Debug)]
pub struct DealtHands {
    pub user: Deck,
    pub system: Deck,
    pub first_turn: Side,
}

/// Deal both hands.
///
/// Fails with `InvalidInput` when a chosen set is malformed or the catalog is
/// too small for two disjoint hands. Nothing random is drawn before validation.
pub fn deal(
    catalog: &Catalog,
    mode: &DealMode,
    config: &EngineConfig,
    rng: &mut dyn RandomSource,
) -> Result<DealtHands> {
    let deck_size = config.deck_size;
    if catalog.len() < config.total_cards() {
        return Err(EngineError::InvalidInput(format!(
            "catalog holds {} cards, {} needed",
            catalog.len(),
            config.total_cards()
        )));
    }

    let mut user_cards = match mode {
        DealMode::RandomPack => select_random(catalog, deck_size, &FxHashSet::default(), rng),
        DealMode::ChosenSet(ids) => resolve_chosen(catalog, ids, config)?,
    };

    let taken: FxHashSet<CardId> = user_cards.iter().map(|c| c.id).collect();
    let mut system_cards = select_random(catalog, deck_size, &taken, rng);

    shuffle(rng, &mut user_cards);
    shuffle(rng, &mut system_cards);

    let first_turn = if rng.coin_flip() { Side::User } else { Side::System };

    Ok(DealtHands {
        user: Deck::from_cards(user_cards),
        system: Deck::from_cards(system_cards),
        first_turn,
    })
}

/// Validate a chosen set and look up its cards, keeping the caller's order.
fn resolve_chosen(
    catalog: &Catalog,
    ids: &[CardId],
    config: &EngineConfig,
) -> Result<Vec<Arc<Card>>> {
    if ids.len() != config.deck_size {
        return Err(EngineError::InvalidInput(format!(
            "must provide exactly {} card ids, got {}",
            config.deck_size,
            ids.len()
        )));
    }

    let mut seen = FxHashSet::default();
    let mut cards = Vec::with_capacity(ids.len());
    for &id in ids {
        if !seen.insert(id) {
            return Err(EngineError::InvalidInput(format!("duplicate card id {}", id.raw())));
        }
        let card = catalog
            .get(id)
            .ok_or_else(|| EngineError::InvalidInput(format!("unknown card id {}", id.raw())))?;
        cards.push(Arc::clone(card));
    }

    if let Some(budget) = config.point_budget {
        let total: u32 = cards.iter().map(|c| c.points).sum();
        if total > budget {
            return Err(EngineError::InvalidInput(format!(
                "chosen set costs {} points, budget is {}",
                total, budget
            )));
        }
    }

    Ok(cards)
}

/// Draw `count` distinct cards without replacement, skipping `exclude`.
fn select_random(
    catalog: &Catalog,
    count: usize,
    exclude: &FxHashSet<CardId>,
    rng: &mut dyn RandomSource,
) -> Vec<Arc<Card>> {
    let mut available: Vec<Arc<Card>> = catalog
        .iter()
        .filter(|c| !exclude.contains(&c.id))
        .cloned()
        .collect();

    let mut selected = Vec::with_capacity(count);
    while selected.len() < count {
        let Some(idx) = rng.choose_index(available.len()) else {
            break;
        };
        selected.push(available.remove(idx));
    }
    selected
}
