//! Card catalog for definition lookup.
//!
//! The `Catalog` is the fixed, ordered list of every card available for
//! dealing. It is loaded once (from JSON or code) and shared read-only by the
//! engine. Order matters: random selection draws from the catalog in load order.

use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::definition::{Card, CardId};

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Two cards share an id.
    #[error("Duplicate card id: {0}")]
    DuplicateId(CardId),
    /// No cards at all.
    #[error("Catalog is empty")]
    Empty,
}

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Ordered, immutable set of cards.
///
/// ## Example
///
/// ```
/// use trump_duel::cards::{Card, CardId, Catalog};
///
/// let catalog = Catalog::from_cards(vec![
///     Card::new(CardId::new(1), "Raptor"),
///     Card::new(CardId::new(2), "Triceratops"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(CardId::new(2)).unwrap().name, "Triceratops");
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    cards: Vec<Arc<Card>>,
    index: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Build a catalog from cards in the given order.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogError> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        for (pos, card) in cards.iter().enumerate() {
            if index.insert(card.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(card.id));
            }
        }

        Ok(Self {
            cards: cards.into_iter().map(Arc::new).collect(),
            index,
        })
    }

    /// Parse a JSON array of card records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    /// Load a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The catalog bundled with the crate (30 dinosaurs).
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<Card>> {
        self.index.get(&id).map(|&pos| &self.cards[pos])
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    /// Iterate over cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter()
    }
}
