//! Decks and dealing.
//!
//! A `Deck` is an ordered pile: index 0 is the front (next card to play) and
//! the last index is the back (most recently returned or captured card).
//!
//! Backed by `im::Vector`, so cloning a deck for a state view is O(1).

mod dealer;

pub use dealer::{deal, DealMode, DealtHands};

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Ordered pile of card references.
///
/// ```
/// use std::sync::Arc;
/// use trump_duel::cards::{Card, CardId};
/// use trump_duel::deck::Deck;
///
/// let mut deck = Deck::from_cards(vec![
///     Arc::new(Card::new(CardId::new(1), "A")),
///     Arc::new(Card::new(CardId::new(2), "B")),
/// ]);
///
/// let front = deck.pop_front().unwrap();
/// deck.push_back(front);
/// assert_eq!(deck.ids(), vec![CardId::new(2), CardId::new(1)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Arc<Card>>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck with the given cards, first element at the front.
    pub fn from_cards(cards: impl IntoIterator<Item = Arc<Card>>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Next card to be played.
    #[must_use]
    pub fn front(&self) -> Option<&Arc<Card>> {
        self.cards.front()
    }

    /// Most recently returned card.
    #[must_use]
    pub fn back(&self) -> Option<&Arc<Card>> {
        self.cards.back()
    }

    /// Remove and return the front card.
    pub fn pop_front(&mut self) -> Option<Arc<Card>> {
        self.cards.pop_front()
    }

    /// Append a card at the back.
    pub fn push_back(&mut self, card: Arc<Card>) {
        self.cards.push_back(card);
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter()
    }

    /// Card ids front to back.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32) -> Arc<Card> {
        Arc::new(Card::new(CardId::new(id), format!("Card {}", id)))
    }

    #[test]
    fn test_front_and_back() {
        let deck = Deck::from_cards(vec![card(1), card(2), card(3)]);

        assert_eq!(deck.front().unwrap().id, CardId::new(1));
        assert_eq!(deck.back().unwrap().id, CardId::new(3));
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_pop_front_push_back() {
        let mut deck = Deck::from_cards(vec![card(1), card(2)]);

        let first = deck.pop_front().unwrap();
        assert_eq!(deck.ids(), vec![CardId::new(2)]);

        deck.push_back(first);
        deck.push_back(card(7));
        assert_eq!(deck.ids(), vec![CardId::new(2), CardId::new(1), CardId::new(7)]);
    }

    #[test]
    fn test_empty() {
        let mut deck = Deck::new();
        assert!(deck.is_empty());
        assert!(deck.front().is_none());
        assert!(deck.pop_front().is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut deck = Deck::from_cards(vec![card(1), card(2)]);
        let snapshot = deck.clone();

        deck.pop_front();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(deck.len(), 1);
    }
}
