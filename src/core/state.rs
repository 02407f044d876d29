//! Game state: the aggregate root the engine mutates.
//!
//! ## Game
//!
//! - Both decks (front = next to play)
//! - Turn owner, round counter, status, winner
//! - Last-round record for display and replay
//!
//! Serializes to the JSON shape clients already consume
//! (`gameId`, `userDeck`, `systemDeck`, `currentTurn`, `roundNumber`, ...).

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::side::Side;
use crate::cards::{Attribute, Card};
use crate::deck::{Deck, DealtHands};

/// Opaque game identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub Uuid);

impl GameId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Whether a game is still accepting turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Finished,
}

/// Result of one comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    User,
    System,
    Tie,
}

impl Outcome {
    /// The winning side, `None` for a tie.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::User => Some(Side::User),
            Outcome::System => Some(Side::System),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Outcome::User => "user",
            Outcome::System => "system",
            Outcome::Tie => "tie",
        })
    }
}

/// Snapshot of the most recently resolved comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    /// User's front card as it stood before the round.
    pub user_card: Arc<Card>,
    /// System's front card as it stood before the round.
    pub system_card: Arc<Card>,
    #[serde(rename = "selectedStat")]
    pub attribute: Attribute,
    #[serde(rename = "winner")]
    pub outcome: Outcome,
}

/// Complete state of one game.
///
/// Callers only ever see clones; the engine's copy is the source of truth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_id: GameId,

    pub user_deck: Deck,

    pub system_deck: Deck,

    /// Side allowed to resolve the next turn.
    pub current_turn: Side,

    /// Starts at 1; ties do not advance it.
    pub round_number: u32,

    pub status: GameStatus,

    /// Set only once `status` is `Finished`.
    pub winner: Option<Side>,

    /// Absent until the first round resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_round: Option<RoundRecord>,
}

impl Game {
    /// Start a game from freshly dealt hands.
    #[must_use]
    pub fn new(game_id: GameId, hands: DealtHands) -> Self {
        Self {
            game_id,
            user_deck: hands.user,
            system_deck: hands.system,
            current_turn: hands.first_turn,
            round_number: 1,
            status: GameStatus::Playing,
            winner: None,
            last_round: None,
        }
    }

    /// A side's deck.
    #[must_use]
    pub fn deck(&self, side: Side) -> &Deck {
        match side {
            Side::User => &self.user_deck,
            Side::System => &self.system_deck,
        }
    }

    /// A side's deck, mutably.
    pub fn deck_mut(&mut self, side: Side) -> &mut Deck {
        match side {
            Side::User => &mut self.user_deck,
            Side::System => &mut self.system_deck,
        }
    }

    /// Cards across both decks. Constant for the life of a game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.user_deck.len() + self.system_deck.len()
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn hands(first_turn: Side) -> DealtHands {
        let card = |id: u32| Arc::new(Card::new(CardId::new(id), format!("Dino {}", id)));
        DealtHands {
            user: Deck::from_cards((1..=3).map(card)),
            system: Deck::from_cards((4..=6).map(card)),
            first_turn,
        }
    }

    #[test]
    fn test_new_game_defaults() {
        let game = Game::new(GameId::new_v4(), hands(Side::System));

        assert_eq!(game.round_number, 1);
        assert_eq!(game.status, GameStatus::Playing);
        assert_eq!(game.current_turn, Side::System);
        assert_eq!(game.winner, None);
        assert!(game.last_round.is_none());
        assert_eq!(game.total_cards(), 6);
    }

    #[test]
    fn test_deck_accessors() {
        let mut game = Game::new(GameId::new_v4(), hands(Side::User));

        assert_eq!(game.deck(Side::System).front().unwrap().id, CardId::new(4));
        game.deck_mut(Side::User).pop_front();

        assert_eq!(game.user_deck.len(), 2);
        assert_eq!(game.deck(Side::System).len(), 3);
    }

    #[test]
    fn test_game_id_parse_roundtrip() {
        let id = GameId::new_v4();
        let parsed: GameId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-game".parse::<GameId>().is_err());
    }

    #[test]
    fn test_json_shape() {
        let game = Game::new(GameId::new_v4(), hands(Side::User));
        let value = serde_json::to_value(&game).unwrap();

        assert_eq!(value["currentTurn"], "user");
        assert_eq!(value["roundNumber"], 1);
        assert_eq!(value["status"], "playing");
        assert!(value["winner"].is_null());
        assert!(value.get("lastRound").is_none());
        assert_eq!(value["userDeck"].as_array().unwrap().len(), 3);
        assert_eq!(value["systemDeck"][0]["id"], 4);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::User.winner(), Some(Side::User));
        assert_eq!(Outcome::Tie.winner(), None);
    }
}
