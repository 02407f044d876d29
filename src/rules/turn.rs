//! Turn resolution: the state machine's only transition.
//!
//! A resolution peeks both front cards, decides an `Outcome`, moves cards,
//! hands the turn over and checks for a winner. Preconditions are checked
//! before anything is touched, so a rejected call leaves the game as it was.
//!
//! ## Transfer rules
//!
//! | Outcome | Cards                                              | Next turn | Round |
//! |---------|----------------------------------------------------|-----------|-------|
//! | User    | user card, then system card, to back of user deck  | user      | +1    |
//! | System  | system card, then user card, to back of system deck| system    | +1    |
//! | Tie     | each front card to the back of its own deck        | system    | same  |

use std::cmp::Ordering;
use std::sync::Arc;

use crate::cards::{Attribute, Card};
use crate::core::{Game, GameStatus, Outcome, RoundRecord, Side};
use crate::error::{EngineError, Result};

/// Resolve a normal turn for `acting` on `attribute`.
pub fn resolve_turn(game: &mut Game, attribute: Attribute, acting: Side) -> Result<RoundRecord> {
    let (user_card, system_card) = check_preconditions(game, acting)?;
    let outcome = compare(&user_card, &system_card, attribute);
    Ok(apply(game, user_card, system_card, attribute, outcome))
}

/// Resolve a user turn that ran out of time.
///
/// The comparison is skipped and the round is scored as a system win. The
/// record still carries the real cards and `attribute` for display.
pub fn resolve_timeout(game: &mut Game, attribute: Attribute) -> Result<RoundRecord> {
    let (user_card, system_card) = check_preconditions(game, Side::User)?;
    Ok(apply(game, user_card, system_card, attribute, Outcome::System))
}

/// Check whether `acting` may resolve a turn right now.
pub fn validate_turn(game: &Game, acting: Side) -> Result<()> {
    check_preconditions(game, acting).map(|_| ())
}

/// Compare two cards on one attribute. Strictly greater wins.
#[must_use]
pub fn compare(user_card: &Card, system_card: &Card, attribute: Attribute) -> Outcome {
    match user_card.stat(attribute).cmp(&system_card.stat(attribute)) {
        Ordering::Greater => Outcome::User,
        Ordering::Less => Outcome::System,
        Ordering::Equal => Outcome::Tie,
    }
}

/// Check every precondition and return the two front cards.
///
/// Order matters: state before turn, turn before decks.
fn check_preconditions(game: &Game, acting: Side) -> Result<(Arc<Card>, Arc<Card>)> {
    if game.status != GameStatus::Playing {
        return Err(EngineError::InvalidState(game.game_id));
    }
    if acting != game.current_turn {
        return Err(EngineError::WrongTurn {
            expected: game.current_turn,
            actual: acting,
        });
    }
    match (game.user_deck.front(), game.system_deck.front()) {
        (Some(user), Some(system)) => Ok((Arc::clone(user), Arc::clone(system))),
        _ => Err(EngineError::EmptyDeck(game.game_id)),
    }
}

/// Move cards for `outcome`, record the round and run the terminal check.
fn apply(
    game: &mut Game,
    user_card: Arc<Card>,
    system_card: Arc<Card>,
    attribute: Attribute,
    outcome: Outcome,
) -> RoundRecord {
    // Preconditions guarantee both fronts exist; these are the same cards
    game.user_deck.pop_front();
    game.system_deck.pop_front();

    match outcome.winner() {
        Some(winner) => {
            let (own, captured) = match winner {
                Side::User => (&user_card, &system_card),
                Side::System => (&system_card, &user_card),
            };
            let deck = game.deck_mut(winner);
            deck.push_back(Arc::clone(own));
            deck.push_back(Arc::clone(captured));
            game.current_turn = winner;
            game.round_number += 1;
        }
        None => {
            game.user_deck.push_back(Arc::clone(&user_card));
            game.system_deck.push_back(Arc::clone(&system_card));
            game.current_turn = Side::System;
        }
    }

    let record = RoundRecord {
        user_card,
        system_card,
        attribute,
        outcome,
    };
    game.last_round = Some(record.clone());

    if game.user_deck.is_empty() {
        game.status = GameStatus::Finished;
        game.winner = Some(Side::System);
    } else if game.system_deck.is_empty() {
        game.status = GameStatus::Finished;
        game.winner = Some(Side::User);
    }

    record
}
