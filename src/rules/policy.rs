//! Attribute choice for the automated side.
//!
//! Policies are trait-based so embedders can swap in a smarter opponent;
//! the default picks uniformly at random and never looks at the cards.

use crate::cards::Attribute;
use crate::core::{Game, RandomSource};

/// Chooses the attribute for an automated turn.
pub trait AttributePolicy: Send + Sync {
    /// Pick the attribute to fight on.
    fn choose(&self, game: &Game, rng: &mut dyn RandomSource) -> Attribute;
}

/// Uniformly random attribute, independent of card values.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformAttribute;

impl AttributePolicy for UniformAttribute {
    fn choose(&self, _game: &Game, rng: &mut dyn RandomSource) -> Attribute {
        let idx = rng.choose_index(Attribute::ALL.len()).unwrap_or(0);
        Attribute::ALL[idx]
    }
}

/// Always the same attribute.
#[derive(Clone, Copy, Debug)]
pub struct FixedAttribute(pub Attribute);

impl AttributePolicy for FixedAttribute {
    fn choose(&self, _game: &Game, _rng: &mut dyn RandomSource) -> Attribute {
        self.0
    }
}
