//! Card definitions - static card data.
//!
//! A `Card` is one catalog entry: a named creature with six battle stats and a
//! point cost. Cards are shared by reference (`Arc<Card>`) between the catalog
//! and every deck that holds them; nothing mutates them after loading.

use serde::{Deserialize, Serialize};

use super::attributes::Attribute;

/// Unique identifier for a catalog card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A catalog card.
///
/// ## Example
///
/// ```
/// use trump_duel::cards::{Attribute, Card, CardId};
///
/// let rex = Card::new(CardId::new(1), "Tyrannosaurus")
///     .with_stat(Attribute::Power, 9)
///     .with_points(18);
///
/// assert_eq!(rex.stat(Attribute::Power), 9);
/// assert_eq!(rex.stat(Attribute::Speed), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub size: u32,
    pub armour: u32,
    pub power: u32,
    pub attack: u32,
    pub speed: u32,
    pub age: u32,
    /// Deck-building cost. Never consulted during battle.
    pub points: u32,
}

impl Card {
    /// Create a card with every stat at zero.
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            size: 0,
            armour: 0,
            power: 0,
            attack: 0,
            speed: 0,
            age: 0,
            points: 0,
        }
    }

    /// Set one stat (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, attribute: Attribute, value: u32) -> Self {
        *self.stat_mut(attribute) = value;
        self
    }

    /// Set all six stats in `Attribute::ALL` order (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, stats: [u32; 6]) -> Self {
        for (attribute, value) in Attribute::ALL.into_iter().zip(stats) {
            *self.stat_mut(attribute) = value;
        }
        self
    }

    /// Set the point cost (builder pattern).
    #[must_use]
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    /// Value of a battle stat.
    #[must_use]
    pub fn stat(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Size => self.size,
            Attribute::Armour => self.armour,
            Attribute::Power => self.power,
            Attribute::Attack => self.attack,
            Attribute::Speed => self.speed,
            Attribute::Age => self.age,
        }
    }

    fn stat_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Size => &mut self.size,
            Attribute::Armour => &mut self.armour,
            Attribute::Power => &mut self.power,
            Attribute::Attack => &mut self.attack,
            Attribute::Speed => &mut self.speed,
            Attribute::Age => &mut self.age,
        }
    }
}
