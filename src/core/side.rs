//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two seats at the table: the human `User` and the automated `System`.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for per-side tallies.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human player.
    User,
    /// The automated player.
    System,
}

impl Side {
    /// Both sides, user first.
    pub const ALL: [Side; 2] = [Side::User, Side::System];

    /// Slot index (user = 0, system = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::User => 0,
            Side::System => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::User => Side::System,
            Side::System => Side::User,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Side::User => "user",
            Side::System => "system",
        })
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use trump_duel::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::with_value(0);
/// wins[Side::System] += 1;
///
/// assert_eq!(wins[Side::User], 0);
/// assert_eq!(wins[Side::System], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
