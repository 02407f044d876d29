//! The six battle stats a turn can be fought on.
//!
//! Attributes display and parse as their lowercase names
//! (`size`, `armour`, `power`, `attack`, `speed`, `age`), which is also
//! their serde representation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A comparable card stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Size,
    Armour,
    Power,
    Attack,
    Speed,
    Age,
}

impl Attribute {
    /// Every attribute, in display order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Size,
        Attribute::Armour,
        Attribute::Power,
        Attribute::Attack,
        Attribute::Speed,
        Attribute::Age,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Size => "size",
            Attribute::Armour => "armour",
            Attribute::Power => "power",
            Attribute::Attack => "attack",
            Attribute::Speed => "speed",
            Attribute::Age => "age",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a string names no attribute.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute: {0}")]
pub struct UnknownAttribute(pub String);

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Attribute::ALL
            .into_iter()
            .find(|a| a.name() == lowered)
            .ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}
