//! Rarity tiers.
//!
//! A `Rarity` is an ordered tier id: higher tiers are scarcer. The four
//! tiers every catalog uses have named constants, and catalogs with an
//! extra ultra-rare tier (or more) just use higher ids. The engine never
//! assumes a fixed number of tiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Rarity tier, ordered by increasing scarcity.
///
/// ```
/// use pocket_booster::cards::Rarity;
///
/// assert!(Rarity::COMMON < Rarity::LEGENDARY);
/// assert_eq!("epic".parse::<Rarity>().unwrap(), Rarity::EPIC);
/// assert_eq!(Rarity::new(7).to_string(), "Tier(7)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RarityRepr", into = "RarityRepr")]
pub struct Rarity(pub u8);

impl Rarity {
    pub const COMMON: Self = Self(0);
    pub const RARE: Self = Self(1);
    pub const EPIC: Self = Self(2);
    pub const LEGENDARY: Self = Self(3);
    /// Fifth tier used by the larger catalogs.
    pub const ULTRA: Self = Self(4);

    const NAMES: [&'static str; 5] = ["Common", "Rare", "Epic", "Legendary", "Ultra"];

    /// Create a rarity from its tier number.
    #[must_use]
    pub const fn new(tier: u8) -> Self {
        Self(tier)
    }

    /// Get the raw tier number.
    #[must_use]
    pub const fn tier(self) -> u8 {
        self.0
    }

    /// Display name for the named tiers.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        Self::NAMES.get(self.0 as usize).copied()
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Tier({})", self.0),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown rarity: {0:?}")]
pub struct UnknownRarity(pub String);

impl FromStr for Rarity {
    type Err = UnknownRarity;

    /// Accepts a tier name (any case) or a bare tier number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(tier) = trimmed.parse::<u8>() {
            return Ok(Self(tier));
        }
        Self::NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(trimmed))
            .map(|i| Self(i as u8))
            .ok_or_else(|| UnknownRarity(s.to_string()))
    }
}

/// Wire form: named tiers as lowercase strings, others as numbers.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RarityRepr {
    Tier(u8),
    Name(String),
}

impl TryFrom<RarityRepr> for Rarity {
    type Error = UnknownRarity;

    fn try_from(repr: RarityRepr) -> Result<Self, Self::Error> {
        match repr {
            RarityRepr::Tier(tier) => Ok(Self(tier)),
            RarityRepr::Name(name) => name.parse(),
        }
    }
}

impl From<Rarity> for RarityRepr {
    fn from(rarity: Rarity) -> Self {
        match rarity.name() {
            Some(name) => RarityRepr::Name(name.to_ascii_lowercase()),
            None => RarityRepr::Tier(rarity.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Rarity::COMMON < Rarity::RARE);
        assert!(Rarity::RARE < Rarity::EPIC);
        assert!(Rarity::EPIC < Rarity::LEGENDARY);
        assert!(Rarity::LEGENDARY < Rarity::ULTRA);
        assert!(Rarity::ULTRA < Rarity::new(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rarity::COMMON.to_string(), "Common");
        assert_eq!(Rarity::ULTRA.to_string(), "Ultra");
        assert_eq!(Rarity::new(9).to_string(), "Tier(9)");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Legendary".parse::<Rarity>(), Ok(Rarity::LEGENDARY));
        assert_eq!(" rare ".parse::<Rarity>(), Ok(Rarity::RARE));
        assert_eq!("6".parse::<Rarity>(), Ok(Rarity::new(6)));
        assert!("shiny".parse::<Rarity>().is_err());
    }

    #[test]
    fn test_serde_forms() {
        assert_eq!(serde_json::to_string(&Rarity::EPIC).unwrap(), "\"epic\"");
        assert_eq!(serde_json::to_string(&Rarity::new(8)).unwrap(), "8");

        let named: Rarity = serde_json::from_str("\"Legendary\"").unwrap();
        assert_eq!(named, Rarity::LEGENDARY);
        let numbered: Rarity = serde_json::from_str("4").unwrap();
        assert_eq!(numbered, Rarity::ULTRA);
        assert!(serde_json::from_str::<Rarity>("\"holo\"").is_err());
    }
}
