//! Card definitions - immutable catalog entries.
//!
//! A `Card` is what a booster hands out. Owned counts live in the
//! `Collection`, never on the card itself.

use serde::{Deserialize, Serialize};

use super::rarity::Rarity;

/// Unique identifier for a card.
///
/// Opaque to the engine; only compared for equality and used as a map key.
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

/// A collectible card.
///
/// ## Example
///
/// ```
/// use pocket_booster::cards::{Card, CardId, Rarity};
///
/// let card = Card::new(CardId::new(1), "car3_legendary", Rarity::LEGENDARY, 3);
/// assert_eq!(card.label(150), "car3_legendary (3/150)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name; also the artwork key for the presentation layer.
    pub name: String,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Stable 1-based position in the catalog, shown as "x/N".
    pub catalog_number: u32,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, rarity: Rarity, catalog_number: u32) -> Self {
        Self {
            id,
            name: name.into(),
            rarity,
            catalog_number,
        }
    }

    /// Display label with the catalog position, e.g. `"Mustang (12/150)"`.
    #[must_use]
    pub fn label(&self, catalog_size: usize) -> String {
        format!("{} ({}/{})", self.name, self.catalog_number, catalog_size)
    }
}
