//! Card catalog.
//!
//! The `Catalog` is the full, fixed set of cards a booster can contain.
//! It keeps cards in catalog order and partitions them into rarity
//! buckets up front so draws never scan the whole list.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::{Card, CardId};
use super::rarity::Rarity;
use crate::core::CatalogError;

/// Immutable catalog of cards, partitioned by rarity.
///
/// ## Example
///
/// ```
/// use pocket_booster::cards::{Card, CardId, Catalog, Rarity};
///
/// let catalog = Catalog::new(vec![
///     Card::new(CardId::new(1), "Hatchback", Rarity::COMMON, 1),
///     Card::new(CardId::new(2), "Supercar", Rarity::LEGENDARY, 2),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.bucket_len(Rarity::LEGENDARY), 1);
/// assert_eq!(catalog.bucket_len(Rarity::EPIC), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    cards: Vec<Card>,
    by_id: FxHashMap<CardId, usize>,
    by_number: FxHashMap<u32, usize>,
    /// Indices into `cards`, in catalog order, per rarity.
    buckets: BTreeMap<Rarity, Vec<usize>>,
}

/// JSON shape accepted by [`Catalog::from_json`].
#[derive(Deserialize)]
struct CatalogDocument {
    cards: Vec<Card>,
}

impl Catalog {
    /// Build a catalog, validating ids and catalog numbers.
    pub fn new(cards: Vec<Card>) -> Result<Self, CatalogError> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_id = FxHashMap::default();
        let mut by_number: FxHashMap<u32, usize> = FxHashMap::default();
        let mut buckets: BTreeMap<Rarity, Vec<usize>> = BTreeMap::new();

        for (index, card) in cards.iter().enumerate() {
            if card.catalog_number == 0 {
                return Err(CatalogError::ZeroCatalogNumber(card.id));
            }
            if by_id.insert(card.id, index).is_some() {
                return Err(CatalogError::DuplicateId(card.id));
            }
            if let Some(&first) = by_number.get(&card.catalog_number) {
                return Err(CatalogError::DuplicateCatalogNumber {
                    number: card.catalog_number,
                    first: cards[first].id,
                    second: card.id,
                });
            }
            by_number.insert(card.catalog_number, index);
            buckets.entry(card.rarity).or_default().push(index);
        }

        tracing::debug!(
            cards = cards.len(),
            rarities = buckets.len(),
            "Built card catalog."
        );

        Ok(Self {
            cards,
            by_id,
            by_number,
            buckets,
        })
    }

    /// Load a catalog from a JSON document of the form
    /// `{"cards": [{"id": 1, "name": "...", "rarity": "common", "catalog_number": 1}, ...]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.into()))?;
        Self::new(document.cards)
    }

    /// Number of cards in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; construction rejects empty catalogs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.by_id.get(&id).map(|&i| &self.cards[i])
    }

    /// Get a card by its 1-based catalog number.
    #[must_use]
    pub fn by_catalog_number(&self, number: u32) -> Option<&Card> {
        self.by_number.get(&number).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Iterate over all cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Rarities with at least one card, scarcest last.
    pub fn rarities(&self) -> impl Iterator<Item = Rarity> + '_ {
        self.buckets.keys().copied()
    }

    /// Cards of one rarity, in catalog order.
    pub fn bucket(&self, rarity: Rarity) -> impl Iterator<Item = &Card> {
        self.bucket_indices(rarity)
            .iter()
            .map(move |&i| &self.cards[i])
    }

    /// Number of cards of one rarity.
    #[must_use]
    pub fn bucket_len(&self, rarity: Rarity) -> usize {
        self.bucket_indices(rarity).len()
    }

    /// The `position`-th card of a rarity bucket.
    #[must_use]
    pub fn bucket_card(&self, rarity: Rarity, position: usize) -> Option<&Card> {
        self.bucket_indices(rarity)
            .get(position)
            .map(|&i| &self.cards[i])
    }

    fn bucket_indices(&self, rarity: Rarity) -> &[usize] {
        self.buckets.get(&rarity).map(Vec::as_slice).unwrap_or(&[])
    }
}
