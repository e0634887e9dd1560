//! Owned-card collection.
//!
//! A multiset of cards keyed by `CardId`. Boosters only ever add to it.
//! Saving it anywhere is the host application's job.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId, Catalog, Rarity};

/// Cards owned by the player, with per-card counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collection {
    counts: FxHashMap<CardId, u32>,
    total: u64,
}

/// "Owned x/N" progress against a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionProgress {
    /// Distinct catalog cards owned at least once.
    pub owned: usize,
    /// Cards in the catalog.
    pub total: usize,
}

impl CollectionProgress {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.owned == self.total
    }
}

impl std::fmt::Display for CollectionProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owned, self.total)
    }
}

impl Collection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one copy of a card.
    pub fn add_card(&mut self, card: &Card) {
        *self.counts.entry(card.id).or_insert(0) += 1;
        self.total += 1;
        tracing::trace!(card = %card.id, count = self.counts[&card.id], "Added card to collection.");
    }

    /// Add every card of a booster.
    pub fn add_all<'c>(&mut self, cards: impl IntoIterator<Item = &'c Card>) {
        for card in cards {
            self.add_card(card);
        }
    }

    /// Copies owned of a card.
    #[must_use]
    pub fn count_of(&self, id: CardId) -> u32 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Check if at least one copy is owned.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.count_of(id) > 0
    }

    /// Distinct cards owned.
    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.counts.len()
    }

    /// All copies owned, duplicates included.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Distinct owned cards out of the catalog size.
    ///
    /// Cards not in `catalog` don't count toward progress.
    #[must_use]
    pub fn progress(&self, catalog: &Catalog) -> CollectionProgress {
        CollectionProgress {
            owned: catalog.iter().filter(|c| self.contains(c.id)).count(),
            total: catalog.len(),
        }
    }

    /// Owned catalog cards with their counts, in catalog order.
    pub fn iter_in_catalog_order<'c>(
        &'c self,
        catalog: &'c Catalog,
    ) -> impl Iterator<Item = (&'c Card, u32)> + 'c {
        catalog.iter().filter_map(move |card| match self.count_of(card.id) {
            0 => None,
            count => Some((card, count)),
        })
    }

    /// Distinct owned cards per rarity.
    #[must_use]
    pub fn count_by_rarity(&self, catalog: &Catalog) -> BTreeMap<Rarity, usize> {
        let mut by_rarity = BTreeMap::new();
        for (card, _) in self.iter_in_catalog_order(catalog) {
            *by_rarity.entry(card.rarity).or_insert(0) += 1;
        }
        by_rarity
    }
}
