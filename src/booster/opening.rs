//! Booster opening sessions.
//!
//! A booster is drawn in full up front, then revealed one card at a time.
//! Each reveal adds the card to the collection and notifies the effects
//! sink. Pacing (taps, animations) stays with the caller.

use crate::cards::Card;
use crate::collection::Collection;
use crate::core::{ConfigurationError, UniformSource};
use crate::effects::EffectsSink;

use super::table::DrawTable;

/// Step-by-step reveal over one drawn booster.
///
/// ## Example
///
/// ```
/// use pocket_booster::booster::{BoosterOpening, DrawTable, RarityWeights};
/// use pocket_booster::cards::{Card, CardId, Catalog, Rarity};
/// use pocket_booster::collection::Collection;
/// use pocket_booster::core::DrawRng;
/// use pocket_booster::effects::RecordingSink;
///
/// let catalog = Catalog::new(vec![Card::new(CardId::new(1), "Sedan", Rarity::COMMON, 1)]).unwrap();
/// let weights = RarityWeights::new().with(Rarity::COMMON, 1.0);
/// let table = DrawTable::new(&catalog, &weights).unwrap();
///
/// let mut opening = BoosterOpening::draw(&table, 5, &mut DrawRng::new(1)).unwrap();
/// let mut collection = Collection::new();
/// let mut sink = RecordingSink::new();
///
/// while opening.reveal_next(&mut collection, &mut sink).is_some() {}
///
/// assert!(opening.is_finished());
/// assert_eq!(collection.count_of(CardId::new(1)), 5);
/// assert_eq!(sink.events.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoosterOpening {
    cards: Vec<Card>,
    next: usize,
}

impl BoosterOpening {
    /// Start a session over already-drawn cards.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, next: 0 }
    }

    /// Draw a booster of `size` cards and start revealing it.
    pub fn draw<R>(table: &DrawTable<'_>, size: usize, rng: &mut R) -> Result<Self, ConfigurationError>
    where
        R: UniformSource + ?Sized,
    {
        table.draw(size, rng).map(Self::new)
    }

    /// The card that the next reveal will show.
    #[must_use]
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.next)
    }

    /// Reveal the next card.
    ///
    /// Adds it to `collection` and notifies `sink`. Returns `None` once
    /// every card has been revealed; later calls change nothing.
    pub fn reveal_next<S>(&mut self, collection: &mut Collection, sink: &mut S) -> Option<&Card>
    where
        S: EffectsSink + ?Sized,
    {
        let card = self.cards.get(self.next)?;
        collection.add_card(card);
        sink.notify(card.rarity);
        self.next += 1;

        tracing::debug!(
            card = %card.id,
            rarity = %card.rarity,
            position = self.next,
            of = self.cards.len(),
            "Revealed booster card."
        );
        Some(card)
    }

    /// Reveal everything still hidden. Returns the newly revealed cards.
    pub fn reveal_all<S>(&mut self, collection: &mut Collection, sink: &mut S) -> &[Card]
    where
        S: EffectsSink + ?Sized,
    {
        let start = self.next;
        while self.reveal_next(collection, sink).is_some() {}
        &self.cards[start..]
    }

    /// Cards revealed so far.
    #[must_use]
    pub fn revealed(&self) -> &[Card] {
        &self.cards[..self.next]
    }

    /// Cards still hidden.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next >= self.cards.len()
    }

    /// The whole booster, revealed or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
