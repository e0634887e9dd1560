//! Prepared draw tables and the booster draw.
//!
//! Drawing is two-stage: a uniform value picks a rarity through the
//! cumulative weight table, then a second uniform value picks a card
//! inside that rarity's bucket. All validation happens when the table is
//! built, so a draw either returns a full booster or nothing.

use smallvec::SmallVec;

use crate::cards::{Card, Catalog, Rarity};
use crate::core::{ConfigurationError, UniformSource};

use super::weights::RarityWeights;

/// One rarity's slice of `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Band {
    rarity: Rarity,
    /// Configured weight, kept for error reporting.
    weight: f64,
    probability: f64,
    /// Exclusive upper bound of the cumulative distribution.
    upper: f64,
}

/// Cumulative rarity distribution bound to a catalog.
///
/// Build once per catalog/weight pairing and draw as many boosters as
/// needed. Setup is O(rarities); each pick is a lookup over the handful
/// of bands plus one index into the bucket.
///
/// ## Example
///
/// ```
/// use pocket_booster::booster::{DrawTable, RarityWeights};
/// use pocket_booster::cards::{Card, CardId, Catalog, Rarity};
/// use pocket_booster::core::DrawRng;
///
/// let catalog = Catalog::new(vec![
///     Card::new(CardId::new(1), "Hatchback", Rarity::COMMON, 1),
///     Card::new(CardId::new(2), "Supercar", Rarity::LEGENDARY, 2),
/// ])
/// .unwrap();
/// let weights = RarityWeights::new()
///     .with(Rarity::COMMON, 0.95)
///     .with(Rarity::LEGENDARY, 0.05);
///
/// let table = DrawTable::new(&catalog, &weights).unwrap();
/// let booster = table.draw(5, &mut DrawRng::new(42)).unwrap();
/// assert_eq!(booster.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct DrawTable<'a> {
    catalog: &'a Catalog,
    bands: SmallVec<[Band; 5]>,
}

impl<'a> DrawTable<'a> {
    /// Validate `weights` against `catalog` and build the cumulative table.
    ///
    /// Fails if any weight is negative or non-finite, or if a rarity with
    /// positive weight has no cards. A table with no positive weight is
    /// valid but can only produce empty boosters.
    pub fn new(catalog: &'a Catalog, weights: &RarityWeights) -> Result<Self, ConfigurationError> {
        for (rarity, weight) in weights.iter() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigurationError::InvalidWeight { rarity, weight });
            }
            if weight > 0.0 && catalog.bucket_len(rarity) == 0 {
                tracing::warn!(%rarity, weight, "Weighted rarity has no cards in catalog.");
                return Err(ConfigurationError::MissingRarity { rarity, weight });
            }
        }

        let mut bands: SmallVec<[Band; 5]> = SmallVec::new();
        let mut cumulative = 0.0;
        for (rarity, probability) in weights.normalized() {
            cumulative += probability;
            bands.push(Band {
                rarity,
                weight: weights.get(rarity),
                probability,
                upper: cumulative,
            });
        }
        // Rounding can leave the last bound a hair under 1.
        if let Some(last) = bands.last_mut() {
            last.upper = 1.0;
        }

        tracing::debug!(
            bands = ?bands.iter().map(|b| (b.rarity, b.probability)).collect::<Vec<_>>(),
            "Built draw table."
        );

        Ok(Self { catalog, bands })
    }

    /// The catalog this table draws from.
    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Normalized probability of drawing `rarity`.
    #[must_use]
    pub fn probability(&self, rarity: Rarity) -> f64 {
        self.bands
            .iter()
            .find(|b| b.rarity == rarity)
            .map_or(0.0, |b| b.probability)
    }

    /// Probability of drawing one specific card in a single pick.
    #[must_use]
    pub fn card_probability(&self, card: &Card) -> f64 {
        if !self.catalog.contains(card.id) {
            return 0.0;
        }
        match self.catalog.bucket_len(card.rarity) {
            0 => 0.0,
            len => self.probability(card.rarity) / len as f64,
        }
    }

    /// Rarities that can be drawn, in rarity order.
    pub fn drawable(&self) -> impl Iterator<Item = Rarity> + '_ {
        self.bands.iter().map(|b| b.rarity)
    }

    /// Draw `count` cards independently, with replacement.
    ///
    /// `count == 0` always yields an empty booster. Otherwise at least one
    /// rarity must carry positive weight.
    pub fn draw<R>(&self, count: usize, rng: &mut R) -> Result<Vec<Card>, ConfigurationError>
    where
        R: UniformSource + ?Sized,
    {
        if count == 0 {
            return Ok(Vec::new());
        }
        if self.bands.is_empty() {
            return Err(ConfigurationError::NoDrawableRarity);
        }

        let mut booster = Vec::with_capacity(count);
        for _ in 0..count {
            booster.push(self.pick(rng)?.clone());
        }

        tracing::debug!(
            count,
            cards = ?booster.iter().map(|c| c.catalog_number).collect::<Vec<_>>(),
            "Drew booster."
        );
        Ok(booster)
    }

    /// Draw a single card.
    pub fn draw_one<R>(&self, rng: &mut R) -> Result<Card, ConfigurationError>
    where
        R: UniformSource + ?Sized,
    {
        self.pick(rng).cloned()
    }

    fn pick<R>(&self, rng: &mut R) -> Result<&'a Card, ConfigurationError>
    where
        R: UniformSource + ?Sized,
    {
        let u = rng.next_unit();
        let band = self
            .bands
            .iter()
            .find(|b| u < b.upper)
            .or_else(|| self.bands.last())
            .ok_or(ConfigurationError::NoDrawableRarity)?;

        let len = self.catalog.bucket_len(band.rarity);
        let position = ((rng.next_unit() * len as f64) as usize).min(len.saturating_sub(1));
        let card = self
            .catalog
            .bucket_card(band.rarity, position)
            .ok_or(ConfigurationError::MissingRarity {
                rarity: band.rarity,
                weight: band.weight,
            })?;

        tracing::trace!(u, rarity = %band.rarity, position, "Picked card.");
        Ok(card)
    }
}

/// Draw `count` cards from `catalog` according to `weights`.
///
/// Validates the pairing first: on error no card is drawn and the rng is
/// untouched. Neither `catalog` nor `weights` is modified.
pub fn draw<R>(
    catalog: &Catalog,
    weights: &RarityWeights,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Card>, ConfigurationError>
where
    R: UniformSource + ?Sized,
{
    DrawTable::new(catalog, weights)?.draw(count, rng)
}
