//! Rarity weight tables.
//!
//! Weights are relative: `{common: 70, rare: 25, legendary: 5}` and
//! `{common: 0.7, rare: 0.25, legendary: 0.05}` describe the same booster.
//! A rarity with weight 0, or with no entry, is never drawn.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::Rarity;

/// Mapping from rarity to a non-negative relative weight.
///
/// Iteration is always in rarity order, which is what the draw table's
/// cumulative lookup relies on.
///
/// ```
/// use pocket_booster::booster::RarityWeights;
/// use pocket_booster::cards::Rarity;
///
/// let weights = RarityWeights::new()
///     .with(Rarity::COMMON, 0.7)
///     .with(Rarity::RARE, 0.25)
///     .with(Rarity::LEGENDARY, 0.05);
///
/// assert!((weights.probability(Rarity::RARE) - 0.25).abs() < 1e-12);
/// assert_eq!(weights.probability(Rarity::EPIC), 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RarityWeights {
    weights: BTreeMap<Rarity, f64>,
}

impl RarityWeights {
    /// Create an empty weight table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a weight (builder pattern).
    #[must_use]
    pub fn with(mut self, rarity: Rarity, weight: f64) -> Self {
        self.set(rarity, weight);
        self
    }

    /// Set a weight, replacing any previous value.
    ///
    /// Values are checked when a draw table is built, not here.
    pub fn set(&mut self, rarity: Rarity, weight: f64) {
        self.weights.insert(rarity, weight);
    }

    /// Weight of a rarity, 0 if absent.
    #[must_use]
    pub fn get(&self, rarity: Rarity) -> f64 {
        self.weights.get(&rarity).copied().unwrap_or(0.0)
    }

    /// Sum of all positive weights.
    ///
    /// Can overflow to infinity for weights near `f64::MAX`; use
    /// [`normalized`](Self::normalized) for probabilities.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.weights.values().filter(|w| **w > 0.0).sum()
    }

    /// Largest positive finite weight, 0 if none.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.positive().fold(0.0, |max, (_, w)| max.max(w))
    }

    /// Normalized probabilities of the positive-weight rarities, in rarity
    /// order.
    ///
    /// Weights are scaled by the largest one before summing, so weights
    /// near `f64::MAX` normalize without overflowing. Non-finite weights
    /// are skipped.
    pub fn normalized(&self) -> impl Iterator<Item = (Rarity, f64)> + '_ {
        let max = self.max();
        let scaled_total: f64 = if max > 0.0 {
            self.positive().map(|(_, w)| w / max).sum()
        } else {
            0.0
        };
        self.positive()
            .map(move |(rarity, w)| (rarity, (w / max) / scaled_total))
    }

    /// Normalized probability of a rarity. 0 when nothing is drawable.
    #[must_use]
    pub fn probability(&self, rarity: Rarity) -> f64 {
        self.normalized()
            .find(|(r, _)| *r == rarity)
            .map_or(0.0, |(_, p)| p)
    }

    fn positive(&self) -> impl Iterator<Item = (Rarity, f64)> + '_ {
        self.iter().filter(|(_, w)| *w > 0.0 && w.is_finite())
    }

    /// Iterate over `(rarity, weight)` pairs in rarity order.
    pub fn iter(&self) -> impl Iterator<Item = (Rarity, f64)> + '_ {
        self.weights.iter().map(|(r, w)| (*r, *w))
    }

    /// Number of entries, including zero weights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when no rarity has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(Rarity, f64)> for RarityWeights {
    fn from_iter<I: IntoIterator<Item = (Rarity, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let weights = RarityWeights::new()
            .with(Rarity::COMMON, 70.0)
            .with(Rarity::RARE, 25.0)
            .with(Rarity::LEGENDARY, 5.0);

        assert_eq!(weights.total(), 100.0);
        assert!((weights.probability(Rarity::COMMON) - 0.7).abs() < 1e-12);
        assert!((weights.probability(Rarity::LEGENDARY) - 0.05).abs() < 1e-12);
        assert_eq!(weights.probability(Rarity::EPIC), 0.0);
    }

    #[test]
    fn test_zero_and_absent() {
        let weights = RarityWeights::new()
            .with(Rarity::COMMON, 1.0)
            .with(Rarity::RARE, 0.0);

        assert_eq!(weights.get(Rarity::RARE), 0.0);
        assert_eq!(weights.get(Rarity::EPIC), 0.0);
        assert_eq!(weights.probability(Rarity::COMMON), 1.0);
        assert_eq!(weights.len(), 2);
    }

    #[test]
    fn test_empty_total() {
        let weights = RarityWeights::new();
        assert!(weights.is_empty());
        assert_eq!(weights.total(), 0.0);
        assert_eq!(weights.probability(Rarity::COMMON), 0.0);
    }

    #[test]
    fn test_huge_weights_normalize() {
        let weights = RarityWeights::new()
            .with(Rarity::COMMON, 1e308)
            .with(Rarity::RARE, 1e308)
            .with(Rarity::EPIC, 0.0);

        assert_eq!(weights.max(), 1e308);
        assert_eq!(weights.probability(Rarity::COMMON), 0.5);
        assert_eq!(weights.probability(Rarity::RARE), 0.5);
        assert_eq!(weights.probability(Rarity::EPIC), 0.0);

        let sum: f64 = weights.normalized().map(|(_, p)| p).sum();
        assert_eq!(sum, 1.0);
    }

    #[test]
    fn test_iteration_in_rarity_order() {
        let weights: RarityWeights = [
            (Rarity::LEGENDARY, 1.0),
            (Rarity::COMMON, 70.0),
            (Rarity::EPIC, 4.0),
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = weights.iter().map(|(r, _)| r).collect();
        assert_eq!(order, vec![Rarity::COMMON, Rarity::EPIC, Rarity::LEGENDARY]);
    }

    #[test]
    fn test_serde() {
        let weights: RarityWeights =
            serde_json::from_str(r#"{"common": 0.7, "rare": 0.25, "legendary": 0.05}"#).unwrap();
        assert_eq!(weights.get(Rarity::RARE), 0.25);

        let json = serde_json::to_string(&weights).unwrap();
        let back: RarityWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(weights, back);
    }
}
