//! Booster configuration.
//!
//! Catalog variants differ in booster size and probability table, so both
//! are configuration. Nothing here ships a default distribution: a config
//! with no weights can only open empty boosters.

use serde::{Deserialize, Serialize};

use crate::booster::{BoosterOpening, DrawTable, RarityWeights};
use crate::cards::{Card, Catalog, Rarity};

use super::error::ConfigurationError;
use super::rng::UniformSource;

/// Cards per booster when a config doesn't say otherwise.
pub const DEFAULT_BOOSTER_SIZE: usize = 5;

/// How boosters are opened.
///
/// ```
/// use pocket_booster::core::BoosterConfig;
/// use pocket_booster::cards::Rarity;
///
/// let config = BoosterConfig::from_json(
///     r#"{"booster_size": 5, "weights": {"common": 0.7, "rare": 0.25, "legendary": 0.05}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.booster_size, 5);
/// assert_eq!(config.weights.get(Rarity::LEGENDARY), 0.05);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoosterConfig {
    /// Cards per booster.
    pub booster_size: usize,

    /// Relative weight per rarity.
    pub weights: RarityWeights,
}

impl Default for BoosterConfig {
    fn default() -> Self {
        Self {
            booster_size: DEFAULT_BOOSTER_SIZE,
            weights: RarityWeights::default(),
        }
    }
}

impl BoosterConfig {
    /// Create a config with the given weights and the default size.
    #[must_use]
    pub fn new(weights: RarityWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::Parse(e.into()))
    }

    /// Set the booster size.
    #[must_use]
    pub fn with_booster_size(mut self, size: usize) -> Self {
        self.booster_size = size;
        self
    }

    /// Set one rarity's weight.
    #[must_use]
    pub fn with_weight(mut self, rarity: Rarity, weight: f64) -> Self {
        self.weights.set(rarity, weight);
        self
    }

    /// Validate against a catalog and build its draw table.
    pub fn table<'a>(&self, catalog: &'a Catalog) -> Result<DrawTable<'a>, ConfigurationError> {
        DrawTable::new(catalog, &self.weights)
    }

    /// Draw one booster.
    pub fn open<R>(&self, catalog: &Catalog, rng: &mut R) -> Result<Vec<Card>, ConfigurationError>
    where
        R: UniformSource + ?Sized,
    {
        self.table(catalog)?.draw(self.booster_size, rng)
    }

    /// Draw one booster and start a reveal session over it.
    pub fn start_opening<R>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<BoosterOpening, ConfigurationError>
    where
        R: UniformSource + ?Sized,
    {
        BoosterOpening::draw(&self.table(catalog)?, self.booster_size, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::DrawRng;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Card::new(CardId::new(1), "car1_common", Rarity::COMMON, 1),
            Card::new(CardId::new(2), "car2_rare", Rarity::RARE, 2),
            Card::new(CardId::new(3), "car3_legendary", Rarity::LEGENDARY, 3),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = BoosterConfig::default();
        assert_eq!(config.booster_size, 5);
        assert!(config.weights.is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BoosterConfig::default()
            .with_booster_size(10)
            .with_weight(Rarity::COMMON, 0.7)
            .with_weight(Rarity::RARE, 0.3);

        assert_eq!(config.booster_size, 10);
        assert_eq!(config.weights.get(Rarity::RARE), 0.3);
        assert_eq!(config.weights.len(), 2);
    }

    #[test]
    fn test_from_json_defaults_and_errors() {
        let config = BoosterConfig::from_json(r#"{"weights": {"common": 1}}"#).unwrap();
        assert_eq!(config.booster_size, DEFAULT_BOOSTER_SIZE);
        assert_eq!(config.weights.get(Rarity::COMMON), 1.0);

        let err = BoosterConfig::from_json(r#"{"weights": {"shiny": 1}}"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::Parse(_)));

        let err = BoosterConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigurationError::Parse(_)));
    }

    #[test]
    fn test_serialization() {
        let config = BoosterConfig::new(RarityWeights::new().with(Rarity::EPIC, 2.0));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoosterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_open() {
        let catalog = catalog();
        let config = BoosterConfig::default()
            .with_weight(Rarity::COMMON, 0.7)
            .with_weight(Rarity::RARE, 0.25)
            .with_weight(Rarity::LEGENDARY, 0.05);

        let booster = config.open(&catalog, &mut DrawRng::new(9)).unwrap();
        assert_eq!(booster.len(), 5);

        let opening = config.start_opening(&catalog, &mut DrawRng::new(9)).unwrap();
        assert_eq!(opening.cards(), booster.as_slice());
    }

    #[test]
    fn test_open_rejects_mismatched_catalog() {
        let catalog = catalog();
        let config = BoosterConfig::default()
            .with_weight(Rarity::COMMON, 1.0)
            .with_weight(Rarity::EPIC, 1.0);

        assert!(matches!(
            config.open(&catalog, &mut DrawRng::new(0)),
            Err(ConfigurationError::MissingRarity { .. })
        ));
    }
}
