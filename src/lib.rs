//! # pocket-booster
//!
//! Weighted booster draws for collectible card games.
//!
//! ## Design Principles
//!
//! 1. **Configuration Over Convention**: Catalog size, rarity tiers, booster
//!    size and the probability table are all data. Nothing is hard-coded.
//!
//! 2. **Fail Fast**: A rarity with positive weight and no cards is an error
//!    before any card is drawn. There is no fallback card.
//!
//! 3. **Injectable Randomness**: Every draw takes its uniform source as an
//!    argument, so boosters are reproducible from a seed and exact in tests.
//!
//! ## Sampling
//!
//! Each pick is two-stage: a uniform value selects a rarity from the
//! cumulative weight table, a second one selects a card uniformly within
//! that rarity's bucket. Exact for any real-valued weights.
//!
//! ## Modules
//!
//! - `core`: RNG, errors, booster configuration
//! - `cards`: Rarities, cards, catalog
//! - `booster`: Weight tables, the draw engine, opening sessions
//! - `collection`: Owned-card multiset and progress
//! - `effects`: Reveal notification sinks

pub mod booster;
pub mod cards;
pub mod collection;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use crate::core::{
    BoosterConfig, CatalogError, ConfigurationError, DrawRng, DrawRngState, JsonError,
    SequenceSource, UniformSource, DEFAULT_BOOSTER_SIZE,
};

pub use crate::cards::{Card, CardId, Catalog, Rarity};

pub use crate::booster::{draw, BoosterOpening, DrawTable, RarityWeights};

pub use crate::collection::{Collection, CollectionProgress};

pub use crate::effects::{EffectsSink, RecordingSink, SilentSink, TracingSink};
