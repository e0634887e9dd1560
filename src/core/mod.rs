//! Core types shared by the rest of the crate: RNG, errors, configuration.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BoosterConfig, DEFAULT_BOOSTER_SIZE};
pub use error::{CatalogError, ConfigurationError, JsonError};
pub use rng::{DrawRng, DrawRngState, SequenceSource, UniformSource};
