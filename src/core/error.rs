//! Error types.
//!
//! Draw-time problems are `ConfigurationError`s: a catalog and weight table
//! that don't fit together is a caller bug, so nothing here is retried.
//! Malformed catalogs are rejected earlier with a `CatalogError`.

use std::sync::Arc;

use thiserror::Error;

use crate::cards::{CardId, Rarity};

/// JSON decoding failure, shared so the error enums stay `Clone`.
#[derive(Debug, Clone, Error)]
#[error(transparent)]
pub struct JsonError(Arc<serde_json::Error>);

impl JsonError {
    /// The underlying `serde_json` error.
    #[must_use]
    pub fn inner(&self) -> &serde_json::Error {
        &self.0
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(e: serde_json::Error) -> Self {
        Self(Arc::new(e))
    }
}

impl PartialEq for JsonError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.to_string() == other.0.to_string()
    }
}

/// Catalog/weights mismatch detected before any card is drawn.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("rarity {rarity} has weight {weight} but no cards in the catalog")]
    MissingRarity { rarity: Rarity, weight: f64 },

    #[error("rarity {rarity} has invalid weight {weight} (must be finite and non-negative)")]
    InvalidWeight { rarity: Rarity, weight: f64 },

    #[error("no rarity has a positive weight")]
    NoDrawableRarity,

    #[error("malformed booster config: {0}")]
    Parse(#[source] JsonError),
}

/// Catalog rejected at construction.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog has no cards")]
    Empty,

    #[error("card id {0} appears more than once")]
    DuplicateId(CardId),

    #[error("catalog number {number} is used by both {first} and {second}")]
    DuplicateCatalogNumber {
        number: u32,
        first: CardId,
        second: CardId,
    },

    #[error("{0} has catalog number 0 (numbers start at 1)")]
    ZeroCatalogNumber(CardId),

    #[error("malformed catalog document: {0}")]
    Parse(#[source] JsonError),
}
