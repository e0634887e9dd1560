//! Card system: rarities, card definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `Rarity`: Ordered tier id (Common < Rare < Epic < Legendary < ...)
//! - `CardId`: Opaque card identifier
//! - `Card`: Immutable catalog entry
//! - `Catalog`: The fixed card pool, partitioned into rarity buckets

pub mod catalog;
pub mod definition;
pub mod rarity;

pub use catalog::Catalog;
pub use definition::{Card, CardId};
pub use rarity::{Rarity, UnknownRarity};
