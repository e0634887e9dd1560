//! Booster drawing: weight tables, the draw engine, and opening sessions.
//!
//! ## Key Types
//!
//! - `RarityWeights`: Relative weight per rarity
//! - `DrawTable`: Validated cumulative distribution over a catalog
//! - `draw`: One-shot validate-and-draw
//! - `BoosterOpening`: Card-by-card reveal into a collection

pub mod opening;
pub mod table;
pub mod weights;

pub use opening::BoosterOpening;
pub use table::{draw, DrawTable};
pub use weights::RarityWeights;
