//! Reveal notification sinks.

use crate::cards::Rarity;

/// Receives one notification per revealed card.
///
/// The presentation layer implements this to play a sound or particle
/// effect scaled to the rarity; the draw engine never calls it.
pub trait EffectsSink {
    /// A card of `rarity` was just revealed.
    fn notify(&mut self, rarity: Rarity);
}

impl<F: FnMut(Rarity)> EffectsSink for F {
    fn notify(&mut self, rarity: Rarity) {
        self(rarity)
    }
}

/// Ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSink;

impl EffectsSink for SilentSink {
    fn notify(&mut self, _rarity: Rarity) {}
}

/// Records notifications in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Rarity>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EffectsSink for RecordingSink {
    fn notify(&mut self, rarity: Rarity) {
        self.events.push(rarity);
    }
}

/// Emits a `tracing` event per reveal. Rarities at or above `highlight`
/// are logged at info level, the rest at debug.
#[derive(Clone, Copy, Debug)]
pub struct TracingSink {
    pub highlight: Rarity,
}

impl Default for TracingSink {
    fn default() -> Self {
        Self {
            highlight: Rarity::EPIC,
        }
    }
}

impl EffectsSink for TracingSink {
    fn notify(&mut self, rarity: Rarity) {
        if rarity >= self.highlight {
            tracing::info!(%rarity, "Revealed a rare pull.");
        } else {
            tracing::debug!(%rarity, "Revealed card.");
        }
    }
}
