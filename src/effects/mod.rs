//! Reveal effects.
//!
//! Sound and particle playback belong to the host UI. This module only
//! defines the capability the UI injects into an opening session so the
//! session can announce each reveal without a global effects manager.

pub mod sink;

pub use sink::{EffectsSink, RecordingSink, SilentSink, TracingSink};
