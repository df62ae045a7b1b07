//! Mad Libs — template-driven story generation.
//!
//! Collects a noun, verb, adjective and mood, fills any missing slot with a
//! random word from a fixed word bank, and substitutes the four values into a
//! randomly chosen sentence template. Randomness is always injected by the
//! caller so generation is reproducible under a fixed seed.

pub mod core;
pub mod schema;
