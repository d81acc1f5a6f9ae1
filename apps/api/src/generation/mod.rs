// Post generation engine.
// Deterministic table lookup: tone × platform → template, plus hashtag composition.
// No model calls and no I/O below the handlers.

pub mod generator;
pub mod handlers;
pub mod hashtags;
pub mod platform;
pub mod templates;
pub mod tone;
