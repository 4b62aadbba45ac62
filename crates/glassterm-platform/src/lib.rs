//! Collaborator services consumed by the terminal core.
//!
//! The interpreter never reads the system clock or an entropy source
//! directly. Hosts hand it a [`Clock`] and a [`RandomSource`]; tests hand it
//! the deterministic implementations from this crate.

mod services;

pub use services::{Clock, FixedClock, RandomSource, SeededRandom, SequenceRandom, SystemClock};
