//! Particle field generation for the galaxy viewer.
//!
//! # Invariants
//! - A field is generated once and never mutated afterward; animation only
//!   changes a global rotation and a shared time scalar.
//! - Generation is deterministic: same config + same seed produce an
//!   identical field.

pub mod field;

pub use field::{MAX_POINT_SIZE, MIN_POINT_SIZE, ParticleField};
