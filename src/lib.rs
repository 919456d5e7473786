//! Evolvable-parameter primitive for evolutionary simulations.
//!
//! A [`MutableScalar`] is a single `f64` that can randomly drift each
//! generation: with some probability it takes a zero-mean Gaussian step,
//! and it is always clamped back inside its (optional) bounds. A larger
//! simulation typically holds many of these and mutates them all once per
//! generation.
//!
//! Randomness is injected: [`MutableScalar::mutate`] takes any
//! [`rand::Rng`], so a seeded generator gives reproducible runs.

pub mod config;
pub mod scalar;

pub use config::MutationConfig;
pub use scalar::MutableScalar;
