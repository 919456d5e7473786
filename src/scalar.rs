use rand::Rng;
use rand_distr::StandardNormal;

use crate::config::MutationConfig;

/// A scalar that can randomly drift, clamped to optional bounds.
///
/// Plain value type: copy it, hand it around, mutate it in place. Each
/// bound is independently optional; whenever one is active, the stored
/// value respects it after every constructor and every write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutableScalar {
    value: f64,
    mutation_probability: f64,
    step_sigma: f64,
    lower: Option<f64>,
    upper: Option<f64>,
}

impl MutableScalar {
    /// Primary constructor. Clamps `value` into the given bounds right
    /// away, so an out-of-range initial value is silently pulled back in.
    ///
    /// `mutation_probability` and `step_sigma` are stored as-is; range
    /// checks are the caller's business (the factories below add them
    /// where a domain constraint exists).
    pub fn new(
        value: f64,
        mutation_probability: f64,
        step_sigma: f64,
        lower: Option<f64>,
        upper: Option<f64>,
    ) -> Self {
        let mut scalar = MutableScalar {
            value,
            mutation_probability,
            step_sigma,
            lower,
            upper,
        };
        scalar.enforce_bounds();
        scalar
    }

    /// Builds an unbounded scalar from a config record.
    ///
    /// Bounds never come in through this path, even if the surrounding
    /// config document carries clamp fields; only the [`probability`]
    /// and [`positive`] factories install bounds.
    ///
    /// [`probability`]: MutableScalar::probability
    /// [`positive`]: MutableScalar::positive
    pub fn from_config(config: &MutationConfig) -> Self {
        MutableScalar::new(config.initial, config.rate, config.sigma, None, None)
    }

    /// A scalar permanently clamped to `[0, 1]`.
    pub fn probability(initial_value: f64, mutation_probability: f64, sigma: f64) -> Self {
        MutableScalar::new(
            initial_value,
            mutation_probability,
            sigma,
            Some(0.0),
            Some(1.0),
        )
    }

    /// Like [`probability`](MutableScalar::probability), but driven by a
    /// config record. Whatever bound content the config might have
    /// suggested, the result's bounds are exactly `[0, 1]`.
    pub fn probability_from_config(config: &MutationConfig) -> Self {
        let mut scalar = MutableScalar::from_config(config);
        pin_bound(&mut scalar.lower, 0.0);
        pin_bound(&mut scalar.upper, 1.0);
        scalar.enforce_bounds();
        scalar
    }

    /// A scalar clamped below by `0`, with an optional cap.
    ///
    /// # Panics
    /// If `max` is `Some(m)` with `m < 0.0`. A negative cap on a
    /// positive scalar is a programmer error, not a recoverable one.
    pub fn positive(
        initial_value: f64,
        mutation_probability: f64,
        sigma: f64,
        max: Option<f64>,
    ) -> Self {
        if let Some(max) = max {
            assert!(max >= 0.0, "positive scalar cannot have a negative max");
        }
        MutableScalar::new(initial_value, mutation_probability, sigma, Some(0.0), max)
    }

    /// Config-driven [`positive`](MutableScalar::positive). The lower
    /// bound is forced to exactly `0`; the cap comes only from the `max`
    /// argument, never from the config.
    ///
    /// # Panics
    /// If `max` is `Some(m)` with `m < 0.0`.
    pub fn positive_from_config(config: &MutationConfig, max: Option<f64>) -> Self {
        if let Some(max) = max {
            assert!(max >= 0.0, "positive scalar cannot have a negative max");
        }
        let mut scalar = MutableScalar::from_config(config);
        pin_bound(&mut scalar.lower, 0.0);
        scalar.upper = max;
        scalar.enforce_bounds();
        scalar
    }

    pub fn get(&self) -> f64 {
        self.value
    }

    /// Overwrites the value, then re-clamps. The stored value may end up
    /// on a bound instead of at `value`.
    pub fn set(&mut self, value: f64) {
        self.value = value;
        self.enforce_bounds();
    }

    /// With probability `mutation_probability`, adds a zero-mean Gaussian
    /// step of standard deviation `step_sigma` and re-clamps. Otherwise
    /// leaves the value untouched.
    ///
    /// The only source of randomness in the type; pass a seeded rng for
    /// reproducible runs.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if rng.gen_bool(self.mutation_probability) {
            let step: f64 = rng.sample(StandardNormal);
            self.value += step * self.step_sigma;
            self.enforce_bounds();
        }
    }

    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn step_sigma(&self) -> f64 {
        self.step_sigma
    }

    pub fn lower_bound(&self) -> Option<f64> {
        self.lower
    }

    pub fn upper_bound(&self) -> Option<f64> {
        self.upper
    }

    // The lower clamp wins: the upper bound is only checked when the
    // lower one did not fire. Callers handing us lower > upper get
    // whatever this ordering gives them.
    fn enforce_bounds(&mut self) {
        if let Some(lower) = self.lower.filter(|&lower| self.value < lower) {
            self.value = lower;
        } else if let Some(upper) = self.upper.filter(|&upper| self.value > upper) {
            self.value = upper;
        }
    }
}

// Install the bound if absent, overwrite it if it holds anything else.
// Used by the config factories to never trust config-derived bounds.
fn pin_bound(slot: &mut Option<f64>, bound: f64) {
    match *slot {
        Some(existing) if existing == bound => {}
        _ => *slot = Some(bound),
    }
}
