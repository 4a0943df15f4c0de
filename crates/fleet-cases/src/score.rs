//! Numeric risk score bands.
//!
//! The numeric score is only used as a sort key. Bands do not overlap, so
//! ordering by score is ordering by severity; within a band the order
//! follows the random source.

use std::ops::Range;

use fleet_model::Severity;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-open score band for a severity.
pub fn score_band(severity: Severity) -> Range<f64> {
    match severity {
        Severity::Critical => 90.0..100.0,
        Severity::High => 70.0..85.0,
        Severity::Med => 40.0..60.0,
        Severity::Low => 20.0..35.0,
    }
}

/// Draw a numeric score uniformly from the severity's band.
pub fn sample_score<R: Rng + ?Sized>(severity: Severity, rng: &mut R) -> f64 {
    rng.gen_range(score_band(severity))
}

/// Build the score RNG: seeded for reproducible ordering, otherwise from entropy.
pub fn score_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
