//! Synthetic product ratings.
//!
//! The catalog carries no rating data, so every item gets a generated
//! `schema:ratingValue`. The source is injected into the builder; seed it
//! for reproducible output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lowest generated rating.
pub const MIN_RATING: f64 = 3.5;
/// Highest generated rating.
pub const MAX_RATING: f64 = 5.0;

/// Supplies one rating per ingested item.
pub trait RatingSource {
    /// Next rating, already rounded to one decimal place.
    fn next_rating(&mut self) -> f64;
}

/// Ratings drawn uniformly from [`MIN_RATING`, `MAX_RATING`], rounded to one
/// decimal.
#[derive(Debug, Clone)]
pub struct UniformRatings<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformRatings<R> {
    /// Wrap an arbitrary random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformRatings<StdRng> {
    /// Reproducible ratings from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Non-reproducible ratings seeded from the OS.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RatingSource for UniformRatings<R> {
    fn next_rating(&mut self) -> f64 {
        let raw: f64 = self.rng.gen_range(MIN_RATING..=MAX_RATING);
        round_to_tenth(raw)
    }
}

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Lexical form used for the rating literal (always one decimal).
pub fn rating_lexical(rating: f64) -> String {
    format!("{rating:.1}")
}
