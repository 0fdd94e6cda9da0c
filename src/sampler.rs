//! Weighted rarity sampling.
//!
//! One pure function: map a weight table to a single sampled tier. The
//! random source is a parameter so callers can pass a seeded generator and
//! get reproducible draws in tests; the draw path passes a thread-local
//! generator.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::error::config::ConfigError;
use crate::model::rarity::{Rarity, WeightTable};

/// Samples one rarity tier with probability proportional to its weight over
/// the table sum. Ties between equal weights are broken purely by the draw.
///
/// # Arguments
/// - `table` - Tier weights; validated before the draw
/// - `rng` - Random source for the draw
///
/// # Returns
/// - `Ok(Rarity)` - The sampled tier
/// - `Err(ConfigError)` - The table is empty or holds an unusable weight
pub fn sample_rarity<R: Rng + ?Sized>(
    table: &WeightTable,
    rng: &mut R,
) -> Result<Rarity, ConfigError> {
    table.validate()?;

    let (tiers, weights): (Vec<Rarity>, Vec<f64>) = table.iter().unzip();
    let dist = WeightedIndex::new(weights)
        .map_err(|e| ConfigError::InvalidWeightTable(e.to_string()))?;

    Ok(tiers[dist.sample(rng)])
}
