//! Rarity tiers and the draw weight table.
//!
//! Tiers are static configuration: four fixed values with a canonical order
//! used for browsing and a per-tier draw weight used by the sampler. Weights
//! are relative, not probabilities; the sampler normalizes over the table sum.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{config::ConfigError, internal::InternalError};

/// Rarity classification of a character.
///
/// Variant order is the canonical display order (`Common` first,
/// `Legendary` last) and drives `Ord`, so sorting a mixed collection by
/// rarity needs no auxiliary table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All tiers in canonical order.
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Display label, also the form persisted in the store.
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Display color for embeds and other rendering, as 0xRRGGBB.
    pub fn color(self) -> u32 {
        match self {
            Rarity::Common => 0x21CCB7,
            Rarity::Rare => 0x4B69FF,
            Rarity::Epic => 0xAA00FF,
            Rarity::Legendary => 0xFF8C00,
        }
    }

    /// Standard draw weight for this tier.
    ///
    /// Weights are relative; the Legendary weight is 1/7000.
    pub fn default_weight(self) -> f64 {
        match self {
            Rarity::Common => 0.5,
            Rarity::Rare => 0.15,
            Rarity::Epic => 0.01,
            Rarity::Legendary => 0.000142857,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = InternalError;

    /// Resolves a stored or user-entered label to a tier, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "rare" => Ok(Rarity::Rare),
            "epic" => Ok(Rarity::Epic),
            "legendary" => Ok(Rarity::Legendary),
            _ => Err(InternalError::UnknownRarity {
                value: s.to_string(),
            }),
        }
    }
}

/// Mapping of tier to draw weight.
///
/// Backed by a `BTreeMap` so iteration order is the canonical tier order,
/// which keeps seeded draws reproducible. `Default` yields the standard
/// table; `empty()` starts a custom one.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: BTreeMap<Rarity, f64>,
}

impl WeightTable {
    /// Creates a table with no tiers.
    pub fn empty() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Sets the weight for a tier, replacing any previous value.
    pub fn set(&mut self, rarity: Rarity, weight: f64) {
        self.weights.insert(rarity, weight);
    }

    /// Weight for a tier, if the tier is present.
    pub fn get(&self, rarity: Rarity) -> Option<f64> {
        self.weights.get(&rarity).copied()
    }

    /// Tiers and weights in canonical tier order.
    pub fn iter(&self) -> impl Iterator<Item = (Rarity, f64)> + '_ {
        self.weights.iter().map(|(r, w)| (*r, *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Checks that the table can drive a draw.
    ///
    /// # Returns
    /// - `Ok(())` - Table is non-empty with positive, finite weights
    /// - `Err(ConfigError::EmptyWeightTable)` - No tiers configured
    /// - `Err(ConfigError::InvalidWeightTable)` - A weight is non-positive
    ///   or non-finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weights.is_empty() {
            return Err(ConfigError::EmptyWeightTable);
        }

        for (rarity, weight) in self.iter() {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ConfigError::InvalidWeightTable(format!(
                    "weight {} for tier {} is not a positive finite number",
                    weight, rarity
                )));
            }
        }

        Ok(())
    }
}

impl Default for WeightTable {
    /// The standard draw table, one entry per tier at its default weight.
    fn default() -> Self {
        let mut table = WeightTable::empty();
        for rarity in Rarity::ALL {
            table.set(rarity, rarity.default_weight());
        }
        table
    }
}
