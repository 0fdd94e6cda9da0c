use crate::error::{config::ConfigError, GachaError};
use crate::model::rarity::{Rarity, WeightTable};

/// Base character names used for skin classification when `GACHA_BASE_NAMES`
/// is not set.
const DEFAULT_BASE_NAMES: [&str; 9] = [
    "Kae", "Cherry", "Kiara", "Lyra", "Melissa", "Mika", "Skye", "Dolly", "Nyx",
];

/// Environment variables overriding one tier's draw weight each.
const WEIGHT_VARS: [(Rarity, &str); 4] = [
    (Rarity::Common, "GACHA_WEIGHT_COMMON"),
    (Rarity::Rare, "GACHA_WEIGHT_RARE"),
    (Rarity::Epic, "GACHA_WEIGHT_EPIC"),
    (Rarity::Legendary, "GACHA_WEIGHT_LEGENDARY"),
];

pub struct Config {
    pub database_url: String,

    /// Draw weights per rarity tier, validated before use.
    pub weights: WeightTable,

    /// Base character names that skin variants extend.
    pub base_names: Vec<String>,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// The weight table starts from the built-in defaults; each
    /// `GACHA_WEIGHT_*` variable overrides one tier. The table is validated
    /// here so a misconfiguration fails startup instead of the first pull.
    ///
    /// # Returns
    /// - `Ok(Config)` - Loaded and validated configuration
    /// - `Err(GachaError)` - Missing `DATABASE_URL`, an unparsable weight
    ///   override, or a weight table that cannot drive a draw
    pub fn from_env() -> Result<Self, GachaError> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let mut weights = WeightTable::default();
        for (rarity, var) in WEIGHT_VARS {
            if let Ok(value) = std::env::var(var) {
                let weight = value
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidEnvVar {
                        var: var.to_string(),
                        value: value.clone(),
                    })?;
                weights.set(rarity, weight);
            }
        }
        weights.validate()?;

        let base_names = match std::env::var("GACHA_BASE_NAMES") {
            Ok(value) => value
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            Err(_) => DEFAULT_BASE_NAMES.iter().map(|name| name.to_string()).collect(),
        };

        Ok(Self {
            database_url,
            weights,
            base_names,
        })
    }
}
