use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The library requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but holds an unusable value.
    #[error("Invalid value '{value}' for environment variable {var}")]
    InvalidEnvVar {
        /// The environment variable name
        var: String,
        /// The value that failed to parse
        value: String,
    },

    /// The rarity weight table has no tiers at all.
    #[error("Rarity weight table is empty")]
    EmptyWeightTable,

    /// The rarity weight table cannot drive a draw.
    ///
    /// Covers non-positive and non-finite weights as well as a table whose
    /// weights sum to zero.
    #[error("Rarity weight table rejected: {0}")]
    InvalidWeightTable(String),
}
