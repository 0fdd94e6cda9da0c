use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with stored data indicating unexpected rows & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Discord snowflakes are persisted as text; a row whose user id does not
    /// parse back to `u64` was written outside this library.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored rarity label that matches no known tier.
    ///
    /// Tiers are static configuration; a row carrying any other label cannot
    /// be projected into the caches.
    #[error("Unknown rarity '{value}' in stored record")]
    UnknownRarity {
        /// The label that failed to resolve to a tier
        value: String,
    },

    /// A stored owned count below zero.
    ///
    /// Owned counts are non-negative by contract; the decrement path floors
    /// at zero, so a negative value was written outside this library.
    #[error("Negative owned count {value} in stored record")]
    NegativeOwnedCount {
        /// The count found in the row
        value: i32,
    },
}
