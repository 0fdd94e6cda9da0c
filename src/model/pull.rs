//! Outcome types for one gacha pull.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::character::CharacterDefinition;
use crate::model::rarity::Rarity;

/// A completed pull that awarded a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullResult {
    /// The awarded character.
    pub character: CharacterDefinition,
    /// The tier the draw sampled.
    pub rarity: Rarity,
    /// True when this pull created the user's first copy (owned 0 to 1).
    pub first_acquisition: bool,
    /// True when the character is a skin variant of a base character.
    /// Display flavor only.
    pub is_skin: bool,
}

/// Why a pull ended without awarding a character.
///
/// A reported, recoverable condition rather than an error; the caller renders
/// it distinctly from both a win and a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AbortedReason {
    /// The sampled tier has no characters, even after a cache refresh.
    NoCharactersForRarity { rarity: Rarity },
}

impl fmt::Display for AbortedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortedReason::NoCharactersForRarity { rarity } => {
                write!(f, "No characters available for rarity {}", rarity)
            }
        }
    }
}

/// Terminal state of one pull.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PullOutcome {
    /// The pull awarded a character.
    Awarded(PullResult),
    /// The pull ended with nothing available to award.
    Aborted(AbortedReason),
}
