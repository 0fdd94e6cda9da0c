//! Character catalog domain models and parameters.
//!
//! Provides the catalog-side domain model with validated fields, parameter
//! types for the administrative create/edit operations, and the display-only
//! skin classification helper.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::internal::InternalError;
use crate::model::rarity::Rarity;

/// One collectible character as defined in the catalog.
///
/// `name` is the identity; matching is case-insensitive while the stored
/// casing is preserved for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDefinition {
    /// Display name, unique within the catalog (case-insensitive).
    pub name: String,
    /// Rarity tier the character is drawn under.
    pub rarity: Rarity,
    /// URI of the character's artwork.
    pub image_url: String,
    /// Optional flavor or lore text.
    pub description: Option<String>,
}

impl CharacterDefinition {
    /// Converts an entity model to a catalog domain model at the repository
    /// boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(CharacterDefinition)` - The converted domain model
    /// - `Err(InternalError::UnknownRarity)` - Stored rarity label matches
    ///   no tier
    pub fn from_entity(entity: entity::character::Model) -> Result<Self, InternalError> {
        Ok(Self {
            name: entity.name,
            rarity: Rarity::from_str(&entity.rarity)?,
            image_url: entity.image_url,
            description: entity.description,
        })
    }
}

/// Parameters for creating a new catalog entry.
#[derive(Debug, Clone)]
pub struct CreateCharacterParams {
    /// Display name; casing preserved as entered.
    pub name: String,
    /// Rarity tier to draw the character under.
    pub rarity: Rarity,
    /// URI of the character's artwork.
    pub image_url: String,
    /// Optional flavor or lore text.
    pub description: Option<String>,
}

/// Parameters for editing an existing catalog entry.
///
/// All fields besides `name` are optional - only provided fields update;
/// unset fields keep their current values.
#[derive(Debug, Clone)]
pub struct EditCharacterParams {
    /// Name of the entry to edit (matched case-insensitively).
    pub name: String,
    /// New rarity tier, if changing.
    pub rarity: Option<Rarity>,
    /// New artwork URI, if changing.
    pub image_url: Option<String>,
    /// New description (outer Option indicates field presence, inner for
    /// nullable value).
    pub description: Option<Option<String>>,
}

impl EditCharacterParams {
    /// True when the edit would change nothing.
    pub fn is_noop(&self) -> bool {
        self.rarity.is_none() && self.image_url.is_none() && self.description.is_none()
    }
}

/// Classifies a character name as a skin variant of a base character.
///
/// A skin is a name that contains a configured base name without being equal
/// to it (for example an alternate-costume entry named after the base
/// character). Comparison ignores case and surrounding whitespace. Purely a
/// display classification; ownership and persistence never consult it.
pub fn is_skin_variant(name: &str, base_names: &[String]) -> bool {
    let stripped = name.trim().to_lowercase();

    base_names.iter().any(|base| {
        let base = base.trim().to_lowercase();
        !base.is_empty() && stripped.contains(&base) && stripped != base
    })
}
