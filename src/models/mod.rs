// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Data models for the application.
//!
//! Field names double as the external snake_case JSON keys, so serde needs
//! no renames. Decoding is shape-only: required fields must be present with
//! the right type, everything else is accepted as-is.

use serde::de::DeserializeOwned;

pub mod collection;
pub mod profile;
pub mod recipe;

pub use collection::{Collection, RecipeCollection};
pub use profile::Profile;
pub use recipe::{Ingredient, InstructionStep, NutritionInfo, Recipe};

/// Error produced when external JSON does not match an entity's shape.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode {entity}: {source}")]
pub struct DecodeError {
    /// Entity type name, e.g. "Recipe"
    pub entity: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Decode an entity from its external JSON representation.
///
/// A missing required field or wrong-typed value surfaces as a
/// [`DecodeError`] naming the entity; the underlying serde error names the
/// offending field. Optional fields absent from the input decode to `None`.
pub fn decode<T: DeserializeOwned>(entity: &'static str, json: &str) -> Result<T, DecodeError> {
    serde_json::from_str(json).map_err(|source| DecodeError { entity, source })
}
