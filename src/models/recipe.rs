// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Recipe model and its nested parts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::DecodeError;

/// A recipe as exchanged with the external JSON contract.
///
/// Only `id` and `name` are required; every other field may be absent.
/// Values are accepted as-is (no range or content validation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe id
    pub id: Uuid,
    /// Owning user id, if the recipe is tied to a user
    pub user_id: Option<Uuid>,
    /// Image URL
    pub image_url: Option<String>,
    /// Recipe name/title
    pub name: String,
    /// Ordered ingredient list
    pub ingredients: Option<Vec<Ingredient>>,
    /// Ordered instruction steps
    pub instructions: Option<Vec<InstructionStep>>,
    /// Nutrition summary
    pub nutrition: Option<NutritionInfo>,
    /// Free-text cooking tips
    pub tips: Option<Vec<String>>,
    /// Free-text tags (e.g. "Pasta", "Quick")
    pub tags: Option<Vec<String>>,
    /// Preparation time in minutes
    pub prep_time: Option<i32>,
    /// Cooking time in minutes
    pub cook_time: Option<i32>,
    /// Servings produced
    pub servings: Option<i32>,
    /// Difficulty label, conventionally "Easy"/"Medium"/"Hard"
    pub difficulty_level: Option<String>,
    /// When the recipe was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the recipe was last updated
    pub updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Decode a recipe from its external JSON representation.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        crate::models::decode("Recipe", json)
    }
}

/// One ingredient row.
///
/// The id exists only so list renderers can tell rows apart. It is
/// regenerated on every decode and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Ingredient name
    pub name: String,
    /// Free-text amount, e.g. "1/2 cup" or "2 cloves"
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: &str, quantity: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            quantity: quantity.to_string(),
        }
    }
}

/// One instruction step.
///
/// Step numbers are taken as given; contiguity is not enforced. The id
/// carries the same caveat as [`Ingredient::id`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructionStep {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Position shown to the user
    pub step_number: i32,
    /// What to do in this step
    pub description: String,
}

impl InstructionStep {
    pub fn new(step_number: i32, description: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            step_number,
            description: description.to_string(),
        }
    }
}

/// Nutrition summary. All fields are free text, units included by convention.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub fat: Option<String>,
    pub carbohydrates: Option<String>,
}
