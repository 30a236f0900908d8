// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Building a recipe from compose-form state.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Ingredient, InstructionStep, Recipe};

/// Editable compose-form state.
///
/// Screens edit a draft, never a stored recipe: converting the draft mints
/// a brand-new recipe with its own id. Numeric fields stay free text until
/// conversion, matching the form inputs.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
    /// Comma-separated tag input
    pub tags_input: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty_level: Option<String>,
}

impl RecipeDraft {
    /// Convert the draft into a new recipe.
    ///
    /// Ingredient rows without a name and instruction rows without a
    /// description are dropped. The tag input is split on commas and
    /// trimmed. Numeric fields parse leniently: anything unparseable
    /// becomes `None`. The recipe gets a fresh id and creation timestamps.
    pub fn into_recipe(self, user_id: Option<Uuid>) -> Recipe {
        let now = Utc::now();

        let ingredients: Vec<Ingredient> = self
            .ingredients
            .into_iter()
            .filter(|i| !i.name.is_empty())
            .collect();
        let instructions: Vec<InstructionStep> = self
            .instructions
            .into_iter()
            .filter(|s| !s.description.is_empty())
            .collect();
        let tags: Vec<String> = self
            .tags_input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();

        Recipe {
            id: Uuid::new_v4(),
            user_id,
            image_url: None,
            name: self.name,
            ingredients: Some(ingredients),
            instructions: Some(instructions),
            nutrition: None,
            tips: None,
            tags: Some(tags),
            prep_time: self.prep_time.trim().parse().ok(),
            cook_time: self.cook_time.trim().parse().ok(),
            servings: self.servings.trim().parse().ok(),
            difficulty_level: self.difficulty_level,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
