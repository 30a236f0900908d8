// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Collection model and its recipe join record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::DecodeError;

/// A named grouping of recipes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// Collection id
    pub id: Uuid,
    /// Owning user id, if the collection is user-specific
    pub user_id: Option<Uuid>,
    /// Display name
    pub name: String,
    /// When the collection was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the collection was last updated
    pub updated_at: Option<DateTime<Utc>>,
}

impl Collection {
    /// Decode a collection from its external JSON representation.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        crate::models::decode("Collection", json)
    }
}

/// Join record linking one recipe into one collection.
///
/// This is the declared membership contract for a real backend. The mock
/// catalog answers membership from a static name-keyed table instead and
/// never constructs these rows, so the two deliberately diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCollection {
    /// Join row id
    pub id: Uuid,
    /// Collection being joined into
    pub collection_id: Uuid,
    /// Recipe being joined
    pub recipe_id: Uuid,
    /// When the recipe was added to the collection
    pub created_at: Option<DateTime<Utc>>,
}

impl RecipeCollection {
    /// Decode a join record from its external JSON representation.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        crate::models::decode("RecipeCollection", json)
    }
}
