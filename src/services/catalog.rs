// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Mock catalog answering recipe and collection queries from fixtures.
//!
//! Stands in for a real data-access layer. Every listing is total over the
//! fixture set and deterministic in content; order is shuffled unless
//! deterministic order is configured. Collection membership comes from a
//! closed, statically declared name-keyed table, not from
//! `RecipeCollection` join rows.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::models::{Collection, Profile, Recipe};
use crate::services::fixtures::{self, Fixtures};

/// Filter tags offered beyond what the sample recipes carry.
const EXTRA_FILTER_TAGS: &[&str] = &[
    "Dinner",
    "Easy",
    "Vegetarian",
    "Dessert",
    "< 30 Mins",
    "Breakfast",
];

/// Membership table: collection name to fixture recipe ids.
///
/// The mapping is closed. A collection participates only by having its name
/// listed here; any other name falls back to [`DEFAULT_COLLECTION_RECIPES`].
const COLLECTION_RECIPES: &[(&str, &[Uuid])] = &[
    (
        "Weeknight Dinners",
        &[
            fixtures::SPAGHETTI_PUTTANESCA,
            fixtures::BROWN_BUTTER_SCALLOPS,
        ],
    ),
    ("Holiday Baking", &[fixtures::CRISPY_FRIED_CHICKEN]),
    (
        "Vegetarian Favorites",
        &[fixtures::SPAGHETTI_PUTTANESCA, fixtures::GREEN_HERB_SALAD],
    ),
];

/// Fallback listing for collection names the table does not recognize.
const DEFAULT_COLLECTION_RECIPES: &[Uuid] = &[
    fixtures::SPICY_SALMON_HAND_ROLLS,
    fixtures::GREEN_HERB_SALAD,
    fixtures::BROWN_BUTTER_SCALLOPS,
];

/// Fixed subset shown as "recently viewed".
const RECENTLY_VIEWED: &[Uuid] = &[
    fixtures::BROWN_BUTTER_SCALLOPS,
    fixtures::GREEN_HERB_SALAD,
    fixtures::SPAGHETTI_PUTTANESCA,
    fixtures::SPICY_SALMON_HAND_ROLLS,
];

/// Fixed subset shown as "saved".
const SAVED: &[Uuid] = &[
    fixtures::SPAGHETTI_PUTTANESCA,
    fixtures::SPICY_SALMON_HAND_ROLLS,
    fixtures::CRISPY_FRIED_CHICKEN,
    fixtures::GREEN_HERB_SALAD,
];

/// Mock data provider over the process-wide fixture registry.
#[derive(Clone)]
pub struct CatalogService {
    fixtures: &'static Fixtures,
    deterministic_order: bool,
}

impl CatalogService {
    /// Create a catalog. With `deterministic_order` set, listings keep
    /// fixture order instead of being shuffled.
    pub fn new(deterministic_order: bool) -> Self {
        Self {
            fixtures: Fixtures::get(),
            deterministic_order,
        }
    }

    /// All sample recipes, shuffled.
    pub fn latest_recipes(&self) -> Vec<Recipe> {
        self.shuffled(self.fixtures.recipes().to_vec())
    }

    /// The fixed recently-viewed subset, shuffled.
    pub fn recently_viewed_recipes(&self) -> Vec<Recipe> {
        self.shuffled(self.resolve(RECENTLY_VIEWED))
    }

    /// The fixed saved subset, shuffled.
    pub fn saved_recipes(&self) -> Vec<Recipe> {
        self.shuffled(self.resolve(SAVED))
    }

    /// Every sample recipe, in fixture order.
    pub fn all_recipes(&self) -> Vec<Recipe> {
        self.fixtures.recipes().to_vec()
    }

    /// Recipes belonging to `collection`, looked up by name in the
    /// membership table, with the documented fallback for unrecognized
    /// names. The result is shuffled.
    pub fn recipes_in_collection(&self, collection: &Collection) -> Vec<Recipe> {
        let ids = COLLECTION_RECIPES
            .iter()
            .find(|(name, _)| *name == collection.name)
            .map(|(_, ids)| *ids)
            .unwrap_or(DEFAULT_COLLECTION_RECIPES);
        tracing::debug!(
            collection = %collection.name,
            count = ids.len(),
            "Resolved collection membership"
        );
        self.shuffled(self.resolve(ids))
    }

    /// The three sample collections, every call.
    pub fn collections(&self) -> Vec<Collection> {
        self.fixtures.collections().to_vec()
    }

    /// The sample profile.
    pub fn profile(&self) -> Profile {
        self.fixtures.profile().clone()
    }

    /// Filter tags: the union of all sample recipe tags and
    /// [`EXTRA_FILTER_TAGS`], deduplicated and sorted. Stable across calls
    /// and independent of listing shuffles.
    pub fn filter_tags(&self) -> Vec<String> {
        let mut tags: BTreeSet<String> =
            EXTRA_FILTER_TAGS.iter().map(|t| t.to_string()).collect();
        for recipe in self.fixtures.recipes() {
            if let Some(recipe_tags) = &recipe.tags {
                tags.extend(recipe_tags.iter().cloned());
            }
        }
        tags.into_iter().collect()
    }

    fn resolve(&self, ids: &[Uuid]) -> Vec<Recipe> {
        ids.iter()
            .filter_map(|id| self.fixtures.recipe(*id))
            .cloned()
            .collect()
    }

    fn shuffled(&self, mut recipes: Vec<Recipe>) -> Vec<Recipe> {
        if !self.deterministic_order {
            recipes.shuffle(&mut rand::thread_rng());
        }
        recipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_table_ids_resolve_to_fixtures() {
        let fixtures = Fixtures::get();
        for (name, ids) in COLLECTION_RECIPES {
            for id in *ids {
                assert!(
                    fixtures.recipe(*id).is_some(),
                    "{name} references missing fixture {id}"
                );
            }
        }
    }

    #[test]
    fn default_branch_ids_resolve_to_fixtures() {
        let fixtures = Fixtures::get();
        for id in DEFAULT_COLLECTION_RECIPES {
            assert!(fixtures.recipe(*id).is_some());
        }
    }

    #[test]
    fn fixed_subsets_resolve_fully() {
        let catalog = CatalogService::new(true);
        assert_eq!(catalog.recently_viewed_recipes().len(), RECENTLY_VIEWED.len());
        assert_eq!(catalog.saved_recipes().len(), SAVED.len());
    }

    #[test]
    fn deterministic_order_keeps_fixture_order() {
        let catalog = CatalogService::new(true);
        let ids: Vec<Uuid> = catalog.latest_recipes().iter().map(|r| r.id).collect();
        let fixture_ids: Vec<Uuid> = catalog.all_recipes().iter().map(|r| r.id).collect();
        assert_eq!(ids, fixture_ids);
    }
}
