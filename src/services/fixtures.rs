// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Built-in sample data used in place of a real backend.
//!
//! All fixtures are constructed once per process into an immutable registry.
//! Accessors hand out references or clones; nothing mutates a fixture in
//! place. Ids are fixed constants so the catalog's membership table can
//! refer to recipes statically and repeated lookups return identical
//! entities.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{
    Collection, Ingredient, InstructionStep, NutritionInfo, Profile, Recipe,
};

// ─── Well-known fixture ids ──────────────────────────────────────
pub const SPAGHETTI_PUTTANESCA: Uuid = Uuid::from_u128(0x7e2c1f4a_9b3d_4c21_8f5e_d0a61b7c9e10);
pub const CRISPY_FRIED_CHICKEN: Uuid = Uuid::from_u128(0x3b9f6a2d_54c8_47e3_9a1b_8c2e5f0d7a44);
pub const SPICY_SALMON_HAND_ROLLS: Uuid = Uuid::from_u128(0xf4d81c3e_6a95_4b07_a3c2_19e8d5b6f072);
pub const GREEN_HERB_SALAD: Uuid = Uuid::from_u128(0x91a5e7c2_3f60_4d8a_b1e4_7c05a9d2f386);
pub const BROWN_BUTTER_SCALLOPS: Uuid = Uuid::from_u128(0x5c08b9e1_d274_4a6f_8e93_fb12c7d40a65);

pub const WEEKNIGHT_DINNERS: Uuid = Uuid::from_u128(0x2f6a0d8c_71b5_4e92_a647_3d9c85e1b20f);
pub const HOLIDAY_BAKING: Uuid = Uuid::from_u128(0x8d3e5b07_c9a2_4f14_b8d6_05f1e7a3c492);
pub const VEGETARIAN_FAVORITES: Uuid = Uuid::from_u128(0xa61c9f35_0e82_4706_9cd1_4b7f2a8e60d3);

/// Owner assigned to every sample entity.
pub const SAMPLE_USER: Uuid = Uuid::from_u128(0x0b7d4e92_86f3_4c5a_9e08_1a2d6c4f8b37);

/// Immutable registry of all sample entities.
#[derive(Debug)]
pub struct Fixtures {
    recipes: Vec<Recipe>,
    collections: Vec<Collection>,
    profile: Profile,
}

impl Fixtures {
    /// Process-wide registry, built on first access.
    pub fn get() -> &'static Fixtures {
        static FIXTURES: OnceLock<Fixtures> = OnceLock::new();
        FIXTURES.get_or_init(|| {
            let fixtures = Fixtures::build();
            tracing::info!(
                recipes = fixtures.recipes.len(),
                collections = fixtures.collections.len(),
                "Sample fixtures built"
            );
            fixtures
        })
    }

    /// Every sample recipe, in fixture order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Every sample collection.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// The sample profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Look up a sample recipe by id.
    pub fn recipe(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    fn build() -> Self {
        let created = fixture_time("2024-05-01T12:00:00Z");

        let recipes = vec![
            Recipe {
                id: SPAGHETTI_PUTTANESCA,
                user_id: Some(SAMPLE_USER),
                image_url: Some(
                    "https://images.immediate.co.uk/production/volatile/sites/30/2020/08/spaghetti-puttanesca_1-1ce4e81.jpg"
                        .to_string(),
                ),
                name: "Sample Spaghetti Recipe".to_string(),
                ingredients: Some(vec![
                    Ingredient::new("Spaghetti", "200g"),
                    Ingredient::new("Canned tomatoes", "1 can"),
                    Ingredient::new("Garlic", "2 cloves"),
                    Ingredient::new("Olive oil", "2 tbsp"),
                    Ingredient::new("Olives", "1/2 cup"),
                    Ingredient::new("Capers", "2 tbsp"),
                ]),
                instructions: Some(vec![
                    InstructionStep::new(1, "Cook spaghetti according to package directions."),
                    InstructionStep::new(2, "While spaghetti cooks, heat olive oil in a pan."),
                    InstructionStep::new(3, "Sauté garlic until fragrant."),
                    InstructionStep::new(
                        4,
                        "Add tomatoes, olives, and capers. Simmer for 10 minutes.",
                    ),
                    InstructionStep::new(5, "Drain spaghetti and toss with sauce."),
                ]),
                nutrition: Some(NutritionInfo {
                    calories: Some("550 kcal".to_string()),
                    protein: Some("15g".to_string()),
                    fat: Some("20g".to_string()),
                    carbohydrates: Some("75g".to_string()),
                }),
                tips: Some(vec![
                    "Add red pepper flakes for heat.".to_string(),
                    "Use fresh basil if available.".to_string(),
                ]),
                tags: Some(tags(&["Pasta", "Italian", "Quick", "Vegetarian"])),
                prep_time: Some(10),
                cook_time: Some(20),
                servings: Some(2),
                difficulty_level: Some("Easy".to_string()),
                created_at: Some(created),
                updated_at: Some(created),
            },
            Recipe {
                id: CRISPY_FRIED_CHICKEN,
                user_id: Some(SAMPLE_USER),
                image_url: Some(
                    "https://www.allrecipes.com/thmb/SoBuPU73wbeV6gjVpGcW07N_kQc=/1500x0/filters:no_upscale():max_bytes(150000):strip_icc()/8805-CrispyFriedChicken-mfs-3x2-072-d5a1716591704436ba74e514314ed601.jpg"
                        .to_string(),
                ),
                name: "Crispy Fried Chicken".to_string(),
                ingredients: Some(vec![
                    Ingredient::new("Chicken pieces", "8"),
                    Ingredient::new("All-purpose flour", "2 cups"),
                    Ingredient::new("Salt", "2 tbsp"),
                    Ingredient::new("Black pepper", "1 tbsp"),
                    Ingredient::new("Paprika", "1 tbsp"),
                    Ingredient::new("Garlic powder", "1 tsp"),
                    Ingredient::new("Eggs", "2"),
                    Ingredient::new("Milk", "1/2 cup"),
                    Ingredient::new("Vegetable oil", "3 cups"),
                ]),
                instructions: Some(vec![
                    InstructionStep::new(
                        1,
                        "In a bowl, mix flour, salt, pepper, paprika, and garlic powder.",
                    ),
                    InstructionStep::new(2, "In another bowl, whisk eggs and milk."),
                    InstructionStep::new(
                        3,
                        "Dip each chicken piece in the egg mixture, then dredge in the flour \
                         mixture, ensuring fully coated.",
                    ),
                    InstructionStep::new(
                        4,
                        "Heat vegetable oil in a large skillet over medium-high heat.",
                    ),
                    InstructionStep::new(
                        5,
                        "Carefully place chicken in hot oil. Fry for about 6-8 minutes on each \
                         side, until golden brown and cooked through.",
                    ),
                    InstructionStep::new(
                        6,
                        "Remove chicken and place on a wire rack to drain excess oil.",
                    ),
                ]),
                nutrition: Some(NutritionInfo {
                    calories: Some("700 kcal".to_string()),
                    protein: Some("45g".to_string()),
                    fat: Some("40g".to_string()),
                    carbohydrates: Some("35g".to_string()),
                }),
                tips: Some(vec![
                    "For extra crispy chicken, double dredge (dip in egg, then flour, then egg, \
                     then flour again)."
                        .to_string(),
                    "Ensure oil temperature is around 350°F (175°C).".to_string(),
                ]),
                tags: Some(tags(&["Chicken", "Fried", "Comfort Food", "American"])),
                prep_time: Some(20),
                cook_time: Some(25),
                servings: Some(4),
                difficulty_level: Some("Medium".to_string()),
                created_at: Some(created),
                updated_at: Some(created),
            },
            Recipe {
                id: SPICY_SALMON_HAND_ROLLS,
                user_id: Some(SAMPLE_USER),
                image_url: Some(
                    "https://static01.nyt.com/images/2023/08/31/multimedia/31SALMONRICE-fzkw/31SALMONRICE-fzkw-square640.jpg"
                        .to_string(),
                ),
                name: "Spicy Salmon Hand Rolls".to_string(),
                ingredients: Some(vec![
                    Ingredient::new("square toasted nori sheets", "5"),
                    Ingredient::new("canned spicy salmon or tuna", "13.2-4-oz."),
                    Ingredient::new("cup mayonnaise", "¼"),
                    Ingredient::new("Cooked sushi rice", "for filling"),
                    Ingredient::new("avocado, thinly sliced", "1"),
                    Ingredient::new("medium cucumber, cut into matchsticks", "½"),
                    Ingredient::new(
                        "Gochugaru (Korean red pepper powder) or other mild red pepper flakes",
                        "for serving",
                    ),
                ]),
                instructions: Some(vec![
                    InstructionStep::new(
                        1,
                        "Cut 5 square toasted nori sheets in half to make 10 rectangles. Place \
                         one 3.2-4-oz. can spicy salmon or tuna in a medium bowl, reserving any \
                         oil in can. Stir in ¼ cup mayonnaise and 1 Tbsp. reserved oil with a \
                         fork, breaking up and coating salmon.",
                    ),
                    InstructionStep::new(
                        2,
                        "Working one at a time, set nori sheets, shiny side down, on a surface \
                         with a long side closer to you. Moisten fingertips with water and \
                         spread about ¼ cup sushi rice over left half of nori, leaving a ½\" \
                         border along top, bottom, and left edges. Arrange a few slices of \
                         avocado and a few matchsticks of cucumber horizontally over rice. Top \
                         with about 1½ Tbsp. spicy salmon mixture.",
                    ),
                    InstructionStep::new(
                        3,
                        "Starting at bottom left corner, fold nori diagonally up and over \
                         filling so bottom edge lines up with right edge of nori. Continue to \
                         roll nori tightly into a cone shape. Moisten top right corner with a \
                         little water and press to seal. Serve hand rolls immediately with \
                         gochugaru for sprinkling over.",
                    ),
                ]),
                nutrition: Some(NutritionInfo {
                    calories: Some("300 kcal".to_string()),
                    protein: Some("20g".to_string()),
                    fat: Some("15g".to_string()),
                    carbohydrates: Some("25g".to_string()),
                }),
                tips: Some(vec![
                    "Make sure sushi rice is seasoned correctly.".to_string(),
                    "Don't overfill the rolls.".to_string(),
                ]),
                tags: Some(tags(&["Japanese", "Seafood", "Spicy", "Quick"])),
                prep_time: Some(25),
                // No cooking needed with canned salmon and pre-cooked rice
                cook_time: Some(0),
                servings: Some(10),
                difficulty_level: Some("Easy".to_string()),
                created_at: Some(created),
                updated_at: Some(created),
            },
            Recipe {
                id: GREEN_HERB_SALAD,
                user_id: Some(SAMPLE_USER),
                image_url: Some(
                    "https://assets.bonappetit.com/photos/61099e678a57511b0c7c339a/1:1/w_1920,c_limit/HF-Everything-Green-Herb-Salad.jpg"
                        .to_string(),
                ),
                name: "Everything Green Herb Salad".to_string(),
                ingredients: Some(vec![
                    Ingredient::new(
                        "mixed tender greens (such as Little Gem, butter lettuce, or baby romaine)",
                        "8 cups",
                    ),
                    Ingredient::new(
                        "mixed tender herbs (such as parsley, cilantro, dill, mint, tarragon, chives)",
                        "2 cups",
                    ),
                    Ingredient::new("avocado, thinly sliced", "1"),
                    Ingredient::new("shallot, very thinly sliced", "1 small"),
                    Ingredient::new("roasted unsalted sunflower seeds", "¼ cup"),
                    Ingredient::new("Extra-virgin olive oil", "3 Tbsp."),
                    Ingredient::new("Fresh lemon juice", "1 Tbsp."),
                    Ingredient::new("Kosher salt", "To taste"),
                    Ingredient::new("Freshly ground black pepper", "To taste"),
                ]),
                instructions: Some(vec![
                    InstructionStep::new(
                        1,
                        "Combine greens, herbs, avocado, shallot, and sunflower seeds in a large \
                         bowl.",
                    ),
                    InstructionStep::new(
                        2,
                        "Whisk oil and lemon juice in a small bowl; season vinaigrette with salt \
                         and pepper.",
                    ),
                    InstructionStep::new(
                        3,
                        "Drizzle vinaigrette over salad and toss gently to coat. Season salad \
                         with more salt and pepper if needed.",
                    ),
                ]),
                nutrition: Some(NutritionInfo {
                    calories: Some("250 kcal".to_string()),
                    protein: Some("5g".to_string()),
                    fat: Some("22g".to_string()),
                    carbohydrates: Some("10g".to_string()),
                }),
                tips: Some(vec![
                    "Use the freshest herbs you can find.".to_string(),
                    "Add other seeds like pumpkin or sesame if desired.".to_string(),
                ]),
                tags: Some(tags(&[
                    "Salad",
                    "Green",
                    "Healthy",
                    "Vegetarian",
                    "Gluten-Free",
                    "Quick",
                ])),
                prep_time: Some(15),
                cook_time: Some(0),
                servings: Some(4),
                difficulty_level: Some("Easy".to_string()),
                created_at: Some(created),
                updated_at: Some(created),
            },
            Recipe {
                id: BROWN_BUTTER_SCALLOPS,
                user_id: Some(SAMPLE_USER),
                image_url: Some(
                    "https://images.squarespace-cdn.com/content/v1/5cf6a3463c63f1000111c721/1619278241706-QGWN7S9ZEDK8Y322JFRS/Scallops+in+Brown+Butter+Caper+Sauce+-+Real+Simple+Gourmet"
                        .to_string(),
                ),
                name: "Scallops in Brown Butter & Caper Sauce".to_string(),
                ingredients: Some(vec![
                    Ingredient::new("large sea scallops, patted dry", "1 lb"),
                    Ingredient::new("Kosher salt", "½ tsp"),
                    Ingredient::new("Freshly ground black pepper", "¼ tsp"),
                    Ingredient::new("Unsalted butter", "4 Tbsp"),
                    Ingredient::new("Capers, drained", "2 Tbsp"),
                    Ingredient::new("Fresh lemon juice", "1 Tbsp"),
                    Ingredient::new("Fresh parsley, chopped", "2 Tbsp"),
                    Ingredient::new("Cooked pasta or crusty bread", "For serving"),
                ]),
                instructions: Some(vec![
                    InstructionStep::new(1, "Season scallops with salt and pepper."),
                    InstructionStep::new(
                        2,
                        "Melt 2 tablespoons butter in a large skillet over medium-high heat. Add \
                         scallops in a single layer (work in batches if needed) and cook until \
                         golden brown and cooked through, about 1-2 minutes per side.",
                    ),
                    InstructionStep::new(3, "Transfer scallops to a plate."),
                    InstructionStep::new(
                        4,
                        "Reduce heat to medium. Add remaining 2 tablespoons butter to the \
                         skillet. Cook, swirling occasionally, until butter melts, foams, then \
                         turns golden brown and smells nutty, about 2-3 minutes.",
                    ),
                    InstructionStep::new(5, "Stir in capers and lemon juice. Cook for 30 seconds."),
                    InstructionStep::new(
                        6,
                        "Return scallops to the skillet and toss to coat. Stir in parsley.",
                    ),
                    InstructionStep::new(7, "Serve immediately over pasta or with bread."),
                ]),
                nutrition: Some(NutritionInfo {
                    calories: Some("400 kcal".to_string()),
                    protein: Some("35g".to_string()),
                    fat: Some("25g".to_string()),
                    carbohydrates: Some("5g".to_string()),
                }),
                tips: Some(vec![
                    "Ensure scallops are very dry before searing for a good crust.".to_string(),
                    "Don't overcrowd the pan when searing.".to_string(),
                    "Watch the butter carefully to avoid burning.".to_string(),
                ]),
                tags: Some(tags(&["Seafood", "Scallops", "Quick", "Elegant"])),
                prep_time: Some(10),
                cook_time: Some(10),
                servings: Some(2),
                difficulty_level: Some("Medium".to_string()),
                created_at: Some(created),
                updated_at: Some(created),
            },
        ];

        let collections = vec![
            sample_collection(WEEKNIGHT_DINNERS, "Weeknight Dinners", created),
            sample_collection(HOLIDAY_BAKING, "Holiday Baking", created),
            sample_collection(VEGETARIAN_FAVORITES, "Vegetarian Favorites", created),
        ];

        let profile = Profile {
            id: SAMPLE_USER,
            email: Some("user@example.com".to_string()),
            full_name: Some("Jane Doe".to_string()),
            avatar_url: None,
            created_at: Some(created),
            updated_at: Some(created),
        };

        Self {
            recipes,
            collections,
            profile,
        }
    }
}

fn sample_collection(id: Uuid, name: &str, created: DateTime<Utc>) -> Collection {
    Collection {
        id,
        user_id: Some(SAMPLE_USER),
        name: name.to_string(),
        created_at: Some(created),
        updated_at: Some(created),
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// Parse a timestamp literal baked into the fixtures.
fn fixture_time(value: &str) -> DateTime<Utc> {
    value.parse().expect("fixture timestamps are valid RFC 3339")
}
