// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Decoding contract: snake_case external keys, required-field failures,
//! and the round-trip law.

use wisebites::models::{Collection, Profile, Recipe, RecipeCollection};

const RECIPE_JSON: &str = r#"{
    "id": "7e2c1f4a-9b3d-4c21-8f5e-d0a61b7c9e10",
    "user_id": "0b7d4e92-86f3-4c5a-9e08-1a2d6c4f8b37",
    "image_url": "https://example.com/spaghetti.jpg",
    "name": "Sample Spaghetti Recipe",
    "ingredients": [
        {"name": "Spaghetti", "quantity": "200g"},
        {"name": "Garlic", "quantity": "2 cloves"}
    ],
    "instructions": [
        {"step_number": 1, "description": "Cook spaghetti."},
        {"step_number": 2, "description": "Toss with sauce."}
    ],
    "nutrition": {"calories": "550 kcal", "protein": "15g", "fat": "20g", "carbohydrates": "75g"},
    "tips": ["Add red pepper flakes for heat."],
    "tags": ["Pasta", "Italian"],
    "prep_time": 10,
    "cook_time": 20,
    "servings": 2,
    "difficulty_level": "Easy",
    "created_at": "2024-05-01T12:00:00Z",
    "updated_at": "2024-05-02T08:30:00Z"
}"#;

#[test]
fn recipe_decodes_every_external_key() {
    let recipe = Recipe::from_json(RECIPE_JSON).expect("well-formed payload decodes");

    assert_eq!(recipe.name, "Sample Spaghetti Recipe");
    assert_eq!(
        recipe.image_url.as_deref(),
        Some("https://example.com/spaghetti.jpg")
    );
    assert_eq!(recipe.prep_time, Some(10));
    assert_eq!(recipe.cook_time, Some(20));
    assert_eq!(recipe.servings, Some(2));
    assert_eq!(recipe.difficulty_level.as_deref(), Some("Easy"));

    let ingredients = recipe.ingredients.as_ref().expect("ingredients decoded");
    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[0].name, "Spaghetti");
    assert_eq!(ingredients[0].quantity, "200g");

    let instructions = recipe.instructions.as_ref().expect("instructions decoded");
    assert_eq!(instructions[1].step_number, 2);
    assert_eq!(instructions[1].description, "Toss with sauce.");

    let nutrition = recipe.nutrition.as_ref().expect("nutrition decoded");
    assert_eq!(nutrition.calories.as_deref(), Some("550 kcal"));

    assert!(recipe.created_at.is_some());
    assert!(recipe.updated_at.is_some());
}

#[test]
fn recipe_round_trips_through_external_representation() {
    let original = Recipe::from_json(RECIPE_JSON).expect("decodes");
    let encoded = serde_json::to_string(&original).expect("encodes");
    let reparsed = Recipe::from_json(&encoded).expect("re-decodes");

    assert_eq!(reparsed.id, original.id);
    assert_eq!(reparsed.user_id, original.user_id);
    assert_eq!(reparsed.image_url, original.image_url);
    assert_eq!(reparsed.name, original.name);
    assert_eq!(reparsed.tips, original.tips);
    assert_eq!(reparsed.tags, original.tags);
    assert_eq!(reparsed.prep_time, original.prep_time);
    assert_eq!(reparsed.cook_time, original.cook_time);
    assert_eq!(reparsed.servings, original.servings);
    assert_eq!(reparsed.difficulty_level, original.difficulty_level);
    assert_eq!(reparsed.created_at, original.created_at);
    assert_eq!(reparsed.updated_at, original.updated_at);

    // Row contents survive; row ids are per-instance and regenerate.
    let before = original.ingredients.as_ref().unwrap();
    let after = reparsed.ingredients.as_ref().unwrap();
    assert_eq!(after.len(), before.len());
    for (a, b) in after.iter().zip(before) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.quantity, b.quantity);
        assert_ne!(a.id, b.id);
    }

    let steps_before = original.instructions.as_ref().unwrap();
    let steps_after = reparsed.instructions.as_ref().unwrap();
    for (a, b) in steps_after.iter().zip(steps_before) {
        assert_eq!(a.step_number, b.step_number);
        assert_eq!(a.description, b.description);
        assert_ne!(a.id, b.id);
    }
}

#[test]
fn row_ids_are_never_serialized() {
    let recipe = Recipe::from_json(RECIPE_JSON).expect("decodes");
    let value = serde_json::to_value(&recipe).expect("encodes");

    let ingredient = &value["ingredients"][0];
    assert!(ingredient.get("id").is_none());
    let step = &value["instructions"][0];
    assert!(step.get("id").is_none());
}

#[test]
fn recipe_with_only_required_fields_decodes_to_absent_options() {
    let recipe = Recipe::from_json(
        r#"{"id": "7e2c1f4a-9b3d-4c21-8f5e-d0a61b7c9e10", "name": "Toast"}"#,
    )
    .expect("minimal payload decodes");

    assert_eq!(recipe.name, "Toast");
    assert!(recipe.user_id.is_none());
    assert!(recipe.ingredients.is_none());
    assert!(recipe.instructions.is_none());
    assert!(recipe.nutrition.is_none());
    assert!(recipe.tags.is_none());
    assert!(recipe.prep_time.is_none());
    assert!(recipe.created_at.is_none());
}

#[test]
fn recipe_missing_name_fails_with_entity_and_field() {
    let err = Recipe::from_json(r#"{"id": "7e2c1f4a-9b3d-4c21-8f5e-d0a61b7c9e10"}"#).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Recipe"), "got: {message}");
    assert_eq!(err.entity, "Recipe");
    assert!(err.source.to_string().contains("name"), "got: {}", err.source);
}

#[test]
fn recipe_missing_id_fails() {
    let err = Recipe::from_json(r#"{"name": "Toast"}"#).unwrap_err();
    assert_eq!(err.entity, "Recipe");
    assert!(err.source.to_string().contains("id"));
}

#[test]
fn recipe_wrong_value_shape_fails() {
    let err = Recipe::from_json(
        r#"{"id": "7e2c1f4a-9b3d-4c21-8f5e-d0a61b7c9e10", "name": "Toast", "prep_time": "ten"}"#,
    )
    .unwrap_err();
    assert_eq!(err.entity, "Recipe");
}

#[test]
fn decoding_accepts_unvalidated_values() {
    // Shape-only decoding: negative times and empty names are not rejected.
    let recipe = Recipe::from_json(
        r#"{"id": "7e2c1f4a-9b3d-4c21-8f5e-d0a61b7c9e10", "name": "", "prep_time": -5}"#,
    )
    .expect("shape-valid payload decodes");
    assert_eq!(recipe.name, "");
    assert_eq!(recipe.prep_time, Some(-5));
}

#[test]
fn collection_round_trips_and_requires_name() {
    let collection = Collection::from_json(
        r#"{
            "id": "2f6a0d8c-71b5-4e92-a647-3d9c85e1b20f",
            "user_id": "0b7d4e92-86f3-4c5a-9e08-1a2d6c4f8b37",
            "name": "Weeknight Dinners",
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-01T12:00:00Z"
        }"#,
    )
    .expect("decodes");
    let encoded = serde_json::to_string(&collection).expect("encodes");
    let reparsed = Collection::from_json(&encoded).expect("re-decodes");
    assert_eq!(reparsed.id, collection.id);
    assert_eq!(reparsed.name, "Weeknight Dinners");
    assert_eq!(reparsed.created_at, collection.created_at);

    let err =
        Collection::from_json(r#"{"id": "2f6a0d8c-71b5-4e92-a647-3d9c85e1b20f"}"#).unwrap_err();
    assert_eq!(err.entity, "Collection");
    assert!(err.source.to_string().contains("name"));
}

#[test]
fn profile_requires_only_id() {
    let profile = Profile::from_json(r#"{"id": "0b7d4e92-86f3-4c5a-9e08-1a2d6c4f8b37"}"#)
        .expect("id-only profile decodes");
    assert!(profile.email.is_none());
    assert!(profile.full_name.is_none());

    let err = Profile::from_json(r#"{"email": "user@example.com"}"#).unwrap_err();
    assert_eq!(err.entity, "Profile");
    assert!(err.source.to_string().contains("id"));
}

#[test]
fn recipe_collection_join_record_decodes() {
    let join = RecipeCollection::from_json(
        r#"{
            "id": "8d3e5b07-c9a2-4f14-b8d6-05f1e7a3c492",
            "collection_id": "2f6a0d8c-71b5-4e92-a647-3d9c85e1b20f",
            "recipe_id": "7e2c1f4a-9b3d-4c21-8f5e-d0a61b7c9e10",
            "created_at": "2024-05-01T12:00:00Z"
        }"#,
    )
    .expect("decodes");
    assert_ne!(join.collection_id, join.recipe_id);

    let err = RecipeCollection::from_json(r#"{"id": "8d3e5b07-c9a2-4f14-b8d6-05f1e7a3c492"}"#)
        .unwrap_err();
    assert_eq!(err.entity, "RecipeCollection");
}
