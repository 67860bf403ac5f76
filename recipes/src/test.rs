// Copyright 2023 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::*;

use chrono::{Duration, TimeZone};
use serde_json::{from_str, json, to_value};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).single().unwrap() + Duration::seconds(secs)
}

fn recipe(id: &str, created: i64) -> Recipe {
    Recipe::from_new(id, NewRecipe::new(id), None, at(created))
}

#[test]
fn test_recipe_from_backend_json() {
    let recipe: Recipe = from_str(
        r#"{
            "id": 12,
            "title": "Lasagna",
            "description": "Layers of pasta",
            "ingredients": "noodles\nricotta",
            "instructions": "Bake it",
            "prepTime": 30,
            "cookTime": 60,
            "difficulty": "Hard",
            "photo": {"thumbnail": {"url": "https://example.com/l.jpg"}},
            "owner": {"id": "u-1", "name": "Admin", "email": "admin@manifest.build"},
            "createdAt": "2024-03-01T10:15:00.000Z",
            "updatedAt": "2024-03-01T10:15:00.000Z"
        }"#,
    )
    .expect("recipe json should parse");
    assert_eq!(recipe.id, "12");
    assert_eq!(recipe.prep_time, 30);
    assert_eq!(recipe.cook_time, 60);
    assert_eq!(recipe.difficulty, Difficulty::Hard);
    assert_eq!(recipe.thumbnail_url(), Some("https://example.com/l.jpg"));
    assert_eq!(recipe.owner_name(), "Admin");
    assert_eq!(
        recipe.created_at,
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap()
    );
}

#[test]
fn test_recipe_with_nulls_and_no_owner() {
    let recipe: Recipe = from_str(
        r#"{
            "id": "abc",
            "title": "Toast",
            "description": null,
            "prepTime": null,
            "difficulty": "Easy",
            "photo": null,
            "createdAt": "2024-03-01T10:15:00Z"
        }"#,
    )
    .expect("sparse recipe json should parse");
    assert_eq!(recipe.description, "");
    assert_eq!(recipe.ingredients, "");
    assert_eq!(recipe.prep_time, 0);
    assert_eq!(recipe.photo, None);
    assert_eq!(recipe.owner, None);
    assert_eq!(recipe.owner_name(), UNKNOWN_OWNER);
}

#[test]
fn test_owner_without_name_is_unknown() {
    let mut r = recipe("1", 0);
    r.owner = Some(User::new("1", "", "someone@example.com"));
    assert_eq!(r.owner_name(), "Unknown");
}

#[test]
fn test_new_recipe_serializes_times_as_integers() {
    let mut new = NewRecipe::new("Lasagna");
    new.prep_time = 30;
    new.cook_time = 60;
    let value = to_value(&new).unwrap();
    assert_eq!(value["prepTime"], json!(30));
    assert_eq!(value["cookTime"], json!(60));
    assert_eq!(value["difficulty"], json!("Medium"));
    assert!(value.get("prep_time").is_none());
}

#[test]
fn test_missing_fields() {
    assert_eq!(NewRecipe::new("  ").missing_fields(), vec!["title"]);
    assert!(NewRecipe::new("Soup").missing_fields().is_empty());
}

#[test]
fn test_difficulty_parse_and_display() {
    for d in Difficulty::ALL {
        assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
    }
    assert_eq!(
        "Impossible".parse::<Difficulty>(),
        Err(DraftError::UnknownDifficulty("Impossible".to_owned()))
    );
    assert_eq!(Difficulty::default(), Difficulty::Medium);
}

#[test]
fn test_parse_minutes() {
    assert_eq!(parse_minutes("prepTime", "30"), Ok(30));
    assert_eq!(parse_minutes("prepTime", "  45 min"), Ok(45));
    assert_eq!(parse_minutes("prepTime", "+5"), Ok(5));
    assert_eq!(parse_minutes("prepTime", "12.5"), Ok(12));
    for bad in ["", "abc", "-5", "99999999999"] {
        assert_eq!(
            parse_minutes("cookTime", bad),
            Err(DraftError::InvalidMinutes {
                field: "cookTime",
                value: bad.to_owned()
            }),
            "{:?} should not parse",
            bad
        );
    }
}

#[test]
fn test_draft_defaults() {
    let draft = RecipeDraft::default();
    assert_eq!(draft.prep_time, "30");
    assert_eq!(draft.cook_time, "60");
    assert_eq!(draft.difficulty, "Medium");
    assert!(draft.title.is_empty());
}

#[test]
fn test_draft_to_new_recipe() {
    let draft = RecipeDraft {
        title: "Lasagna".to_owned(),
        prep_time: "30".to_owned(),
        cook_time: "60".to_owned(),
        difficulty: "Hard".to_owned(),
        ..RecipeDraft::default()
    };
    let new = draft.to_new_recipe().expect("draft should coerce");
    assert_eq!(new.title, "Lasagna");
    assert_eq!(new.prep_time, 30);
    assert_eq!(new.cook_time, 60);
    assert_eq!(new.difficulty, Difficulty::Hard);
}

#[test]
fn test_draft_requires_title() {
    assert_eq!(
        RecipeDraft::default().to_new_recipe(),
        Err(DraftError::MissingField("title"))
    );
    let draft = RecipeDraft {
        title: "Stew".to_owned(),
        cook_time: "soon".to_owned(),
        ..RecipeDraft::default()
    };
    assert!(matches!(
        draft.to_new_recipe(),
        Err(DraftError::InvalidMinutes {
            field: "cookTime",
            ..
        })
    ));
}

#[test]
fn test_sort_newest_first() {
    let mut recipes = vec![recipe("a", 1), recipe("b", 3), recipe("c", 2), recipe("d", 3)];
    assert!(!is_newest_first(&recipes));
    sort_newest_first(&mut recipes);
    assert!(is_newest_first(&recipes));
    let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "d", "c", "a"]);
}
