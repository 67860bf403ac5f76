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
pub mod draft;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub use draft::{parse_minutes, DraftError, RecipeDraft};

/// Name shown for a recipe whose owner was not joined in.
pub const UNKNOWN_OWNER: &'static str = "Unknown";

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

// Backends disagree on whether ids are numbers or strings so we accept both.
fn id_from_int_or_str<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(i) => i.to_string(),
        RawId::Str(s) => s,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An authenticated user as reported by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    #[serde(deserialize_with = "id_from_int_or_str")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new<I, N, E>(id: I, name: N, email: E) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        E: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, w: &mut fmt::Formatter<'_>) -> fmt::Result {
        w.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(DraftError::UnknownDifficulty(other.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub thumbnail: Thumbnail,
}

impl Photo {
    pub fn thumbnail_url(&self) -> &str {
        self.thumbnail.url.as_str()
    }
}

/// A Recipe as stored by the backend. The `id`, `owner` and `created_at` fields
/// are assigned server side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(deserialize_with = "id_from_int_or_str")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prep_time: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cook_time: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Build the stored form of a new recipe.
    pub fn from_new<S: Into<String>>(
        id: S,
        new: NewRecipe,
        owner: Option<User>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let NewRecipe {
            title,
            description,
            ingredients,
            instructions,
            prep_time,
            cook_time,
            difficulty,
        } = new;
        Self {
            id: id.into(),
            title,
            description,
            ingredients,
            instructions,
            prep_time,
            cook_time,
            difficulty,
            photo: None,
            owner,
            created_at,
        }
    }

    pub fn owner_name(&self) -> &str {
        match &self.owner {
            Some(owner) if !owner.name.is_empty() => owner.name.as_str(),
            _ => UNKNOWN_OWNER,
        }
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.photo.as_ref().map(|p| p.thumbnail_url())
    }
}

/// The payload sent to the backend to create a Recipe.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub difficulty: Difficulty,
}

impl NewRecipe {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Names of the required fields that are missing from this payload.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        missing
    }
}

/// Sort recipes newest first. Recipes with the same timestamp keep their
/// relative order.
pub fn sort_newest_first(recipes: &mut Vec<Recipe>) {
    recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

pub fn is_newest_first(recipes: &[Recipe]) -> bool {
    recipes
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at)
}

#[cfg(test)]
mod test;
