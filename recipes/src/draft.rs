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
use thiserror::Error;

use crate::{Difficulty, NewRecipe};

pub const DEFAULT_PREP_TIME: &'static str = "30";
pub const DEFAULT_COOK_TIME: &'static str = "60";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} should not be empty")]
    MissingField(&'static str),
    #[error("{field} must be a whole number of minutes, got {value:?}")]
    InvalidMinutes { field: &'static str, value: String },
    #[error("unknown difficulty {0:?}")]
    UnknownDifficulty(String),
}

/// Parse a minute count the way an html number input is usually coerced.
///
/// Leading whitespace and an optional `+` are skipped, then the leading run of
/// digits is read and anything after it is ignored. So `" 45 min"` is 45.
pub fn parse_minutes(field: &'static str, value: &str) -> Result<u32, DraftError> {
    let invalid = || DraftError::InvalidMinutes {
        field,
        value: value.to_owned(),
    };
    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return Err(invalid());
    }
    unsigned[..digits_end].parse::<u32>().map_err(|_| invalid())
}

/// The in-progress state of the create recipe form. Every field holds the
/// text as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: String,
    pub cook_time: String,
    pub difficulty: String,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            ingredients: String::new(),
            instructions: String::new(),
            prep_time: DEFAULT_PREP_TIME.to_owned(),
            cook_time: DEFAULT_COOK_TIME.to_owned(),
            difficulty: Difficulty::default().to_string(),
        }
    }
}

impl RecipeDraft {
    pub fn to_new_recipe(&self) -> Result<NewRecipe, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingField("title"));
        }
        Ok(NewRecipe {
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            prep_time: parse_minutes("prepTime", &self.prep_time)?,
            cook_time: parse_minutes("cookTime", &self.cook_time)?,
            difficulty: self.difficulty.parse()?,
        })
    }
}
