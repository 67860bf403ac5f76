// Copyright 2023 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use recipes::{DraftError, NewRecipe, Recipe, User};

pub mod memory;

pub use memory::MemoryBackend;

/// Collection slug the recipes live under.
pub const RECIPE_COLLECTION: &'static str = "recipes";
/// Authenticable entity slug for users.
pub const USER_ENTITY: &'static str = "users";
/// Relation name that joins a recipe to its owning user.
pub const OWNER_RELATION: &'static str = "owner";
pub const CREATED_AT: &'static str = "createdAt";

pub const API_PREFIX: &'static str = "/api";
pub const HEALTH_PATH: &'static str = "/health";
pub const ADMIN_PATH: &'static str = "/admin";

pub fn login_path(entity: &str) -> String {
    format!("/auth/{}/login", entity)
}

pub fn me_path(entity: &str) -> String {
    format!("/auth/{}/me", entity)
}

pub fn collection_path(slug: &str) -> String {
    format!("/collections/{}", slug)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Validation(String),
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
}

impl Error {
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        Error::BackendUnavailable(msg.into())
    }
}

impl From<DraftError> for Error {
    fn from(err: DraftError) -> Self {
        Error::Validation(err.to_string())
    }
}

/// Result of a connectivity probe.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConnectionStatus {
    pub fn connected() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed<S: Into<String>>(err: S) -> Self {
        Self {
            success: false,
            error: Some(err.into()),
        }
    }
}

/// The operations this client needs from a recipe backend.
#[async_trait(?Send)]
pub trait Backend {
    /// Probe the backend. This never fails; failures are reported in the status.
    async fn test_connection(&self) -> ConnectionStatus;

    async fn get_current_user(&self) -> Result<User, Error>;

    async fn login(&self, email: &str, password: &str) -> Result<(), Error>;

    /// Drop the current session. Best effort.
    async fn logout(&self);

    /// Every recipe, newest first, with the owner joined in.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, Error>;

    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, Error>;
}

#[async_trait(?Send)]
impl<B> Backend for Rc<B>
where
    B: Backend + ?Sized,
{
    async fn test_connection(&self) -> ConnectionStatus {
        self.as_ref().test_connection().await
    }

    async fn get_current_user(&self) -> Result<User, Error> {
        self.as_ref().get_current_user().await
    }

    async fn login(&self, email: &str, password: &str) -> Result<(), Error> {
        self.as_ref().login(email, password).await
    }

    async fn logout(&self) {
        self.as_ref().logout().await
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, Error> {
        self.as_ref().list_recipes().await
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, Error> {
        self.as_ref().create_recipe(recipe).await
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// One page of a collection listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paginator<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub per_page: u32,
}

impl<T> Paginator<T> {
    /// The page to request after `requested`, if any. This trusts only the
    /// page we asked for and `lastPage` so a backend that ignores `page`
    /// still ends the walk.
    pub fn next_page(&self, requested: u32) -> Option<u32> {
        if self.data.is_empty() || requested >= self.last_page {
            None
        } else {
            Some(requested + 1)
        }
    }
}

/// The backend calls a status code gets mapped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Login,
    CurrentUser,
    ListRecipes,
    CreateRecipe,
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map a non success status for `call` to an [Error]. `message` is whatever
/// the backend said in the body.
pub fn error_for_status(call: Call, status: u16, message: String) -> Error {
    match (call, status) {
        (Call::Login, 400 | 401 | 403) => Error::InvalidCredentials,
        (Call::CreateRecipe, 400) => Error::Validation(message),
        (Call::CurrentUser | Call::ListRecipes | Call::CreateRecipe, 401 | 403) => {
            Error::NotAuthenticated
        }
        _ => Error::unavailable(message),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Query parameters for a collection `find`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FindQuery {
    relations: Vec<String>,
    order_by: Option<(String, Order)>,
    page: Option<u32>,
    per_page: Option<u32>,
}

impl FindQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// The listing the dashboard shows: owners joined, newest first.
    pub fn recipes_newest_first() -> Self {
        Self::new()
            .include(OWNER_RELATION)
            .order_by(CREATED_AT, Order::Desc)
    }

    pub fn include<S: Into<String>>(mut self, relation: S) -> Self {
        self.relations.push(relation.into());
        self
    }

    pub fn order_by<S: Into<String>>(mut self, field: S, order: Order) -> Self {
        self.order_by = Some((field.into(), order));
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if !self.relations.is_empty() {
            params.push(format!("relations={}", self.relations.join(",")));
        }
        if let Some((field, order)) = &self.order_by {
            params.push(format!("orderBy={}", field));
            params.push(format!("order={}", order.as_str()));
        }
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if let Some(per_page) = self.per_page {
            params.push(format!("perPage={}", per_page));
        }
        params.join("&")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub property: String,
    #[serde(default)]
    pub constraints: BTreeMap<String, String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MessageText {
    One(String),
    Many(Vec<String>),
}

/// The error payloads the backend sends back on a failed request.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ErrorBody {
    Validation(Vec<ValidationFailure>),
    Message { message: MessageText },
}

impl ErrorBody {
    pub fn message(&self) -> String {
        match self {
            ErrorBody::Validation(failures) => failures
                .iter()
                .flat_map(|f| {
                    if f.constraints.is_empty() {
                        vec![format!("{} is invalid", f.property)]
                    } else {
                        f.constraints.values().cloned().collect()
                    }
                })
                .collect::<Vec<String>>()
                .join(", "),
            ErrorBody::Message {
                message: MessageText::One(msg),
            } => msg.clone(),
            ErrorBody::Message {
                message: MessageText::Many(msgs),
            } => msgs.join(", "),
        }
    }
}

#[cfg(test)]
mod test;
