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
//! An in process [Backend] that keeps everything in memory.
use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};

use recipes::{sort_newest_first, NewRecipe, Recipe, User};

use crate::{Backend, ConnectionStatus, Error};

pub const DEMO_EMAIL: &'static str = "admin@manifest.build";
pub const DEMO_PASSWORD: &'static str = "admin";

struct Account {
    user: User,
    password: String,
}

// Recipes are stored with just the owner id. The owner is joined in on list.
struct StoredRecipe {
    recipe: Recipe,
    owner_id: String,
}

pub struct MemoryBackend {
    accounts: RefCell<Vec<Account>>,
    recipes: RefCell<Vec<StoredRecipe>>,
    session: RefCell<Option<String>>,
    available: Cell<bool>,
    next_id: Cell<u64>,
    epoch: DateTime<Utc>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            accounts: RefCell::new(Vec::new()),
            recipes: RefCell::new(Vec::new()),
            session: RefCell::new(None),
            available: Cell::new(true),
            next_id: Cell::new(1),
            epoch: DateTime::<Utc>::default(),
        }
    }

    /// A backend with the demo admin account registered.
    pub fn demo() -> Self {
        Self::new().with_user("Admin", DEMO_EMAIL, DEMO_PASSWORD)
    }

    pub fn with_user<N, E, P>(self, name: N, email: E, password: P) -> Self
    where
        N: Into<String>,
        E: Into<String>,
        P: Into<String>,
    {
        let id = self.take_id();
        self.accounts.borrow_mut().push(Account {
            user: User::new(id.to_string(), name, email),
            password: password.into(),
        });
        self
    }

    /// Toggle whether the backend answers at all.
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.borrow().len()
    }

    fn take_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn check_available(&self) -> Result<(), Error> {
        if self.available.get() {
            Ok(())
        } else {
            Err(Error::unavailable("memory backend is offline"))
        }
    }

    fn session_user(&self) -> Option<User> {
        let session = self.session.borrow();
        let id = session.as_ref()?;
        self.find_user(id)
    }

    fn find_user(&self, id: &str) -> Option<User> {
        self.accounts
            .borrow()
            .iter()
            .find(|a| a.user.id == id)
            .map(|a| a.user.clone())
    }
}

#[async_trait(?Send)]
impl Backend for MemoryBackend {
    async fn test_connection(&self) -> ConnectionStatus {
        match self.check_available() {
            Ok(()) => ConnectionStatus::connected(),
            Err(err) => ConnectionStatus::failed(err.to_string()),
        }
    }

    async fn get_current_user(&self) -> Result<User, Error> {
        self.check_available()?;
        self.session_user().ok_or(Error::NotAuthenticated)
    }

    #[instrument(skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> Result<(), Error> {
        self.check_available()?;
        let id = self
            .accounts
            .borrow()
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(|a| a.user.id.clone())
            .ok_or(Error::InvalidCredentials)?;
        debug!(user_id = %id, "session started");
        *self.session.borrow_mut() = Some(id);
        Ok(())
    }

    async fn logout(&self) {
        self.session.borrow_mut().take();
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, Error> {
        self.check_available()?;
        let mut list: Vec<Recipe> = self
            .recipes
            .borrow()
            .iter()
            .map(|stored| {
                let mut recipe = stored.recipe.clone();
                recipe.owner = self.find_user(&stored.owner_id);
                recipe
            })
            .collect();
        sort_newest_first(&mut list);
        Ok(list)
    }

    #[instrument(skip_all, fields(title = %recipe.title))]
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, Error> {
        self.check_available()?;
        let owner = self.session_user().ok_or(Error::NotAuthenticated)?;
        let missing = recipe.missing_fields();
        if !missing.is_empty() {
            return Err(Error::Validation(
                missing
                    .iter()
                    .map(|f| format!("{} should not be empty", f))
                    .collect::<Vec<String>>()
                    .join(", "),
            ));
        }
        let id = self.take_id();
        // Every create ticks the clock so createdAt is strictly increasing.
        let created_at = self.epoch + Duration::seconds(id as i64);
        let created = Recipe::from_new(
            id.to_string(),
            recipe.clone(),
            Some(owner.clone()),
            created_at,
        );
        self.recipes.borrow_mut().push(StoredRecipe {
            recipe: Recipe {
                owner: None,
                ..created.clone()
            },
            owner_id: owner.id,
        });
        Ok(created)
    }
}
