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
//! The transitions of the application state machine.
//!
//! The app moves between [Screen::Loading], [Screen::Landing] and
//! [Screen::Dashboard]. Every change to [AppState] goes through one of the
//! transitions on [Shell].
use std::rc::Rc;

use client_api::{Backend, Error};
use futures::join;
use recipes::NewRecipe;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::app_state::{Screen, StateCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// Something the user should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn info<S: Into<String>>(message: S) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

/// A channel notices get delivered to.
pub trait Notify {
    fn notify(&self, notice: Notice);
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    #[error("backend connection failed: {0}")]
    Connectivity(String),
    #[error("login failed: {0}")]
    Auth(Error),
    #[error("failed to load recipes: {0}")]
    Fetch(Error),
    #[error("error creating recipe: {0}")]
    Create(Error),
    #[error("{event} is not valid on the {screen:?} screen")]
    OutOfState { event: &'static str, screen: Screen },
}

impl Failure {
    /// What, if anything, the user should see for this failure.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Failure::Auth(_) => Some(Notice::error(
                "Login failed. Please check your credentials.",
            )),
            Failure::Create(err) => Some(Notice::error(format!("Error creating recipe: {}", err))),
            Failure::Connectivity(_) | Failure::Fetch(_) | Failure::OutOfState { .. } => None,
        }
    }
}

fn require<S: StateCell>(state: &S, event: &'static str, expected: Screen) -> Result<(), Failure> {
    let screen = state.screen();
    if screen == expected {
        Ok(())
    } else {
        Err(Failure::OutOfState { event, screen })
    }
}

pub struct Shell<B> {
    backend: Rc<B>,
}

impl<B> Clone for Shell<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
        }
    }
}

impl<B: Backend> Shell<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    pub fn backend(&self) -> &B {
        self.backend.as_ref()
    }

    /// Probe the backend and pick the first real screen. The screen is chosen
    /// as soon as the user lookup finishes; the probe only sets `connected`.
    #[instrument(skip_all)]
    pub async fn init<S: StateCell>(&self, state: &S) -> Result<(), Failure> {
        require(state, "init", Screen::Loading)?;
        info!("Initializing application");
        let probe = async {
            let status = self.backend.test_connection().await;
            state.update(|s| s.connected = status.success);
            status
        };
        let lookup = async {
            match self.backend.get_current_user().await {
                Ok(user) => {
                    info!(email = %user.email, "User is logged in");
                    state.update(|s| {
                        if s.screen == Screen::Loading {
                            s.enter_dashboard(user);
                        }
                    });
                }
                Err(err) => {
                    info!(%err, "No active user session");
                    state.update(|s| {
                        if s.screen == Screen::Loading {
                            s.enter_landing();
                        }
                    });
                }
            }
        };
        let (status, ()) = join!(probe, lookup);
        if status.success {
            Ok(())
        } else {
            Err(Failure::Connectivity(
                status.error.unwrap_or_else(|| "unknown error".to_owned()),
            ))
        }
    }

    // NOTE(jwall): We do **not** want to record the password in our logs.
    #[instrument(skip(self, state, password))]
    pub async fn login<S: StateCell>(
        &self,
        state: &S,
        email: &str,
        password: &str,
    ) -> Result<(), Failure> {
        require(state, "login", Screen::Landing)?;
        self.backend
            .login(email, password)
            .await
            .map_err(Failure::Auth)?;
        let user = match self.backend.get_current_user().await {
            Ok(user) => user,
            Err(err) => {
                // Don't keep a session the UI never showed.
                self.backend.logout().await;
                return Err(Failure::Auth(err));
            }
        };
        info!("Login succeeded");
        state.update(|s| {
            if s.screen == Screen::Landing {
                s.enter_dashboard(user);
            }
        });
        Ok(())
    }

    /// Drop the session. This always lands on the landing screen.
    #[instrument(skip_all)]
    pub async fn logout<S: StateCell>(&self, state: &S) {
        self.backend.logout().await;
        state.update(|s| s.enter_landing());
        info!("Logged out");
    }

    #[instrument(skip_all)]
    pub async fn load_recipes<S: StateCell>(&self, state: &S) -> Result<(), Failure> {
        require(state, "load_recipes", Screen::Dashboard)?;
        let recipes = self.backend.list_recipes().await.map_err(Failure::Fetch)?;
        debug!(count = recipes.len(), "Loaded recipes");
        state.update(|s| {
            if s.screen == Screen::Dashboard {
                s.recipes = recipes;
            } else {
                debug!("Screen changed while loading so dropping the recipes");
            }
        });
        Ok(())
    }

    /// Create a recipe then refetch the whole list so we pick up the fields
    /// the backend assigned. Returns the notice confirming the save.
    #[instrument(skip_all, fields(title = %recipe.title))]
    pub async fn create_recipe<S: StateCell>(
        &self,
        state: &S,
        recipe: NewRecipe,
    ) -> Result<Notice, Failure> {
        require(state, "create_recipe", Screen::Dashboard)?;
        let created = self
            .backend
            .create_recipe(&recipe)
            .await
            .map_err(Failure::Create)?;
        info!(id = %created.id, "Created recipe");
        if let Err(failure) = self.load_recipes(state).await {
            warn!(%failure, "Unable to refresh recipes after create");
        }
        Ok(Notice::info(format!("Saved \"{}\".", created.title)))
    }
}
