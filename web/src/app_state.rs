// Copyright 2022 Jeremy Wall
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
use std::cell::RefCell;
use std::fmt::{self, Debug};

use recipes::{NewRecipe, Recipe, User};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::{error, instrument, warn};

use crate::api::HttpStore;
use crate::components::toast::Toaster;
use crate::shell::{Failure, Notice, Notify, Shell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Landing,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    pub user: Option<User>,
    pub recipes: Vec<Recipe>,
    pub connected: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Loading,
            user: None,
            recipes: Vec::new(),
            connected: false,
        }
    }

    pub fn enter_dashboard(&mut self, user: User) {
        self.user = Some(user);
        self.screen = Screen::Dashboard;
    }

    pub fn enter_landing(&mut self) {
        self.user = None;
        self.recipes = Vec::new();
        self.screen = Screen::Landing;
    }
}

/// Somewhere the [AppState] lives. Transitions read and write through this so
/// the result of an awaited call lands on the latest state.
pub trait StateCell {
    fn with<R, F: FnOnce(&AppState) -> R>(&self, f: F) -> R;

    fn update<F: FnOnce(&mut AppState)>(&self, f: F);

    fn screen(&self) -> Screen {
        self.with(|state| state.screen)
    }
}

impl StateCell for Signal<AppState> {
    fn with<R, F: FnOnce(&AppState) -> R>(&self, f: F) -> R {
        f(self.get_untracked().as_ref())
    }

    fn update<F: FnOnce(&mut AppState)>(&self, f: F) {
        let mut copy = self.get_untracked().as_ref().clone();
        f(&mut copy);
        self.set(copy);
    }
}

impl StateCell for RefCell<AppState> {
    fn with<R, F: FnOnce(&AppState) -> R>(&self, f: F) -> R {
        f(&self.borrow())
    }

    fn update<F: FnOnce(&mut AppState)>(&self, f: F) {
        f(&mut self.borrow_mut())
    }
}

pub enum Message {
    Init,
    Login(String, String),
    Logout,
    LoadRecipes,
    CreateRecipe(NewRecipe, Option<Box<dyn FnOnce()>>),
}

impl Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Init => write!(f, "Init"),
            Message::Login(email, _) => f.debug_tuple("Login").field(email).finish(),
            Message::Logout => write!(f, "Logout"),
            Message::LoadRecipes => write!(f, "LoadRecipes"),
            Message::CreateRecipe(recipe, _) => f
                .debug_tuple("CreateRecipe")
                .field(&recipe.title)
                .finish(),
        }
    }
}

pub struct StateMachine(Shell<HttpStore>);

impl StateMachine {
    async fn run<'ctx>(
        shell: Shell<HttpStore>,
        msg: Message,
        original: &'ctx Signal<AppState>,
    ) -> Result<Option<Notice>, Failure> {
        match msg {
            Message::Init => shell.init(original).await.map(|_| None),
            Message::Login(email, password) => shell
                .login(original, &email, &password)
                .await
                .map(|_| None),
            Message::Logout => {
                shell.logout(original).await;
                Ok(None)
            }
            Message::LoadRecipes => shell.load_recipes(original).await.map(|_| None),
            Message::CreateRecipe(recipe, callback) => {
                let notice = shell.create_recipe(original, recipe).await?;
                if let Some(f) = callback {
                    f();
                }
                Ok(Some(notice))
            }
        }
    }
}

impl MessageMapper<Message, AppState> for StateMachine {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<AppState>) {
        let shell = self.0.clone();
        spawn_local_scoped(cx, async move {
            match Self::run(shell, msg, original).await {
                Ok(Some(notice)) => Toaster::new(cx).notify(notice),
                Ok(None) => (),
                Err(failure) => match failure.notice() {
                    Some(notice) => {
                        error!(%failure, "Action failed");
                        Toaster::new(cx).notify(notice);
                    }
                    None => warn!(%failure, "Action failed quietly"),
                },
            }
        });
    }
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, StateMachine, AppState, Message>;

pub fn get_state_handler<'ctx>(
    cx: Scope<'ctx>,
    initial: AppState,
    store: HttpStore,
) -> StateHandler<'ctx> {
    Handler::new(cx, initial, StateMachine(Shell::new(store)))
}
