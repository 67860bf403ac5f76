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
use chrono::{DateTime, Utc};
use client_api::memory::DEMO_EMAIL;
use recipes::{NewRecipe, Recipe, User};
use sycamore::prelude::*;

use super::*;
use crate::api::HttpStore;
use crate::app_state::{get_state_handler, AppState};
use crate::components::{ConnectionStatus, RecipeList};
use crate::config::Config;

fn admin() -> User {
    User::new("1", "Admin", DEMO_EMAIL)
}

fn dashboard_state(recipes: Vec<Recipe>) -> AppState {
    let mut state = AppState::new();
    state.enter_dashboard(admin());
    state.recipes = recipes;
    state
}

fn config() -> Config {
    Config::new("http://localhost:1111/", "recipe-hub")
}

#[test]
fn test_landing_page_copy() {
    let html = sycamore::render_to_string(|cx| {
        let config = config();
        let store = HttpStore::new(&config);
        provide_context(cx, config);
        let sh = get_state_handler(cx, AppState::new(), store);
        view! {cx, LandingPage(sh=sh) }
    });
    assert!(html.contains("Recipe Hub"));
    assert!(html.contains("Find and Share Amazing Recipes"));
    assert!(html.contains(
        "Your personal cookbook in the cloud. Create, organize, and discover delicious recipes from a community of food lovers."
    ));
    assert!(html.contains("Try the Demo"));
    assert!(html.contains("http://localhost:1111/admin"));
}

#[test]
fn test_dashboard_header_copy() {
    let html = sycamore::render_to_string(|cx| {
        let config = config();
        let store = HttpStore::new(&config);
        provide_context(cx, config);
        let sh = get_state_handler(cx, dashboard_state(Vec::new()), store);
        view! {cx, DashboardHeader(sh=sh) }
    });
    assert!(html.contains("Welcome, Admin!"));
    assert!(html.contains("Your personal recipe dashboard."));
    assert!(html.contains("Logout"));
}

#[test]
fn test_empty_recipe_list() {
    let html = sycamore::render_to_string(|cx| {
        let store = HttpStore::new(&config());
        let sh = get_state_handler(cx, dashboard_state(Vec::new()), store);
        view! {cx, RecipeList(sh=sh) }
    });
    assert!(html.contains("Your Recipes"));
    assert!(html.contains("get started!"));
}

#[test]
fn test_recipe_list_renders_cards() {
    let lasagna = NewRecipe {
        prep_time: 30,
        cook_time: 60,
        ..NewRecipe::new("Lasagna")
    };
    let recipes = vec![
        Recipe::from_new("2", lasagna, Some(admin()), DateTime::<Utc>::default()),
        Recipe::from_new("3", NewRecipe::new("Soup"), None, DateTime::<Utc>::default()),
    ];
    let html = sycamore::render_to_string(|cx| {
        let store = HttpStore::new(&config());
        let sh = get_state_handler(cx, dashboard_state(recipes), store);
        view! {cx, RecipeList(sh=sh) }
    });
    assert!(html.contains("Lasagna"));
    assert!(html.contains("Prep: 30m"));
    assert!(html.contains("Cook: 60m"));
    assert!(html.contains("By Admin"));
    assert!(html.contains("By Unknown"));
    assert!(html.contains("badge badge-medium"));
    assert!(!html.contains("get started!"));
}

#[test]
fn test_connection_status_starts_disconnected() {
    let html = sycamore::render_to_string(|cx| {
        let store = HttpStore::new(&config());
        let sh = get_state_handler(cx, AppState::new(), store);
        view! {cx, ConnectionStatus(sh=sh) }
    });
    assert!(html.contains("API Disconnected"));
}
