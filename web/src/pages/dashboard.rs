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
use sycamore::prelude::*;
use tracing::info;

use crate::app_state::{Message, StateHandler};
use crate::components::{AdminLink, RecipeForm, RecipeList};
use crate::pages::PageProps;

#[component]
pub fn DashboardHeader<'ctx, G: Html>(cx: Scope<'ctx>, props: PageProps<'ctx>) -> View<G> {
    let PageProps { sh } = props;
    let greeting = sh.get_selector(cx, |state| {
        let name = state
            .get()
            .user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_default();
        format!("Welcome, {}!", name)
    });
    view! {cx,
        header(class="app-header") {
            div {
                h1 { (greeting.get()) }
                p(class="subtitle") { "Your personal recipe dashboard." }
            }
            nav(class="header-actions") {
                AdminLink()
                button(class="secondary", on:click=move |_| {
                    info!("Logout requested");
                    sh.dispatch(cx, Message::Logout);
                }) { "Logout" }
            }
        }
    }
}

#[component]
pub fn DashboardPage<'ctx, G: Html>(cx: Scope<'ctx>, props: PageProps<'ctx>) -> View<G> {
    let PageProps { sh } = props;
    sh.dispatch(cx, Message::LoadRecipes);
    let form_visible = create_ref(cx, create_rc_signal(false));
    let toggle_label = create_memo(cx, move || {
        if *form_visible.get() {
            "Cancel"
        } else {
            "+ Add New Recipe"
        }
    });
    view! {cx,
        DashboardHeader(sh=sh)
        main(class="dashboard") {
            div(class="dashboard-actions") {
                button(class="add-recipe", on:click=move |_| {
                    form_visible.set(!*form_visible.get_untracked());
                }) { (toggle_label.get()) }
            }
            (if *form_visible.get() {
                view! {cx, RecipeForm(sh=sh, visible=form_visible.clone()) }
            } else {
                View::empty()
            })
            RecipeList(sh=sh)
        }
    }
}
