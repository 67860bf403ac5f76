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
use sycamore::prelude::*;
use tracing::{debug, instrument};

use crate::app_state::StateHandler;
use crate::components::RecipeCard;

#[derive(Prop)]
pub struct RecipeListProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn RecipeList<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeListProps<'ctx>) -> View<G> {
    let RecipeListProps { sh } = props;
    let recipes = sh.get_selector(cx, |state| state.get().recipes.clone());
    let is_empty = create_memo(cx, move || recipes.get().is_empty());
    view! {cx,
        section(class="recipe-list") {
            h2 { "Your Recipes" }
            (if *is_empty.get() {
                view! {cx,
                    div(class="empty-state") {
                        p { "You haven't created any recipes yet." }
                        p { "Click '+ Add New Recipe' to get started!" }
                    }
                }
            } else {
                view! {cx,
                    div(class="recipe-grid") {
                        Keyed(
                            iterable=recipes,
                            view=|cx, recipe| {
                                debug!(id = %recipe.id, "Rendering recipe");
                                view! {cx, RecipeCard(recipe=recipe) }
                            },
                            key=|recipe| recipe.id.clone(),
                        )
                    }
                }
            })
        }
    }
}
