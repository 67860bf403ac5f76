// Copyright 2022 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use tracing::{debug, error};
use web_sys::Event;

use recipes::{Difficulty, RecipeDraft};

use crate::app_state::{Message, StateHandler};
use crate::components::toast::Toaster;
use crate::shell::{Failure, Notify};

/// One signal per form field so each can be bound to its input. These outlive
/// the form's scope since a create can finish after the form is closed.
#[derive(Clone)]
struct DraftSignals {
    title: RcSignal<String>,
    description: RcSignal<String>,
    ingredients: RcSignal<String>,
    instructions: RcSignal<String>,
    prep_time: RcSignal<String>,
    cook_time: RcSignal<String>,
    difficulty: RcSignal<String>,
}

impl DraftSignals {
    fn new() -> Self {
        let RecipeDraft {
            title,
            description,
            ingredients,
            instructions,
            prep_time,
            cook_time,
            difficulty,
        } = RecipeDraft::default();
        Self {
            title: create_rc_signal(title),
            description: create_rc_signal(description),
            ingredients: create_rc_signal(ingredients),
            instructions: create_rc_signal(instructions),
            prep_time: create_rc_signal(prep_time),
            cook_time: create_rc_signal(cook_time),
            difficulty: create_rc_signal(difficulty),
        }
    }

    fn draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.get_untracked().as_ref().clone(),
            description: self.description.get_untracked().as_ref().clone(),
            ingredients: self.ingredients.get_untracked().as_ref().clone(),
            instructions: self.instructions.get_untracked().as_ref().clone(),
            prep_time: self.prep_time.get_untracked().as_ref().clone(),
            cook_time: self.cook_time.get_untracked().as_ref().clone(),
            difficulty: self.difficulty.get_untracked().as_ref().clone(),
        }
    }

    fn reset(&self) {
        let fresh = RecipeDraft::default();
        self.title.set(fresh.title);
        self.description.set(fresh.description);
        self.ingredients.set(fresh.ingredients);
        self.instructions.set(fresh.instructions);
        self.prep_time.set(fresh.prep_time);
        self.cook_time.set(fresh.cook_time);
        self.difficulty.set(fresh.difficulty);
    }
}

#[derive(Prop)]
pub struct RecipeFormProps<'ctx> {
    sh: StateHandler<'ctx>,
    visible: RcSignal<bool>,
}

#[component]
pub fn RecipeForm<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeFormProps<'ctx>) -> View<G> {
    let RecipeFormProps { sh, visible } = props;
    let fields = create_ref(cx, DraftSignals::new());
    let (title, description, ingredients, instructions) = (
        &*fields.title,
        &*fields.description,
        &*fields.ingredients,
        &*fields.instructions,
    );
    let (prep_time, cook_time, difficulty) =
        (&*fields.prep_time, &*fields.cook_time, &*fields.difficulty);
    let visible = create_ref(cx, visible);
    let options = View::new_fragment(
        Difficulty::ALL
            .iter()
            .map(|d| {
                let name = d.as_str();
                view! {cx, option(value=name) { (name) } }
            })
            .collect(),
    );
    view! {cx,
        div(class="recipe-form card") {
            h2 { "Create a New Recipe" }
            form(on:submit=move |ev: Event| {
                ev.prevent_default();
                let new_recipe = match fields.draft().to_new_recipe() {
                    Ok(r) => r,
                    Err(err) => {
                        error!(?err, "Invalid recipe draft");
                        if let Some(notice) = Failure::Create(err.into()).notice() {
                            Toaster::new(cx).notify(notice);
                        }
                        return;
                    }
                };
                debug!(title = %new_recipe.title, "Submitting recipe");
                sh.dispatch(cx, Message::CreateRecipe(new_recipe, Some(Box::new({
                    let (fields, visible) = (fields.clone(), visible.clone());
                    move || {
                        fields.reset();
                        visible.set(false);
                    }
                }))));
            }) {
                div(class="full-width") {
                    label(for="title") { "Title" }
                    input(type="text", id="title", name="title", placeholder="e.g., Classic Lasagna", required=true, bind:value=title)
                }
                div(class="full-width") {
                    label(for="description") { "Description" }
                    textarea(id="description", name="description", placeholder="A brief summary of your recipe", rows=2, bind:value=description)
                }
                div {
                    label(for="ingredients") { "Ingredients" }
                    textarea(id="ingredients", name="ingredients", placeholder="1 cup flour...", rows=4, bind:value=ingredients)
                }
                div {
                    label(for="instructions") { "Instructions" }
                    textarea(id="instructions", name="instructions", placeholder="Step 1: Mix flour...", rows=4, bind:value=instructions)
                }
                div {
                    label(for="prep_time") { "Prep Time (minutes)" }
                    input(type="number", id="prep_time", name="prepTime", min=0, bind:value=prep_time)
                }
                div {
                    label(for="cook_time") { "Cook Time (minutes)" }
                    input(type="number", id="cook_time", name="cookTime", min=0, bind:value=cook_time)
                }
                div {
                    label(for="difficulty") { "Difficulty" }
                    select(id="difficulty", name="difficulty", bind:value=difficulty) {
                        (options)
                    }
                }
                div(class="form-actions full-width") {
                    button(type="submit", class="save") { "Save Recipe" }
                }
            }
        }
    }
}
