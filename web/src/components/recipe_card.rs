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
use recipes::{Difficulty, Recipe};
use sycamore::prelude::*;

pub fn badge_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "badge badge-easy",
        Difficulty::Medium => "badge badge-medium",
        Difficulty::Hard => "badge badge-hard",
    }
}

#[derive(Prop)]
pub struct RecipeCardProps {
    recipe: Recipe,
}

#[component]
pub fn RecipeCard<G: Html>(cx: Scope, props: RecipeCardProps) -> View<G> {
    let RecipeCardProps { recipe } = props;
    let badge = badge_class(recipe.difficulty);
    let difficulty = recipe.difficulty.as_str();
    let prep = format!("Prep: {}m", recipe.prep_time);
    let cook = format!("Cook: {}m", recipe.cook_time);
    let by = format!("By {}", recipe.owner_name());
    let photo = match recipe.thumbnail_url() {
        Some(url) => {
            let (url, alt) = (url.to_owned(), recipe.title.clone());
            view! {cx, img(class="recipe-photo", src=url, alt=alt) }
        }
        None => View::empty(),
    };
    let Recipe {
        title, description, ..
    } = recipe;
    view! {cx,
        article(class="recipe-card") {
            (photo)
            div(class="recipe-card-body") {
                header(class="recipe-card-header") {
                    h3 { (title) }
                    span(class=badge) { (difficulty) }
                }
                p(class="line-clamp-2") { (description) }
                footer(class="recipe-meta") {
                    span { (prep) }
                    span { (cook) }
                    span(class="recipe-owner") { (by) }
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::badge_class;
    use recipes::Difficulty;

    #[test]
    fn test_badge_class() {
        assert!(badge_class(Difficulty::Easy).ends_with("easy"));
        assert!(badge_class(Difficulty::Medium).ends_with("medium"));
        assert!(badge_class(Difficulty::Hard).ends_with("hard"));
    }
}
