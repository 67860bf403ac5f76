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

use crate::app_state::StateHandler;
use crate::components::{AdminLink, LoginForm};

#[derive(Prop)]
pub struct PageProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

#[component]
pub fn LandingPage<'ctx, G: Html>(cx: Scope<'ctx>, props: PageProps<'ctx>) -> View<G> {
    let PageProps { sh } = props;
    view! {cx,
        header(class="app-header") {
            h1(class="brand") { "Recipe Hub" }
            AdminLink()
        }
        main(class="landing") {
            section(class="hero") {
                h2 { "Find and Share Amazing Recipes" }
                p {
                    "Your personal cookbook in the cloud. Create, organize, and discover delicious recipes from a community of food lovers."
                }
            }
            section(class="card login-card") {
                h3 { "Try the Demo" }
                LoginForm(sh=sh)
            }
        }
    }
}
