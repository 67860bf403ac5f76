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
use client_api::memory::{DEMO_EMAIL, DEMO_PASSWORD};
use sycamore::prelude::*;
use tracing::{debug, info};
use web_sys::Event;

use crate::app_state::{Message, StateHandler};

#[derive(Prop)]
pub struct LoginFormProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[component]
pub fn LoginForm<'ctx, G: Html>(cx: Scope<'ctx>, props: LoginFormProps<'ctx>) -> View<G> {
    let LoginFormProps { sh } = props;
    let email = create_signal(cx, DEMO_EMAIL.to_owned());
    let password = create_signal(cx, DEMO_PASSWORD.to_owned());
    view! {cx,
        form(class="login-form", on:submit=move |ev: Event| {
            ev.prevent_default();
            info!("Attempting login request");
            let (email, password) = (
                email.get_untracked().as_ref().clone(),
                password.get_untracked().as_ref().clone(),
            );
            debug!(%email, "dispatching login");
            sh.dispatch(cx, Message::Login(email, password));
        }) {
            input(type="email", name="email", placeholder="Email address", autocomplete="username", required=true, bind:value=email)
            input(type="password", name="password", placeholder="Password", autocomplete="current-password", required=true, bind:value=password)
            button(type="submit") { "Login & Explore" }
            p(class="hint") {
                "Use the pre-filled admin credentials or sign up for a new account in the Admin Panel."
            }
        }
    }
}
