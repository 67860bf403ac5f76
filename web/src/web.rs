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
use crate::pages::*;
use crate::{
    api::HttpStore,
    app_state::*,
    components::{toast, ConnectionStatus},
    config::Config,
};
use tracing::{info, instrument};

use sycamore::prelude::*;

fn screen_switch<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>, screen: Screen) -> View<G> {
    match screen {
        Screen::Loading => view! {cx,
            LoadingPage()
        },
        Screen::Landing => view! {cx,
            LandingPage(sh=sh)
        },
        Screen::Dashboard => view! {cx,
            DashboardPage(sh=sh)
        },
    }
}

#[instrument]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    let config = Config::from_document();
    info!(backend_url = config.backend_url(), app_id = config.app_id(), "Starting UI");
    let store = HttpStore::new(&config);
    provide_context(cx, config);
    let sh = get_state_handler(cx, AppState::new(), store);
    sh.dispatch(cx, Message::Init);
    let screen = sh.get_selector(cx, |state| state.get().screen);
    view! {cx,
        div(class="app") {
            ConnectionStatus(sh=sh)
            (screen_switch(cx, sh, *screen.get()))
            toast::Container()
        }
    }
}
