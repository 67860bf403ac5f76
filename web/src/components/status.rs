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

use crate::app_state::StateHandler;

pub fn status_label(connected: bool) -> (&'static str, &'static str) {
    if connected {
        ("status-dot connected", "API Connected")
    } else {
        ("status-dot disconnected", "API Disconnected")
    }
}

#[derive(Prop)]
pub struct ConnectionStatusProps<'ctx> {
    sh: StateHandler<'ctx>,
}

/// Shows whether the last backend probe succeeded.
#[component]
pub fn ConnectionStatus<'ctx, G: Html>(
    cx: Scope<'ctx>,
    props: ConnectionStatusProps<'ctx>,
) -> View<G> {
    let ConnectionStatusProps { sh } = props;
    let connected = sh.get_selector(cx, |state| state.get().connected);
    let dot_class = create_memo(cx, move || status_label(*connected.get()).0);
    let label = create_memo(cx, move || status_label(*connected.get()).1);
    view! {cx,
        div(class="connection-status no-print") {
            span(class=dot_class.get()) { }
            span(class="status-label") { (label.get()) }
        }
    }
}
