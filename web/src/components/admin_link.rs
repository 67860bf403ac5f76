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

use crate::config::Config;

/// Link to the backend's admin panel. It opens in a new browsing context.
#[component]
pub fn AdminLink<G: Html>(cx: Scope) -> View<G> {
    let href = use_context::<Config>(cx).admin_url();
    view! {cx,
        a(href=href, target="_blank", rel="noopener noreferrer", role="button", class="secondary outline") {
            "Admin Panel"
        }
    }
}
