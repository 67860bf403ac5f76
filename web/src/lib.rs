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
mod api;
mod app_state;
mod components;
mod config;
mod js_lib;
mod pages;
mod shell;
mod web;

use sycamore::prelude::*;
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};
use wasm_bindgen::prelude::wasm_bindgen;

use web::UI;

fn max_log_level() -> LevelFilter {
    if cfg!(feature = "debug_logs") {
        LevelFilter::from_level(Level::DEBUG)
    } else {
        LevelFilter::from_level(Level::INFO)
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    if cfg!(feature = "web") {
        console_error_panic_hook::set_once();
        let fmt_layer = fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_writer(tracing_web::MakeConsoleWriter);
        tracing_subscriber::registry()
            .with(fmt_layer.with_filter(max_log_level()))
            .init();
    }
    sycamore::render(|cx| view! { cx, UI() });
}
