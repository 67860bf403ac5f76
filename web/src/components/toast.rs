// Copyright 2023 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use anyhow::{anyhow, Result};
use sycamore::{easing, motion, prelude::*};
use tracing::{debug, error};
use web_sys::{Element, HtmlElement};

use crate::js_lib;
use crate::shell::{Level, Notice, Notify};

const SECTION_ID: &'static str = "toast-container";

#[component]
pub fn Container<G: Html>(cx: Scope) -> View<G> {
    view! {cx,
        section(id=SECTION_ID, aria-live="polite") { }
    }
}

fn get_container() -> Result<HtmlElement> {
    js_lib::get_element_by_id::<HtmlElement>(SECTION_ID)?
        .ok_or_else(|| anyhow!("No {} in the document", SECTION_ID))
}

fn create_output_element(msg: &str, class: &str) -> Result<Element> {
    let document = js_lib::get_document()?;
    let js_err = |e: wasm_bindgen::JsValue| anyhow!("{:?}", e);
    let output = document.create_element("output").map_err(js_err)?;
    let message_node = document.create_text_node(msg);
    output.set_attribute("class", class).map_err(js_err)?;
    output.set_attribute("role", "status").map_err(js_err)?;
    output.append_child(&message_node).map_err(js_err)?;
    Ok(output)
}

fn remove_oldest() -> Result<()> {
    let container = get_container()?;
    if let Some(node_to_remove) = container.first_element_child() {
        // Always remove the first child if there is one.
        container
            .remove_child(&node_to_remove)
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

fn show_toast<'a>(cx: Scope<'a>, msg: &str, class: &str, timeout: Option<chrono::Duration>) {
    let timeout = timeout
        .and_then(|t| t.to_std().ok())
        .unwrap_or_else(|| std::time::Duration::from_secs(3));
    let output_element = match create_output_element(msg, class) {
        Ok(el) => el,
        Err(err) => {
            error!(?err, msg, "Unable to create toast");
            return;
        }
    };
    // Always append after the last child.
    if let Err(err) = get_container().and_then(|c| {
        c.append_child(&output_element)
            .map_err(|e| anyhow!("{:?}", e))
    }) {
        error!(?err, msg, "Unable to show toast");
        return;
    }
    let tweened = motion::create_tweened_signal(cx, 0.0 as f32, timeout, easing::quad_in);
    tweened.set(1.0);
    create_effect_scoped(cx, move |_cx| {
        if !tweened.is_tweening() {
            debug!("Detected message timeout.");
            if let Err(err) = remove_oldest() {
                error!(?err, "Unable to remove toast");
            }
        }
    });
}

pub fn message<'a>(cx: Scope<'a>, msg: &str, timeout: Option<chrono::Duration>) {
    show_toast(cx, msg, "toast", timeout);
}

pub fn error_message<'a>(cx: Scope<'a>, msg: &str, timeout: Option<chrono::Duration>) {
    show_toast(cx, msg, "toast error", timeout);
}

/// Delivers notices as toasts.
#[derive(Clone, Copy)]
pub struct Toaster<'a> {
    cx: Scope<'a>,
}

impl<'a> Toaster<'a> {
    pub fn new(cx: Scope<'a>) -> Self {
        Self { cx }
    }
}

impl<'a> Notify for Toaster<'a> {
    fn notify(&self, notice: Notice) {
        match notice.level {
            Level::Info => message(self.cx, &notice.message, None),
            Level::Error => error_message(self.cx, &notice.message, None),
        }
    }
}
